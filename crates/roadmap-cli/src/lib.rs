//! Roadmap CLI - fixture-driven prober for the roadmap API
//!
//! The `update` command reads the local roadmap fixture, picks the first
//! roadmap, sends one `PUT /api/roadmaps/{id}` with a hand-authored payload
//! and prints what the server stored. The remaining commands list, fetch and
//! create roadmaps against the same API.

#![deny(unsafe_code)]

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod fixture;
pub mod output;
pub mod report;

pub use client::RoadmapClient;
pub use commands::update::{UpdateArgs, UpdateOutcome};
pub use config::CliConfig;
pub use error::{CliError, CliResult, ParseOrigin};
