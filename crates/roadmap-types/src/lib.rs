//! Roadmap Types - Wire records for the roadmap API
//!
//! These are the JSON shapes exchanged with the roadmap service and read from
//! the local roadmap fixture. They carry no behaviour beyond (de)serialization.
//!
//! ## Key Concepts
//!
//! - **Roadmap**: Top-level entity, identified by an `id`, holding a title,
//!   a description and the two collections below
//! - **EjeEstrategico**: Strategic axis grouping initiatives, with a display color
//! - **Iniciativa**: Initiative belonging to one eje, with scheduling, ownership,
//!   impact and a `certeza` commitment status
//! - **RoadmapFixture**: The local JSON document listing known roadmaps

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod fixture;
pub mod roadmap;
pub mod sample;

// Re-export main types
pub use fixture::{FixtureEntry, RoadmapFixture};
pub use roadmap::{CreateRoadmapRequest, EjeEstrategico, Iniciativa, Roadmap, RoadmapUpdate};
pub use sample::sample_update;
