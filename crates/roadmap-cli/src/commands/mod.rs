//! CLI command implementations

pub mod roadmap;
pub mod update;

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use roadmap_types::sample_update;

/// `payload`: show the built-in update without sending it
pub fn payload(format: OutputFormat) -> CliResult<()> {
    output::print_single(&sample_update(), format)
}
