//! Reading the roadmap fixture and update payload files

use crate::error::{CliError, CliResult, ParseOrigin};
use roadmap_types::{RoadmapFixture, RoadmapUpdate};
use std::path::Path;
use tracing::debug;

fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and parse the roadmap fixture
pub fn load_fixture(path: &Path) -> CliResult<RoadmapFixture> {
    debug!(path = %path.display(), "Loading roadmap fixture");
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|source| CliError::Parse {
        origin: ParseOrigin::Fixture,
        source: Box::new(source),
    })
}

/// Load an update payload (YAML by extension, JSON otherwise)
pub fn load_payload(path: &Path) -> CliResult<RoadmapUpdate> {
    debug!(path = %path.display(), "Loading update payload");
    let contents = read_file(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    let parsed: Result<RoadmapUpdate, Box<dyn std::error::Error + Send + Sync>> = if is_yaml {
        serde_yaml::from_str(&contents).map_err(Into::into)
    } else {
        serde_json::from_str(&contents).map_err(Into::into)
    };
    parsed.map_err(|source| CliError::Parse {
        origin: ParseOrigin::Payload,
        source,
    })
}
