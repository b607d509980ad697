//! CLI configuration

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Roadmap API endpoint used when neither flag, env nor config sets one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8081";

/// Fixture read by `update` when neither flag, env nor config sets one
pub const DEFAULT_FIXTURE: &str = "frontend/DATOS/roadmap_angular_mvp.json";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Roadmap API endpoint
    pub endpoint: Option<String>,

    /// Roadmap fixture path
    pub fixture: Option<PathBuf>,

    /// Request timeout in seconds (unset: no timeout)
    pub timeout_seconds: Option<u64>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(CliConfig::default()),
            },
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|source| {
                CliError::FileAccess {
                    path: config_path.clone(),
                    source,
                }
            })?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("roadmap-probe").join("config.toml"))
    }

    /// Flag/env value first, then the config file, then the built-in default
    pub fn resolve_endpoint(&self, cli_endpoint: Option<&str>) -> String {
        cli_endpoint
            .map(str::to_string)
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Same precedence as [`CliConfig::resolve_endpoint`]
    pub fn resolve_fixture(&self, cli_fixture: Option<PathBuf>) -> PathBuf {
        cli_fixture
            .or_else(|| self.fixture.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
