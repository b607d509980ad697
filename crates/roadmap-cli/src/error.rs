//! CLI error types

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which document failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOrigin {
    /// The local roadmap fixture
    Fixture,
    /// A user-supplied update payload file
    Payload,
    /// A response body from the roadmap API
    Response,
}

impl fmt::Display for ParseOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOrigin::Fixture => write!(f, "fixture"),
            ParseOrigin::Payload => write!(f, "payload"),
            ParseOrigin::Response => write!(f, "response"),
        }
    }
}

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Fixture or payload file missing or unreadable
    #[error("Cannot read {}: {source}", .path.display())]
    FileAccess {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Malformed fixture, payload or response document
    #[error("Cannot parse {origin}: {source}")]
    Parse {
        /// Document that failed to parse
        origin: ParseOrigin,
        /// Underlying JSON or YAML error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the roadmap API
    #[error("HTTP error: {status} - {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// 404 from the roadmap API
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or encoding error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// True for any non-2xx answer from the server
    pub fn is_http(&self) -> bool {
        matches!(self, CliError::Http { .. } | CliError::NotFound(_))
    }

    /// Status code of an HTTP failure, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            CliError::Http { status, .. } => Some(*status),
            CliError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_message_names_path() {
        let err = CliError::FileAccess {
            path: PathBuf::from("frontend/DATOS/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("frontend/DATOS/missing.json"));
        assert!(message.contains("no such file"));
        assert!(!err.is_http());
    }

    #[test]
    fn test_parse_message_names_origin() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = CliError::Parse {
            origin: ParseOrigin::Response,
            source: Box::new(source),
        };
        assert!(err.to_string().starts_with("Cannot parse response: "));

        let source = serde_yaml::from_str::<serde_json::Value>("a: [").unwrap_err();
        let err = CliError::Parse {
            origin: ParseOrigin::Payload,
            source: Box::new(source),
        };
        assert!(err.to_string().starts_with("Cannot parse payload: "));
    }

    #[test]
    fn test_http_status() {
        let err = CliError::Http {
            status: 500,
            message: "Internal error".into(),
        };
        assert!(err.is_http());
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP error: 500 - Internal error");

        let not_found = CliError::NotFound("/api/roadmaps/x".into());
        assert!(not_found.is_http());
        assert_eq!(not_found.status(), Some(404));

        assert_eq!(CliError::Config("bad".into()).status(), None);
    }
}
