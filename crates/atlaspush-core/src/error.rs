use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasPushError {
    // Project errors
    #[error("PROJECT_ROOT_INVALID: '{path}' is not a directory")]
    ProjectRootInvalid { path: PathBuf },

    #[error("PROJECT_CONFIG_INVALID: failed to parse atlaspush.toml: {0}")]
    ProjectConfigInvalid(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: {}", problems.join("; "))]
    ConfigInvalid { problems: Vec<String> },

    // Uploader errors
    #[error(
        "UPLOADER_NOT_FOUND: '{binary}' could not be found (searched: {})",
        searched_locations.join(", ")
    )]
    UploaderNotFound {
        binary: String,
        searched_locations: Vec<String>,
    },

    /// Failure reported by the process-replace primitive, passed through as-is.
    #[error(transparent)]
    Launch(std::io::Error),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl AtlasPushError {
    /// Whether this error came from the launch itself rather than discovery.
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, AtlasPushError::Launch(_))
    }
}

pub type Result<T> = std::result::Result<T, AtlasPushError>;
