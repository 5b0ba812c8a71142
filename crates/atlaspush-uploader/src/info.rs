use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploaderSource {
    /// `uploader_path` from the config
    Override,
    /// Embedded tools directory of a bundled installer
    Installer,
    /// System search path
    Path,
}

impl fmt::Display for UploaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploaderSource::Override => write!(f, "configured uploader_path"),
            UploaderSource::Installer => write!(f, "installer embedded dir"),
            UploaderSource::Path => write!(f, "system PATH"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploaderInfo {
    pub source: UploaderSource,
    /// Kept as a string: overrides are passed through without normalization
    pub path: String,
}
