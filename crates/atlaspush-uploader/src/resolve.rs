use crate::info::{UploaderInfo, UploaderSource};
use atlaspush_core::{AtlasPushError, Config, Environment, FileSystem, SearchPath};
use std::path::PathBuf;

/// Logical name of the uploader binary
pub const UPLOADER_BIN: &str = "atlas-upload";

/// Result of uploader binary resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveResult {
    Resolved(UploaderInfo),
    NotFound {
        binary: String,
        searched_locations: Vec<String>,
    },
}

impl ResolveResult {
    /// The resolved path, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            ResolveResult::Resolved(info) => Some(&info.path),
            ResolveResult::NotFound { .. } => None,
        }
    }

    /// Convert into the resolved info or an `UploaderNotFound` error
    pub fn into_result(self) -> atlaspush_core::Result<UploaderInfo> {
        match self {
            ResolveResult::Resolved(info) => Ok(info),
            ResolveResult::NotFound {
                binary,
                searched_locations,
            } => Err(AtlasPushError::UploaderNotFound {
                binary,
                searched_locations,
            }),
        }
    }
}

/// Location of the uploader inside an installer's embedded tools dir
pub fn embedded_uploader_path(embedded_dir: impl Into<PathBuf>) -> PathBuf {
    embedded_dir
        .into()
        .join("bin")
        .join(format!("{}{}", UPLOADER_BIN, std::env::consts::EXE_SUFFIX))
}

/// Resolve the uploader binary
///
/// Resolution priority, first match wins:
/// 1. `uploader_path` from the config, verbatim and unchecked
/// 2. `<embedded_dir>/bin/atlas-upload` when running in the installer and the file exists
/// 3. System PATH
/// 4. NotFound
///
/// Discovered paths are returned as UTF-8, converted lossily if needed.
pub fn resolve_uploader<E, S, F>(env: &E, config: &Config, search: &S, fs: &F) -> ResolveResult
where
    E: Environment + ?Sized,
    S: SearchPath + ?Sized,
    F: FileSystem + ?Sized,
{
    let mut searched_locations = Vec::new();

    if let Some(path) = config.uploader_path.as_deref().filter(|p| !p.is_empty()) {
        log::debug!("using configured uploader_path {}", path);
        return ResolveResult::Resolved(UploaderInfo {
            source: UploaderSource::Override,
            path: path.to_string(),
        });
    }

    if env.is_running_in_installer() {
        if let Some(dir) = env.installer_embedded_dir() {
            let candidate = embedded_uploader_path(dir);
            if fs.is_file(&candidate) {
                log::debug!("found uploader in installer: {}", candidate.display());
                return ResolveResult::Resolved(UploaderInfo {
                    source: UploaderSource::Installer,
                    path: candidate.to_string_lossy().into_owned(),
                });
            }
            log::debug!("no uploader at {}", candidate.display());
            searched_locations.push(candidate.display().to_string());
        }
    }

    match search.lookup(UPLOADER_BIN) {
        Some(path) => {
            log::debug!("found uploader in PATH: {}", path.display());
            ResolveResult::Resolved(UploaderInfo {
                source: UploaderSource::Path,
                path: path.to_string_lossy().into_owned(),
            })
        }
        None => {
            searched_locations.push("system PATH".to_string());
            ResolveResult::NotFound {
                binary: UPLOADER_BIN.to_string(),
                searched_locations,
            }
        }
    }
}
