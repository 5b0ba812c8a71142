//! Execution environment of a push
//!
//! The push only ever sees the [`Environment`] trait. [`ProcessEnvironment`]
//! is the implementation backed by the real process state; tests pass
//! fixtures instead.

use crate::config::consts::{CONFIG_FILE, env as env_vars};
use crate::error::{AtlasPushError, Result};
use std::path::{Path, PathBuf};

/// Read-only facts about where a push runs
pub trait Environment {
    /// Directory the push operates against
    fn root_path(&self) -> &Path;

    /// Whether the process runs from inside a bundled installer
    fn is_running_in_installer(&self) -> bool;

    /// Embedded tools directory of the installer.
    ///
    /// Only meaningful when [`Environment::is_running_in_installer`] is true.
    fn installer_embedded_dir(&self) -> Option<PathBuf>;
}

/// Environment derived from the current process
#[derive(Debug, Clone)]
pub struct ProcessEnvironment {
    root: PathBuf,
    embedded_dir: Option<PathBuf>,
}

impl ProcessEnvironment {
    /// Detect the environment from the current directory and variables
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined
    pub fn detect() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let root = find_root(&current_dir).unwrap_or(current_dir);
        Ok(Self::with_root(root))
    }

    /// Use an explicit root directory
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not an existing directory
    pub fn at(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AtlasPushError::ProjectRootInvalid { path: root });
        }
        Ok(Self::with_root(root))
    }

    fn with_root(root: PathBuf) -> Self {
        let embedded_dir = std::env::var_os(env_vars::INSTALLER_EMBEDDED_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::from_parts(root, embedded_dir)
    }

    /// Build from explicit parts. The embedded dir only counts when it exists.
    pub fn from_parts(root: PathBuf, embedded_dir: Option<PathBuf>) -> Self {
        let embedded_dir = embedded_dir.filter(|dir| dir.is_dir());
        if let Some(dir) = &embedded_dir {
            log::debug!("running in installer, embedded dir {}", dir.display());
        }
        Self { root, embedded_dir }
    }
}

impl Environment for ProcessEnvironment {
    fn root_path(&self) -> &Path {
        &self.root
    }

    fn is_running_in_installer(&self) -> bool {
        self.embedded_dir.is_some()
    }

    fn installer_embedded_dir(&self) -> Option<PathBuf> {
        self.embedded_dir.clone()
    }
}

/// Find the nearest directory at or above `start` containing atlaspush.toml
pub fn find_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file())
        .map(Path::to_path_buf)
}
