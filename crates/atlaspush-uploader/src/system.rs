//! Implementations of the capability traits backed by the real system

use atlaspush_core::{FileSystem, ProcessReplacer, SearchPath};
use std::convert::Infallible;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Looks binaries up on `PATH` with the `which` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct WhichSearchPath;

impl SearchPath for WhichSearchPath {
    fn lookup(&self, binary_name: &str) -> Option<PathBuf> {
        match which::which(binary_name) {
            Ok(path) => Some(path),
            Err(e) => {
                log::debug!("{} not found in PATH: {}", binary_name, e);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Replaces the current process with the target executable.
///
/// Standard streams and environment variables are inherited unchanged.
/// On Unix this is `execvp`. Elsewhere the child is spawned, waited on, and
/// the current process exits with the child's status.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeExec;

impl ProcessReplacer for SafeExec {
    #[cfg(unix)]
    fn replace(&self, executable: &str, args: &[String]) -> Result<Infallible, io::Error> {
        use std::os::unix::process::CommandExt;

        // exec() only returns on failure
        Err(Command::new(executable).args(args).exec())
    }

    #[cfg(not(unix))]
    fn replace(&self, executable: &str, args: &[String]) -> Result<Infallible, io::Error> {
        let status = Command::new(executable).args(args).status()?;
        std::process::exit(status.code().unwrap_or(1))
    }
}
