//! Test utilities for atlaspush
//!
//! This crate provides shared testing utilities used across the atlaspush workspace:
//! scratch directories, executable stubs and in-memory implementations of the
//! capability traits from `atlaspush_core`.

use atlaspush_core::{Environment, FileSystem, ProcessReplacer, SearchPath};
use std::cell::RefCell;
use std::convert::Infallible;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps all test scratch files in one gitignored location.
/// The directory is removed when the returned `TempDir` is dropped.
///
/// # Panics
///
/// Panics if the current directory or `.tmp/` cannot be used
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Write an executable file, creating parent directories
///
/// On Unix the file is made executable (0o755).
///
/// # Panics
///
/// Panics if the file cannot be written
pub fn write_executable(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, contents).expect("Failed to write executable");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).unwrap();
    }
}

/// Fixed environment for tests
///
/// Running in the installer iff an embedded dir was given. Existence of the
/// directory is not checked.
#[derive(Debug, Clone)]
pub struct FakeEnvironment {
    pub root: PathBuf,
    pub embedded_dir: Option<PathBuf>,
}

impl FakeEnvironment {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            embedded_dir: None,
        }
    }

    pub fn in_installer(mut self, embedded_dir: impl Into<PathBuf>) -> Self {
        self.embedded_dir = Some(embedded_dir.into());
        self
    }
}

impl Environment for FakeEnvironment {
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

/// Search path returning a fixed answer and recording every lookup
#[derive(Debug, Default)]
pub struct FakeSearchPath {
    result: Option<PathBuf>,
    lookups: RefCell<Vec<String>>,
}

impl FakeSearchPath {
    /// A search path that finds nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// A search path that resolves every name to `path`
    pub fn returning(path: impl Into<PathBuf>) -> Self {
        Self {
            result: Some(path.into()),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Names looked up so far, in call order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl SearchPath for FakeSearchPath {
    fn lookup(&self, binary_name: &str) -> Option<PathBuf> {
        self.lookups.borrow_mut().push(binary_name.to_string());
        self.result.clone()
    }
}

/// Filesystem backed by a fixed list of existing files
#[derive(Debug, Default)]
pub struct FakeFileSystem {
    files: Vec<PathBuf>,
    queries: RefCell<Vec<PathBuf>>,
}

impl FakeFileSystem {
    pub fn with_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Paths queried so far, in call order
    pub fn queries(&self) -> Vec<PathBuf> {
        self.queries.borrow().clone()
    }
}

impl FileSystem for FakeFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.queries.borrow_mut().push(path.to_path_buf());
        self.files.iter().any(|f| f == path)
    }
}

/// A recorded process replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceCall {
    pub executable: String,
    pub args: Vec<String>,
}

/// Process replacer that records calls instead of replacing the process.
///
/// Every call fails with the configured error kind, since the only way to
/// return from a replacement is a launch failure.
#[derive(Debug)]
pub struct RecordingReplacer {
    kind: io::ErrorKind,
    calls: RefCell<Vec<ReplaceCall>>,
}

impl Default for RecordingReplacer {
    fn default() -> Self {
        Self::failing_with(io::ErrorKind::Other)
    }
}

impl RecordingReplacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ReplaceCall> {
        self.calls.borrow().clone()
    }
}

impl ProcessReplacer for RecordingReplacer {
    fn replace(&self, executable: &str, args: &[String]) -> Result<Infallible, io::Error> {
        self.calls.borrow_mut().push(ReplaceCall {
            executable: executable.to_string(),
            args: args.to_vec(),
        });
        Err(io::Error::new(self.kind, "recorded, not executed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_search_path_records_lookups() {
        let search = FakeSearchPath::returning("/usr/bin/tool");
        assert_eq!(search.lookup("tool"), Some(PathBuf::from("/usr/bin/tool")));
        assert_eq!(search.lookups(), vec!["tool"]);

        let empty = FakeSearchPath::empty();
        assert_eq!(empty.lookup("tool"), None);
    }

    #[test]
    fn test_recording_replacer_fails_with_kind() {
        let replacer = RecordingReplacer::failing_with(io::ErrorKind::NotFound);
        let err = replacer.replace("x", &["x".to_string()]).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(replacer.calls().len(), 1);
        assert_eq!(replacer.calls()[0].executable, "x");
    }

    #[test]
    fn test_write_executable_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bin").join("tool");
        write_executable(&path, "#!/bin/sh\nexit 0\n");
        assert!(path.is_file());
    }
}
