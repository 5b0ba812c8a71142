//! Narrow interfaces over the operating system primitives a push needs

use std::convert::Infallible;
use std::io;
use std::path::{Path, PathBuf};

/// Resolves a bare executable name against the system search path
pub trait SearchPath {
    fn lookup(&self, binary_name: &str) -> Option<PathBuf>;
}

/// Filesystem queries
pub trait FileSystem {
    fn is_file(&self, path: &Path) -> bool;
}

/// Replaces the current process image with another executable.
///
/// `Ok` is uninhabited: a successful call never returns. `Err` carries the
/// operating-system failure from the launch attempt.
pub trait ProcessReplacer {
    fn replace(&self, executable: &str, args: &[String]) -> Result<Infallible, io::Error>;
}

impl<T: SearchPath + ?Sized> SearchPath for &T {
    fn lookup(&self, binary_name: &str) -> Option<PathBuf> {
        (**self).lookup(binary_name)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}

impl<T: ProcessReplacer + ?Sized> ProcessReplacer for &T {
    fn replace(&self, executable: &str, args: &[String]) -> Result<Infallible, io::Error> {
        (**self).replace(executable, args)
    }
}
