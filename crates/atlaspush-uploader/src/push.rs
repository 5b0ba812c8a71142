use crate::exec::{Invocation, exec_uploader};
use crate::resolve::{ResolveResult, resolve_uploader};
use crate::system::{SafeExec, StdFileSystem, WhichSearchPath};
use atlaspush_core::{Config, Environment, FileSystem, ProcessReplacer, Result, SearchPath};
use std::convert::Infallible;

/// A single push: resolve the uploader, then hand the process over to it.
///
/// Holds no state of its own beyond borrowed inputs and the system
/// primitives it runs on.
pub struct Push<'a, E: ?Sized, S = WhichSearchPath, F = StdFileSystem, R = SafeExec> {
    env: &'a E,
    config: &'a Config,
    search: S,
    fs: F,
    replacer: R,
}

impl<'a, E> Push<'a, E>
where
    E: Environment + ?Sized,
{
    /// Push backed by the real PATH, filesystem and `exec`
    pub fn new(env: &'a E, config: &'a Config) -> Self {
        Self::with_system(env, config, WhichSearchPath, StdFileSystem, SafeExec)
    }
}

impl<'a, E, S, F, R> Push<'a, E, S, F, R>
where
    E: Environment + ?Sized,
    S: SearchPath,
    F: FileSystem,
    R: ProcessReplacer,
{
    pub fn with_system(env: &'a E, config: &'a Config, search: S, fs: F, replacer: R) -> Self {
        Self {
            env,
            config,
            search,
            fs,
            replacer,
        }
    }

    /// Resolve the uploader, keeping track of where it came from
    pub fn resolve(&self) -> ResolveResult {
        resolve_uploader(self.env, self.config, &self.search, &self.fs)
    }

    /// Path of the uploader to run, if one can be found
    pub fn uploader_path(&self) -> Option<String> {
        self.resolve().path().map(str::to_string)
    }

    /// Command line the uploader at `path` would be started with
    pub fn invocation(&self, path: &str) -> Invocation {
        Invocation::new(path, self.config, self.env.root_path())
    }

    /// Replace the current process with the uploader at `path`
    pub fn execute(&self, path: &str) -> Result<Infallible> {
        exec_uploader(&self.invocation(path), &self.replacer)
    }

    /// Run the push.
    ///
    /// Never returns `Ok`. Fails with `UploaderNotFound` before anything is
    /// launched, or with the launch error itself.
    pub fn push(&self) -> Result<Infallible> {
        let info = self.resolve().into_result()?;
        log::debug!("uploader resolved from {}: {}", info.source, info.path);
        self.execute(&info.path)
    }
}
