//! Uploader binary resolution and hand-off for atlaspush.
//!
//! This crate finds the `atlas-upload` helper and replaces the current
//! process with it, passing the push configuration as command-line flags.
//!
//! # Architecture
//!
//! - [`info`]: Where a resolved uploader came from
//! - [`resolve`]: Binary resolution with a three-tier search
//! - [`exec`]: Command-line construction and process replacement
//! - [`push`]: The two combined
//! - [`system`]: Real implementations of the capability traits
//!
//! # Binary Resolution Flow
//!
//! ```text
//! resolve_uploader()
//!     ↓
//! 1. Config override
//!     → uploader_path, used verbatim
//!     ↓ (unset)
//! 2. Installer embedded dir (only when running in the installer)
//!     → {embedded_dir}/bin/atlas-upload, must exist
//!     ↓ (not found)
//! 3. System PATH
//!     → which::which("atlas-upload")
//!     ↓ (not found)
//! 4. NotFound with searched locations
//! ```
//!
//! # Example
//!
//! ```no_run
//! use atlaspush_core::{Config, ProcessEnvironment};
//! use atlaspush_uploader::Push;
//!
//! # fn main() -> atlaspush_core::Result<()> {
//! let env = ProcessEnvironment::detect()?;
//! let config = Config {
//!     app: "hashicorp/example".to_string(),
//!     ..Config::default()
//! }
//! .finalize();
//!
//! // Only returns if the uploader could not be found or launched
//! let err = Push::new(&env, &config).push().unwrap_err();
//! eprintln!("push failed: {err}");
//! # Ok(())
//! # }
//! ```

pub mod exec;
pub mod info;
pub mod push;
pub mod resolve;
pub mod system;

// Re-export commonly used types
pub use exec::{Invocation, exec_uploader};
pub use info::{UploaderInfo, UploaderSource};
pub use push::Push;
pub use resolve::{ResolveResult, UPLOADER_BIN, embedded_uploader_path, resolve_uploader};
pub use system::{SafeExec, StdFileSystem, WhichSearchPath};
