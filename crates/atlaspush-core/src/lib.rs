// Core modules
pub mod config;
pub mod env;
pub mod error;
pub mod system;

// Re-export commonly used types
pub use config::{Config, ConfigOverrides};
pub use env::{Environment, ProcessEnvironment};
pub use error::{AtlasPushError, Result};
pub use system::{FileSystem, ProcessReplacer, SearchPath};
