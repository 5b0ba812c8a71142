//! Global context for CLI commands

use anyhow::Result;
use atlaspush_core::config::consts::CONFIG_FILE;
use atlaspush_core::{Config, ConfigOverrides, Environment, ProcessEnvironment};
use std::path::PathBuf;

/// Environment plus the finalized config for one command
pub struct Context {
    pub env: ProcessEnvironment,
    pub config: Config,
    /// Whether atlaspush.toml was present at the root
    pub config_found: bool,
}

impl Context {
    /// Detect the environment, then load, merge and finalize the config
    ///
    /// A missing atlaspush.toml is not an error; everything can come from
    /// the command line.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root directory does not exist
    /// - The config file exists but cannot be read or parsed
    pub fn new(root: Option<PathBuf>, overrides: ConfigOverrides) -> Result<Self> {
        let env = match root {
            Some(root) => ProcessEnvironment::at(root)?,
            None => ProcessEnvironment::detect()?,
        };

        let config_path = env.root_path().join(CONFIG_FILE);
        let config_found = config_path.is_file();
        let file_config = if config_found {
            log::debug!("loading {}", config_path.display());
            Config::from_file(&config_path)?
        } else {
            log::debug!("no {} in {}", CONFIG_FILE, env.root_path().display());
            Config::default()
        };

        let config = file_config.merge(overrides).finalize();

        Ok(Self {
            env,
            config,
            config_found,
        })
    }
}
