use crate::error::{AtlasPushError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// atlaspush.toml schema - what to upload and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Target application, `owner/name`
    pub app: String,
    /// Let the uploader read VCS metadata and honor ignore files
    pub vcs: bool,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    /// Custom server endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Explicit uploader binary, used verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: String::new(),
            vcs: true,
            includes: Vec::new(),
            excludes: Vec::new(),
            address: None,
            token: None,
            uploader_path: None,
        }
    }
}

/// Values given on the command line, layered over the file config
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub app: Option<String>,
    pub vcs: Option<bool>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub address: Option<String>,
    pub token: Option<String>,
    pub uploader_path: Option<String>,
}

impl Config {
    /// Read atlaspush.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AtlasPushError::ConfigParseError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| AtlasPushError::ProjectConfigInvalid(e.to_string()))
    }

    /// Write atlaspush.toml
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AtlasPushError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(AtlasPushError::IoError)?;

        Ok(())
    }

    /// Append an include pattern
    pub fn include(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.includes.push(pattern.into());
        self
    }

    /// Append an exclude pattern
    pub fn exclude(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.excludes.push(pattern.into());
        self
    }

    /// Layer overrides on top of this config.
    ///
    /// Scalars set in `overrides` win. Include and exclude patterns are
    /// concatenated, file patterns first.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(app) = overrides.app {
            self.app = app;
        }
        if let Some(vcs) = overrides.vcs {
            self.vcs = vcs;
        }
        self.includes.extend(overrides.includes);
        self.excludes.extend(overrides.excludes);
        if overrides.address.is_some() {
            self.address = overrides.address;
        }
        if overrides.token.is_some() {
            self.token = overrides.token;
        }
        if overrides.uploader_path.is_some() {
            self.uploader_path = overrides.uploader_path;
        }
        self
    }

    /// Finalize using `ATLAS_TOKEN` from the process environment
    pub fn finalize(self) -> Self {
        let env_token = std::env::var(super::consts::env::TOKEN).ok();
        self.finalize_with(env_token)
    }

    /// Normalize optional values and apply the token fallback.
    ///
    /// Empty strings count as unset.
    pub fn finalize_with(mut self, env_token: Option<String>) -> Self {
        self.address = non_empty(self.address);
        self.uploader_path = non_empty(self.uploader_path);
        self.token = non_empty(self.token).or_else(|| non_empty(env_token));
        self
    }

    /// Check that the config is complete enough to push.
    ///
    /// All problems are reported at once.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.app.trim().is_empty() {
            problems.push("app is required".to_string());
        } else if !is_app_name(&self.app) {
            problems.push(format!(
                "app '{}' must be in the form 'owner/name'",
                self.app
            ));
        }

        if self.token.as_deref().is_none_or(str::is_empty) {
            problems.push(format!(
                "token is required (set `token` or the {} environment variable)",
                super::consts::env::TOKEN
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AtlasPushError::ConfigInvalid { problems })
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_app_name(app: &str) -> bool {
    match app.split_once('/') {
        Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
        None => false,
    }
}
