//! Names shared across the workspace

/// Project configuration file, looked up from the current directory upward
pub const CONFIG_FILE: &str = "atlaspush.toml";

/// Environment variables consulted at runtime
pub mod env {
    /// Fallback credential used when the config does not carry a token
    pub const TOKEN: &str = "ATLAS_TOKEN";

    /// Embedded tools directory of a bundled installation.
    /// Set only when running from inside the installer.
    pub const INSTALLER_EMBEDDED_DIR: &str = "ATLASPUSH_INSTALLER_EMBEDDED_DIR";
}
