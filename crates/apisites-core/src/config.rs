//! Configuration management for apisites.
//!
//! Configuration is stored in TOML format and supports environment variable
//! overrides.
//!
//! ## Resolution Order
//!
//! 1. **Config file**: `config.toml` in the platform config directory, or in
//!    `$APISITES_CONFIG_DIR` when set
//! 2. **Environment variables**: `APISITES_PROFILE` overrides the default profile
//! 3. **Command line**: callers apply their own flags last
//!
//! ## Example Configuration File
//!
//! ```toml
//! [defaults]
//! profile = "customer"
//!
//! [paths]
//! profiles_dir = "/home/user/.config/apisites/profiles"
//! ```
//!
//! ## Examples
//!
//! ```rust,no_run
//! use apisites_core::Config;
//!
//! let config = Config::load()?;
//! println!("Default profile: {}", config.defaults.profile);
//! # Ok::<(), apisites_core::Error>(())
//! ```

use crate::profiles::CUSTOMER_PROFILE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternate config directory.
pub const CONFIG_DIR_ENV: &str = "APISITES_CONFIG_DIR";
/// Environment variable overriding `defaults.profile`.
pub const PROFILE_ENV: &str = "APISITES_PROFILE";

const CONFIG_FILE: &str = "config.toml";

/// Global configuration for apisites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default selections
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// File system paths configuration
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Defaults applied when the caller does not choose explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Profile loaded when none is requested.
    pub profile: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            profile: CUSTOMER_PROFILE.to_string(),
        }
    }
}

/// File system paths configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding user-defined profile files (`<name>.toml` / `<name>.json`).
    ///
    /// Defaults to `profiles/` next to the config file.
    pub profiles_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let base = config_dir().unwrap_or_else(|_| PathBuf::from(".apisites"));
        Self {
            profiles_dir: base.join("profiles"),
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    ///
    /// `APISITES_PROFILE` is applied on top of whatever the file says.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, or the
    /// config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&config_dir()?.join(CONFIG_FILE))?;
        if let Some(profile) = std::env::var(PROFILE_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
        {
            tracing::debug!("Using profile '{}' from {}", profile, PROFILE_ENV);
            config.defaults.profile = profile;
        }
        Ok(config)
    }

    /// Load configuration from an explicit file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_dir()?.join(CONFIG_FILE))
    }

    /// Save the configuration to an explicit file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::Config("Invalid config path".into()))?;

        fs::create_dir_all(parent)
            .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content).map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;

        Ok(())
    }

    /// Path of the config file in use.
    pub fn config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE))
    }
}

/// Directory holding `config.toml`.
///
/// `$APISITES_CONFIG_DIR` wins; otherwise the platform config directory:
/// - Linux: `~/.config/apisites`
/// - macOS: `~/Library/Application Support/dev.apisites.apisites`
/// - Windows: `%APPDATA%\apisites\apisites\config`
fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let project_dirs = directories::ProjectDirs::from("dev", "apisites", "apisites")
        .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
    Ok(project_dirs.config_dir().to_path_buf())
}
