//! Configuration management for vollab.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::Locale;
use crate::model::Region;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "vollab";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `VOLLAB_`)
/// 2. TOML config file at `~/.config/vollab/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mock service configuration.
    pub service: ServiceConfig,
    /// Volunteer defaults.
    pub volunteer: VolunteerConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Mock service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Simulated latency of lab operations in milliseconds.
    pub latency_ms: u64,
    /// Simulated latency of login in milliseconds.
    pub auth_latency_ms: u64,
    /// Simulated latency of signup in milliseconds.
    pub signup_latency_ms: u64,
    /// The secret that admits an administrator.
    pub admin_secret: String,
    /// Load the demo labs into a fresh store.
    pub seed_demo_labs: bool,
}

/// Defaults applied to volunteer identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerConfig {
    /// Region assigned to a volunteer who logs in.
    pub default_region: Region,
}

/// Display-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Locale the volunteer dashboard starts in.
    pub default_locale: Locale,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            auth_latency_ms: 800,
            signup_latency_ms: 1000,
            admin_secret: "1111".to_string(),
            seed_demo_labs: true,
        }
    }
}

impl Default for VolunteerConfig {
    fn default() -> Self {
        Self {
            default_region: Region::Maharashtra,
        }
    }
}

impl ServiceConfig {
    /// A configuration with every latency set to zero, for tests and scripts.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            latency_ms: 0,
            auth_latency_ms: 0,
            signup_latency_ms: 0,
            ..Self::default()
        }
    }

    /// Latency of lab operations.
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Latency of login.
    #[must_use]
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    /// Latency of signup.
    #[must_use]
    pub fn signup_latency(&self) -> Duration {
        Duration::from_millis(self.signup_latency_ms)
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `VOLLAB_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("VOLLAB_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a file that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigMissing`] if the file does not exist, or any
    /// loading or validation error.
    pub fn load_existing(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigMissing { path });
        }
        Self::load_from(Some(path))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.service.admin_secret.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "admin_secret must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
