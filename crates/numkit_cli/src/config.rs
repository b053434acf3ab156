//! numkit configuration file handling

use anyhow::{Context, Result};
use numkit_animation::Easing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "numkit.toml";

/// Top-level configuration (numkit.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NumkitConfig {
    #[serde(default)]
    pub animate: AnimateConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

/// Defaults for `numkit animate`
#[derive(Debug, Deserialize, Serialize)]
pub struct AnimateConfig {
    /// Sampling period in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Easing curve name
    #[serde(default = "default_easing")]
    pub easing: String,
}

fn default_interval_ms() -> u64 {
    20
}

fn default_easing() -> String {
    "linear".to_string()
}

impl Default for AnimateConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            easing: default_easing(),
        }
    }
}

impl AnimateConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn easing(&self) -> Result<Easing> {
        self.easing
            .parse()
            .with_context(|| format!("Invalid [animate] easing in {CONFIG_FILE}"))
    }
}

/// Seeding for commands that draw random numbers
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RandomConfig {
    /// Fixed seed; a clock-derived seed is used when absent
    #[serde(default)]
    pub seed: Option<i64>,
}

impl NumkitConfig {
    /// Load configuration from a file or a directory containing numkit.toml.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
