// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Whether the boot sequence starts animating when the TUI launches
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Override the deck's boot-step interval (milliseconds)
    #[serde(default)]
    pub step_interval_ms: Option<u64>,

    /// Override the deck's boot loop flag (false holds at the last step)
    #[serde(default)]
    pub loop_boot: Option<bool>,

    /// Override every section ticker's interval (milliseconds)
    #[serde(default)]
    pub ticker_interval_ms: Option<u64>,

    /// Simulated access-request submission delay (milliseconds)
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Path to a deck file to load instead of the bundled deck
    #[serde(default)]
    pub deck: Option<String>,
}

fn default_autoplay() -> bool {
    true
}

fn default_submit_delay_ms() -> u64 {
    1000
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("launchdeck")
        } else {
            // Linux, Windows and others
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("launchdeck")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            let config: Config = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?;

            Ok(config)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {}", e);
                eprintln!(
                    "Using built-in defaults. Run 'launchdeck init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}
