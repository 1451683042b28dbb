//! Configuration management for the Perito UI library
//!
//! This module handles loading, parsing, and validation of the library's
//! configuration file. Everything has a default matching the pages' built-in
//! behavior, so hosts without a config file get the standard timings and
//! storage locations.

use crate::constants::{APP_DIR_NAME, NOTIFICATION_FADE_MS, NOTIFICATION_VISIBLE_MS};
use crate::utils::date;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub notifications: NotificationsConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Notification lifecycle timings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// How long a banner stays fully visible, in milliseconds
    pub visible_ms: u64,
    /// Fade-out transition length before removal, in milliseconds
    pub fade_ms: u64,
}

/// Preference storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Preference file location; unset selects the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging in the host application
    pub enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            visible_ms: NOTIFICATION_VISIBLE_MS,
            fade_ms: NOTIFICATION_FADE_MS,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("perito-ui.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.notifications.visible_ms == 0 {
            anyhow::bail!("notifications.visible_ms must be greater than 0");
        }
        if self.notifications.visible_ms > 60_000 {
            anyhow::bail!(
                "notifications.visible_ms cannot exceed 60000 (1 minute), got {}",
                self.notifications.visible_ms
            );
        }

        if self.notifications.fade_ms == 0 {
            anyhow::bail!("notifications.fade_ms must be greater than 0");
        }
        if self.notifications.fade_ms > 10_000 {
            anyhow::bail!(
                "notifications.fade_ms cannot exceed 10000 (10 seconds), got {}",
                self.notifications.fade_ms
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Perito UI Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(date::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("generated default configuration file: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
