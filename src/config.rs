//! Configuration management for studybell
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all application settings. It uses the `figment`
//! crate to load configuration from a `studybell.toml` file and merge it
//! with environment variables and command-line arguments.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;

/// The default config file name, looked up in the working directory when
/// `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "studybell.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for notification appearance.
    pub notification: NotificationConfig,
    /// Configuration for the platform permission flag.
    pub permission: PermissionConfig,
}

/// Configuration for notification appearance.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationConfig {
    /// The application name reported to the notification server.
    pub app_name: String,
    /// How long a reminder stays on screen, in milliseconds. `None` leaves
    /// the duration to the notification server.
    pub timeout_ms: Option<u32>,
    /// Keep reminders on screen until dismissed, overriding `timeout_ms`.
    pub sticky: bool,
}

/// Configuration for the platform permission flag.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PermissionConfig {
    /// Where the user's permission decision is stored. Defaults to
    /// `$XDG_STATE_HOME/studybell/permission.toml`.
    pub state_file: Option<PathBuf>,
}

impl Config {
    /// Loads the application configuration by layering sources: defaults,
    /// the TOML file, environment variables, and CLI arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!(
                        "Config file not found at specified path: {}",
                        path.display()
                    );
                }
                path.clone()
            }
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g., STUDYBELL_LOG_LEVEL=debug
            .merge(Env::prefixed("STUDYBELL_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            notification: NotificationConfig {
                app_name: "studybell".to_string(),
                timeout_ms: None,
                sticky: false,
            },
            permission: PermissionConfig { state_file: None },
        }
    }
}
