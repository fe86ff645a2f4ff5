//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using
//! the `clap` crate. These arguments are parsed at startup and then merged
//! with the configuration from the `studybell.toml` file and environment
//! variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Tag, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// A desktop study-reminder notifier with browser-style permission gating.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The reminder message to show, e.g. "You did not study Math for 3 days".
    /// When omitted, the current permission status is printed instead.
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print capability availability and the current permission state.
    #[arg(long)]
    pub status: bool,

    /// Clear the stored permission decision and exit.
    #[arg(long)]
    pub reset: bool,

    /// The logging level (e.g. "info", "debug").
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Application name reported to the notification server.
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// How long a reminder stays on screen, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u32>,

    /// Path of the file holding the permission decision.
    #[arg(long, value_name = "FILE")]
    pub state_file: Option<PathBuf>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        let mut notification = Dict::new();
        if let Some(name) = &self.app_name {
            notification.insert("app_name".into(), Value::from(name.clone()));
        }
        if let Some(ms) = self.timeout_ms {
            notification.insert("timeout_ms".into(), Value::from(u64::from(ms)));
        }
        if !notification.is_empty() {
            dict.insert(
                "notification".into(),
                Value::Dict(Tag::Default, notification),
            );
        }

        if let Some(path) = &self.state_file {
            let mut permission = Dict::new();
            permission.insert(
                "state_file".into(),
                Value::from(path.display().to_string()),
            );
            dict.insert("permission".into(), Value::Dict(Tag::Default, permission));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
