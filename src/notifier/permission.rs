//! Persistent storage for the platform permission flag.
//!
//! The desktop notification service has no per-application permission model
//! of its own, so studybell keeps the user's decision in a small state file,
//! the way a browser records a per-origin notification permission. A missing
//! or unreadable file reads as [`Permission::Default`], which makes the
//! permission prompt reappear until the user decides.

use crate::core::Permission;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The on-disk record of the user's permission decision.
#[derive(Debug, Serialize, Deserialize)]
struct StoredDecision {
    permission: Permission,
    /// When the user answered the permission prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    decided_at: Option<DateTime<Utc>>,
}

/// Reads and writes the permission decision file.
#[derive(Debug, Clone)]
pub struct PermissionStore {
    path: PathBuf,
}

impl PermissionStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The default location of the permission state file:
    /// `$XDG_STATE_HOME/studybell/permission.toml`, falling back to
    /// `~/.local/state/studybell/permission.toml`.
    pub fn default_path() -> PathBuf {
        let state_dir = std::env::var_os("XDG_STATE_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .unwrap_or_else(|| {
                let home = std::env::var_os("HOME").map_or_else(PathBuf::new, PathBuf::from);
                home.join(".local").join("state")
            });
        state_dir.join("studybell").join("permission.toml")
    }

    /// The file this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current permission flag.
    ///
    /// A missing file means the user has not decided yet. An unreadable or
    /// malformed file is treated the same way, with a warning, so a damaged
    /// state file can never lock the user out of the prompt.
    pub fn load(&self) -> Permission {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Permission::Default,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read permission state");
                return Permission::Default;
            }
        };

        match toml::from_str::<StoredDecision>(&raw) {
            Ok(decision) => decision.permission,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed permission state, treating as undecided");
                Permission::Default
            }
        }
    }

    /// Records the user's decision.
    pub fn save(&self, permission: Permission) -> Result<()> {
        let decision = StoredDecision {
            permission,
            decided_at: Some(Utc::now()),
        };
        let raw = toml::to_string_pretty(&decision).context("serializing permission state")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating state directory {}", parent.display()))?;
        }
        fs::write(&self.path, raw)
            .with_context(|| format!("writing permission state to {}", self.path.display()))?;
        Ok(())
    }

    /// Clears the stored decision, returning the flag to `Default`.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("removing permission state at {}", self.path.display())
            }),
        }
    }
}
