//! Handles permission gating and delivery of desktop reminders.
//!
//! This module defines the notifier core: a [`Notifier`](manager::Notifier)
//! front-end that reads the platform permission flag, a desktop backend that
//! talks to the notification server, and the store that persists the user's
//! permission decision between runs.

pub mod desktop;
pub mod manager;
pub mod permission;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use thiserror::Error;

pub use desktop::DesktopBackend;
pub use manager::Notifier;
pub use permission::PermissionStore;

/// Errors produced by notification backends.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("no notification capability detected on this host")]
    Unavailable,

    #[error("notification delivery failed: {0}")]
    Delivery(#[from] notify_rust::error::Error),

    #[error("permission state could not be persisted: {0}")]
    Persistence(String),

    #[error("notification backend failed: {0}")]
    Backend(String),

    #[error("notification task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
