//! Core domain types and service traits for studybell
//!
//! This module defines the fundamental data structures and trait contracts
//! that govern component interactions throughout the application.

use crate::notifier::NotifyError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed title used for every reminder notification.
pub const REMINDER_TITLE: &str = "Study Reminder";

/// The host platform's permission flag for showing notifications.
///
/// The platform owns this value; studybell only reads it. `Default` means
/// the user has not decided yet, so a permission prompt may still appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// The user allowed notifications.
    Granted,
    /// The user declined notifications.
    Denied,
    /// No decision has been made yet.
    #[default]
    Default,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Permission::Granted => "granted",
            Permission::Denied => "denied",
            Permission::Default => "default",
        };
        f.write_str(s)
    }
}

/// A single reminder to be shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    /// The notification title. Always [`REMINDER_TITLE`] for reminders
    /// built through [`Reminder::new`].
    pub title: String,
    /// The human-readable message body.
    pub body: String,
}

impl Reminder {
    /// Creates a reminder with the fixed study-reminder title.
    pub fn new(message: &str) -> Self {
        Self {
            title: REMINDER_TITLE.to_string(),
            body: message.to_string(),
        }
    }
}

// =============================================================================
// Service Traits
// =============================================================================

/// The host-provided notification capability.
///
/// Mirrors what a desktop platform exposes: a permission flag, a way to ask
/// the user for permission, and a way to display a titled message.
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// A unique, descriptive name for the backend (e.g., "desktop").
    /// Used for logging.
    fn name(&self) -> &str;

    /// Whether the host exposes a notification capability at all.
    /// Feature-detected once when the backend is constructed.
    fn is_available(&self) -> bool;

    /// The current permission state, read from the platform.
    fn permission(&self) -> Permission;

    /// Prompts the user for permission to show notifications.
    ///
    /// # Returns
    /// * `Ok(Permission)` with the user's decision; `Permission::Default`
    ///   if the prompt was dismissed without a decision
    /// * `Err` if the capability is absent or the prompt could not be shown
    async fn request_permission(&self) -> Result<Permission, NotifyError>;

    /// Displays a single reminder notification.
    ///
    /// # Returns
    /// * `Ok(())` if the notification was handed to the platform
    /// * `Err` if the capability is absent or delivery failed
    async fn deliver(&self, reminder: &Reminder) -> Result<(), NotifyError>;
}
