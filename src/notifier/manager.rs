//! The notifier front-end: reads the platform permission flag and decides
//! whether a reminder is shown at all.

use crate::core::{NotificationBackend, Permission, Reminder};
use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Shows study reminders through a [`NotificationBackend`], honoring the
/// platform permission flag.
pub struct Notifier<B: NotificationBackend> {
    backend: Arc<B>,
}

impl<B: NotificationBackend + 'static> Notifier<B> {
    /// Creates a new `Notifier` on top of the given backend.
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// The startup permission flow.
    ///
    /// Does nothing when the capability is absent or permission is already
    /// granted. Otherwise the prompt runs as a background task; the returned
    /// handle lets the caller wait for the prompt to close, but the outcome
    /// itself is not surfaced.
    pub fn request_permission_if_needed(&self) -> Option<JoinHandle<()>> {
        if !self.backend.is_available() {
            debug!(
                backend = self.backend.name(),
                "no notification capability, skipping permission request"
            );
            return None;
        }
        if self.backend.permission() == Permission::Granted {
            debug!("notification permission already granted");
            return None;
        }

        let backend = Arc::clone(&self.backend);
        Some(tokio::spawn(async move {
            match backend.request_permission().await {
                Ok(decision) => info!(permission = %decision, "permission prompt answered"),
                Err(e) => warn!(error = %e, "permission request failed"),
            }
        }))
    }

    /// Shows one reminder with the given message body.
    ///
    /// Reads the permission flag at call time. When permission is anything
    /// other than granted the call is a silent no-op and returns `Ok(())`.
    /// A delivery failure after a granted check is a platform error and is
    /// propagated.
    pub async fn show_notification(&self, message: &str) -> Result<()> {
        if self.backend.permission() != Permission::Granted {
            debug!("notification suppressed: permission not granted");
            return Ok(());
        }

        let reminder = Reminder::new(message);
        self.backend.deliver(&reminder).await?;
        debug!(backend = self.backend.name(), "reminder delivered");
        Ok(())
    }
}
