//! The desktop notification backend.
//!
//! Talks to the host notification server through `notify-rust`. The server
//! calls are blocking D-Bus round trips, so they run on the blocking thread
//! pool. The permission prompt is itself a notification carrying `Allow` and
//! `Deny` actions; the answer is persisted through the [`PermissionStore`].

use crate::config::NotificationConfig;
use crate::core::{NotificationBackend, Permission, Reminder};
use crate::notifier::{NotifyError, PermissionStore};
use async_trait::async_trait;
use notify_rust::{Notification, Timeout};
use tokio::task;
use tracing::{debug, info, warn};

/// A backend that displays reminders via the desktop notification server.
pub struct DesktopBackend {
    app_name: String,
    timeout: Timeout,
    store: PermissionStore,
    available: bool,
}

impl DesktopBackend {
    /// Probes the notification server once and builds the backend.
    ///
    /// When no server is reachable the backend reports the capability as
    /// absent; every later call then degrades to a silent no-op or an
    /// `Unavailable` error, it never panics.
    pub async fn detect(config: &NotificationConfig, store: PermissionStore) -> Self {
        let available = task::spawn_blocking(|| notify_rust::get_server_information().is_ok())
            .await
            .unwrap_or(false);

        if available {
            debug!("notification server detected");
        } else {
            info!("no notification server reachable, notifications disabled");
        }

        Self {
            app_name: config.app_name.clone(),
            timeout: reminder_timeout(config),
            store,
            available,
        }
    }

    /// The store holding the user's permission decision.
    pub fn store(&self) -> &PermissionStore {
        &self.store
    }
}

/// Maps the notification config onto a server-side display duration.
fn reminder_timeout(config: &NotificationConfig) -> Timeout {
    if config.sticky {
        Timeout::Never
    } else if let Some(ms) = config.timeout_ms {
        Timeout::Milliseconds(ms)
    } else {
        Timeout::Default
    }
}

#[async_trait]
impl NotificationBackend for DesktopBackend {
    fn name(&self) -> &str {
        "desktop"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn permission(&self) -> Permission {
        if !self.available {
            return Permission::Default;
        }
        self.store.load()
    }

    async fn request_permission(&self) -> Result<Permission, NotifyError> {
        if !self.available {
            return Err(NotifyError::Unavailable);
        }

        let app_name = self.app_name.clone();
        let decision = task::spawn_blocking(move || -> Result<Permission, NotifyError> {
            let handle = Notification::new()
                .summary("Enable study reminders?")
                .body("studybell wants to show desktop notifications.")
                .appname(&app_name)
                .action("allow", "Allow")
                .action("deny", "Deny")
                .timeout(Timeout::Never)
                .show()?;

            let mut decision = Permission::Default;
            handle.wait_for_action(|action| {
                decision = match action {
                    "allow" => Permission::Granted,
                    "deny" => Permission::Denied,
                    // Dismissed or timed out: still undecided, ask again
                    // on the next run.
                    _ => Permission::Default,
                };
            });
            Ok(decision)
        })
        .await??;

        if decision != Permission::Default {
            self.store
                .save(decision)
                .map_err(|e| NotifyError::Persistence(e.to_string()))?;
        }

        Ok(decision)
    }

    async fn deliver(&self, reminder: &Reminder) -> Result<(), NotifyError> {
        if !self.available {
            return Err(NotifyError::Unavailable);
        }

        let app_name = self.app_name.clone();
        let timeout = self.timeout;
        let reminder = reminder.clone();
        task::spawn_blocking(move || {
            Notification::new()
                .summary(&reminder.title)
                .body(&reminder.body)
                .appname(&app_name)
                .timeout(timeout)
                .show()
                .map(drop)
        })
        .await?
        .map_err(|e| {
            warn!(error = %e, "notification server rejected the reminder");
            NotifyError::Delivery(e)
        })
    }
}
