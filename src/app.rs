//! Application wiring: builds the backend and notifier from configuration
//! and runs the requested command.

use crate::cli::Cli;
use crate::config::Config;
use crate::core::NotificationBackend;
use crate::notifier::{DesktopBackend, Notifier, PermissionStore};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

/// Runs one studybell invocation: the startup permission flow, then the
/// command selected by the CLI arguments.
pub async fn run(cli: &Cli, config: &Config) -> Result<()> {
    let state_file = config
        .permission
        .state_file
        .clone()
        .unwrap_or_else(PermissionStore::default_path);
    let store = PermissionStore::new(state_file);

    if cli.reset {
        store.reset()?;
        info!(path = %store.path().display(), "permission decision cleared");
        return Ok(());
    }

    let backend = Arc::new(DesktopBackend::detect(&config.notification, store).await);
    let notifier = Notifier::new(Arc::clone(&backend));

    // Load-time permission flow: prompt in the background, never branch on
    // the outcome here.
    let prompt = notifier.request_permission_if_needed();

    if cli.status || cli.message.is_none() {
        print_status(backend.as_ref());
    }

    if let Some(message) = &cli.message {
        if let Err(e) = notifier.show_notification(message).await {
            error!(error = %e, "failed to show reminder");
        }
    }

    // Keep the process alive until the prompt closes so the user can
    // actually answer it. The decision itself stays with the platform.
    if let Some(handle) = prompt {
        handle.await?;
    }

    Ok(())
}

fn print_status(backend: &DesktopBackend) {
    let capability = if backend.is_available() {
        "available"
    } else {
        "unavailable"
    };
    println!("Notification capability: {capability}");
    println!("Permission: {}", backend.permission());
    println!("State file: {}", backend.store().path().display());
}
