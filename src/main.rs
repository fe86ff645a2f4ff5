//! studybell - Desktop Study Reminder Notifier
//!
//! Shows a study reminder as a desktop notification, asking the user for
//! permission first and staying silent when permission is not granted.

use anyhow::Result;
use clap::Parser;
use studybell::{app, cli::Cli, config::Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        // Logging is not up yet, fall back to a plain subscriber for this error.
        tracing_subscriber::fmt().with_env_filter("info").init();
        error!("Failed to load configuration: {}", err);
        // Exit if configuration fails, as it's a critical step.
        std::process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("studybell starting up");
    info!("Log Level: {}", config.log_level);
    info!("App Name: {}", config.notification.app_name);

    app::run(&cli, &config).await
}
