//! TexPad - Minimal LaTeX editor
//!
//! Main application entry point: sets up logging, loads the configuration
//! and opens the editor window.

use anyhow::Result;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use texpad::core::{AppConfig, APP_NAME, VERSION};

/// Main entry point
fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("{} v{} starting...", APP_NAME, VERSION);

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable configuration: {}", e);
        AppConfig::default()
    });

    // Start the UI
    info!("Launching UI...");
    texpad::ui::run(config)?;

    info!("{} closed", APP_NAME);
    Ok(())
}
