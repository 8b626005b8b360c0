//! TexPad UI Module
//!
//! Main window, native dialogs and theme for the editor.

pub mod app;
pub mod dialogs;
pub mod theme;

pub use app::App;

use texpad_core::AppConfig;

slint::include_modules!();

/// Open the editor window and block until it is closed
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    App::new(config).run()?;
    Ok(())
}
