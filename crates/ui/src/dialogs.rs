//! Native Dialogs
//!
//! File pickers and blocking message boxes.

use std::path::{Path, PathBuf};

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use texpad_editor::SavePathPrompt;

fn tex_filters(dialog: FileDialog) -> FileDialog {
    dialog
        .add_filter("TeX files", &["tex"])
        .add_filter("All Files", &["*"])
}

/// Ask for a file to open, starting in `directory` if given
pub fn pick_open_file(directory: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = tex_filters(FileDialog::new().set_title("Open LaTeX File"));
    if let Some(directory) = directory {
        dialog = dialog.set_directory(directory);
    }
    dialog.pick_file()
}

/// Save-as dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveDialog;

impl SavePathPrompt for SaveDialog {
    fn prompt_save_path(&self) -> Option<PathBuf> {
        tex_filters(FileDialog::new().set_title("Save File")).save_file()
    }
}

fn show(level: MessageLevel, title: &str, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Blocking informational message
pub fn show_info(title: &str, message: &str) {
    show(MessageLevel::Info, title, message);
}

/// Blocking error message
pub fn show_error(title: &str, message: &str) {
    show(MessageLevel::Error, title, message);
}
