//! TexPad - Minimal LaTeX editor
//!
//! A plain-text editor for LaTeX sources with lexical syntax highlighting,
//! whole-file open/save, a terminal launcher and a one-click compile button.
//!
//! ## Architecture
//!
//! TexPad is organized into specialized crates:
//!
//! - `texpad-core`: Configuration and error types
//! - `texpad-editor`: Text buffer, highlighter and file session
//! - `texpad-launcher`: Terminal and compiler processes
//! - `texpad-ui`: Slint-based user interface

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export main components for library usage
pub use texpad_core as core;
pub use texpad_editor as editor;
pub use texpad_launcher as launcher;
pub use texpad_ui as ui;

/// Prelude module for convenient imports
pub mod prelude {
    pub use texpad_core::{AppConfig, TexPadError};
    pub use texpad_editor::{EditorView, LatexHighlighter, SaveOutcome, Session};
    pub use texpad_launcher::{Compiler, TerminalLauncher};
}
