//! TexPad Editor
//!
//! Plain-text LaTeX editing core:
//! - Rope-based text buffer
//! - Per-line regex highlighting with incremental rescans
//! - Plain-text-only paste
//! - Whole-file open/save session

pub mod buffer;
pub mod clipboard;
pub mod session;
pub mod style;
pub mod syntax;
pub mod view;

pub use buffer::TextBuffer;
pub use clipboard::{ClipboardContent, PasteOutcome};
pub use session::{SaveOutcome, SavePathPrompt, Session, DEFAULT_LATEX_TEMPLATE};
pub use style::{Color, TextStyle};
pub use syntax::{HighlightKind, HighlightedLine, LatexHighlighter, LineChange};
pub use view::EditorView;
