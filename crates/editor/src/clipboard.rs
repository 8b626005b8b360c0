//! Clipboard Payloads
//!
//! A toolkit-neutral view of what the clipboard offers on paste. Only the
//! plain-text representation is ever inserted into a document.

/// Representations offered by the clipboard for one paste
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardContent {
    /// `text/plain`
    pub text: Option<String>,
    /// `text/html` or other styled text
    pub html: Option<String>,
    /// Encoded image data
    pub image: Option<Vec<u8>>,
}

impl ClipboardContent {
    /// Clipboard holding only plain text
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// What a paste did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// The plain-text form was inserted; `caret` is the char index just
    /// past it
    Inserted { caret: usize },
    /// No text form; the host toolkit should run its own paste
    Fallback,
}
