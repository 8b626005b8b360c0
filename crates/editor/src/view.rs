//! Editor View
//!
//! Composes the text buffer with the LaTeX highlighter. A hosting widget
//! feeds edits in and renders the returned `LineChange`s; highlighting is
//! always a fresh scan of each line's current text.

use std::ops::Range;

use tracing::debug;

use crate::buffer::TextBuffer;
use crate::clipboard::{ClipboardContent, PasteOutcome};
use crate::syntax::{HighlightedLine, LatexHighlighter, LineChange};

/// Highlighted plain-text editing component
#[derive(Debug, Clone, Default)]
pub struct EditorView {
    buffer: TextBuffer,
    highlighter: LatexHighlighter,
}

impl EditorView {
    /// Create a view over `text`
    pub fn new(text: &str) -> Self {
        let mut view = Self::default();
        view.set_text(text);
        view.buffer.mark_clean();
        view
    }

    /// Full plain text
    pub fn get_text(&self) -> String {
        self.buffer.text()
    }

    /// Replace the whole document and rehighlight every line
    pub fn set_text(&mut self, text: &str) -> LineChange {
        self.buffer.set_text(text);
        self.highlighter.rehighlight(text)
    }

    /// Adopt the widget's text after a user edit; only changed lines are
    /// rescanned.
    pub fn apply_edit(&mut self, text: &str) -> LineChange {
        let change = self.highlighter.update(text);
        if !change.is_empty() {
            self.buffer.set_text(text);
        }
        change
    }

    /// Paste the plain-text form of `content` at `caret`, replacing
    /// `selection` when one is given.
    ///
    /// Positions are char indices into the current text as reported by the
    /// hosting widget; they are clamped to the document. Rich payloads are
    /// ignored whenever text is available. Without a text form nothing is
    /// inserted and the caller should fall back to the toolkit's own paste.
    pub fn paste(
        &mut self,
        content: &ClipboardContent,
        caret: usize,
        selection: Option<Range<usize>>,
    ) -> (PasteOutcome, LineChange) {
        let Some(text) = content.text.as_deref() else {
            debug!("Clipboard has no text form, deferring to default paste");
            return (
                PasteOutcome::Fallback,
                LineChange { start: 0, removed: 0, inserted: 0 },
            );
        };
        let target = selection.unwrap_or(caret..caret);
        let caret = self.buffer.replace_range(target, text);
        let change = self.highlighter.update(&self.buffer.text());
        (PasteOutcome::Inserted { caret }, change)
    }

    /// Highlighted lines
    pub fn lines(&self) -> &[HighlightedLine] {
        self.highlighter.lines()
    }

    /// Underlying buffer
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Mutable underlying buffer
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }
}
