//! Text Buffer
//!
//! Rope-backed document text and the path of the file it belongs to.
//! The caret lives in the hosting widget; edits take explicit char indices.

use std::ops::Range;
use std::path::{Path, PathBuf};

use ropey::Rope;
use tracing::debug;

use texpad_core::Result;

/// Document text buffer
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// The rope containing the text
    rope: Rope,
    /// File path (if loaded from or saved to a file)
    path: Option<PathBuf>,
    /// Whether the buffer has been modified since the last open/save
    dirty: bool,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::from_str("")
    }

    /// Create a buffer from a string
    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
            dirty: false,
        }
    }

    /// Load a buffer from a UTF-8 file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut buffer = Self::from_str(&content);
        buffer.path = Some(path.to_path_buf());
        debug!("Loaded {} chars from {:?}", buffer.char_count(), path);
        Ok(buffer)
    }

    /// Write the full text to `path`, overwriting it, and adopt `path`
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, self.text())?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        debug!("Wrote {} bytes to {:?}", self.byte_len(), path);
        Ok(())
    }

    /// Get the full text content
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the whole text
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.dirty = true;
    }

    /// Get the total character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the byte length
    pub fn byte_len(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Check if the buffer has been modified
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forget pending modifications
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Get the file path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace a char range with `text`, both ends clamped to the document.
    ///
    /// Returns the char index just past the inserted text.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) -> usize {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if start < end {
            self.rope.remove(start..end);
        }
        self.rope.insert(start, text);
        self.dirty = true;
        start + text.chars().count()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
