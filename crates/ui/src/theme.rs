//! Theme Engine
//!
//! Colors used to paint the editor and its highlighted lines.

use texpad_editor::{Color, HighlightKind, TextStyle};

/// Syntax highlighting styles, one per rule kind
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxColors {
    pub command: TextStyle,
    pub brace: TextStyle,
    pub inline_math: TextStyle,
    pub comment: TextStyle,
    pub environment: TextStyle,
}

impl Default for SyntaxColors {
    fn default() -> Self {
        Self {
            command: HighlightKind::Command.style(),
            brace: HighlightKind::Brace.style(),
            inline_math: HighlightKind::InlineMath.style(),
            comment: HighlightKind::Comment.style(),
            environment: HighlightKind::Environment.style(),
        }
    }
}

/// UI Theme definition
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text_primary: Color,
    pub syntax: SyntaxColors,
}

impl Theme {
    /// Black on white, the stock highlight palette
    pub fn light() -> Self {
        Self {
            background: Color::rgb(0xff, 0xff, 0xff),
            text_primary: Color::rgb(0x00, 0x00, 0x00),
            syntax: SyntaxColors::default(),
        }
    }

    /// Style for a segment; unformatted text uses the primary text color
    pub fn style_for(&self, kind: Option<HighlightKind>) -> TextStyle {
        match kind {
            Some(HighlightKind::Command) => self.syntax.command,
            Some(HighlightKind::Brace) => self.syntax.brace,
            Some(HighlightKind::InlineMath) => self.syntax.inline_math,
            Some(HighlightKind::Comment) => self.syntax.comment,
            Some(HighlightKind::Environment) => self.syntax.environment,
            None => TextStyle::plain(self.text_primary),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Convert to a Slint color
pub fn to_slint(color: Color) -> slint::Color {
    slint::Color::from_rgb_u8(color.r, color.g, color.b)
}
