//! Syntax Highlighting
//!
//! Lexical LaTeX highlighting. Each line is scanned on its own against a
//! fixed, ordered list of regular-expression rules; a rule applied later
//! overrides the format of earlier rules on the characters they share.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::style::{Color, TextStyle};

/// Highlight type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    /// `\section`, `\textbf`, ...
    Command,
    /// `{` or `}`
    Brace,
    /// `$...$`
    InlineMath,
    /// `%` to end of line
    Comment,
    /// `\begin{name}` / `\end{name}`
    Environment,
}

impl HighlightKind {
    /// Default character format for this kind
    pub fn style(self) -> TextStyle {
        match self {
            HighlightKind::Command => TextStyle::bold(Color::rgb(0x00, 0x66, 0x99)),
            HighlightKind::Brace => TextStyle::plain(Color::rgb(0xaa, 0x44, 0x00)),
            HighlightKind::InlineMath => TextStyle::plain(Color::rgb(0x99, 0x00, 0x99)),
            HighlightKind::Comment => TextStyle::italic(Color::rgb(0x88, 0x88, 0x88)),
            HighlightKind::Environment => TextStyle::bold(Color::rgb(0x00, 0x77, 0x44)),
        }
    }
}

/// A highlighting rule: every match of `pattern` gets the format of `kind`
#[derive(Debug)]
pub struct HighlightRule {
    pub kind: HighlightKind,
    pub pattern: Regex,
}

impl HighlightRule {
    fn new(kind: HighlightKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("built-in highlight pattern must compile"),
        }
    }
}

// Order is significant: later rules win on overlapping characters.
static RULES: Lazy<Vec<HighlightRule>> = Lazy::new(|| {
    vec![
        HighlightRule::new(HighlightKind::Command, r"\\[a-zA-Z]+"),
        HighlightRule::new(HighlightKind::Brace, r"[{}]"),
        HighlightRule::new(HighlightKind::InlineMath, r"\$[^$]*\$"),
        HighlightRule::new(HighlightKind::Comment, r"%[^\n]*"),
        HighlightRule::new(HighlightKind::Environment, r"\\(begin|end)\{[^}]+\}"),
    ]
});

/// The fixed rule list, in application order
pub fn rules() -> &'static [HighlightRule] {
    &RULES
}

/// A highlighted range in a line (byte offsets)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

/// Every range the rules format on `line`, in the order they are applied.
pub fn highlight_line(line: &str) -> Vec<HighlightRange> {
    rules()
        .iter()
        .flat_map(|rule| {
            rule.pattern.find_iter(line).map(move |m| HighlightRange {
                start: m.start(),
                end: m.end(),
                kind: rule.kind,
            })
        })
        .collect()
}

/// A run of characters sharing one final format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    pub range: Range<usize>,
    /// `None` for unformatted text
    pub kind: Option<HighlightKind>,
}

/// Flatten the applied ranges of `line` into contiguous segments covering
/// the whole line, each carrying the kind of the last rule that touched it.
pub fn resolve_line(line: &str) -> Vec<StyledSegment> {
    let mut owners: Vec<Option<HighlightKind>> = vec![None; line.len()];
    for range in highlight_line(line) {
        for owner in &mut owners[range.start..range.end] {
            *owner = Some(range.kind);
        }
    }

    let mut segments: Vec<StyledSegment> = Vec::new();
    for (offset, owner) in owners.into_iter().enumerate() {
        match segments.last_mut() {
            Some(last) if last.kind == owner => last.range.end = offset + 1,
            _ => segments.push(StyledSegment {
                range: offset..offset + 1,
                kind: owner,
            }),
        }
    }
    segments
}

/// One line of the document together with its resolved formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine {
    pub text: String,
    pub segments: Vec<StyledSegment>,
}

impl HighlightedLine {
    /// Scan a line
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let segments = resolve_line(&text);
        Self { text, segments }
    }

    /// Text of each segment paired with its kind
    pub fn spans(&self) -> impl Iterator<Item = (&str, Option<HighlightKind>)> + '_ {
        self.segments
            .iter()
            .map(move |s| (&self.text[s.range.clone()], s.kind))
    }
}

/// Lines `start..start + removed` were replaced by `inserted` freshly
/// scanned lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChange {
    pub start: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl LineChange {
    /// No line was rescanned
    pub fn is_empty(&self) -> bool {
        self.removed == 0 && self.inserted == 0
    }

    /// Indices of the rescanned lines in the new document
    pub fn rescanned(&self) -> Range<usize> {
        self.start..self.start + self.inserted
    }
}

/// LaTeX highlighter with a per-line cache
#[derive(Debug, Clone)]
pub struct LatexHighlighter {
    lines: Vec<HighlightedLine>,
}

impl LatexHighlighter {
    /// Highlighter for an empty document
    pub fn new() -> Self {
        Self {
            lines: vec![HighlightedLine::new("")],
        }
    }

    /// Rescan every line of `text`
    pub fn rehighlight(&mut self, text: &str) -> LineChange {
        let removed = self.lines.len();
        self.lines = text.split('\n').map(HighlightedLine::new).collect();
        debug!("Rehighlighted {} lines", self.lines.len());
        LineChange {
            start: 0,
            removed,
            inserted: self.lines.len(),
        }
    }

    /// Rescan only the lines of `text` that differ from the cached ones.
    ///
    /// Lines shared with the cached document at the start and at the end are
    /// kept as they are; everything between is rescanned.
    pub fn update(&mut self, text: &str) -> LineChange {
        let new_lines: Vec<&str> = text.split('\n').collect();
        let old_len = self.lines.len();
        let new_len = new_lines.len();
        let shortest = old_len.min(new_len);

        let prefix = self
            .lines
            .iter()
            .zip(&new_lines)
            .take_while(|(old, new)| old.text == **new)
            .count();

        let suffix = self.lines[prefix..]
            .iter()
            .rev()
            .zip(new_lines[prefix..].iter().rev())
            .take(shortest - prefix)
            .take_while(|(old, new)| old.text == **new)
            .count();

        let removed = old_len - prefix - suffix;
        let inserted = new_len - prefix - suffix;
        let fresh = new_lines[prefix..prefix + inserted]
            .iter()
            .map(|line| HighlightedLine::new(*line));
        self.lines.splice(prefix..prefix + removed, fresh);

        let change = LineChange {
            start: prefix,
            removed,
            inserted,
        };
        debug!("Rescanned lines {:?} ({} removed)", change.rescanned(), removed);
        change
    }

    /// All cached lines
    pub fn lines(&self) -> &[HighlightedLine] {
        &self.lines
    }
}

impl Default for LatexHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
