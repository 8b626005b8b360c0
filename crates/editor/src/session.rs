//! Editing Session
//!
//! The single open document and the file it belongs to. Open and save are
//! synchronous whole-file operations; a failed open leaves the session as
//! it was.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use texpad_core::Result;

use crate::buffer::TextBuffer;
use crate::syntax::LineChange;
use crate::view::EditorView;

/// Article skeleton shown in a fresh editor
pub const DEFAULT_LATEX_TEMPLATE: &str = r"\documentclass[11pt]{article}
\usepackage[margin=1in]{geometry}
\usepackage{listings}
\usepackage{amsmath}
\usepackage{amssymb}
\usepackage{xcolor}
\usepackage{hyperref}
\usepackage{enumitem}

\definecolor{gray}{rgb}{0.5,0.5,0.5}
\definecolor{lightgray}{rgb}{0.95,0.95,0.95}
\lstset{
backgroundcolor=\color{lightgray},
basicstyle=\ttfamily\footnotesize,
frame=single,
breaklines=true,
postbreak=\mbox{\textcolor{red}{$\hookrightarrow$}\space},
keywordstyle=\color{blue},
commentstyle=\color{gray},
}
\title{}

\begin{document}

\maketitle

\section{}


\end{document}";

/// Asks the user where to save a document that has no file yet
pub trait SavePathPrompt {
    /// `None` when the user cancels
    fn prompt_save_path(&self) -> Option<PathBuf>;
}

impl<F> SavePathPrompt for F
where
    F: Fn() -> Option<PathBuf>,
{
    fn prompt_save_path(&self) -> Option<PathBuf> {
        self()
    }
}

/// Result of a save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to this path
    Saved(PathBuf),
    /// The user dismissed the path prompt; nothing was written
    Cancelled,
}

/// Editor session: one document, at most one current file
#[derive(Debug, Clone, Default)]
pub struct Session {
    view: EditorView,
    current_file: Option<PathBuf>,
}

impl Session {
    /// Session over an unsaved document holding `text`
    pub fn new(text: &str) -> Self {
        Self {
            view: EditorView::new(text),
            current_file: None,
        }
    }

    /// Session starting from the article template
    pub fn with_template() -> Self {
        Self::new(DEFAULT_LATEX_TEMPLATE)
    }

    /// Read `path` into the editor and make it the current file
    pub fn open(&mut self, path: &Path) -> Result<LineChange> {
        let loaded = TextBuffer::from_file(path).map_err(|e| {
            warn!("Could not open {:?}: {}", path, e);
            e
        })?;
        let change = self.view.set_text(&loaded.text());
        self.view.buffer_mut().mark_clean();
        self.current_file = Some(path.to_path_buf());
        info!("Opened {:?}", path);
        Ok(change)
    }

    /// Write the document to the current file, prompting for one first if
    /// none is set.
    pub fn save(&mut self, prompt: &dyn SavePathPrompt) -> Result<SaveOutcome> {
        let path = match &self.current_file {
            Some(path) => path.clone(),
            None => match prompt.prompt_save_path() {
                Some(path) => path,
                None => {
                    info!("Save cancelled");
                    return Ok(SaveOutcome::Cancelled);
                }
            },
        };
        // The chosen path sticks even if the write below fails.
        self.current_file = Some(path.clone());

        self.view.buffer_mut().save_to(&path)?;
        info!("Saved {:?}", path);
        Ok(SaveOutcome::Saved(path))
    }

    /// Current file, if any
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Directory of the current file: target of compile and terminal
    pub fn current_dir(&self) -> Option<&Path> {
        self.current_file.as_deref().and_then(Path::parent)
    }

    /// Window caption for the session
    pub fn title(&self) -> String {
        let name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        let marker = if self.view.buffer().is_dirty() { "*" } else { "" };
        format!("LaTeX Editor - {}{}", name, marker)
    }

    /// The editor view
    pub fn view(&self) -> &EditorView {
        &self.view
    }

    /// Mutable editor view
    pub fn view_mut(&mut self) -> &mut EditorView {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn never_prompt() -> Option<PathBuf> {
        panic!("prompt must not be shown when a current file exists")
    }

    #[test]
    fn test_template_session() {
        let session = Session::with_template();
        assert!(session.current_file().is_none());
        assert!(session.view().get_text().starts_with("\\documentclass"));
        assert_eq!(session.title(), "LaTeX Editor - Untitled");
    }

    #[test]
    fn test_open_missing_file_leaves_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new("keep me");

        let err = session.open(&dir.path().join("nope.tex")).unwrap_err();
        assert!(err.is_io());
        assert_eq!(session.view().get_text(), "keep me");
        assert!(session.current_file().is_none());
    }

    #[test]
    fn test_open_non_utf8_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.tex");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let mut session = Session::new("keep me");
        assert!(session.open(&path).is_err());
        assert_eq!(session.view().get_text(), "keep me");
    }

    #[test]
    fn test_open_sets_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.tex");
        std::fs::write(&path, "\\section{Intro}\n% todo").unwrap();

        let mut session = Session::new("");
        let change = session.open(&path).unwrap();
        assert_eq!(change.inserted, 2);
        assert_eq!(session.view().get_text(), "\\section{Intro}\n% todo");
        assert_eq!(session.current_file(), Some(path.as_path()));
        assert_eq!(session.current_dir(), Some(dir.path()));
        assert_eq!(session.title(), "LaTeX Editor - paper.tex");
    }

    #[test]
    fn test_save_cancelled_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let asked = Cell::new(false);
        let mut session = Session::new("draft");

        let outcome = session
            .save(&|| {
                asked.set(true);
                None
            })
            .unwrap();
        assert!(asked.get());
        assert_eq!(outcome, SaveOutcome::Cancelled);
        assert!(session.current_file().is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_then_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tex");
        let text = "\\begin{document}\n$\\alpha$ ü ✓\r\n% end\n\\end{document}\n";

        let mut session = Session::new("");
        session.view_mut().set_text(text);
        let target = path.clone();
        let outcome = session.save(&move || Some(target.clone())).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(path.clone()));
        assert_eq!(std::fs::read(&path).unwrap(), text.as_bytes());

        let mut reopened = Session::new("");
        reopened.open(&path).unwrap();
        assert_eq!(reopened.view().get_text(), text);
    }

    #[test]
    fn test_save_overwrites_current_file_without_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.tex");
        std::fs::write(&path, "a much longer original body").unwrap();

        let mut session = Session::new("");
        session.open(&path).unwrap();
        session.view_mut().apply_edit("short");
        assert_eq!(session.title(), "LaTeX Editor - doc.tex*");

        let outcome = session.save(&never_prompt).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(path.clone()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
        assert_eq!(session.title(), "LaTeX Editor - doc.tex");
    }

    #[test]
    fn test_save_to_unwritable_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing-dir").join("doc.tex");
        let mut session = Session::new("x");

        let err = session.save(&move || Some(target.clone())).unwrap_err();
        assert!(err.is_io());
    }
}
