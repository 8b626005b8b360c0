//! Application UI Manager
//!
//! Owns the editing session, wires the window's buttons to file and process
//! actions, and keeps the highlighted line model in step with edits.

use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use parking_lot::RwLock;
use slint::{ComponentHandle, Model, ModelRc, SharedString, VecModel};
use tracing::{debug, error, info};

use texpad_core::{AppConfig, EditorConfig, TexPadError};
use texpad_editor::{HighlightedLine, LineChange, SaveOutcome, SavePathPrompt, Session};
use texpad_launcher::{Compiler, TerminalLauncher};

use crate::dialogs::{self, SaveDialog};
use crate::theme::{to_slint, Theme};
use crate::{HighlightLine, HighlightSpan, MainWindow};

/// Line pitch relative to font size, close to the TextEdit's own so both
/// panes scroll in step
const LINE_SPACING: f32 = 1.2;

/// Font settings pushed to the window, in logical pixels
#[derive(Debug, Clone, PartialEq)]
struct EditorMetrics {
    font_family: String,
    font_px: f32,
    line_height: f32,
}

impl EditorMetrics {
    fn from_config(config: &EditorConfig) -> Self {
        // Points to logical pixels
        let font_px = config.font_size as f32 * 96.0 / 72.0;
        Self {
            font_family: config.font_family.clone(),
            font_px,
            line_height: (font_px * LINE_SPACING).round(),
        }
    }
}

/// Convert a highlighted line to its row in the window model
fn line_row(line: &HighlightedLine, theme: &Theme) -> HighlightLine {
    let spans: Vec<HighlightSpan> = line
        .spans()
        .map(|(text, kind)| {
            let style = theme.style_for(kind);
            HighlightSpan {
                text: text.into(),
                color: to_slint(style.color),
                bold: style.bold,
                italic: style.italic,
            }
        })
        .collect();
    HighlightLine {
        spans: ModelRc::new(VecModel::from(spans)),
    }
}

/// Patch only the rows covered by `change`
fn apply_change(
    model: &VecModel<HighlightLine>,
    change: LineChange,
    lines: &[HighlightedLine],
    theme: &Theme,
) {
    if change.start == 0 && change.removed == model.row_count() {
        model.set_vec(lines.iter().map(|l| line_row(l, theme)).collect::<Vec<_>>());
        return;
    }

    let reused = change.removed.min(change.inserted);
    for offset in 0..reused {
        let row = change.start + offset;
        model.set_row_data(row, line_row(&lines[row], theme));
    }
    for _ in reused..change.removed {
        model.remove(change.start + reused);
    }
    for row in change.start + reused..change.start + change.inserted {
        model.insert(row, line_row(&lines[row], theme));
    }
    debug!("Patched rows {:?}", change.rescanned());
}

/// Main application controller
pub struct App {
    config: AppConfig,
    theme: Theme,
    session: Arc<RwLock<Session>>,
    terminal: TerminalLauncher,
    compiler: Compiler,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        let session = if config.editor.use_template {
            Session::with_template()
        } else {
            Session::default()
        };
        let compiler = Compiler::new(config.compiler.program.clone());

        Self {
            config,
            theme: Theme::default(),
            session: Arc::new(RwLock::new(session)),
            terminal: TerminalLauncher::new(),
            compiler,
        }
    }

    /// Run the application
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        info!("Starting LaTeX editor...");

        let window = MainWindow::new()?;
        let lines = Rc::new(VecModel::<HighlightLine>::default());

        self.sync_ui_state(&window, &lines);
        self.setup_callbacks(&window, &lines);

        window.run()
    }

    /// Push the session's text, title and highlighting into the window
    fn sync_ui_state(&self, window: &MainWindow, lines: &Rc<VecModel<HighlightLine>>) {
        let session = self.session.read();

        let metrics = EditorMetrics::from_config(&self.config.editor);
        window.set_editor_font_family(metrics.font_family.into());
        window.set_editor_font_size(metrics.font_px);
        window.set_editor_line_height(metrics.line_height);
        window.set_editor_background(to_slint(self.theme.background));

        window.set_editor_content(session.view().get_text().into());
        window.set_window_title(session.title().into());

        lines.set_vec(
            session
                .view()
                .lines()
                .iter()
                .map(|l| line_row(l, &self.theme))
                .collect::<Vec<_>>(),
        );
        window.set_highlighted_lines(ModelRc::from(lines.clone()));
    }

    /// Set up UI callbacks
    fn setup_callbacks(&self, window: &MainWindow, lines: &Rc<VecModel<HighlightLine>>) {
        // Text edited
        let session = Arc::clone(&self.session);
        let model = Rc::clone(lines);
        let theme = self.theme.clone();
        let weak = window.as_weak();
        window.on_text_edited(move |text: SharedString| {
            let mut session = session.write();
            let change = session.view_mut().apply_edit(&text);
            if change.is_empty() {
                return;
            }
            apply_change(&model, change, session.view().lines(), &theme);
            if let Some(window) = weak.upgrade() {
                window.set_window_title(session.title().into());
            }
        });

        // Open clicked
        let session = Arc::clone(&self.session);
        let model = Rc::clone(lines);
        let theme = self.theme.clone();
        let weak = window.as_weak();
        let open_dir = self.config.open_directory();
        window.on_open_clicked(move || {
            let Some(path) = dialogs::pick_open_file(open_dir.as_deref()) else {
                debug!("Open cancelled");
                return;
            };

            let opened = {
                let mut session = session.write();
                session.open(&path).map(|change| {
                    apply_change(&model, change, session.view().lines(), &theme);
                    (session.view().get_text(), session.title())
                })
            };

            match opened {
                Ok((text, title)) => {
                    if let Some(window) = weak.upgrade() {
                        window.set_editor_content(text.into());
                        window.set_window_title(title.into());
                    }
                }
                Err(e) => {
                    error!("Open failed: {}", e);
                    dialogs::show_error("Error", &format!("Could not open file:\n{}", e.user_message()));
                }
            }
        });

        // Save clicked
        let session = Arc::clone(&self.session);
        let weak = window.as_weak();
        window.on_save_clicked(move || {
            // Ask before locking: the native dialog may pump window events.
            let chosen = if session.read().current_file().is_none() {
                match SaveDialog.prompt_save_path() {
                    Some(path) => Some(path),
                    None => {
                        info!("Save cancelled");
                        return;
                    }
                }
            } else {
                None
            };

            let saved = {
                let mut session = session.write();
                session
                    .save(&move || chosen.clone())
                    .map(|outcome| (outcome, session.title()))
            };

            match saved {
                Ok((SaveOutcome::Saved(path), title)) => {
                    if let Some(window) = weak.upgrade() {
                        window.set_window_title(title.into());
                    }
                    dialogs::show_info("Saved", &format!("File saved to:\n{}", path.display()));
                }
                Ok((SaveOutcome::Cancelled, _)) => {}
                Err(e) => {
                    error!("Save failed: {}", e);
                    dialogs::show_error("Error", &format!("Could not save file:\n{}", e.user_message()));
                }
            }
        });

        // Open terminal clicked
        let session = Arc::clone(&self.session);
        let terminal = self.terminal.clone();
        window.on_terminal_clicked(move || {
            let directory = session.read().current_dir().map(Path::to_path_buf);
            let Some(directory) = directory else {
                dialogs::show_info("Info", "Open a file first to use the terminal.");
                return;
            };

            if let Err(e) = terminal.open(&directory) {
                let e = TexPadError::from(e);
                dialogs::show_error("Error", &format!("Could not open terminal:\n{}", e.user_message()));
            }
        });

        // Compile clicked
        let session = Arc::clone(&self.session);
        let compiler = self.compiler.clone();
        window.on_compile_clicked(move || {
            let file = session.read().current_file().map(Path::to_path_buf);
            let Some(file) = file else {
                dialogs::show_info("Info", "No file to compile.");
                return;
            };

            // The exit status is logged by the compiler but not shown here.
            match compiler.compile(&file) {
                Ok(_) => dialogs::show_info("Success", "Compilation finished."),
                Err(e) => {
                    let e = TexPadError::from(e);
                    dialogs::show_error("Error", &format!("Compilation failed:\n{}", e.user_message()));
                }
            }
        });

        // Close clicked
        let weak = window.as_weak();
        window.on_close_clicked(move || {
            info!("Closing editor");
            if let Some(window) = weak.upgrade() {
                if let Err(e) = window.hide() {
                    error!("Could not close window: {}", e);
                }
            }
        });
    }

    /// The shared editing session
    pub fn session(&self) -> Arc<RwLock<Session>> {
        Arc::clone(&self.session)
    }
}
