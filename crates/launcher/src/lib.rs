//! External Process Launcher
//!
//! Starts the helper programs the editor relies on: a platform terminal
//! (fire-and-forget) and the LaTeX compiler (waited on).

pub mod compiler;
pub mod terminal;

pub use compiler::{CompileReport, Compiler};
pub use terminal::{TerminalLauncher, TerminalPlatform};

use std::path::PathBuf;

use texpad_core::TexPadError;

/// Launch errors
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0:?} has no parent directory")]
    NoParentDirectory(PathBuf),
}

impl From<LaunchError> for TexPadError {
    fn from(err: LaunchError) -> Self {
        TexPadError::Launch(err.to_string())
    }
}
