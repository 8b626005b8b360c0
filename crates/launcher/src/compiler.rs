//! LaTeX Compiler
//!
//! Runs the compiler executable against a `.tex` file and waits for it to
//! exit. Only a failure to start the process is an error; the exit status
//! is returned to the caller but never turned into one.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::LaunchError;

/// Outcome of a compiler run that could be started
#[derive(Debug, Clone)]
pub struct CompileReport {
    /// The compiled source file
    pub file: PathBuf,
    /// Exit status of the compiler
    pub status: ExitStatus,
    /// Wall time in seconds
    pub duration_secs: f64,
}

impl CompileReport {
    /// Whether the compiler exited with status zero
    pub fn succeeded(&self) -> bool {
        self.status.success()
    }
}

/// Blocking compiler invocation
#[derive(Debug, Clone)]
pub struct Compiler {
    program: String,
}

impl Compiler {
    /// Executable used when nothing else is configured
    pub const DEFAULT_PROGRAM: &'static str = "tectonic";

    /// Create a compiler for an executable name or path
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Directory the compiler runs in: the parent of `file`
    pub fn working_dir(file: &Path) -> Result<PathBuf, LaunchError> {
        match file.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Ok(PathBuf::from(".")),
            Some(parent) => Ok(parent.to_path_buf()),
            None => Err(LaunchError::NoParentDirectory(file.to_path_buf())),
        }
    }

    /// Build the command that compiles `file`
    pub fn command(&self, file: &Path) -> Result<Command, LaunchError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(file).current_dir(Self::working_dir(file)?);
        Ok(cmd)
    }

    /// Compile `file`, blocking until the compiler exits
    pub fn compile(&self, file: &Path) -> Result<CompileReport, LaunchError> {
        let start = Instant::now();
        let mut cmd = self.command(file)?;

        info!("Compiling {:?} with {}", file, self.program);
        debug!("Running: {:?}", cmd);

        let status = cmd.status().map_err(|source| {
            error!("Could not start {}: {}", self.program, source);
            LaunchError::Spawn {
                program: self.program.clone(),
                source,
            }
        })?;

        let report = CompileReport {
            file: file.to_path_buf(),
            status,
            duration_secs: start.elapsed().as_secs_f64(),
        };

        if report.succeeded() {
            info!("Compilation finished in {:.2}s", report.duration_secs);
        } else {
            // Not surfaced to the user; the caller still reports completion.
            warn!("{} exited with {} after {:.2}s", self.program, status, report.duration_secs);
        }
        Ok(report)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program() {
        assert_eq!(Compiler::default().program(), "tectonic");
    }

    #[test]
    fn test_command_layout() {
        let file = Path::new("/papers/thesis/main.tex");
        let cmd = Compiler::default().command(file).unwrap();
        assert_eq!(cmd.get_program(), "tectonic");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), ["/papers/thesis/main.tex"]);
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/papers/thesis")));
    }

    #[test]
    fn test_working_dir_of_bare_file_name() {
        assert_eq!(Compiler::working_dir(Path::new("main.tex")).unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_working_dir_without_parent() {
        let err = Compiler::working_dir(Path::new("/")).unwrap_err();
        assert!(matches!(err, LaunchError::NoParentDirectory(_)));
    }

    #[test]
    fn test_missing_compiler_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.tex");
        std::fs::write(&file, "\\documentclass{article}").unwrap();

        let err = Compiler::new("texpad-no-such-compiler").compile(&file).unwrap_err();
        match err {
            LaunchError::Spawn { program, .. } => assert_eq!(program, "texpad-no-such-compiler"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_compiler_still_returns_report() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.tex");
        std::fs::write(&file, "").unwrap();

        let report = Compiler::new("false").compile(&file).unwrap();
        assert!(!report.succeeded());
        assert_eq!(report.file, file);

        let report = Compiler::new("true").compile(&file).unwrap();
        assert!(report.succeeded());
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_file_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doc.tex");
        // `sh doc.tex` runs the file as a script; the relative output path
        // lands in the working directory.
        std::fs::write(&file, "echo done > compiled.txt\n").unwrap();

        let report = Compiler::new("sh").compile(&file).unwrap();
        assert!(report.succeeded());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("compiled.txt")).unwrap(),
            "done\n"
        );
    }
}
