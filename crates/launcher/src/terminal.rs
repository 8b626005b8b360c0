//! Terminal Launcher
//!
//! Opens an interactive terminal rooted at a directory. The child is not
//! supervised: its handle is dropped as soon as it has been spawned.

use std::path::Path;
use std::process::Command;
use tracing::{debug, error, info};

use crate::LaunchError;

/// Terminal flavour, chosen from the host OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalPlatform {
    /// `cmd /C start cmd`
    Windows,
    /// `open -a Terminal <dir>`
    MacOs,
    /// `x-terminal-emulator`
    Linux,
}

impl TerminalPlatform {
    /// Platform of the running host
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => TerminalPlatform::Windows,
            "macos" => TerminalPlatform::MacOs,
            _ => TerminalPlatform::Linux,
        }
    }

    /// Executable that gets spawned
    pub fn program(self) -> &'static str {
        match self {
            TerminalPlatform::Windows => "cmd",
            TerminalPlatform::MacOs => "open",
            TerminalPlatform::Linux => "x-terminal-emulator",
        }
    }

    /// Build the command that opens a terminal in `directory`
    pub fn command(self, directory: &Path) -> Command {
        let mut cmd = Command::new(self.program());
        match self {
            TerminalPlatform::Windows => {
                cmd.args(["/C", "start", "cmd"]).current_dir(directory);
            }
            TerminalPlatform::MacOs => {
                cmd.args(["-a", "Terminal"]).arg(directory);
            }
            TerminalPlatform::Linux => {
                cmd.current_dir(directory);
            }
        }
        cmd
    }
}

/// Fire-and-forget terminal launcher
#[derive(Debug, Clone)]
pub struct TerminalLauncher {
    platform: TerminalPlatform,
}

impl TerminalLauncher {
    /// Launcher for the host platform
    pub fn new() -> Self {
        Self::with_platform(TerminalPlatform::current())
    }

    /// Launcher for an explicit platform
    pub fn with_platform(platform: TerminalPlatform) -> Self {
        Self { platform }
    }

    /// Selected platform
    pub fn platform(&self) -> TerminalPlatform {
        self.platform
    }

    /// Spawn a terminal in `directory` without waiting for it
    pub fn open(&self, directory: &Path) -> Result<(), LaunchError> {
        let mut cmd = self.platform.command(directory);
        debug!("Running: {:?}", cmd);

        match cmd.spawn() {
            Ok(child) => {
                info!("Opened terminal in {:?} (pid {})", directory, child.id());
                Ok(())
            }
            Err(source) => {
                error!("Could not open terminal in {:?}: {}", directory, source);
                Err(LaunchError::Spawn {
                    program: self.platform.program().to_string(),
                    source,
                })
            }
        }
    }
}

impl Default for TerminalLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(cmd: &Command) -> Vec<&OsStr> {
        cmd.get_args().collect()
    }

    #[test]
    fn test_current_platform() {
        let expected = if cfg!(windows) {
            TerminalPlatform::Windows
        } else if cfg!(target_os = "macos") {
            TerminalPlatform::MacOs
        } else {
            TerminalPlatform::Linux
        };
        assert_eq!(TerminalPlatform::current(), expected);
        assert_eq!(TerminalLauncher::new().platform(), expected);
    }

    #[test]
    fn test_windows_command() {
        let dir = Path::new("project");
        let cmd = TerminalPlatform::Windows.command(dir);
        assert_eq!(cmd.get_program(), "cmd");
        assert_eq!(args(&cmd), ["/C", "start", "cmd"]);
        assert_eq!(cmd.get_current_dir(), Some(dir));
    }

    #[test]
    fn test_macos_command() {
        let dir = Path::new("/Users/me/paper");
        let cmd = TerminalPlatform::MacOs.command(dir);
        assert_eq!(cmd.get_program(), "open");
        assert_eq!(args(&cmd), ["-a", "Terminal", "/Users/me/paper"]);
        assert_eq!(cmd.get_current_dir(), None);
    }

    #[test]
    fn test_linux_command() {
        let dir = Path::new("/home/me/paper");
        let cmd = TerminalPlatform::Linux.command(dir);
        assert_eq!(cmd.get_program(), "x-terminal-emulator");
        assert!(args(&cmd).is_empty());
        assert_eq!(cmd.get_current_dir(), Some(dir));
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let launcher = TerminalLauncher::with_platform(TerminalPlatform::Linux);

        let err = launcher.open(&dir.path().join("gone")).unwrap_err();
        match err {
            LaunchError::Spawn { program, .. } => assert_eq!(program, "x-terminal-emulator"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
