//! Application Configuration
//!
//! Read-only settings for the editor:
//! - Editor font and startup template
//! - Default directory for the open dialog
//! - Compiler executable
//!
//! The file is never written back; a missing file simply yields defaults.

use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Editor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Font family
    pub font_family: String,
    /// Font size in points
    pub font_size: u32,
    /// Start with the article template instead of an empty document
    pub use_template: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_family: "Courier".to_string(),
            font_size: 10,
            use_template: true,
        }
    }
}

/// File dialog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilesConfig {
    /// Directory the open dialog starts in
    pub default_directory: Option<PathBuf>,
}

/// Compiler configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompilerConfig {
    /// Executable invoked with the current file as its only argument
    pub program: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "tectonic".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Editor settings
    pub editor: EditorConfig,
    /// File dialog settings
    pub files: FilesConfig,
    /// Compiler settings
    pub compiler: CompilerConfig,
}

impl AppConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "texpad", "TexPad")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load configuration from the platform config file, or defaults
    pub fn load() -> Result<Self> {
        match Self::config_file() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                info!("Config file not found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Directory the open dialog should start in.
    ///
    /// Falls back to the user's documents directory when nothing is configured.
    pub fn open_directory(&self) -> Option<PathBuf> {
        self.files
            .default_directory
            .clone()
            .filter(|p| p.is_dir())
            .or_else(dirs::document_dir)
    }
}
