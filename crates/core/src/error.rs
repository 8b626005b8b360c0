//! Error types for TexPad
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for TexPad
#[derive(Error, Debug)]
pub enum TexPadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("{0}")]
    Launch(String),
}

/// Result type alias for TexPad operations
pub type Result<T> = std::result::Result<T, TexPadError>;

impl TexPadError {
    /// Whether this error came from the filesystem
    pub fn is_io(&self) -> bool {
        matches!(self, TexPadError::Io(_))
    }

    /// Message shown in the modal notification.
    ///
    /// I/O and launch failures carry the raw underlying message; the dialog
    /// caption already says which action failed.
    pub fn user_message(&self) -> String {
        match self {
            TexPadError::Io(e) => e.to_string(),
            TexPadError::Launch(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_user_message_is_raw() {
        let err = TexPadError::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(err.is_io());
        assert_eq!(err.user_message(), "no such file");
    }

    #[test]
    fn test_toml_message_is_prefixed() {
        let parse_err = toml::from_str::<toml::Value>("editor = [").unwrap_err();
        let err = TexPadError::from(parse_err);
        assert!(!err.is_io());
        assert!(err.user_message().starts_with("TOML parse error: "));
    }

    #[test]
    fn test_launch_user_message_is_raw() {
        let err = TexPadError::Launch("tectonic: not found".into());
        assert_eq!(err.user_message(), "tectonic: not found");
    }
}
