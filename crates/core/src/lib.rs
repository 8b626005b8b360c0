//! TexPad Core - Configuration and shared types
//!
//! This crate provides the pieces every other TexPad crate agrees on:
//! the error taxonomy surfaced to the user and the read-only application
//! configuration.

pub mod config;
pub mod error;

pub use config::{AppConfig, EditorConfig};
pub use error::{Result, TexPadError};

/// TexPad version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "TexPad";
