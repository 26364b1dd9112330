//! Centralized error handling for winfetch

use std::io;
use thiserror::Error;

/// Custom error type for winfetch operations
#[derive(Debug, Error)]
pub enum WinfetchError {
    /// I/O errors (file reading, command execution)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),
    /// Requested art is neither a readable path nor a builtin
    #[error("ASCII art '{0}' not found. Use --list-arts to see options.")]
    ArtNotFound(String),
    #[error("TOML parse error: {0}")]
    TomlRead(#[from] toml::de::Error),
    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}

/// Type alias for Results in winfetch
pub type Result<T> = std::result::Result<T, WinfetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_not_found_points_at_list_flag() {
        let err = WinfetchError::ArtNotFound("nope".to_string());
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("--list-arts"));
        assert!(msg.contains("'nope'"));
    }

    #[test]
    fn io_errors_convert() {
        let err: WinfetchError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, WinfetchError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
