//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors surface from `main` as `Error: ...` with exit code 1
//! - Launch-time errors are rendered by the launch sequence into user messages
//! - Use `anyhow::Error` (via `LauncherError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// No usable interpreter was found on the search path.
    #[error("Interpreter unavailable: {message}")]
    InterpreterUnavailable { message: String },

    /// The interpreter cannot import modules the target needs.
    #[error("Missing Python modules: {}", modules.join(", "))]
    MissingModules { modules: Vec<String> },

    /// The target script could not be located.
    #[error("Script not found: {path}")]
    ScriptNotFound { path: PathBuf },

    /// A child process could not be started.
    #[error("Failed to start '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = LauncherError::ConfigNotFound {
            path: PathBuf::from("/foo/launcher.yml"),
        };
        assert!(err.to_string().contains("/foo/launcher.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = LauncherError::ConfigParseError {
            path: PathBuf::from("/launcher.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/launcher.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn missing_modules_lists_every_module() {
        let err = LauncherError::MissingModules {
            modules: vec!["numpy".into(), "PyQt6".into()],
        };
        assert!(err.to_string().contains("numpy, PyQt6"));
    }

    #[test]
    fn spawn_failed_displays_program_and_message() {
        let err = LauncherError::SpawnFailed {
            program: "/usr/bin/python3".into(),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/bin/python3"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: LauncherError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
