//! Configuration validation.

use crate::config::schema::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::requirements::version::PythonVersion;

/// Check a fully layered configuration and return the parsed minimum
/// interpreter version.
pub fn validate(config: &LauncherConfig) -> Result<PythonVersion> {
    let invalid = |message: String| LauncherError::ConfigValidationError { message };

    if config
        .interpreter
        .candidates
        .iter()
        .all(|c| c.trim().is_empty())
    {
        return Err(invalid("interpreter.candidates must not be empty".into()));
    }

    if config.target.script.as_os_str().is_empty() {
        return Err(invalid("target.script must not be empty".into()));
    }

    config
        .interpreter
        .min_version
        .parse::<PythonVersion>()
        .map_err(|e| invalid(format!("interpreter.min_version: {}", e)))
}
