//! Environment and command-line overrides.
//!
//! Layering, lowest to highest priority: built-in defaults, config file,
//! `LOAN_LAUNCHER_*` environment variables, command-line flags.

use crate::config::schema::{LauncherConfig, PauseMode};
use crate::error::{LauncherError, Result};
use std::path::PathBuf;

/// Replaces the interpreter candidate list with a single name or path.
pub const ENV_PYTHON: &str = "LOAN_LAUNCHER_PYTHON";
/// Replaces the target script.
pub const ENV_SCRIPT: &str = "LOAN_LAUNCHER_SCRIPT";
/// Replaces the minimum interpreter version.
pub const ENV_MIN_PYTHON: &str = "LOAN_LAUNCHER_MIN_PYTHON";
/// Replaces the pause mode.
pub const ENV_PAUSE: &str = "LOAN_LAUNCHER_PAUSE";

/// Values that replace whatever the lower layers set. `None` / empty
/// leaves the lower layer untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub candidates: Vec<String>,
    pub script: Option<PathBuf>,
    pub min_version: Option<String>,
    pub pause: Option<PauseMode>,
    pub propagate_exit_code: bool,
}

impl ConfigOverrides {
    /// Collect overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key: &str| std::env::var(key))
    }

    /// Collect overrides with a custom env var lookup function.
    ///
    /// Empty values are ignored.
    pub fn from_env_with<F>(env_fn: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let get = |key: &str| env_fn(key).ok().filter(|v| !v.trim().is_empty());

        let pause = match get(ENV_PAUSE) {
            Some(value) => Some(value.parse::<PauseMode>().map_err(|message| {
                LauncherError::ConfigValidationError {
                    message: format!("{}: {}", ENV_PAUSE, message),
                }
            })?),
            None => None,
        };

        Ok(Self {
            candidates: get(ENV_PYTHON).into_iter().collect(),
            script: get(ENV_SCRIPT).map(PathBuf::from),
            min_version: get(ENV_MIN_PYTHON),
            pause,
            propagate_exit_code: false,
        })
    }

    /// Apply these overrides on top of `config`.
    pub fn apply(&self, config: &mut LauncherConfig) {
        if !self.candidates.is_empty() {
            config.interpreter.candidates = self.candidates.clone();
        }
        if let Some(script) = &self.script {
            config.target.script = script.clone();
        }
        if let Some(min_version) = &self.min_version {
            config.interpreter.min_version = min_version.clone();
        }
        if let Some(pause) = self.pause {
            config.pause = pause;
        }
        if self.propagate_exit_code {
            config.target.propagate_exit_code = true;
        }
    }
}
