//! Delegation to the target script.
//!
//! The interpreter found by the probe runs the script with the console
//! handed over to it. Nothing from the launcher's own command line is
//! forwarded.

use crate::error::{LauncherError, Result};
use crate::shell::{execute, CommandOptions};
use std::path::{Path, PathBuf};

/// How the delegated program ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateOutcome {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
    /// Whether the program exited with code 0.
    pub success: bool,
}

/// Locate `script`.
///
/// Absolute paths are used as given. Relative paths are tried against each
/// of `search_dirs` in order; the first existing file wins.
pub fn resolve_script(script: &Path, search_dirs: &[PathBuf]) -> Result<PathBuf> {
    if script.is_absolute() {
        return if script.is_file() {
            Ok(script.to_path_buf())
        } else {
            Err(LauncherError::ScriptNotFound {
                path: script.to_path_buf(),
            })
        };
    }

    search_dirs
        .iter()
        .map(|dir| dir.join(script))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| LauncherError::ScriptNotFound {
            path: script.to_path_buf(),
        })
}

/// Starts the target script with a given interpreter.
#[derive(Debug, Clone)]
pub struct Delegator {
    interpreter: PathBuf,
    script: PathBuf,
}

impl Delegator {
    pub fn new(interpreter: PathBuf, script: PathBuf) -> Self {
        Self {
            interpreter,
            script,
        }
    }

    /// Run the script once, inheriting stdio, and wait for it to exit.
    ///
    /// The child's working directory is the script's directory, and the
    /// script is passed as an absolute path so it still resolves there.
    pub fn run(&self) -> Result<DelegateOutcome> {
        let script = std::path::absolute(&self.script)?;
        let mut options = CommandOptions::inherited();
        if let Some(dir) = script.parent() {
            options = options.with_cwd(dir);
        }

        tracing::info!(
            "Delegating to {} {}",
            self.interpreter.display(),
            script.display()
        );

        let result = execute(&self.interpreter, &[script.as_os_str()], &options)?;

        tracing::debug!(
            "Delegate exited with {:?} after {:?}",
            result.exit_code,
            result.duration
        );

        Ok(DelegateOutcome {
            exit_code: result.exit_code,
            success: result.success,
        })
    }
}
