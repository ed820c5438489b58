//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `launcher.yml` file format. Every field is optional.

use crate::requirements::probe::default_candidates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Title shown in the banner.
pub const DEFAULT_TITLE: &str = "贷款分期金融计算器";

/// Script delegated to when nothing else is configured.
pub const DEFAULT_SCRIPT: &str = "loan_calculator.py";

/// Oldest interpreter accepted by default.
pub const DEFAULT_MIN_VERSION: &str = "3.8";

/// Root configuration structure for launcher.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Banner title
    pub title: String,

    /// Interpreter discovery settings
    pub interpreter: InterpreterConfig,

    /// Delegated program settings
    pub target: TargetConfig,

    /// When to wait for a key press before exiting
    pub pause: PauseMode,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            interpreter: InterpreterConfig::default(),
            target: TargetConfig::default(),
            pause: PauseMode::default(),
        }
    }
}

/// Interpreter discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Names or paths tried in order
    pub candidates: Vec<String>,

    /// Minimum accepted version, e.g. "3.8"
    pub min_version: String,

    /// Modules that must import before the target is started
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            min_version: DEFAULT_MIN_VERSION.to_string(),
            modules: Vec::new(),
        }
    }
}

/// Delegated program settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Script run by the interpreter
    pub script: PathBuf,

    /// Exit with the script's exit code instead of 0
    #[serde(skip_serializing_if = "is_false")]
    pub propagate_exit_code: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from(DEFAULT_SCRIPT),
            propagate_exit_code: false,
        }
    }
}

/// When to wait for acknowledgment before the launcher exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseMode {
    /// Pause only on an interactive console outside CI.
    #[default]
    Auto,
    /// Always pause.
    Always,
    /// Never pause.
    Never,
}

impl PauseMode {
    /// Decide whether to pause given the console state.
    pub fn should_pause(&self, interactive: bool, ci: bool) -> bool {
        match self {
            PauseMode::Auto => interactive && !ci,
            PauseMode::Always => true,
            PauseMode::Never => false,
        }
    }
}

impl FromStr for PauseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(format!("unknown pause mode: {}", s)),
        }
    }
}

impl fmt::Display for PauseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PauseMode::Auto => "auto",
            PauseMode::Always => "always",
            PauseMode::Never => "never",
        };
        f.write_str(s)
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
