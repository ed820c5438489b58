//! CLI argument definitions.
//!
//! Every flag is optional: a bare invocation (or a double-click) launches
//! the calculator with defaults.

use crate::config::{ConfigOverrides, PauseMode};
use clap::Parser;
use std::path::PathBuf;

/// Launcher for the loan installment calculator.
#[derive(Debug, Parser)]
#[command(name = "loan-launcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides launcher.yml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Script to run instead of loan_calculator.py
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Interpreter name or path to use (repeatable, tried in order)
    #[arg(long = "python", value_name = "NAME_OR_PATH")]
    pub python: Vec<String>,

    /// Minimum accepted interpreter version, e.g. 3.10
    #[arg(long, value_name = "X.Y")]
    pub min_python: Option<String>,

    /// When to wait for a key press before exiting
    #[arg(long, value_enum, value_name = "MODE")]
    pub pause: Option<PauseArg>,

    /// Never wait for a key press (same as --pause never)
    #[arg(long, conflicts_with = "pause")]
    pub no_pause: bool,

    /// Exit with the script's exit code instead of 0
    #[arg(long)]
    pub propagate_exit_code: bool,

    /// Show warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// `--pause` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PauseArg {
    Auto,
    Always,
    Never,
}

impl From<PauseArg> for PauseMode {
    fn from(arg: PauseArg) -> Self {
        match arg {
            PauseArg::Auto => PauseMode::Auto,
            PauseArg::Always => PauseMode::Always,
            PauseArg::Never => PauseMode::Never,
        }
    }
}

impl Cli {
    /// The highest-priority configuration layer.
    pub fn overrides(&self) -> ConfigOverrides {
        let pause = if self.no_pause {
            Some(PauseMode::Never)
        } else {
            self.pause.map(PauseMode::from)
        };

        ConfigOverrides {
            candidates: self.python.clone(),
            script: self.script.clone(),
            min_version: self.min_python.clone(),
            pause,
            propagate_exit_code: self.propagate_exit_code,
        }
    }
}
