//! Interpreter detection.
//!
//! This module decides whether a usable Python interpreter is reachable
//! before anything is delegated to it.
//!
//! # Modules
//!
//! - [`probe`] - Search-path lookup and `--version` query of candidates
//! - [`status`] - Probe status types
//! - [`version`] - Version banner parsing and comparison
//! - [`modules`] - Optional import preflight for required packages

pub mod modules;
pub mod probe;
pub mod status;
pub mod version;

pub use modules::missing_modules;
pub use probe::{default_candidates, resolve_tool_path, InterpreterProbe};
pub use status::{ProbeReport, ProbeStatus};
pub use version::PythonVersion;
