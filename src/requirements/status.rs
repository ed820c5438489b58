//! Interpreter probe status types.
//!
//! Each probed candidate produces a `ProbeStatus` that describes whether
//! and how the interpreter is available on the system.

use super::version::PythonVersion;
use std::path::PathBuf;

/// The result of probing a single interpreter candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// Interpreter answered `--version` with an acceptable version.
    Available {
        /// Resolved executable path
        path: PathBuf,
        /// Reported version
        version: PythonVersion,
    },

    /// Interpreter runs but is older than the configured minimum.
    TooOld {
        /// Resolved executable path
        path: PathBuf,
        /// Reported version
        found: PythonVersion,
        /// Minimum accepted version
        required: PythonVersion,
    },

    /// An executable with this name exists but did not behave like an
    /// interpreter (non-zero exit, unreadable version, failed to start).
    Broken {
        /// Resolved executable path
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Nothing with this name on the search path.
    Missing,
}

impl ProbeStatus {
    /// Whether the launch may proceed with this interpreter.
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeStatus::Available { .. })
    }

    /// How much a failed status tells the user; used to pick which failure
    /// to report when every candidate failed.
    pub(crate) fn severity_rank(&self) -> u8 {
        match self {
            ProbeStatus::Available { .. } => 3,
            ProbeStatus::TooOld { .. } => 2,
            ProbeStatus::Broken { .. } => 1,
            ProbeStatus::Missing => 0,
        }
    }
}

/// The status of a candidate, together with the candidate that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Candidate name or path as configured
    pub candidate: String,
    /// Outcome for that candidate
    pub status: ProbeStatus,
}

impl ProbeReport {
    /// The interpreter to hand to the delegator, if available.
    pub fn interpreter(&self) -> Option<&PathBuf> {
        match &self.status {
            ProbeStatus::Available { path, .. } => Some(path),
            _ => None,
        }
    }
}
