//! Interpreter probe.
//!
//! Finds the first interpreter candidate on the search path that answers
//! `--version` with a recent enough version. Both output streams of the
//! version query are captured so nothing leaks onto the user's console.
//!
//! # Example
//!
//! ```no_run
//! use loan_launcher::requirements::probe::InterpreterProbe;
//! use loan_launcher::requirements::version::PythonVersion;
//!
//! let probe = InterpreterProbe::new(vec!["python3".into()], PythonVersion::new(3, 8, 0));
//! let report = probe.run();
//! if let Some(python) = report.interpreter() {
//!     println!("using {}", python.display());
//! }
//! ```

use super::status::{ProbeReport, ProbeStatus};
use super::version::PythonVersion;
use crate::shell::{execute, CommandOptions};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names to try for `tool` inside one search directory.
///
/// On Windows a bare name is also tried with every `PATHEXT` extension.
fn candidate_file_names(tool: &str) -> Vec<OsString> {
    let mut names = vec![OsString::from(tool)];
    if cfg!(windows) && Path::new(tool).extension().is_none() {
        let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".into());
        for ext in pathext.split(';').filter(|e| !e.is_empty()) {
            names.push(OsString::from(format!("{}{}", tool, ext.to_lowercase())));
        }
    }
    names
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_file_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Whether a candidate names a file directly rather than a bare command.
fn is_explicit_path(candidate: &str) -> bool {
    let path = Path::new(candidate);
    path.is_absolute() || path.components().count() > 1
}

/// Probes interpreter candidates in order.
#[derive(Debug, Clone)]
pub struct InterpreterProbe {
    candidates: Vec<String>,
    minimum: PythonVersion,
    path_entries: Vec<PathBuf>,
}

impl InterpreterProbe {
    /// Probe against the system PATH.
    pub fn new(candidates: Vec<String>, minimum: PythonVersion) -> Self {
        Self::with_path(candidates, minimum, parse_system_path())
    }

    /// Probe against an explicit list of search directories.
    pub fn with_path(
        candidates: Vec<String>,
        minimum: PythonVersion,
        path_entries: Vec<PathBuf>,
    ) -> Self {
        Self {
            candidates,
            minimum,
            path_entries,
        }
    }

    /// Minimum version this probe accepts.
    pub fn minimum(&self) -> PythonVersion {
        self.minimum
    }

    /// Try every candidate and return the first available one, or the most
    /// informative failure when none is available.
    pub fn run(&self) -> ProbeReport {
        let mut worst: Option<ProbeReport> = None;

        for candidate in &self.candidates {
            let status = self.probe_candidate(candidate);
            tracing::debug!("Probe {}: {:?}", candidate, status);

            let report = ProbeReport {
                candidate: candidate.clone(),
                status,
            };
            if report.status.is_available() {
                return report;
            }

            let replace = worst
                .as_ref()
                .map(|w| report.status.severity_rank() > w.status.severity_rank())
                .unwrap_or(true);
            if replace {
                worst = Some(report);
            }
        }

        worst.unwrap_or_else(|| ProbeReport {
            candidate: String::new(),
            status: ProbeStatus::Missing,
        })
    }

    /// Resolve and query a single candidate.
    pub fn probe_candidate(&self, candidate: &str) -> ProbeStatus {
        let resolved = if is_explicit_path(candidate) {
            let path = PathBuf::from(candidate);
            (path.is_file() && is_executable(&path)).then_some(path)
        } else {
            resolve_tool_path(candidate, &self.path_entries)
        };

        let Some(path) = resolved else {
            return ProbeStatus::Missing;
        };

        // The delegate runs in another directory, so a relative hit must
        // be anchored to the current one.
        let path = std::path::absolute(&path).unwrap_or(path);

        self.query_version(path)
    }

    fn query_version(&self, path: PathBuf) -> ProbeStatus {
        let result = match execute(&path, &["--version"], &CommandOptions::captured()) {
            Ok(result) => result,
            Err(e) => {
                return ProbeStatus::Broken {
                    path,
                    message: e.to_string(),
                }
            }
        };

        if !result.success {
            return ProbeStatus::Broken {
                path,
                message: format!("--version exited with code {:?}", result.exit_code),
            };
        }

        let version = PythonVersion::from_banner(&result.stdout)
            .or_else(|| PythonVersion::from_banner(&result.stderr));

        match version {
            Some(version) if version.satisfies(&self.minimum) => {
                ProbeStatus::Available { path, version }
            }
            Some(found) => ProbeStatus::TooOld {
                path,
                found,
                required: self.minimum,
            },
            None => ProbeStatus::Broken {
                path,
                message: "unrecognized --version output".to_string(),
            },
        }
    }
}

/// Default interpreter names for this platform.
pub fn default_candidates() -> Vec<String> {
    if cfg!(windows) {
        vec!["python".to_string(), "py".to_string()]
    } else {
        vec!["python".to_string(), "python3".to_string()]
    }
}
