//! loan-launcher - desktop launcher for the loan installment calculator.
//!
//! The launcher checks that a recent enough Python interpreter is on the
//! search path and then hands the console over to `loan_calculator.py`.
//! When no interpreter is found it explains what to install and exits
//! with status 1 without starting anything.
//!
//! # Modules
//!
//! - [`cli`] - Command-line arguments and configuration layering
//! - [`config`] - Configuration schema, loading, and validation
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - The probe, delegate, acknowledge sequence
//! - [`requirements`] - Interpreter discovery and version checks
//! - [`shell`] - Child process execution and console detection
//! - [`ui`] - Console output and the acknowledgment pause
//!
//! # Example
//!
//! ```
//! use loan_launcher::requirements::PythonVersion;
//!
//! let found = PythonVersion::from_banner("Python 3.11.4").unwrap();
//! assert!(found.satisfies(&PythonVersion::new(3, 8, 0)));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, Result};
