//! The launch sequence.
//!
//! A strictly linear sequence: banner, interpreter probe, optional import
//! preflight, delegation, acknowledgment. Any failure before delegation
//! ends the sequence with exit code 1 and the target is never started.
//!
//! # Example
//!
//! ```no_run
//! use loan_launcher::config::{validate, LauncherConfig};
//! use loan_launcher::launcher::Launcher;
//! use loan_launcher::ui::{create_ui, OutputMode};
//!
//! let config = LauncherConfig::default();
//! let minimum = validate(&config).unwrap();
//! let launcher = Launcher::from_config(&config, minimum, vec![".".into()], true);
//! let mut ui = create_ui(true, OutputMode::Normal);
//! let outcome = launcher.run(ui.as_mut());
//! std::process::exit(outcome.exit_code.into());
//! ```

pub mod delegate;
pub mod messages;

pub use delegate::{resolve_script, DelegateOutcome, Delegator};

use crate::config::LauncherConfig;
use crate::error::LauncherError;
use crate::requirements::{missing_modules, InterpreterProbe, ProbeStatus, PythonVersion};
use crate::ui::UserInterface;
use std::path::PathBuf;

/// Exit code for every failure the launcher detects itself.
pub const EXIT_FAILURE: u8 = 1;

/// What a launch ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Exit code for the launcher process.
    pub exit_code: u8,
    /// Whether the target program was started.
    pub delegated: bool,
}

/// Runs the launch sequence once.
#[derive(Debug, Clone)]
pub struct Launcher {
    title: String,
    probe: InterpreterProbe,
    modules: Vec<String>,
    script: PathBuf,
    search_dirs: Vec<PathBuf>,
    propagate_exit_code: bool,
    pause: bool,
}

impl Launcher {
    /// Build a launcher from a validated configuration.
    ///
    /// `search_dirs` are tried in order for a relative script path. `pause`
    /// is the already-decided acknowledgment behavior.
    pub fn from_config(
        config: &LauncherConfig,
        minimum: PythonVersion,
        search_dirs: Vec<PathBuf>,
        pause: bool,
    ) -> Self {
        Self {
            title: config.title.clone(),
            probe: InterpreterProbe::new(config.interpreter.candidates.clone(), minimum),
            modules: config.interpreter.modules.clone(),
            script: config.target.script.clone(),
            search_dirs,
            propagate_exit_code: config.target.propagate_exit_code,
            pause,
        }
    }

    /// Replace the interpreter probe.
    pub fn with_probe(mut self, probe: InterpreterProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Run banner, probe, preflight, delegation and acknowledgment.
    pub fn run(&self, ui: &mut dyn UserInterface) -> LaunchOutcome {
        ui.show_header(&self.title);
        ui.message(messages::STARTING);

        let report = self.probe.run();
        let minimum = self.probe.minimum();
        let interpreter = match report.status {
            ProbeStatus::Available { path, version } => {
                tracing::debug!("Using interpreter {} ({})", path.display(), version);
                ui.success(&messages::python_found(&path, version));
                path
            }
            ProbeStatus::Missing => {
                tracing::debug!("No interpreter found on PATH");
                ui.error(&messages::python_not_found(minimum));
                ui.show_hint(messages::PYTHON_DOWNLOAD_HINT);
                return self.finish(ui, EXIT_FAILURE, false);
            }
            ProbeStatus::TooOld {
                path,
                found,
                required,
            } => {
                tracing::debug!("{} is {}, need {}", path.display(), found, required);
                ui.error(&messages::python_too_old(found, required));
                ui.show_hint(messages::PYTHON_DOWNLOAD_HINT);
                return self.finish(ui, EXIT_FAILURE, false);
            }
            ProbeStatus::Broken { path, message } => {
                tracing::debug!("{} failed the version query: {}", path.display(), message);
                ui.error(&messages::python_broken(&path, &message));
                ui.error(&messages::python_not_found(minimum));
                ui.show_hint(messages::PYTHON_DOWNLOAD_HINT);
                return self.finish(ui, EXIT_FAILURE, false);
            }
        };

        let missing = missing_modules(&interpreter, &self.modules);
        if !missing.is_empty() {
            tracing::debug!(
                "{}",
                LauncherError::MissingModules {
                    modules: missing.clone()
                }
            );
            ui.error(&messages::missing_modules(&missing));
            ui.show_hint(messages::PIP_HINT);
            return self.finish(ui, EXIT_FAILURE, false);
        }

        let script = match resolve_script(&self.script, &self.search_dirs) {
            Ok(script) => script,
            Err(err) => {
                tracing::debug!("{} (searched {:?})", err, self.search_dirs);
                ui.error(&messages::script_not_found(&self.script));
                return self.finish(ui, EXIT_FAILURE, false);
            }
        };

        let outcome = match Delegator::new(interpreter, script).run() {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!("{}", err);
                ui.error(&messages::runtime_error(&err.to_string()));
                return self.finish(ui, EXIT_FAILURE, false);
            }
        };

        let exit_code = if outcome.success {
            ui.success(messages::FINISHED);
            0
        } else {
            ui.warning(&messages::abnormal_exit(outcome.exit_code));
            if self.propagate_exit_code {
                outcome
                    .exit_code
                    .and_then(|code| u8::try_from(code).ok())
                    .filter(|code| *code != 0)
                    .unwrap_or(EXIT_FAILURE)
            } else {
                0
            }
        };

        self.finish(ui, exit_code, true)
    }

    fn finish(&self, ui: &mut dyn UserInterface, exit_code: u8, delegated: bool) -> LaunchOutcome {
        if self.pause {
            ui.wait_for_acknowledgment(messages::PRESS_ANY_KEY);
        }
        LaunchOutcome {
            exit_code,
            delegated,
        }
    }
}
