//! Turns parsed arguments into a configured launch.

use crate::cli::Cli;
use crate::config::{load_config, validate, ConfigOverrides, LauncherConfig, LoadedConfig};
use crate::error::Result;
use crate::launcher::Launcher;
use crate::requirements::PythonVersion;
use std::path::{Path, PathBuf};

/// Directories searched for a relative script path, without duplicates:
/// the config file's directory, the working directory, the executable's
/// directory.
pub fn search_dirs(config_dir: Option<&Path>, cwd: &Path, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for dir in config_dir.into_iter().chain([cwd]).chain(exe_dir) {
        if !dirs.iter().any(|d| d == dir) {
            dirs.push(dir.to_path_buf());
        }
    }
    dirs
}

/// The directory relative paths are taken from.
///
/// Falls back to the executable's directory when the working directory
/// cannot be read (for example, after it was deleted).
pub fn working_dir(current: std::io::Result<PathBuf>, exe_dir: Option<&Path>) -> PathBuf {
    match current {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("Working directory unavailable ({}), using the executable's", e);
            exe_dir.map(Path::to_path_buf).unwrap_or_default()
        }
    }
}

/// A fully layered and validated configuration, ready to launch.
#[derive(Debug, Clone)]
pub struct LaunchSession {
    pub config: LauncherConfig,
    pub minimum: PythonVersion,
    pub search_dirs: Vec<PathBuf>,
    pub source: Option<PathBuf>,
}

impl LaunchSession {
    /// Load, layer and validate configuration for `cli`.
    pub fn prepare(
        cli: &Cli,
        cwd: &Path,
        exe_dir: Option<&Path>,
        env: ConfigOverrides,
    ) -> Result<Self> {
        let loaded = load_config(cli.config.as_deref(), cwd, exe_dir)?;
        let config_dir = loaded.base_dir().map(Path::to_path_buf);
        let LoadedConfig { mut config, source } = loaded;

        env.apply(&mut config);
        cli.overrides().apply(&mut config);

        let minimum = validate(&config)?;
        let search_dirs = search_dirs(config_dir.as_deref(), cwd, exe_dir);

        tracing::debug!("Effective config: {:?}", config);

        Ok(Self {
            config,
            minimum,
            search_dirs,
            source,
        })
    }

    /// Build the launcher. `pause` is the decided acknowledgment behavior.
    pub fn launcher(&self, pause: bool) -> Launcher {
        Launcher::from_config(&self.config, self.minimum, self.search_dirs.clone(), pause)
    }
}
