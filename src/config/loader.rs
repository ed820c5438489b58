//! Configuration file discovery and loading.

use crate::config::schema::LauncherConfig;
use crate::error::{LauncherError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked for when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "launcher.yml";

/// A configuration together with the file it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The parsed (or default) configuration
    pub config: LauncherConfig,

    /// The file it was read from, if any
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Directory of the config file, used to resolve relative script paths.
    pub fn base_dir(&self) -> Option<&Path> {
        self.source.as_deref().and_then(Path::parent)
    }
}

/// Directory holding the running executable.
pub fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Find the config file to load.
///
/// An explicit path must exist; a relative one is taken from `cwd`.
/// Otherwise `launcher.yml` is looked up in `cwd`, then in `exe_dir`.
/// `Ok(None)` means built-in defaults apply.
pub fn find_config_file(
    explicit: Option<&Path>,
    cwd: &Path,
    exe_dir: Option<&Path>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = cwd.join(path);
        if path.is_file() {
            return Ok(Some(path));
        }
        return Err(LauncherError::ConfigNotFound { path });
    }

    let found = std::iter::once(cwd)
        .chain(exe_dir)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file());

    Ok(found)
}

/// Parse configuration from a YAML string.
pub fn parse_config(content: &str, path: &Path) -> Result<LauncherConfig> {
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LauncherError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<LauncherConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Discover and load the configuration.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
    exe_dir: Option<&Path>,
) -> Result<LoadedConfig> {
    match find_config_file(explicit, cwd, exe_dir)? {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            let config = load_config_file(&path)?;
            Ok(LoadedConfig {
                config,
                source: Some(path),
            })
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(LoadedConfig::default())
        }
    }
}
