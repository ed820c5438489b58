//! Launcher configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Environment and flag overrides in [`overrides`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use loan_launcher::config::{load_config, validate, PauseMode};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("launcher.yml"), "pause: never").unwrap();
//!
//! let loaded = load_config(None, temp.path(), None).unwrap();
//! validate(&loaded.config).unwrap();
//! assert_eq!(loaded.config.pause, PauseMode::Never);
//! ```

pub mod loader;
pub mod overrides;
pub mod schema;
pub mod validator;

pub use loader::{
    executable_dir, find_config_file, load_config, load_config_file, parse_config, LoadedConfig,
    CONFIG_FILE_NAME,
};
pub use overrides::ConfigOverrides;
pub use schema::{InterpreterConfig, LauncherConfig, PauseMode, TargetConfig};
pub use validator::validate;
