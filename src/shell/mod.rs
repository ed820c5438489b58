//! Child process execution and console detection.

pub mod command;
pub mod platform;

pub use command::{execute, execute_check, CommandOptions, CommandResult};
pub use platform::{is_ci, is_ci_with_env, is_interactive_console};
