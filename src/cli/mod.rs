//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`session`] - Turns parsed arguments into a configured launch

pub mod args;
pub mod session;

pub use args::{Cli, PauseArg};
pub use session::{search_dirs, working_dir, LaunchSession};
