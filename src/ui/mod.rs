//! User-facing console output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for a styled interactive console
//! - [`NonInteractiveUI`] for redirected output and CI
//! - [`MockUI`] for asserting on output in tests
//!
//! # Example
//!
//! ```
//! use loan_launcher::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("贷款分期金融计算器");
//! ui.error("未找到 Python");
//! assert_eq!(ui.errors(), ["未找到 Python"]);
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LauncherTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a follow-up hint under an error or warning.
    fn show_hint(&mut self, hint: &str);

    /// Print `prompt` and block until the user acknowledges it.
    fn wait_for_acknowledgment(&mut self, prompt: &str);
}
