//! Plain UI for redirected output and CI.

use std::io::BufRead;

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Status and hints go to stdout, warnings and errors to stderr, with no
/// styling. Hints carry the install instructions, so they stay with the
/// status text.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}\n", super::LauncherTheme::plain().format_header(title));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        println!("  {}", hint);
    }

    /// Reads one line from stdin; EOF counts as acknowledgment.
    fn wait_for_acknowledgment(&mut self, prompt: &str) {
        println!("\n{}", prompt);
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line).ok();
    }
}
