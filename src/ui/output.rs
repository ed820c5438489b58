//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the banner, status, warnings and errors.
    #[default]
    Normal,
    /// Show warnings and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows the banner and status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
