//! Terminal styling for stderr diagnostics
//!
//! Output goes through `anstream`, which strips colors when stderr is not a
//! terminal. The payload on stdout is never styled.

use owo_colors::OwoColorize;

/// Semantic color helpers
pub trait Stylize {
    /// De-emphasized text
    fn muted(&self) -> String;
    /// Highlighted text
    fn emphasis(&self) -> String;
    /// Positive outcome
    fn success(&self) -> String;
    /// Failure
    fn error(&self) -> String;
}

impl<T: std::fmt::Display> Stylize for T {
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Check mark
pub fn check() -> String {
    "✓".success()
}

/// Cross mark
pub fn cross() -> String {
    "✗".error()
}

/// Bullet for trace lines
pub fn arrow() -> String {
    "→".muted()
}
