//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips ANSI codes when the stream
//! doesn't support color.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Check mark glyph
pub const CHECK: &str = "✓";

/// Semantic styles for CLI output
pub trait Stylize {
    /// Bold, for names the user typed or should notice
    fn emphasis(&self) -> String;
    /// Dimmed secondary text
    fn muted(&self) -> String;
    /// Highlighted values (project paths, counts)
    fn accent(&self) -> String;
    /// Success messages
    fn success(&self) -> String;
    /// Error labels
    fn failure(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn failure(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}

/// Spinner style used while waiting on the remote service
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""])
}
