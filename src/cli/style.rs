//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Color roles used across command output
pub trait Stylize {
    /// Values the user should notice (names, URLs)
    fn accent(&self) -> String;
    /// Secondary labels
    fn muted(&self) -> String;
    /// Headings
    fn emphasis(&self) -> String;
    /// Error text
    fn failure(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string()
    }

    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
    }

    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
    }

    fn failure(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.red()).to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    "✓".if_supports_color(Stream::Stdout, |t| t.green()).to_string()
}

/// Red cross
pub fn cross() -> String {
    "✗".if_supports_color(Stream::Stderr, |t| t.red()).to_string()
}

/// Spinner used while waiting on the network
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
