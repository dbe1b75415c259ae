//! Terminal output.
//!
//! All user-facing output goes through a [`DisplayContext`], created once at
//! startup and passed to every routine here. The context decides whether text
//! is colored and whether reports are rendered as text or JSON, so no output
//! routine depends on process-wide console state.
//!
//! Routines write to any `std::io::Write`, which keeps them testable against
//! an in-memory buffer.

mod report;
mod text;

use std::io::IsTerminal;

use colored::{Color, Colorize};

use crate::config::{Config, OutputFormat};

pub use report::{render_connecting, render_report, render_response_headers};
pub use text::{
    render_about, render_clear, render_error, render_goodbye, render_help, render_unknown,
    render_version,
};

/// Output settings shared by every display routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayContext {
    color: bool,
    format: OutputFormat,
}

impl DisplayContext {
    /// Creates a context with explicit settings.
    pub fn new(color: bool, format: OutputFormat) -> Self {
        Self { color, format }
    }

    /// Creates the context for this process: color only when requested and
    /// stdout is a terminal.
    pub fn from_config(config: &Config) -> Self {
        let color = config.color && std::io::stdout().is_terminal();
        Self::new(color, config.format)
    }

    /// Uncolored text output.
    pub fn plain() -> Self {
        Self::new(false, OutputFormat::Plain)
    }

    /// Whether output is colored.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Report output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub(crate) fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self::plain()
    }
}
