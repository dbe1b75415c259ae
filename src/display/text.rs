//! Static texts: help, about, version banner and short notices.

use std::io::{self, Write};

use colored::Color;
use strum::IntoEnumIterator;

use super::DisplayContext;
use crate::config::{TOOL_NAME, TOOL_VERSION};
use crate::shell::CommandKind;

/// ANSI "erase display" followed by "cursor home".
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Prints the command listing.
pub fn render_help<W: Write>(_ctx: &DisplayContext, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Available Commands ---")?;
    for kind in CommandKind::iter() {
        writeln!(out, "  {:<11} : {}", kind.usage(), kind.summary())?;
    }
    writeln!(out, "--------------------------\n")
}

/// Prints what the tool does and the usage disclaimer.
pub fn render_about<W: Write>(_ctx: &DisplayContext, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- About {TOOL_NAME} ---")?;
    writeln!(out, "{TOOL_NAME} is a basic tool for educational purposes.")?;
    writeln!(
        out,
        "It checks for the presence of common HTTP security headers on websites."
    )?;
    writeln!(out, "\nDisclaimer: It only checks for the presence of certain HTTP security headers.")?;
    writeln!(
        out,
        "A real vulnerability scanner is far more complex and requires ethical considerations."
    )?;
    writeln!(
        out,
        "Always ensure you have explicit permission before scanning any website."
    )?;
    writeln!(out, "-----------------------\n")
}

/// Prints the boxed name banner and version.
pub fn render_version<W: Write>(ctx: &DisplayContext, out: &mut W) -> io::Result<()> {
    let border = format!("+{}+", "-".repeat(TOOL_NAME.len() + 1));
    let name = format!("| {TOOL_NAME}|");
    writeln!(out, "{}", ctx.paint(&border, Color::Blue))?;
    writeln!(out, "{}", ctx.paint(&name, Color::Blue))?;
    writeln!(out, "{}", ctx.paint(&border, Color::Blue))?;
    writeln!(out, "       v{TOOL_VERSION}\n")
}

/// Clears the terminal.
pub fn render_clear<W: Write>(_ctx: &DisplayContext, out: &mut W) -> io::Result<()> {
    write!(out, "{CLEAR_SEQUENCE}")?;
    out.flush()
}

/// Notice for input that is not a known command.
pub fn render_unknown<W: Write>(ctx: &DisplayContext, out: &mut W, command: &str) -> io::Result<()> {
    let notice = format!("Unknown command: '{command}'. Type 'help' for a list of commands.");
    writeln!(out, "{}", ctx.paint(&notice, Color::Yellow))
}

/// Prints an error with a red `Error:` prefix.
pub fn render_error<W: Write>(
    ctx: &DisplayContext,
    out: &mut W,
    error: &dyn std::fmt::Display,
) -> io::Result<()> {
    writeln!(out, "{} {error}", ctx.paint("Error:", Color::Red))
}

/// Farewell printed when the loop ends.
pub fn render_goodbye<W: Write>(_ctx: &DisplayContext, out: &mut W) -> io::Result<()> {
    writeln!(out, "Exiting {TOOL_NAME}. Goodbye!")
}
