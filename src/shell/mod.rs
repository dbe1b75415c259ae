//! Interactive command loop.
//!
//! Reads one command per line, runs it, and keeps going until `exit` or end
//! of input. Scans run one at a time: the next prompt is shown only after the
//! current scan has finished or timed out. A failed command is reported and
//! never ends the loop; only a broken terminal does.

mod command;

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::app::normalize_target_url;
use crate::config::PROMPT;
use crate::display::{
    render_about, render_clear, render_connecting, render_error, render_goodbye, render_help,
    render_report, render_response_headers, render_unknown, render_version, DisplayContext,
};
use crate::error_handling::CommandError;
use crate::security::{HeaderEvaluator, ScanReport};

pub use command::{Command, CommandKind};

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the prompt again
    Continue,
    /// Leave the loop
    Exit,
}

/// The read-eval-print loop around a [`HeaderEvaluator`].
pub struct CommandLoop {
    evaluator: HeaderEvaluator,
    ctx: DisplayContext,
}

impl CommandLoop {
    /// Creates a loop that scans with `evaluator` and prints through `ctx`.
    pub fn new(evaluator: HeaderEvaluator, ctx: DisplayContext) -> Self {
        Self { evaluator, ctx }
    }

    /// Runs the loop until `exit` or end of input.
    ///
    /// Returns the number of non-empty commands processed.
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures end the loop with an error. Scan failures and
    /// bad input are printed and the loop continues.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        out: &mut W,
    ) -> Result<usize, CommandError> {
        render_version(&self.ctx, out)?;
        writeln!(out, "Type 'help' for a list of commands.\n")?;

        let mut processed = 0;
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input, leaving command loop");
                writeln!(out)?;
                render_goodbye(&self.ctx, out)?;
                break;
            }

            let command = Command::parse(&line);
            if command == Command::Empty {
                continue;
            }
            processed += 1;

            match self.execute(&command, out).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CommandError::Io(e)) => return Err(CommandError::Io(e)),
                Err(e) => render_error(&self.ctx, out, &e)?,
            }
        }

        info!("Command loop finished after {processed} command(s)");
        Ok(processed)
    }

    /// Runs a single parsed command.
    pub async fn execute<W: Write>(
        &self,
        command: &Command,
        out: &mut W,
    ) -> Result<Flow, CommandError> {
        match command {
            Command::Scan(Some(target)) => {
                self.scan(target, out).await?;
            }
            Command::Scan(None) => return Err(CommandError::MissingUrl),
            Command::Help => render_help(&self.ctx, out)?,
            Command::About => render_about(&self.ctx, out)?,
            Command::Version => render_version(&self.ctx, out)?,
            Command::Clear => render_clear(&self.ctx, out)?,
            Command::Exit => {
                render_goodbye(&self.ctx, out)?;
                return Ok(Flow::Exit);
            }
            Command::Unknown(word) => render_unknown(&self.ctx, out, word)?,
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    /// Scans one target and prints the raw headers followed by the report.
    ///
    /// Nothing but the connection notice is printed when the scan fails.
    pub async fn scan<W: Write>(
        &self,
        target: &str,
        out: &mut W,
    ) -> Result<ScanReport, CommandError> {
        let url = normalize_target_url(target)?;
        render_connecting(&self.ctx, out, &url)?;
        out.flush()?;

        let (report, summary) = self.evaluator.evaluate_with_response(&url).await?;
        render_response_headers(&self.ctx, out, &report.url, &summary)?;
        render_report(&self.ctx, out, &report)?;
        Ok(report)
    }
}
