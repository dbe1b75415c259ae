//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `webtester` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Choosing between a one-shot scan and the interactive prompt
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use webtester::display::render_error;
use webtester::initialization::init_logger_with;
use webtester::{CommandLoop, Config, DisplayContext, HeaderEvaluator, Opt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let target = opt.url.clone();
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let ctx = DisplayContext::from_config(&config);
    let evaluator =
        HeaderEvaluator::new(config.timeout()).context("Failed to initialize HTTP client")?;
    let shell = CommandLoop::new(evaluator, ctx);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match target {
        Some(target) => {
            if let Err(e) = shell.scan(&target, &mut out).await {
                render_error(&ctx, &mut out, &e).context("Failed to write to stdout")?;
                out.flush().context("Failed to write to stdout")?;
                process::exit(1);
            }
        }
        None => {
            shell
                .run(io::stdin().lock(), &mut out)
                .await
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}
