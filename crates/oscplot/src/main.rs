#![forbid(unsafe_code)]

//! # oscplot CLI
//!
//! Plots simple, damped and driven harmonic oscillator motion.
//!
//! ## Usage
//!
//! ```bash
//! oscplot                                   # All three modes on the terminal
//! oscplot --mode damped --damping 1.0       # One mode, heavier damping
//! oscplot --format svg --output motion.svg  # SVG figure
//! ```

use std::process::ExitCode;

use anyhow::Context;
use oscplot::{Cli, Config, logging};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.log_level());

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::from_cli(cli).context("invalid configuration")?;
    debug!(?config, "resolved configuration");
    oscplot::run(&config)?;
    Ok(())
}
