#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # oscplot
//!
//! Plots the motion of a mass on a spring in three regimes (free, damped
//! and sinusoidally driven) using the closed-form solutions from the
//! [`oscillator`] crate.
//!
//! A run evaluates every selected mode over one shared time grid and renders
//! the result as:
//! - stacked character-cell charts on the terminal (the default),
//! - an SVG image,
//! - CSV or JSON for further analysis.
//!
//! ## Quick start (library)
//!
//! ```rust
//! use oscplot::{Config, Figure, OutputFormat};
//!
//! let mut config = Config::default();
//! config.grid.samples = 100;
//! config.render.format = OutputFormat::Csv;
//!
//! let figure = Figure::build(&config).unwrap();
//! let table = oscplot::render(&figure, &config, false).unwrap();
//! assert!(table.starts_with("t,simple,damped,forced"));
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! oscplot
//! oscplot --damping 1.2 --mode damped --mode forced
//! oscplot --format svg --output motion.svg
//! oscplot --config oscillator.toml --format json
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod figure;
pub mod logging;
pub mod render;

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use oscillator::MotionError;
use thiserror::Error;
use tracing::{debug, info};

pub use cli::{Cli, LogLevel, OutputFormat};
pub use config::{ColorMode, Config, ConfigError, GridConfig, RenderConfig};
pub use figure::{Figure, Panel, Rgb};
pub use render::TextOptions;

/// Errors returned by a plotting run.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration could not be loaded or is out of range.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A mode could not be evaluated.
    #[error(transparent)]
    Motion(#[from] MotionError),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV encoding failed.
    #[error("failed to encode csv: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed.
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),

    /// The SVG backend failed to draw the figure.
    #[error("failed to draw figure: {0}")]
    Plot(String),
}

/// Renders `figure` in the format chosen by `config`.
///
/// `color` only affects the text format.
///
/// # Errors
///
/// Returns the renderer's error for svg, csv and json output.
pub fn render(figure: &Figure, config: &Config, color: bool) -> Result<String, Error> {
    let (width, height) = config.render.size();
    match config.render.format {
        OutputFormat::Text => Ok(render::terminal::render(
            figure,
            &TextOptions {
                width: width as usize,
                height: height as usize,
                color,
            },
        )),
        OutputFormat::Svg => render::svg::render(figure, (width, height)),
        OutputFormat::Csv => export::csv(figure),
        OutputFormat::Json => export::json(figure),
    }
}

/// Evaluates, renders and writes one run.
///
/// Output goes to [`RenderConfig::output`] when set and to stdout otherwise.
///
/// # Errors
///
/// Returns [`Error::Config`] if `config` fails [`Config::validate`], then the
/// first evaluation, rendering or I/O failure. Nothing is written when
/// validation or evaluation fails.
pub fn run(config: &Config) -> Result<(), Error> {
    config.validate()?;
    let figure = Figure::build(config)?;

    let color = config.render.use_color(io::stdout().is_terminal());
    if color {
        colored::control::set_override(true);
    }
    debug!(format = ?config.render.format, color, "rendering figure");
    let rendered = render(&figure, config, color)?;

    match &config.render.output {
        Some(path) => {
            fs::write(path, rendered.as_bytes()).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), bytes = rendered.len(), "wrote figure");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cli::{Cli, OutputFormat};
    pub use crate::config::{ColorMode, Config, ConfigError};
    pub use crate::figure::{Figure, Panel};
    pub use crate::{Error, render, run};
}
