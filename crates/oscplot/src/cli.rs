//! Command-line interface for `oscplot`.
//!
//! Defines the CLI contract using clap derive macros. Every flag is optional:
//! anything left unset falls back to the config file, then to the built-in
//! defaults.
//!
//! # Examples
//!
//! ```bash
//! # Default demonstration: 1000 samples over 20 s, all three modes
//! oscplot
//!
//! # Heavier damping, damped mode only
//! oscplot --damping 2.0 --mode damped
//!
//! # Write the figure as SVG
//! oscplot --format svg --output motion.svg
//!
//! # Export the series as CSV
//! oscplot --format csv --samples 200 > motion.csv
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use oscillator::Mode;
use serde::{Deserialize, Serialize};

/// Plot the trajectory of a simple, damped or driven harmonic oscillator.
///
/// Evaluates the closed-form solutions of M·x'' + B·x' + K·x = F_ext·cos(ω_ext·t)
/// over a uniform time grid and renders one chart per mode.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "oscplot",
    author,
    version,
    about = "Plot simple, damped and driven oscillator trajectories",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, short = 'c', env = "OSCPLOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mass M in kilograms
    #[arg(long, env = "OSCPLOT_MASS")]
    pub mass: Option<f64>,

    /// Spring stiffness K in newtons per meter
    #[arg(long, env = "OSCPLOT_STIFFNESS")]
    pub stiffness: Option<f64>,

    /// Damping coefficient B in newton-seconds per meter
    #[arg(long, env = "OSCPLOT_DAMPING")]
    pub damping: Option<f64>,

    /// Amplitude of the driving force in newtons
    #[arg(long, env = "OSCPLOT_FORCE_AMPLITUDE")]
    pub force_amplitude: Option<f64>,

    /// Angular frequency of the driving force in rad/s
    #[arg(long, env = "OSCPLOT_FORCE_FREQUENCY")]
    pub force_frequency: Option<f64>,

    /// Initial displacement in meters
    #[arg(long)]
    pub x0: Option<f64>,

    /// Initial velocity in m/s (the closed-form solutions require 0)
    #[arg(long)]
    pub v0: Option<f64>,

    /// Length of the time window in seconds
    #[arg(long, short = 'd', env = "OSCPLOT_DURATION")]
    pub duration: Option<f64>,

    /// Number of time samples
    #[arg(long, short = 'n', env = "OSCPLOT_SAMPLES")]
    pub samples: Option<usize>,

    /// Mode to plot (repeatable): simple, damped or forced
    ///
    /// Defaults to all three
    #[arg(long = "mode", short = 'm')]
    pub modes: Vec<Mode>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (stdout if omitted; required for svg)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Chart width (terminal cells for text, pixels for svg)
    #[arg(long)]
    pub width: Option<u32>,

    /// Chart height per panel in terminal rows, or total svg height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Force color output off
    ///
    /// Respects `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Force color output on (overrides `NO_COLOR`)
    #[arg(long, conflicts_with = "no_color")]
    pub force_color: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output formats.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Stacked character-cell charts
    #[default]
    Text,
    /// Stacked line charts as an SVG image
    Svg,
    /// One row per time sample
    Csv,
    /// Parameters plus every series
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only show warnings and errors
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages
    Debug,
    /// Show all messages including trace
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
