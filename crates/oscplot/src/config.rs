//! Runtime configuration for `oscplot`.
//!
//! The [`Config`] struct is the single source of truth for a run, independent
//! of how the values were specified. Values are resolved in three layers:
//!
//! 1. built-in defaults (the reference oscillator),
//! 2. an optional TOML file (`--config`),
//! 3. command-line flags and their environment variables.
//!
//! # Config file
//!
//! ```toml
//! [parameters]
//! mass = 1.0
//! stiffness = 10.0
//! damping = 0.5
//! forcing_amplitude = 5.0
//! forcing_frequency = 1.5
//!
//! [initial]
//! displacement = 1.0
//! velocity = 0.0
//!
//! [grid]
//! duration = 20.0
//! samples = 1000
//!
//! [render]
//! modes = ["simple", "damped", "forced"]
//! format = "text"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use oscillator::{GridError, InitialConditions, Mode, PhysicalParameters, TimeGrid};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

/// Default chart size in terminal cells.
pub const DEFAULT_TEXT_SIZE: (u32, u32) = (72, 12);

/// Default figure size in pixels.
pub const DEFAULT_SVG_SIZE: (u32, u32) = (1200, 800);

/// Largest chart width or height, in cells, for text output.
pub const MAX_TEXT_SIZE: u32 = 1000;

/// Largest figure width or height, in pixels, for svg output.
pub const MAX_SVG_SIZE: u32 = 16_384;

/// Largest number of time samples.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A resolved value is out of range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Name of the offending setting.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Time grid settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Length of the time window in seconds; the grid spans `[0, duration]`.
    pub duration: f64,
    /// Number of samples, endpoints included.
    pub samples: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            duration: 20.0,
            samples: 1000,
        }
    }
}

impl GridConfig {
    /// Builds the uniform grid over `[0, duration]`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] for a negative or non-finite duration.
    pub fn time_grid(&self) -> Result<TimeGrid, GridError> {
        TimeGrid::linspace(0.0, self.duration, self.samples)
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Modes to plot, in panel order. Empty means all three.
    pub modes: Vec<Mode>,
    /// Output format.
    pub format: OutputFormat,
    /// Output file; stdout when unset.
    pub output: Option<PathBuf>,
    /// Chart width (cells or pixels depending on the format).
    pub width: Option<u32>,
    /// Chart height (rows per panel or total pixels).
    pub height: Option<u32>,
    /// Color output mode.
    pub color: ColorMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            modes: Mode::ALL.to_vec(),
            format: OutputFormat::Text,
            output: None,
            width: None,
            height: None,
            color: ColorMode::Auto,
        }
    }
}

impl RenderConfig {
    /// Modes to plot with duplicates removed; all modes when none were given.
    pub fn effective_modes(&self) -> Vec<Mode> {
        if self.modes.is_empty() {
            return Mode::ALL.to_vec();
        }
        let mut modes = Vec::with_capacity(self.modes.len());
        for mode in &self.modes {
            if !modes.contains(mode) {
                modes.push(*mode);
            }
        }
        modes
    }

    /// Chart size for the configured format.
    pub fn size(&self) -> (u32, u32) {
        let (width, height) = match self.format {
            OutputFormat::Svg => DEFAULT_SVG_SIZE,
            OutputFormat::Text | OutputFormat::Csv | OutputFormat::Json => DEFAULT_TEXT_SIZE,
        };
        (self.width.unwrap_or(width), self.height.unwrap_or(height))
    }

    /// Largest width or height accepted for the configured format.
    pub fn max_size(&self) -> u32 {
        match self.format {
            OutputFormat::Svg => MAX_SVG_SIZE,
            OutputFormat::Text | OutputFormat::Csv | OutputFormat::Json => MAX_TEXT_SIZE,
        }
    }

    /// Whether colors should be used, given whether the destination is a
    /// terminal.
    pub fn use_color(&self, is_terminal: bool) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal && self.output.is_none(),
        }
    }
}

/// Runtime configuration for a plotting run.
///
/// # Example
///
/// ```rust
/// use oscplot::Config;
///
/// let config = Config::default();
/// assert_eq!(config.grid.samples, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Physical constants.
    pub parameters: PhysicalParameters,
    /// Initial displacement and velocity.
    pub initial: InitialConditions,
    /// Time grid.
    pub grid: GridConfig,
    /// Rendering.
    pub render: RenderConfig,
}

impl Config {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Resolves the config for a CLI invocation: defaults, then the config
    /// file, then flags.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be loaded or the result
    /// fails [`Config::validate`].
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Overrides every setting the CLI specified.
    pub fn apply_cli(&mut self, cli: &Cli) {
        let params = &mut self.parameters;
        if let Some(mass) = cli.mass {
            params.mass = mass;
        }
        if let Some(stiffness) = cli.stiffness {
            params.stiffness = stiffness;
        }
        if let Some(damping) = cli.damping {
            params.damping = damping;
        }
        if let Some(amplitude) = cli.force_amplitude {
            params.forcing_amplitude = amplitude;
        }
        if let Some(frequency) = cli.force_frequency {
            params.forcing_frequency = frequency;
        }

        if let Some(x0) = cli.x0 {
            self.initial.displacement = x0;
        }
        if let Some(v0) = cli.v0 {
            self.initial.velocity = v0;
        }

        if let Some(duration) = cli.duration {
            self.grid.duration = duration;
        }
        if let Some(samples) = cli.samples {
            self.grid.samples = samples;
        }

        let render = &mut self.render;
        if !cli.modes.is_empty() {
            render.modes.clone_from(&cli.modes);
        }
        if let Some(format) = cli.format {
            render.format = format;
        }
        if cli.output.is_some() {
            render.output.clone_from(&cli.output);
        }
        if cli.width.is_some() {
            render.width = cli.width;
        }
        if cli.height.is_some() {
            render.height = cli.height;
        }
        if cli.force_color {
            render.color = ColorMode::Always;
        } else if cli.no_color {
            render.color = ColorMode::Never;
        }
    }

    /// Checks that every value is in range.
    ///
    /// The closed-form regime and resonance checks happen at evaluation
    /// time; this only rejects values with no physical meaning.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = &self.parameters;
        positive("mass", params.mass)?;
        positive("stiffness", params.stiffness)?;
        non_negative("damping", params.damping)?;
        non_negative("forcing amplitude", params.forcing_amplitude)?;
        non_negative("forcing frequency", params.forcing_frequency)?;
        finite("initial displacement", self.initial.displacement)?;
        finite("initial velocity", self.initial.velocity)?;
        positive("duration", self.grid.duration)?;

        if self.grid.samples == 0 {
            return Err(invalid("samples", "must be at least 1"));
        }
        if self.grid.samples > MAX_SAMPLES {
            return Err(invalid(
                "samples",
                format!("{} exceeds the limit of {MAX_SAMPLES}", self.grid.samples),
            ));
        }

        let (width, height) = self.render.size();
        if width < 2 || height < 2 {
            return Err(invalid(
                "chart size",
                format!("{width}x{height} is too small"),
            ));
        }
        let max = self.render.max_size();
        if width > max || height > max {
            return Err(invalid(
                "chart size",
                format!("{width}x{height} exceeds the limit of {max} per side"),
            ));
        }

        if self.render.format == OutputFormat::Svg && self.render.output.is_none() {
            return Err(invalid("output", "svg output requires --output <path>"));
        }

        Ok(())
    }

    /// Time grid described by [`Config::grid`].
    ///
    /// # Errors
    ///
    /// See [`GridConfig::time_grid`].
    pub fn time_grid(&self) -> Result<TimeGrid, GridError> {
        self.grid.time_grid()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not a finite number")))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be greater than zero")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must not be negative")))
    }
}
