//! Motion mode selection.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;

/// Which closed-form solution to evaluate.
///
/// # Example
///
/// ```rust
/// use oscillator::Mode;
///
/// let mode: Mode = "Damped".parse().unwrap();
/// assert_eq!(mode, Mode::Damped);
/// assert_eq!(mode.to_string(), "damped");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Undriven, undamped: `x0·cos(ω₀t)`.
    Simple,
    /// Undriven, damped: `x0·e^(−γt)·cos(ω_d t)`.
    Damped,
    /// Damped and driven: the damped solution plus `A_ext·cos(ω_ext t)`.
    Forced,
}

impl Mode {
    /// Every mode, in display order.
    pub const ALL: [Mode; 3] = [Mode::Simple, Mode::Damped, Mode::Forced];

    /// Returns the literal selector for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Damped => "damped",
            Self::Forced => "forced",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "damped" => Ok(Self::Damped),
            "forced" => Ok(Self::Forced),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
