//! Error types for motion evaluation.

use thiserror::Error;

use crate::params::Regime;

/// Error returned when parsing an unrecognized mode selector.
///
/// This error occurs when calling [`Mode::from_str`](crate::Mode) or
/// [`evaluate_selector`](crate::evaluate_selector) with a string that is
/// not one of the literal selectors.
///
/// # Valid Selectors
///
/// - `"simple"`
/// - `"damped"`
/// - `"forced"`
///
/// Matching ignores ASCII case and surrounding whitespace.
///
/// # Example
///
/// ```rust
/// use oscillator::Mode;
///
/// let err = "bogus".parse::<Mode>().unwrap_err();
/// assert_eq!(err.selector(), "bogus");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid motion mode {0:?}: expected one of \"simple\", \"damped\" or \"forced\"")]
pub struct ParseModeError(pub String);

impl ParseModeError {
    /// Returns the selector that failed to parse.
    pub fn selector(&self) -> &str {
        &self.0
    }
}

/// Error returned when building a [`TimeGrid`](crate::TimeGrid) from samples.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// A sample is NaN or infinite.
    #[error("time sample {index} is not finite ({value})")]
    NonFinite {
        /// Position of the offending sample.
        index: usize,
        /// The sample value.
        value: f64,
    },

    /// A sample is smaller than the one before it.
    #[error("time sample {index} ({value}) is earlier than the previous sample ({previous})")]
    Decreasing {
        /// Position of the offending sample.
        index: usize,
        /// The sample immediately before it.
        previous: f64,
        /// The sample value.
        value: f64,
    },
}

/// Errors produced while evaluating oscillator motion.
///
/// Every failure is reported before any position is computed, so an error
/// never comes with a partial series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// The mode selector was not recognized.
    #[error(transparent)]
    InvalidMode(#[from] ParseModeError),

    /// The damped and forced solutions need ω₀ > γ.
    #[error(
        "{regime} oscillator (natural frequency {natural_frequency} rad/s, damping rate \
         {damping_rate} 1/s): damped and forced motion require an under-damped oscillator"
    )]
    NotUnderdamped {
        /// Regime the parameters fall into.
        regime: Regime,
        /// ω₀ = √(K/M).
        natural_frequency: f64,
        /// γ = B/(2M).
        damping_rate: f64,
    },

    /// The steady-state amplitude denominator vanishes.
    #[error(
        "undamped resonance: forcing frequency {forcing_frequency} rad/s matches \
         √(K/M) for stiffness {stiffness} N/m and mass {mass} kg"
    )]
    Resonance {
        /// K.
        stiffness: f64,
        /// M.
        mass: f64,
        /// ω_ext.
        forcing_frequency: f64,
    },

    /// The closed-form solutions assume the mass starts at rest.
    #[error("initial velocity must be zero, got {velocity} m/s")]
    UnsupportedInitialVelocity {
        /// The rejected initial velocity.
        velocity: f64,
    },

    /// The time grid was rejected.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_error_display() {
        let err = ParseModeError("bogus".to_string());
        let msg = err.to_string();
        assert!(msg.contains("\"bogus\""));
        assert!(msg.contains("simple"));
        assert!(msg.contains("forced"));
    }

    #[test]
    fn test_invalid_mode_is_transparent() {
        let err: MotionError = ParseModeError("spiral".into()).into();
        assert_eq!(
            err.to_string(),
            ParseModeError("spiral".into()).to_string()
        );
    }

    #[test]
    fn test_not_underdamped_names_regime() {
        let err = MotionError::NotUnderdamped {
            regime: Regime::Overdamped,
            natural_frequency: 1.0,
            damping_rate: 3.0,
        };
        assert!(err.to_string().starts_with("over-damped"));
    }
}
