//! Closed-form oscillator motion.
//!
//! Each mode is a closed-form solution of `M·x'' + B·x' + K·x = F(t)` for a
//! mass released from rest at displacement `x0`:
//!
//! ```text
//! simple:  x(t) = x0·cos(ω₀t)
//! damped:  x(t) = x0·e^(−γt)·cos(ω_d t)
//! forced:  x(t) = x0·e^(−γt)·cos(ω_d t) + A_ext·cos(ω_ext t)
//! ```
//!
//! with `ω₀ = √(K/M)`, `γ = B/(2M)`, `ω_d = √(ω₀² − γ²)` and
//! `A_ext = F_ext / √((K − M·ω_ext²)² + (B·ω_ext)²)`.
//!
//! Samples are independent of one another, so a grid is evaluated as a plain
//! map over its times (split across threads with the `parallel` feature).

use tracing::debug;

use crate::error::MotionError;
use crate::grid::TimeGrid;
use crate::mode::Mode;
use crate::params::{InitialConditions, PhysicalParameters};

/// Positions produced by an evaluation, one per time sample.
pub type PositionSeries = Vec<f64>;

/// Precomputed closed-form coefficients for one motion mode.
///
/// A `Motion` caches the derived frequencies and amplitudes so a grid of any
/// size is evaluated without recomputing square roots per sample.
///
/// # Example
///
/// ```rust
/// use oscillator::{InitialConditions, Mode, Motion, PhysicalParameters};
///
/// let motion = Motion::new(
///     Mode::Damped,
///     &PhysicalParameters::default(),
///     &InitialConditions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(motion.position(0.0), 1.0);
/// assert!(motion.position(60.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    mode: Mode,
    amplitude: f64,
    decay_rate: f64,
    angular_frequency: f64,
    forced_amplitude: f64,
    forcing_frequency: f64,
}

impl Motion {
    /// Computes the coefficients of `mode` for the given oscillator.
    ///
    /// # Errors
    ///
    /// - [`MotionError::UnsupportedInitialVelocity`] if `initial.velocity`
    ///   is not zero.
    /// - [`MotionError::NotUnderdamped`] for [`Mode::Damped`] and
    ///   [`Mode::Forced`] unless ω₀ > γ.
    /// - [`MotionError::Resonance`] for [`Mode::Forced`] when the
    ///   steady-state amplitude is unbounded.
    pub fn new(
        mode: Mode,
        params: &PhysicalParameters,
        initial: &InitialConditions,
    ) -> Result<Self, MotionError> {
        if initial.velocity != 0.0 {
            return Err(MotionError::UnsupportedInitialVelocity {
                velocity: initial.velocity,
            });
        }

        let motion = match mode {
            Mode::Simple => Self::simple(params, initial),
            Mode::Damped => Self::damped(params, initial)?,
            Mode::Forced => Self::forced(params, initial)?,
        };

        debug!(
            mode = %mode,
            angular_frequency = motion.angular_frequency,
            decay_rate = motion.decay_rate,
            forced_amplitude = motion.forced_amplitude,
            "computed motion coefficients"
        );

        Ok(motion)
    }

    /// Undamped free oscillation at the natural frequency.
    fn simple(params: &PhysicalParameters, initial: &InitialConditions) -> Self {
        Self {
            mode: Mode::Simple,
            amplitude: initial.displacement,
            decay_rate: 0.0,
            angular_frequency: params.natural_frequency(),
            forced_amplitude: 0.0,
            forcing_frequency: 0.0,
        }
    }

    /// Under-damped free oscillation at the damped frequency.
    fn damped(
        params: &PhysicalParameters,
        initial: &InitialConditions,
    ) -> Result<Self, MotionError> {
        Ok(Self {
            mode: Mode::Damped,
            amplitude: initial.displacement,
            decay_rate: params.damping_rate(),
            angular_frequency: params.damped_frequency()?,
            forced_amplitude: 0.0,
            forcing_frequency: 0.0,
        })
    }

    /// Damped transient superposed with the steady-state forced response.
    fn forced(
        params: &PhysicalParameters,
        initial: &InitialConditions,
    ) -> Result<Self, MotionError> {
        let free = Self::damped(params, initial)?;
        Ok(Self {
            mode: Mode::Forced,
            forced_amplitude: params.forced_amplitude()?,
            forcing_frequency: params.forcing_frequency,
            ..free
        })
    }

    /// The mode these coefficients evaluate.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Angular frequency of the free oscillation (ω₀ or ω_d).
    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    /// Exponential decay rate of the free oscillation (0 or γ).
    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Amplitude of the steady-state response (0 unless forced).
    pub fn forced_amplitude(&self) -> f64 {
        self.forced_amplitude
    }

    /// Free (homogeneous) part of the motion at time `t`.
    ///
    /// Before `t = 0` the damped envelope grows and far enough back the
    /// position saturates to ±infinity. A mass released at equilibrium stays
    /// at exactly zero for every `t`.
    #[inline]
    pub fn transient(&self, t: f64) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.amplitude * (-self.decay_rate * t).exp() * (self.angular_frequency * t).cos()
    }

    /// Driven (particular) part of the motion at time `t`.
    #[inline]
    pub fn steady_state(&self, t: f64) -> f64 {
        match self.mode {
            Mode::Forced => self.forced_amplitude * (self.forcing_frequency * t).cos(),
            Mode::Simple | Mode::Damped => 0.0,
        }
    }

    /// Position at time `t`.
    #[inline]
    pub fn position(&self, t: f64) -> f64 {
        match self.mode {
            Mode::Simple | Mode::Damped => self.transient(t),
            Mode::Forced => self.transient(t) + self.steady_state(t),
        }
    }

    /// Positions at every sample of `grid`, in order.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate(&self, grid: &TimeGrid) -> PositionSeries {
        grid.iter().map(|t| self.position(t)).collect()
    }

    /// Positions at every sample of `grid`, in order.
    #[cfg(feature = "parallel")]
    pub fn evaluate(&self, grid: &TimeGrid) -> PositionSeries {
        use rayon::prelude::*;

        grid.as_slice()
            .par_iter()
            .map(|&t| self.position(t))
            .collect()
    }
}

/// Evaluates `mode` over every sample of `grid`.
///
/// The returned series has the same length as the grid; an empty grid yields
/// an empty series.
///
/// # Errors
///
/// See [`Motion::new`].
///
/// # Example
///
/// ```rust
/// use oscillator::{evaluate, InitialConditions, Mode, PhysicalParameters, TimeGrid};
///
/// let grid = TimeGrid::linspace(0.0, 20.0, 1000).unwrap();
/// let simple = evaluate(
///     &grid,
///     Mode::Simple,
///     &PhysicalParameters::default(),
///     &InitialConditions::default(),
/// )
/// .unwrap();
/// assert_eq!(simple[0], 1.0);
/// ```
pub fn evaluate(
    grid: &TimeGrid,
    mode: Mode,
    params: &PhysicalParameters,
    initial: &InitialConditions,
) -> Result<PositionSeries, MotionError> {
    Ok(Motion::new(mode, params, initial)?.evaluate(grid))
}

/// Evaluates the mode named by a literal selector (`"simple"`, `"damped"`
/// or `"forced"`).
///
/// # Errors
///
/// Returns [`MotionError::InvalidMode`] for an unknown selector before any
/// computation, otherwise see [`Motion::new`].
pub fn evaluate_selector(
    grid: &TimeGrid,
    selector: &str,
    params: &PhysicalParameters,
    initial: &InitialConditions,
) -> Result<PositionSeries, MotionError> {
    let mode: Mode = selector.parse()?;
    evaluate(grid, mode, params, initial)
}

/// Evaluates every mode of [`Mode::ALL`] over a shared grid.
///
/// # Errors
///
/// Fails with the first mode that cannot be evaluated; no series are
/// returned in that case.
pub fn evaluate_all(
    grid: &TimeGrid,
    params: &PhysicalParameters,
    initial: &InitialConditions,
) -> Result<Vec<(Mode, PositionSeries)>, MotionError> {
    Mode::ALL
        .iter()
        .map(|&mode| Ok((mode, evaluate(grid, mode, params, initial)?)))
        .collect()
}
