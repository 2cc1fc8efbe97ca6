#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::float_cmp)]

//! # Oscillator
//!
//! Closed-form trajectories for a mass on a spring.
//!
//! Oscillator evaluates the analytic solutions of
//! `M·x'' + B·x' + K·x = F(t)` over a grid of time samples:
//!
//! - **Simple**: undriven, undamped motion `x0·cos(ω₀t)`
//! - **Damped**: undriven, damped motion `x0·e^(−γt)·cos(ω_d t)`
//! - **Forced**: damped motion plus the steady-state response to a
//!   sinusoidal driving force `A_ext·cos(ω_ext t)`
//!
//! There is no numerical integration: every sample is an independent
//! evaluation of a closed-form expression.
//!
//! ## Example
//!
//! ```rust
//! use oscillator::{evaluate, InitialConditions, Mode, PhysicalParameters, TimeGrid};
//!
//! let grid = TimeGrid::linspace(0.0, 20.0, 1000).unwrap();
//! let params = PhysicalParameters::default();
//! let initial = InitialConditions::default();
//!
//! let forced = evaluate(&grid, Mode::Forced, &params, &initial).unwrap();
//! assert_eq!(forced.len(), grid.len());
//! assert!((forced[0] - 1.642_161).abs() < 1e-6);
//! ```
//!
//! ## String selectors
//!
//! ```rust
//! use oscillator::{evaluate_selector, InitialConditions, MotionError, PhysicalParameters, TimeGrid};
//!
//! let grid = TimeGrid::linspace(0.0, 1.0, 10).unwrap();
//! let err = evaluate_selector(
//!     &grid,
//!     "bogus",
//!     &PhysicalParameters::default(),
//!     &InitialConditions::default(),
//! )
//! .unwrap_err();
//! assert!(matches!(err, MotionError::InvalidMode(_)));
//! ```
//!
//! ## Damping regimes
//!
//! The damped and forced solutions are only real-valued when the oscillator
//! is under-damped (ω₀ > γ):
//!
//! - **Under-damped (ζ < 1)**: oscillates with an exponentially decaying envelope
//! - **Critically-damped (ζ = 1)**: rejected with [`MotionError::NotUnderdamped`]
//! - **Over-damped (ζ > 1)**: rejected with [`MotionError::NotUnderdamped`]

mod error;
mod grid;
mod mode;
mod motion;
mod params;

pub use error::{GridError, MotionError, ParseModeError};
pub use grid::TimeGrid;
pub use mode::Mode;
pub use motion::{Motion, PositionSeries, evaluate, evaluate_all, evaluate_selector};
pub use params::{InitialConditions, PhysicalParameters, Regime};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{GridError, MotionError, ParseModeError};
    pub use crate::grid::TimeGrid;
    pub use crate::mode::Mode;
    pub use crate::motion::{Motion, PositionSeries, evaluate, evaluate_all, evaluate_selector};
    pub use crate::params::{InitialConditions, PhysicalParameters, Regime};
}
