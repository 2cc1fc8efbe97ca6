//! Physical constants and initial conditions of the oscillator.

use std::f64::consts::TAU;
use std::fmt;

use crate::error::MotionError;

/// Machine epsilon for floating point comparisons.
const EPSILON: f64 = f64::EPSILON;

/// Physical constants of a driven, damped mass-spring system.
///
/// The motion obeys `M·x'' + B·x' + K·x = F_ext·cos(ω_ext·t)`.
///
/// Values are not validated: mass and stiffness are expected to be positive,
/// damping and the forcing terms non-negative.
///
/// # Example
///
/// ```rust
/// use oscillator::PhysicalParameters;
///
/// let params = PhysicalParameters::default().with_damping(0.1);
/// assert!((params.natural_frequency() - 10.0_f64.sqrt()).abs() < 1e-12);
/// assert!((params.damping_rate() - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicalParameters {
    /// Mass `M` in kilograms.
    pub mass: f64,
    /// Spring stiffness `K` in newtons per meter.
    pub stiffness: f64,
    /// Damping coefficient `B` in newton-seconds per meter.
    pub damping: f64,
    /// Amplitude `F_ext` of the driving force in newtons.
    pub forcing_amplitude: f64,
    /// Angular frequency `ω_ext` of the driving force in radians per second.
    pub forcing_frequency: f64,
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 10.0,
            damping: 0.5,
            forcing_amplitude: 5.0,
            forcing_frequency: 1.5,
        }
    }
}

impl PhysicalParameters {
    /// Creates parameters from all five constants.
    pub fn new(
        mass: f64,
        stiffness: f64,
        damping: f64,
        forcing_amplitude: f64,
        forcing_frequency: f64,
    ) -> Self {
        Self {
            mass,
            stiffness,
            damping,
            forcing_amplitude,
            forcing_frequency,
        }
    }

    /// Sets the mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the spring stiffness.
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Sets the damping coefficient.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the driving force amplitude.
    pub fn with_forcing_amplitude(mut self, amplitude: f64) -> Self {
        self.forcing_amplitude = amplitude;
        self
    }

    /// Sets the driving force angular frequency.
    pub fn with_forcing_frequency(mut self, frequency: f64) -> Self {
        self.forcing_frequency = frequency;
        self
    }

    /// Natural angular frequency `ω₀ = √(K/M)`.
    #[inline]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping rate `γ = B/(2M)`.
    #[inline]
    pub fn damping_rate(&self) -> f64 {
        self.damping / (2.0 * self.mass)
    }

    /// Damping ratio `ζ = γ/ω₀`.
    #[inline]
    pub fn damping_ratio(&self) -> f64 {
        self.damping_rate() / self.natural_frequency()
    }

    /// Period `2π/ω₀` of the undamped oscillation.
    #[inline]
    pub fn period(&self) -> f64 {
        TAU / self.natural_frequency()
    }

    /// Classifies the oscillator by its damping ratio.
    ///
    /// Ratios within machine epsilon of 1 count as critically damped. A NaN
    /// ratio (for example from zero mass and stiffness) is reported as
    /// over-damped so it is never mistaken for an oscillating system.
    pub fn regime(&self) -> Regime {
        let ratio = self.damping_ratio();
        if ratio < 1.0 - EPSILON {
            Regime::Underdamped
        } else if ratio > 1.0 + EPSILON || ratio.is_nan() {
            Regime::Overdamped
        } else {
            Regime::CriticallyDamped
        }
    }

    /// Damped angular frequency `ω_d = √(ω₀² − γ²)`.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::NotUnderdamped`] unless the oscillator is
    /// under-damped, where the square root would be zero or imaginary.
    pub fn damped_frequency(&self) -> Result<f64, MotionError> {
        let natural_frequency = self.natural_frequency();
        let damping_rate = self.damping_rate();
        match self.regime() {
            Regime::Underdamped => Ok(
                (natural_frequency * natural_frequency - damping_rate * damping_rate).sqrt(),
            ),
            regime => Err(MotionError::NotUnderdamped {
                regime,
                natural_frequency,
                damping_rate,
            }),
        }
    }

    /// Steady-state amplitude `A_ext = F_ext / √((K − M·ω_ext²)² + (B·ω_ext)²)`.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Resonance`] when the denominator is zero, which
    /// happens for an undamped oscillator driven at its natural frequency.
    pub fn forced_amplitude(&self) -> Result<f64, MotionError> {
        let omega = self.forcing_frequency;
        let reactive = self.stiffness - self.mass * omega * omega;
        let resistive = self.damping * omega;
        let denominator = (reactive * reactive + resistive * resistive).sqrt();

        if denominator == 0.0 {
            return Err(MotionError::Resonance {
                stiffness: self.stiffness,
                mass: self.mass,
                forcing_frequency: omega,
            });
        }

        Ok(self.forcing_amplitude / denominator)
    }
}

/// Damping regime of an oscillator.
///
/// - **Over-damped (ζ > 1)**: No oscillation, slow return to equilibrium
/// - **Critically-damped (ζ = 1)**: Fastest return without oscillation
/// - **Under-damped (ζ < 1)**: Oscillates around equilibrium with decay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Regime {
    /// ω₀ > γ.
    Underdamped,
    /// ω₀ = γ.
    CriticallyDamped,
    /// ω₀ < γ.
    Overdamped,
}

impl Regime {
    /// Returns the string representation of the regime.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underdamped => "under-damped",
            Self::CriticallyDamped => "critically-damped",
            Self::Overdamped => "over-damped",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Starting state of the mass.
///
/// Only `displacement` enters the closed-form solutions; `velocity` must be
/// zero and is checked by [`Motion::new`](crate::Motion::new).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InitialConditions {
    /// Initial displacement `x0` in meters.
    pub displacement: f64,
    /// Initial velocity `v0` in meters per second.
    pub velocity: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            displacement: 1.0,
            velocity: 0.0,
        }
    }
}

impl InitialConditions {
    /// Creates initial conditions from a displacement and velocity.
    pub fn new(displacement: f64, velocity: f64) -> Self {
        Self {
            displacement,
            velocity,
        }
    }

    /// Creates initial conditions for a mass released at rest.
    pub fn at_rest(displacement: f64) -> Self {
        Self::new(displacement, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_defaults() {
        let params = PhysicalParameters::default();
        assert!(approx_eq(params.mass, 1.0));
        assert!(approx_eq(params.stiffness, 10.0));
        assert!(approx_eq(params.damping, 0.5));
        assert!(approx_eq(params.forcing_amplitude, 5.0));
        assert!(approx_eq(params.forcing_frequency, 1.5));

        let initial = InitialConditions::default();
        assert!(approx_eq(initial.displacement, 1.0));
        assert!(approx_eq(initial.velocity, 0.0));
    }

    #[test]
    fn test_derived_quantities() {
        let params = PhysicalParameters::default();
        assert!(approx_eq(params.natural_frequency(), 10.0_f64.sqrt()));
        assert!(approx_eq(params.damping_rate(), 0.25));
        assert!(approx_eq(
            params.damping_ratio(),
            0.25 / 10.0_f64.sqrt()
        ));
        assert!(approx_eq(params.period(), TAU / 10.0_f64.sqrt()));
    }

    #[test]
    fn test_damped_frequency() {
        let params = PhysicalParameters::default();
        let omega_d = params.damped_frequency().unwrap();
        assert!(approx_eq(omega_d, (10.0_f64 - 0.0625).sqrt()));
    }

    #[test]
    fn test_forced_amplitude_default() {
        let params = PhysicalParameters::default();
        let amplitude = params.forced_amplitude().unwrap();
        assert!(approx_eq(amplitude, 5.0 / 60.625_f64.sqrt()));
    }

    #[test]
    fn test_regimes() {
        let base = PhysicalParameters::default().with_mass(1.0).with_stiffness(4.0);
        // ω₀ = 2, γ = B/2
        assert_eq!(base.with_damping(1.0).regime(), Regime::Underdamped);
        assert_eq!(base.with_damping(4.0).regime(), Regime::CriticallyDamped);
        assert_eq!(base.with_damping(6.0).regime(), Regime::Overdamped);
        assert_eq!(base.with_damping(0.0).regime(), Regime::Underdamped);
    }

    #[test]
    fn test_nan_ratio_is_not_underdamped() {
        let params = PhysicalParameters::default()
            .with_mass(0.0)
            .with_stiffness(0.0);
        assert_eq!(params.regime(), Regime::Overdamped);
        assert!(params.damped_frequency().is_err());
    }

    #[test]
    fn test_damped_frequency_rejects_critical() {
        let params = PhysicalParameters::default()
            .with_stiffness(4.0)
            .with_damping(4.0);
        match params.damped_frequency() {
            Err(MotionError::NotUnderdamped { regime, .. }) => {
                assert_eq!(regime, Regime::CriticallyDamped);
            }
            other => panic!("expected NotUnderdamped, got {other:?}"),
        }
    }

    #[test]
    fn test_forced_amplitude_resonance() {
        let params = PhysicalParameters::default()
            .with_stiffness(9.0)
            .with_damping(0.0)
            .with_forcing_frequency(3.0);
        assert!(matches!(
            params.forced_amplitude(),
            Err(MotionError::Resonance { .. })
        ));
    }

    #[test]
    fn test_damping_removes_resonance() {
        let params = PhysicalParameters::default()
            .with_stiffness(9.0)
            .with_damping(0.5)
            .with_forcing_frequency(3.0);
        // Denominator reduces to B·ω_ext
        assert!(approx_eq(params.forced_amplitude().unwrap(), 5.0 / 1.5));
    }

    #[test]
    fn test_regime_display() {
        assert_eq!(Regime::Underdamped.to_string(), "under-damped");
        assert_eq!(Regime::CriticallyDamped.to_string(), "critically-damped");
        assert_eq!(Regime::Overdamped.to_string(), "over-damped");
    }

    #[test]
    fn test_parameters_are_copy() {
        let params = PhysicalParameters::default();
        let copy = params;
        assert_eq!(params, copy);
    }
}
