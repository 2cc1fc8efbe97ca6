//! Unit tests for oscillator error types.
//!
//! Tests verify:
//! - Error variant creation (ParseModeError, GridError, MotionError)
//! - Display formatting
//! - Error chaining (source)
//! - From implementations

use oscillator::{GridError, MotionError, ParseModeError, Regime, TimeGrid};
use std::error::Error as StdError;

mod parse_mode_error_tests {
    use super::*;

    #[test]
    fn test_selector_accessor() {
        let e = ParseModeError("spiral".into());
        assert_eq!(e.selector(), "spiral");
    }

    #[test]
    fn test_display_lists_accepted_selectors() {
        let msg = ParseModeError("bogus".into()).to_string();
        assert!(msg.contains("invalid motion mode"));
        assert!(msg.contains("\"simple\""));
        assert!(msg.contains("\"damped\""));
        assert!(msg.contains("\"forced\""));
    }

    #[test]
    fn test_clone_and_eq() {
        let e1 = ParseModeError("x".into());
        let e2 = e1.clone();
        assert_eq!(e1, e2);
        assert_ne!(e1, ParseModeError("y".into()));
    }

    #[test]
    fn test_no_source() {
        assert!(ParseModeError("x".into()).source().is_none());
    }
}

mod grid_error_tests {
    use super::*;

    #[test]
    fn test_non_finite_display() {
        let e = GridError::NonFinite {
            index: 3,
            value: f64::NAN,
        };
        let msg = e.to_string();
        assert!(msg.contains("time sample 3"));
        assert!(msg.contains("not finite"));
    }

    #[test]
    fn test_decreasing_display() {
        let e = GridError::Decreasing {
            index: 2,
            previous: 5.0,
            value: 4.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("time sample 2 (4)"));
        assert!(msg.contains("previous sample (5)"));
    }

    #[test]
    fn test_debug_impl() {
        let e = GridError::NonFinite {
            index: 0,
            value: f64::INFINITY,
        };
        assert!(format!("{e:?}").contains("NonFinite"));
    }
}

mod motion_error_tests {
    use super::*;

    #[test]
    fn test_from_parse_mode_error() {
        let e: MotionError = ParseModeError("bogus".into()).into();
        assert!(matches!(e, MotionError::InvalidMode(_)));
    }

    #[test]
    fn test_from_grid_error() {
        let grid_err = TimeGrid::from_samples(vec![1.0, 0.0]).unwrap_err();
        let e: MotionError = grid_err.into();
        assert!(matches!(e, MotionError::Grid(GridError::Decreasing { .. })));
    }

    #[test]
    fn test_question_mark_conversion() {
        fn parse(selector: &str) -> Result<oscillator::Mode, MotionError> {
            Ok(selector.parse()?)
        }
        assert!(parse("forced").is_ok());
        assert!(matches!(parse("nope"), Err(MotionError::InvalidMode(_))));
    }

    #[test]
    fn test_not_underdamped_display() {
        let e = MotionError::NotUnderdamped {
            regime: Regime::CriticallyDamped,
            natural_frequency: 2.0,
            damping_rate: 2.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("critically-damped"));
        assert!(msg.contains("under-damped oscillator"));
    }

    #[test]
    fn test_resonance_display() {
        let e = MotionError::Resonance {
            stiffness: 9.0,
            mass: 1.0,
            forcing_frequency: 3.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("resonance"));
        assert!(msg.contains("3 rad/s"));
    }

    #[test]
    fn test_velocity_display() {
        let e = MotionError::UnsupportedInitialVelocity { velocity: 0.5 };
        assert_eq!(e.to_string(), "initial velocity must be zero, got 0.5 m/s");
    }

    #[test]
    fn test_transparent_variants_have_no_extra_source() {
        // Transparent forwarding delegates source() to the inner error
        let e: MotionError = ParseModeError("x".into()).into();
        assert!(e.source().is_none());
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<MotionError>();
        assert_send_sync::<GridError>();
        assert_send_sync::<ParseModeError>();
    }
}
