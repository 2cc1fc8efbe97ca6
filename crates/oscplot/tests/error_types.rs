//! Unit tests for oscplot error types.
//!
//! Tests verify:
//! - Display formatting for config and run errors
//! - Error chaining (source)
//! - From implementations

use oscillator::{MotionError, Regime};
use oscplot::{Config, ConfigError, Error};
use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};

mod config_error_tests {
    use super::*;

    #[test]
    fn test_read_error_names_path_and_keeps_source() {
        let err = Config::load(Path::new("/no/such/dir/oscplot.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        let msg = err.to_string();
        assert!(msg.contains("failed to read config file"));
        assert!(msg.contains("/no/such/dir/oscplot.toml"));

        let source = err.source().unwrap();
        let io_err = source.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_parse_error_keeps_toml_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[parameters]\nmass = \"heavy\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
        assert!(err.source().unwrap().downcast_ref::<toml::de::Error>().is_some());
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid {
            field: "mass",
            reason: "0 must be greater than zero".to_string(),
        };
        assert_eq!(err.to_string(), "invalid mass: 0 must be greater than zero");
        assert!(err.source().is_none());
    }
}

mod run_error_tests {
    use super::*;

    #[test]
    fn test_from_config_error_is_transparent() {
        let config_err = ConfigError::Invalid {
            field: "samples",
            reason: "must be at least 1".to_string(),
        };
        let expected = config_err.to_string();
        let err: Error = config_err.into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_from_motion_error_is_transparent() {
        let motion_err = MotionError::NotUnderdamped {
            regime: Regime::Overdamped,
            natural_frequency: 1.0,
            damping_rate: 2.0,
        };
        let err: Error = motion_err.clone().into();
        assert!(matches!(err, Error::Motion(_)));
        assert_eq!(err.to_string(), motion_err.to_string());
        assert!(err.to_string().starts_with("over-damped oscillator"));
    }

    #[test]
    fn test_from_io_error() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_write_error_chain() {
        let err = Error::Write {
            path: PathBuf::from("out/motion.svg"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write out/motion.svg: denied");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("failed to encode json"));
    }

    #[test]
    fn test_plot_error_display() {
        let err = Error::Plot("layout overflow".to_string());
        assert_eq!(err.to_string(), "failed to draw figure: layout overflow");
    }

    #[test]
    fn test_run_surfaces_motion_error() {
        let mut config = Config::default();
        config.initial.velocity = 2.0;
        config.render.format = oscplot::OutputFormat::Csv;
        let err = oscplot::run(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::Motion(MotionError::UnsupportedInitialVelocity { .. })
        ));
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
        assert_send_sync::<ConfigError>();
    }
}
