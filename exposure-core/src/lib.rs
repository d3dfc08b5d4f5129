//! Exposure Core - Fundamental types
//!
//! This crate provides the core types used throughout the exposure workspace:
//! - `Fraction`: Exact rational stops, snapped to whole/half/third stops
//! - `round`: Significant-digit rounding for displayed units
//! - `ExposureError`: Structured errors with machine-readable codes

mod fraction;
mod error;
pub mod round;

pub use fraction::{Fraction, FractionError, MAX_STOP_DENOMINATOR};
pub use error::{ExposureError, codes};

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, ExposureError>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Fraction, ExposureError, Result};
    pub use crate::error::codes;
    pub use crate::round::{floor, format_significant, round_to};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod fraction_tests {
        use super::*;

        #[test]
        fn test_stop_sum_then_snap() {
            let a = Fraction::new(2, 3).unwrap();
            let b = Fraction::new(2, 3).unwrap();
            let sum = a + b;
            assert_eq!(sum, Fraction::new(4, 3).unwrap());
            assert_eq!(sum.snap(), sum);
        }

        #[test]
        fn test_snap_from_measurement() {
            // log2(400 / 100) measured slightly off
            let stop = Fraction::snap_f64(2.0000001).unwrap();
            assert_eq!(stop, Fraction::from_i64(2));
            assert!(stop.is_integer());
        }

        #[test]
        fn test_fraction_error_converts() {
            let err: ExposureError = "1/x".parse::<Fraction>().unwrap_err().into();
            assert_eq!(err.code, codes::PARSE_ERROR);

            let err: ExposureError = Fraction::from_f64(f64::NAN).unwrap_err().into();
            assert_eq!(err.code, codes::DOMAIN_ERROR);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_construction() {
            let err = ExposureError::configuration("3 different items needed");
            assert_eq!(err.code, codes::CONFIGURATION_ERROR);
            assert!(err.is_configuration_error());
            assert!(!err.is_domain_error());
        }

        #[test]
        fn test_type_mismatch_message() {
            let err = ExposureError::type_mismatch("Av", "Sv");
            assert!(err.is_type_mismatch());
            assert_eq!(err.message, "Expected Av, got Sv");
        }

        #[test]
        fn test_error_display() {
            let err = ExposureError::parse_error("unexpected unit");
            let display = format!("{}", err);
            assert!(display.contains("PARSE_ERROR"));
            assert!(display.contains("suggestion"));
        }

        #[test]
        fn test_error_serializes() {
            let err = ExposureError::domain_error("log of non-positive value");
            let json = serde_json::to_value(&err).unwrap();
            assert_eq!(json["code"], "DOMAIN_ERROR");
            assert!(json.get("suggestion").is_none());
        }
    }
}
