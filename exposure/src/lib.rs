//! Exposure - APEX exposure arithmetic
//!
//! Aperture (Av), shutter speed (Tv), sensitivity (Sv) and scene light
//! (Bv or Iv) share one logarithmic stop scale. Given any three, [`solve`]
//! derives the fourth; [`Exposure`] reports the EV of a camera setting.
//!
//! ```
//! use exposure::prelude::*;
//!
//! let inputs = [parse_quantity("f/2")?, parse_quantity("400 ISO")?, parse_quantity("Bv 6.9 cd/m2")?];
//! let tv = Tv::from_exposures(&inputs)?;
//! assert_eq!(tv.to_string(), "2 sec");
//! # Ok::<(), exposure::ExposureError>(())
//! ```

mod context;
mod solve;
mod composite;

pub use context::{ExposureConfig, SolveContext, TraceStep, DEFAULT_EV_DIGITS};
pub use solve::{solve, solve_with, FromExposures};
pub use composite::Exposure;

pub use exposure_core::{codes, round, ExposureError, Fraction, FractionError, Result};
pub use exposure_units::{
    parse_quantity, parse_stop, Av, Bv, Iv, Kind, PhysicalUnit, Quantity, QuantityKind, Slot, Sv, Tv,
    SHUTTER_SPEEDS, UNITS,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{solve, solve_with, Exposure, ExposureConfig, FromExposures, SolveContext};
    pub use exposure_core::prelude::*;
    pub use exposure_units::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    mod workflow_tests {
        use super::*;

        #[test]
        fn test_meter_then_solve_shutter() {
            let inputs = [
                parse_quantity("f/8").unwrap(),
                parse_quantity("100 ISO").unwrap(),
                parse_quantity("109.6 cd/m2").unwrap(),
            ];
            // acc = -6 + 0 + 5
            let tv = Tv::from_exposures(&inputs).unwrap();
            assert_eq!(*tv.stop(), -1i64);
            assert_eq!(tv.to_string(), "1/2 sec");
        }

        #[test]
        fn test_solve_then_compose() {
            let av = Av::from_fstop(2.0).unwrap();
            let sv = Sv::from_iso(400.0).unwrap();
            let bv = Bv::from_stop(1);
            let tv = Tv::from_exposures(&[av.clone().into(), sv.clone().into(), bv.into()]).unwrap();

            let exposure = Exposure::new(av, tv, sv);
            assert_eq!(exposure.summary(), "EV -1.0 (f/2.0, 2 sec, 400 ISO)");
            assert_eq!(exposure.ev100(), 1.0);
        }

        #[test]
        fn test_incident_reading() {
            let inputs = [
                parse_quantity("1/125 sec").unwrap(),
                parse_quantity("iso 200").unwrap(),
                parse_quantity("268.8 lux").unwrap(),
            ];
            let av = Av::from_exposures(&inputs).unwrap();
            // acc = 7 + 1 + 2
            assert_eq!(*av.stop(), 10i64);
            assert_eq!(av.to_string(), "f/32");
        }

        #[test]
        fn test_parse_stop_inputs() {
            let inputs = [
                parse_stop(Kind::Av, "2").unwrap(),
                parse_stop(Kind::Sv, "2").unwrap(),
                parse_stop(Kind::Bv, "1").unwrap(),
            ];
            assert_eq!(solve(Kind::Tv, &inputs).unwrap().to_string(), "Tv 2 sec");
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_errors_carry_codes() {
            let err = solve(Kind::Av, &[]).unwrap_err();
            assert_eq!(err.code, codes::CONFIGURATION_ERROR);

            let err = parse_quantity("f/0").unwrap_err();
            assert_eq!(err.code, codes::DOMAIN_ERROR);

            let err = parse_quantity("Sv f/2").unwrap_err();
            assert_eq!(err.code, codes::TYPE_MISMATCH);

            let err = parse_quantity("fast").unwrap_err();
            assert_eq!(err.code, codes::PARSE_ERROR);
        }

        #[test]
        fn test_error_display() {
            let err = solve(Kind::Tv, &[]).unwrap_err();
            let display = err.to_string();
            assert!(display.starts_with("[CONFIGURATION_ERROR]"));
            assert!(display.contains("suggestion"));
        }
    }
}
