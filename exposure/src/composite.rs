//! Exposure composite - one aperture, one shutter speed, one sensitivity

use std::fmt;
use serde::Serialize;
use exposure_core::{round, ExposureError, Result};
use exposure_units::{Av, Quantity, Sv, Tv};
use crate::context::ExposureConfig;

/// A camera setting and the exposure value it stands for.
///
/// `ev100 = log2(N² / t)` with the precise f-number `N = √2^Av` and the
/// precise time `t = 2^Tv`, which reduces to `Av − Tv` on the stop scale.
/// `ev = ev100 − log2(iso / 100)`, i.e. `ev100 − Sv`.
///
/// ```
/// use exposure::{Av, Exposure, Sv, Tv};
///
/// let exposure = Exposure::new(Av::from_fstop(1.4)?, Tv::from_time(4)?, Sv::from_iso(100.0)?);
/// assert_eq!(exposure.ev(), -1.0);
/// assert_eq!(exposure.summary(), "EV -1.0 (f/1.4, 4 sec, 100 ISO)");
/// # Ok::<(), exposure::ExposureError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exposure {
    av: Av,
    tv: Tv,
    sv: Sv,
    ev100: f64,
    ev: f64,
}

impl Exposure {
    pub fn new(av: Av, tv: Tv, sv: Sv) -> Self {
        // computed on the exact stop scale
        let ev100 = av.stop() - tv.stop();
        let ev = &ev100 - sv.stop();
        tracing::trace!(av = %av, tv = %tv, sv = %sv, ev = %ev, "exposure");
        Exposure {
            ev100: ev100.to_f64(),
            ev: ev.to_f64(),
            av,
            tv,
            sv,
        }
    }

    /// Assemble from one Av, one Tv and one Sv in any order
    pub fn from_quantities(quantities: &[Quantity]) -> Result<Self> {
        let mut av = None;
        let mut tv = None;
        let mut sv = None;

        for quantity in quantities {
            let duplicate = match quantity {
                Quantity::Av(q) => av.replace(q.clone()).is_some(),
                Quantity::Tv(q) => tv.replace(q.clone()).is_some(),
                Quantity::Sv(q) => sv.replace(q.clone()).is_some(),
                other => {
                    return Err(ExposureError::configuration(format!(
                        "an exposure is made of Av, Tv and Sv, got {}",
                        other.kind()
                    )));
                }
            };
            if duplicate {
                return Err(ExposureError::configuration(format!(
                    "{} given more than once",
                    quantity.kind()
                )));
            }
        }

        match (av, tv, sv) {
            (Some(av), Some(tv), Some(sv)) => Ok(Exposure::new(av, tv, sv)),
            _ => Err(ExposureError::configuration("an exposure needs one Av, one Tv and one Sv")),
        }
    }

    pub fn av(&self) -> &Av {
        &self.av
    }

    pub fn tv(&self) -> &Tv {
        &self.tv
    }

    pub fn sv(&self) -> &Sv {
        &self.sv
    }

    /// Exposure value at ISO 100
    pub fn ev100(&self) -> f64 {
        self.ev100
    }

    /// Exposure value at the setting's own sensitivity
    pub fn ev(&self) -> f64 {
        self.ev
    }

    pub fn summary(&self) -> String {
        self.summary_with(&ExposureConfig::default())
    }

    pub fn summary_with(&self, config: &ExposureConfig) -> String {
        format!(
            "EV {} ({}, {}, {})",
            round::format_significant(self.ev, config.ev_digits),
            self.av,
            self.tv,
            self.sv
        )
    }
}

impl fmt::Display for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exposure_core::Fraction;

    fn base() -> Exposure {
        Exposure::new(
            Av::from_fstop(1.4).unwrap(),
            Tv::from_time(4).unwrap(),
            Sv::from_iso(100.0).unwrap(),
        )
    }

    #[test]
    fn test_ev() {
        let exposure = base();
        assert_eq!(exposure.ev100(), -1.0);
        assert_eq!(exposure.ev(), -1.0);
    }

    #[test]
    fn test_ev_matches_physical_formula() {
        let exposure = Exposure::new(
            Av::from_fstop(5.6).unwrap(),
            Tv::from_time(Fraction::new(1, 125).unwrap()).unwrap(),
            Sv::from_iso(100.0).unwrap(),
        );
        let n = exposure.av().precise();
        let t = exposure.tv().precise();
        assert!((exposure.ev100() - (n * n / t).log2()).abs() < 1e-9);
        assert_eq!(exposure.ev100(), 12.0);
    }

    #[test]
    fn test_iso_shifts_ev() {
        let exposure = Exposure::new(
            Av::from_fstop(1.4).unwrap(),
            Tv::from_time(4).unwrap(),
            Sv::from_iso(800.0).unwrap(),
        );
        assert_eq!(exposure.ev100(), base().ev100());
        assert_eq!(exposure.ev(), base().ev() - 3.0);
    }

    #[test]
    fn test_summary() {
        assert_eq!(base().summary(), "EV -1.0 (f/1.4, 4 sec, 100 ISO)");
        assert_eq!(base().to_string(), base().summary());
    }

    #[test]
    fn test_summary_digits() {
        let exposure = Exposure::new(
            Av::from_stop(Fraction::new(1, 3).unwrap()).unwrap(),
            Tv::from_time(1).unwrap(),
            Sv::from_iso(100.0).unwrap(),
        );
        assert!(exposure.summary().starts_with("EV 0.33333 "));
        let config = ExposureConfig::default().with_ev_digits(2);
        assert!(exposure.summary_with(&config).starts_with("EV 0.33 "));
    }

    #[test]
    fn test_from_quantities() {
        let quantities: Vec<Quantity> = vec![
            Sv::from_iso(100.0).unwrap().into(),
            Tv::from_time(4).unwrap().into(),
            Av::from_fstop(1.4).unwrap().into(),
        ];
        assert_eq!(Exposure::from_quantities(&quantities).unwrap(), base());
    }

    #[test]
    fn test_from_quantities_rejects() {
        let av: Quantity = Av::from_stop(1).unwrap().into();
        let tv: Quantity = Tv::from_stop(0).unwrap().into();
        let sv: Quantity = Sv::from_stop(0).into();
        let bv: Quantity = exposure_units::Bv::from_stop(0).into();

        for quantities in [
            vec![av.clone(), tv.clone()],
            vec![av.clone(), tv.clone(), bv],
            vec![av.clone(), av.clone(), tv.clone(), sv.clone()],
        ] {
            assert!(Exposure::from_quantities(&quantities).unwrap_err().is_configuration_error());
        }
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(base()).unwrap();
        assert_eq!(json["ev"], -1.0);
        assert_eq!(json["tv"]["time"], "4");
    }
}
