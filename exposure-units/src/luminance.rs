//! Brightness value (Bv)
//!
//! Bv indicates the metered luminance of the scene. A larger Bv is a
//! brighter scene. Stop 0 is one foot-lambert.

use std::fmt;
use serde::Serialize;
use exposure_core::{round, ExposureError, Fraction, Result};
use crate::{Kind, Quantity, QuantityKind};

/// cd/m² per foot-lambert used for the forward conversion
pub const CANDELAS_PER_FOOT_LAMBERT: f64 = 3.4262591;

/// Reflected-light meter calibration used when solving for the stop:
/// K = 0.3 · 11.4 cd/m² at stop 0
pub const CANDELAS_AT_STOP_ZERO: f64 = 0.3 * 11.4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bv {
    stop: Fraction,
    candelas: f64,
    foot_lamberts: f64,
}

impl Bv {
    pub fn from_stop(stop: impl Into<Fraction>) -> Self {
        let stop = stop.into().snap();
        let luminance = stop.exp2();
        Bv {
            candelas: round::round_to(luminance * CANDELAS_PER_FOOT_LAMBERT, 1),
            foot_lamberts: luminance,
            stop,
        }
    }

    /// Bv from a luminance in cd/m².
    ///
    /// ```
    /// use exposure_units::Bv;
    ///
    /// let bv = Bv::from_candelas(109.0).unwrap();
    /// assert_eq!(bv.stop().to_string(), "5");
    /// assert_eq!(bv.to_string(), "109.6 cd/m2");
    /// ```
    pub fn from_candelas(candelas: f64) -> Result<Self> {
        let stop = log2_stop(candelas / CANDELAS_AT_STOP_ZERO, candelas, "cd/m2")?;
        Ok(Self::from_stop(stop))
    }

    pub fn from_foot_lamberts(foot_lamberts: f64) -> Result<Self> {
        let stop = log2_stop(foot_lamberts, foot_lamberts, "fL")?;
        Ok(Self::from_stop(stop))
    }

    pub fn stop(&self) -> &Fraction {
        &self.stop
    }

    /// Luminance in cd/m², one decimal
    pub fn candelas(&self) -> f64 {
        self.candelas
    }

    /// Luminance in foot-lamberts, 2^stop
    pub fn foot_lamberts(&self) -> f64 {
        self.foot_lamberts
    }
}

/// Snapped log2 of a ratio, rejecting non-positive measurements
pub(crate) fn log2_stop(ratio: f64, measured: f64, unit: &str) -> Result<Fraction> {
    if !(measured > 0.0) || !measured.is_finite() {
        return Err(ExposureError::domain_error(format!(
            "{} must be positive, got {}",
            unit, measured
        )));
    }
    Ok(Fraction::snap_f64(ratio.log2())?)
}

impl QuantityKind for Bv {
    const KIND: Kind = Kind::Bv;

    fn stop(&self) -> &Fraction {
        &self.stop
    }
}

impl From<Bv> for Quantity {
    fn from(bv: Bv) -> Self {
        Quantity::Bv(bv)
    }
}

impl TryFrom<Quantity> for Bv {
    type Error = ExposureError;

    fn try_from(quantity: Quantity) -> Result<Self> {
        match quantity {
            Quantity::Bv(bv) => Ok(bv),
            other => Err(ExposureError::type_mismatch(Kind::Bv.symbol(), other.kind().symbol())),
        }
    }
}

impl fmt::Display for Bv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} cd/m2", self.candelas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stop_candelas() {
        assert_eq!(Bv::from_stop(0).candelas(), 3.4);
        assert_eq!(Bv::from_stop(1).candelas(), 6.9);
        assert_eq!(Bv::from_stop(3).candelas(), 27.4);
    }

    #[test]
    fn test_from_stop_foot_lamberts() {
        assert_eq!(Bv::from_stop(0).foot_lamberts(), 1.0);
        assert_eq!(Bv::from_stop(1).foot_lamberts(), 2.0);
    }

    #[test]
    fn test_from_foot_lamberts() {
        let bv = Bv::from_foot_lamberts(1.0).unwrap();
        assert_eq!(*bv.stop(), 0i64);
        assert_eq!(bv.to_string(), "3.4 cd/m2");
    }

    #[test]
    fn test_from_candelas() {
        let bv = Bv::from_candelas(109.0).unwrap();
        assert_eq!(*bv.stop(), 5i64);
        // cached fields follow the snapped stop
        assert_eq!(bv.candelas(), 109.6);
        assert_eq!(Bv::from_candelas(3.4).unwrap().to_string(), "3.4 cd/m2");
    }

    #[test]
    fn test_non_positive() {
        assert!(Bv::from_candelas(0.0).unwrap_err().is_domain_error());
        assert!(Bv::from_foot_lamberts(-1.0).unwrap_err().is_domain_error());
    }
}
