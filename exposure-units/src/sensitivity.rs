//! Speed value (Sv)
//!
//! Sv reflects the sensitivity of the film or sensor, expressed as an ISO
//! speed. A larger Sv is a greater sensitivity. Stop 0 is ISO 100.

use std::fmt;
use serde::Serialize;
use exposure_core::{ExposureError, Fraction, Result};
use crate::{Kind, Quantity, QuantityKind};

/// ISO speed at stop 0
pub const BASE_ISO: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sv {
    stop: Fraction,
    iso: f64,
}

impl Sv {
    pub fn from_stop(stop: impl Into<Fraction>) -> Self {
        let stop = stop.into().snap();
        let iso = BASE_ISO * stop.exp2();
        Sv { stop, iso }
    }

    /// Sv from an ISO speed.
    ///
    /// ```
    /// use exposure_units::Sv;
    ///
    /// let sv = Sv::from_iso(400.0).unwrap();
    /// assert_eq!(sv.stop().to_string(), "2");
    /// assert_eq!(sv.to_string(), "400 ISO");
    /// ```
    pub fn from_iso(iso: f64) -> Result<Self> {
        if !(iso > 0.0) || !iso.is_finite() {
            return Err(ExposureError::domain_error(format!("ISO must be positive, got {}", iso)));
        }
        let stop = Fraction::snap_f64((iso / BASE_ISO).log2())?;
        Ok(Self::from_stop(stop))
    }

    pub fn stop(&self) -> &Fraction {
        &self.stop
    }

    /// 100 · 2^stop, un-rounded
    pub fn iso(&self) -> f64 {
        self.iso
    }
}

impl QuantityKind for Sv {
    const KIND: Kind = Kind::Sv;

    fn stop(&self) -> &Fraction {
        &self.stop
    }
}

impl From<Sv> for Quantity {
    fn from(sv: Sv) -> Self {
        Quantity::Sv(sv)
    }
}

impl TryFrom<Quantity> for Sv {
    type Error = ExposureError;

    fn try_from(quantity: Quantity) -> Result<Self> {
        match quantity {
            Quantity::Sv(sv) => Ok(sv),
            other => Err(ExposureError::type_mismatch(Kind::Sv.symbol(), other.kind().symbol())),
        }
    }
}

impl fmt::Display for Sv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} ISO", self.iso)
    }
}
