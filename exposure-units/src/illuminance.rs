//! Incident light value (Iv)
//!
//! Iv indicates the metered illuminance falling on the scene. A larger Iv
//! is a greater illuminance.

use std::fmt;
use serde::Serialize;
use exposure_core::{round, ExposureError, Fraction, Result};
use crate::luminance::log2_stop;
use crate::{Kind, Quantity, QuantityKind};

/// Foot-candles at stop 0: 0.3 · 20.8
pub const FOOT_CANDLES_AT_STOP_ZERO: f64 = 0.3 * 20.8;

/// Lux at stop 0: 0.3 · 224
pub const LUX_AT_STOP_ZERO: f64 = 0.3 * 224.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Iv {
    stop: Fraction,
    foot_candles: f64,
    lux: f64,
}

impl Iv {
    pub fn from_stop(stop: impl Into<Fraction>) -> Self {
        let stop = stop.into().snap();
        let factor = stop.exp2();
        Iv {
            foot_candles: round::round_to(factor * FOOT_CANDLES_AT_STOP_ZERO, 1),
            lux: round::round_to(factor * LUX_AT_STOP_ZERO, 1),
            stop,
        }
    }

    /// Iv from an illuminance in lux.
    ///
    /// ```
    /// use exposure_units::Iv;
    ///
    /// let iv = Iv::from_lux(1076.0).unwrap();
    /// assert_eq!(iv.stop().to_string(), "4");
    /// assert_eq!(iv.to_string(), "1075.2 lux");
    /// ```
    pub fn from_lux(lux: f64) -> Result<Self> {
        let stop = log2_stop(lux / LUX_AT_STOP_ZERO, lux, "lux")?;
        Ok(Self::from_stop(stop))
    }

    pub fn from_foot_candles(foot_candles: f64) -> Result<Self> {
        let stop = log2_stop(foot_candles / FOOT_CANDLES_AT_STOP_ZERO, foot_candles, "fc")?;
        Ok(Self::from_stop(stop))
    }

    pub fn stop(&self) -> &Fraction {
        &self.stop
    }

    pub fn foot_candles(&self) -> f64 {
        self.foot_candles
    }

    pub fn lux(&self) -> f64 {
        self.lux
    }
}

impl QuantityKind for Iv {
    const KIND: Kind = Kind::Iv;

    fn stop(&self) -> &Fraction {
        &self.stop
    }
}

impl From<Iv> for Quantity {
    fn from(iv: Iv) -> Self {
        Quantity::Iv(iv)
    }
}

impl TryFrom<Quantity> for Iv {
    type Error = ExposureError;

    fn try_from(quantity: Quantity) -> Result<Self> {
        match quantity {
            Quantity::Iv(iv) => Ok(iv),
            other => Err(ExposureError::type_mismatch(Kind::Iv.symbol(), other.kind().symbol())),
        }
    }
}

impl fmt::Display for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} lux", self.lux)
    }
}
