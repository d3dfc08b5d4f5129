//! Aperture value (Av)
//!
//! Av represents the aperture in its relative-aperture (f-number) form.
//! A larger Av is a smaller aperture (larger f-number) and thus less
//! exposure. Each stop multiplies the f-number by √2.

use std::fmt;
use serde::Serialize;
use exposure_core::{round, ExposureError, Fraction, Result};
use crate::{Kind, Quantity, QuantityKind};

/// Significant digits of a displayed f-number (f/1.4, f/5.6, f/22)
pub const FSTOP_DIGITS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Av {
    stop: Fraction,
    precise: f64,
    fstop: f64,
}

impl Av {
    /// Av at a stop, snapped to the stop grid
    pub fn from_stop(stop: impl Into<Fraction>) -> Result<Self> {
        let stop = stop.into().snap();
        let precise = Self::stop_to_fstop_precise(&stop);
        let fstop = round::floor(precise, FSTOP_DIGITS)?;
        Ok(Av { stop, precise, fstop })
    }

    /// Av from an f-number.
    ///
    /// ```
    /// use exposure_units::Av;
    ///
    /// assert_eq!(Av::from_fstop(1.4).unwrap().stop().to_string(), "1");
    /// assert_eq!(Av::from_fstop(1.7).unwrap().stop().to_string(), "3/2");
    /// assert_eq!(Av::from_fstop(22.0).unwrap().to_string(), "f/22");
    /// ```
    pub fn from_fstop(fstop: f64) -> Result<Self> {
        Self::from_stop(Self::fstop_to_stop(fstop)?)
    }

    /// Av from a lens focal length and entrance pupil diameter
    pub fn from_focal_length_and_diameter(focal_length_mm: f64, diameter_mm: f64) -> Result<Self> {
        if !(focal_length_mm > 0.0) || !(diameter_mm > 0.0) {
            return Err(ExposureError::domain_error(format!(
                "focal length ({} mm) and diameter ({} mm) must be positive",
                focal_length_mm, diameter_mm
            )));
        }
        Self::from_fstop(focal_length_mm / diameter_mm)
    }

    pub fn stop(&self) -> &Fraction {
        &self.stop
    }

    /// Un-rounded f-number, √2^stop
    pub fn precise(&self) -> f64 {
        self.precise
    }

    /// f-number truncated to two significant digits
    pub fn fstop(&self) -> f64 {
        self.fstop
    }

    fn fstop_to_stop(fstop: f64) -> Result<Fraction> {
        if !(fstop > 0.0) || !fstop.is_finite() {
            return Err(ExposureError::domain_error(format!(
                "f-number must be positive, got {}",
                fstop
            )));
        }
        let stop = 2.0 * fstop.log10() / 2_f64.log10();
        Ok(Fraction::snap_f64(stop)?)
    }

    fn stop_to_fstop_precise(stop: &Fraction) -> f64 {
        std::f64::consts::SQRT_2.powf(stop.to_f64())
    }
}

impl QuantityKind for Av {
    const KIND: Kind = Kind::Av;

    fn stop(&self) -> &Fraction {
        &self.stop
    }
}

impl From<Av> for Quantity {
    fn from(av: Av) -> Self {
        Quantity::Av(av)
    }
}

impl TryFrom<Quantity> for Av {
    type Error = ExposureError;

    fn try_from(quantity: Quantity) -> Result<Self> {
        match quantity {
            Quantity::Av(av) => Ok(av),
            other => Err(ExposureError::type_mismatch(Kind::Av.symbol(), other.kind().symbol())),
        }
    }
}

impl fmt::Display for Av {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = round::significant_decimals(self.fstop, FSTOP_DIGITS);
        write!(f, "f/{:.prec$}", self.fstop, prec = decimals)
    }
}
