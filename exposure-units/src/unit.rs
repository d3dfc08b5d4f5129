//! Physical units that exposure quantities can be read from

use std::fmt;
use serde::{Serialize, Deserialize};
use exposure_core::{Fraction, Result};
use crate::{Av, Bv, Iv, Kind, Quantity, Sv, Tv};

/// A human-facing unit for one of the quantity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalUnit {
    /// Relative aperture, f/N
    FNumber,
    /// ISO arithmetic speed
    Iso,
    /// Exposure time in seconds
    Seconds,
    /// Luminance, cd/m²
    CandelasPerSquareMetre,
    /// Luminance, fL
    FootLamberts,
    /// Illuminance, lx
    Lux,
    /// Illuminance, fc
    FootCandles,
}

impl PhysicalUnit {
    pub const ALL: [PhysicalUnit; 7] = [
        PhysicalUnit::FNumber,
        PhysicalUnit::Iso,
        PhysicalUnit::Seconds,
        PhysicalUnit::CandelasPerSquareMetre,
        PhysicalUnit::FootLamberts,
        PhysicalUnit::Lux,
        PhysicalUnit::FootCandles,
    ];

    /// Canonical symbol, as used in display strings
    pub fn symbol(self) -> &'static str {
        match self {
            PhysicalUnit::FNumber => "f/",
            PhysicalUnit::Iso => "ISO",
            PhysicalUnit::Seconds => "sec",
            PhysicalUnit::CandelasPerSquareMetre => "cd/m2",
            PhysicalUnit::FootLamberts => "fL",
            PhysicalUnit::Lux => "lux",
            PhysicalUnit::FootCandles => "fc",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhysicalUnit::FNumber => "f-number",
            PhysicalUnit::Iso => "ISO speed",
            PhysicalUnit::Seconds => "second",
            PhysicalUnit::CandelasPerSquareMetre => "candela per square metre",
            PhysicalUnit::FootLamberts => "foot-lambert",
            PhysicalUnit::Lux => "lux",
            PhysicalUnit::FootCandles => "foot-candle",
        }
    }

    /// The quantity kind this unit measures
    pub fn kind(self) -> Kind {
        match self {
            PhysicalUnit::FNumber => Kind::Av,
            PhysicalUnit::Iso => Kind::Sv,
            PhysicalUnit::Seconds => Kind::Tv,
            PhysicalUnit::CandelasPerSquareMetre | PhysicalUnit::FootLamberts => Kind::Bv,
            PhysicalUnit::Lux | PhysicalUnit::FootCandles => Kind::Iv,
        }
    }

    /// Build the quantity this unit's `value` describes.
    ///
    /// Durations stay exact so they can match the shutter table; the
    /// logarithmic units go through f64.
    pub fn quantity(self, value: &Fraction) -> Result<Quantity> {
        let v = value.to_f64();
        Ok(match self {
            PhysicalUnit::FNumber => Av::from_fstop(v)?.into(),
            PhysicalUnit::Iso => Sv::from_iso(v)?.into(),
            PhysicalUnit::Seconds => Tv::from_time(value.clone())?.into(),
            PhysicalUnit::CandelasPerSquareMetre => Bv::from_candelas(v)?.into(),
            PhysicalUnit::FootLamberts => Bv::from_foot_lamberts(v)?.into(),
            PhysicalUnit::Lux => Iv::from_lux(v)?.into(),
            PhysicalUnit::FootCandles => Iv::from_foot_candles(v)?.into(),
        })
    }
}

impl fmt::Display for PhysicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
