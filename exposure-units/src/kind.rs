//! Quantity kinds and the exposure-equation slots they fill
//!
//! Av + Tv = Sv + (Bv | Iv): each side of the equation has two slots, and
//! Bv and Iv are two ways of metering the same light slot.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use exposure_core::ExposureError;

/// The five quantity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    /// Aperture value
    Av,
    /// Time value (shutter speed)
    Tv,
    /// Speed value (sensitivity)
    Sv,
    /// Brightness value (reflected luminance)
    Bv,
    /// Incident light value (illuminance)
    Iv,
}

/// The four positions of the exposure equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    Aperture,
    Time,
    Sensitivity,
    Light,
}

impl Kind {
    pub const ALL: [Kind; 5] = [Kind::Av, Kind::Tv, Kind::Sv, Kind::Bv, Kind::Iv];

    pub fn slot(self) -> Slot {
        match self {
            Kind::Av => Slot::Aperture,
            Kind::Tv => Slot::Time,
            Kind::Sv => Slot::Sensitivity,
            Kind::Bv | Kind::Iv => Slot::Light,
        }
    }

    /// More sensitivity or more light lets aperture and time close down,
    /// so these kinds sit on the opposite side of the equation from Av and Tv.
    pub fn adds_light(self) -> bool {
        matches!(self, Kind::Sv | Kind::Bv | Kind::Iv)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Kind::Av => "Av",
            Kind::Tv => "Tv",
            Kind::Sv => "Sv",
            Kind::Bv => "Bv",
            Kind::Iv => "Iv",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Av => "aperture value",
            Kind::Tv => "time value",
            Kind::Sv => "speed value",
            Kind::Bv => "brightness value",
            Kind::Iv => "incident light value",
        }
    }
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Aperture, Slot::Time, Slot::Sensitivity, Slot::Light];

    pub fn kinds(self) -> &'static [Kind] {
        match self {
            Slot::Aperture => &[Kind::Av],
            Slot::Time => &[Kind::Tv],
            Slot::Sensitivity => &[Kind::Sv],
            Slot::Light => &[Kind::Bv, Kind::Iv],
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: Vec<&str> = self.kinds().iter().map(|k| k.symbol()).collect();
        f.write_str(&symbols.join("/"))
    }
}

impl FromStr for Kind {
    type Err = ExposureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|k| k.symbol().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExposureError::parse_error(format!("unknown kind '{}'", s.trim())))
    }
}
