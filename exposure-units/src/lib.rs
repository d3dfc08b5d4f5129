//! Exposure Units - the quantities of the APEX exposure equation
//!
//! Every quantity is a stop on a logarithmic scale, paired with the
//! physical value it stands for:
//! - Av: aperture (f-number)
//! - Tv: time (nominal shutter speed, from a fixed third-stop table)
//! - Sv: sensitivity (ISO)
//! - Bv: brightness (luminance, cd/m² or fL)
//! - Iv: incident light (illuminance, lux or fc)
//!
//! Quantities can also be read from strings such as "f/2.8" or "1/125 sec".

mod kind;
mod aperture;
mod shutter;
mod sensitivity;
mod luminance;
mod illuminance;
mod quantity;
mod unit;
mod units;
mod parse;

pub use kind::{Kind, Slot};
pub use aperture::{Av, FSTOP_DIGITS};
pub use shutter::{ShutterTable, Tv, FIRST_STOP, SHUTTER_SPEEDS};
pub use sensitivity::{Sv, BASE_ISO};
pub use luminance::{Bv, CANDELAS_AT_STOP_ZERO, CANDELAS_PER_FOOT_LAMBERT};
pub use illuminance::{Iv, FOOT_CANDLES_AT_STOP_ZERO, LUX_AT_STOP_ZERO};
pub use quantity::{Quantity, QuantityKind};
pub use unit::PhysicalUnit;
pub use units::{UnitRegistry, UNITS};
pub use parse::{parse_quantity, parse_stop};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Av, Bv, Iv, Kind, Quantity, QuantityKind, Slot, Sv, Tv};
    pub use crate::{parse_quantity, parse_stop};
}
