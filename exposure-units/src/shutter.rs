//! Time value (Tv)
//!
//! Tv represents the exposure time. Cameras only offer nominal speeds
//! (1/125, 1/13, 10/13 ...), which are not exact powers of two, so stops and
//! durations are related through a fixed table instead of a formula.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use serde::Serialize;
use exposure_core::{ExposureError, Fraction, Result};
use crate::{Kind, Quantity, QuantityKind};

/// Stop of the first table entry (1/32000 s)
pub const FIRST_STOP: i64 = -15;

/// Nominal third-stop shutter speeds in seconds, from 1/32000 s to 30 s.
/// Entry `i` sits at stop `FIRST_STOP + i/3`.
const NOMINAL_SPEEDS: [(i64, i64); 61] = [
    (1, 32000), (1, 25600), (1, 20000),
    (1, 16000), (1, 12800), (1, 10000),
    (1, 8000), (1, 6400), (1, 5000),
    (1, 4000), (1, 3200), (1, 2500),
    (1, 2000), (1, 1600), (1, 1250),
    (1, 1000), (1, 800), (1, 640),
    (1, 500), (1, 400), (1, 320),
    (1, 250), (1, 200), (1, 160),
    (1, 125), (1, 100), (1, 80),
    (1, 60), (1, 50), (1, 40),
    (1, 30), (1, 25), (1, 20),
    (1, 15), (1, 13), (1, 10),
    (1, 8), (1, 6), (1, 5),
    (1, 4), (1, 3), (10, 25),
    (1, 2), (10, 16), (10, 13),
    (1, 1), (13, 10), (16, 10),
    (2, 1), (25, 10), (3, 1),
    (4, 1), (5, 1), (6, 1),
    (8, 1), (10, 1), (13, 1),
    (15, 1), (20, 1), (25, 1),
    (30, 1),
];

/// Global shutter speed table
pub static SHUTTER_SPEEDS: LazyLock<ShutterTable> = LazyLock::new(ShutterTable::new);

/// Bidirectional stop ↔ duration table
pub struct ShutterTable {
    /// (stop, seconds), sorted by stop
    entries: Vec<(Fraction, Fraction)>,
    by_time: HashMap<Fraction, usize>,
}

impl ShutterTable {
    fn new() -> Self {
        let entries: Vec<(Fraction, Fraction)> = NOMINAL_SPEEDS
            .iter()
            .enumerate()
            .map(|(idx, &(num, den))| {
                let thirds = Fraction::new(idx as i64, 3).expect("non-zero denominator");
                let seconds = Fraction::new(num, den).expect("non-zero denominator");
                (Fraction::from_i64(FIRST_STOP) + thirds, seconds)
            })
            .collect();

        let by_time = entries
            .iter()
            .enumerate()
            .map(|(idx, (_, seconds))| (seconds.clone(), idx))
            .collect();

        ShutterTable { entries, by_time }
    }

    /// Nominal duration at an exact stop
    pub fn time_at(&self, stop: &Fraction) -> Option<&Fraction> {
        self.entries
            .binary_search_by(|(s, _)| s.cmp(stop))
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    /// Exact stop of a nominal duration
    pub fn stop_of(&self, seconds: &Fraction) -> Option<&Fraction> {
        self.by_time.get(seconds).map(|&idx| &self.entries[idx].0)
    }

    /// All (stop, seconds) pairs from fastest to slowest
    pub fn iter(&self) -> impl Iterator<Item = (&Fraction, &Fraction)> {
        self.entries.iter().map(|(stop, seconds)| (stop, seconds))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tv {
    stop: Fraction,
    precise: f64,
    time: Fraction,
}

impl Tv {
    /// Tv at a stop; the snapped stop must be one of the nominal speeds
    pub fn from_stop(stop: impl Into<Fraction>) -> Result<Self> {
        let stop = stop.into().snap();
        let time = SHUTTER_SPEEDS.time_at(&stop).cloned().ok_or_else(|| {
            tracing::debug!(%stop, "stop has no nominal shutter speed");
            ExposureError::domain_error(format!(
                "stop {} has no nominal shutter speed (table covers {} to {} in third stops)",
                stop,
                FIRST_STOP,
                FIRST_STOP + 20
            ))
            .with_suggestion("Solve for a different quantity or adjust the inputs by whole thirds")
        })?;
        let precise = stop.exp2();
        Ok(Tv { stop, precise, time })
    }

    /// Tv from a nominal duration in seconds.
    ///
    /// ```
    /// use exposure_units::Tv;
    /// use exposure_core::Fraction;
    ///
    /// let tv = Tv::from_time(Fraction::new(10, 13).unwrap()).unwrap();
    /// assert_eq!(tv.stop().to_string(), "-1/3");
    /// assert_eq!(tv.to_string(), "10/13 sec");
    /// ```
    pub fn from_time(seconds: impl Into<Fraction>) -> Result<Self> {
        let seconds = seconds.into();
        let stop = SHUTTER_SPEEDS.stop_of(&seconds).cloned().ok_or_else(|| {
            tracing::debug!(%seconds, "duration is not a nominal shutter speed");
            ExposureError::domain_error(format!("{} sec is not a nominal shutter speed", seconds))
                .with_suggestion("Use a nominal speed such as 1/125, 1/13 or 10/13")
        })?;
        Ok(Tv { precise: stop.exp2(), stop, time: seconds })
    }

    /// Every nominal speed the table knows, fastest first
    pub fn nominal_speeds() -> impl Iterator<Item = (&'static Fraction, &'static Fraction)> {
        let table: &'static ShutterTable = &SHUTTER_SPEEDS;
        table.iter()
    }

    pub fn stop(&self) -> &Fraction {
        &self.stop
    }

    /// 2^stop, the idealised duration the nominal speed stands for
    pub fn precise(&self) -> f64 {
        self.precise
    }

    /// Nominal duration in seconds
    pub fn time(&self) -> &Fraction {
        &self.time
    }
}

impl QuantityKind for Tv {
    const KIND: Kind = Kind::Tv;

    fn stop(&self) -> &Fraction {
        &self.stop
    }
}

impl From<Tv> for Quantity {
    fn from(tv: Tv) -> Self {
        Quantity::Tv(tv)
    }
}

impl TryFrom<Quantity> for Tv {
    type Error = ExposureError;

    fn try_from(quantity: Quantity) -> Result<Self> {
        match quantity {
            Quantity::Tv(tv) => Ok(tv),
            other => Err(ExposureError::type_mismatch(Kind::Tv.symbol(), other.kind().symbol())),
        }
    }
}

impl fmt::Display for Tv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sec", self.time)
    }
}
