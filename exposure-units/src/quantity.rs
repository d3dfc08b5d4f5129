//! Quantity type - one exposure value of any kind

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use exposure_core::{ExposureError, Fraction, Result};
use crate::{Av, Bv, Iv, Kind, Sv, Tv};

/// Implemented by each concrete quantity so generic code can name its kind
/// and move between it and [`Quantity`].
pub trait QuantityKind: Into<Quantity> + TryFrom<Quantity, Error = ExposureError> {
    const KIND: Kind;

    fn stop(&self) -> &Fraction;
}

/// A single exposure quantity: aperture, time, sensitivity or light
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Quantity {
    Av(Av),
    Tv(Tv),
    Sv(Sv),
    Bv(Bv),
    Iv(Iv),
}

impl Quantity {
    /// Construct a quantity of `kind` at `stop` (snapped to the stop grid)
    pub fn from_stop(kind: Kind, stop: impl Into<Fraction>) -> Result<Quantity> {
        let stop = stop.into();
        Ok(match kind {
            Kind::Av => Av::from_stop(stop)?.into(),
            Kind::Tv => Tv::from_stop(stop)?.into(),
            Kind::Sv => Sv::from_stop(stop).into(),
            Kind::Bv => Bv::from_stop(stop).into(),
            Kind::Iv => Iv::from_stop(stop).into(),
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Quantity::Av(_) => Kind::Av,
            Quantity::Tv(_) => Kind::Tv,
            Quantity::Sv(_) => Kind::Sv,
            Quantity::Bv(_) => Kind::Bv,
            Quantity::Iv(_) => Kind::Iv,
        }
    }

    pub fn stop(&self) -> &Fraction {
        match self {
            Quantity::Av(q) => q.stop(),
            Quantity::Tv(q) => q.stop(),
            Quantity::Sv(q) => q.stop(),
            Quantity::Bv(q) => q.stop(),
            Quantity::Iv(q) => q.stop(),
        }
    }

    /// Exact sum of two stops, regardless of kind; not re-snapped
    pub fn add(&self, other: &Quantity) -> Fraction {
        self.stop() + other.stop()
    }

    /// Exact difference of two stops, regardless of kind; not re-snapped
    pub fn sub(&self, other: &Quantity) -> Fraction {
        self.stop() - other.stop()
    }

    /// Whether two quantities sit at the same stop, regardless of kind
    pub fn same_stop(&self, other: &Quantity) -> bool {
        self.stop() == other.stop()
    }

    /// Order two quantities of the same kind by stop.
    ///
    /// Stops of different kinds live on different scales, so comparing
    /// them is a type mismatch.
    pub fn compare(&self, other: &Quantity) -> Result<std::cmp::Ordering> {
        if self.kind() != other.kind() {
            return Err(ExposureError::type_mismatch(self.kind().symbol(), other.kind().symbol()));
        }
        Ok(self.stop().cmp(other.stop()))
    }

    /// Narrow to a concrete kind
    pub fn into_kind<T: QuantityKind>(self) -> Result<T> {
        T::try_from(self)
    }

    pub fn as_av(&self) -> Option<&Av> {
        match self {
            Quantity::Av(av) => Some(av),
            _ => None,
        }
    }

    pub fn as_tv(&self) -> Option<&Tv> {
        match self {
            Quantity::Tv(tv) => Some(tv),
            _ => None,
        }
    }

    pub fn as_sv(&self) -> Option<&Sv> {
        match self {
            Quantity::Sv(sv) => Some(sv),
            _ => None,
        }
    }

    pub fn as_bv(&self) -> Option<&Bv> {
        match self {
            Quantity::Bv(bv) => Some(bv),
            _ => None,
        }
    }

    pub fn as_iv(&self) -> Option<&Iv> {
        match self {
            Quantity::Iv(iv) => Some(iv),
            _ => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Av(q) => write!(f, "Av {}", q),
            Quantity::Tv(q) => write!(f, "Tv {}", q),
            Quantity::Sv(q) => write!(f, "Sv {}", q),
            Quantity::Bv(q) => write!(f, "Bv {}", q),
            Quantity::Iv(q) => write!(f, "Iv {}", q),
        }
    }
}

impl FromStr for Quantity {
    type Err = ExposureError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_quantity(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_from_stop_each_kind() {
        for kind in Kind::ALL {
            let q = Quantity::from_stop(kind, 1).unwrap();
            assert_eq!(q.kind(), kind);
            assert_eq!(*q.stop(), 1i64);
        }
    }

    #[test]
    fn test_from_stop_snaps() {
        let q = Quantity::from_stop(Kind::Sv, frac(7, 10)).unwrap();
        assert_eq!(*q.stop(), frac(2, 3));
    }

    #[test]
    fn test_from_stop_tv_out_of_table() {
        assert!(Quantity::from_stop(Kind::Tv, 12).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_stop_arithmetic() {
        let av: Quantity = Av::from_stop(frac(2, 3)).unwrap().into();
        let sv: Quantity = Sv::from_stop(frac(1, 3)).into();
        assert_eq!(av.add(&sv), 1i64);
        assert_eq!(av.sub(&sv), frac(1, 3));
    }

    #[test]
    fn test_same_stop_across_kinds() {
        let av: Quantity = Av::from_stop(2).unwrap().into();
        let sv: Quantity = Sv::from_stop(2).into();
        assert!(av.same_stop(&sv));
        assert_ne!(av, sv);
    }

    #[test]
    fn test_compare() {
        let a: Quantity = Av::from_stop(2).unwrap().into();
        let b: Quantity = Av::from_stop(3).unwrap().into();
        assert_eq!(a.compare(&b).unwrap(), std::cmp::Ordering::Less);

        let iv: Quantity = Iv::from_stop(3).into();
        assert!(a.compare(&iv).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_into_kind() {
        let q: Quantity = Tv::from_stop(0).unwrap().into();
        let tv: Tv = q.clone().into_kind().unwrap();
        assert_eq!(*tv.time(), 1i64);
        assert!(q.into_kind::<Sv>().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::from_stop(Kind::Av, 1).unwrap().to_string(), "Av f/1.4");
        assert_eq!(Quantity::from_stop(Kind::Tv, 1).unwrap().to_string(), "Tv 2 sec");
        assert_eq!(Quantity::from_stop(Kind::Sv, 0).unwrap().to_string(), "Sv 100 ISO");
        assert_eq!(Quantity::from_stop(Kind::Bv, 3).unwrap().to_string(), "Bv 27.4 cd/m2");
        assert_eq!(Quantity::from_stop(Kind::Iv, 1).unwrap().to_string(), "Iv 134.4 lux");
    }

    #[test]
    fn test_serialize_tagged() {
        let q = Quantity::from_stop(Kind::Sv, 2).unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["kind"], "Sv");
        assert_eq!(json["stop"], "2");
        assert_eq!(json["iso"], 400.0);
    }
}
