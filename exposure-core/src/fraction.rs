//! Exact rational stops using dashu
//!
//! Every exposure quantity sits on a logarithmic scale measured in stops.
//! Stops are kept as exact rationals (dashu-ratio `RBig`) so that adding
//! and subtracting third stops never drifts the way f64 sums do.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Largest denominator a stop keeps once it enters a quantity
/// (whole, half and third stops).
pub const MAX_STOP_DENOMINATOR: u64 = 3;

/// Error type for fraction operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractionError {
    #[error("Invalid fraction format: {0}")]
    Parse(String),

    #[error("Zero denominator")]
    ZeroDenominator,

    #[error("Not a finite number: {0}")]
    NotFinite(f64),
}

/// Exact rational number
///
/// Always stored in lowest terms with a positive denominator, so
/// equality, ordering and hashing are exact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fraction {
    inner: RBig,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { inner: RBig::ZERO };

    /// Create from numerator and denominator, reducing to lowest terms
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        let (num, den) = if denominator < 0 {
            (-IBig::from(numerator), denominator.unsigned_abs())
        } else {
            (IBig::from(numerator), denominator as u64)
        };
        Ok(Self { inner: RBig::from_parts(num, UBig::from(den)) })
    }

    /// Create an integral fraction
    pub fn from_i64(n: i64) -> Self {
        Self { inner: RBig::from(n) }
    }

    /// Exact binary value of an f64 (no approximation happens here)
    pub fn from_f64(value: f64) -> Result<Self, FractionError> {
        if !value.is_finite() {
            return Err(FractionError::NotFinite(value));
        }
        let inner = RBig::try_from(value).map_err(|_| FractionError::NotFinite(value))?;
        Ok(Self { inner })
    }

    /// Convert a computed real and snap it to the stop grid in one step
    pub fn snap_f64(value: f64) -> Result<Self, FractionError> {
        Ok(Self::from_f64(value)?.snap())
    }

    fn from_ibig_ratio(numerator: IBig, denominator: IBig) -> Self {
        Self { inner: RBig::from(numerator) / RBig::from(denominator) }
    }

    // ========== Accessors ==========

    pub fn numerator(&self) -> &IBig {
        self.inner.numerator()
    }

    pub fn denominator(&self) -> &UBig {
        self.inner.denominator()
    }

    pub fn is_integer(&self) -> bool {
        *self.denominator() == UBig::ONE
    }

    pub fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < RBig::ZERO
    }

    /// Whether the denominator is one the stop grid allows
    pub fn is_on_stop_grid(&self) -> bool {
        *self.denominator() <= UBig::from(MAX_STOP_DENOMINATOR)
    }

    /// Nearest f64 (round to nearest)
    pub fn to_f64(&self) -> f64 {
        self.inner.to_f64().value()
    }

    /// 2 raised to this fraction, as used by every stop-to-unit formula
    pub fn exp2(&self) -> f64 {
        if self.is_integer() {
            if let Ok(n) = i32::try_from(self.numerator().clone()) {
                return 2_f64.powi(n);
            }
        }
        self.to_f64().exp2()
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    // ========== Approximation ==========

    /// Closest fraction whose denominator does not exceed `max_denominator`.
    ///
    /// Walks the continued fraction expansion until the next convergent
    /// would overshoot the bound, then picks between the last convergent
    /// and the best semiconvergent. Ties go to the convergent.
    pub fn limit_denominator(&self, max_denominator: u64) -> Self {
        let max_denominator = max_denominator.max(1);
        if *self.denominator() <= UBig::from(max_denominator) {
            return self.clone();
        }

        let max = IBig::from(max_denominator);
        let (mut p0, mut q0, mut p1, mut q1) = (IBig::ZERO, IBig::ONE, IBig::ONE, IBig::ZERO);
        let mut n = self.numerator().clone();
        let mut d = IBig::from(self.denominator().clone());

        loop {
            let a = floor_div(&n, &d);
            let q2 = &q0 + &a * &q1;
            if q2 > max {
                break;
            }
            let p2 = &p0 + &a * &p1;
            p0 = std::mem::replace(&mut p1, p2);
            q0 = std::mem::replace(&mut q1, q2);
            let rem = &n - &a * &d;
            n = std::mem::replace(&mut d, rem);
        }

        let k = (&max - &q0) / &q1;
        let semiconvergent = Self::from_ibig_ratio(&p0 + &k * &p1, &q0 + &k * &q1);
        let convergent = Self::from_ibig_ratio(p1, q1);

        if self.distance(&convergent) <= self.distance(&semiconvergent) {
            convergent
        } else {
            semiconvergent
        }
    }

    /// Snap to the nearest whole, half or third stop
    pub fn snap(&self) -> Self {
        self.limit_denominator(MAX_STOP_DENOMINATOR)
    }

    fn distance(&self, other: &Self) -> Self {
        (self - other).abs()
    }
}

/// Floor division for a positive divisor
fn floor_div(n: &IBig, d: &IBig) -> IBig {
    let q = n / d;
    if n % d < IBig::ZERO {
        q - IBig::ONE
    } else {
        q
    }
}

// ========== Arithmetic ==========

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        Fraction { inner: self.inner + other.inner }
    }
}

impl<'a> Add<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn add(self, other: &'a Fraction) -> Fraction {
        Fraction { inner: &self.inner + &other.inner }
    }
}

impl<'a> Add<&'a Fraction> for Fraction {
    type Output = Fraction;

    fn add(self, other: &'a Fraction) -> Fraction {
        Fraction { inner: self.inner + &other.inner }
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Fraction) -> Fraction {
        Fraction { inner: self.inner - other.inner }
    }
}

impl<'a> Sub<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn sub(self, other: &'a Fraction) -> Fraction {
        Fraction { inner: &self.inner - &other.inner }
    }
}

impl<'a> Sub<&'a Fraction> for Fraction {
    type Output = Fraction;

    fn sub(self, other: &'a Fraction) -> Fraction {
        Fraction { inner: self.inner - &other.inner }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction { inner: -self.inner }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction { inner: -self.inner.clone() }
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_i64(n as i64)
    }
}

// ========== Parsing ==========

impl FromStr for Fraction {
    type Err = FractionError;

    /// Supports: "2", "-1/3", "10/13", "1.5", "2.5e-1"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FractionError::Parse(s.to_string()));
        }

        if let Some((num_str, den_str)) = s.split_once('/') {
            let num: IBig = num_str.trim().parse()
                .map_err(|_| FractionError::Parse(s.to_string()))?;
            let den: IBig = den_str.trim().parse()
                .map_err(|_| FractionError::Parse(s.to_string()))?;
            if den == IBig::ZERO {
                return Err(FractionError::ZeroDenominator);
            }
            return Ok(Self::from_ibig_ratio(num, den));
        }

        if let Ok(n) = s.parse::<IBig>() {
            return Ok(Self { inner: RBig::from(n) });
        }

        // Plain decimal "12.34" is exact: 1234 / 10^2
        if let Some((int_part, frac_part)) = s.split_once('.') {
            if !frac_part.is_empty() && frac_part.chars().all(|c| c.is_ascii_digit()) {
                let digits = format!("{}{}", int_part, frac_part);
                if let Ok(n) = digits.parse::<IBig>() {
                    let scale = IBig::from(UBig::from(10u8).pow(frac_part.len()));
                    return Ok(Self::from_ibig_ratio(n, scale));
                }
            }
        }

        // Scientific notation goes through f64
        let f: f64 = s.parse().map_err(|_| FractionError::Parse(s.to_string()))?;
        Self::from_f64(f)
    }
}

// ========== Trait Implementations ==========

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator().hash(state);
        self.denominator().hash(state);
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        self.inner == RBig::from(*other)
    }
}

impl PartialOrd<i64> for Fraction {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.inner.partial_cmp(&RBig::from(*other))
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
