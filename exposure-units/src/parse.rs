//! Quantity string parsing - "f/2.8", "1/125 sec", "400 ISO", "Av f/1.4"

use std::str::FromStr;
use exposure_core::{ExposureError, Fraction, Result};
use crate::units::UNITS;
use crate::{Kind, PhysicalUnit, Quantity};

/// Parse a quantity written in a physical unit
///
/// Supported formats:
/// - Aperture: "f/2.8", "F2.8", "f/11"
/// - Sensitivity: "400 ISO", "iso 400", "ASA 100"
/// - Time: "1/125 sec", "1/125s", "2 sec", "10/13 seconds"
/// - Luminance: "109.6 cd/m2", "32 nits", "8 fL"
/// - Illuminance: "134.4 lux", "1000 lx", "25 fc"
/// - Any of the above behind a kind prefix: "Av f/1.4", "Tv 2 sec"
///
/// ```
/// use exposure_units::{parse_quantity, Kind};
///
/// let q = parse_quantity("1/125 sec").unwrap();
/// assert_eq!(q.kind(), Kind::Tv);
/// assert_eq!(q.stop().to_string(), "-7");
/// ```
pub fn parse_quantity(s: &str) -> Result<Quantity> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ExposureError::parse_error("empty quantity"));
    }

    let (prefix, body) = split_kind_prefix(s);
    let (value, unit) = parse_value_and_unit(body)?;
    let quantity = unit.quantity(&value)?;

    if let Some(kind) = prefix {
        if kind != quantity.kind() {
            return Err(ExposureError::type_mismatch(kind.symbol(), quantity.kind().symbol()));
        }
    }

    tracing::trace!(input = s, unit = %unit, stop = %quantity.stop(), "parsed quantity");
    Ok(quantity)
}

/// Parse a stop string ("2", "-5/3", "0.5") into a quantity of `kind`
pub fn parse_stop(kind: Kind, s: &str) -> Result<Quantity> {
    let stop = parse_number(s)?;
    Quantity::from_stop(kind, stop)
}

/// Peel a leading "Av"/"Tv"/... token off, if there is one
fn split_kind_prefix(s: &str) -> (Option<Kind>, &str) {
    if let Some((head, rest)) = s.split_once(char::is_whitespace) {
        if let Ok(kind) = Kind::from_str(head) {
            return (Some(kind), rest.trim_start());
        }
    }
    (None, s)
}

fn parse_value_and_unit(s: &str) -> Result<(Fraction, PhysicalUnit)> {
    if let Some(number) = strip_fnumber_prefix(s) {
        return Ok((parse_number(number)?, PhysicalUnit::FNumber));
    }

    // Units written before the number ("ISO 400")
    if let Some((head, rest)) = s.split_once(char::is_whitespace) {
        if let Some(unit) = UNITS.get(head) {
            if starts_numeric(rest.trim_start()) {
                return Ok((parse_number(rest)?, unit));
            }
        }
    }

    let split_pos = s
        .char_indices()
        .find(|&(_, c)| !is_number_char(c))
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let num_str = s[..split_pos].trim();
    let unit_str = s[split_pos..].trim();

    if num_str.is_empty() {
        return Err(ExposureError::parse_error(format!("no number found in '{}'", s)));
    }
    if unit_str.is_empty() {
        return Err(ExposureError::parse_error(format!("missing unit in '{}'", s))
            .with_suggestion("Add a unit such as sec, ISO, cd/m2 or lux, or use parse_stop for bare stops"));
    }

    let unit = UNITS
        .get(unit_str)
        .ok_or_else(|| ExposureError::parse_error(format!("unknown unit '{}'", unit_str)))?;

    Ok((parse_number(num_str)?, unit))
}

/// "f/2.8" or "F2.8" → "2.8"
fn strip_fnumber_prefix(s: &str) -> Option<&str> {
    let rest = s.strip_prefix('f').or_else(|| s.strip_prefix('F'))?;
    let rest = rest.strip_prefix('/').unwrap_or(rest).trim_start();
    starts_numeric(rest).then_some(rest)
}

fn starts_numeric(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '.')
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | '/')
}

fn parse_number(s: &str) -> Result<Fraction> {
    Ok(Fraction::from_str(s.trim())?)
}
