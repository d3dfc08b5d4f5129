//! Significant-digit rounding for presenting physical units
//!
//! f-numbers, EV ratings and the luminance tables are all shown with a fixed
//! number of significant digits or decimals. These helpers keep that
//! behaviour identical from 1/32000 up to thousands of lux.

use crate::ExposureError;

/// Multiply by 10^exp, dividing for negative exponents so that
/// 14 × 10^-1 lands on 1.4 rather than 1.4000000000000001.
fn scale(value: f64, exp: i32) -> f64 {
    if exp >= 0 {
        value * 10_f64.powi(exp)
    } else {
        value / 10_f64.powi(-exp)
    }
}

fn magnitude(value: f64) -> i32 {
    value.abs().log10().floor() as i32
}

/// Truncate `value` to `significant_digits` significant digits.
///
/// ```
/// use exposure_core::round::floor;
///
/// assert_eq!(floor(1234.0, 2).unwrap(), 1200.0);
/// assert_eq!(floor(0.1234, 3).unwrap(), 0.123);
/// assert_eq!(floor(1.40010292921234, 2).unwrap(), 1.4);
/// ```
pub fn floor(value: f64, significant_digits: u32) -> Result<f64, ExposureError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ExposureError::domain_error(format!(
            "cannot take significant digits of {}: value must be positive",
            value
        )));
    }

    let digits = significant_digits.max(1) as i32;
    let shift = digits - 1 - magnitude(value);
    let truncated = scale(value, shift).floor();
    let number = scale(truncated, -shift);
    // Re-round to clear float noise; tiny values need more than `digits` places.
    Ok(round_to(number, shift.max(digits) as u32))
}

/// Round half away from zero to a fixed number of decimals
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Decimals needed to show `significant_digits` digits of `value`;
/// zero once the integer part alone carries them (f/2.0 but f/22).
pub fn significant_decimals(value: f64, significant_digits: u32) -> usize {
    let digits = significant_digits.max(1) as i32;
    if value == 0.0 || !value.is_finite() {
        return (digits - 1) as usize;
    }
    (digits - 1 - magnitude(value)).max(0) as usize
}

/// General-format rendering with `significant_digits` digits.
///
/// Trailing zeros are trimmed but one decimal is always kept, so
/// `-1.0`, `3.3219` and `12.346` come out the same way a
/// scientific calculator would print them.
pub fn format_significant(value: f64, significant_digits: u32) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let digits = significant_digits.max(1) as i32;
    let excess = magnitude(value) - (digits - 1);
    let value = if excess > 0 {
        scale(scale(value, -excess).round(), excess)
    } else {
        value
    };

    let mut s = format!("{:.prec$}", value, prec = significant_decimals(value, digits as u32));
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.push('0');
        }
    } else {
        s.push_str(".0");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn test_floor_large() {
        assert_eq!(floor(1234.0, 2).unwrap(), 1200.0);
        assert_eq!(floor(1234.0, 5).unwrap(), 1234.0);
    }

    #[test]
    fn test_floor_small() {
        assert_eq!(floor(0.1234, 3).unwrap(), 0.123);
        assert_eq!(floor(1.0 / 32000.0, 2).unwrap(), 0.000031);
    }

    #[test]
    fn test_floor_truncates() {
        // sqrt(2)^9 = 22.627...
        assert_eq!(floor(22.627416997969522, 2).unwrap(), 22.0);
        assert_eq!(floor(1.4142135623730951, 2).unwrap(), 1.4);
        assert_eq!(floor(1.7817974362806785, 2).unwrap(), 1.7);
        assert_eq!(floor(30.0, 2).unwrap(), 30.0);
    }

    #[test]
    fn test_floor_rejects_non_positive() {
        let err = floor(0.0, 2).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
        assert!(floor(-1.0, 2).is_err());
        assert!(floor(f64::NAN, 2).is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.4262591, 1), 3.4);
        assert_eq!(round_to(109.6402912, 1), 109.6);
        assert_eq!(round_to(12.48, 1), 12.5);
    }

    #[test]
    fn test_significant_decimals() {
        assert_eq!(significant_decimals(1.4, 2), 1);
        assert_eq!(significant_decimals(2.0, 2), 1);
        assert_eq!(significant_decimals(22.0, 2), 0);
        assert_eq!(significant_decimals(0.71, 2), 2);
    }

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(-1.0, 5), "-1.0");
        assert_eq!(format_significant(12.345678, 5), "12.346");
        assert_eq!(format_significant(3.321928094887362, 5), "3.3219");
        assert_eq!(format_significant(0.0, 5), "0.0");
        assert_eq!(format_significant(123456.7, 3), "123000.0");
    }
}
