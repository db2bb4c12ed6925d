//! Compact number rendering
//!
//! Compact numbers scale by 1000 through the K, M, G and T suffixes and keep
//! at most three significant digits in the mantissa.

use crate::bail_invalid;
use crate::error::Result;

/// Suffix ladder, consumed one step per division by 1000
const SUFFIXES: [&str; 4] = ["K", "M", "G", "T"];

/// Significant digits kept in the mantissa
const SIGNIFICANT_DIGITS: usize = 3;

/// Render a non-negative number compactly, e.g. `1500` as `"1.5K"`.
///
/// Negative, NaN and infinite inputs are rejected. Values of 10^15 and
/// above stay on the `T` suffix without further scaling. Rounding is half
/// up on the decimal digits, so `1005` renders as `"1.01K"`.
///
/// ```
/// use arcadekit_core::format::format_compact;
///
/// assert_eq!(format_compact(1_234_567.0).unwrap(), "1.23M");
/// assert!(format_compact(-1.0).is_err());
/// ```
pub fn format_compact(n: f64) -> Result<String> {
    if !n.is_finite() || n < 0.0 {
        bail_invalid!("number for compact formatting", n);
    }

    // -0.0 passes the sign check but must not print as "-0"
    Ok(compact(Decimal::from_float(n.abs())))
}

/// Render a count compactly. Every `u64` is in range, so this never fails.
pub fn format_compact_count(n: u64) -> String {
    compact(Decimal::from_count(n))
}

fn compact(mut value: Decimal) -> String {
    let mut suffix = "";
    for next in SUFFIXES {
        if value.int_len < 4 {
            break;
        }
        value.int_len -= 3;
        suffix = next;
    }

    let precision = SIGNIFICANT_DIGITS.saturating_sub(value.int_len);
    value.round(precision);

    format!("{}{}", value.render(), suffix)
}

/// A non-negative number held as its decimal digits.
///
/// Scaling by 1000 only moves the decimal point, so no binary rounding
/// error enters before the final rounding step.
struct Decimal {
    /// ASCII digits, integer part first, no leading zeros except a lone `0`
    digits: Vec<u8>,
    /// How many of `digits` sit before the decimal point
    int_len: usize,
}

impl Decimal {
    fn from_count(n: u64) -> Self {
        let digits = n.to_string().into_bytes();
        let int_len = digits.len();
        Self { digits, int_len }
    }

    /// Uses the shortest round-trip rendering, which never has an exponent.
    fn from_float(n: f64) -> Self {
        let printed = n.to_string();
        let (int, frac) = printed.split_once('.').unwrap_or((printed.as_str(), ""));
        let mut digits = int.as_bytes().to_vec();
        let int_len = digits.len();
        digits.extend_from_slice(frac.as_bytes());
        Self { digits, int_len }
    }

    /// Keep `precision` decimals, rounding half up on the first dropped digit.
    fn round(&mut self, precision: usize) {
        let keep = self.int_len + precision;
        if self.digits.len() <= keep {
            self.digits.resize(keep, b'0');
            return;
        }

        let round_up = self.digits[keep] >= b'5';
        self.digits.truncate(keep);
        if round_up {
            self.increment();
        }
    }

    fn increment(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                return;
            }
        }
        // Carry out of the top digit, e.g. 999.5 -> 1000
        self.digits.insert(0, b'1');
        self.int_len += 1;
    }

    /// Print without trailing zeros or a bare decimal point.
    fn render(&self) -> String {
        let (int, frac) = self.digits.split_at(self.int_len);
        let int: String = int.iter().map(|&d| char::from(d)).collect();
        let frac: String = frac.iter().map(|&d| char::from(d)).collect();
        let frac = frac.trim_end_matches('0');
        if frac.is_empty() {
            int
        } else {
            format!("{}.{}", int, frac)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArcadeError;

    fn fc(n: f64) -> String {
        format_compact(n).unwrap()
    }

    #[test]
    fn test_below_one_thousand_is_unscaled() {
        assert_eq!(fc(0.0), "0");
        assert_eq!(fc(7.0), "7");
        assert_eq!(fc(42.0), "42");
        assert_eq!(fc(999.0), "999");
        assert_eq!(fc(-0.0), "0");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(fc(1000.0), "1K");
        assert_eq!(fc(1500.0), "1.5K");
        assert_eq!(fc(1050.0), "1.05K");
        assert_eq!(fc(12_345.0), "12.3K");
        assert_eq!(fc(123_456.0), "123K");
    }

    #[test]
    fn test_precision_follows_integer_digits() {
        assert_eq!(fc(1_234_567.0), "1.23M");
        assert_eq!(fc(12_345_678.0), "12.3M");
        assert_eq!(fc(123_456_789.0), "123M");
        assert_eq!(fc(4_560_000_000.0), "4.56G");
    }

    #[test]
    fn test_rounding_carries_into_integer_part() {
        assert_eq!(fc(1999.0), "2K");
        // Rounding can reach 1000 without moving to the next suffix
        assert_eq!(fc(999_500.0), "1000K");
    }

    #[test]
    fn test_decimal_ties_round_half_up() {
        assert_eq!(format_compact_count(1005), "1.01K");
        assert_eq!(format_compact_count(1015), "1.02K");
        assert_eq!(format_compact_count(2675), "2.68K");
        assert_eq!(format_compact_count(1_005_000), "1.01M");
        assert_eq!(format_compact_count(12_350), "12.4K");
        assert_eq!(fc(1005.0), "1.01K");
        assert_eq!(fc(1015.0), "1.02K");
        assert_eq!(fc(2675.0), "2.68K");
        assert_eq!(fc(1_005_000.0), "1.01M");
        assert_eq!(fc(0.125), "0.13");
    }

    #[test]
    fn test_fractional_input() {
        assert_eq!(fc(0.5), "0.5");
        assert_eq!(fc(7.4567), "7.46");
    }

    #[test]
    fn test_t_suffix_is_the_ceiling() {
        let result = fc(999_999_999_999_999.0);
        assert!(result.ends_with('T'));
        assert_eq!(result, "1000T");
        assert_eq!(fc(1e18), "1000000T");
        assert_eq!(fc(2.5e12), "2.5T");
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        for bad in [-1.0, -0.001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = format_compact(bad).unwrap_err();
            assert!(matches!(err, ArcadeError::InvalidValue { .. }), "{bad}");
        }
    }

    #[test]
    fn test_format_compact_count() {
        assert_eq!(format_compact_count(0), "0");
        assert_eq!(format_compact_count(1_500), "1.5K");
        assert_eq!(format_compact_count(999_500), "1000K");
        assert_eq!(format_compact_count(u64::MAX), "18446744T");
    }
}
