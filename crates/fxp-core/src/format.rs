//! Decimal parsing and formatting.
//!
//! Both directions are exact integer algorithms; no floating point is
//! involved, so `parse(to_string(v)) == v` for every value.
//!
//! # Formatting
//!
//! [`Display`](fmt::Display) writes the shortest decimal that parses back to
//! the same raw value (at most 10 fractional digits for Q32.32). An explicit
//! precision (`{:.3}`) writes exactly that many digits, rounded half away
//! from zero. Width, fill and the `+` flag are honoured.
//!
//! # Parsing
//!
//! Accepted syntax is `[+-]digits[.digits]` with surrounding whitespace
//! ignored; `.5` and `5.` are accepted. The fraction is rounded to the
//! nearest ULP (ties away from zero) and magnitudes beyond the range
//! saturate.
//!
//! ```rust
//! use fxp_core::{Fixed, NumberFormat};
//!
//! let v: Fixed = "-12.375".parse().unwrap();
//! assert_eq!(v.to_string(), "-12.375");
//! assert_eq!(format!("{:.1}", v), "-12.4");
//!
//! let de = NumberFormat::COMMA_DECIMAL;
//! let w = Fixed::parse_with("1.234,5", &de).unwrap();
//! assert_eq!(w, Fixed::from_f64(1234.5));
//! assert_eq!(w.display_with(de).to_string(), "1.234,5");
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};
use crate::fixed::{Fixed, saturate_i128};

const FRAC_BITS: u32 = crate::FRAC_BITS;
const FRAC_MASK_U64: u64 = (1 << FRAC_BITS) - 1;

/// Every multiple of `2^-33` is a decimal with at most 33 fractional
/// digits, so digits past the 33rd cannot move the rounded result.
const MAX_FRAC_DIGITS: u32 = 33;

/// Digits needed for the shortest round-trip representation of `2^-32` steps.
const MAX_SHORTEST_DIGITS: u32 = 10;

/// Decimal and grouping separators used when parsing and formatting.
///
/// # Example
///
/// ```rust
/// use fxp_core::{Fixed, NumberFormat};
///
/// let fr = NumberFormat::new(',').with_group_separator(Some(' '));
/// let v = Fixed::parse_with("12 500,25", &fr).unwrap();
/// assert_eq!(v.display_with(fr).to_string(), "12 500,25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberFormat {
    /// Character between the integer and fractional digits.
    pub decimal_separator: char,
    /// Optional thousands separator, inserted every three digits when
    /// formatting. When parsing it is accepted in the integer part only
    /// after a digit; group widths are not checked.
    pub group_separator: Option<char>,
}

impl NumberFormat {
    /// `.` decimal separator, no grouping.
    pub const INVARIANT: Self = Self::new('.');

    /// `,` decimal separator with `.` grouping (German, Spanish, ...).
    pub const COMMA_DECIMAL: Self = Self {
        decimal_separator: ',',
        group_separator: Some('.'),
    };

    /// Creates a format with the given decimal separator and no grouping.
    #[inline]
    pub const fn new(decimal_separator: char) -> Self {
        Self {
            decimal_separator,
            group_separator: None,
        }
    }

    /// Returns a copy with the given group separator.
    #[inline]
    pub const fn with_group_separator(self, group_separator: Option<char>) -> Self {
        Self {
            group_separator,
            ..self
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Converts `digits` fractional decimal digits (`frac / 10^digits`) to raw
/// units of `2^-32`, rounded to nearest with ties away from zero.
///
/// `frac / 10^d * 2^33 == frac * 2^(33 - d) / 5^d`, which stays within
/// `u128` for `d <= 33`. The floor in `2^-33` units carries the half bit.
fn decimal_fraction_to_raw(frac: u128, digits: u32) -> u128 {
    if digits == 0 {
        return 0;
    }
    let halves = (frac << (MAX_FRAC_DIGITS - digits)) / 5u128.pow(digits);
    (halves + 1) >> 1
}

fn parse_decimal(input: &str, format: &NumberFormat) -> Result<Fixed> {
    let text = input.trim();
    let (negative, body) = match text.chars().next() {
        Some('-') => (true, &text[1..]),
        Some('+') => (false, &text[1..]),
        _ => (false, text),
    };
    if body.is_empty() {
        return Err(Error::parse(input, "empty literal"));
    }

    let mut int_part: u128 = 0;
    let mut int_overflow = false;
    let mut frac: u128 = 0;
    let mut frac_digits: u32 = 0;
    let mut digit_count = 0usize;
    let mut seen_separator = false;
    let mut prev_digit = false;

    for ch in body.chars() {
        if ch == format.decimal_separator {
            if seen_separator {
                return Err(Error::parse(input, "multiple decimal separators"));
            }
            seen_separator = true;
            prev_digit = false;
        } else if !seen_separator && Some(ch) == format.group_separator {
            if !prev_digit {
                return Err(Error::parse(input, "misplaced group separator"));
            }
            prev_digit = false;
        } else if let Some(d) = ch.to_digit(10) {
            digit_count += 1;
            prev_digit = true;
            let d = u128::from(d);
            if seen_separator {
                if frac_digits < MAX_FRAC_DIGITS {
                    frac = frac * 10 + d;
                    frac_digits += 1;
                }
            } else {
                match int_part.checked_mul(10).and_then(|v| v.checked_add(d)) {
                    Some(v) => int_part = v,
                    None => int_overflow = true,
                }
            }
        } else {
            return Err(Error::parse(input, "unexpected character"));
        }
    }
    if digit_count == 0 {
        return Err(Error::parse(input, "no digits"));
    }

    // Magnitude limit: 2^63 for negatives reaches MIN exactly.
    let limit: u128 = if negative { 1 << 63 } else { (1 << 63) - 1 };
    let magnitude = if int_overflow || int_part > u128::from(u32::MAX) {
        limit
    } else {
        ((int_part << FRAC_BITS) + decimal_fraction_to_raw(frac, frac_digits)).min(limit)
    };
    let signed = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };
    Ok(Fixed::from_bits(saturate_i128(signed)))
}

/// Integer and fractional digits of a magnitude, before separators are applied.
struct Digits {
    int_part: u64,
    frac: String,
}

/// Shortest fractional digits that parse back to `frac`.
fn shortest_digits(int_part: u64, frac: u64) -> Digits {
    if frac == 0 {
        return Digits {
            int_part,
            frac: String::new(),
        };
    }
    let frac = u128::from(frac);
    let mut digits = MAX_SHORTEST_DIGITS;
    let mut scaled = 0u128;
    for d in 1..=MAX_SHORTEST_DIGITS {
        let candidate = (frac * 10u128.pow(d) + (1 << (FRAC_BITS - 1))) >> FRAC_BITS;
        if decimal_fraction_to_raw(candidate, d) == frac {
            digits = d;
            scaled = candidate;
            break;
        }
    }
    if scaled == 0 {
        // Ten digits always round-trip for 32 fractional bits.
        scaled = (frac * 10u128.pow(digits) + (1 << (FRAC_BITS - 1))) >> FRAC_BITS;
    }
    Digits {
        int_part,
        frac: format!("{:0width$}", scaled, width = digits as usize),
    }
}

/// Exactly `precision` fractional digits, rounded half away from zero.
fn fixed_digits(mut int_part: u64, frac: u64, precision: usize) -> Digits {
    let mut digits = Vec::with_capacity(precision);
    let mut rem = u128::from(frac);
    for _ in 0..precision {
        rem *= 10;
        digits.push((rem >> FRAC_BITS) as u8);
        rem &= u128::from(FRAC_MASK_U64);
    }
    if rem >= 1 << (FRAC_BITS - 1) {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            int_part += 1;
        }
    }
    Digits {
        int_part,
        frac: digits.iter().map(|d| char::from(b'0' + d)).collect(),
    }
}

fn write_fixed(value: Fixed, format: &NumberFormat, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let magnitude = value.to_bits().unsigned_abs();
    let int_part = magnitude >> FRAC_BITS;
    let frac = magnitude & FRAC_MASK_U64;

    let digits = match f.precision() {
        Some(precision) => fixed_digits(int_part, frac, precision),
        None => shortest_digits(int_part, frac),
    };

    let int_text = digits.int_part.to_string();
    let mut text = String::with_capacity(int_text.len() + digits.frac.len() + 8);
    match format.group_separator {
        Some(group) => {
            for (i, ch) in int_text.chars().enumerate() {
                if i > 0 && (int_text.len() - i) % 3 == 0 {
                    text.push(group);
                }
                text.push(ch);
            }
        }
        None => text.push_str(&int_text),
    }
    if !digits.frac.is_empty() {
        text.push(format.decimal_separator);
        text.push_str(&digits.frac);
    }
    f.pad_integral(!value.is_negative(), "", &text)
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(*self, &NumberFormat::INVARIANT, f)
    }
}

impl FromStr for Fixed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, &NumberFormat::INVARIANT)
    }
}

/// [`Display`](fmt::Display) adapter returned by [`Fixed::display_with`].
#[derive(Debug, Clone, Copy)]
pub struct DisplayFixed {
    value: Fixed,
    format: NumberFormat,
}

impl fmt::Display for DisplayFixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fixed(self.value, &self.format, f)
    }
}

impl Fixed {
    /// Parses a decimal literal using the given separators.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] for empty input, missing digits, repeated decimal
    /// separators or any other character.
    pub fn parse_with(input: &str, format: &NumberFormat) -> Result<Self> {
        parse_decimal(input, format).inspect_err(|err| trace!(%err, "parse failed"))
    }

    /// Returns a [`Display`](fmt::Display) adapter using the given separators.
    #[inline]
    pub fn display_with(self, format: NumberFormat) -> DisplayFixed {
        DisplayFixed {
            value: self,
            format,
        }
    }
}
