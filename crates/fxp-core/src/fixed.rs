//! Q32.32 fixed-point scalar.
//!
//! [`Fixed`] stores a single `i64` holding the value scaled by `2^32`.
//! All arithmetic is integer arithmetic on that raw value, widened to
//! `i128` where a product or pre-scaled dividend needs the extra bits, so
//! results are bit-identical on every platform.
//!
//! # Overflow policy
//!
//! Every operator saturates at [`Fixed::MIN`] / [`Fixed::MAX`]. Nothing
//! wraps. The saturated value is the exact mathematical bound, never an
//! intermediate that already wrapped.
//!
//! # Usage
//!
//! ```rust
//! use fxp_core::Fixed;
//!
//! let a = Fixed::from(5);
//! let b = Fixed::from(2);
//! assert_eq!((a / b).to_f64(), 2.5);
//! assert_eq!(Fixed::MAX + Fixed::EPSILON, Fixed::MAX);
//! assert_eq!(-Fixed::MIN, Fixed::MAX);
//! ```

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::error::{Error, Result};

/// Number of fractional bits. Frozen: it defines the ULP and range of every value.
pub const FRAC_BITS: u32 = 32;

pub(crate) const ONE_RAW: i64 = 1 << FRAC_BITS;
pub(crate) const HALF_RAW: i64 = 1 << (FRAC_BITS - 1);
pub(crate) const FRAC_MASK: i64 = ONE_RAW - 1;
const ONE_F64: f64 = ONE_RAW as f64;

/// Lower bound of `f64` values that fit the raw `i64` after scaling (`-2^63`).
const RAW_MIN_F64: f64 = -9_223_372_036_854_775_808.0;

/// Deterministic signed Q32.32 fixed-point number.
///
/// Equality, ordering and hashing compare the raw integer exactly, so the
/// type is a valid map key and replay-log value.
///
/// # Example
///
/// ```rust
/// use fxp_core::Fixed;
///
/// let half = Fixed::from_f64(0.5);
/// assert_eq!(half, Fixed::HALF);
/// assert_eq!(half.to_bits(), 1 << 31);
/// assert_eq!(half * Fixed::from(3), Fixed::from_f64(1.5));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct Fixed {
    raw: i64,
}

/// Narrows a widened intermediate back to `i64`, saturating at the bounds.
#[inline]
pub(crate) const fn saturate_i128(value: i128) -> i64 {
    if value > i64::MAX as i128 {
        i64::MAX
    } else if value < i64::MIN as i128 {
        i64::MIN
    } else {
        value as i64
    }
}

/// Arithmetic right shift rounding to nearest, ties away from zero.
#[inline]
pub(crate) const fn round_shift(value: i128, shift: u32) -> i128 {
    let half = 1i128 << (shift - 1);
    if value >= 0 {
        (value + half) >> shift
    } else {
        -((-value + half) >> shift)
    }
}

impl Fixed {
    /// Zero (raw `0`).
    pub const ZERO: Self = Self::from_bits(0);

    /// One (raw `2^32`).
    pub const ONE: Self = Self::from_bits(ONE_RAW);

    /// Minus one.
    pub const NEG_ONE: Self = Self::from_bits(-ONE_RAW);

    /// Two.
    pub const TWO: Self = Self::from_bits(2 * ONE_RAW);

    /// One half.
    pub const HALF: Self = Self::from_bits(HALF_RAW);

    /// Smallest positive value, one unit in the last place (`2^-32`).
    pub const EPSILON: Self = Self::from_bits(1);

    /// Most negative representable value (`-2^31`).
    pub const MIN: Self = Self::from_bits(i64::MIN);

    /// Largest representable value (`2^31 - 2^-32`).
    pub const MAX: Self = Self::from_bits(i64::MAX);

    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = FRAC_BITS;

    /// Creates a value from its raw scaled representation.
    #[inline]
    pub const fn from_bits(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the raw scaled representation.
    #[inline]
    pub const fn to_bits(self) -> i64 {
        self.raw
    }

    /// Encodes the raw value as little-endian bytes.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.raw.to_le_bytes()
    }

    /// Decodes a raw value from little-endian bytes.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::from_bits(i64::from_le_bytes(bytes))
    }

    /// Creates a value from an integer, saturating when `|n| >= 2^31`.
    ///
    /// ```rust
    /// use fxp_core::Fixed;
    ///
    /// assert_eq!(Fixed::from_int(7).to_int(), 7);
    /// assert_eq!(Fixed::from_int(1 << 40), Fixed::MAX);
    /// ```
    #[inline]
    pub const fn from_int(n: i64) -> Self {
        if n > (i64::MAX >> FRAC_BITS) {
            Self::MAX
        } else if n < (i64::MIN >> FRAC_BITS) {
            Self::MIN
        } else {
            Self::from_bits(n << FRAC_BITS)
        }
    }

    /// Integer part, truncated toward zero.
    ///
    /// ```rust
    /// use fxp_core::Fixed;
    ///
    /// assert_eq!(Fixed::from_f64(2.75).to_int(), 2);
    /// assert_eq!(Fixed::from_f64(-2.75).to_int(), -2);
    /// ```
    #[inline]
    pub const fn to_int(self) -> i32 {
        (self.raw / ONE_RAW) as i32
    }

    /// Creates a value from an `f64`, rounding to the nearest ULP.
    ///
    /// Ties round away from zero. Out-of-range input (including infinities)
    /// saturates; NaN maps to [`Fixed::ZERO`]. Use [`Fixed::try_from_f64`]
    /// to have those cases reported instead.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        // Scaling by a power of two is exact, and `as` saturates (NaN -> 0).
        Self::from_bits((value * ONE_F64).round() as i64)
    }

    /// Creates a value from an `f32`. See [`Fixed::from_f64`].
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Strict conversion from `f64`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFinite`] for NaN or infinite input
    /// - [`Error::OutOfRange`] when the rounded value does not fit
    pub fn try_from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::NotFinite { value });
        }
        let scaled = (value * ONE_F64).round();
        if scaled < RAW_MIN_F64 || scaled >= -RAW_MIN_F64 {
            return Err(Error::OutOfRange { value });
        }
        Ok(Self::from_bits(scaled as i64))
    }

    /// Converts to `f64` (`raw / 2^32` in double precision).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / ONE_F64
    }

    /// Converts to `f32`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Returns `true` if the value is below zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Returns `true` if the value is above zero.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.raw > 0
    }

    /// Returns `true` if the value is exactly zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Returns `-1`, `0` or `1` according to the sign.
    #[inline]
    pub const fn sign(self) -> Self {
        if self.raw < 0 {
            Self::NEG_ONE
        } else if self.raw > 0 {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    /// Absolute value. `Fixed::MIN.abs()` saturates to [`Fixed::MAX`].
    #[inline]
    pub const fn abs(self) -> Self {
        Self::from_bits(self.raw.saturating_abs())
    }

    /// Multiplication with the widened, rounded product (same as `*`).
    #[inline]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        let product = self.raw as i128 * rhs.raw as i128;
        Self::from_bits(saturate_i128(round_shift(product, FRAC_BITS)))
    }

    /// Fused multiply-add: `self * a + b` with a single rounding.
    ///
    /// ```rust
    /// use fxp_core::Fixed;
    ///
    /// let x = Fixed::from(3).mul_add(Fixed::HALF, Fixed::ONE);
    /// assert_eq!(x, Fixed::from_f64(2.5));
    /// ```
    #[inline]
    pub const fn mul_add(self, a: Self, b: Self) -> Self {
        let wide = self.raw as i128 * a.raw as i128 + ((b.raw as i128) << FRAC_BITS);
        Self::from_bits(saturate_i128(round_shift(wide, FRAC_BITS)))
    }

    /// Division, truncating toward zero.
    ///
    /// The dividend is pre-scaled by `2^32` in 128 bits before the integer
    /// division, so no precision is lost. Quotients beyond the range
    /// saturate.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when `rhs` is zero.
    #[inline]
    pub const fn try_div(self, rhs: Self) -> Result<Self> {
        if rhs.raw == 0 {
            return Err(Error::DivisionByZero);
        }
        let dividend = (self.raw as i128) << FRAC_BITS;
        Ok(Self::from_bits(saturate_i128(dividend / rhs.raw as i128)))
    }

    /// Remainder `self - trunc(self / rhs) * rhs`, exact.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] when `rhs` is zero.
    #[inline]
    pub const fn try_rem(self, rhs: Self) -> Result<Self> {
        if rhs.raw == 0 {
            return Err(Error::DivisionByZero);
        }
        // MIN % -EPSILON is mathematically zero, which is what wrapping_rem yields.
        Ok(Self::from_bits(self.raw.wrapping_rem(rhs.raw)))
    }

    /// Reciprocal `1 / self`.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] for zero.
    #[inline]
    pub const fn recip(self) -> Result<Self> {
        Self::ONE.try_div(self)
    }

    /// Integer power by repeated squaring with saturating multiplies.
    ///
    /// Negative exponents take the reciprocal of the positive power.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] for a zero base with a negative exponent.
    pub fn powi(self, exp: i32) -> Result<Self> {
        let mut base = self;
        let mut remaining = exp.unsigned_abs();
        let mut acc = Self::ONE;
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = acc * base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base * base;
            }
        }
        if exp < 0 { acc.recip() } else { Ok(acc) }
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({self})")
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fixed {
                #[inline]
                fn from(n: $t) -> Self {
                    Self::from_bits(i64::from(n) << FRAC_BITS)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, u8, u16);

impl TryFrom<f64> for Fixed {
    type Error = Error;

    #[inline]
    fn try_from(value: f64) -> Result<Self> {
        Self::try_from_f64(value)
    }
}

impl TryFrom<f32> for Fixed {
    type Error = Error;

    #[inline]
    fn try_from(value: f32) -> Result<Self> {
        Self::try_from_f64(f64::from(value))
    }
}

impl From<Fixed> for f64 {
    #[inline]
    fn from(v: Fixed) -> f64 {
        v.to_f64()
    }
}

impl From<Fixed> for f32 {
    #[inline]
    fn from(v: Fixed) -> f32 {
        v.to_f32()
    }
}

// Fixed + Fixed
impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_bits(self.raw.saturating_add(rhs.raw))
    }
}

// Fixed - Fixed
impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_bits(self.raw.saturating_sub(rhs.raw))
    }
}

// Fixed * Fixed
impl Mul for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }
}

/// # Panics
///
/// Panics on a zero divisor, like integer division. Use
/// [`Fixed::try_div`] to get an [`Error`] instead.
impl Div for Fixed {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        match self.try_div(rhs) {
            Ok(q) => q,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics on a zero divisor. Use [`Fixed::try_rem`] to get an [`Error`].
impl Rem for Fixed {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        match self.try_rem(rhs) {
            Ok(r) => r,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Neg for Fixed {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_bits(self.raw.saturating_neg())
    }
}

// Fixed * i32 (exact integer scaling)
impl Mul<i32> for Fixed {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::from_bits(self.raw.saturating_mul(i64::from(rhs)))
    }
}

// i32 * Fixed
impl Mul<Fixed> for i32 {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: Fixed) -> Fixed {
        rhs * self
    }
}

/// # Panics
///
/// Panics when `rhs` is zero.
impl Div<i32> for Fixed {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self {
        self / Fixed::from(rhs)
    }
}

macro_rules! impl_assign_op {
    ($Trait:ident, $method:ident, $op:tt, $Rhs:ty) => {
        impl $Trait<$Rhs> for Fixed {
            #[inline]
            fn $method(&mut self, rhs: $Rhs) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +, Fixed);
impl_assign_op!(SubAssign, sub_assign, -, Fixed);
impl_assign_op!(MulAssign, mul_assign, *, Fixed);
impl_assign_op!(DivAssign, div_assign, /, Fixed);
impl_assign_op!(RemAssign, rem_assign, %, Fixed);
impl_assign_op!(MulAssign, mul_assign, *, i32);
impl_assign_op!(DivAssign, div_assign, /, i32);

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fixed> for Fixed {
    fn sum<I: Iterator<Item = &'a Fixed>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Fixed {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Fixed> for Fixed {
    fn product<I: Iterator<Item = &'a Fixed>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Fixed::ONE.to_bits(), 1 << 32);
        assert_eq!(Fixed::EPSILON.to_bits(), 1);
        assert_eq!(Fixed::HALF + Fixed::HALF, Fixed::ONE);
        assert_eq!(Fixed::NEG_ONE, -Fixed::ONE);
        assert_eq!(Fixed::default(), Fixed::ZERO);
    }

    #[test]
    fn test_from_int() {
        assert_eq!(Fixed::from(5).to_bits(), 5 << 32);
        assert_eq!(Fixed::from(-1i8), Fixed::NEG_ONE);
        assert_eq!(Fixed::from_int(i64::from(i32::MIN)), Fixed::MIN);
        assert_eq!(Fixed::from_int(-(1 << 31) - 1), Fixed::MIN);
        assert_eq!(Fixed::from_int(1 << 31), Fixed::MAX);
        assert_eq!(Fixed::from_int((1 << 31) - 1).to_int(), i32::MAX);
    }

    #[test]
    fn test_to_int_truncates() {
        assert_eq!(Fixed::from_f64(3.99).to_int(), 3);
        assert_eq!(Fixed::from_f64(-3.99).to_int(), -3);
        assert_eq!(Fixed::from_f64(-0.5).to_int(), 0);
        assert_eq!(Fixed::MIN.to_int(), i32::MIN);
        assert_eq!(Fixed::MAX.to_int(), i32::MAX);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Fixed::from_f64(1.5).to_bits(), 3 << 31);
        assert_eq!(Fixed::from_f64(-0.25).to_f64(), -0.25);
        assert_eq!(Fixed::from_f64(1e300), Fixed::MAX);
        assert_eq!(Fixed::from_f64(-1e300), Fixed::MIN);
        assert_eq!(Fixed::from_f64(f64::INFINITY), Fixed::MAX);
        assert_eq!(Fixed::from_f64(f64::NAN), Fixed::ZERO);
        // Half an ULP rounds away from zero.
        assert_eq!(Fixed::from_f64(0.5 / ONE_F64), Fixed::EPSILON);
        assert_eq!(Fixed::from_f64(-0.5 / ONE_F64), -Fixed::EPSILON);
    }

    #[test]
    fn test_try_from_f64() {
        assert_eq!(Fixed::try_from(2.0f64), Ok(Fixed::TWO));
        assert_eq!(Fixed::try_from(0.5f32), Ok(Fixed::HALF));
        assert!(matches!(
            Fixed::try_from_f64(f64::NAN),
            Err(Error::NotFinite { .. })
        ));
        assert!(matches!(
            Fixed::try_from_f64(3e9),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            Fixed::try_from_f64(2147483648.0),
            Err(Error::OutOfRange { .. })
        ));
        assert_eq!(Fixed::try_from_f64(-2147483648.0), Ok(Fixed::MIN));
    }

    #[test]
    fn test_add_sub_saturate() {
        assert_eq!(Fixed::from(2) + Fixed::from(3), Fixed::from(5));
        assert_eq!(Fixed::from(2) - Fixed::from(3), Fixed::NEG_ONE);
        assert_eq!(Fixed::MAX + Fixed::EPSILON, Fixed::MAX);
        assert_eq!(Fixed::MIN - Fixed::EPSILON, Fixed::MIN);
        assert_eq!(Fixed::MAX + Fixed::MAX, Fixed::MAX);
        assert_eq!(Fixed::MIN + Fixed::MIN, Fixed::MIN);
    }

    #[test]
    fn test_mul() {
        assert_eq!(Fixed::from(2) * Fixed::from(3), Fixed::from(6));
        assert_eq!(Fixed::from_f64(-1.5) * Fixed::from(2), Fixed::from(-3));
        assert_eq!(Fixed::HALF * Fixed::HALF, Fixed::from_f64(0.25));
        assert_eq!(Fixed::MAX * Fixed::TWO, Fixed::MAX);
        assert_eq!(Fixed::MAX * -Fixed::TWO, Fixed::MIN);
        assert_eq!(Fixed::MIN * Fixed::MIN, Fixed::MAX);
    }

    #[test]
    fn test_mul_rounds_ties_away_from_zero() {
        // EPSILON * HALF = 2^-33, exactly half an ULP.
        assert_eq!(Fixed::EPSILON * Fixed::HALF, Fixed::EPSILON);
        assert_eq!(-Fixed::EPSILON * Fixed::HALF, -Fixed::EPSILON);
        // Just below half an ULP rounds to zero.
        let below = Fixed::from_bits(HALF_RAW - 1);
        assert_eq!(Fixed::EPSILON * below, Fixed::ZERO);
    }

    #[test]
    fn test_div() {
        let q = Fixed::from(5) / Fixed::from(2);
        assert_eq!(q.to_f64(), 2.5);
        assert_eq!(Fixed::ONE / Fixed::from(3), Fixed::from_bits(1431655765));
        assert_eq!(-Fixed::ONE / Fixed::from(3), Fixed::from_bits(-1431655765));
        assert_eq!(Fixed::MIN / -Fixed::EPSILON, Fixed::MAX);
        assert_eq!(Fixed::MAX / Fixed::EPSILON, Fixed::MAX);
        assert_eq!(Fixed::from(7) / 2, Fixed::from_f64(3.5));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(Fixed::ONE.try_div(Fixed::ZERO), Err(Error::DivisionByZero));
        assert_eq!(Fixed::ONE.try_rem(Fixed::ZERO), Err(Error::DivisionByZero));
        assert_eq!(Fixed::ZERO.recip(), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = Fixed::ONE / Fixed::ZERO;
    }

    #[test]
    fn test_rem() {
        assert_eq!(Fixed::from(7) % Fixed::from(3), Fixed::ONE);
        assert_eq!(Fixed::from(-7) % Fixed::from(3), Fixed::NEG_ONE);
        assert_eq!(Fixed::from_f64(5.5) % Fixed::from(2), Fixed::from_f64(1.5));
        assert_eq!(Fixed::MIN % -Fixed::EPSILON, Fixed::ZERO);
    }

    #[test]
    fn test_neg_and_abs() {
        assert_eq!(-Fixed::MIN, Fixed::MAX);
        assert_eq!(-Fixed::MAX, Fixed::from_bits(i64::MIN + 1));
        assert_eq!(Fixed::MIN.abs(), Fixed::MAX);
        assert_eq!(Fixed::from(-3).abs(), Fixed::from(3));
    }

    #[test]
    fn test_sign() {
        assert_eq!(Fixed::from(-9).sign(), Fixed::NEG_ONE);
        assert_eq!(Fixed::ZERO.sign(), Fixed::ZERO);
        assert_eq!(Fixed::EPSILON.sign(), Fixed::ONE);
        assert!(Fixed::MIN.is_negative());
        assert!(Fixed::EPSILON.is_positive());
        assert!(Fixed::ZERO.is_zero());
    }

    #[test]
    fn test_mul_add_single_rounding() {
        let x = Fixed::from(3).mul_add(Fixed::from(4), Fixed::from(5));
        assert_eq!(x, Fixed::from(17));
        // EPSILON * HALF alone rounds up; with -EPSILON added the exact
        // result is -2^-33, which rounds away from zero to -EPSILON.
        let y = Fixed::EPSILON.mul_add(Fixed::HALF, -Fixed::EPSILON);
        assert_eq!(y, -Fixed::EPSILON);
    }

    #[test]
    fn test_powi() {
        assert_eq!(Fixed::from(2).powi(10), Ok(Fixed::from(1024)));
        assert_eq!(Fixed::from(2).powi(-2), Ok(Fixed::from_f64(0.25)));
        assert_eq!(Fixed::from(7).powi(0), Ok(Fixed::ONE));
        assert_eq!(Fixed::from(2).powi(40), Ok(Fixed::MAX));
        assert_eq!(Fixed::ZERO.powi(-1), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_ordering() {
        assert!(Fixed::MIN < Fixed::ZERO);
        assert!(Fixed::EPSILON > Fixed::ZERO);
        assert_eq!(Fixed::from(3).max(Fixed::from(4)), Fixed::from(4));
        assert_eq!(Fixed::from(3).min(Fixed::from(4)), Fixed::from(3));
    }

    #[test]
    fn test_sum_product() {
        let values = [Fixed::from(1), Fixed::from(2), Fixed::from(3)];
        assert_eq!(values.iter().sum::<Fixed>(), Fixed::from(6));
        assert_eq!(values.iter().product::<Fixed>(), Fixed::from(6));
        assert_eq!([Fixed::MAX, Fixed::ONE].into_iter().sum::<Fixed>(), Fixed::MAX);
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Fixed::from(10);
        v += Fixed::from(2);
        v -= Fixed::ONE;
        v *= Fixed::TWO;
        v /= Fixed::from(11);
        assert_eq!(v, Fixed::TWO);
        v *= 3;
        v /= 2;
        assert_eq!(v, Fixed::from(3));
        v %= Fixed::TWO;
        assert_eq!(v, Fixed::ONE);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let v = Fixed::from_f64(-3.14159);
        assert_eq!(Fixed::from_le_bytes(v.to_le_bytes()), v);
    }

    #[test]
    fn test_debug_shows_decimal() {
        assert_eq!(format!("{:?}", Fixed::from_f64(2.5)), "Fixed(2.5)");
    }
}
