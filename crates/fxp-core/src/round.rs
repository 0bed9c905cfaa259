//! Rounding to integral values.
//!
//! Each rule works on the low [`FRAC_BITS`](crate::FRAC_BITS) bits of the
//! raw value. Results that would exceed the range (only possible when
//! rounding up past the largest integer) saturate at [`Fixed::MAX`].

use crate::fixed::{FRAC_MASK, Fixed, HALF_RAW, ONE_RAW, saturate_i128};

/// Rounding rule for [`Fixed::round_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rounding {
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// To nearest, ties away from zero.
    #[default]
    Nearest,
    /// To nearest, ties to even (banker's rounding).
    NearestEven,
    /// Toward zero.
    Trunc,
}

impl Fixed {
    /// Largest integer less than or equal to `self`.
    ///
    /// ```rust
    /// use fxp_core::Fixed;
    ///
    /// assert_eq!(Fixed::from_f64(-1.25).floor(), Fixed::from(-2));
    /// ```
    #[inline]
    pub const fn floor(self) -> Self {
        Self::from_bits(self.to_bits() & !FRAC_MASK)
    }

    /// Smallest integer greater than or equal to `self`.
    #[inline]
    pub const fn ceil(self) -> Self {
        let floor = self.to_bits() & !FRAC_MASK;
        if floor == self.to_bits() {
            self
        } else {
            Self::from_bits(floor.saturating_add(ONE_RAW))
        }
    }

    /// Nearest integer, ties away from zero (`2.5 -> 3`, `-2.5 -> -3`).
    #[inline]
    pub const fn round(self) -> Self {
        let magnitude = (self.to_bits() as i128).abs();
        let rounded = (magnitude + HALF_RAW as i128) & !(FRAC_MASK as i128);
        let signed = if self.to_bits() < 0 { -rounded } else { rounded };
        Self::from_bits(saturate_i128(signed))
    }

    /// Nearest integer, ties to the even neighbour (`2.5 -> 2`, `3.5 -> 4`).
    ///
    /// ```rust
    /// use fxp_core::Fixed;
    ///
    /// assert_eq!(Fixed::from_f64(2.5).round_even(), Fixed::from(2));
    /// assert_eq!(Fixed::from_f64(-2.5).round_even(), Fixed::from(-2));
    /// assert_eq!(Fixed::from_f64(3.5).round_even(), Fixed::from(4));
    /// ```
    #[inline]
    pub const fn round_even(self) -> Self {
        let floor = self.to_bits() & !FRAC_MASK;
        let frac = self.to_bits() & FRAC_MASK;
        let floor_is_odd = (floor >> crate::FRAC_BITS) & 1 == 1;
        if frac > HALF_RAW || (frac == HALF_RAW && floor_is_odd) {
            Self::from_bits(floor.saturating_add(ONE_RAW))
        } else {
            Self::from_bits(floor)
        }
    }

    /// Integer part, rounding toward zero.
    #[inline]
    pub const fn trunc(self) -> Self {
        Self::from_bits((self.to_bits() / ONE_RAW) * ONE_RAW)
    }

    /// Fractional part `self - self.floor()`, always in `[0, 1)`.
    #[inline]
    pub const fn fract(self) -> Self {
        Self::from_bits(self.to_bits() & FRAC_MASK)
    }

    /// Rounds according to `mode`.
    #[inline]
    pub const fn round_with(self, mode: Rounding) -> Self {
        match mode {
            Rounding::Floor => self.floor(),
            Rounding::Ceil => self.ceil(),
            Rounding::Nearest => self.round(),
            Rounding::NearestEven => self.round_even(),
            Rounding::Trunc => self.trunc(),
        }
    }
}
