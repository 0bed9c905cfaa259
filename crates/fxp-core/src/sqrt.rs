//! Square root and inverse square root.
//!
//! Both use a digit-by-digit binary square root on `u128` that always runs
//! the same 64 iterations regardless of input, so timing and result are
//! independent of the platform and of any starting guess.

use tracing::trace;

use crate::error::{Error, Result};
use crate::fixed::Fixed;

/// `2^80`: numerator of the reciprocal root (see [`Fixed::inv_sqrt`]).
const INV_SQRT_NUMERATOR: u128 = 1 << 80;

/// Integer square root of `value`, rounded to nearest.
///
/// Restoring digit-by-digit method: one result bit per iteration, 64
/// iterations for the 128-bit operand.
pub(crate) const fn isqrt_u128(value: u128) -> u128 {
    let mut rem = value;
    let mut root: u128 = 0;
    let mut bit: u128 = 1 << 126;
    let mut i = 0;
    while i < 64 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
        i += 1;
    }
    // rem = value - root^2; round up when value > (root + 1/2)^2.
    if rem > root { root + 1 } else { root }
}

impl Fixed {
    /// Square root, rounded to the nearest ULP.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeOperand`] for negative input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fxp_core::Fixed;
    ///
    /// assert_eq!(Fixed::from(9).sqrt().unwrap(), Fixed::from(3));
    /// assert!(Fixed::from(-1).sqrt().is_err());
    /// ```
    pub fn sqrt(self) -> Result<Self> {
        if self.is_negative() {
            trace!(value = %self, "sqrt of negative value");
            return Err(Error::negative_operand("sqrt", self));
        }
        let widened = (self.to_bits() as u128) << crate::FRAC_BITS;
        Ok(Self::from_bits(isqrt_u128(widened) as i64))
    }

    /// Reciprocal square root `1 / sqrt(self)`.
    ///
    /// Computed as `2^80 / isqrt(raw << 64)` so the root keeps 64 bits of
    /// precision before the division, instead of dividing by an already
    /// rounded [`Fixed::sqrt`].
    ///
    /// # Errors
    ///
    /// - [`Error::NegativeOperand`] for negative input
    /// - [`Error::DivisionByZero`] for zero
    ///
    /// # Example
    ///
    /// ```rust
    /// use fxp_core::Fixed;
    ///
    /// assert_eq!(Fixed::from(4).inv_sqrt().unwrap(), Fixed::HALF);
    /// ```
    pub fn inv_sqrt(self) -> Result<Self> {
        if self.is_negative() {
            trace!(value = %self, "inv_sqrt of negative value");
            return Err(Error::negative_operand("inv_sqrt", self));
        }
        if self.is_zero() {
            trace!("inv_sqrt of zero");
            return Err(Error::DivisionByZero);
        }
        let root = isqrt_u128((self.to_bits() as u128) << 64);
        let quotient = (INV_SQRT_NUMERATOR + root / 2) / root;
        // raw >= 1 gives root >= 2^32, so quotient <= 2^48.
        Ok(Self::from_bits(quotient as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_isqrt_exact_squares() {
        assert_eq!(isqrt_u128(0), 0);
        assert_eq!(isqrt_u128(1), 1);
        assert_eq!(isqrt_u128(144), 12);
        assert_eq!(isqrt_u128(1 << 100), 1 << 50);
        assert_eq!(isqrt_u128(u64::MAX as u128 * u64::MAX as u128), u64::MAX as u128);
    }

    #[test]
    fn test_isqrt_rounds_to_nearest() {
        // sqrt(2) = 1.414 -> 1, sqrt(3) = 1.732 -> 2
        assert_eq!(isqrt_u128(2), 1);
        assert_eq!(isqrt_u128(3), 2);
        // 12^2 + 12 = 156 lies below (12.5)^2 = 156.25
        assert_eq!(isqrt_u128(156), 12);
        assert_eq!(isqrt_u128(157), 13);
    }

    #[test]
    fn test_sqrt_values() {
        assert_eq!(Fixed::ZERO.sqrt(), Ok(Fixed::ZERO));
        assert_eq!(Fixed::ONE.sqrt(), Ok(Fixed::ONE));
        assert_eq!(Fixed::from(16).sqrt(), Ok(Fixed::from(4)));
        assert_eq!(Fixed::from_f64(0.25).sqrt(), Ok(Fixed::HALF));
        let root2 = Fixed::TWO.sqrt().unwrap();
        assert_abs_diff_eq!(root2.to_f64(), std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn test_sqrt_extremes() {
        let max_root = Fixed::MAX.sqrt().unwrap();
        // sqrt((2^63 - 1) / 2^32)
        assert_abs_diff_eq!(max_root.to_f64(), 46340.950011841, epsilon = 1e-9);
        let tiny = Fixed::EPSILON.sqrt().unwrap();
        // sqrt(2^-32) = 2^-16
        assert_eq!(tiny, Fixed::from_bits(1 << 16));
    }

    #[test]
    fn test_sqrt_negative() {
        let err = Fixed::NEG_ONE.sqrt().unwrap_err();
        assert!(matches!(err, Error::NegativeOperand { op: "sqrt", .. }));
    }

    #[test]
    fn test_inv_sqrt() {
        assert_eq!(Fixed::ONE.inv_sqrt(), Ok(Fixed::ONE));
        assert_eq!(Fixed::from_f64(0.25).inv_sqrt(), Ok(Fixed::TWO));
        let v = Fixed::from(2).inv_sqrt().unwrap();
        assert_abs_diff_eq!(v.to_f64(), 1.0 / std::f64::consts::SQRT_2, epsilon = 1e-9);
        // 1 / sqrt(2^-32) = 2^16
        assert_eq!(Fixed::EPSILON.inv_sqrt(), Ok(Fixed::from(65536)));
    }

    #[test]
    fn test_inv_sqrt_domain() {
        assert_eq!(Fixed::ZERO.inv_sqrt(), Err(Error::DivisionByZero));
        assert!(matches!(
            Fixed::from(-4).inv_sqrt(),
            Err(Error::NegativeOperand { op: "inv_sqrt", .. })
        ));
    }
}
