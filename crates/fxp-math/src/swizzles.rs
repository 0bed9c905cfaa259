//! GLSL-style swizzles.
//!
//! Instead of one accessor per permutation (`v.zyx()`, `v.xxy()`, ...), a
//! swizzle is written as a tuple of components and converted to the vector
//! of matching arity:
//!
//! ```rust
//! use fxp_math::{FVec3, swizzle};
//!
//! let v = FVec3::from_ints(1, 2, 3);
//! assert_eq!(swizzle!(v => z, y, x), FVec3::from_ints(3, 2, 1));
//! assert_eq!(swizzle!(v => x, x), fxp_math::FVec2::from_ints(1, 1));
//! ```

use fxp_core::Fixed;

use crate::{FVec2, FVec3, FVec4};

/// Converts a tuple of 2 to 4 scalars into the vector of the same arity.
///
/// This is the target of the [`swizzle!`](crate::swizzle) macro.
pub trait SwizzleToVector {
    /// Vector type with as many components as the tuple.
    type Output;

    /// Builds the vector from the tuple elements in order.
    fn swizzle_to_vector(self) -> Self::Output;
}

impl SwizzleToVector for (Fixed, Fixed) {
    type Output = FVec2;

    #[inline]
    fn swizzle_to_vector(self) -> FVec2 {
        FVec2::new(self.0, self.1)
    }
}

impl SwizzleToVector for (Fixed, Fixed, Fixed) {
    type Output = FVec3;

    #[inline]
    fn swizzle_to_vector(self) -> FVec3 {
        FVec3::new(self.0, self.1, self.2)
    }
}

impl SwizzleToVector for (Fixed, Fixed, Fixed, Fixed) {
    type Output = FVec4;

    #[inline]
    fn swizzle_to_vector(self) -> FVec4 {
        FVec4::new(self.0, self.1, self.2, self.3)
    }
}

/// Builds a new vector from any selection of 2 to 4 named components.
///
/// Components may repeat and may come from a vector of any arity, so
/// `swizzle!(v2 => x, y, y, x)` yields an [`FVec4`].
///
/// ```rust
/// use fxp_math::{FVec2, FVec4, swizzle};
///
/// let v = FVec2::from_ints(5, 7);
/// assert_eq!(swizzle!(v => y, x), FVec2::from_ints(7, 5));
/// assert_eq!(swizzle!(v => x, y, y, x), FVec4::from_ints(5, 7, 7, 5));
/// ```
#[macro_export]
macro_rules! swizzle {
    ($vec:expr => $($field:ident),+ $(,)?) => {{
        let v = $vec;
        $crate::SwizzleToVector::swizzle_to_vector(($(v.$field),+))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swizzle_reorders() {
        let v = FVec4::from_ints(1, 2, 3, 4);
        assert_eq!(swizzle!(v => w, z, y, x), FVec4::from_ints(4, 3, 2, 1));
        assert_eq!(swizzle!(v => z, w), FVec2::from_ints(3, 4));
        assert_eq!(swizzle!(v => y, y, y), FVec3::splat(Fixed::TWO));
    }

    #[test]
    fn test_swizzle_evaluates_once() {
        let mut calls = 0;
        let mut make = || {
            calls += 1;
            FVec3::from_ints(1, 2, 3)
        };
        let s = swizzle!(make() => z, x);
        assert_eq!(s, FVec2::from_ints(3, 1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_tuple_conversion() {
        let t = (Fixed::ONE, Fixed::ZERO);
        assert_eq!(t.swizzle_to_vector(), FVec2::X);
    }
}
