//! 2D fixed-point vector.

use fxp_core::Fixed;

use crate::FVec3;

/// A 2D vector of [`Fixed`] components.
///
/// # Example
///
/// ```rust
/// use fxp_core::Fixed;
/// use fxp_math::FVec2;
///
/// let v = FVec2::from_ints(3, 4);
/// assert_eq!(v.length(), Fixed::from(5));
/// assert_eq!(v[0], Fixed::from(3));
/// assert_eq!(v.to_string(), "(3, 4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct FVec2 {
    /// X component
    pub x: Fixed,
    /// Y component
    pub y: Fixed,
}

impl_vector_fns!(FVec2, 2, (x, y), (0, 1));
impl_vector_operators!(FVec2, (x, y), (0, 1));

impl FVec2 {
    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(Fixed::ONE, Fixed::ZERO);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(Fixed::ZERO, Fixed::ONE);

    /// Negative unit X vector (-1, 0).
    pub const NEG_X: Self = Self::new(Fixed::NEG_ONE, Fixed::ZERO);

    /// Negative unit Y vector (0, -1).
    pub const NEG_Y: Self = Self::new(Fixed::ZERO, Fixed::NEG_ONE);

    /// Counter-clockwise perpendicular `(-y, x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// 2D cross product `self.x * other.y - self.y * other.x`.
    #[inline]
    pub fn perp_dot(self, other: Self) -> Fixed {
        self.x * other.y - self.y * other.x
    }

    /// Extends to 3D with the given `z`.
    #[inline]
    pub const fn extend(self, z: Fixed) -> FVec3 {
        FVec3::new(self.x, self.y, z)
    }
}

impl From<(Fixed, Fixed)> for FVec2 {
    #[inline]
    fn from((x, y): (Fixed, Fixed)) -> Self {
        Self::new(x, y)
    }
}
