//! 4D fixed-point vector.

use fxp_core::Fixed;

use crate::FVec3;

/// A 4D vector of [`Fixed`] components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct FVec4 {
    /// X component
    pub x: Fixed,
    /// Y component
    pub y: Fixed,
    /// Z component
    pub z: Fixed,
    /// W component
    pub w: Fixed,
}

impl_vector_fns!(FVec4, 4, (x, y, z, w), (0, 1, 2, 3));
impl_vector_operators!(FVec4, (x, y, z, w), (0, 1, 2, 3));

impl FVec4 {
    /// Unit X vector (1, 0, 0, 0).
    pub const X: Self = Self::new(Fixed::ONE, Fixed::ZERO, Fixed::ZERO, Fixed::ZERO);

    /// Unit Y vector (0, 1, 0, 0).
    pub const Y: Self = Self::new(Fixed::ZERO, Fixed::ONE, Fixed::ZERO, Fixed::ZERO);

    /// Unit Z vector (0, 0, 1, 0).
    pub const Z: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::ONE, Fixed::ZERO);

    /// Unit W vector (0, 0, 0, 1).
    pub const W: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::ZERO, Fixed::ONE);

    /// Drops the `w` component.
    #[inline]
    pub const fn truncate(self) -> FVec3 {
        FVec3::new(self.x, self.y, self.z)
    }
}

impl From<(Fixed, Fixed, Fixed, Fixed)> for FVec4 {
    #[inline]
    fn from((x, y, z, w): (Fixed, Fixed, Fixed, Fixed)) -> Self {
        Self::new(x, y, z, w)
    }
}
