//! 3D fixed-point vector.
//!
//! [`FVec3`] is the workhorse for positions and velocities in deterministic
//! simulations. All operations forward to [`Fixed`] per component.
//!
//! # Usage
//!
//! ```rust
//! use fxp_core::Fixed;
//! use fxp_math::FVec3;
//!
//! let pos = FVec3::from_ints(1, 2, 3);
//! let vel = FVec3::new(Fixed::HALF, Fixed::ZERO, Fixed::NEG_ONE);
//! let next = pos + vel * Fixed::TWO;
//! assert_eq!(next, FVec3::from_ints(2, 2, 1));
//! ```

use fxp_core::Fixed;

use crate::{FVec2, FVec4};

/// A 3D vector of [`Fixed`] components.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct FVec3 {
    /// X component
    pub x: Fixed,
    /// Y component
    pub y: Fixed,
    /// Z component
    pub z: Fixed,
}

impl_vector_fns!(FVec3, 3, (x, y, z), (0, 1, 2));
impl_vector_operators!(FVec3, (x, y, z), (0, 1, 2));

impl FVec3 {
    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(Fixed::ONE, Fixed::ZERO, Fixed::ZERO);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(Fixed::ZERO, Fixed::ONE, Fixed::ZERO);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::ONE);

    /// Negative unit X vector.
    pub const NEG_X: Self = Self::new(Fixed::NEG_ONE, Fixed::ZERO, Fixed::ZERO);

    /// Negative unit Y vector.
    pub const NEG_Y: Self = Self::new(Fixed::ZERO, Fixed::NEG_ONE, Fixed::ZERO);

    /// Negative unit Z vector.
    pub const NEG_Z: Self = Self::new(Fixed::ZERO, Fixed::ZERO, Fixed::NEG_ONE);

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Extends to 4D with the given `w`.
    #[inline]
    pub const fn extend(self, w: Fixed) -> FVec4 {
        FVec4::new(self.x, self.y, self.z, w)
    }

    /// Drops the `z` component.
    #[inline]
    pub const fn truncate(self) -> FVec2 {
        FVec2::new(self.x, self.y)
    }
}

impl From<(Fixed, Fixed, Fixed)> for FVec3 {
    #[inline]
    fn from((x, y, z): (Fixed, Fixed, Fixed)) -> Self {
        Self::new(x, y, z)
    }
}
