//! # fxp-math
//!
//! Fixed-point vectors built on [`fxp_core::Fixed`].
//!
//! - [`FVec2`], [`FVec3`], [`FVec4`] - component-wise arithmetic, dot and
//!   cross products, length, normalisation, rounding, interpolation and
//!   damped following
//! - [`swizzle!`] / [`SwizzleToVector`] - GLSL-style component selection
//!
//! # Design
//!
//! The vectors never re-implement numeric semantics. Every operation is the
//! scalar operation applied per component, so saturation, rounding and
//! determinism are exactly those of `fxp-core`. Division by a vector with a
//! zero component panics like scalar division; [`FVec3::try_normalize`]
//! and friends report [`fxp_core::Error`] instead.
//!
//! # Usage
//!
//! ```rust
//! use fxp_core::Fixed;
//! use fxp_math::{FVec3, swizzle};
//!
//! let a = FVec3::from_ints(1, 0, 0);
//! let b = FVec3::from_ints(0, 1, 0);
//! assert_eq!(a.cross(b), FVec3::Z);
//!
//! let mid = a.lerp(b, Fixed::HALF);
//! assert_eq!(swizzle!(mid => y, x), fxp_math::FVec2::splat(Fixed::HALF));
//! ```
//!
//! # Dependencies
//!
//! - [`fxp-core`](fxp_core) - Scalar engine
//!
//! # Feature Flags
//!
//! - `serde` - Serialize vectors as structs of raw `i64` components

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[macro_use]
mod macros;
mod swizzles;
mod vec2;
mod vec3;
mod vec4;

pub use swizzles::SwizzleToVector;
pub use vec2::FVec2;
pub use vec3::FVec3;
pub use vec4::FVec4;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::swizzle;
    pub use crate::{FVec2, FVec3, FVec4, SwizzleToVector};
    pub use fxp_core::prelude::*;
}
