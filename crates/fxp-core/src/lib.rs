//! # fxp-core
//!
//! Deterministic Q32.32 fixed-point scalar for simulation and game logic.
//!
//! This crate provides the numeric engine used by the `fxp` vector types:
//!
//! - [`Fixed`] - signed 64-bit value with 32 fractional bits
//! - Saturating `+ - * / %` with a widened, rounded multiply and a
//!   pre-scaled, truncating divide
//! - Rounding ([`Fixed::floor`], [`Fixed::ceil`], [`Fixed::round`],
//!   [`Fixed::round_even`], [`Fixed::trunc`])
//! - [`Fixed::sqrt`] / [`Fixed::inv_sqrt`] via a fixed-iteration integer root
//! - Interpolation ([`lerp`], [`smoothstep`], [`smooth_damp`], ...)
//! - Exact decimal [`Display`](std::fmt::Display) / [`FromStr`](std::str::FromStr)
//!   with optional [`NumberFormat`] separators
//!
//! ## Determinism
//!
//! No operation touches hardware floating point except the explicit
//! `f32`/`f64` conversions. The same sequence of operations yields the same
//! raw bits on every machine, which is what lockstep networking and replay
//! logs need.
//!
//! ## Errors
//!
//! Overflow saturates. Domain errors (division by zero, square root of a
//! negative value) and malformed literals are reported through [`Error`].
//!
//! ```rust
//! use fxp_core::prelude::*;
//!
//! let a: Fixed = "1.5".parse()?;
//! let b = Fixed::from(4);
//! assert_eq!(a * b, Fixed::from(6));
//! assert_eq!(b.sqrt()?, Fixed::TWO);
//! assert!(Fixed::ONE.try_div(Fixed::ZERO).is_err());
//! # Ok::<(), fxp_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! fxp-core (this crate)
//!    ^
//!    |
//!    +-- fxp-math (FVec2 / FVec3 / FVec4, swizzles)
//!    +-- fxp-cli  (fxp command line tool)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`Fixed`] as its raw `i64`, plus [`NumberFormat`]
//!   and [`Rounding`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
mod fixed;
mod format;
mod interp;
mod round;
mod sqrt;

pub use error::{Error, Result};
pub use fixed::{FRAC_BITS, Fixed};
pub use format::{DisplayFixed, NumberFormat};
pub use interp::*;
pub use round::Rounding;

/// Prelude module for convenient imports.
///
/// ```
/// use fxp_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fixed::Fixed;
    pub use crate::format::NumberFormat;
    pub use crate::interp::{
        clamp, inverse_lerp, lerp, remap, saturate, smooth_damp, smoothstep, step,
    };
    pub use crate::round::Rounding;
}
