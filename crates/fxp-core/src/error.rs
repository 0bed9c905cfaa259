//! Error types for fixed-point operations.
//!
//! Every domain or format failure in the scalar engine is reported through
//! the single [`Error`] enum. Range problems (overflow of the raw integer)
//! never show up here: they saturate at [`Fixed::MIN`](crate::Fixed::MIN) /
//! [`Fixed::MAX`](crate::Fixed::MAX) instead.
//!
//! # Categories
//!
//! - **Domain errors**: [`DivisionByZero`](Error::DivisionByZero),
//!   [`NegativeOperand`](Error::NegativeOperand)
//! - **Conversion errors**: [`NotFinite`](Error::NotFinite),
//!   [`OutOfRange`](Error::OutOfRange)
//! - **Format errors**: [`Parse`](Error::Parse)
//!
//! # Usage
//!
//! ```rust
//! use fxp_core::{Error, Fixed, Result};
//!
//! fn ratio(a: i32, b: i32) -> Result<Fixed> {
//!     Fixed::from(a).try_div(Fixed::from(b))
//! }
//!
//! assert!(matches!(ratio(1, 0), Err(Error::DivisionByZero)));
//! assert_eq!(ratio(5, 2).unwrap().to_f64(), 2.5);
//! ```

use thiserror::Error;

use crate::Fixed;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the fixed-point scalar engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Divisor (or inverse square root argument) was zero.
    ///
    /// The representation has no bit pattern for infinity or NaN, so this
    /// is always reported rather than substituted.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation defined only for non-negative input got a negative one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fxp_core::{Error, Fixed};
    ///
    /// let err = Fixed::from(-4).sqrt().unwrap_err();
    /// assert_eq!(err.to_string(), "sqrt of negative value -4");
    /// ```
    #[error("{op} of negative value {value}")]
    NegativeOperand {
        /// Operation name (`sqrt`, `inv_sqrt`)
        op: &'static str,
        /// Offending operand
        value: Fixed,
    },

    /// Floating-point input was NaN or infinite.
    #[error("cannot convert non-finite value {value} to fixed-point")]
    NotFinite {
        /// Rejected input
        value: f64,
    },

    /// Finite floating-point input lies outside the representable range.
    #[error("value {value} is outside the fixed-point range")]
    OutOfRange {
        /// Rejected input
        value: f64,
    },

    /// Malformed decimal literal.
    #[error("invalid fixed-point literal {input:?}: {reason}")]
    Parse {
        /// The text that failed to parse
        input: String,
        /// What was wrong with it
        reason: &'static str,
    },
}

impl Error {
    /// Creates an [`Error::NegativeOperand`] error.
    #[inline]
    pub fn negative_operand(op: &'static str, value: Fixed) -> Self {
        Self::NegativeOperand { op, value }
    }

    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            reason,
        }
    }

    /// Returns `true` for domain errors (division by zero, negative operand).
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::NegativeOperand { .. })
    }

    /// Returns `true` if this is a float conversion error.
    #[inline]
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, Self::NotFinite { .. } | Self::OutOfRange { .. })
    }

    /// Returns `true` if this is a parse error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
