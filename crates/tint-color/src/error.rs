//! Error types for tint-color operations.
//!
//! Almost everything in this crate is total: channel normalization always
//! succeeds (any number is representable after clamping), division by zero
//! is defined to produce 0, and comparing a color against a non-color is
//! defined to be `false`. The two failure modes that remain are:
//!
//! - [`Error::InvalidOperand`] - an arithmetic operand arriving from the
//!   host was neither a color nor a number
//! - [`Error::NegativeDelta`] - a per-channel convenience mutator
//!   (`add_r`, `div_b`, ...) was given a negative delta
//!
//! # Usage
//!
//! ```rust
//! use tint_color::{Error, Result, Rgba};
//!
//! fn darken(c: &mut Rgba, amount: f64) -> Result<()> {
//!     c.sub_r(amount)?.sub_g(amount)?.sub_b(amount)?;
//!     Ok(())
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// One of the four color channels.
///
/// Used in error reporting to name the channel a mutator was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
    /// Alpha channel.
    Alpha,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
            Channel::Alpha => write!(f, "alpha"),
        }
    }
}

/// Errors that can occur during color arithmetic.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// Note what is deliberately *not* an error:
///
/// - Division by zero in channel arithmetic: the channel result is
///   defined to be 0.
/// - Equality across mismatched types: defined to be `false`.
/// - Out-of-range numeric input: every number is representable after
///   clamping, so no out-of-range class exists.
#[derive(Debug, Error)]
pub enum Error {
    /// An arithmetic operand was neither a color nor a number.
    ///
    /// Raised at the host-hook boundary when a dynamically typed value
    /// reaches `+ - * /`. The message names the offending value's runtime
    /// kind and its rendered value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_color::Error;
    ///
    /// let err = Error::invalid_operand("boolean", "true");
    /// assert!(err.to_string().contains("boolean"));
    /// assert!(err.to_string().contains("true"));
    /// ```
    #[error("invalid operand for color arithmetic: {kind} value `{value}` (expected color or number)")]
    InvalidOperand {
        /// Runtime kind of the offending operand ("boolean", "string", "nil", ...).
        kind: &'static str,
        /// Rendered value of the offending operand.
        value: String,
    },

    /// A per-channel convenience mutator was given a negative delta.
    ///
    /// `add_*`, `sub_*`, `mul_*` and `div_*` are defined for non-negative
    /// magnitudes only. A negative delta is never silently coerced.
    #[error("negative delta {delta} for {channel} channel (channel deltas must be non-negative)")]
    NegativeDelta {
        /// Channel the mutator was applied to.
        channel: Channel,
        /// The rejected delta.
        delta: f64,
    },
}

impl Error {
    /// Creates an [`Error::InvalidOperand`] error.
    #[inline]
    pub fn invalid_operand(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidOperand {
            kind,
            value: value.into(),
        }
    }

    /// Creates an [`Error::NegativeDelta`] error.
    #[inline]
    pub fn negative_delta(channel: Channel, delta: f64) -> Self {
        Self::NegativeDelta { channel, delta }
    }

    /// Returns `true` if this is an invalid-operand error.
    #[inline]
    pub fn is_invalid_operand(&self) -> bool {
        matches!(self, Self::InvalidOperand { .. })
    }

    /// Returns `true` if this is a negative-delta error.
    #[inline]
    pub fn is_negative_delta(&self) -> bool {
        matches!(self, Self::NegativeDelta { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operand_message() {
        let err = Error::invalid_operand("string", "oops");
        let msg = err.to_string();
        assert!(msg.contains("string"));
        assert!(msg.contains("oops"));
        assert!(err.is_invalid_operand());
    }

    #[test]
    fn test_negative_delta_message() {
        let err = Error::negative_delta(Channel::Green, -4.5);
        let msg = err.to_string();
        assert!(msg.contains("green"));
        assert!(msg.contains("-4.5"));
        assert!(err.is_negative_delta());
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Red.to_string(), "red");
        assert_eq!(Channel::Alpha.to_string(), "alpha");
    }
}
