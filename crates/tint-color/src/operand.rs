//! Operand types for heterogeneous color arithmetic.
//!
//! The arithmetic operators accept two kinds of operand: a color, or a bare
//! number treated as a color with all four channels equal to it. [`Operand`]
//! is the closed sum over those two kinds; dispatch over it is exhaustive at
//! compile time.
//!
//! Values arriving from the host's operator hooks are not statically typed,
//! so a second, wider enum exists for that boundary: [`HostValue`] covers
//! everything a host can hand an operator hook (color, number, boolean,
//! text, nil). Converting a [`HostValue`] into an [`Operand`] is where the
//! only runtime operand failure lives; anything that is neither a color nor
//! a number is rejected with an error naming its kind and value.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::{Operand, Rgba};
//!
//! let color: Operand = Rgba::opaque(10, 20, 30).into();
//! let scalar: Operand = 5.0.into();
//!
//! assert_eq!(color.channels(), [10.0, 20.0, 30.0, 255.0]);
//! assert_eq!(scalar.channels(), [5.0, 5.0, 5.0, 5.0]);
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};

/// An operand of color arithmetic: a color or a scalar.
///
/// A scalar behaves as a color whose four channels all equal the scalar,
/// prior to the clamping/rounding of the result. The set is closed; there
/// is no third kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A color operand, contributing its own channels.
    Color(Rgba),
    /// A numeric operand, splatted across all four channels.
    Scalar(f64),
}

impl Operand {
    /// Returns this operand's `[r, g, b, a]` contribution.
    #[inline]
    pub fn channels(self) -> [f64; 4] {
        match self {
            Operand::Color(c) => c.to_array(),
            Operand::Scalar(v) => [v, v, v, v],
        }
    }
}

impl From<Rgba> for Operand {
    #[inline]
    fn from(c: Rgba) -> Self {
        Operand::Color(c)
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(v: f64) -> Self {
        Operand::Scalar(v)
    }
}

impl From<i32> for Operand {
    #[inline]
    fn from(v: i32) -> Self {
        Operand::Scalar(v as f64)
    }
}

/// A dynamically typed value as delivered by the host's operator hooks.
///
/// The host registers this crate's arithmetic against its native color
/// primitive; the hooks receive whatever the surrounding script put on
/// either side of the operator. Only [`HostValue::Color`] and
/// [`HostValue::Number`] are valid arithmetic operands.
///
/// Equality over `HostValue` is same-kind-only: a `Color` never
/// channel-compares against a `Number`, the derived comparison of
/// mismatched variants is simply `false`.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// A native color value.
    Color(Rgba),
    /// A number.
    Number(f64),
    /// A boolean. Not a valid arithmetic operand.
    Boolean(bool),
    /// A text string. Not a valid arithmetic operand.
    Text(String),
    /// The host's nil/absent value. Not a valid arithmetic operand.
    Nil,
}

impl HostValue {
    /// Returns the runtime kind name, as used in error messages.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            HostValue::Color(_) => "color",
            HostValue::Number(_) => "number",
            HostValue::Boolean(_) => "boolean",
            HostValue::Text(_) => "string",
            HostValue::Nil => "nil",
        }
    }
}

impl std::fmt::Display for HostValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostValue::Color(c) => write!(f, "{}", c),
            HostValue::Number(v) => write!(f, "{}", v),
            HostValue::Boolean(v) => write!(f, "{}", v),
            HostValue::Text(v) => write!(f, "{}", v),
            HostValue::Nil => write!(f, "nil"),
        }
    }
}

// === From implementations for convenience ===

impl From<Rgba> for HostValue {
    fn from(c: Rgba) -> Self {
        HostValue::Color(c)
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        HostValue::Number(v)
    }
}

impl From<i32> for HostValue {
    fn from(v: i32) -> Self {
        HostValue::Number(v as f64)
    }
}

impl From<bool> for HostValue {
    fn from(v: bool) -> Self {
        HostValue::Boolean(v)
    }
}

impl From<&str> for HostValue {
    fn from(v: &str) -> Self {
        HostValue::Text(v.to_string())
    }
}

impl From<String> for HostValue {
    fn from(v: String) -> Self {
        HostValue::Text(v)
    }
}

impl TryFrom<HostValue> for Operand {
    type Error = Error;

    /// Narrows a host value to an arithmetic operand.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperand`] for anything that is neither a color nor
    /// a number; the error names the value's runtime kind and its rendered
    /// value.
    fn try_from(value: HostValue) -> Result<Self> {
        match value {
            HostValue::Color(c) => Ok(Operand::Color(c)),
            HostValue::Number(v) => Ok(Operand::Scalar(v)),
            other => Err(Error::invalid_operand(other.kind(), other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_operand_channels() {
        let op = Operand::from(Rgba::from_channels(1, 2, 3, 4));
        assert_eq!(op.channels(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_scalar_operand_splats() {
        assert_eq!(Operand::from(7.0).channels(), [7.0, 7.0, 7.0, 7.0]);
        assert_eq!(Operand::from(-2).channels(), [-2.0, -2.0, -2.0, -2.0]);
    }

    #[test]
    fn test_host_value_narrowing() {
        assert_eq!(
            Operand::try_from(HostValue::from(Rgba::RED)).unwrap(),
            Operand::Color(Rgba::RED)
        );
        assert_eq!(
            Operand::try_from(HostValue::from(5.0)).unwrap(),
            Operand::Scalar(5.0)
        );
    }

    #[test]
    fn test_host_value_rejections_name_kind_and_value() {
        let err = Operand::try_from(HostValue::from(true)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("boolean"));
        assert!(msg.contains("true"));

        let err = Operand::try_from(HostValue::from("teal")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("string"));
        assert!(msg.contains("teal"));

        let err = Operand::try_from(HostValue::Nil).unwrap_err();
        assert!(err.to_string().contains("nil"));
    }

    #[test]
    fn test_host_value_equality_is_same_kind_only() {
        let five_color = HostValue::from(Rgba::new(5.0, 5.0, 5.0, 255.0));
        let five_number = HostValue::from(5.0);
        assert_ne!(five_color, five_number);
        assert_eq!(five_number, HostValue::from(5));
    }
}
