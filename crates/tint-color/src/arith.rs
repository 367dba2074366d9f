//! Channel-wise arithmetic over color and scalar operands.
//!
//! [`ArithOp`] is the engine: it resolves two [`Operand`]s to 4-tuples of
//! raw channel values, applies itself channel-wise, and finalizes the
//! result through [`Rgba::new`] (clamp + round). The alpha channel
//! participates exactly like r/g/b.
//!
//! The `std::ops` impls at the bottom give the ergonomic surface:
//! `Rgba + Rgba`, `Rgba * 2.0`, `5.0 - Rgba`, and so on. Addition and
//! multiplication are commutative in effect; subtraction and division are
//! computed literally in operand order, so `5.0 - color` and `5.0 / color`
//! are legal and mean what they say.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::Rgba;
//!
//! let c = Rgba::opaque(5, 5, 5);
//! assert_eq!(c + 5.0, Rgba::opaque(10, 10, 10));
//! assert_eq!(5.0 + c, Rgba::opaque(10, 10, 10));
//! // 2 - 5 = -3 per channel, clamped to 0; the scalar splats to alpha too.
//! assert_eq!(2.0 - c, Rgba::from_channels(0, 0, 0, 0));
//! ```
//!
//! # Division by zero
//!
//! A channel whose divisor is exactly 0 yields 0 for that channel, per
//! channel independently. No error, no infinity, no NaN.

use crate::color::Rgba;
use crate::error::Result;
use crate::operand::{HostValue, Operand};
use std::ops::{Add, Div, Mul, Sub};

/// A binary arithmetic operator over color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// Channel-wise addition.
    Add,
    /// Channel-wise subtraction.
    Sub,
    /// Channel-wise multiplication.
    Mul,
    /// Channel-wise division; a zero divisor yields a zero channel.
    Div,
}

impl ArithOp {
    /// The operator's source symbol.
    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    /// Applies the operator to one raw channel pair.
    ///
    /// The result is unclamped and unrounded; finalization happens when the
    /// four results pass through [`Rgba::new`].
    #[inline]
    pub fn eval(self, a: f64, b: f64) -> f64 {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Sub => a - b,
            ArithOp::Mul => a * b,
            ArithOp::Div => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
        }
    }

    /// Applies the operator channel-wise to two operands.
    ///
    /// Each operand contributes a 4-tuple ([`Operand::channels`]); the four
    /// raw results are clamped and rounded by [`Rgba::new`]. Alpha is
    /// recomputed the same way as the color channels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_color::{ArithOp, Rgba};
    ///
    /// let out = ArithOp::Div.apply(
    ///     Rgba::opaque(100, 100, 100).into(),
    ///     Rgba::opaque(55, 55, 55).into(),
    /// );
    /// assert_eq!(out, Rgba::new(2.0, 2.0, 2.0, 1.0)); // 1.818... rounds to 2
    /// ```
    pub fn apply(self, lhs: Operand, rhs: Operand) -> Rgba {
        let [lr, lg, lb, la] = lhs.channels();
        let [rr, rg, rb, ra] = rhs.channels();
        Rgba::new(
            self.eval(lr, rr),
            self.eval(lg, rg),
            self.eval(lb, rb),
            self.eval(la, ra),
        )
    }

    /// Applies the operator to two dynamically typed host values.
    ///
    /// This is the body of the operator hook registered with the host:
    /// both sides are narrowed to [`Operand`] first, then dispatched to
    /// [`ArithOp::apply`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOperand`](crate::Error::InvalidOperand) if either
    /// side is neither a color nor a number.
    pub fn apply_host(self, lhs: HostValue, rhs: HostValue) -> Result<Rgba> {
        Ok(self.apply(Operand::try_from(lhs)?, Operand::try_from(rhs)?))
    }
}

impl std::fmt::Display for ArithOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Rgba + Rgba
impl Add for Rgba {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ArithOp::Add.apply(self.into(), rhs.into())
    }
}

// Rgba + f64
impl Add<f64> for Rgba {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        ArithOp::Add.apply(self.into(), rhs.into())
    }
}

// f64 + Rgba
impl Add<Rgba> for f64 {
    type Output = Rgba;

    #[inline]
    fn add(self, rhs: Rgba) -> Rgba {
        ArithOp::Add.apply(self.into(), rhs.into())
    }
}

// Rgba - Rgba
impl Sub for Rgba {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ArithOp::Sub.apply(self.into(), rhs.into())
    }
}

// Rgba - f64
impl Sub<f64> for Rgba {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        ArithOp::Sub.apply(self.into(), rhs.into())
    }
}

// f64 - Rgba
impl Sub<Rgba> for f64 {
    type Output = Rgba;

    #[inline]
    fn sub(self, rhs: Rgba) -> Rgba {
        ArithOp::Sub.apply(self.into(), rhs.into())
    }
}

// Rgba * Rgba (channel-wise)
impl Mul for Rgba {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        ArithOp::Mul.apply(self.into(), rhs.into())
    }
}

// Rgba * f64
impl Mul<f64> for Rgba {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        ArithOp::Mul.apply(self.into(), rhs.into())
    }
}

// f64 * Rgba
impl Mul<Rgba> for f64 {
    type Output = Rgba;

    #[inline]
    fn mul(self, rhs: Rgba) -> Rgba {
        ArithOp::Mul.apply(self.into(), rhs.into())
    }
}

// Rgba / Rgba (channel-wise)
impl Div for Rgba {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        ArithOp::Div.apply(self.into(), rhs.into())
    }
}

// Rgba / f64
impl Div<f64> for Rgba {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        ArithOp::Div.apply(self.into(), rhs.into())
    }
}

// f64 / Rgba
impl Div<Rgba> for f64 {
    type Output = Rgba;

    #[inline]
    fn div(self, rhs: Rgba) -> Rgba {
        ArithOp::Div.apply(self.into(), rhs.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_commutative_in_effect() {
        let c = Rgba::opaque(5, 5, 5);
        assert_eq!(c + 5.0, Rgba::opaque(10, 10, 10));
        assert_eq!(5.0 + c, Rgba::opaque(10, 10, 10));
        // Alpha participates: 255 + 5 clamps back to 255.
        assert_eq!((c + 5.0).a, 255);
    }

    #[test]
    fn test_mul_commutative_in_effect() {
        let c = Rgba::opaque(10, 20, 30);
        assert_eq!(c * 2.0, 2.0 * c);
        assert_eq!(c * 2.0, Rgba::new(20.0, 40.0, 60.0, 255.0 * 2.0));
    }

    #[test]
    fn test_sub_literal_order() {
        assert_eq!(
            Rgba::opaque(5, 5, 5) - Rgba::opaque(2, 2, 2),
            Rgba::new(3.0, 3.0, 3.0, 0.0)
        );
        // 2 - 5 = -3 per channel, clamped to 0; alpha 2 - 255 clamps too.
        assert_eq!(2.0 - Rgba::opaque(5, 5, 5), Rgba::from_channels(0, 0, 0, 0));
    }

    #[test]
    fn test_scalar_minus_color_clamps() {
        let out = 5.0 - Rgba::opaque(10, 10, 10);
        assert_eq!((out.r, out.g, out.b), (0, 0, 0));
    }

    #[test]
    fn test_scalar_div_color_rounds() {
        // 5 / 10 = 0.5 per channel, rounds up to 1.
        let out = 5.0 / Rgba::from_channels(10, 10, 10, 10);
        assert_eq!(out, Rgba::from_channels(1, 1, 1, 1));
    }

    #[test]
    fn test_div_rounding() {
        let out = Rgba::opaque(100, 100, 100) / Rgba::opaque(55, 55, 55);
        assert_eq!((out.r, out.g, out.b), (2, 2, 2));
        // Alpha: 255 / 255 = 1.
        assert_eq!(out.a, 1);
    }

    #[test]
    fn test_div_by_zero_per_channel() {
        let out = Rgba::opaque(10, 10, 10) / Rgba::from_channels(0, 5, 0, 255);
        assert_eq!(out.r, 0);
        assert_eq!(out.g, 2);
        assert_eq!(out.b, 0);
        assert_eq!(out.a, 1);

        let out = Rgba::opaque(10, 10, 10) / 0.0;
        assert_eq!(out, Rgba::from_channels(0, 0, 0, 0));
    }

    #[test]
    fn test_operands_unchanged() {
        let a = Rgba::opaque(5, 5, 5);
        let b = Rgba::opaque(2, 2, 2);
        let _ = a - b;
        assert_eq!(a, Rgba::opaque(5, 5, 5));
        assert_eq!(b, Rgba::opaque(2, 2, 2));
    }

    #[test]
    fn test_apply_host_valid_operands() {
        let out = ArithOp::Add
            .apply_host(HostValue::from(Rgba::opaque(5, 5, 5)), HostValue::from(5.0))
            .unwrap();
        assert_eq!(out, Rgba::opaque(10, 10, 10));
    }

    #[test]
    fn test_apply_host_rejects_non_operands() {
        let err = ArithOp::Mul
            .apply_host(HostValue::from(Rgba::WHITE), HostValue::Nil)
            .unwrap_err();
        assert!(err.is_invalid_operand());
        assert!(err.to_string().contains("nil"));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(ArithOp::Add.to_string(), "+");
        assert_eq!(ArithOp::Div.symbol(), "/");
    }
}
