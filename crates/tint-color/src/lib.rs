//! # tint-color
//!
//! Fixed-point, 4-channel color values with arithmetic, comparison, and
//! HSV conversion semantics.
//!
//! This crate provides the color engine of the tint-rs workspace:
//!
//! - [`Rgba`] - the 8-bit RGBA value type and its factory/normalization
//! - [`Operand`], [`ArithOp`] - heterogeneous operand dispatch for `+ - * /`
//! - [`Hsv`], [`rgb_to_hsv`], [`hsv_to_rgb`] - bidirectional RGB <-> HSV
//! - [`HostValue`] - the dynamically typed host-hook boundary
//! - [`Error`], [`Result`] - the (small) failure surface
//!
//! ## Semantics in brief
//!
//! Channels are integers in `[0, 255]`, finalized by clamp + round-half-up
//! on every store. Scalars act as colors with all four channels equal.
//! Alpha participates in arithmetic exactly like r/g/b. Division by zero
//! yields a zero channel. Equality is exact on all four channels and never
//! crosses types; ordering compares HSV brightness only and is a preorder,
//! deliberately looser than equality.
//!
//! ```rust
//! use tint_color::{Rgba, rgb_to_hsv};
//!
//! let c = Rgba::opaque(100, 100, 100) / Rgba::opaque(55, 55, 55);
//! assert_eq!((c.r, c.g, c.b), (2, 2, 2));
//!
//! assert!(Rgba::opaque(254, 254, 254) < Rgba::WHITE);
//! assert_eq!(rgb_to_hsv(Rgba::BLACK).value(), 0.0);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tint-math (channel clamp/round primitives)
//!    ^
//!    |
//! tint-color (this crate)
//!    ^
//!    |
//! tint-tests (integration tests)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Rgba`] and [`Hsv`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod arith;
pub mod color;
pub mod error;
pub mod hsv;
pub mod operand;

// Re-exports for convenience
pub use arith::ArithOp;
pub use color::Rgba;
pub use error::{Channel, Error, Result};
pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use operand::{HostValue, Operand};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arith::ArithOp;
    pub use crate::color::Rgba;
    pub use crate::error::{Channel, Error, Result};
    pub use crate::hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
    pub use crate::operand::{HostValue, Operand};
}
