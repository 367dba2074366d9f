//! The fixed-point RGBA color value type.
//!
//! [`Rgba`] holds four 8-bit channels. All numeric construction funnels
//! through [`Rgba::new`], which clamps and rounds via [`tint_math`], so an
//! out-of-range or fractional channel is unrepresentable in a live value.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::Rgba;
//!
//! let c = Rgba::new(300.0, -4.0, 127.5, 255.0);
//! assert_eq!(c, Rgba::from_channels(255, 0, 128, 255));
//!
//! // Omitted channels default to opaque white.
//! let d = Rgba::from_partial(Some(0.0), None, None, None);
//! assert_eq!(d, Rgba::from_channels(0, 255, 255, 255));
//! ```
//!
//! # Equality vs ordering
//!
//! Equality is exact on all four channels. Ordering compares a single
//! derived brightness value (HSV V) and is therefore a *preorder*: two
//! unequal colors can be `<=` and `>=` of each other. See the
//! [`PartialOrd`] impl for details.

use crate::error::{Channel, Error, Result};
use crate::hsv::Hsv;
use std::cmp::Ordering;
use std::fmt;
use tint_math::normalize;

/// An RGBA color with 8-bit channels.
///
/// A plain value aggregate: `Copy`, no internal synchronization, no shared
/// storage. Arithmetic operators always produce new values; the chainable
/// `set_*`/`add_*`/... mutators mutate the receiver in place and return it.
///
/// # Example
///
/// ```rust
/// use tint_color::Rgba;
///
/// let a = Rgba::opaque(5, 5, 5);
/// let b = a + 5.0;
/// assert_eq!(b, Rgba::opaque(10, 10, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Default for Rgba {
    /// Opaque white, matching the constructor's per-channel default of 255.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

// Generates the chainable mutators for one channel. `set_*` always
// succeeds; `add_*`/`sub_*`/`mul_*`/`div_*` reject negative deltas and
// `div_*` maps a zero divisor to a zero channel.
macro_rules! channel_mutators {
    ($field:ident, $channel:expr, $set:ident, $add:ident, $sub:ident, $mul:ident, $div:ident) => {
        /// Sets this channel to `v` (clamped and rounded), returning the
        /// receiver for chaining.
        #[inline]
        pub fn $set(&mut self, v: f64) -> &mut Self {
            self.$field = normalize(v);
            self
        }

        /// Adds a non-negative `delta` to this channel.
        ///
        /// # Errors
        ///
        /// [`Error::NegativeDelta`](crate::Error::NegativeDelta) if `delta`
        /// is negative.
        #[inline]
        pub fn $add(&mut self, delta: f64) -> Result<&mut Self> {
            Self::check_delta($channel, delta)?;
            self.$field = normalize(self.$field as f64 + delta);
            Ok(self)
        }

        /// Subtracts a non-negative `delta` from this channel.
        ///
        /// # Errors
        ///
        /// [`Error::NegativeDelta`](crate::Error::NegativeDelta) if `delta`
        /// is negative.
        #[inline]
        pub fn $sub(&mut self, delta: f64) -> Result<&mut Self> {
            Self::check_delta($channel, delta)?;
            self.$field = normalize(self.$field as f64 - delta);
            Ok(self)
        }

        /// Multiplies this channel by a non-negative `factor`.
        ///
        /// # Errors
        ///
        /// [`Error::NegativeDelta`](crate::Error::NegativeDelta) if `factor`
        /// is negative.
        #[inline]
        pub fn $mul(&mut self, factor: f64) -> Result<&mut Self> {
            Self::check_delta($channel, factor)?;
            self.$field = normalize(self.$field as f64 * factor);
            Ok(self)
        }

        /// Divides this channel by a non-negative `divisor`.
        ///
        /// A zero divisor yields a zero channel, per the divide-by-zero
        /// policy of color arithmetic.
        ///
        /// # Errors
        ///
        /// [`Error::NegativeDelta`](crate::Error::NegativeDelta) if `divisor`
        /// is negative.
        #[inline]
        pub fn $div(&mut self, divisor: f64) -> Result<&mut Self> {
            Self::check_delta($channel, divisor)?;
            self.$field = if divisor == 0.0 {
                0
            } else {
                normalize(self.$field as f64 / divisor)
            };
            Ok(self)
        }
    };
}

impl Rgba {
    /// Opaque white (255, 255, 255, 255).
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Opaque black (0, 0, 0, 255).
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Opaque red.
    pub const RED: Self = Self::opaque(255, 0, 0);

    /// Opaque green.
    pub const GREEN: Self = Self::opaque(0, 255, 0);

    /// Opaque blue.
    pub const BLUE: Self = Self::opaque(0, 0, 255);

    /// Fully transparent black (0, 0, 0, 0).
    pub const TRANSPARENT: Self = Self::from_channels(0, 0, 0, 0);

    /// Creates a color from raw numeric channels.
    ///
    /// Each channel is clamped to `[0, 255]` and rounded half-up. This is
    /// the sole normalization boundary: every path that turns numbers into
    /// a stored color goes through here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_color::Rgba;
    ///
    /// let c = Rgba::new(-3.0, 1.5, 300.0, 255.0);
    /// assert_eq!(c, Rgba::from_channels(0, 2, 255, 255));
    /// ```
    #[inline]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: normalize(r),
            g: normalize(g),
            b: normalize(b),
            a: normalize(a),
        }
    }

    /// Creates a color from optional channels; a missing channel defaults
    /// to 255.
    ///
    /// Models the host constructor `Color(r?, g?, b?, a?)`, where any
    /// trailing (or interior) argument may be omitted and the default is
    /// opaque white.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_color::Rgba;
    ///
    /// assert_eq!(Rgba::from_partial(None, None, None, None), Rgba::WHITE);
    /// assert_eq!(
    ///     Rgba::from_partial(Some(0.0), None, None, None),
    ///     Rgba::from_channels(0, 255, 255, 255),
    /// );
    /// ```
    #[inline]
    pub fn from_partial(r: Option<f64>, g: Option<f64>, b: Option<f64>, a: Option<f64>) -> Self {
        Self::new(
            r.unwrap_or(tint_math::CHANNEL_MAX),
            g.unwrap_or(tint_math::CHANNEL_MAX),
            b.unwrap_or(tint_math::CHANNEL_MAX),
            a.unwrap_or(tint_math::CHANNEL_MAX),
        )
    }

    /// Creates a color from already-normalized `u8` channels.
    #[inline]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color (alpha = 255).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the channels as an `[r, g, b, a]` array of `f64`.
    ///
    /// This is the representation channel arithmetic runs in.
    #[inline]
    pub fn to_array(self) -> [f64; 4] {
        [self.r as f64, self.g as f64, self.b as f64, self.a as f64]
    }

    /// Returns this color with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    fn check_delta(channel: Channel, delta: f64) -> Result<()> {
        // NaN is not negative; it falls through and normalizes to 0.
        if delta < 0.0 {
            Err(Error::negative_delta(channel, delta))
        } else {
            Ok(())
        }
    }

    channel_mutators!(r, Channel::Red, set_r, add_r, sub_r, mul_r, div_r);
    channel_mutators!(g, Channel::Green, set_g, add_g, sub_g, mul_g, div_g);
    channel_mutators!(b, Channel::Blue, set_b, add_b, sub_b, mul_b, div_b);
    channel_mutators!(a, Channel::Alpha, set_a, add_a, sub_a, mul_a, div_a);
}

// === Cross-type equality ===
//
// Comparing a color against a bare number never compares channels; it is
// defined to be false unconditionally. Equality only fires when both sides
// carry the color type.

impl PartialEq<f64> for Rgba {
    #[inline]
    fn eq(&self, _other: &f64) -> bool {
        false
    }
}

impl PartialEq<Rgba> for f64 {
    #[inline]
    fn eq(&self, _other: &Rgba) -> bool {
        false
    }
}

// === Ordering ===

/// Brightness ordering.
///
/// `< <= > >=` compare only the HSV value (V) of each side, yielding a
/// total *preorder*: colors with equal brightness but different hue or
/// saturation compare as neither strictly less nor strictly greater, and
/// as both `<=` and `>=` of each other, while still being unequal under
/// `==`. This intentionally deviates from the `PartialOrd`/`PartialEq`
/// consistency convention (`partial_cmp` can return `Some(Equal)` for
/// values that are `!=`); equality stays exact on RGBA, ordering collapses
/// to a 1-D brightness measure.
impl PartialOrd for Rgba {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let va = Hsv::from(*self).value();
        let vb = Hsv::from(*other).value();
        // V is always a finite number in [0, 1], so this is always Some.
        va.partial_cmp(&vb)
    }
}

// === Formatting ===

/// Canonical textual form: `"(R,\tG,\tB,\tA)"`.
///
/// Channels render as unsigned integers, tab-separated after each comma;
/// no sign, no fractional part, no locale variation.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},\t{},\t{},\t{})", self.r, self.g, self.b, self.a)
    }
}
