//! RGB <-> HSV conversion.
//!
//! [`Hsv`] carries hue in degrees `[0, 360)`, saturation and value in
//! `[0, 1]`, and the alpha channel passed through unscaled as `u8`.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::{Hsv, Rgba};
//!
//! let hsv = Hsv::from(Rgba::RED);
//! assert_eq!(hsv.hue(), 0.0);
//! assert_eq!(hsv.saturation(), 1.0);
//! assert_eq!(hsv.value(), 1.0);
//!
//! let back = Rgba::from(hsv);
//! assert_eq!(back, Rgba::RED);
//! ```
//!
//! # Edge cases
//!
//! - Pure black short-circuits to `(0, 0, 0, a)`: with `max == 0` both
//!   saturation and hue are undefined and fixed at 0.
//! - Achromatic colors (`r == g == b`) have hue 0.
//! - A negative dominant-channel hue is wrapped into range by adding 360.

use crate::color::Rgba;
use tint_math::CHANNEL_MAX;

/// A color in HSV space, with alpha carried alongside.
///
/// Constructed either via [`Hsv::new`] (which normalizes its inputs) or by
/// converting from [`Rgba`]. Fields are private; conversions and the
/// accessors are the supported surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees, [0, 360).
    h: f64,
    /// Saturation, [0, 1].
    s: f64,
    /// Value (brightness), [0, 1].
    v: f64,
    /// Alpha, [0, 255], unscaled.
    a: u8,
}

impl Hsv {
    /// Creates an HSV value, normalizing each component.
    ///
    /// Hue is wrapped into `[0, 360)` by euclidean remainder, saturation
    /// and value are clamped to `[0, 1]`, alpha is clamped and rounded to
    /// `[0, 255]`.
    #[inline]
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
            a: tint_math::normalize(a),
        }
    }

    /// Hue in degrees, `[0, 360)`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.h
    }

    /// Saturation, `[0, 1]`.
    #[inline]
    pub fn saturation(&self) -> f64 {
        self.s
    }

    /// Value (brightness), `[0, 1]`.
    ///
    /// This is the component color ordering compares.
    #[inline]
    pub fn value(&self) -> f64 {
        self.v
    }

    /// Alpha, `[0, 255]`, passed through conversion unscaled.
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.a
    }
}

impl From<Rgba> for Hsv {
    /// RGB -> HSV by dominant channel.
    fn from(c: Rgba) -> Self {
        let r = c.r as f64 / CHANNEL_MAX;
        let g = c.g as f64 / CHANNEL_MAX;
        let b = c.b as f64 / CHANNEL_MAX;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        // Pure black: saturation and hue are undefined, fixed at 0.
        if max == 0.0 {
            return Self {
                h: 0.0,
                s: 0.0,
                v: 0.0,
                a: c.a,
            };
        }

        let s = delta / max;

        let h = if delta == 0.0 {
            // Achromatic (r == g == b): hue undefined, fixed at 0.
            0.0
        } else {
            let sector = if r == max {
                (g - b) / delta
            } else if g == max {
                2.0 + (b - r) / delta
            } else {
                4.0 + (r - g) / delta
            };
            let mut h = sector * 60.0;
            if h < 0.0 {
                h += 360.0;
            }
            h
        };

        Self {
            h,
            s,
            v: max,
            a: c.a,
        }
    }
}

impl From<Hsv> for Rgba {
    /// HSV -> RGB by 60-degree sector.
    fn from(hsv: Hsv) -> Self {
        let Hsv { h, s, v, a } = hsv;

        if s == 0.0 {
            // Achromatic: all channels carry the brightness.
            return Rgba::new(v * CHANNEL_MAX, v * CHANNEL_MAX, v * CHANNEL_MAX, a as f64);
        }

        let hp = h / 60.0;
        let i = hp.floor();
        let f = hp - i;
        let sector = (i as i64).rem_euclid(6);

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba::new(r * CHANNEL_MAX, g * CHANNEL_MAX, b * CHANNEL_MAX, a as f64)
    }
}

/// Converts a color to HSV. Free-function form of `Hsv::from`.
#[inline]
pub fn rgb_to_hsv(c: Rgba) -> Hsv {
    Hsv::from(c)
}

/// Builds a color from raw HSV components plus alpha.
///
/// Free-function form of `Rgba::from(Hsv::new(..))`; inputs are normalized
/// by [`Hsv::new`] first.
#[inline]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64, a: f64) -> Rgba {
    Rgba::from(Hsv::new(h, s, v, a))
}
