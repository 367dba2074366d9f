//! # tint-math
//!
//! Channel math primitives for the tint-rs color crates.
//!
//! Every color channel in tint-rs is an 8-bit integer in `[0, 255]`.
//! Arithmetic, however, happens in `f64` and can produce values that are
//! negative, fractional, or far above 255. This crate provides the single
//! finalization path that brings any such raw value back into range:
//!
//! 1. [`clamp`] - restrict to `[0.0, 255.0]`
//! 2. [`round_half_up`] - round to nearest, ties upward
//! 3. [`normalize`] - both steps combined, producing the stored `u8`
//!
//! # Usage
//!
//! ```rust
//! use tint_math::normalize;
//!
//! assert_eq!(normalize(-3.0), 0);     // clamped from below
//! assert_eq!(normalize(300.0), 255);  // clamped from above
//! assert_eq!(normalize(1.5), 2);      // half rounds up
//! assert_eq!(normalize(100.0 / 55.0), 2); // 1.818... -> 2
//! ```
//!
//! # Crate Structure
//!
//! This crate is a leaf: it has no dependencies and every other tint-rs
//! crate depends on it.
//!
//! ```text
//! tint-math (this crate)
//!    ^
//!    |
//!    +-- tint-color (value type, operators, HSV)
//!    +-- tint-tests (integration tests)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Upper bound of a color channel, as a float.
///
/// Channels are stored as `u8`, so the valid range is `[0.0, CHANNEL_MAX]`.
pub const CHANNEL_MAX: f64 = 255.0;

/// Clamps a raw channel value to `[0.0, 255.0]`.
///
/// Total over all of `f64`: negative inputs (including `-inf`) become 0,
/// inputs above 255 (including `+inf`) become 255. `NaN` fails both range
/// tests and resolves to 0.
///
/// # Example
///
/// ```rust
/// use tint_math::clamp;
///
/// assert_eq!(clamp(-5.0), 0.0);
/// assert_eq!(clamp(128.5), 128.5);
/// assert_eq!(clamp(900.0), 255.0);
/// ```
#[inline]
pub fn clamp(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > CHANNEL_MAX {
        CHANNEL_MAX
    } else if x.is_nan() {
        0.0
    } else {
        x
    }
}

/// Rounds to the nearest integer, ties away from negative infinity.
///
/// Implemented as `floor(x + 0.5)`, which on the non-negative domain
/// channels live in is plain round-half-up: `1.5 -> 2.0`, `2.5 -> 3.0`.
///
/// # Example
///
/// ```rust
/// use tint_math::round_half_up;
///
/// assert_eq!(round_half_up(1.4), 1.0);
/// assert_eq!(round_half_up(1.5), 2.0);
/// assert_eq!(round_half_up(1.818), 2.0);
/// ```
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Finalizes a raw channel value: clamp to range, round half-up, store as `u8`.
///
/// This is the one normalization boundary in tint-rs. Any code that turns an
/// `f64` into a stored channel goes through here, so out-of-range or
/// fractional channels are unrepresentable in live values.
///
/// Idempotent: normalizing an already-normalized value is a no-op.
///
/// # Example
///
/// ```rust
/// use tint_math::normalize;
///
/// assert_eq!(normalize(254.6), 255);
/// assert_eq!(normalize(-0.4), 0);
/// assert_eq!(normalize(normalize(1234.5) as f64), normalize(1234.5));
/// ```
#[inline]
pub fn normalize(x: f64) -> u8 {
    round_half_up(clamp(x)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_in_range() {
        assert_eq!(clamp(0.0), 0.0);
        assert_eq!(clamp(127.25), 127.25);
        assert_eq!(clamp(255.0), 255.0);
    }

    #[test]
    fn test_clamp_out_of_range() {
        assert_eq!(clamp(-0.001), 0.0);
        assert_eq!(clamp(-1e9), 0.0);
        assert_eq!(clamp(255.001), 255.0);
        assert_eq!(clamp(1e9), 255.0);
    }

    #[test]
    fn test_clamp_non_finite() {
        assert_eq!(clamp(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp(f64::INFINITY), 255.0);
        assert_eq!(clamp(f64::NAN), 0.0);
    }

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(2.5), 3.0);
    }

    #[test]
    fn test_round_half_up_nearest() {
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(1.51), 2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_normalize_clamps_then_rounds() {
        assert_eq!(normalize(-3.0), 0);
        assert_eq!(normalize(0.5), 1);
        assert_eq!(normalize(254.5), 255);
        assert_eq!(normalize(300.0), 255);
        assert_eq!(normalize(100.0 / 55.0), 2);
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in [-10.0, 0.0, 0.49, 0.5, 127.9, 255.0, 99999.0] {
            let once = normalize(raw);
            assert_eq!(normalize(once as f64), once);
        }
    }
}
