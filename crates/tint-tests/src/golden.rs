//! Golden-vector tests for conversion and formatting.
//!
//! Fixed input/output pairs checked exactly, so a regression in rounding,
//! sector selection, or render layout shows up as a concrete value diff
//! rather than a tolerance failure.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use tint_color::{Hsv, Rgba, hsv_to_rgb};

    /// (rgb, expected (h, s, v)) reference pairs. Saturation and value are
    /// exact ratios of small integers, hue is a multiple of 30 degrees.
    const HSV_VECTORS: &[((u8, u8, u8), (f64, f64, f64))] = &[
        ((0, 0, 0), (0.0, 0.0, 0.0)),
        ((255, 255, 255), (0.0, 0.0, 1.0)),
        ((255, 0, 0), (0.0, 1.0, 1.0)),
        ((255, 255, 0), (60.0, 1.0, 1.0)),
        ((0, 255, 0), (120.0, 1.0, 1.0)),
        ((0, 255, 255), (180.0, 1.0, 1.0)),
        ((0, 0, 255), (240.0, 1.0, 1.0)),
        ((255, 0, 255), (300.0, 1.0, 1.0)),
        ((128, 128, 128), (0.0, 0.0, 128.0 / 255.0)),
        ((255, 128, 0), (30.117647058823529, 1.0, 1.0)),
        ((64, 128, 128), (180.0, 0.5, 128.0 / 255.0)),
    ];

    #[test]
    fn test_rgb_to_hsv_golden() {
        for &((r, g, b), (h, s, v)) in HSV_VECTORS {
            let hsv = Hsv::from(Rgba::opaque(r, g, b));
            assert_relative_eq!(hsv.hue(), h, max_relative = 1e-12);
            assert_relative_eq!(hsv.saturation(), s, max_relative = 1e-12);
            assert_relative_eq!(hsv.value(), v, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_hsv_to_rgb_golden() {
        for &((r, g, b), (h, s, v)) in HSV_VECTORS {
            assert_eq!(hsv_to_rgb(h, s, v, 255.0), Rgba::opaque(r, g, b));
        }
    }

    #[test]
    fn test_format_golden() {
        let cases: &[(Rgba, &str)] = &[
            (Rgba::from_channels(0, 0, 0, 0), "(0,\t0,\t0,\t0)"),
            (Rgba::WHITE, "(255,\t255,\t255,\t255)"),
            (Rgba::from_channels(7, 42, 128, 254), "(7,\t42,\t128,\t254)"),
        ];
        for (color, rendered) in cases {
            assert_eq!(color.to_string(), *rendered);
        }
    }

    #[test]
    fn test_arithmetic_golden() {
        let cases: &[(Rgba, Rgba)] = &[
            (
                Rgba::opaque(100, 100, 100) / Rgba::opaque(55, 55, 55),
                Rgba::from_channels(2, 2, 2, 1),
            ),
            (
                Rgba::opaque(5, 5, 5) + 5.0,
                Rgba::from_channels(10, 10, 10, 255),
            ),
            (
                2.0 - Rgba::opaque(5, 5, 5),
                Rgba::from_channels(0, 0, 0, 0),
            ),
        ];
        for (got, want) in cases {
            assert_eq!(got, want);
        }
    }
}
