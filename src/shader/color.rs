//! RGB ↔ HSL conversion used by the adjustment pass.
//!
//! All math is `f32` over unit-interval channels. Hue is normalized to
//! `[0, 1)` rather than degrees.

/// A color in hue/saturation/lightness space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in `[0, 1)`; 0 is red, 1/3 green, 2/3 blue.
    pub h: f32,
    /// Saturation in `[0, 1]`.
    pub s: f32,
    /// Lightness in `[0, 1]`.
    pub l: f32,
}

/// Convert an RGB triple (channels in `[0, 1]`) to HSL.
///
/// Achromatic input (`max == min`) yields hue 0 and saturation 0 so no
/// division by zero can occur.
pub fn rgb_to_hsl(rgb: [f32; 3]) -> Hsl {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());

    // Six-case hue branch on the maximal channel, in sixths of a turn.
    let h_sextant = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        h: (h_sextant / 6.0).rem_euclid(1.0),
        s,
        l,
    }
}

/// Convert an HSL color back to RGB (channels in `[0, 1]`).
pub fn hsl_to_rgb(hsl: Hsl) -> [f32; 3] {
    let Hsl { h, s, l } = hsl;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(1.0) * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    [r1 + m, g1 + m, b1 + m]
}

impl Hsl {
    /// Shift hue by `dh` turns, wrapping modulo 1. Negative shifts wrap
    /// the other way: `0.2 - 0.3` lands on `0.9`.
    pub fn shift_hue(self, dh: f32) -> Self {
        Self { h: (self.h + dh).rem_euclid(1.0), ..self }
    }

    /// Scale saturation by `factor`, clamped to `[0, 1]`.
    pub fn scale_saturation(self, factor: f32) -> Self {
        Self { s: (self.s * factor).clamp(0.0, 1.0), ..self }
    }

    /// Shift lightness by `dl`, clamped to `[0, 1]`.
    pub fn shift_lightness(self, dl: f32) -> Self {
        Self { l: (self.l + dl).clamp(0.0, 1.0), ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_rgb_close(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!(
                (a[i] - b[i]).abs() < TOLERANCE,
                "channel {} differs: {:?} vs {:?}",
                i,
                a,
                b
            );
        }
    }

    #[test]
    fn test_gray_has_zero_saturation() {
        for v in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let hsl = rgb_to_hsl([v, v, v]);
            assert_eq!(hsl.s, 0.0);
            assert_eq!(hsl.h, 0.0);
            assert!((hsl.l - v).abs() < TOLERANCE);
            assert!(!hsl.h.is_nan() && !hsl.s.is_nan() && !hsl.l.is_nan());

            let back = hsl_to_rgb(hsl);
            assert_rgb_close(back, [v, v, v]);
        }
    }

    #[test]
    fn test_primary_hues() {
        assert!((rgb_to_hsl([1.0, 0.0, 0.0]).h - 0.0).abs() < TOLERANCE);
        assert!((rgb_to_hsl([0.0, 1.0, 0.0]).h - 1.0 / 3.0).abs() < TOLERANCE);
        assert!((rgb_to_hsl([0.0, 0.0, 1.0]).h - 2.0 / 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_round_trip_is_identity() {
        // Sweep a grid of RGB triples; zero offsets must reproduce the input.
        let steps = [0.0, 0.1, 0.2, 0.35, 0.5, 0.65, 0.8, 0.95, 1.0];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let hsl = rgb_to_hsl([r, g, b])
                        .shift_hue(0.0)
                        .scale_saturation(1.0)
                        .shift_lightness(0.0);
                    assert_rgb_close(hsl_to_rgb(hsl), [r, g, b]);
                }
            }
        }
    }

    #[test]
    fn test_hue_wraps_modulo_one() {
        let hsl = Hsl { h: 0.2, s: 0.5, l: 0.5 };
        assert!((hsl.shift_hue(0.9).h - 0.1).abs() < TOLERANCE);
        assert!((hsl.shift_hue(-0.3).h - 0.9).abs() < TOLERANCE);
    }

    #[test]
    fn test_saturation_and_lightness_clamp() {
        let hsl = Hsl { h: 0.0, s: 0.8, l: 0.5 };
        assert_eq!(hsl.scale_saturation(2.0).s, 1.0);
        assert_eq!(hsl.scale_saturation(0.0).s, 0.0);
        assert_eq!(hsl.shift_lightness(1.0).l, 1.0);
        assert_eq!(hsl.shift_lightness(-1.0).l, 0.0);
    }

    #[test]
    fn test_negative_delta_sextant_wraps() {
        // A red-max color with b > g produces a negative sextant that must
        // wrap into [0, 1) instead of going negative.
        let hsl = rgb_to_hsl([1.0, 0.0, 0.5]);
        assert!(hsl.h >= 0.0 && hsl.h < 1.0);
        assert_rgb_close(hsl_to_rgb(hsl), [1.0, 0.0, 0.5]);
    }
}
