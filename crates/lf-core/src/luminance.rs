use crate::color::Rgb;

/// Seuil de la branche linéaire de l'expansion gamma.
pub const GAMMA_THRESHOLD: f64 = 0.03928;

/// Rec. 709 channel weights (R, G, B).
pub const CHANNEL_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Expand one gamma-encoded channel in [0, 1] to linear light.
#[inline]
#[must_use]
pub fn gamma_expand(c: f64) -> f64 {
    if c <= GAMMA_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Luminance relative d'une couleur, dans [0, 1].
///
/// Same definition as accessibility contrast ratios: each channel is
/// normalized, gamma-expanded, then weighted.
///
/// # Example
/// ```
/// use lf_core::color::Rgb;
/// use lf_core::luminance::relative_luminance;
/// assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
/// assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    relative_luminance_f64(color.channels().map(f64::from))
}

/// Same as [`relative_luminance`] for real channels in [0, 255].
///
/// The inversion search evaluates candidates before they are floored,
/// so it works on this form.
#[must_use]
pub fn relative_luminance_f64(channels: [f64; 3]) -> f64 {
    channels
        .iter()
        .zip(CHANNEL_WEIGHTS)
        .map(|(&c, w)| w * gamma_expand(c / 255.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_match_weights() {
        let red = relative_luminance(Rgb::new(255, 0, 0));
        let green = relative_luminance(Rgb::new(0, 255, 0));
        let blue = relative_luminance(Rgb::new(0, 0, 255));
        assert!((red - 0.2126).abs() < 1e-12);
        assert!((green - 0.7152).abs() < 1e-12);
        assert!((blue - 0.0722).abs() < 1e-12);
    }

    #[test]
    fn linear_branch_below_threshold() {
        // 10/255 ≈ 0.0392 < 0.03928
        let expected = (10.0 / 255.0) / 12.92;
        let l = relative_luminance(Rgb::new(10, 10, 10));
        assert!((l - expected).abs() < 1e-12, "{l} vs {expected}");
    }

    #[test]
    fn known_midtone() {
        // #336699 ≈ 0.1251
        let l = relative_luminance(Rgb::new(0x33, 0x66, 0x99));
        assert!((l - 0.1251).abs() < 1e-3, "{l}");
    }

    #[test]
    fn luminance_monotonic_on_grays() {
        let mut prev = -1.0;
        for v in 0..=255u8 {
            let l = relative_luminance(Rgb::new(v, v, v));
            assert!(l > prev, "luminance non monotone à {v}");
            assert!((0.0..=1.0 + 1e-12).contains(&l));
            prev = l;
        }
    }
}
