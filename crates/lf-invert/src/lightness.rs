use lf_core::color::{Rgb, floor_channels, hsl_to_rgb, rgb_to_hsl};
use lf_core::traits::{Invert, Inversion};

/// Inversion directe de la clarté HSL : `l → 1 - l`.
///
/// Hue and saturation survive the round trip; no luminance targeting.
///
/// # Example
/// ```
/// use lf_core::color::Rgb;
/// use lf_core::traits::Invert;
/// use lf_invert::LightnessFlip;
///
/// assert_eq!(LightnessFlip.invert(Rgb::WHITE).color, Rgb::BLACK);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LightnessFlip;

impl Invert for LightnessFlip {
    fn invert(&self, color: Rgb) -> Inversion {
        let hsl = rgb_to_hsl(color);
        let flipped = hsl.with_lightness(1.0 - hsl.lightness);
        Inversion::exact(floor_channels(hsl_to_rgb(flipped)))
    }

    fn name(&self) -> &'static str {
        "lightness"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        a.channels()
            .iter()
            .zip(b.channels())
            .all(|(&x, y)| (i16::from(x) - i16::from(y)).abs() <= 1)
    }

    #[test]
    fn grays_mirror() {
        assert_eq!(LightnessFlip.invert(Rgb::BLACK).color, Rgb::WHITE);
        assert_eq!(LightnessFlip.invert(Rgb::WHITE).color, Rgb::BLACK);
    }

    #[test]
    fn midtone_keeps_hue() {
        let out = LightnessFlip.invert(Rgb::new(0x33, 0x66, 0x99)).color;
        assert!(close(out, Rgb::new(0x66, 0x99, 0xcc)), "{out}");
        let before = rgb_to_hsl(Rgb::new(0x33, 0x66, 0x99));
        let after = rgb_to_hsl(out);
        assert!((before.hue - after.hue).abs() < 1.0, "Hue shifted: {} vs {}", before.hue, after.hue);
    }

    #[test]
    fn pure_hue_is_a_fixed_point() {
        // l = 0.5 flips onto itself
        let out = LightnessFlip.invert(Rgb::new(255, 0, 0)).color;
        assert!(close(out, Rgb::new(255, 0, 0)), "{out}");
    }

    #[test]
    fn flipping_twice_is_near_identity() {
        for hex in ["336699", "aabbcc", "102030", "f8f8f2"] {
            let c = Rgb::from_hex(hex).unwrap();
            let twice = LightnessFlip.invert(LightnessFlip.invert(c).color).color;
            let diff = c
                .channels()
                .iter()
                .zip(twice.channels())
                .map(|(&x, y)| (i16::from(x) - i16::from(y)).abs())
                .max()
                .unwrap_or(0);
            assert!(diff <= 3, "{hex} → {twice}");
        }
    }
}
