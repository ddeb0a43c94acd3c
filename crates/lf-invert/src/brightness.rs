use lf_core::color::{Rgb, floor_channels};
use lf_core::traits::{Invert, Inversion};

/// Inversion naïve de la luminosité, canal par canal.
///
/// Each output channel is `1 - mean(other two channels)`, computed
/// directly on the normalized input with no color-space round trip. Hue
/// is not preserved; this is the lowest-fidelity strategy.
///
/// # Example
/// ```
/// use lf_core::color::Rgb;
/// use lf_core::traits::Invert;
/// use lf_invert::BrightnessInversion;
///
/// let out = BrightnessInversion.invert(Rgb::BLACK);
/// assert_eq!(out.color, Rgb::WHITE);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BrightnessInversion;

/// `1 - (a + b) / 2` on normalized channels.
#[inline]
fn invert_pair(a: f64, b: f64) -> f64 {
    1.0 - (a + b) / 2.0
}

impl Invert for BrightnessInversion {
    fn invert(&self, color: Rgb) -> Inversion {
        let [r, g, b] = color.channels().map(|c| f64::from(c) / 255.0);
        let inverted = [invert_pair(g, b), invert_pair(r, b), invert_pair(r, g)];
        Inversion::exact(floor_channels(inverted.map(|c| c * 255.0)))
    }

    fn name(&self) -> &'static str {
        "brightness"
    }
}
