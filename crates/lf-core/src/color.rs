use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Srgb};

use crate::error::CoreError;
use crate::hex::{decode_hex_byte, push_hex_byte};

type SrgbHsl = palette::Hsl<palette::encoding::Srgb, f64>;

/// Couleur sRGB 8 bits par canal, telle qu'écrite en `rrggbb`.
///
/// # Example
/// ```
/// use lf_core::color::Rgb;
/// let c = Rgb::from_hex("336699").unwrap();
/// assert_eq!(c, Rgb::new(0x33, 0x66, 0x99));
/// assert_eq!(c.to_hex(), "336699");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly six lowercase hex digits, without a leading `#`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidHexLength`] unless `hex` has six
    /// characters, or [`CoreError::InvalidHexDigit`] on a bad digit.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        let found = hex.chars().count();
        if found != 6 || hex.len() != 6 {
            return Err(CoreError::InvalidHexLength { expected: 6, found });
        }
        Ok(Self {
            r: decode_hex_byte(&hex[0..2])?,
            g: decode_hex_byte(&hex[2..4])?,
            b: decode_hex_byte(&hex[4..6])?,
        })
    }

    /// Six lowercase hex digits, zero padded.
    #[must_use]
    pub fn to_hex(self) -> String {
        let mut out = String::with_capacity(6);
        push_hex_byte(&mut out, self.r);
        push_hex_byte(&mut out, self.g);
        push_hex_byte(&mut out, self.b);
        out
    }

    /// Channels as `[r, g, b]`.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Représentation HSL transitoire, utilisée uniquement pendant l'inversion.
///
/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Teinte en degrés.
    pub hue: f64,
    /// Saturation, 0 for grays.
    pub saturation: f64,
    /// Lightness, the only component the inversions change.
    pub lightness: f64,
}

impl Hsl {
    /// Same hue and saturation, different lightness.
    #[must_use]
    pub const fn with_lightness(self, lightness: f64) -> Self {
        Self { lightness, ..self }
    }
}

/// Convertit RGB [0,255] → HSL via `palette`.
///
/// # Example
/// ```
/// use lf_core::color::{rgb_to_hsl, Rgb};
/// let hsl = rgb_to_hsl(Rgb::new(255, 0, 0));
/// assert!(hsl.hue.abs() < 1e-9);
/// assert!((hsl.saturation - 1.0).abs() < 1e-9);
/// assert!((hsl.lightness - 0.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn rgb_to_hsl(color: Rgb) -> Hsl {
    let rgb = Srgb::new(
        f64::from(color.r) / 255.0,
        f64::from(color.g) / 255.0,
        f64::from(color.b) / 255.0,
    );
    let hsl = SrgbHsl::from_color(rgb);
    Hsl {
        hue: hsl.hue.into_positive_degrees(),
        saturation: hsl.saturation,
        lightness: hsl.lightness,
    }
}

/// Convertit HSL → canaux RGB réels dans [0, 255], sans arrondi.
///
/// Pass the result through [`floor_channels`] before hex-encoding.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> [f64; 3] {
    let rgb: Srgb<f64> = Srgb::from_color(SrgbHsl::new(hsl.hue, hsl.saturation, hsl.lightness));
    [rgb.red * 255.0, rgb.green * 255.0, rgb.blue * 255.0]
}

/// Floor real channels to integers, clamped to [0, 255].
///
/// Non-finite values map to 0 so NaN never reaches the output.
///
/// # Example
/// ```
/// use lf_core::color::{floor_channels, Rgb};
/// assert_eq!(floor_channels([63.75, 255.9, -1.0]), Rgb::new(63, 255, 0));
/// assert_eq!(floor_channels([f64::NAN, f64::INFINITY, 0.0]), Rgb::new(0, 0, 0));
/// ```
#[must_use]
pub fn floor_channels(channels: [f64; 3]) -> Rgb {
    let floor = |c: f64| -> u8 {
        if c.is_finite() {
            c.floor().clamp(0.0, 255.0) as u8
        } else {
            0
        }
    };
    Rgb::new(floor(channels[0]), floor(channels[1]), floor(channels[2]))
}
