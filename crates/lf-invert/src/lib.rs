//! Inversion strategies for lumaflip.
//!
//! Three named strategies share the [`Invert`] capability: a naive
//! per-channel brightness inversion, a plain HSL lightness flip, and the
//! luminance-targeted bisection search.

pub mod brightness;
pub mod lightness;
pub mod search;

use lf_core::config::{InvertConfig, Strategy};
use lf_core::traits::Invert;

pub use brightness::BrightnessInversion;
pub use lightness::LightnessFlip;
pub use search::{LuminanceSearch, SearchParams, SearchStep};

/// Build the strategy selected by `config`.
///
/// # Example
/// ```
/// use lf_core::config::{InvertConfig, Strategy};
/// use lf_invert::inverter;
///
/// let config = InvertConfig { strategy: Strategy::Lightness, ..InvertConfig::default() };
/// assert_eq!(inverter(&config).name(), "lightness");
/// ```
#[must_use]
pub fn inverter(config: &InvertConfig) -> Box<dyn Invert> {
    match config.strategy {
        Strategy::Brightness => Box::new(BrightnessInversion),
        Strategy::Lightness => Box::new(LightnessFlip),
        Strategy::LuminanceSearch => Box::new(LuminanceSearch::new(SearchParams::from(config))),
    }
}
