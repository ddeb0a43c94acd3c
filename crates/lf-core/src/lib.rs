//! Color model, codecs, and shared configuration for lumaflip.
//!
//! This crate holds the types every other crate of the workspace works
//! with: the sRGB triplet, its hex form, the HSL adapter, the relative
//! luminance model, and the `Invert` capability implemented by the
//! inversion strategies.

pub mod color;
pub mod config;
pub mod error;
pub mod hex;
pub mod luminance;
pub mod traits;

pub use color::{Hsl, Rgb};
pub use config::InvertConfig;
pub use error::CoreError;
pub use traits::{Invert, Inversion};
