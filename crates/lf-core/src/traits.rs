use crate::color::Rgb;

/// Résultat d'une inversion : la couleur produite plus un diagnostic.
///
/// Non-convergence is reported here rather than logged, so strategies
/// stay free of side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inversion {
    /// The inverted color.
    pub color: Rgb,
    /// `false` when an iterative strategy ran out of refinement steps.
    pub converged: bool,
    /// Refinement steps actually performed (0 for straight-line strategies).
    pub iterations: u32,
}

impl Inversion {
    /// A result produced without iteration.
    #[must_use]
    pub const fn exact(color: Rgb) -> Self {
        Self {
            color,
            converged: true,
            iterations: 0,
        }
    }
}

/// Inverse la clarté perçue d'une couleur.
///
/// Implémenté par : `BrightnessInversion`, `LightnessFlip`, `LuminanceSearch`.
///
/// # Example
/// ```
/// use lf_core::traits::{Invert, Inversion};
/// use lf_core::color::Rgb;
///
/// struct Identity;
/// impl Invert for Identity {
///     fn invert(&self, color: Rgb) -> Inversion { Inversion::exact(color) }
///     fn name(&self) -> &'static str { "identity" }
/// }
///
/// let out = Identity.invert(Rgb::new(1, 2, 3));
/// assert_eq!(out.color, Rgb::new(1, 2, 3));
/// assert!(out.converged);
/// ```
pub trait Invert: Send + Sync {
    /// Invert one color. Never fails: every input in [0,255]³ has an output.
    fn invert(&self, color: Rgb) -> Inversion;

    /// Nom lisible pour les logs.
    fn name(&self) -> &'static str;
}
