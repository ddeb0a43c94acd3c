//! Luminance-targeted lightness inversion.
//!
//! A naive `l → 1 - l` flip does not land on a luminance that complements
//! the input across the whole brightness range. Instead, the target is
//! `P² / L0` (`P` = inversion point, `L0` = input luminance), and the HSL
//! lightness is bisected, hue and saturation fixed, until the candidate's
//! relative luminance is within tolerance of the target or the step
//! budget runs out.
//!
//! Relative luminance is monotonic in lightness at fixed hue and
//! saturation, so the bisection converges to any reachable target.

use lf_core::color::{Hsl, Rgb, floor_channels, hsl_to_rgb, rgb_to_hsl};
use lf_core::config::InvertConfig;
use lf_core::luminance::{relative_luminance, relative_luminance_f64};
use lf_core::traits::{Invert, Inversion};

/// Target used for pure black, whose `P² / L0` is undefined.
const MAX_LUMINANCE: f64 = 1.0;

/// Paramètres de la recherche par dichotomie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchParams {
    /// Pivot `P` of `target = P² / L0`.
    pub inversion_point: f64,
    /// Absolute tolerance on relative luminance.
    pub tolerance: f64,
    /// Maximum number of refinement steps after the seed.
    pub max_iterations: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            inversion_point: 0.23,
            tolerance: 0.005,
            max_iterations: 6,
        }
    }
}

impl From<&InvertConfig> for SearchParams {
    fn from(config: &InvertConfig) -> Self {
        Self {
            inversion_point: config.inversion_point,
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }
}

impl SearchParams {
    /// Luminance the search aims for, given the input luminance.
    ///
    /// # Example
    /// ```
    /// use lf_invert::SearchParams;
    /// let p = SearchParams::default();
    /// assert!((p.target_luminance(1.0) - 0.0529).abs() < 1e-12);
    /// assert_eq!(p.target_luminance(0.0), 1.0);
    /// ```
    #[must_use]
    pub fn target_luminance(&self, input: f64) -> f64 {
        if input > 0.0 {
            self.inversion_point * self.inversion_point / input
        } else {
            MAX_LUMINANCE
        }
    }
}

/// One state of the bisection: bracket, candidate lightness, and the
/// luminance of the candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchStep {
    /// Lower bound of the lightness bracket.
    pub low: f64,
    /// Candidate lightness, always within `[low, high]`.
    pub lightness: f64,
    /// Upper bound of the lightness bracket.
    pub high: f64,
    /// Relative luminance of the candidate, on unfloored channels.
    pub luminance: f64,
    channels: [f64; 3],
}

impl SearchStep {
    /// The candidate color, floored to integer channels.
    #[must_use]
    pub fn color(&self) -> Rgb {
        floor_channels(self.channels)
    }
}

/// Itérateur sur les raffinements de la dichotomie.
///
/// The bracket is `[l0, 1]` when the target is brighter than the input and
/// `[0, l0]` otherwise. [`Bisection::seed`] is the naive flip `1 - l0` when
/// it falls inside that bracket, its midpoint when it does not. Each
/// `next()` performs one refinement, and the iterator ends once the
/// candidate is within tolerance or the budget is spent.
#[derive(Clone, Debug)]
pub struct Bisection {
    hsl: Hsl,
    target: f64,
    tolerance: f64,
    remaining: u32,
    seed: SearchStep,
    current: SearchStep,
}

impl Bisection {
    fn new(color: Rgb, params: SearchParams) -> Self {
        let hsl = rgb_to_hsl(color);
        let input = relative_luminance(color);
        let target = params.target_luminance(input);

        // Luminance croît avec la lightness : la cible est du même côté de l0.
        let original = hsl.lightness;
        let (low, high) = if target > input {
            (original, 1.0)
        } else {
            (0.0, original)
        };

        let flipped = 1.0 - original;
        let start = if (low..=high).contains(&flipped) {
            flipped
        } else {
            f64::midpoint(low, high)
        };

        let seed = evaluate(hsl, low, start, high);
        Self {
            hsl,
            target,
            tolerance: params.tolerance,
            remaining: params.max_iterations,
            seed,
            current: seed,
        }
    }

    /// The starting point, before any refinement.
    #[must_use]
    pub const fn seed(&self) -> SearchStep {
        self.seed
    }

    /// Target relative luminance.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    fn within_tolerance(&self, step: &SearchStep) -> bool {
        (self.target - step.luminance).abs() < self.tolerance
    }
}

impl Iterator for Bisection {
    type Item = SearchStep;

    fn next(&mut self) -> Option<SearchStep> {
        if self.remaining == 0 || self.within_tolerance(&self.current) {
            return None;
        }
        let SearchStep {
            mut low,
            lightness,
            mut high,
            luminance,
            ..
        } = self.current;

        let next = if luminance > self.target {
            // Trop clair : on descend.
            high = lightness;
            (lightness + low) / 2.0
        } else {
            low = lightness;
            (lightness + high) / 2.0
        };

        self.current = evaluate(self.hsl, low, next, high);
        self.remaining -= 1;
        Some(self.current)
    }
}

fn evaluate(hsl: Hsl, low: f64, lightness: f64, high: f64) -> SearchStep {
    let channels = hsl_to_rgb(hsl.with_lightness(lightness));
    SearchStep {
        low,
        lightness,
        high,
        luminance: relative_luminance_f64(channels),
        channels,
    }
}

/// Inversion par recherche de luminance cible.
///
/// # Example
/// ```
/// use lf_core::color::Rgb;
/// use lf_core::luminance::relative_luminance;
/// use lf_core::traits::Invert;
/// use lf_invert::LuminanceSearch;
///
/// let out = LuminanceSearch::default().invert(Rgb::WHITE);
/// assert!(out.converged);
/// assert!((relative_luminance(out.color) - 0.0529).abs() < 0.05);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LuminanceSearch {
    params: SearchParams,
}

impl LuminanceSearch {
    #[must_use]
    pub const fn new(params: SearchParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> SearchParams {
        self.params
    }

    /// The bisection for `color`, for callers that want every step.
    ///
    /// # Example
    /// ```
    /// use lf_core::color::Rgb;
    /// use lf_invert::LuminanceSearch;
    ///
    /// let search = LuminanceSearch::default().steps(Rgb::new(0x33, 0x66, 0x99));
    /// let seed = search.seed();
    /// assert!(seed.low <= seed.lightness && seed.lightness <= seed.high);
    /// assert!(search.count() <= 6);
    /// ```
    #[must_use]
    pub fn steps(&self, color: Rgb) -> Bisection {
        Bisection::new(color, self.params)
    }
}

impl Invert for LuminanceSearch {
    fn invert(&self, color: Rgb) -> Inversion {
        let search = self.steps(color);
        let target = search.target();
        let tolerance = search.tolerance;

        let mut last = search.seed();
        let mut iterations = 0;
        for step in search {
            last = step;
            iterations += 1;
        }

        Inversion {
            color: last.color(),
            converged: (target - last.luminance).abs() < tolerance,
            iterations,
        }
    }

    fn name(&self) -> &'static str {
        "luminance"
    }
}
