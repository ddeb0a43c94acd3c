use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Configuration complète du filtre.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine, et
/// les défauts reproduisent le comportement de base du filtre.
///
/// # Example
/// ```
/// use lf_core::config::{InvertConfig, Strategy};
/// let config = InvertConfig::default();
/// assert_eq!(config.strategy, Strategy::LuminanceSearch);
/// assert_eq!(config.max_iterations, 6);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct InvertConfig {
    // === Inversion ===
    /// Stratégie d'inversion.
    pub strategy: Strategy,
    /// Pivot of the luminance inversion: `target = point² / L0`.
    pub inversion_point: f64,
    /// Absolute luminance tolerance that stops the search.
    pub tolerance: f64,
    /// Refinement budget of the search.
    pub max_iterations: u32,

    // === Filtre ===
    /// Traiter les lignes en parallèle (rayon). L'ordre de sortie est conservé.
    pub parallel: bool,
}

/// Inversion strategy.
///
/// # Example
/// ```
/// use lf_core::config::Strategy;
/// assert_eq!("lightness".parse::<Strategy>().unwrap(), Strategy::Lightness);
/// assert!("sepia".parse::<Strategy>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Strategy {
    /// Per-channel brightness inversion from raw channel values.
    Brightness,
    /// HSL lightness flip, `l → 1 - l`.
    Lightness,
    /// Bisection on HSL lightness toward a target relative luminance.
    #[default]
    LuminanceSearch,
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brightness" => Ok(Self::Brightness),
            "lightness" => Ok(Self::Lightness),
            "luminance" | "luminance-search" => Ok(Self::LuminanceSearch),
            other => Err(CoreError::Config(format!(
                "stratégie inconnue '{other}' (brightness, lightness, luminance)"
            ))),
        }
    }
}

impl Default for InvertConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::LuminanceSearch,
            inversion_point: 0.23,
            tolerance: 0.005,
            max_iterations: 6,
            parallel: false,
        }
    }
}

impl InvertConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        if !self.inversion_point.is_finite() {
            self.inversion_point = Self::default().inversion_point;
        }
        if !self.tolerance.is_finite() {
            self.tolerance = Self::default().tolerance;
        }
        self.inversion_point = self.inversion_point.clamp(0.01, 1.0);
        self.tolerance = self.tolerance.clamp(1e-6, 0.5);
        self.max_iterations = self.max_iterations.min(64);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    invert: Option<InvertSection>,
    filter: Option<FilterSection>,
}

/// Invert section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct InvertSection {
    strategy: Option<Strategy>,
    inversion_point: Option<f64>,
    tolerance: Option<f64>,
    max_iterations: Option<u32>,
}

#[derive(Deserialize)]
struct FilterSection {
    parallel: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use lf_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("lumaflip.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<InvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use lf_core::config::{parse_config, Strategy};
/// let config = parse_config("[invert]\nstrategy = \"Lightness\"\n").unwrap();
/// assert_eq!(config.strategy, Strategy::Lightness);
/// assert_eq!(config.tolerance, 0.005);
/// ```
pub fn parse_config(content: &str) -> Result<InvertConfig> {
    let file: ConfigFile = toml::from_str(content)?;

    let mut config = InvertConfig::default();

    if let Some(i) = file.invert {
        if let Some(v) = i.strategy {
            config.strategy = v;
        }
        if let Some(v) = i.inversion_point {
            config.inversion_point = v;
        }
        if let Some(v) = i.tolerance {
            config.tolerance = v;
        }
        if let Some(v) = i.max_iterations {
            config.max_iterations = v;
        }
    }

    if let Some(f) = file.filter {
        if let Some(v) = f.parallel {
            config.parallel = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), InvertConfig::default());
    }

    #[test]
    fn shipped_default_file_matches_defaults() {
        let config = parse_config(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(config, InvertConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse_config(
            "[invert]\nmax_iterations = 10\n\n[filter]\nparallel = true\n",
        )
        .unwrap();
        assert_eq!(config.max_iterations, 10);
        assert!(config.parallel);
        assert_eq!(config.strategy, Strategy::LuminanceSearch);
        assert!((config.inversion_point - 0.23).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse_config(
            "[invert]\ninversion_point = 7.0\ntolerance = 0.0\nmax_iterations = 1000\n",
        )
        .unwrap();
        assert!((config.inversion_point - 1.0).abs() < f64::EPSILON);
        assert!((config.tolerance - 1e-6).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 64);
    }

    #[test]
    fn unknown_strategy_is_a_parse_error() {
        assert!(parse_config("[invert]\nstrategy = \"Sepia\"\n").is_err());
    }

    #[test]
    fn strategy_names() {
        assert_eq!("brightness".parse::<Strategy>().unwrap(), Strategy::Brightness);
        assert_eq!("luminance".parse::<Strategy>().unwrap(), Strategy::LuminanceSearch);
        assert!(matches!("Lightness".parse::<Strategy>(), Err(CoreError::Config(_))));
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[invert]\nstrategy = \"Brightness\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Brightness);
    }

    #[test]
    fn load_config_missing_file_has_context() {
        let err = load_config(Path::new("/nonexistent/lumaflip.toml")).unwrap_err();
        assert!(format!("{err}").contains("Impossible de lire"));
    }
}
