use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A character outside `0-9a-f` was handed to the hex codec.
    #[error("Chiffre hexadécimal invalide : {digit:?}")]
    InvalidHexDigit {
        /// The offending character.
        digit: char,
    },

    /// A hex color or byte did not have the expected number of digits.
    #[error("Longueur hexadécimale invalide : {expected} attendus, {found} trouvés")]
    InvalidHexLength {
        /// Number of digits required.
        expected: usize,
        /// Number of digits received.
        found: usize,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
