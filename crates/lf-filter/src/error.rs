use thiserror::Error;

/// Errors originating from the filter module.
///
/// Per-line problems never show up here: they are logged and the line is
/// passed through. Only failures that stop the whole run do.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The color pattern failed to compile.
    #[error("Motif de couleur invalide : {0}")]
    Pattern(#[from] regex::Error),

    /// Reading input or writing output failed.
    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] std::io::Error),
}
