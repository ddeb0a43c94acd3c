use std::path::PathBuf;

use clap::Parser;

/// lumaflip — inverse la clarté des couleurs hexadécimales d'un texte.
///
/// Reads lines, rewrites the first `rrggbb` run of each, writes the rest
/// of every line untouched.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML. Sans lui, les défauts s'appliquent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stratégie : brightness, lightness, luminance.
    #[arg(long)]
    pub strategy: Option<String>,

    /// Fichier d'entrée. Défaut : stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Fichier de sortie. Défaut : stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Traiter les lignes en parallèle (l'ordre de sortie est conservé).
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
