use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use lf_core::config::{InvertConfig, Strategy};
use lf_filter::{FilterStats, LineRewriter, filter_stream};

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr, stdout reste réservé au texte filtré)
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config puis appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    apply_overrides(&mut config, &cli);

    // 4. Construire la stratégie et le réécrivain
    let rewriter = LineRewriter::new(lf_invert::inverter(&config))?;
    log::info!(
        "Stratégie : {} (parallèle : {})",
        rewriter.strategy_name(),
        config.parallel
    );

    // 5. Filtrer
    let stats = run(&cli, &rewriter, config.parallel)?;
    log::info!(
        "{} lignes, {} substitutions, {} sans convergence, {} ignorées",
        stats.lines,
        stats.substitutions,
        stats.unconverged,
        stats.failures
    );

    Ok(())
}

/// Wire input and output (files or stdio) and run the filter.
fn run(cli: &cli::Cli, rewriter: &LineRewriter, parallel: bool) -> Result<FilterStats> {
    let reader: Box<dyn BufRead> = match cli.input {
        Some(ref path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Impossible d'ouvrir {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Impossible de créer {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    filter_stream(reader, writer, rewriter, parallel).context("Échec du filtrage")
}

/// Load `--config` if given; a missing file falls back to defaults.
fn resolve_config(cli: &cli::Cli) -> Result<InvertConfig> {
    match cli.config {
        Some(ref path) if path.exists() => lf_core::config::load_config(path),
        Some(ref path) => {
            log::warn!(
                "Config introuvable : {}. Utilisation des défauts.",
                path.display()
            );
            Ok(InvertConfig::default())
        }
        None => Ok(InvertConfig::default()),
    }
}

/// Apply CLI flags over the loaded configuration.
fn apply_overrides(config: &mut InvertConfig, cli: &cli::Cli) {
    if let Some(ref name) = cli.strategy {
        match name.parse::<Strategy>() {
            Ok(strategy) => config.strategy = strategy,
            Err(e) => log::warn!("{e}, stratégie {:?} conservée.", config.strategy),
        }
    }
    if cli.parallel {
        config.parallel = true;
    }
}
