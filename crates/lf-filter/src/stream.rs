use std::borrow::Cow;
use std::io::{BufRead, Read, Write};

use lf_core::error::CoreError;
use rayon::prelude::*;

use crate::error::FilterError;
use crate::rewriter::{LineRewriter, Substitution};

/// Compteurs d'une exécution du filtre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read.
    pub lines: usize,
    /// Lines where a color was replaced.
    pub substitutions: usize,
    /// Replacements whose search ran out of steps.
    pub unconverged: usize,
    /// Lines passed through because their color could not be processed.
    pub failures: usize,
}

enum LineReport {
    Unchanged,
    Substituted(Substitution),
    Failed(CoreError),
}

impl FilterStats {
    fn record(&mut self, line_no: usize, report: &LineReport) {
        self.lines += 1;
        match report {
            LineReport::Unchanged => {}
            LineReport::Substituted(sub) => {
                self.substitutions += 1;
                log::debug!(
                    "Ligne {line_no} : {} → {} ({} itérations)",
                    sub.original,
                    sub.inversion.color,
                    sub.inversion.iterations
                );
                if !sub.inversion.converged {
                    self.unconverged += 1;
                    log::warn!(
                        "Ligne {line_no} : {} n'a pas convergé en {} itérations, résultat approché {}",
                        sub.original,
                        sub.inversion.iterations,
                        sub.inversion.color
                    );
                }
            }
            LineReport::Failed(e) => {
                self.failures += 1;
                log::warn!("Ligne {line_no} ignorée : {e}");
            }
        }
    }
}

/// Split a raw line into its content and its `\n` terminator (possibly empty).
fn split_terminator(raw: &[u8]) -> (&[u8], &[u8]) {
    match raw.last() {
        Some(b'\n') => raw.split_at(raw.len() - 1),
        _ => (raw, &[][..]),
    }
}

/// Rewrite one line, isolating any failure to that line.
fn rewrite_line<'l>(rewriter: &LineRewriter, content: &'l [u8]) -> (Cow<'l, [u8]>, LineReport) {
    match rewriter.rewrite(content) {
        Ok(outcome) => {
            let report = outcome
                .substitution
                .map_or(LineReport::Unchanged, LineReport::Substituted);
            (outcome.line, report)
        }
        Err(e) => (Cow::Borrowed(content), LineReport::Failed(e)),
    }
}

/// Filtre un flux ligne à ligne, de `reader` vers `writer`.
///
/// Output line `i` always corresponds to input line `i`. Line terminators
/// are written back exactly as read, so a line without a color is copied
/// byte for byte. With `parallel`, the whole input is read first and the
/// lines are rewritten on the rayon pool.
///
/// # Errors
/// Returns [`FilterError::Io`] if reading or writing fails. Per-line
/// problems are logged and never abort the run.
///
/// # Example
/// ```
/// use lf_filter::{LineRewriter, filter_stream};
/// use lf_invert::BrightnessInversion;
///
/// let rewriter = LineRewriter::new(Box::new(BrightnessInversion)).unwrap();
/// let mut out = Vec::new();
/// let stats = filter_stream(&b"a: #000000\nb\n"[..], &mut out, &rewriter, false).unwrap();
/// assert_eq!(out, b"a: #ffffff\nb\n");
/// assert_eq!(stats.lines, 2);
/// assert_eq!(stats.substitutions, 1);
/// ```
pub fn filter_stream<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    rewriter: &LineRewriter,
    parallel: bool,
) -> Result<FilterStats, FilterError> {
    if parallel {
        filter_parallel(reader, writer, rewriter)
    } else {
        filter_sequential(reader, writer, rewriter)
    }
}

fn filter_sequential<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    rewriter: &LineRewriter,
) -> Result<FilterStats, FilterError> {
    let mut stats = FilterStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let (content, terminator) = split_terminator(&buf);
        let (line, report) = rewrite_line(rewriter, content);
        stats.record(stats.lines + 1, &report);
        writer.write_all(&line)?;
        writer.write_all(terminator)?;
    }

    writer.flush()?;
    Ok(stats)
}

fn filter_parallel<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    rewriter: &LineRewriter,
) -> Result<FilterStats, FilterError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let raw_lines: Vec<&[u8]> = input.split_inclusive(|&b| b == b'\n').collect();

    // collect() conserve l'ordre d'entrée.
    let rewritten: Vec<_> = raw_lines
        .par_iter()
        .map(|&raw| {
            let (content, terminator) = split_terminator(raw);
            let (line, report) = rewrite_line(rewriter, content);
            (line, terminator, report)
        })
        .collect();

    let mut stats = FilterStats::default();
    for (line, terminator, report) in &rewritten {
        stats.record(stats.lines + 1, report);
        writer.write_all(line)?;
        writer.write_all(terminator)?;
    }

    writer.flush()?;
    Ok(stats)
}
