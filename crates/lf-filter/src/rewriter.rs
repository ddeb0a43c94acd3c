use std::borrow::Cow;
use std::ops::Range;

use lf_core::color::Rgb;
use lf_core::error::CoreError;
use lf_core::traits::{Invert, Inversion};
use regex::bytes::Regex;

use crate::error::FilterError;

/// Six contiguous lowercase hex digits. Uppercase is deliberately not matched.
pub const HEX_RGB_PATTERN: &str = "[0-9a-f]{6}";

/// Détail d'une substitution appliquée à une ligne.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    /// Byte range of the replaced run in the input line.
    pub span: Range<usize>,
    /// The color found in the line.
    pub original: Rgb,
    /// What the strategy made of it.
    pub inversion: Inversion,
}

/// A processed line: either the input borrowed as-is, or a rewritten copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOutcome<'l> {
    /// The line to write, borrowed when nothing was replaced.
    pub line: Cow<'l, [u8]>,
    /// The replacement made, if any.
    pub substitution: Option<Substitution>,
}

impl<'l> LineOutcome<'l> {
    const fn unchanged(line: &'l [u8]) -> Self {
        Self {
            line: Cow::Borrowed(line),
            substitution: None,
        }
    }
}

/// Réécrit la première couleur hexadécimale de chaque ligne.
///
/// Only the first match per line is processed; later runs on the same line
/// are left as they are.
///
/// # Example
/// ```
/// use lf_filter::LineRewriter;
/// use lf_invert::BrightnessInversion;
///
/// let rewriter = LineRewriter::new(Box::new(BrightnessInversion)).unwrap();
/// let out = rewriter.rewrite(b"color: #000000;").unwrap();
/// assert_eq!(&*out.line, b"color: #ffffff;");
/// ```
pub struct LineRewriter {
    pattern: Regex,
    inverter: Box<dyn Invert>,
}

impl LineRewriter {
    /// Compile the color pattern and bind the strategy.
    ///
    /// # Errors
    /// Returns [`FilterError::Pattern`] if the pattern fails to compile.
    pub fn new(inverter: Box<dyn Invert>) -> Result<Self, FilterError> {
        Ok(Self {
            pattern: Regex::new(HEX_RGB_PATTERN)?,
            inverter,
        })
    }

    /// Name of the bound strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.inverter.name()
    }

    /// Rewrite one line (without its terminator).
    ///
    /// Lines without a match are returned borrowed and byte-identical.
    ///
    /// # Errors
    /// Returns a [`CoreError`] if the matched run does not decode; the
    /// caller decides what to do with the line.
    pub fn rewrite<'l>(&self, line: &'l [u8]) -> Result<LineOutcome<'l>, CoreError> {
        let Some(found) = self.pattern.find(line) else {
            return Ok(LineOutcome::unchanged(line));
        };

        let original = Rgb::from_hex(&String::from_utf8_lossy(found.as_bytes()))?;
        let inversion = self.inverter.invert(original);

        let mut out = Vec::with_capacity(line.len());
        out.extend_from_slice(&line[..found.start()]);
        out.extend_from_slice(inversion.color.to_hex().as_bytes());
        out.extend_from_slice(&line[found.end()..]);

        Ok(LineOutcome {
            line: Cow::Owned(out),
            substitution: Some(Substitution {
                span: found.range(),
                original,
                inversion,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use lf_core::luminance::relative_luminance;
    use lf_invert::{BrightnessInversion, LuminanceSearch};

    use super::*;

    fn luminance_rewriter() -> LineRewriter {
        LineRewriter::new(Box::new(LuminanceSearch::default())).unwrap()
    }

    fn rewrite(rewriter: &LineRewriter, line: &str) -> String {
        let out = rewriter.rewrite(line.as_bytes()).unwrap();
        String::from_utf8(out.line.into_owned()).unwrap()
    }

    #[test]
    fn surrounding_text_is_preserved() {
        let rewriter = luminance_rewriter();
        let out = rewriter.rewrite(b"background-color: #336699;").unwrap();
        let line = String::from_utf8(out.line.to_vec()).unwrap();
        assert!(line.starts_with("background-color: #"), "{line}");
        assert!(line.ends_with(';'), "{line}");
        assert_eq!(line.len(), "background-color: #336699;".len());
        assert_ne!(line, "background-color: #336699;");

        let sub = out.substitution.unwrap();
        assert_eq!(sub.span, 19..25);
        assert_eq!(sub.original, Rgb::new(0x33, 0x66, 0x99));
        assert_eq!(&line[19..25], sub.inversion.color.to_hex());
        assert!(relative_luminance(sub.inversion.color) > relative_luminance(sub.original));
    }

    #[test]
    fn lines_without_colors_pass_through() {
        let rewriter = luminance_rewriter();
        for line in ["", "plain text", "#abc", "#AABBCC", "12345", "zzzzzz", "ab cd ef"] {
            let out = rewriter.rewrite(line.as_bytes()).unwrap();
            assert!(matches!(out.line, Cow::Borrowed(_)), "{line:?}");
            assert_eq!(&*out.line, line.as_bytes());
            assert!(out.substitution.is_none());
        }
    }

    #[test]
    fn only_first_color_is_rewritten() {
        let rewriter = LineRewriter::new(Box::new(BrightnessInversion)).unwrap();
        assert_eq!(rewrite(&rewriter, "#000000 #112233"), "#ffffff #112233");

        let rewriter = luminance_rewriter();
        let line = rewrite(&rewriter, "#aabbcc #112233");
        assert_ne!(&line[..7], "#aabbcc");
        assert!(line.ends_with(" #112233"), "{line}");
    }

    #[test]
    fn first_six_digits_of_a_longer_run() {
        let rewriter = LineRewriter::new(Box::new(BrightnessInversion)).unwrap();
        assert_eq!(rewrite(&rewriter, "x000000ff"), "xffffffff");
    }

    #[test]
    fn white_and_black_in_context() {
        let rewriter = luminance_rewriter();
        assert_eq!(rewrite(&rewriter, "fg=#ffffff"), "fg=#3f3f3f");
        assert_eq!(rewrite(&rewriter, "bg=#000000"), "bg=#ffffff");
    }

    #[test]
    fn non_utf8_bytes_around_a_color_survive() {
        let rewriter = LineRewriter::new(Box::new(BrightnessInversion)).unwrap();
        let out = rewriter.rewrite(b"\xff\xfe 000000 \xc3").unwrap();
        assert_eq!(&*out.line, b"\xff\xfe ffffff \xc3");
    }

    #[test]
    fn strategy_name_is_exposed() {
        assert_eq!(luminance_rewriter().strategy_name(), "luminance");
    }
}
