//! Line scanning and stream driving for lumaflip.
//!
//! Finds the first embedded `rrggbb` run of each line, hands it to an
//! inversion strategy, and splices the result back without touching any
//! other byte of the line.

pub mod error;
pub mod rewriter;
pub mod stream;

pub use error::FilterError;
pub use rewriter::{HEX_RGB_PATTERN, LineOutcome, LineRewriter, Substitution};
pub use stream::{FilterStats, filter_stream};
