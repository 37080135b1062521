/*!
Error taxonomy (spec §7).

Arithmetic itself never fails: every numeric edge case (`0/0`,
overflow, underflow, domain errors in the transcendentals, ...) is
encoded as a sentinel/quiet NaN or a signed infinity per the table in
spec §7, and is reported through the ordinary [`Float128`] return
value rather than a `Result`. The two rows of that table marked
"caller-visible" — argument errors and checked-conversion failures —
are the only things this crate ever returns as an [`Error`], following
the typed-error-enum convention the `thiserror`-using repositories in
this crate's lineage use for their public error surface.
*/

use thiserror::Error;

/// Top-level error type for the handful of fallible entry points
/// (`round(_, digits)` with a negative digit count, checked
/// conversions, and parsing through [`crate::parse::parse`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated a documented precondition (spec §7
    /// "Argument error").
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// A checked conversion's source value does not fit the
    /// destination type (spec §7 "Conversion failure").
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// The input text did not match the parse grammar of spec §4.7.
    #[error(transparent)]
    Parse(#[from] ParseFloat128Error),
}

/// Argument-error causes (spec §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// `round(x, digits)` was called with a negative digit count.
    #[error("round digits must be non-negative, got {0}")]
    NegativeDigits(i32),
    /// A requested rounding mode other than round-to-nearest-ties-to-even
    /// was requested; this engine implements only that mode (spec §1
    /// Non-goals, §4.5.7).
    #[error("unsupported rounding mode: only round-to-nearest-ties-to-even is implemented")]
    UnsupportedRoundingMode,
    /// A formatting configuration named an out-of-range negative-number
    /// pattern (spec §6.2: patterns `0..=4` are defined).
    #[error("invalid negative number pattern: {0}")]
    InvalidNegativePattern(u8),
}

/// Checked-conversion failure (spec §7 "Conversion failure").
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("value does not fit in the destination type")]
pub struct ConversionError;

/// Parse failure (spec §7 "Parse failure"); `parse` surfaces this,
/// while `try_parse` collapses it to `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid binary128 literal: {0:?}")]
pub struct ParseFloat128Error(pub(crate) String);
