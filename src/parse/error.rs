//! Defines the error types for the parse module.
use thiserror::Error;

/// Raised only when a caller opts into strict parsing.
///
/// Lenient parsing never fails; it records the same information on
/// [`ParsedDocument`](super::ParsedDocument) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Malformed expression: {unmatched_close} unmatched ')' and {unclosed_open} unclosed '(' (first at byte {first_offset})"
    )]
    MalformedExpression {
        unmatched_close: usize,
        unclosed_open: usize,
        first_offset: usize,
    },
}
