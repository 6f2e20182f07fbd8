//! Error types for the ibarat markup engine.
//!
//! Only the inserter can fail. Parsing is total and degrades malformed markup
//! to plain text instead of reporting it.

use miette::Diagnostic;
use smol_str::SmolStr;

#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MarkupError {
    /// Selection offsets violate `start <= end <= len`.
    #[error("invalid selection range {start}..{end} for text of {len} chars")]
    #[diagnostic(
        code(ibarat::invalid_range),
        help("selection offsets are character offsets and must satisfy start <= end <= length")
    )]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Operation name that doesn't map to any toolbar control.
    #[error("unknown markup operation `{0}`")]
    #[diagnostic(
        code(ibarat::unknown_operation),
        help("expected one of: reference, bold, italic, separator")
    )]
    UnknownOperation(SmolStr),
}
