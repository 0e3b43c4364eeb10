use thiserror::Error;

/// Diagnostic error type for the one documented failure mode of the span
/// algebra: a malformed `[start, end)` pair with `end < start`.
///
/// `merge_ascending` and `Span::compare` are total over well-formed spans and
/// never construct this error themselves; it only arises from
/// [`crate::Span::try_new`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    #[error("span end precedes span start")]
    Inverted,
}
