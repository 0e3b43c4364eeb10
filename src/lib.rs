//! Key-range span algebra: half-open `[start, end)` intervals over an
//! arbitrary byte-collatable key space, a positional comparison lattice
//! between pairs of spans, and `merge_ascending`, the canonical-form
//! operator that folds an unordered, overlap- and duplicate-laden span
//! list into a sorted, disjoint, adjacency-fused sequence.
//!
//! Callers that don't already have their own key type can use [`ByteKey`]
//! for a `Vec<u8>`-backed `Collatable` implementation.

mod error;
mod key;
mod merge;
mod span;
mod spans;

pub use error::SpanError;
pub use key::{ByteKey, Collatable};
pub use merge::merge_ascending;
pub use span::{Span, SpanComparison};
pub use spans::Spans;
