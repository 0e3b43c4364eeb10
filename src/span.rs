use serde::{Deserialize, Serialize};

use crate::error::SpanError;
use crate::key::{is_adjacent, is_prefix_of, Collatable};

/// The result of comparing two spans' positions relative to each other.
///
/// Touching or prefix-end-adjacent spans are folded into the `*EqualToStart`
/// and `*EndEndAfter` tags rather than getting a dedicated `Adjacent` tag,
/// so that `merge_ascending` can treat "touching" and "overlapping" the same
/// way with a single branch per comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpanComparison {
    Equal,
    Before,
    StartBeforeEndEqualToStart,
    StartBeforeEndWithin,
    StartBeforeEndEqual,
    StartBeforeEndAfter,
    StartEqualEndWithin,
    StartEqualEndAfter,
    StartWithinEndWithin,
    StartWithinEndEqual,
    StartWithinEndAfter,
    StartEqualToEndEndAfter,
    After,
}

/// A half-open key interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span<K> {
    start: K,
    end: K,
}

impl<K: Collatable + Clone> Span<K> {
    /// Builds a span from `start` and `end`. Panics (in debug builds) if
    /// `end < start` under the byte ordering - a malformed span is a
    /// programmer error, not a recoverable runtime condition; see
    /// [`Span::try_new`] for a checked alternative.
    pub fn new(start: K, end: K) -> Self {
        debug_assert!(start.to_bytes() <= end.to_bytes(), "Span constructed with end < start");
        Self { start, end }
    }

    /// Checked constructor for callers that cannot guarantee `start <= end`
    /// ahead of time.
    pub fn try_new(start: K, end: K) -> Result<Self, SpanError> {
        if start.to_bytes() > end.to_bytes() { Err(SpanError::Inverted) } else { Ok(Self { start, end }) }
    }

    pub fn start(&self) -> &K { &self.start }

    pub fn end(&self) -> &K { &self.end }

    /// Compares `self` against `other`, returning one of the thirteen
    /// positional tags. See the module-level documentation in the span
    /// algebra specification for the full lattice.
    pub fn compare(&self, other: &Span<K>) -> SpanComparison {
        let s = self.start.to_bytes();
        let e = self.end.to_bytes();
        let s_prime = other.start.to_bytes();
        let e_prime = other.end.to_bytes();

        if s < s_prime {
            if e == s_prime || is_adjacent(&self.end, &other.start) {
                return SpanComparison::StartBeforeEndEqualToStart;
            }
            if e < s_prime {
                return SpanComparison::Before;
            }
            if e == e_prime {
                return SpanComparison::StartBeforeEndEqual;
            }
            if e < e_prime || is_prefix_of(&e, &e_prime) {
                return SpanComparison::StartBeforeEndWithin;
            }
            return SpanComparison::StartBeforeEndAfter;
        }

        if s == s_prime {
            if e == e_prime {
                return SpanComparison::Equal;
            }
            if e < e_prime || is_prefix_of(&e, &e_prime) {
                return SpanComparison::StartEqualEndWithin;
            }
            return SpanComparison::StartEqualEndAfter;
        }

        if s < e_prime {
            if e == e_prime {
                return SpanComparison::StartWithinEndEqual;
            }
            if e < e_prime || is_prefix_of(&e, &e_prime) {
                return SpanComparison::StartWithinEndWithin;
            }
            return SpanComparison::StartWithinEndAfter;
        }

        if s == e_prime || is_adjacent(&self.start, &other.end) {
            return SpanComparison::StartEqualToEndEndAfter;
        }

        SpanComparison::After
    }
}
