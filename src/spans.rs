use serde::{Deserialize, Serialize};

use crate::key::Collatable;
use crate::span::Span;

/// An explicit optional list of spans.
///
/// Planner-adjacent callers need to distinguish "no span filter was
/// requested" (`has_value: false` - don't filter at all) from "the filter
/// resolved to an empty span list" (`has_value: true`, `value: []` - match
/// nothing). A bare `Option<Vec<Span<K>>>` would work too, but this mirrors
/// how this codebase names the same distinction elsewhere (`HasValue`/`Value`
/// pairs) so downstream code reads the same way it does for other optional
/// planner outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spans<K> {
    pub has_value: bool,
    pub value: Vec<Span<K>>,
}

impl<K: Collatable + Clone> Spans<K> {
    /// An explicit "no filter" marker - distinct from an empty span list.
    pub fn none() -> Self { Self { has_value: false, value: Vec::new() } }

    /// Wraps the given spans as an explicit, present filter.
    pub fn new(spans: impl IntoIterator<Item = Span<K>>) -> Self { Self { has_value: true, value: spans.into_iter().collect() } }

    pub fn is_none(&self) -> bool { !self.has_value }
}
