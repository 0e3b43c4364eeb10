use tracing::trace;

use crate::key::Collatable;
use crate::span::{Span, SpanComparison};

/// Merges an unordered, potentially overlapping and/or duplicated collection
/// of spans into a canonical set: ascending, disjoint, and with adjacency
/// (per [`crate::key::is_adjacent`], folded into the comparison lattice)
/// treated as overlap.
///
/// Handles spans with keys of different lengths, where one might be a
/// prefix of another.
pub fn merge_ascending<K: Collatable + Clone>(spans: Vec<Span<K>>) -> Vec<Span<K>> {
    if spans.len() <= 1 {
        return spans;
    }

    let mut unique: Vec<Span<K>> = Vec::new();

    for span in spans {
        let mut found = false;
        let mut i = 0;

        while i < unique.len() {
            match span.compare(&unique[i]) {
                SpanComparison::Before => {
                    trace!(index = i, "merge_ascending: inserting span before existing entry");
                    unique.insert(i, span.clone());
                    found = true;
                    break;
                }
                SpanComparison::StartBeforeEndEqualToStart
                | SpanComparison::StartBeforeEndWithin
                | SpanComparison::StartBeforeEndEqual => {
                    unique[i] = Span::new(span.start().clone(), unique[i].end().clone());
                    found = true;
                    i += 1;
                }
                SpanComparison::StartBeforeEndAfter => {
                    trace!(index = i, "merge_ascending: span swallows existing entry and its tail");
                    remove_tail_covered_by(&mut unique, i, &span.end().to_bytes());
                    unique[i] = Span::new(span.start().clone(), span.end().clone());
                    found = true;
                    break;
                }
                SpanComparison::StartEqualEndWithin | SpanComparison::Equal | SpanComparison::StartWithinEndWithin | SpanComparison::StartWithinEndEqual => {
                    found = true;
                    break;
                }
                SpanComparison::StartEqualEndAfter | SpanComparison::StartWithinEndAfter | SpanComparison::StartEqualToEndEndAfter => {
                    trace!(index = i, "merge_ascending: extending existing entry's end to cover span");
                    remove_tail_covered_by(&mut unique, i, &span.end().to_bytes());
                    unique[i] = Span::new(unique[i].start().clone(), span.end().clone());
                    found = true;
                    break;
                }
                SpanComparison::After => {
                    i += 1;
                }
            }
        }

        if !found {
            unique.push(span);
        }
    }

    coalesce_residual_overlaps(unique)
}

/// Removes every item strictly after `start_index` whose end is `<= end`
/// (compared as bytes), closing the resulting gap. The item at `start_index`
/// itself is never removed here - the caller immediately overwrites it with
/// the merged span, so its slot must survive even when nothing past it
/// qualifies for removal. Matches the reference absorption rule: it scans
/// the whole remainder of the list rather than stopping at the first
/// non-matching item, but because `unique` is sorted by start (and
/// therefore, between fusions, by end) the matching items always form a
/// contiguous run immediately following `start_index`.
fn remove_tail_covered_by<K: Collatable + Clone>(unique: &mut Vec<Span<K>>, start_index: usize, end: &[u8]) {
    let mut last_matching = start_index;
    for (j, item) in unique.iter().enumerate().skip(start_index + 1) {
        if item.end().to_bytes().as_slice() <= end {
            last_matching = j;
        }
    }
    if last_matching > start_index {
        unique.drain(start_index + 1..=last_matching);
    }
}

/// Final coalescing pass closing the residual-overlap edge case: the
/// incremental sweep above extends `unique[i]`'s end on an `After`-style
/// match but does not restart the scan, so the extended span can (rarely)
/// still overlap or be adjacent to the *next* preserved element. A single
/// left-to-right fuse over the now-sorted list resolves this unconditionally.
///
/// Fusing two adjacent list entries reuses the same comparison lattice the
/// incremental sweep uses, rather than a raw byte-max of the two ends - a
/// prefix-contained end can sort as the lexicographically larger byte string
/// while still being the logically smaller bound (see `StartBeforeEndWithin`).
fn coalesce_residual_overlaps<K: Collatable + Clone>(unique: Vec<Span<K>>) -> Vec<Span<K>> {
    let mut out: Vec<Span<K>> = Vec::with_capacity(unique.len());

    for span in unique {
        let fuse_end = match out.last() {
            Some(last) => match last.compare(&span) {
                SpanComparison::Before => None,
                SpanComparison::StartBeforeEndEqualToStart
                | SpanComparison::StartBeforeEndWithin
                | SpanComparison::StartEqualEndWithin
                | SpanComparison::StartWithinEndWithin
                | SpanComparison::StartWithinEndEqual => Some(span.end().clone()),
                SpanComparison::StartBeforeEndEqual | SpanComparison::Equal => Some(last.end().clone()),
                SpanComparison::StartBeforeEndAfter
                | SpanComparison::StartEqualEndAfter
                | SpanComparison::StartWithinEndAfter
                | SpanComparison::StartEqualToEndEndAfter
                | SpanComparison::After => Some(last.end().clone()),
            },
            None => None,
        };

        match fuse_end {
            Some(end) => {
                trace!("merge_ascending: closure pass fusing residual overlap");
                let start = out.last().unwrap().start().clone();
                *out.last_mut().unwrap() = Span::new(start, end);
            }
            None => out.push(span),
        }
    }

    out
}
