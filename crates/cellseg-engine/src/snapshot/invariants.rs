use crate::{
    document::DocumentMetrics,
    intervals::{Interval, MarkersPresence},
    layout::LeafChain,
};

/// Validates partition invariants.
///
/// Asserts that:
/// - Intervals start at line 0 and end at `max(line_count, 1)`
/// - Adjacent intervals share their boundary line (no gaps, no overlaps)
/// - Ordinals are sequential from 0
/// - Only the first interval may be a synthetic (marker-less) one
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check<M: DocumentMetrics + ?Sized, D>(doc: &M, intervals: &[Interval<D>]) {
    let end = doc.line_count().max(1);
    assert!(!intervals.is_empty(), "partition is empty (line count {end})");
    assert_eq!(intervals[0].lines.start, 0, "partition does not start at line 0");
    assert_eq!(
        intervals[intervals.len() - 1].lines.end,
        end,
        "partition does not end at line {end}"
    );

    for (i, iv) in intervals.iter().enumerate() {
        assert_eq!(iv.ordinal, i, "ordinal gap at interval {i}");
        assert!(
            iv.lines.start <= iv.lines.end,
            "interval {i} runs backwards: {:?}",
            iv.lines
        );
        if i > 0 {
            assert_eq!(
                iv.markers,
                MarkersPresence::Top,
                "interval {i} is synthetic but not first"
            );
        }
    }

    for pair in intervals.windows(2) {
        assert_eq!(
            pair[0].lines.end, pair[1].lines.start,
            "gap or overlap between intervals {} and {}",
            pair[0].ordinal, pair[1].ordinal
        );
    }
}

/// Validates leaf chain links.
///
/// Asserts that `next`/`previous` are mutual and leaf spans increase.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_chain(chain: &LeafChain) {
    for (id, leaf) in chain.iter() {
        if let Some(next) = leaf.next() {
            let n = chain
                .get(next)
                .unwrap_or_else(|| panic!("{id:?} links to dead leaf {next:?}"));
            assert_eq!(n.previous(), Some(id), "{next:?} does not link back to {id:?}");
            assert!(
                leaf.span().end <= n.span().start,
                "leaf spans out of order: {:?} then {:?}",
                leaf.span(),
                n.span()
            );
        }
        assert!(
            leaf.whitespace_before().span.end <= leaf.span().start,
            "whitespace of {id:?} overlaps its leaf"
        );
    }
}
