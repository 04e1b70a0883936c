use crate::document::DocumentMetrics;

use super::{
    error::PartitionError,
    types::{Boundary, CellKind, Interval, Marker, MarkersPresence},
};

/// Builds the ordered boundary list for `markers`.
///
/// A synthetic `Raw` boundary carrying `first` is prepended when there are no
/// markers or the first one is not on line 0. A synthetic `Raw` boundary
/// carrying `last` always closes the list at `max(line_count, 1)`.
///
/// # Errors
/// [`PartitionError::UnorderedMarkers`] if marker offsets decrease. Equal
/// offsets are accepted and keep their input order.
pub fn boundaries<M, D>(
    doc: &M,
    markers: &[Marker<D>],
    first: D,
    last: D,
) -> Result<Vec<Boundary<D>>, PartitionError>
where
    M: DocumentMetrics + ?Sized,
    D: Clone,
{
    check_order(markers)?;

    let mut out = Vec::with_capacity(markers.len() + 2);

    let first_line = markers.first().map(|m| doc.line_number_of(m.offset));
    if first_line != Some(0) {
        out.push(Boundary {
            line: 0,
            kind: CellKind::Raw,
            markers: MarkersPresence::None,
            data: first,
        });
    }

    for m in markers {
        let line = doc.line_number_of(m.offset);
        log::trace!("marker {} ({}) at offset {} -> line {line}", m.ordinal, m.kind, m.offset);
        out.push(Boundary {
            line,
            kind: m.kind,
            markers: MarkersPresence::Top,
            data: m.data.clone(),
        });
    }

    out.push(Boundary {
        line: doc.line_count().max(1),
        kind: CellKind::Raw,
        markers: MarkersPresence::None,
        data: last,
    });

    Ok(out)
}

/// Partitions the document into intervals, one per pair of adjacent
/// boundaries. Interval `i` spans `[boundary[i].line, boundary[i + 1].line)`
/// and inherits the kind, marker presence and data of `boundary[i]`.
///
/// # Errors
/// Same as [`boundaries`].
pub fn partition_intervals<M, D>(
    doc: &M,
    markers: &[Marker<D>],
    first: D,
    last: D,
) -> Result<Vec<Interval<D>>, PartitionError>
where
    M: DocumentMetrics + ?Sized,
    D: Clone,
{
    let bounds = boundaries(doc, markers, first, last)?;

    let mut intervals = Vec::with_capacity(bounds.len() - 1);
    let mut iter = bounds.into_iter().peekable();
    while let Some(b) = iter.next() {
        let Some(next) = iter.peek() else { break };
        intervals.push(Interval {
            ordinal: intervals.len(),
            kind: b.kind,
            lines: b.line..next.line,
            markers: b.markers,
            data: b.data,
        });
    }

    log::debug!(
        "partitioned {} lines into {} intervals from {} markers",
        doc.line_count(),
        intervals.len(),
        markers.len()
    );
    Ok(intervals)
}

/// The interval containing `line`, skipping zero-length intervals.
pub fn find_interval<D>(intervals: &[Interval<D>], line: usize) -> Option<&Interval<D>> {
    let idx = intervals.partition_point(|iv| iv.lines.end <= line);
    intervals.get(idx).filter(|iv| iv.contains_line(line))
}

fn check_order<D>(markers: &[Marker<D>]) -> Result<(), PartitionError> {
    for (i, pair) in markers.windows(2).enumerate() {
        if pair[1].offset < pair[0].offset {
            return Err(PartitionError::UnorderedMarkers {
                index: i + 1,
                offset: pair[1].offset,
                previous: pair[0].offset,
            });
        }
    }
    Ok(())
}
