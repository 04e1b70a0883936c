use crate::{
    document::RopeDocument,
    intervals::{CellData, Interval, Marker, PartitionError, partition_intervals},
};

use super::classify::{CellLineClassifier, CellOptions};

/// Data key holding a marker's title.
pub const TITLE_KEY: &str = "title";
/// Data key classifying the synthetic boundaries.
pub const KIND_KEY: &str = "kind";

/// Scans the document for marker lines, in document order.
pub fn cell_markers(doc: &RopeDocument, options: &CellOptions) -> Vec<Marker<CellData>> {
    let classifier = CellLineClassifier::new(options);
    let mut markers = Vec::new();

    for lr in doc.lines() {
        let Some(ml) = classifier.classify(&lr) else {
            continue;
        };
        let mut data = CellData::new();
        if let Some(title) = ml.title {
            data.insert(TITLE_KEY.to_string(), title);
        }
        markers.push(Marker {
            ordinal: markers.len(),
            kind: ml.kind,
            offset: ml.span.start,
            length: ml.span.len(),
            data,
        });
    }

    log::debug!("found {} cell markers", markers.len());
    markers
}

/// Splits a document into cells: marker scan followed by partitioning.
///
/// Text before the first marker becomes a `Raw` cell tagged
/// `kind = "preamble"`.
///
/// # Errors
/// Propagates [`PartitionError`]; markers from [`cell_markers`] are always
/// ordered, so this only fails for a misbehaving document.
pub fn split_cells(
    doc: &RopeDocument,
    options: &CellOptions,
) -> Result<Vec<Interval<CellData>>, PartitionError> {
    let markers = cell_markers(doc, options);
    partition_intervals(doc, &markers, synthetic("preamble"), synthetic("eof"))
}

fn synthetic(kind: &str) -> CellData {
    CellData::from([(KIND_KEY.to_string(), kind.to_string())])
}
