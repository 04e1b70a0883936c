use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error(
        "marker {index} at offset {offset} precedes the previous marker at offset {previous}"
    )]
    UnorderedMarkers {
        index: usize,
        offset: usize,
        previous: usize,
    },
}
