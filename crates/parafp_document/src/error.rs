use thiserror::Error;

/// Errors produced by the document model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("invalid page range: start {start} exceeds end {end}")]
    InvalidRange { start: u32, end: u32 },
    #[error("no block at stream {stream_index}, block {block_index}")]
    BlockOutOfBounds {
        stream_index: usize,
        block_index: usize,
    },
}
