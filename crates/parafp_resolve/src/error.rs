use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal preconditions: the run cannot produce a meaningful report and
/// must abort. Distinct from per-row failures ([`RowError`]) and from
/// unmatched references, which are ordinary results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("document has no content streams")]
    NoCandidateStreams,
    #[error("no stream carries body text inside pages {start}..={end}")]
    NoBodyStream { start: u32, end: u32 },
    #[error("reference list is empty")]
    EmptyReferenceList,
    #[error("invalid page range: start {start} exceeds end {end}")]
    InvalidRange { start: u32, end: u32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A single row that failed to resolve against the current document state.
///
/// Recorded and carried in the output; the surrounding run continues.
/// Typical cause: a `(stream, block)` position recorded before a
/// layout-repair pass that re-flowed the section.
#[derive(Debug, Error, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[error("row ({stream_index}, {block_index}) failed to resolve: {reason}")]
pub struct RowError {
    pub stream_index: usize,
    pub block_index: usize,
    pub reason: String,
}
