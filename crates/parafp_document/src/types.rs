use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// The atomic unit of comparison: one paragraph-equivalent of text.
///
/// `word_count` and `page_offset` are derived by the layout collaborator
/// from the block's position in its container; this crate treats both as
/// given. `style` is carried for collaborators (bullet normalization,
/// widow repair) and is never interpreted during identity resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentBlock {
    /// Raw text, possibly containing decoration markers and invisible
    /// characters.
    pub text: String,
    /// Number of words in the block.
    pub word_count: u32,
    /// Zero-based offset, in the document's layout sequence, of the page
    /// on which the block begins.
    pub page_offset: u32,
    /// Paragraph style tag, if the container exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// One independent flow of text within a document.
///
/// Identity is the stable `id` (the container's handle in the layout
/// document) together with the stream's position; two streams are never
/// considered equal by content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentStream {
    /// Stable container handle assigned by the layout collaborator.
    pub id: String,
    /// Blocks in document order.
    pub blocks: Vec<ContentBlock>,
}

/// An ordered collection of content streams, read-only for this layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub streams: Vec<ContentStream>,
}

impl Document {
    /// Look up a block by `(stream, block)` position against the current
    /// document state.
    ///
    /// Positions are often recorded before layout-repair passes run, so an
    /// out-of-bounds lookup is expected input, not a caller bug; it maps to
    /// a per-row error upstream.
    pub fn block_at(
        &self,
        stream_index: usize,
        block_index: usize,
    ) -> Result<&ContentBlock, DocumentError> {
        self.streams
            .get(stream_index)
            .and_then(|stream| stream.blocks.get(block_index))
            .ok_or(DocumentError::BlockOutOfBounds {
                stream_index,
                block_index,
            })
    }
}

/// Inclusive bounds over page offsets, scoping a run to one section of a
/// larger document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    /// Build a validated range. `start` and `end` are both inclusive.
    pub fn new(start: u32, end: u32) -> Result<Self, DocumentError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Re-check the bounds, for ranges that arrived via deserialization.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.start > self.end {
            return Err(DocumentError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Whether a page offset falls inside the range.
    pub fn contains(&self, page_offset: u32) -> bool {
        self.start <= page_offset && page_offset <= self.end
    }
}
