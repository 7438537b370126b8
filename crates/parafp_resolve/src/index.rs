use hashbrown::HashSet;
use parafp_canonical::{fingerprint, CanonicalConfig};
use parafp_document::{ContentStream, PageRange};
use tracing::debug;

/// Per-run lookup structure over one stream's in-range blocks.
///
/// Holds three key sets: exact fingerprint keys plus the long and short
/// legacy prefix sets. A block contributes to every set its canonical text
/// qualifies for, or to none at all when it normalizes to empty — there is
/// no partial insertion. The index lives for one verification run and is
/// never persisted.
#[derive(Debug)]
pub struct ParagraphIndex {
    pub(crate) exact: HashSet<String>,
    pub(crate) legacy80: HashSet<String>,
    pub(crate) legacy30: HashSet<String>,
    indexed_blocks: usize,
}

impl ParagraphIndex {
    /// Index every block of `stream` whose start page offset lies inside
    /// `range`.
    pub fn build(stream: &ContentStream, range: &PageRange, cfg: &CanonicalConfig) -> Self {
        let mut index = Self {
            exact: HashSet::new(),
            legacy80: HashSet::new(),
            legacy30: HashSet::new(),
            indexed_blocks: 0,
        };
        for block in &stream.blocks {
            if !range.contains(block.page_offset) {
                continue;
            }
            let Some(fp) = fingerprint(&block.text, cfg) else {
                // Whitespace-only or marker-only block: unmatchable, skipped.
                continue;
            };
            index.exact.insert(fp.key);
            if let Some(key) = fp.legacy80 {
                index.legacy80.insert(key);
            }
            if let Some(key) = fp.legacy30 {
                index.legacy30.insert(key);
            }
            index.indexed_blocks += 1;
        }
        debug!(
            stream = %stream.id,
            blocks = index.indexed_blocks,
            exact = index.exact.len(),
            legacy80 = index.legacy80.len(),
            legacy30 = index.legacy30.len(),
            "paragraph index built"
        );
        index
    }

    /// Number of blocks that produced at least an exact key.
    pub fn indexed_blocks(&self) -> usize {
        self.indexed_blocks
    }

    /// Whether no block qualified for indexing.
    pub fn is_empty(&self) -> bool {
        self.indexed_blocks == 0
    }
}
