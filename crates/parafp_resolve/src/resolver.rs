use parafp_canonical::{fingerprint, CanonicalConfig};
use parafp_document::ReferenceRecord;
use serde::{Deserialize, Serialize};

use crate::index::ParagraphIndex;
use crate::report::truncate_chars;

/// How a reference text was identified within the index.
///
/// The tiers form a strictness gradient: exact match is the only tier
/// immune to false positives from unrelated blocks sharing a long common
/// prefix. The legacy tiers trade precision for recall against data that
/// predates the exact-key scheme, and are never consulted when the exact
/// key hits. The tier names keep the historical prefix lengths even though
/// the boundaries themselves are configurable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    Exact,
    Legacy80,
    Legacy30,
    Unmatched,
}

/// The verdict for one reference row, with enough echoed metadata to
/// render a diagnostic sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRecord {
    /// External identifier of the reference row.
    pub id: String,
    /// Section hint, echoed from the reference record.
    pub section: Option<u32>,
    /// Position-within-section hint, echoed from the reference record.
    pub position: Option<u32>,
    pub tier: MatchTier,
    /// Truncated snippet of the original reference text.
    pub snippet: String,
}

impl ParagraphIndex {
    /// Resolve one reference text through the tiered strategy,
    /// short-circuiting on the first hit.
    pub fn resolve(&self, reference_text: &str, cfg: &CanonicalConfig) -> MatchTier {
        let Some(fp) = fingerprint(reference_text, cfg) else {
            // Nothing to compare: empty normalizations never match.
            return MatchTier::Unmatched;
        };
        if self.exact.contains(&fp.key) {
            return MatchTier::Exact;
        }
        if let Some(key) = &fp.legacy80 {
            if self.legacy80.contains(key) {
                return MatchTier::Legacy80;
            }
        }
        if let Some(key) = &fp.legacy30 {
            if self.legacy30.contains(key) {
                return MatchTier::Legacy30;
            }
        }
        MatchTier::Unmatched
    }
}

/// Resolve a full reference record into a [`MatchRecord`], carrying the
/// row's opaque metadata through for diagnostics.
pub fn resolve_reference(
    index: &ParagraphIndex,
    record: &ReferenceRecord,
    cfg: &CanonicalConfig,
    snippet_chars: usize,
) -> MatchRecord {
    MatchRecord {
        id: record.id.clone(),
        section: record.section,
        position: record.position,
        tier: index.resolve(&record.original, cfg),
        snippet: truncate_chars(&record.original, snippet_chars),
    }
}
