use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::StructuralError;
use crate::resolver::{MatchRecord, MatchTier};

/// Configuration for coverage reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Semantic version of the report configuration.
    pub version: u32,
    /// Maximum number of unmatched samples carried in a summary.
    pub sample_cap: usize,
    /// Character budget for diagnostic snippets.
    pub snippet_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: 1,
            sample_cap: 25,
            snippet_chars: 160,
        }
    }
}

impl ReportConfig {
    /// Validate the configuration before a run.
    pub fn validate(&self) -> Result<(), StructuralError> {
        if self.version == 0 {
            return Err(StructuralError::InvalidConfig(
                "report version must be >= 1".into(),
            ));
        }
        if self.snippet_chars == 0 {
            return Err(StructuralError::InvalidConfig(
                "snippet_chars must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// One unmatched reference, with enough context for a human to locate the
/// discrepancy in the source table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedSample {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    pub snippet: String,
}

/// Aggregated verdict counts for one verification run.
///
/// Field names serialize in the camelCase form downstream gates consume.
/// A summary with `unmatched_count > 0` is a valid, renderable result; the
/// caller decides whether that fails its pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_references: usize,
    pub matched_exact: usize,
    pub matched_legacy80: usize,
    pub matched_legacy30: usize,
    pub unmatched_count: usize,
    pub unmatched_samples: Vec<UnmatchedSample>,
}

/// Aggregate per-row verdicts into a [`Summary`]. Never fails.
pub fn report(records: &[MatchRecord], cfg: &ReportConfig) -> Summary {
    let mut summary = Summary {
        total_references: records.len(),
        matched_exact: 0,
        matched_legacy80: 0,
        matched_legacy30: 0,
        unmatched_count: 0,
        unmatched_samples: Vec::new(),
    };
    for record in records {
        match record.tier {
            MatchTier::Exact => summary.matched_exact += 1,
            MatchTier::Legacy80 => summary.matched_legacy80 += 1,
            MatchTier::Legacy30 => summary.matched_legacy30 += 1,
            MatchTier::Unmatched => {
                summary.unmatched_count += 1;
                if summary.unmatched_samples.len() < cfg.sample_cap {
                    summary.unmatched_samples.push(UnmatchedSample {
                        id: record.id.clone(),
                        section: record.section,
                        position: record.position,
                        snippet: truncate_chars(&record.snippet, cfg.snippet_chars),
                    });
                }
            }
        }
    }
    if summary.unmatched_count > 0 {
        warn!(
            unmatched = summary.unmatched_count,
            total = summary.total_references,
            "references without identity match"
        );
    } else {
        info!(total = summary.total_references, "all references matched");
    }
    summary
}

/// Truncate to a character budget without splitting a code point.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
