use parafp_canonical::{fingerprint, CanonicalConfig};
use parafp_document::Document;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RowError;
use crate::report::truncate_chars;

/// Character budget for the normalized snippet carried next to an
/// exported key.
const SNIPPET_CHARS: usize = 160;

/// A freshly computed identity key for one `(stream, block)` position.
///
/// `key` is `None` when the block normalizes to empty: such blocks can
/// never be matched and must not receive a fabricated identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecomputedKey {
    pub stream_index: usize,
    pub block_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub normalized_snippet: String,
}

/// Batch output of [`recompute_keys`]: refreshed keys plus the rows that
/// no longer resolve against the current document state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecomputeReport {
    pub keys: Vec<RecomputedKey>,
    pub bad_rows: Vec<RowError>,
}

/// Recompute the identity key for one recorded block position against the
/// document's current state.
///
/// Edit tooling records `(stream, block)` positions while it works; the
/// document may be re-flowed by layout-repair passes before the keys are
/// finally persisted, so recomputation happens in a second phase against
/// the saved state. An out-of-bounds position is therefore a per-row
/// error, not a failure of the batch.
pub fn recompute_key(
    document: &Document,
    stream_index: usize,
    block_index: usize,
    cfg: &CanonicalConfig,
) -> Result<RecomputedKey, RowError> {
    let block = document
        .block_at(stream_index, block_index)
        .map_err(|err| RowError {
            stream_index,
            block_index,
            reason: err.to_string(),
        })?;
    let (key, normalized_snippet) = match fingerprint(&block.text, cfg) {
        Some(fp) => (Some(fp.key), truncate_chars(&fp.canonical, SNIPPET_CHARS)),
        None => (None, String::new()),
    };
    Ok(RecomputedKey {
        stream_index,
        block_index,
        key,
        normalized_snippet,
    })
}

/// Recompute keys for a whole edit table, collecting per-row failures
/// without aborting the batch.
pub fn recompute_keys(
    document: &Document,
    positions: &[(usize, usize)],
    cfg: &CanonicalConfig,
) -> RecomputeReport {
    let mut out = RecomputeReport::default();
    for &(stream_index, block_index) in positions {
        match recompute_key(document, stream_index, block_index, cfg) {
            Ok(key) => out.keys.push(key),
            Err(row) => {
                warn!(stream_index, block_index, reason = %row.reason, "bad row");
                out.bad_rows.push(row);
            }
        }
    }
    out
}
