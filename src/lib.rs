//! Umbrella crate for paragraph fingerprinting and identity resolution.
//!
//! Generated chapter text must be verified against — and later
//! re-associated with — the paragraphs of a layout document that is
//! regenerated many times over a book's production run. The same logical
//! paragraph rarely keeps a byte-identical representation between runs:
//! whitespace drifts, soft hyphens move, decoration markers appear, and
//! accents flip representation. This crate stitches the member layers into
//! a single entry point so callers can run one verification pass end to
//! end:
//!
//! 1. select the body stream for the requested page range,
//! 2. build the paragraph index over that stream,
//! 3. resolve every reference row through the tiered strategy,
//! 4. aggregate the verdicts into a summary for a human or a gate.
//!
//! Re-running with the same document snapshot and reference list always
//! yields an identical report: there is no randomness, no clock, and no
//! state shared between runs.

mod config;

pub use crate::config::{ConfigLoadError, ParafpConfig};
pub use parafp_canonical::{
    exact_key, fingerprint, fnv1a32, normalize, CanonicalConfig, CanonicalError, Fingerprint,
};
pub use parafp_document::{
    ContentBlock, ContentStream, Document, DocumentError, PageRange, ReferenceRecord,
};
pub use parafp_resolve::{
    recompute_key, recompute_keys, report, resolve_reference, select_body_stream, BodySelection,
    MatchRecord, MatchTier, ParagraphIndex, RecomputeReport, RecomputedKey, ReportConfig,
    RowError, StructuralError, Summary, UnmatchedSample,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Combined configuration for one verification run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyConfig {
    pub canonical: CanonicalConfig,
    pub report: ReportConfig,
}

impl VerifyConfig {
    /// Validate every stage configuration.
    pub fn validate(&self) -> Result<(), VerifyError> {
        self.canonical.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

/// Errors that abort a verification run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// A stage configuration failed validation.
    #[error("canonical layer rejected the run: {0}")]
    Canonical(#[from] CanonicalError),
    /// A fatal precondition: no usable document, stream, or reference list.
    #[error("structural failure: {0}")]
    Structural(#[from] StructuralError),
}

/// Full output of a verification run.
///
/// The summary is the collaborator-facing artifact; the per-row records
/// are kept so a hard-gate caller can inspect individual verdicts without
/// re-running the resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationReport {
    pub body_stream: BodySelection,
    pub indexed_blocks: usize,
    pub records: Vec<MatchRecord>,
    pub summary: Summary,
}

/// Run one verification pass over a document section.
///
/// Fatal preconditions (empty document, no body stream in range, empty
/// reference list, invalid configuration) abort with a [`VerifyError`];
/// unmatched references are data, reported in the summary.
pub fn verify_references(
    document: &Document,
    references: &[ReferenceRecord],
    range: PageRange,
    cfg: &VerifyConfig,
) -> Result<VerificationReport, VerifyError> {
    cfg.validate()?;
    range.validate().map_err(|_| StructuralError::InvalidRange {
        start: range.start,
        end: range.end,
    })?;
    if document.streams.is_empty() {
        return Err(StructuralError::NoCandidateStreams.into());
    }
    if references.is_empty() {
        return Err(StructuralError::EmptyReferenceList.into());
    }

    let body_stream = select_body_stream(document, &range).ok_or(StructuralError::NoBodyStream {
        start: range.start,
        end: range.end,
    })?;
    let index = ParagraphIndex::build(
        &document.streams[body_stream.stream_index],
        &range,
        &cfg.canonical,
    );
    let records: Vec<MatchRecord> = references
        .iter()
        .map(|record| resolve_reference(&index, record, &cfg.canonical, cfg.report.snippet_chars))
        .collect();
    let summary = report(&records, &cfg.report);
    info!(
        stream_index = body_stream.stream_index,
        indexed_blocks = index.indexed_blocks(),
        total = summary.total_references,
        exact = summary.matched_exact,
        unmatched = summary.unmatched_count,
        "verification run complete"
    );
    Ok(VerificationReport {
        body_stream,
        indexed_blocks: index.indexed_blocks(),
        records,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str, words: u32, page: u32) -> ContentBlock {
        ContentBlock {
            text: text.into(),
            word_count: words,
            page_offset: page,
            style: None,
        }
    }

    fn reference(id: &str, original: &str) -> ReferenceRecord {
        ReferenceRecord {
            id: id.into(),
            section: None,
            position: None,
            original: original.into(),
            attributes: None,
        }
    }

    fn two_stream_document() -> Document {
        Document {
            streams: vec![
                ContentStream {
                    id: "captions".into(),
                    blocks: vec![block("Figuur 1.2 De cel", 4, 2)],
                },
                ContentStream {
                    id: "body".into(),
                    blocks: vec![
                        block("Cellen  zijn\u{00AD}de bouwstenen.\n", 4, 1),
                        block("De celkern bevat het erfelijk materiaal.", 6, 2),
                    ],
                },
            ],
        }
    }

    #[test]
    fn pipeline_selects_body_and_resolves() {
        let doc = two_stream_document();
        let refs = vec![
            reference("p-1", "cellen zijn de bouwstenen."),
            reference("p-2", "De celkern bevat het erfelijk materiaal."),
            reference("p-3", "tekst die nergens voorkomt"),
        ];
        let range = PageRange::new(0, 5).unwrap();
        let out = verify_references(&doc, &refs, range, &VerifyConfig::default()).unwrap();

        assert_eq!(out.body_stream.stream_index, 1);
        assert_eq!(out.indexed_blocks, 2);
        assert_eq!(out.summary.matched_exact, 2);
        assert_eq!(out.summary.unmatched_count, 1);
        assert_eq!(out.summary.unmatched_samples.len(), 1);
        assert_eq!(out.summary.unmatched_samples[0].id, "p-3");
    }

    #[test]
    fn empty_reference_list_is_structural() {
        let doc = two_stream_document();
        let range = PageRange::new(0, 5).unwrap();
        let err = verify_references(&doc, &[], range, &VerifyConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            VerifyError::Structural(StructuralError::EmptyReferenceList)
        ));
    }

    #[test]
    fn invalid_canonical_config_aborts_the_run() {
        let doc = two_stream_document();
        let refs = vec![reference("p-1", "wat tekst")];
        let range = PageRange::new(0, 5).unwrap();
        let cfg = VerifyConfig {
            canonical: CanonicalConfig {
                version: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = verify_references(&doc, &refs, range, &cfg).unwrap_err();
        assert!(matches!(err, VerifyError::Canonical(_)));
    }
}
