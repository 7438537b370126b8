//! Identity resolution over a regenerated document.
//!
//! This crate owns the decision layer of the verification pipeline:
//!
//! - [`select_body_stream`]: out of every text container sharing the
//!   document, pick the one that actually carries the section body.
//! - [`ParagraphIndex`]: the per-run lookup structure over the selected
//!   stream's blocks, holding exact fingerprint keys plus both legacy
//!   prefix sets. Built fresh for each run and never persisted.
//! - [`MatchTier`] / [`MatchRecord`]: the tiered exact -> legacy80 ->
//!   legacy30 -> unmatched verdict for one reference text.
//! - [`report`]: aggregation into a [`Summary`] with bounded diagnostic
//!   samples, consumable by a human or a downstream gate.
//! - [`recompute_key`] / [`recompute_keys`]: the two-phase fingerprint
//!   export — callers record `(stream, block)` positions while editing and
//!   refresh the keys later against the document's final saved state.
//!
//! Everything here is synchronous and deterministic: same document
//! snapshot, same reference list, same report.

mod error;
mod export;
mod index;
mod report;
mod resolver;
mod select;

pub use crate::error::{RowError, StructuralError};
pub use crate::export::{recompute_key, recompute_keys, RecomputeReport, RecomputedKey};
pub use crate::index::ParagraphIndex;
pub use crate::report::{report, ReportConfig, Summary, UnmatchedSample};
pub use crate::resolver::{resolve_reference, MatchRecord, MatchTier};
pub use crate::select::{select_body_stream, BodySelection};
