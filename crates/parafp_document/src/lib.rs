//! Read-only document model for paragraph identity resolution.
//!
//! The layout collaborator derives these types from the live document: a
//! [`Document`] is an ordered set of [`ContentStream`]s (independent text
//! flows — the section body, but also captions, labels, and other small
//! containers), each an ordered list of [`ContentBlock`]s. This crate never
//! mutates a document; it only describes what the resolution layer is
//! allowed to read.
//!
//! [`ReferenceRecord`] is the other input: one row of generated text from
//! the upstream rewriting process, carrying opaque bookkeeping fields that
//! are echoed back in diagnostics but never interpreted here.

mod error;
mod reference;
mod types;

pub use crate::error::DocumentError;
pub use crate::reference::ReferenceRecord;
pub use crate::types::{ContentBlock, ContentStream, Document, PageRange};

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str, words: u32, page: u32) -> ContentBlock {
        ContentBlock {
            text: text.to_string(),
            word_count: words,
            page_offset: page,
            style: None,
        }
    }

    #[test]
    fn page_range_bounds_are_inclusive() {
        let range = PageRange::new(5, 9).unwrap();
        assert!(!range.contains(4));
        assert!(range.contains(5));
        assert!(range.contains(7));
        assert!(range.contains(9));
        assert!(!range.contains(10));
    }

    #[test]
    fn page_range_rejects_inverted_bounds() {
        assert!(matches!(
            PageRange::new(9, 5),
            Err(DocumentError::InvalidRange { start: 9, end: 5 })
        ));
    }

    #[test]
    fn single_page_range_is_valid() {
        let range = PageRange::new(3, 3).unwrap();
        assert!(range.contains(3));
        assert!(!range.contains(2));
    }

    #[test]
    fn block_lookup_reports_out_of_bounds() {
        let doc = Document {
            streams: vec![ContentStream {
                id: "u1d2".into(),
                blocks: vec![block("eerste alinea", 2, 0)],
            }],
        };

        assert!(doc.block_at(0, 0).is_ok());
        assert!(matches!(
            doc.block_at(0, 1),
            Err(DocumentError::BlockOutOfBounds {
                stream_index: 0,
                block_index: 1
            })
        ));
        assert!(matches!(
            doc.block_at(3, 0),
            Err(DocumentError::BlockOutOfBounds {
                stream_index: 3,
                block_index: 0
            })
        ));
    }

    #[test]
    fn reference_record_deserializes_with_optional_fields() {
        let json = r#"{
            "id": "p-014",
            "original": "Cellen zijn de bouwstenen van het lichaam."
        }"#;
        let record: ReferenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "p-014");
        assert!(record.section.is_none());
        assert!(record.position.is_none());
        assert!(record.attributes.is_none());

        let json = r#"{
            "id": "p-015",
            "section": 3,
            "position": 7,
            "original": "De celkern bevat het DNA.",
            "attributes": {"model": "rewrite-v2"}
        }"#;
        let record: ReferenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.section, Some(3));
        assert_eq!(record.position, Some(7));
        assert!(record.attributes.is_some());
    }
}
