use parafp_document::{Document, PageRange};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of body-stream selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BodySelection {
    /// Index of the selected stream in the document's stream order.
    pub stream_index: usize,
    /// Word-count sum of the selected stream's in-range blocks.
    pub word_total: u64,
}

/// Pick the stream carrying the canonical body content of a section.
///
/// The body is, by construction, the text-densest flow inside any bounded
/// page range: incidental containers (captions, labels, page furniture)
/// carry low word counts. For every stream, the word counts of blocks
/// starting inside `range` are summed; the maximum wins and ties go to the
/// first stream in input order, so the choice is stable across runs.
///
/// Returns `None` only when every stream sums to zero inside the range —
/// a structurally anomalous document that the caller must surface as an
/// error rather than silently defaulting.
pub fn select_body_stream(document: &Document, range: &PageRange) -> Option<BodySelection> {
    let mut best: Option<BodySelection> = None;
    for (stream_index, stream) in document.streams.iter().enumerate() {
        let word_total: u64 = stream
            .blocks
            .iter()
            .filter(|block| range.contains(block.page_offset))
            .map(|block| u64::from(block.word_count))
            .sum();
        debug!(stream = %stream.id, stream_index, word_total, "candidate stream");
        if word_total > 0 && best.is_none_or(|current| word_total > current.word_total) {
            best = Some(BodySelection {
                stream_index,
                word_total,
            });
        }
    }
    match best {
        Some(selection) => info!(
            stream_index = selection.stream_index,
            word_total = selection.word_total,
            "selected body stream"
        ),
        None => debug!(
            start = range.start,
            end = range.end,
            "no stream carries text inside the range"
        ),
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use parafp_document::{ContentBlock, ContentStream};

    fn block(words: u32, page: u32) -> ContentBlock {
        ContentBlock {
            text: "tekst".into(),
            word_count: words,
            page_offset: page,
            style: None,
        }
    }

    fn stream(id: &str, blocks: Vec<ContentBlock>) -> ContentStream {
        ContentStream {
            id: id.into(),
            blocks,
        }
    }

    #[test]
    fn densest_stream_wins() {
        let doc = Document {
            streams: vec![
                stream("a", vec![block(4, 5), block(4, 6), block(4, 9)]),
                stream("b", vec![block(400, 7)]),
            ],
        };
        let range = PageRange::new(5, 9).unwrap();
        let selection = select_body_stream(&doc, &range).unwrap();
        assert_eq!(selection.stream_index, 1);
        assert_eq!(selection.word_total, 400);
    }

    #[test]
    fn ties_go_to_the_first_stream() {
        let doc = Document {
            streams: vec![
                stream("first", vec![block(10, 2)]),
                stream("second", vec![block(10, 2)]),
            ],
        };
        let range = PageRange::new(0, 5).unwrap();
        assert_eq!(select_body_stream(&doc, &range).unwrap().stream_index, 0);
    }

    #[test]
    fn out_of_range_blocks_do_not_count() {
        let doc = Document {
            streams: vec![
                stream("body", vec![block(50, 3)]),
                stream("other-chapter", vec![block(5000, 40)]),
            ],
        };
        let range = PageRange::new(0, 9).unwrap();
        assert_eq!(select_body_stream(&doc, &range).unwrap().stream_index, 0);
    }

    #[test]
    fn all_zero_sums_yield_none() {
        let doc = Document {
            streams: vec![stream("a", vec![block(12, 99)]), stream("b", vec![])],
        };
        let range = PageRange::new(0, 9).unwrap();
        assert!(select_body_stream(&doc, &range).is_none());
    }
}
