use indexmap::IndexMap;
use serde::Serialize;

use crate::model::document::Document;

/// Aggregate of one tag name across a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    /// Number of occurrences (a line may contribute more than one)
    pub count: usize,
    /// 1-based numbers of the lines carrying the tag, without repeats
    pub lines: Vec<usize>,
    /// Distinct values, in first-seen order
    pub values: Vec<String>,
}

/// Tag name to summary, ordered by first appearance in the document
pub type TagIndex = IndexMap<String, TagSummary>;

pub fn build_tag_index(doc: &Document) -> TagIndex {
    let mut index = TagIndex::new();
    for (number, line) in doc.numbered() {
        for tag in line.tags() {
            let summary = index.entry(tag.name.clone()).or_default();
            summary.count += 1;
            if summary.lines.last() != Some(&number) {
                summary.lines.push(number);
            }
            if let Some(ref value) = tag.value
                && !summary.values.contains(value)
            {
                summary.values.push(value.clone());
            }
        }
    }
    index
}
