use std::ops::Range;

use regex::Regex;

use crate::model::document::Document;
use crate::model::line::{Line, LineKind};

/// Criteria for selecting lines. Unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct LineFilter {
    pub kind: Option<LineKind>,
    /// Tag name, without `@`
    pub tag: Option<String>,
    /// Pattern matched against the line title
    pub pattern: Option<Regex>,
}

impl LineFilter {
    pub fn matches(&self, line: &Line) -> bool {
        if let Some(kind) = self.kind
            && line.kind() != kind
        {
            return false;
        }
        if let Some(ref tag) = self.tag
            && !line.has_tag(tag)
        {
            return false;
        }
        if let Some(ref re) = self.pattern
            && !re.is_match(line.title())
        {
            return false;
        }
        true
    }
}

/// Lines that pass the filter, with their 1-based line numbers
pub fn filter_lines<'a>(doc: &'a Document, filter: &LineFilter) -> Vec<(usize, &'a Line)> {
    doc.numbered()
        .filter(|(_, line)| filter.matches(line))
        .collect()
}

/// A line whose title matched a search pattern
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    /// 1-based line number
    pub number: usize,
    pub line: &'a Line,
    /// Byte ranges of every match within the title
    pub spans: Vec<Range<usize>>,
}

/// Search line titles, optionally restricted to one kind.
pub fn search_titles<'a>(doc: &'a Document, re: &Regex, kind: Option<LineKind>) -> Vec<SearchHit<'a>> {
    doc.numbered()
        .filter(|(_, line)| kind.is_none_or(|k| line.kind() == k))
        .filter_map(|(number, line)| {
            let spans = find_matches(re, line.title());
            (!spans.is_empty()).then_some(SearchHit { number, line, spans })
        })
        .collect()
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}
