use serde::Serialize;

use crate::model::document::KindCounts;
use crate::model::line::{Line, LineKind};
use crate::model::tag::Tag;
use crate::ops::query::SearchHit;
use crate::ops::tag_index::TagIndex;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TagJson {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Serialize)]
pub struct LineJson {
    pub number: usize,
    pub kind: LineKind,
    pub indent: usize,
    pub title: String,
    pub tags: Vec<TagJson>,
    pub text: String,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub projects: usize,
    pub tasks: usize,
    pub comments: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct TagEntryJson {
    pub name: String,
    pub count: usize,
    pub lines: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Serialize)]
pub struct SearchHitJson {
    #[serde(flatten)]
    pub line: LineJson,
    /// `[start, end)` byte offsets into the title
    pub spans: Vec<[usize; 2]>,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub fn tag_to_json(tag: &Tag) -> TagJson {
    TagJson {
        name: tag.name.clone(),
        value: tag.value.clone(),
    }
}

pub fn line_to_json(number: usize, line: &Line) -> LineJson {
    LineJson {
        number,
        kind: line.kind(),
        indent: line.indent(),
        title: line.title().to_string(),
        tags: line.tags().iter().map(tag_to_json).collect(),
        text: line.text().to_string(),
    }
}

pub fn stats_to_json(counts: KindCounts) -> StatsJson {
    StatsJson {
        projects: counts.projects,
        tasks: counts.tasks,
        comments: counts.comments,
        total: counts.total(),
    }
}

pub fn tag_index_to_json(index: &TagIndex) -> Vec<TagEntryJson> {
    index
        .iter()
        .map(|(name, summary)| TagEntryJson {
            name: name.clone(),
            count: summary.count,
            lines: summary.lines.clone(),
            values: summary.values.clone(),
        })
        .collect()
}

pub fn search_hit_to_json(hit: &SearchHit<'_>) -> SearchHitJson {
    SearchHitJson {
        line: line_to_json(hit.number, hit.line),
        spans: hit.spans.iter().map(|r| [r.start, r.end]).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One line of a listing: number, depth, kind marker, title and tags
pub fn format_line(number: usize, line: &Line) -> String {
    let prefix = "  ".repeat(line.indent());
    let body = match line {
        Line::Project(f) => format!("{}:", f.title),
        Line::Task(f) => format!("- {}", f.title),
        Line::Comment(f) => f.title.clone(),
    };
    let tags_str = if line.tags().is_empty() {
        String::new()
    } else {
        format!(" [{}]", format_tags(line.tags()))
    };
    format!("{:>4}  {}{}{}", number, prefix, body, tags_str)
}

pub fn format_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| t.raw.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Detailed view of a single line
pub fn format_line_detail(number: usize, line: &Line) -> Vec<String> {
    let mut lines = vec![
        format!("line {}: {}", number, line.kind()),
        format!("title: {}", line.title()),
        format!("indent: {}", line.indent()),
    ];
    if !line.tags().is_empty() {
        lines.push("tags:".to_string());
        for tag in line.tags() {
            match tag.value {
                Some(ref value) => lines.push(format!("  {} = {}", tag.name, value)),
                None => lines.push(format!("  {}", tag.name)),
            }
        }
    }
    lines.push(format!("text: {:?}", line.text()));
    lines
}

pub fn format_stats(counts: KindCounts) -> Vec<String> {
    vec![
        format!("projects  {:>5}", counts.projects),
        format!("tasks     {:>5}", counts.tasks),
        format!("comments  {:>5}", counts.comments),
        format!("total     {:>5}", counts.total()),
    ]
}

pub fn format_tag_index(index: &TagIndex) -> Vec<String> {
    let width = index.keys().map(|name| name.len() + 1).max().unwrap_or(0);
    index
        .iter()
        .map(|(name, summary)| {
            let lines = summary
                .lines
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let mut out = format!(
                "{:<width$}  {:>3}  lines {}",
                format!("@{}", name),
                summary.count,
                lines,
                width = width
            );
            if !summary.values.is_empty() {
                out.push_str(&format!("  values {}", summary.values.join(", ")));
            }
            out
        })
        .collect()
}
