use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tag::Tag;

/// Which of the three line kinds a line is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Project,
    Task,
    Comment,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Project => "project",
            LineKind::Task => "task",
            LineKind::Comment => "comment",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" | "projects" => Ok(LineKind::Project),
            "task" | "tasks" => Ok(LineKind::Task),
            "comment" | "comments" => Ok(LineKind::Comment),
            other => Err(format!(
                "unknown line kind '{}' (expected project, task or comment)",
                other
            )),
        }
    }
}

/// Fields shared by every kind of line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields {
    /// The raw source line, without its newline
    pub text: String,
    /// Marker-stripped, trimmed title
    pub title: String,
    /// Number of leading tabs
    pub indent: usize,
    /// Every tag in the line, in order of appearance
    pub tags: Vec<Tag>,
}

/// A classified line of a TaskPaper outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Line {
    /// `Title:` optionally followed by tags
    Project(Fields),
    /// `- Title` optionally followed by tags
    Task(Fields),
    /// Anything else
    Comment(Fields),
}

impl Line {
    /// Classify one raw line (no trailing newline).
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        crate::parse::classify(&text)
    }

    pub fn kind(&self) -> LineKind {
        match self {
            Line::Project(_) => LineKind::Project,
            Line::Task(_) => LineKind::Task,
            Line::Comment(_) => LineKind::Comment,
        }
    }

    pub fn fields(&self) -> &Fields {
        match self {
            Line::Project(f) | Line::Task(f) | Line::Comment(f) => f,
        }
    }

    pub fn text(&self) -> &str {
        &self.fields().text
    }

    pub fn title(&self) -> &str {
        &self.fields().title
    }

    pub fn indent(&self) -> usize {
        self.fields().indent
    }

    pub fn tags(&self) -> &[Tag] {
        &self.fields().tags
    }

    pub fn is_project(&self) -> bool {
        matches!(self, Line::Project(_))
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Line::Task(_))
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Line::Comment(_))
    }

    /// True if any tag in the line has the given name
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags().iter().any(|t| t.name == name)
    }

    /// First tag with the given name
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags().iter().find(|t| t.name == name)
    }
}
