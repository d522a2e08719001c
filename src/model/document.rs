use serde::{Deserialize, Serialize};

use super::line::{Line, LineKind};

/// Number of lines of each kind in a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub projects: usize,
    pub tasks: usize,
    pub comments: usize,
}

impl KindCounts {
    pub fn total(&self) -> usize {
        self.projects + self.tasks + self.comments
    }

    pub fn get(&self, kind: LineKind) -> usize {
        match kind {
            LineKind::Project => self.projects,
            LineKind::Task => self.tasks,
            LineKind::Comment => self.comments,
        }
    }
}

/// A parsed TaskPaper document: its classified lines, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Parse a whole document from its source text
    pub fn parse(source: &str) -> Self {
        crate::parse::parse_document(source)
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Document { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by its 1-based line number
    pub fn line(&self, number: usize) -> Option<&Line> {
        number.checked_sub(1).and_then(|idx| self.lines.get(idx))
    }

    /// Lines of one kind, paired with their 1-based line numbers
    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = (usize, &Line)> {
        self.numbered().filter(move |(_, line)| line.kind() == kind)
    }

    /// All lines paired with their 1-based line numbers
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Line)> {
        self.lines.iter().enumerate().map(|(idx, line)| (idx + 1, line))
    }

    pub fn projects(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.is_project())
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.is_task())
    }

    pub fn comments(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.is_comment())
    }

    pub fn counts(&self) -> KindCounts {
        let mut counts = KindCounts::default();
        for line in &self.lines {
            match line.kind() {
                LineKind::Project => counts.projects += 1,
                LineKind::Task => counts.tasks += 1,
                LineKind::Comment => counts.comments += 1,
            }
        }
        counts
    }

    pub fn project_count(&self) -> usize {
        self.projects().count()
    }

    pub fn task_count(&self) -> usize {
        self.tasks().count()
    }

    pub fn comment_count(&self) -> usize {
        self.comments().count()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Reconstructs the source: every line's raw text joined with `\n`.
impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::parse::serialize_document(self))
    }
}
