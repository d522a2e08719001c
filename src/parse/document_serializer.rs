use crate::model::document::Document;

/// Join every line's raw text with `\n`. No trailing newline is added.
pub fn serialize_document(doc: &Document) -> String {
    doc.iter()
        .map(|line| line.text())
        .collect::<Vec<_>>()
        .join("\n")
}
