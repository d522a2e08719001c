use crate::model::document::Document;
use crate::parse::line_parser::classify;

/// Split source text into raw lines.
///
/// Splits on `\n` only, so `\r` stays in the line text. A final `\n`
/// terminates the last line rather than starting an empty one.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split_terminator('\n').collect()
}

/// Parse a document: classify every line, in order.
pub fn parse_document(source: &str) -> Document {
    Document::from_lines(split_lines(source).into_iter().map(classify).collect())
}
