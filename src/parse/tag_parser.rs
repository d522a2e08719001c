use crate::model::tag::Tag;
use crate::parse::grammar::{TAG_SIGIL, TagToken, last_close, scan_tag};

/// Extract every `@name` / `@name(value)` tag in the line, left to right.
///
/// The whole line is scanned, so tags inside a title are found just like
/// tags in the trailing block. Matches never overlap: after a value tag the
/// scan resumes past its closing `)`.
pub fn extract_tags(line: &str) -> Vec<Tag> {
    let close = last_close(line);
    let bytes = line.as_bytes();
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == TAG_SIGIL) {
        let at = pos + offset;
        match scan_tag(line, at, close) {
            Some(token) => {
                tags.push(to_tag(token));
                pos = token.end;
            }
            None => pos = at + 1,
        }
    }

    tags
}

fn to_tag(token: TagToken<'_>) -> Tag {
    match token.value {
        Some(value) => Tag::with_value(token.name, value),
        None => Tag::new(token.name),
    }
}
