//! Lexical building blocks shared by the line classifier and the tag extractor.
//!
//! Every structural character in the format is ASCII, so the scanners below
//! walk bytes and only ever slice at ASCII positions, which are always valid
//! char boundaries.

/// Indentation character. Only tabs count toward a line's depth.
pub const TAB: char = '\t';

/// Marker that opens a task line (after any leading tabs).
pub const TASK_MARKER: &str = "- ";

/// Character that closes a project header.
pub const PROJECT_MARKER: char = ':';

/// Character that opens a tag.
pub const TAG_SIGIL: u8 = b'@';

const VALUE_OPEN: u8 = b'(';
const VALUE_CLOSE: u8 = b')';
const VERTICAL_TAB: u8 = 0x0B;

/// Count leading tabs
pub fn count_indent(line: &str) -> usize {
    line.len() - line.trim_start_matches(TAB).len()
}

/// ASCII whitespace, vertical tab included.
pub fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == VERTICAL_TAB
}

/// Trim ASCII whitespace from both ends.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii() && is_space(c as u8))
}

/// A tag recognized at some offset of a line. Offsets are byte offsets into
/// the scanned string; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TagToken<'a> {
    pub end: usize,
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl TagToken<'_> {
    /// A bare tag whose name swallowed an unclosed `(`.
    pub fn is_malformed(&self) -> bool {
        self.value.is_none() && self.name.as_bytes().contains(&VALUE_OPEN)
    }
}

/// Try to read a tag starting at `start`, which must point at `@`.
///
/// `last_close` is the byte offset of the last `)` in `s`, if any. The value
/// form is only attempted when its `(` lies before that offset, so the search
/// for the closing paren always succeeds and never runs past it.
pub(crate) fn scan_tag(s: &str, start: usize, last_close: Option<usize>) -> Option<TagToken<'_>> {
    let bytes = s.as_bytes();
    if bytes.get(start) != Some(&TAG_SIGIL) {
        return None;
    }
    let name_start = start + 1;

    // `@name(value)`
    let name_end = name_start
        + bytes[name_start..]
            .iter()
            .take_while(|&&b| !is_space(b) && b != VALUE_OPEN)
            .count();
    if name_end > name_start
        && bytes.get(name_end) == Some(&VALUE_OPEN)
        && last_close.is_some_and(|close| close > name_end)
    {
        let value_start = name_end + 1;
        if let Some(len) = bytes[value_start..].iter().position(|&b| b == VALUE_CLOSE) {
            let value_end = value_start + len;
            return Some(TagToken {
                end: value_end + 1,
                name: &s[name_start..name_end],
                value: Some(&s[value_start..value_end]),
            });
        }
    }

    // `@name`
    let end = name_start + bytes[name_start..].iter().take_while(|&&b| !is_space(b)).count();
    if end == name_start {
        return None;
    }
    Some(TagToken {
        end,
        name: &s[name_start..end],
        value: None,
    })
}

/// Offset of the last `)` in `s`.
pub(crate) fn last_close(s: &str) -> Option<usize> {
    s.as_bytes().iter().rposition(|&b| b == VALUE_CLOSE)
}

/// Find where the trailing tag block of `region` begins.
///
/// The block is the final contiguous run of whitespace-separated tag tokens
/// that reaches the end of `region`. The returned offset points at the
/// whitespace preceding the first tag of the run, or at `0` when the run
/// starts the region. Returns `None` when the region does not end in a tag.
pub(crate) fn trailing_block_start(region: &str) -> Option<usize> {
    let bytes = region.as_bytes();
    let close = last_close(region);
    let mut block: Option<usize> = None;
    // Start of the whitespace run before the current word (0 at region start).
    let mut gap_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if is_space(bytes[pos]) {
            gap_start = pos;
            while pos < bytes.len() && is_space(bytes[pos]) {
                pos += 1;
            }
            if pos == bytes.len() {
                // Trailing whitespace: the line does not end in a tag.
                return None;
            }
            continue;
        }

        let word_start = pos;
        let token = if bytes[pos] == TAG_SIGIL {
            scan_tag(region, pos, close)
        } else {
            None
        };
        // A value tag may span whitespace; anything glued after it is still
        // part of the same word.
        let mut word_end = token.map_or(pos, |t| t.end);
        while word_end < bytes.len() && !is_space(bytes[word_end]) {
            word_end += 1;
        }

        let is_tag = token.is_some_and(|t| t.end == word_end && !t.is_malformed());
        if is_tag {
            if block.is_none() {
                block = Some(if word_start == 0 { 0 } else { gap_start });
            }
        } else {
            block = None;
        }
        pos = word_end;
    }

    block
}

/// `region` with its trailing tag block removed.
pub(crate) fn strip_trailing_tags(region: &str) -> &str {
    match trailing_block_start(region) {
        Some(start) => &region[..start],
        None => region,
    }
}
