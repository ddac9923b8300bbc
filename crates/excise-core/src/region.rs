//! Resolved regions of a document

use std::fmt;
use std::ops::Range;

/// A contiguous byte span of a document together with its line extent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Byte range in the source document
    pub span: Range<usize>,
    /// 1-based line of the first byte
    pub start_line: usize,
    /// 1-based line of the last byte (equal to `start_line` when empty)
    pub end_line: usize,
}

impl Region {
    /// Build a region for `span` within `document`, computing line numbers.
    pub fn new(document: &str, span: Range<usize>) -> Self {
        let bytes = document.as_bytes();
        let start_line = count_newlines(&bytes[..span.start]) + 1;
        let last = if span.end > span.start {
            span.end - 1
        } else {
            span.start
        };
        let end_line = count_newlines(&bytes[..last]) + 1;
        Self {
            span,
            start_line,
            end_line,
        }
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The text this region covers in `document`.
    pub fn slice<'a>(&self, document: &'a str) -> &'a str {
        &document[self.span.clone()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines {}-{} (bytes {}..{})",
            self.start_line, self.end_line, self.span.start, self.span.end
        )
    }
}

fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

/// Byte offset of the beginning of the line containing `offset`.
pub(crate) fn line_start(document: &str, offset: usize) -> usize {
    document[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset of the beginning of the line after `offset`, or `offset`
/// itself when it already sits at a line start.
pub(crate) fn next_line_start(document: &str, offset: usize) -> usize {
    if offset == 0 || document[..offset].ends_with('\n') {
        return offset;
    }
    document[offset..]
        .find('\n')
        .map(|i| offset + i + 1)
        .unwrap_or(document.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_of_single_line_region() {
        let doc = "a\nbcd\ne\n";
        let region = Region::new(doc, 2..5);
        assert_eq!(region.start_line, 2);
        assert_eq!(region.end_line, 2);
        assert_eq!(region.slice(doc), "bcd");
    }

    #[test]
    fn trailing_newline_belongs_to_last_line() {
        let doc = "a\nbcd\ne\n";
        let region = Region::new(doc, 2..6);
        assert_eq!(region.end_line, 2);
        assert_eq!(region.to_string(), "lines 2-2 (bytes 2..6)");
    }

    #[test]
    fn empty_region_is_single_line() {
        let region = Region::new("abc", 1..1);
        assert!(region.is_empty());
        assert_eq!(region.start_line, region.end_line);
    }

    #[test]
    fn line_start_and_next_line_start() {
        let doc = "one\ntwo\nthree";
        assert_eq!(line_start(doc, 5), 4);
        assert_eq!(line_start(doc, 2), 0);
        assert_eq!(next_line_start(doc, 5), 8);
        assert_eq!(next_line_start(doc, 8), 8);
        assert_eq!(next_line_start(doc, 10), doc.len());
    }
}
