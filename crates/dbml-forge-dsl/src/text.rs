//! Source buffer with span and line/column lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A half-open byte range into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Builds a span from start and (exclusive) end offsets.
    pub fn from_bounds(start: usize, end: usize) -> Self {
        debug_assert!(end >= start, "span end before start");
        Self {
            start,
            length: end - start,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// A span resolved to zero-based line/character coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLocation {
    pub span: TextSpan,
    pub start_line: usize,
    pub start_character: usize,
    pub end_line: usize,
    pub end_character: usize,
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line + 1, self.start_character + 1)
    }
}

/// An immutable source document with precomputed line starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = Self::line_starts(&text);
        Self { text, line_starts }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The zero-based line containing the given byte offset.
    pub fn line_index(&self, position: usize) -> usize {
        match self.line_starts.binary_search(&position) {
            Ok(index) => index,
            Err(index) => index - 1,
        }
    }

    /// Resolves a span to line/character coordinates.
    pub fn location(&self, span: TextSpan) -> TextLocation {
        let start_line = self.line_index(span.start);
        let end_line = self.line_index(span.end());
        TextLocation {
            span,
            start_line,
            start_character: span.start - self.line_starts[start_line],
            end_line,
            end_character: span.end() - self.line_starts[end_line],
        }
    }

    pub fn slice(&self, span: TextSpan) -> &str {
        &self.text[span.start..span.end()]
    }

    fn line_starts(text: &str) -> Vec<usize> {
        let mut starts = vec![0];
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' => {
                    // \r\n counts as one break
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    starts.push(i + 1);
                }
                b'\n' => starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_bounds() {
        let span = TextSpan::from_bounds(3, 8);
        assert_eq!(span.start, 3);
        assert_eq!(span.length, 5);
        assert_eq!(span.end(), 8);
        assert_eq!(span.to_string(), "3..8");
    }

    #[test]
    fn empty_text_has_one_line() {
        let text = SourceText::new("");
        assert_eq!(text.line_count(), 1);
        assert_eq!(text.line_index(0), 0);
    }

    #[test]
    fn line_index_across_breaks() {
        let text = SourceText::new("ab\ncd\nef");
        assert_eq!(text.line_index(0), 0);
        assert_eq!(text.line_index(2), 0);
        assert_eq!(text.line_index(3), 1);
        assert_eq!(text.line_index(5), 1);
        assert_eq!(text.line_index(6), 2);
        assert_eq!(text.line_index(8), 2);
    }

    #[test]
    fn crlf_counts_as_one_break() {
        let text = SourceText::new("ab\r\ncd\rde");
        assert_eq!(text.line_count(), 3);
        assert_eq!(text.line_index(4), 1);
        assert_eq!(text.line_index(7), 2);
    }

    #[test]
    fn location_resolves_line_and_character() {
        let text = SourceText::new("Table t {\n  id int\n}");
        let location = text.location(TextSpan::new(12, 2));
        assert_eq!(location.start_line, 1);
        assert_eq!(location.start_character, 2);
        assert_eq!(location.end_line, 1);
        assert_eq!(location.end_character, 4);
        assert_eq!(location.to_string(), "2:3");
    }

    #[test]
    fn slice_returns_span_text() {
        let text = SourceText::new("Table t { }");
        assert_eq!(text.slice(TextSpan::new(6, 1)), "t");
    }
}
