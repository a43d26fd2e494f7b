//! Parse Utilities
//!
//! Source files, locations and spans shared by the markup tree and by every
//! error the extractor reports.

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSourceFile {
    pub content: String,
    pub url: String,
}

impl ParseSourceFile {
    pub fn new(content: impl Into<String>, url: impl Into<String>) -> Self {
        ParseSourceFile {
            content: content.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocation {
    pub file: Arc<ParseSourceFile>,
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(file: Arc<ParseSourceFile>, offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { file, offset, line, col }
    }

    /// Return the source around the location, up to `max_chars` or
    /// `max_lines` on each side.
    pub fn get_context(&self, max_chars: usize, max_lines: usize) -> Option<(String, String)> {
        let content = &self.file.content;
        if content.is_empty()
            || self.offset > content.len()
            || !content.is_char_boundary(self.offset)
        {
            return None;
        }

        let before_chars: Vec<(usize, char)> =
            content[..self.offset].char_indices().rev().collect();
        let mut start_offset = self.offset;
        let mut lines = 0;
        for (idx, ch) in before_chars.into_iter().take(max_chars) {
            if ch == '\n' {
                lines += 1;
                if lines >= max_lines {
                    break;
                }
            }
            start_offset = idx;
        }

        let mut end_offset = self.offset;
        lines = 0;
        for (idx, ch) in content[self.offset..].char_indices().take(max_chars) {
            if ch == '\n' {
                lines += 1;
                if lines >= max_lines {
                    break;
                }
            }
            end_offset = self.offset + idx + ch.len_utf8();
        }

        Some((
            content[start_offset..self.offset].to_string(),
            content[self.offset..end_offset].to_string(),
        ))
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.file.url, self.line, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan { start, end }
    }

    /// Span running from the start of `first` to the end of `last`.
    pub fn covering(first: &ParseSourceSpan, last: &ParseSourceSpan) -> Self {
        ParseSourceSpan::new(first.start.clone(), last.end.clone())
    }

    /// The source text covered by this span.
    pub fn text(&self) -> &str {
        self.start
            .file
            .content
            .get(self.start.offset..self.end.offset)
            .unwrap_or_default()
    }
}

impl fmt::Display for ParseSourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// An error reported by the markup parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub span: ParseSourceSpan,
    pub msg: String,
}

impl ParseError {
    pub fn new(span: ParseSourceSpan, msg: impl Into<String>) -> Self {
        ParseError {
            span,
            msg: msg.into(),
        }
    }

    pub fn contextual_message(&self) -> String {
        match self.span.start.get_context(100, 3) {
            Some((before, after)) => format!("{} (\"{}[ERROR ->]{}\")", self.msg, before, after),
            None => self.msg.clone(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.contextual_message(), self.span.start)
    }
}

impl std::error::Error for ParseError {}
