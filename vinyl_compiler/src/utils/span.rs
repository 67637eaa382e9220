//! Source location tracking
//!
//! Locations are captured by value at token boundaries. Tokens, log events and
//! syntax errors all carry copies, never references into a live stream.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line and column in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, counted in characters)
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        debug_assert!(line >= 1 && column >= 1, "Locations are 1-based");
        Self { line, column }
    }

    /// The first character of any source
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Location after consuming `ch`
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' => Self {
                line: self.line + 1,
                column: 1,
            },
            _ => Self {
                line: self.line,
                column: self.column + 1,
            },
        }
    }

    /// Location after consuming every character of `s`
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, |loc, ch| loc.advance(ch))
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from start to end location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start location (inclusive)
    pub start: Location,
    /// End location (exclusive)
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        debug_assert!(start <= end, "Span start must not be after end");
        Self { start, end }
    }

    /// An empty span at a single location
    pub fn at(location: Location) -> Self {
        Self {
            start: location,
            end: location,
        }
    }

    pub fn start(&self) -> Location {
        self.start
    }

    pub fn end(&self) -> Location {
        self.end
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains a location
    pub fn contains(&self, location: Location) -> bool {
        location >= self.start && location < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Line index over a source text, used to render diagnostics
#[derive(Debug, Clone)]
pub struct SourceMap {
    /// Full source text, split into lines on demand
    pub source: String,
    /// Byte offsets of line starts
    line_starts: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let mut line_starts = vec![0];
        for (offset, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(offset + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a line of text by line number (1-based), without its newline
    pub fn get_line(&self, line_num: u32) -> Option<&str> {
        let line_idx = (line_num as usize).checked_sub(1)?;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.source.len());

        Some(self.source[start..end].trim_end_matches('\r'))
    }

    /// Format an error message with the offending line and a caret underline
    pub fn format_error(&self, span: &Span, message: &str) -> String {
        let mut result = String::new();

        result.push_str(&format!("Error: {}\n", message));
        result.push_str(&format!("  --> {}\n", span.start));

        if let Some(line) = self.get_line(span.start.line) {
            let line_num = span.start.line.to_string();
            let gutter = " ".repeat(line_num.len());

            result.push_str(&format!("{} |\n", gutter));
            result.push_str(&format!("{} | {}\n", line_num, line));

            let line_chars = line.chars().count();
            let offset = (span.start.column as usize - 1).min(line_chars);
            let width = if span.start.line == span.end.line {
                (span.end.column.saturating_sub(span.start.column)) as usize
            } else {
                line_chars - offset
            };

            result.push_str(&format!(
                "{} | {}{}\n",
                gutter,
                " ".repeat(offset),
                "^".repeat(width.max(1))
            ));
        }

        result
    }
}
