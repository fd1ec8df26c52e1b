//! Source location tracking for pointcut expressions
//!
//! Pointcut expressions are one-line strings, so a position is a zero-based
//! character offset into the expression. Spans cover half-open offset ranges
//! and are carried by tokens and log events for precise diagnostics.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open character-offset range `[start, end)` in a pointcut expression.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Span {
    /// Start offset (inclusive, zero-based)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Span start must not be after end");
        Self { start, end }
    }

    /// Create a single-character span
    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    /// Get the start offset of this span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of this span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Get the character length of this span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span contains an offset
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Create an unknown/dummy span (useful for generated events)
    pub fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() <= 1 {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A value with its source span
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spanned<T> {
    /// The value
    pub value: T,
    /// The source span
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Create a new spanned value
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    /// Map the value while preserving the span
    pub fn map<U, F>(self, f: F) -> Spanned<U>
    where
        F: FnOnce(T) -> U,
    {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }

    /// Get the inner value
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A pointcut expression retained for diagnostic rendering
#[derive(Debug, Clone)]
pub struct SourceExpression {
    /// The original expression text
    pub source: String,
    /// Character count, cached because positions are char offsets
    char_count: usize,
}

impl SourceExpression {
    /// Create a new source expression
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let char_count = source.chars().count();
        Self { source, char_count }
    }

    /// Number of characters in the expression
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Get the text covered by a span
    pub fn span_text(&self, span: &Span) -> String {
        self.source
            .chars()
            .skip(span.start)
            .take(span.len())
            .collect()
    }

    /// Format an error message with a caret underline pointing at the span
    pub fn format_error(&self, span: &Span, message: &str) -> String {
        let mut result = String::new();

        result.push_str(&format!("Error: {}\n", message));
        result.push_str(&format!("  --> position {}\n", span.start));
        result.push_str(&format!("   | {}\n", self.source));

        let mut underline = String::from("   | ");
        for _ in 0..span.start.min(self.char_count) {
            underline.push(' ');
        }
        for _ in 0..span.len().max(1) {
            underline.push('^');
        }

        result.push_str(&underline);
        result.push('\n');
        result
    }
}
