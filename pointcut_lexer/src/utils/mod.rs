//! Shared location and diagnostic helpers for the pointcut lexer
//!
//! Pointcut expressions are single-line strings, so locations are plain
//! zero-based character offsets rather than line/column pairs.

pub mod span;

pub use span::{SourceExpression, Span, Spanned};
