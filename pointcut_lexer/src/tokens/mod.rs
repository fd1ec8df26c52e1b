//! Token system for pointcut expression lexing
//!
//! This module provides the token model for the pointcut lexer: the closed
//! [`TokenKind`] enumeration with one validating regex per kind, the mutable
//! [`Token`] accumulator the lexer grows character by character, and the
//! [`TokenStream`] a tokenize pass produces.
//!
//! Classification of ambiguous lexemes (keywords vs. patterns vs.
//! identifiers) lives in the lexer, because it depends on the previously
//! emitted non-whitespace token; this module only defines what each kind
//! accepts.

pub mod token;
pub mod token_stream;

// Re-export key types for convenience
pub use token::{Token, TokenClass, TokenKind, ALL_KINDS};
pub use token_stream::TokenStream;
