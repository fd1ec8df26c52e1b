//! Lexing errors with precise source positions
//!
//! Every error is fatal to the current tokenize pass: the lexer never
//! retries or error-corrects, and an errored machine must be reset before it
//! is driven again. Positions are zero-based char offsets into the
//! expression.

use crate::config::constants::compile_time::lexical::{MAX_EXPRESSION_LENGTH, MAX_TOKEN_COUNT};
use crate::logging::{codes, Code};
use crate::utils::Span;

/// Pointcut lexing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointcutParsingError {
    #[error("Missing input: cannot tokenize an empty pointcut expression")]
    MissingInput,

    #[error("Unexpected character '{character}' while parsing {token} token at position {position}")]
    UnexpectedCharacter {
        character: char,
        token: &'static str,
        position: usize,
    },

    #[error("Incomplete {token} token: end of input at position {position}")]
    IncompleteToken {
        token: &'static str,
        position: usize,
    },

    #[error("Invalid character '{character}' in lexeme '{lexeme}' at position {position}")]
    InvalidCharacter {
        character: char,
        lexeme: String,
        position: usize,
    },

    #[error("Invalid lexeme '{lexeme}' at position {position}")]
    InvalidLexeme { lexeme: String, position: usize },

    #[error("Unknown token type: lexeme '{lexeme}' reached hand-off unclassified")]
    UnknownTokenType { lexeme: String },

    #[error("Lexer already finished: reset to token start before processing position {position}")]
    LexerAlreadyFinished { position: usize },

    #[error("Expression too long: {length} characters (max {MAX_EXPRESSION_LENGTH})")]
    ExpressionTooLong { length: usize },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },
}

impl PointcutParsingError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::MissingInput => codes::lexical::MISSING_INPUT,
            Self::UnexpectedCharacter { .. } => codes::lexical::UNEXPECTED_CHARACTER,
            Self::IncompleteToken { .. } => codes::lexical::INCOMPLETE_TOKEN,
            Self::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            Self::InvalidLexeme { .. } => codes::lexical::INVALID_LEXEME,
            Self::UnknownTokenType { .. } => codes::lexical::UNKNOWN_TOKEN_TYPE,
            Self::LexerAlreadyFinished { .. } => codes::lexical::LEXER_FINISHED,
            Self::ExpressionTooLong { .. } => codes::lexical::EXPRESSION_TOO_LONG,
            Self::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    /// Offset of the offending character, when the error has one
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::IncompleteToken { position, .. }
            | Self::InvalidCharacter { position, .. }
            | Self::InvalidLexeme { position, .. }
            | Self::LexerAlreadyFinished { position } => Some(*position),
            _ => None,
        }
    }

    /// Span for diagnostic rendering, when the error is positioned
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidLexeme { lexeme, position } => Some(Span::new(
                *position,
                *position + lexeme.chars().count(),
            )),
            _ => self.position().map(Span::single),
        }
    }
}
