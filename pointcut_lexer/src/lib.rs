// Internal modules
#[macro_use]
pub mod logging;

pub mod config;
pub mod fsm;
pub mod lexer;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexer::{tokenize, LexerMetrics, PointcutParsingError, Tokenizer};
pub use tokens::{Token, TokenKind, TokenStream};
pub use utils::{SourceExpression, Span};
