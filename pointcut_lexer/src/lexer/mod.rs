//! Character-by-character pointcut lexer
//!
//! Two finite state machines cooperate over a hand-off slot: the lexer
//! machine assembles lexemes character by character, and the parser machine
//! receives each finished token and remembers the last significant one so
//! ambiguous lexemes can be classified by what precedes them. The
//! [`Tokenizer`] drives both machines and runs the replay protocol.

pub mod classifier;
pub mod data;
pub mod driver;
pub mod error;
pub mod states;
pub mod tables;

pub use data::{CharInput, LexerData, LexerMachine, ParserData, ParserMachine};
pub use driver::{tokenize, LexerMetrics, Tokenizer};
pub use error::PointcutParsingError;
pub use states::{LexerState, OperatorKind, ParserState};
