//! Lexer state machine states
//!
//! The lexer's behavior is a closed enum dispatched by `match`: one handler
//! module per state, all sharing the lookup tables in
//! [`crate::lexer::tables`]. Every handler either appends the current
//! character to the in-flight token, finalizes that token into the parser's
//! hand-off slot, schedules the character for replay, or fails the pass.
//!
//! [`LexerState::End`] is terminal. It rejects all input and is only left by
//! an external reset through the driver.

mod ambiguous;
mod operator;
mod parenthesis;
mod token_start;
mod whitespace;

use crate::fsm::State;
use crate::lexer::data::{CharInput, LexerMachine, ParserMachine};
use crate::lexer::error::PointcutParsingError;
use crate::tokens::TokenKind;

/// States of the lexer machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexerState {
    /// Between tokens; every character seen here begins a fresh token
    #[default]
    TokenStart,
    /// Scanning the second character of a two-character operator
    Operator(OperatorKind),
    /// Accumulating a whitespace run
    Whitespace,
    /// Saw `(`; deciding between `()` and a standalone parenthesis
    Parenthesis,
    /// Accumulating a keyword, pattern, or identifier lexeme
    Ambiguous,
    /// Terminal; all input is rejected until an external reset
    End,
}

/// The four two-character operators with a literal second character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    And,
    Or,
    StaticAccess,
    InstanceAccess,
}

impl OperatorKind {
    /// Token kind this operator completes into
    pub fn token_kind(&self) -> TokenKind {
        match self {
            Self::And => TokenKind::AndOperator,
            Self::Or => TokenKind::OrOperator,
            Self::StaticAccess => TokenKind::StaticAccess,
            Self::InstanceAccess => TokenKind::InstanceAccess,
        }
    }
}

/// States of the parser-side peer machine.
///
/// Grammar-driven transitions are out of scope here; the peer exists for its
/// data store, so it carries a single collecting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    CollectingTokens,
}

impl State<LexerMachine> for LexerState {
    type Input<'a> = CharInput<'a>;
    type Error = PointcutParsingError;

    fn on_input(
        self,
        input: CharInput<'_>,
        machine: &mut LexerMachine,
    ) -> Result<(), PointcutParsingError> {
        match self {
            Self::TokenStart => token_start::handle(input, machine),
            Self::Operator(kind) => operator::handle(kind, input, machine),
            Self::Whitespace => whitespace::handle(input, machine),
            Self::Parenthesis => parenthesis::handle(input, machine),
            Self::Ambiguous => ambiguous::handle(input, machine),
            Self::End => Err(PointcutParsingError::LexerAlreadyFinished {
                position: input.pos,
            }),
        }
    }
}

/// Move the in-flight token into the parser's hand-off slot.
///
/// A token must be classified before hand-off; an unclassified one is an
/// internal consistency failure, not a user error.
fn hand_off(
    machine: &mut LexerMachine,
    parser: &mut ParserMachine,
) -> Result<(), PointcutParsingError> {
    let token = machine.data().token().clone();
    if token.kind().is_none() {
        return Err(PointcutParsingError::UnknownTokenType {
            lexeme: token.lexeme().to_string(),
        });
    }
    parser.data_mut().set_token(token);
    Ok(())
}
