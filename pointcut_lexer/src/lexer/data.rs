//! Typed data stores for the two cooperating machines
//!
//! The stringly-keyed data bags of the original design are replaced by two
//! explicit context structs: [`LexerData`] (the in-flight token plus the
//! reiterate signal) and [`ParserData`] (the token hand-off slot plus the
//! non-whitespace predecessor). Updates go through explicit methods with
//! read-old/compute-new semantics instead of key/value writes.

use crate::fsm::Machine;
use crate::lexer::states::{LexerState, ParserState};
use crate::tokens::{Token, TokenKind};

/// The lexer-side machine: lexer states over [`LexerData`]
pub type LexerMachine = Machine<LexerState, LexerData>;

/// The parser-side peer. Its grammar-driven transition logic is out of
/// scope; the lexer only touches its data store.
pub type ParserMachine = Machine<ParserState, ParserData>;

/// A character scheduled for re-delivery after a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replay {
    pub ch: char,
    pub pos: usize,
    pub is_last: bool,
}

/// Per-step input fed by the driver loop
pub struct CharInput<'a> {
    /// Character being processed
    pub ch: char,
    /// Zero-based char offset of `ch` in the expression
    pub pos: usize,
    /// End-of-input flag
    pub is_last: bool,
    /// The cooperating parser-side machine receiving finished tokens
    pub parser: &'a mut ParserMachine,
}

/// Lexer-side data store: exactly one token is in flight at a time.
#[derive(Debug, Clone)]
pub struct LexerData {
    token: Token,
    reiterate: Option<Replay>,
}

impl Default for LexerData {
    fn default() -> Self {
        Self {
            token: Token::begin(0),
            reiterate: None,
        }
    }
}

impl LexerData {
    /// Discard the in-flight token and begin a fresh one at `pos`
    pub fn begin_token(&mut self, pos: usize) {
        self.token = Token::begin(pos);
    }

    /// The token currently being scanned
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Append the character being processed to the in-flight lexeme
    pub fn append_char(&mut self, ch: char) {
        self.token.push_char(ch);
    }

    /// Assign the in-flight token's kind
    pub fn set_kind(&mut self, kind: TokenKind) {
        self.token.set_kind(kind);
    }

    /// Schedule the current character for re-delivery against whatever state
    /// the machine transitions into
    pub fn request_replay(&mut self, ch: char, pos: usize, is_last: bool) {
        self.reiterate = Some(Replay { ch, pos, is_last });
    }

    /// Consume the reiterate signal. The driver must call this before the
    /// re-fed step, which is what prevents infinite reiteration.
    pub fn take_replay(&mut self) -> Option<Replay> {
        self.reiterate.take()
    }

    /// Check whether a replay is pending without consuming it
    pub fn replay_pending(&self) -> bool {
        self.reiterate.is_some()
    }
}

/// Parser-side data store consumed by the lexer.
///
/// `token` is a single-writer single-reader hand-off slot, not a queue: each
/// write overwrites it and the driver drains it after every step.
/// `last_non_whitespace` is owned by the driving context and read-only from
/// the lexer's perspective.
#[derive(Debug, Clone, Default)]
pub struct ParserData {
    token: Option<Token>,
    last_non_whitespace: Option<Token>,
}

impl ParserData {
    /// Write a finished token into the hand-off slot, returning whatever
    /// value it overwrites
    pub fn set_token(&mut self, token: Token) -> Option<Token> {
        self.token.replace(token)
    }

    /// Drain the hand-off slot
    pub fn take_token(&mut self) -> Option<Token> {
        self.token.take()
    }

    /// Peek at the hand-off slot
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// The most recently finalized non-whitespace token
    pub fn last_non_whitespace(&self) -> Option<&Token> {
        self.last_non_whitespace.as_ref()
    }

    /// Kind of the non-whitespace predecessor, the guard context for
    /// ambiguous-token classification
    pub fn last_non_whitespace_kind(&self) -> Option<TokenKind> {
        self.last_non_whitespace.as_ref().and_then(Token::kind)
    }

    /// Record a consumed token as the new predecessor unless it is
    /// whitespace
    pub fn note_predecessor(&mut self, token: &Token) {
        if !token.is_whitespace() {
            self.last_non_whitespace = Some(token.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_token_growth() {
        let mut data = LexerData::default();
        data.begin_token(7);
        data.append_char('&');
        data.append_char('&');
        data.set_kind(TokenKind::AndOperator);

        assert_eq!(data.token().lexeme(), "&&");
        assert_eq!(data.token().start(), 7);
        assert_eq!(data.token().kind(), Some(TokenKind::AndOperator));
    }

    #[test]
    fn test_replay_is_consumed_once() {
        let mut data = LexerData::default();
        data.request_replay('x', 4, false);
        assert!(data.replay_pending());

        let replay = data.take_replay().unwrap();
        assert_eq!(replay, Replay { ch: 'x', pos: 4, is_last: false });
        assert!(data.take_replay().is_none());
    }

    #[test]
    fn test_handoff_slot_overwrites() {
        let mut data = ParserData::default();
        assert!(data.set_token(Token::classified(TokenKind::NotOperator, "!", 0)).is_none());

        let overwritten = data.set_token(Token::classified(TokenKind::Wildcard, "*", 1));
        assert_eq!(overwritten.unwrap().lexeme(), "!");

        let taken = data.take_token().unwrap();
        assert_eq!(taken.kind(), Some(TokenKind::Wildcard));
        assert!(data.take_token().is_none());
    }

    #[test]
    fn test_predecessor_skips_whitespace() {
        let mut data = ParserData::default();
        data.note_predecessor(&Token::classified(TokenKind::PropertyKeyword, "property", 0));
        data.note_predecessor(&Token::classified(TokenKind::Whitespace, "  ", 8));

        assert_eq!(
            data.last_non_whitespace_kind(),
            Some(TokenKind::PropertyKeyword)
        );
    }
}
