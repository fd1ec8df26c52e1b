//! Parenthesis state: one character of lookahead after `(`
//!
//! Entered from token start with `(` appended and `ParenthesisOpen`
//! assigned. An immediately following `)` fuses the pair into a single
//! method-parentheses token; anything else emits the standalone opening
//! parenthesis and replays the current character.

use crate::lexer::data::{CharInput, LexerMachine};
use crate::lexer::error::PointcutParsingError;
use crate::lexer::states::{hand_off, LexerState};
use crate::tokens::TokenKind;

pub(super) fn handle(
    input: CharInput<'_>,
    machine: &mut LexerMachine,
) -> Result<(), PointcutParsingError> {
    let CharInput {
        ch,
        pos,
        is_last,
        parser,
    } = input;

    let mut candidate = machine.data().token().lexeme().to_string();
    candidate.push(ch);

    if TokenKind::MethodParentheses.matches(&candidate) {
        machine.data_mut().append_char(ch);
        machine.data_mut().set_kind(TokenKind::MethodParentheses);
        hand_off(machine, parser)?;
        machine.set_state(if is_last {
            LexerState::End
        } else {
            LexerState::TokenStart
        });
        return Ok(());
    }

    hand_off(machine, parser)?;
    machine.set_state(LexerState::TokenStart);
    machine.data_mut().request_replay(ch, pos, is_last);
    Ok(())
}
