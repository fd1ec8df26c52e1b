//! Token-start state: every character seen here begins a fresh token
//!
//! Dispatch order is fixed: the single-character table, then the ordered
//! double-character table, then the ambiguous fallback. A character matching
//! neither table is assumed to start a keyword, pattern, or identifier; its
//! validity is only decided when that lexeme is classified.

use crate::lexer::data::{CharInput, LexerMachine};
use crate::lexer::error::PointcutParsingError;
use crate::lexer::states::{hand_off, LexerState};
use crate::lexer::tables;

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

    machine.data_mut().begin_token(pos);

    if let Some(kind) = tables::single_char_kind(ch) {
        machine.data_mut().append_char(ch);
        machine.data_mut().set_kind(kind);
        hand_off(machine, parser)?;
        machine.set_state(if is_last {
            LexerState::End
        } else {
            LexerState::TokenStart
        });
        return Ok(());
    }

    if let Some(rule) = tables::matching_double_char_rule(ch) {
        machine.data_mut().append_char(ch);
        machine.data_mut().set_kind(rule.kind);

        if is_last {
            if rule.second.is_empty() {
                // whitespace / parenthesis: complete as a one-char token
                hand_off(machine, parser)?;
                machine.set_state(LexerState::End);
                return Ok(());
            }
            return Err(PointcutParsingError::IncompleteToken {
                token: rule.kind.label(),
                position: pos,
            });
        }

        machine.set_state(rule.successor);
        return Ok(());
    }

    // Ambiguous lexeme start. When this is the final character the ambiguous
    // state must still run its end-of-input classification, so the character
    // is replayed instead of appended here.
    machine.set_state(LexerState::Ambiguous);
    if is_last {
        machine.data_mut().request_replay(ch, pos, is_last);
    } else {
        machine.data_mut().append_char(ch);
    }
    Ok(())
}
