//! Whitespace state: accumulates a run of whitespace into one token
//!
//! Entered from token start with the first whitespace character already
//! appended and the kind already assigned. The first non-whitespace
//! character closes the run and is replayed against the token-start state.

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

    if tables::is_whitespace_char(ch) {
        machine.data_mut().append_char(ch);
        if is_last {
            hand_off(machine, parser)?;
            machine.set_state(LexerState::End);
        } else {
            machine.set_state(LexerState::Whitespace);
        }
        return Ok(());
    }

    hand_off(machine, parser)?;
    machine.set_state(LexerState::TokenStart);
    machine.data_mut().request_replay(ch, pos, is_last);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::states::test_support::machines;
    use crate::tokens::TokenKind;

    #[test]
    fn test_whitespace_run_accumulates_into_one_token() {
        let (mut lexer, mut parser) = machines();
        for (pos, ch) in "  \t".chars().enumerate() {
            lexer
                .process(CharInput {
                    ch,
                    pos,
                    is_last: false,
                    parser: &mut parser,
                })
                .unwrap();
            assert!(parser.data().token().is_none());
        }
        assert_eq!(*lexer.state(), LexerState::Whitespace);
        assert_eq!(lexer.data().token().lexeme(), "  \t");
    }

    #[test]
    fn test_trailing_whitespace_hands_off_at_end_of_input() {
        let (mut lexer, mut parser) = machines();
        lexer
            .process(CharInput {
                ch: ' ',
                pos: 0,
                is_last: false,
                parser: &mut parser,
            })
            .unwrap();
        lexer
            .process(CharInput {
                ch: ' ',
                pos: 1,
                is_last: true,
                parser: &mut parser,
            })
            .unwrap();

        let token = parser.data_mut().take_token().unwrap();
        assert_eq!(token.kind(), Some(TokenKind::Whitespace));
        assert_eq!(token.lexeme(), "  ");
        assert_eq!(*lexer.state(), LexerState::End);
    }

    #[test]
    fn test_non_whitespace_closes_the_run_and_replays() {
        let (mut lexer, mut parser) = machines();
        for (pos, ch) in "   ".chars().enumerate() {
            lexer
                .process(CharInput {
                    ch,
                    pos,
                    is_last: false,
                    parser: &mut parser,
                })
                .unwrap();
        }
        lexer
            .process(CharInput {
                ch: 'a',
                pos: 3,
                is_last: true,
                parser: &mut parser,
            })
            .unwrap();

        let token = parser.data_mut().take_token().unwrap();
        assert_eq!(token.kind(), Some(TokenKind::Whitespace));
        assert_eq!(token.lexeme(), "   ");
        assert_eq!(token.start(), 0);

        assert_eq!(*lexer.state(), LexerState::TokenStart);
        let replay = lexer.data_mut().take_replay().unwrap();
        assert_eq!((replay.ch, replay.pos, replay.is_last), ('a', 3, true));
    }
}
