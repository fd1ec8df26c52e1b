//! Ambiguous state: keywords, patterns, and identifiers
//!
//! The lexeme grows until an unambiguous boundary character or end of input,
//! then classification decides its kind from the lexeme itself plus the
//! previously emitted non-whitespace token. A boundary character is never
//! consumed here; it is replayed against the token-start state.

use crate::lexer::classifier;
use crate::lexer::data::{CharInput, LexerMachine, ParserMachine};
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

    if tables::is_unambiguous_boundary(ch) {
        classify_and_hand_off(machine, parser)?;
        machine.set_state(LexerState::TokenStart);
        machine.data_mut().request_replay(ch, pos, is_last);
        return Ok(());
    }

    machine.data_mut().append_char(ch);
    if is_last {
        classify_and_hand_off(machine, parser)?;
        machine.set_state(LexerState::End);
    } else {
        machine.set_state(LexerState::Ambiguous);
    }
    Ok(())
}

fn classify_and_hand_off(
    machine: &mut LexerMachine,
    parser: &mut ParserMachine,
) -> Result<(), PointcutParsingError> {
    let kind = classifier::classify(
        machine.data().token().lexeme(),
        machine.data().token().start(),
        parser.data().last_non_whitespace_kind(),
    )?;
    machine.data_mut().set_kind(kind);
    hand_off(machine, parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::states::test_support::machines;
    use crate::tokens::{Token, TokenKind};
    use assert_matches::assert_matches;

    fn feed_word(
        lexer: &mut LexerMachine,
        parser: &mut ParserMachine,
        word: &str,
        last_is_end: bool,
    ) -> Result<(), PointcutParsingError> {
        let count = word.chars().count();
        for (pos, ch) in word.chars().enumerate() {
            lexer.process(CharInput {
                ch,
                pos,
                is_last: last_is_end && pos + 1 == count,
                parser,
            })?;
        }
        Ok(())
    }

    #[test]
    fn test_keyword_classified_at_end_of_input() {
        let (mut lexer, mut parser) = machines();
        feed_word(&mut lexer, &mut parser, "public", true).unwrap();

        let token = parser.data_mut().take_token().unwrap();
        assert_eq!(token.kind(), Some(TokenKind::PublicModifier));
        assert_eq!(token.lexeme(), "public");
        assert_eq!(token.start(), 0);
        assert_eq!(*lexer.state(), LexerState::End);
    }

    #[test]
    fn test_boundary_char_triggers_classification_and_replay() {
        let (mut lexer, mut parser) = machines();
        feed_word(&mut lexer, &mut parser, "static", false).unwrap();
        lexer
            .process(CharInput {
                ch: ' ',
                pos: 6,
                is_last: false,
                parser: &mut parser,
            })
            .unwrap();

        let token = parser.data_mut().take_token().unwrap();
        assert_eq!(token.kind(), Some(TokenKind::StaticKeyword));

        assert_eq!(*lexer.state(), LexerState::TokenStart);
        let replay = lexer.data_mut().take_replay().unwrap();
        assert_eq!((replay.ch, replay.pos, replay.is_last), (' ', 6, false));
    }

    #[test]
    fn test_classification_reads_the_predecessor_token() {
        let (mut lexer, mut parser) = machines();
        parser
            .data_mut()
            .note_predecessor(&Token::classified(TokenKind::InstanceAccess, "->", 0));

        feed_word(&mut lexer, &mut parser, "get*", true).unwrap();
        let token = parser.data_mut().take_token().unwrap();
        assert_eq!(token.kind(), Some(TokenKind::NamePattern));
    }

    #[test]
    fn test_unclassifiable_lexeme_fails_the_pass() {
        let (mut lexer, mut parser) = machines();
        parser
            .data_mut()
            .note_predecessor(&Token::classified(TokenKind::PointcutOpen, "{", 0));

        let err = feed_word(&mut lexer, &mut parser, "a#b", true).unwrap_err();
        assert_matches!(
            err,
            PointcutParsingError::InvalidCharacter {
                character: '#',
                position: 1,
                ..
            }
        );
    }
}
