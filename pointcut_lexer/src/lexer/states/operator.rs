//! Two-character operator states
//!
//! Entered from token start with the first character already appended and
//! the kind already assigned. The one character seen here must complete the
//! operator's two-character lexeme exactly.

use crate::lexer::data::{CharInput, LexerMachine};
use crate::lexer::error::PointcutParsingError;
use crate::lexer::states::{hand_off, LexerState, OperatorKind};

pub(super) fn handle(
    kind: OperatorKind,
    input: CharInput<'_>,
    machine: &mut LexerMachine,
) -> Result<(), PointcutParsingError> {
    let CharInput {
        ch,
        pos,
        is_last,
        parser,
    } = input;

    machine.data_mut().append_char(ch);

    let token_kind = kind.token_kind();
    if !token_kind.matches(machine.data().token().lexeme()) {
        return Err(PointcutParsingError::UnexpectedCharacter {
            character: ch,
            token: token_kind.label(),
            position: pos,
        });
    }

    hand_off(machine, parser)?;
    machine.set_state(if is_last {
        LexerState::End
    } else {
        LexerState::TokenStart
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::states::test_support::machines;
    use crate::tokens::TokenKind;
    use assert_matches::assert_matches;

    fn feed(lexer: &mut crate::lexer::data::LexerMachine, parser: &mut crate::lexer::data::ParserMachine, ch: char, pos: usize, is_last: bool) -> Result<(), PointcutParsingError> {
        lexer.process(CharInput {
            ch,
            pos,
            is_last,
            parser,
        })
    }

    #[test]
    fn test_completed_operator_is_handed_off() {
        let (mut lexer, mut parser) = machines();
        feed(&mut lexer, &mut parser, ':', 4, false).unwrap();
        feed(&mut lexer, &mut parser, ':', 5, false).unwrap();

        let token = parser.data_mut().take_token().unwrap();
        assert_eq!(token.kind(), Some(TokenKind::StaticAccess));
        assert_eq!(token.lexeme(), "::");
        assert_eq!(token.start(), 4);
        assert_eq!(*lexer.state(), LexerState::TokenStart);
    }

    #[test]
    fn test_operator_ending_the_expression_finishes_the_machine() {
        let (mut lexer, mut parser) = machines();
        feed(&mut lexer, &mut parser, '|', 0, false).unwrap();
        feed(&mut lexer, &mut parser, '|', 1, true).unwrap();

        assert_eq!(
            parser.data_mut().take_token().unwrap().kind(),
            Some(TokenKind::OrOperator)
        );
        assert_eq!(*lexer.state(), LexerState::End);
    }

    #[test]
    fn test_wrong_second_char_is_rejected_with_position() {
        let (mut lexer, mut parser) = machines();
        feed(&mut lexer, &mut parser, '&', 13, false).unwrap();
        let err = feed(&mut lexer, &mut parser, ':', 14, false).unwrap_err();

        assert_matches!(
            err,
            PointcutParsingError::UnexpectedCharacter {
                character: ':',
                token: "AND operator",
                position: 14
            }
        );
        assert_eq!(
            err.to_string(),
            "Unexpected character ':' while parsing AND operator token at position 14"
        );
        assert!(parser.data_mut().take_token().is_none());
    }

    #[test]
    fn test_arrow_operator_round_trip() {
        let (mut lexer, mut parser) = machines();
        feed(&mut lexer, &mut parser, '-', 2, false).unwrap();
        feed(&mut lexer, &mut parser, '>', 3, false).unwrap();

        let token = parser.data_mut().take_token().unwrap();
        assert_eq!(token.kind(), Some(TokenKind::InstanceAccess));
        assert_eq!(token.lexeme(), "->");
    }
}
