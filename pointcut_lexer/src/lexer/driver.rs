//! Tokenize driver: feeds characters through the cooperating machines
//!
//! The driver owns both machines and runs the per-character protocol: call
//! `process`, drain the parser's hand-off slot, then honor a pending replay
//! by re-feeding the identical character against the new current state. The
//! replay flag is consumed before the re-fed step, so a state that keeps
//! requesting replays would have to do so from a different state each time;
//! in practice replay chains are at most two deep (operator start after a
//! closed token).
//!
//! Errors abort the pass and leave the machines indeterminate; the next
//! `tokenize` call resets both before feeding anything.

use crate::config::constants::compile_time::lexical::{MAX_EXPRESSION_LENGTH, MAX_TOKEN_COUNT};
use crate::config::runtime::LexerPreferences;
use crate::fsm::Machine;
use crate::lexer::data::{CharInput, LexerData, LexerMachine, ParserData, ParserMachine};
use crate::lexer::error::PointcutParsingError;
use crate::lexer::states::{LexerState, ParserState};
use crate::logging::codes;
use crate::tokens::{Token, TokenClass, TokenKind, TokenStream};
use crate::{log_debug, log_error, log_success};
use std::collections::HashMap;

/// Per-pass lexer metrics
#[derive(Debug, Clone, Default)]
pub struct LexerMetrics {
    /// Total tokens emitted, whitespace included
    pub total_tokens: usize,
    /// Token counts grouped by class
    pub class_counts: HashMap<TokenClass, usize>,
    /// Number of character replays performed
    pub reiteration_count: usize,
    /// Per-kind usage counts, populated only under the kind-usage preference
    pub kind_usage: HashMap<TokenKind, usize>,
}

impl LexerMetrics {
    fn record_token(&mut self, token: &Token, track_kind_usage: bool) {
        self.total_tokens += 1;
        if let Some(kind) = token.kind() {
            *self.class_counts.entry(kind.token_class()).or_insert(0) += 1;
            if track_kind_usage {
                *self.kind_usage.entry(kind).or_insert(0) += 1;
            }
        }
    }

    /// Count of tokens in a class
    pub fn class_count(&self, class: TokenClass) -> usize {
        self.class_counts.get(&class).copied().unwrap_or(0)
    }

    /// Count of non-whitespace tokens
    pub fn significant_tokens(&self) -> usize {
        self.total_tokens - self.class_count(TokenClass::Whitespace)
    }
}

/// Pointcut expression tokenizer
pub struct Tokenizer {
    lexer: LexerMachine,
    parser: ParserMachine,
    metrics: LexerMetrics,
    preferences: LexerPreferences,
}

impl Tokenizer {
    /// Create a tokenizer with environment-derived preferences
    pub fn new() -> Self {
        Self::with_preferences(LexerPreferences::default())
    }

    /// Create a tokenizer with explicit preferences
    pub fn with_preferences(preferences: LexerPreferences) -> Self {
        Self {
            lexer: Machine::new(LexerState::TokenStart, LexerData::default()),
            parser: Machine::new(ParserState::CollectingTokens, ParserData::default()),
            metrics: LexerMetrics::default(),
            preferences,
        }
    }

    /// Metrics for the most recent pass
    pub fn metrics(&self) -> &LexerMetrics {
        &self.metrics
    }

    /// Tokenize one pointcut expression
    pub fn tokenize(&mut self, expression: &str) -> Result<TokenStream, PointcutParsingError> {
        let result = self.tokenize_inner(expression);
        if let Err(error) = &result {
            self.log_failure(error);
        }
        result
    }

    fn tokenize_inner(&mut self, expression: &str) -> Result<TokenStream, PointcutParsingError> {
        if expression.is_empty() {
            return Err(PointcutParsingError::MissingInput);
        }

        let char_count = expression.chars().count();
        if char_count > MAX_EXPRESSION_LENGTH {
            return Err(PointcutParsingError::ExpressionTooLong { length: char_count });
        }

        self.reset();
        log_debug!("Tokenizing pointcut expression", "length" => char_count);

        let mut tokens = Vec::new();
        for (pos, ch) in expression.chars().enumerate() {
            let is_last = pos + 1 == char_count;
            self.step(ch, pos, is_last, &mut tokens)?;
        }

        let stream = TokenStream::new(tokens);
        if crate::logging::config::log_performance_events() {
            log_success!(
                codes::success::TOKENIZATION_COMPLETE,
                "Pointcut expression tokenized",
                "tokens" => stream.len(),
                "significant" => stream.significant_len(),
                "reiterations" => self.metrics.reiteration_count
            );
        } else {
            log_success!(
                codes::success::TOKENIZATION_COMPLETE,
                "Pointcut expression tokenized"
            );
        }
        Ok(stream)
    }

    /// Restore both machines for a fresh pass. This is the only way out of
    /// the lexer's terminal state.
    pub fn reset(&mut self) {
        self.lexer.set_state(LexerState::TokenStart);
        self.lexer.replace_data(LexerData::default());
        self.parser.set_state(ParserState::CollectingTokens);
        self.parser.replace_data(ParserData::default());
        self.metrics = LexerMetrics::default();
    }

    /// Run one character through the protocol, following replays until the
    /// character is consumed
    fn step(
        &mut self,
        ch: char,
        pos: usize,
        is_last: bool,
        tokens: &mut Vec<Token>,
    ) -> Result<(), PointcutParsingError> {
        loop {
            self.lexer.process(CharInput {
                ch,
                pos,
                is_last,
                parser: &mut self.parser,
            })?;

            self.drain_handoff(tokens)?;

            // Consume the replay flag before the re-fed step
            match self.lexer.data_mut().take_replay() {
                Some(replay) => {
                    self.metrics.reiteration_count += 1;
                    if self.preferences.log_reiterations {
                        log_debug!(
                            "Replaying character against new state",
                            "char" => replay.ch,
                            "position" => replay.pos
                        );
                    }
                    debug_assert_eq!((replay.ch, replay.pos, replay.is_last), (ch, pos, is_last));
                }
                None => return Ok(()),
            }
        }
    }

    fn drain_handoff(&mut self, tokens: &mut Vec<Token>) -> Result<(), PointcutParsingError> {
        if let Some(token) = self.parser.data_mut().take_token() {
            self.parser.data_mut().note_predecessor(&token);
            if self.preferences.collect_detailed_metrics {
                self.metrics
                    .record_token(&token, self.preferences.track_kind_usage);
            }
            tokens.push(token);
            if tokens.len() > MAX_TOKEN_COUNT {
                return Err(PointcutParsingError::TooManyTokens {
                    count: tokens.len(),
                });
            }
        }
        Ok(())
    }

    fn log_failure(&self, error: &PointcutParsingError) {
        let message = error.to_string();
        match error
            .span()
            .filter(|_| self.preferences.include_position_in_errors)
        {
            Some(span) => log_error!(error.error_code(), &message, span = span),
            None => log_error!(error.error_code(), &message),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenize one expression with a throwaway tokenizer
pub fn tokenize(expression: &str) -> Result<TokenStream, PointcutParsingError> {
    Tokenizer::new().tokenize(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn kinds(expression: &str) -> Vec<TokenKind> {
        tokenize(expression).unwrap().kinds()
    }

    #[test]
    fn test_full_expression_kinds_and_positions() {
        let stream = tokenize("@(public Foo->bar())").unwrap();

        let expected = [
            (TokenKind::AnnotationStart, "@", 0),
            (TokenKind::ParenthesisOpen, "(", 1),
            (TokenKind::PublicModifier, "public", 2),
            (TokenKind::Whitespace, " ", 8),
            (TokenKind::NamespacePattern, "Foo", 9),
            (TokenKind::InstanceAccess, "->", 12),
            (TokenKind::NamePattern, "bar", 14),
            (TokenKind::MethodParentheses, "()", 17),
            (TokenKind::ParenthesisClose, ")", 19),
        ];

        assert_eq!(stream.len(), expected.len());
        for (token, (kind, lexeme, start)) in stream.iter().zip(expected) {
            assert_eq!(token.kind(), Some(kind));
            assert_eq!(token.lexeme(), lexeme);
            assert_eq!(token.start(), start);
        }
    }

    #[test]
    fn test_source_round_trip() {
        for expression in [
            "@(public Foo->bar())",
            "{method public *}",
            "   loggable   ",
            "a && b || !c",
        ] {
            assert_eq!(tokenize(expression).unwrap().source(), expression);
        }
    }

    #[test]
    fn test_empty_expression_is_missing_input() {
        assert_matches!(tokenize(""), Err(PointcutParsingError::MissingInput));
    }

    #[test]
    fn test_double_char_operator_completeness() {
        assert_eq!(kinds("&&"), vec![TokenKind::AndOperator]);
        assert_eq!(kinds("||"), vec![TokenKind::OrOperator]);
        assert_eq!(kinds("::"), vec![TokenKind::StaticAccess]);
        assert_eq!(kinds("->"), vec![TokenKind::InstanceAccess]);

        assert_matches!(
            tokenize("&"),
            Err(PointcutParsingError::IncompleteToken {
                token: "AND operator",
                position: 0
            })
        );
        assert_matches!(
            tokenize("a &: b"),
            Err(PointcutParsingError::UnexpectedCharacter {
                character: ':',
                token: "AND operator",
                position: 3
            })
        );
    }

    #[test]
    fn test_whitespace_accumulates_into_one_token() {
        let stream = tokenize("   a").unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.get(0).unwrap().lexeme(), "   ");
        assert_eq!(stream.get(0).unwrap().kind(), Some(TokenKind::Whitespace));
        assert_eq!(
            stream.get(1).unwrap().kind(),
            Some(TokenKind::PointcutIdentifier)
        );
        assert_eq!(stream.get(1).unwrap().start(), 3);
    }

    #[test]
    fn test_parenthesis_disambiguation() {
        assert_eq!(kinds("()"), vec![TokenKind::MethodParentheses]);
        assert_eq!(
            kinds("(x"),
            vec![TokenKind::ParenthesisOpen, TokenKind::PointcutIdentifier]
        );
        assert_eq!(
            kinds("( )"),
            vec![
                TokenKind::ParenthesisOpen,
                TokenKind::Whitespace,
                TokenKind::ParenthesisClose
            ]
        );
    }

    #[test]
    fn test_context_sensitive_read_keyword() {
        // after `property`, `read` is the access-operation keyword
        assert_eq!(
            kinds("{property read}"),
            vec![
                TokenKind::PointcutOpen,
                TokenKind::PropertyKeyword,
                TokenKind::Whitespace,
                TokenKind::ReadAccess,
                TokenKind::PointcutClose,
            ]
        );
        // elsewhere it is a plain identifier
        assert_eq!(
            kinds("loggable read"),
            vec![
                TokenKind::PointcutIdentifier,
                TokenKind::Whitespace,
                TokenKind::PointcutIdentifier,
            ]
        );
    }

    #[test]
    fn test_member_access_patterns() {
        assert_eq!(
            kinds("public App\\Service\\*::get*"),
            vec![
                TokenKind::PublicModifier,
                TokenKind::Whitespace,
                TokenKind::NamespacePattern,
                TokenKind::StaticAccess,
                TokenKind::NamePattern,
            ]
        );
    }

    #[test]
    fn test_logical_operators_between_identifiers() {
        assert_eq!(
            kinds("a && b || !c"),
            vec![
                TokenKind::PointcutIdentifier,
                TokenKind::Whitespace,
                TokenKind::AndOperator,
                TokenKind::Whitespace,
                TokenKind::PointcutIdentifier,
                TokenKind::Whitespace,
                TokenKind::OrOperator,
                TokenKind::Whitespace,
                TokenKind::NotOperator,
                TokenKind::PointcutIdentifier,
            ]
        );
    }

    #[test]
    fn test_expression_length_boundary() {
        let at_limit = "a".repeat(MAX_EXPRESSION_LENGTH);
        assert!(tokenize(&at_limit).is_ok());

        let over_limit = "a".repeat(MAX_EXPRESSION_LENGTH + 1);
        assert_matches!(
            tokenize(&over_limit),
            Err(PointcutParsingError::ExpressionTooLong { length }) if length == MAX_EXPRESSION_LENGTH + 1
        );
    }

    #[test]
    fn test_tokenizer_reuse_after_error() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("a &: b").is_err());

        // the next pass resets the machines and succeeds
        let stream = tokenizer.tokenize("a && b").unwrap();
        assert_eq!(stream.significant_len(), 3);
    }

    #[test]
    fn test_metrics_collection() {
        let mut preferences = LexerPreferences::default();
        preferences.collect_detailed_metrics = true;
        preferences.track_kind_usage = true;

        let mut tokenizer = Tokenizer::with_preferences(preferences);
        tokenizer.tokenize("@(public Foo->bar())").unwrap();

        let metrics = tokenizer.metrics();
        assert_eq!(metrics.total_tokens, 9);
        assert_eq!(metrics.significant_tokens(), 8);
        assert_eq!(metrics.class_count(TokenClass::Delimiter), 3);
        assert_eq!(metrics.class_count(TokenClass::Operator), 2);
        assert_eq!(metrics.class_count(TokenClass::Keyword), 1);
        assert_eq!(metrics.class_count(TokenClass::Pattern), 2);
        assert_eq!(metrics.kind_usage[&TokenKind::PublicModifier], 1);
        // "(p", " F", and "(x"-style boundaries all replay characters
        assert!(metrics.reiteration_count > 0);
    }

    #[test]
    fn test_invalid_character_position_is_absolute() {
        let err = tokenize("abc de#f").unwrap_err();
        assert_matches!(
            err,
            PointcutParsingError::InvalidCharacter {
                character: '#',
                position: 6,
                ..
            }
        );
    }

    #[test]
    fn test_completion_event_reaches_the_global_logger() {
        use crate::logging::events::LogLevel;
        use crate::logging::{self, service, LoggingService};
        use std::sync::Arc;

        let memory = service::create_test_logger();
        let configured = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
        if logging::init_global_logging_with_service(configured).is_err() {
            // another test installed the global logger first
            return;
        }

        tokenize("a && b").unwrap();

        let events = memory.get_events();
        let completion = events
            .iter()
            .find(|event| {
                event.code.as_str() == codes::success::TOKENIZATION_COMPLETE.as_str()
            })
            .expect("tokenization completion event was not logged");
        assert!(completion.context.contains_key("tokens"));
        assert!(completion.context.contains_key("reiterations"));
    }

    #[test]
    fn test_deterministic_output() {
        let first = tokenize("{method public *}").unwrap().kinds();
        for _ in 0..5 {
            assert_eq!(tokenize("{method public *}").unwrap().kinds(), first);
        }
    }
}
