//! Shared unambiguous-token lookup tables
//!
//! Two tables drive token-start dispatch and ambiguous-token boundary
//! detection. Both are fixed at compile time; their regexes are compiled once
//! per process.
//!
//! The double-character table is ordered — AND, OR, static access, instance
//! access, whitespace, parenthesis — and the first matching entry wins.
//! Whitespace and the opening parenthesis carry an empty `second` literal:
//! their probe only constrains the first character, and the successor state
//! performs the real continuation scanning.

use crate::lexer::states::{LexerState, OperatorKind};
use crate::tokens::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// Single-character unambiguous tokens
const SINGLE_CHAR_TOKENS: &[(char, TokenKind)] = &[
    ('{', TokenKind::PointcutOpen),
    ('}', TokenKind::PointcutClose),
    (')', TokenKind::ParenthesisClose),
    ('!', TokenKind::NotOperator),
    ('+', TokenKind::NamespacePlus),
    ('@', TokenKind::AnnotationStart),
];

/// One entry of the ordered double-character table
#[derive(Debug)]
pub struct DoubleCharRule {
    /// Kind assigned when entering (and, for operators, completing) the token
    pub kind: TokenKind,
    /// Literal second character; empty when the successor state scans freely
    pub second: &'static str,
    /// State that continues scanning this token
    pub successor: LexerState,
    /// Regex over first char + `second`
    probe: &'static str,
}

const DOUBLE_CHAR_RULES: &[DoubleCharRule] = &[
    DoubleCharRule {
        kind: TokenKind::AndOperator,
        second: "&",
        successor: LexerState::Operator(OperatorKind::And),
        probe: r"^&&$",
    },
    DoubleCharRule {
        kind: TokenKind::OrOperator,
        second: "|",
        successor: LexerState::Operator(OperatorKind::Or),
        probe: r"^\|\|$",
    },
    DoubleCharRule {
        kind: TokenKind::StaticAccess,
        second: ":",
        successor: LexerState::Operator(OperatorKind::StaticAccess),
        probe: r"^::$",
    },
    DoubleCharRule {
        kind: TokenKind::InstanceAccess,
        second: ">",
        successor: LexerState::Operator(OperatorKind::InstanceAccess),
        probe: r"^->$",
    },
    DoubleCharRule {
        kind: TokenKind::Whitespace,
        second: "",
        successor: LexerState::Whitespace,
        probe: r"^\s$",
    },
    DoubleCharRule {
        kind: TokenKind::ParenthesisOpen,
        second: "",
        successor: LexerState::Parenthesis,
        probe: r"^\($",
    },
];

fn compiled_probes() -> &'static Vec<Regex> {
    static PROBES: OnceLock<Vec<Regex>> = OnceLock::new();
    PROBES.get_or_init(|| {
        DOUBLE_CHAR_RULES
            .iter()
            .map(|rule| Regex::new(rule.probe).expect("double-char probes are valid regexes"))
            .collect()
    })
}

impl DoubleCharRule {
    /// Test whether `ch` can begin this entry's token: the probe runs over
    /// the supplied character concatenated with the literal second character
    fn admits_first_char(&self, ch: char, probe: &Regex) -> bool {
        let candidate = format!("{}{}", ch, self.second);
        probe.is_match(&candidate)
    }
}

/// Look up a single-character unambiguous token, validating the character
/// against the kind's regex
pub fn single_char_kind(ch: char) -> Option<TokenKind> {
    let kind = SINGLE_CHAR_TOKENS
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, kind)| *kind)?;
    kind.matches(&ch.to_string()).then_some(kind)
}

/// First double-character entry admitting `ch`, in declaration order
pub fn matching_double_char_rule(ch: char) -> Option<&'static DoubleCharRule> {
    let probes = compiled_probes();
    DOUBLE_CHAR_RULES
        .iter()
        .zip(probes.iter())
        .find(|(rule, probe)| rule.admits_first_char(ch, probe))
        .map(|(rule, _)| rule)
}

/// Test `ch` against the whitespace-char regex
pub fn is_whitespace_char(ch: char) -> bool {
    matching_double_char_rule(ch)
        .map(|rule| rule.kind == TokenKind::Whitespace)
        .unwrap_or(false)
}

/// Check whether `ch` begins any unambiguous token, the same way token-start
/// dispatch does. The ambiguous state uses this purely to detect token
/// boundaries.
pub fn is_unambiguous_boundary(ch: char) -> bool {
    single_char_kind(ch).is_some() || matching_double_char_rule(ch).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_lookup() {
        assert_eq!(single_char_kind('{'), Some(TokenKind::PointcutOpen));
        assert_eq!(single_char_kind(')'), Some(TokenKind::ParenthesisClose));
        assert_eq!(single_char_kind('@'), Some(TokenKind::AnnotationStart));
        assert_eq!(single_char_kind('a'), None);
        assert_eq!(single_char_kind('('), None);
    }

    #[test]
    fn test_double_char_dispatch() {
        let rule = matching_double_char_rule('&').unwrap();
        assert_eq!(rule.kind, TokenKind::AndOperator);
        assert_eq!(rule.second, "&");
        assert_eq!(rule.successor, LexerState::Operator(OperatorKind::And));

        let rule = matching_double_char_rule('-').unwrap();
        assert_eq!(rule.kind, TokenKind::InstanceAccess);

        let rule = matching_double_char_rule(' ').unwrap();
        assert_eq!(rule.kind, TokenKind::Whitespace);
        assert!(rule.second.is_empty());

        let rule = matching_double_char_rule('(').unwrap();
        assert_eq!(rule.kind, TokenKind::ParenthesisOpen);
        assert_eq!(rule.successor, LexerState::Parenthesis);

        assert!(matching_double_char_rule('x').is_none());
    }

    #[test]
    fn test_boundary_detection_merges_both_tables() {
        for ch in ['{', '}', ')', '!', '+', '@', '&', '|', ':', '-', ' ', '\t', '('] {
            assert!(is_unambiguous_boundary(ch), "{:?} should be a boundary", ch);
        }
        for ch in ['a', 'Z', '_', '*', '\\', '0'] {
            assert!(!is_unambiguous_boundary(ch), "{:?} should not be a boundary", ch);
        }
    }

    #[test]
    fn test_whitespace_char_probe() {
        assert!(is_whitespace_char(' '));
        assert!(is_whitespace_char('\t'));
        assert!(is_whitespace_char('\n'));
        assert!(!is_whitespace_char('x'));
    }
}
