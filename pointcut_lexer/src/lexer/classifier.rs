//! Context-sensitive classification of ambiguous lexemes
//!
//! A pure function of the accumulated lexeme and the previously emitted
//! non-whitespace token's kind. Rules run in a fixed order, first match
//! wins; context guards are what let `read` be a keyword after `property`
//! but an identifier elsewhere.

use crate::lexer::error::PointcutParsingError;
use crate::tokens::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// Classify an accumulated ambiguous lexeme.
///
/// `start` is the lexeme's char offset, used only for error positions.
/// `predecessor` is the kind of the last non-whitespace token handed off
/// before this lexeme began, if any.
pub fn classify(
    lexeme: &str,
    start: usize,
    predecessor: Option<TokenKind>,
) -> Result<TokenKind, PointcutParsingError> {
    use TokenKind::*;

    let unconditional = [
        PublicModifier,
        ProtectedModifier,
        PrivateModifier,
        StaticKeyword,
        NewKeyword,
        Wildcard,
    ];
    for kind in unconditional {
        if kind.matches(lexeme) {
            return Ok(kind);
        }
    }

    let after_pointcut_or_property =
        matches!(predecessor, Some(PointcutOpen) | Some(PropertyKeyword));
    if after_pointcut_or_property && (ReadAccess.matches(lexeme) || WriteAccess.matches(lexeme)) {
        return Ok(if ReadAccess.matches(lexeme) {
            ReadAccess
        } else {
            WriteAccess
        });
    }

    if predecessor == Some(PointcutOpen) {
        if MethodKeyword.matches(lexeme) {
            return Ok(MethodKeyword);
        }
        if PropertyKeyword.matches(lexeme) {
            return Ok(PropertyKeyword);
        }
    }

    let after_member_access = predecessor.map(|k| k.is_member_access()).unwrap_or(false);
    if after_member_access && NamePattern.matches(lexeme) {
        return Ok(NamePattern);
    }

    let opens_namespace = predecessor
        .map(|k| {
            k.is_access_modifier()
                || matches!(k, Wildcard | NewKeyword | StaticKeyword | AnnotationStart)
        })
        .unwrap_or(false);
    if opens_namespace && NamespacePattern.matches(lexeme) {
        return Ok(NamespacePattern);
    }

    if PointcutIdentifier.matches(lexeme) {
        return Ok(PointcutIdentifier);
    }

    match first_intruder(lexeme) {
        Some((offset, character)) => Err(PointcutParsingError::InvalidCharacter {
            character,
            lexeme: lexeme.to_string(),
            position: start + offset,
        }),
        None => Err(PointcutParsingError::InvalidLexeme {
            lexeme: lexeme.to_string(),
            position: start,
        }),
    }
}

/// First character of the lexeme that no ambiguous kind's character class
/// accepts, with its offset into the lexeme
fn first_intruder(lexeme: &str) -> Option<(usize, char)> {
    static CLASSES: OnceLock<Vec<Regex>> = OnceLock::new();
    let classes = CLASSES.get_or_init(|| {
        [
            r"^\*$",              // wildcard
            r"^[A-Za-z0-9_*\\]$", // namespace-pattern chars
            r"^[A-Za-z0-9_*]$",   // name-pattern chars
            r"^[A-Za-z0-9_]$",    // identifier chars
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("char-class patterns are valid regexes"))
        .collect()
    });

    lexeme.chars().enumerate().find(|(_, ch)| {
        let probe = ch.to_string();
        !classes.iter().any(|class| class.is_match(&probe))
    })
}
