//! Token model for pointcut expression lexing
//!
//! Every token kind carries exactly one validating regex. Kinds whose lexeme
//! cannot be decided from the leading character alone (keywords, patterns,
//! identifiers, the wildcard) are classified by the ambiguous-token state
//! against the previously emitted non-whitespace token.
use crate::utils::Span;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Closed enumeration of pointcut token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === DELIMITERS ===
    /// Pointcut body open delimiter `{`
    PointcutOpen,
    /// Pointcut body close delimiter `}`
    PointcutClose,
    /// Standalone opening parenthesis `(`
    ParenthesisOpen,
    /// Closing parenthesis `)`
    ParenthesisClose,
    /// Fused empty method parentheses `()`
    MethodParentheses,

    // === OPERATORS ===
    /// Logical AND `&&`
    AndOperator,
    /// Logical OR `||`
    OrOperator,
    /// Negation `!`
    NotOperator,
    /// Static member access `::`
    StaticAccess,
    /// Instance member access `->`
    InstanceAccess,
    /// Namespace subtype suffix `+`
    NamespacePlus,
    /// Annotation marker `@`
    AnnotationStart,

    // === KEYWORDS ===
    /// Access modifier `public`
    PublicModifier,
    /// Access modifier `protected`
    ProtectedModifier,
    /// Access modifier `private`
    PrivateModifier,
    /// Keyword `static`
    StaticKeyword,
    /// Keyword `new`
    NewKeyword,
    /// Property read operation keyword `read`
    ReadAccess,
    /// Property write operation keyword `write`
    WriteAccess,
    /// Keyword `method`
    MethodKeyword,
    /// Keyword `property`
    PropertyKeyword,

    // === PATTERNS AND IDENTIFIERS ===
    /// Bare wildcard `*`
    Wildcard,
    /// Member name pattern, may embed wildcards
    NamePattern,
    /// Backslash-separated namespace pattern, may embed wildcards
    NamespacePattern,
    /// Named pointcut reference
    PointcutIdentifier,

    // === FORMATTING ===
    /// A run of whitespace characters
    Whitespace,
}

/// Every kind, in declaration order. Used for table construction and tests.
pub const ALL_KINDS: &[TokenKind] = &[
    TokenKind::PointcutOpen,
    TokenKind::PointcutClose,
    TokenKind::ParenthesisOpen,
    TokenKind::ParenthesisClose,
    TokenKind::MethodParentheses,
    TokenKind::AndOperator,
    TokenKind::OrOperator,
    TokenKind::NotOperator,
    TokenKind::StaticAccess,
    TokenKind::InstanceAccess,
    TokenKind::NamespacePlus,
    TokenKind::AnnotationStart,
    TokenKind::PublicModifier,
    TokenKind::ProtectedModifier,
    TokenKind::PrivateModifier,
    TokenKind::StaticKeyword,
    TokenKind::NewKeyword,
    TokenKind::ReadAccess,
    TokenKind::WriteAccess,
    TokenKind::MethodKeyword,
    TokenKind::PropertyKeyword,
    TokenKind::Wildcard,
    TokenKind::NamePattern,
    TokenKind::NamespacePattern,
    TokenKind::PointcutIdentifier,
    TokenKind::Whitespace,
];

/// Token classification for consumers that group kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Structural delimiters
    Delimiter,
    /// Operator symbols
    Operator,
    /// Reserved words
    Keyword,
    /// Name and namespace patterns (including the bare wildcard)
    Pattern,
    /// Named pointcut references
    Identifier,
    /// Formatting tokens
    Whitespace,
}

impl TokenKind {
    /// The validating regex source for this kind
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::PointcutOpen => r"^\{$",
            Self::PointcutClose => r"^\}$",
            Self::ParenthesisOpen => r"^\($",
            Self::ParenthesisClose => r"^\)$",
            Self::MethodParentheses => r"^\(\)$",
            Self::AndOperator => r"^&&$",
            Self::OrOperator => r"^\|\|$",
            Self::NotOperator => r"^!$",
            Self::StaticAccess => r"^::$",
            Self::InstanceAccess => r"^->$",
            Self::NamespacePlus => r"^\+$",
            Self::AnnotationStart => r"^@$",
            Self::PublicModifier => r"^public$",
            Self::ProtectedModifier => r"^protected$",
            Self::PrivateModifier => r"^private$",
            Self::StaticKeyword => r"^static$",
            Self::NewKeyword => r"^new$",
            Self::ReadAccess => r"^read$",
            Self::WriteAccess => r"^write$",
            Self::MethodKeyword => r"^method$",
            Self::PropertyKeyword => r"^property$",
            Self::Wildcard => r"^\*$",
            Self::NamePattern => r"^[A-Za-z_*][A-Za-z0-9_*]*$",
            Self::NamespacePattern => r"^\\?[A-Za-z_*][A-Za-z0-9_*]*(?:\\[A-Za-z0-9_*]+)*$",
            Self::PointcutIdentifier => r"^[A-Za-z_][A-Za-z0-9_]*$",
            Self::Whitespace => r"^\s+$",
        }
    }

    /// The compiled validating regex, built once per process
    pub fn regex(&self) -> &'static Regex {
        static COMPILED: OnceLock<HashMap<TokenKind, Regex>> = OnceLock::new();
        let table = COMPILED.get_or_init(|| {
            ALL_KINDS
                .iter()
                .map(|kind| {
                    let regex = Regex::new(kind.pattern())
                        .expect("token kind patterns are valid regexes");
                    (*kind, regex)
                })
                .collect()
        });
        &table[self]
    }

    /// Check a lexeme against this kind's validating regex
    pub fn matches(&self, lexeme: &str) -> bool {
        self.regex().is_match(lexeme)
    }

    /// Symbolic name used in diagnostics, resolved at compile time
    pub fn label(&self) -> &'static str {
        match self {
            Self::PointcutOpen => "pointcut open delimiter",
            Self::PointcutClose => "pointcut close delimiter",
            Self::ParenthesisOpen => "opening parenthesis",
            Self::ParenthesisClose => "closing parenthesis",
            Self::MethodParentheses => "method parentheses",
            Self::AndOperator => "AND operator",
            Self::OrOperator => "OR operator",
            Self::NotOperator => "NOT operator",
            Self::StaticAccess => "static access operator",
            Self::InstanceAccess => "instance access operator",
            Self::NamespacePlus => "namespace plus operator",
            Self::AnnotationStart => "annotation start",
            Self::PublicModifier => "public access modifier",
            Self::ProtectedModifier => "protected access modifier",
            Self::PrivateModifier => "private access modifier",
            Self::StaticKeyword => "static keyword",
            Self::NewKeyword => "new keyword",
            Self::ReadAccess => "read access operation",
            Self::WriteAccess => "write access operation",
            Self::MethodKeyword => "method keyword",
            Self::PropertyKeyword => "property keyword",
            Self::Wildcard => "wildcard",
            Self::NamePattern => "name pattern",
            Self::NamespacePattern => "namespace pattern",
            Self::PointcutIdentifier => "pointcut identifier",
            Self::Whitespace => "whitespace",
        }
    }

    /// Get the classification of this kind
    pub fn token_class(&self) -> TokenClass {
        match self {
            Self::PointcutOpen
            | Self::PointcutClose
            | Self::ParenthesisOpen
            | Self::ParenthesisClose
            | Self::MethodParentheses => TokenClass::Delimiter,

            Self::AndOperator
            | Self::OrOperator
            | Self::NotOperator
            | Self::StaticAccess
            | Self::InstanceAccess
            | Self::NamespacePlus
            | Self::AnnotationStart => TokenClass::Operator,

            Self::PublicModifier
            | Self::ProtectedModifier
            | Self::PrivateModifier
            | Self::StaticKeyword
            | Self::NewKeyword
            | Self::ReadAccess
            | Self::WriteAccess
            | Self::MethodKeyword
            | Self::PropertyKeyword => TokenClass::Keyword,

            Self::Wildcard | Self::NamePattern | Self::NamespacePattern => TokenClass::Pattern,
            Self::PointcutIdentifier => TokenClass::Identifier,
            Self::Whitespace => TokenClass::Whitespace,
        }
    }

    /// Check if this kind is an access modifier keyword
    pub fn is_access_modifier(&self) -> bool {
        matches!(
            self,
            Self::PublicModifier | Self::ProtectedModifier | Self::PrivateModifier
        )
    }

    /// Check if this kind is a member access operator
    pub fn is_member_access(&self) -> bool {
        matches!(self, Self::StaticAccess | Self::InstanceAccess)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A pointcut token: a lexeme with its start offset and, once classified,
/// its kind.
///
/// While a token is being scanned the lexer mutates it in place; the lexeme
/// only ever grows by appending the character currently being processed.
/// `kind` stays `None` until classification. Exactly one token is in flight
/// in the lexer at a time, and a token is never handed to the parser store
/// with `kind == None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    kind: Option<TokenKind>,
    lexeme: String,
    start: usize,
}

impl Token {
    /// Begin an empty, unclassified token at the given char offset
    pub fn begin(start: usize) -> Self {
        Self {
            kind: None,
            lexeme: String::new(),
            start,
        }
    }

    /// Construct a fully classified token (tests, stream assembly)
    pub fn classified(kind: TokenKind, lexeme: impl Into<String>, start: usize) -> Self {
        Self {
            kind: Some(kind),
            lexeme: lexeme.into(),
            start,
        }
    }

    /// Append the character currently being processed
    pub fn push_char(&mut self, ch: char) {
        self.lexeme.push(ch);
    }

    /// Assign or overwrite the kind
    pub fn set_kind(&mut self, kind: TokenKind) {
        self.kind = Some(kind);
    }

    /// The kind, if classified
    pub fn kind(&self) -> Option<TokenKind> {
        self.kind
    }

    /// The raw accumulated lexeme
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Start offset (zero-based char offset into the expression)
    pub fn start(&self) -> usize {
        self.start
    }

    /// Lexeme length in characters
    pub fn len(&self) -> usize {
        self.lexeme.chars().count()
    }

    /// Check if the lexeme is still empty
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// Span covered by this token in the expression
    pub fn span(&self) -> Span {
        Span::new(self.start, self.start + self.len())
    }

    /// Check if this token is whitespace
    pub fn is_whitespace(&self) -> bool {
        self.kind == Some(TokenKind::Whitespace)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(f, "{} {:?} at {}", kind.label(), self.lexeme, self.start),
            None => write!(f, "unclassified {:?} at {}", self.lexeme, self.start),
        }
    }
}
