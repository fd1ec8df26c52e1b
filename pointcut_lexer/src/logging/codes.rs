//! Consolidated error codes and classification system
//!
//! Single source of truth for all error and success codes plus their
//! behavioral metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const MISSING_INPUT: Code = Code::new("E101");
    pub const UNEXPECTED_CHARACTER: Code = Code::new("E102");
    pub const INCOMPLETE_TOKEN: Code = Code::new("E103");
    pub const INVALID_CHARACTER: Code = Code::new("E104");
    pub const INVALID_LEXEME: Code = Code::new("E105");
    pub const UNKNOWN_TOKEN_TYPE: Code = Code::new("E106");
    pub const LEXER_FINISHED: Code = Code::new("E107");

    // Security-related lexical error codes
    pub const EXPRESSION_TOO_LONG: Code = Code::new("E108");
    pub const TOO_MANY_TOKENS: Code = Code::new("E109");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I002");
}

/// Every code the lexer can emit. Startup verification walks this list
/// against the metadata registry, so a code added to one without the other
/// fails initialization instead of drifting silently.
pub const ALL_CODES: &[Code] = &[
    system::INTERNAL_ERROR,
    lexical::MISSING_INPUT,
    lexical::UNEXPECTED_CHARACTER,
    lexical::INCOMPLETE_TOKEN,
    lexical::INVALID_CHARACTER,
    lexical::INVALID_LEXEME,
    lexical::UNKNOWN_TOKEN_TYPE,
    lexical::LEXER_FINISHED,
    lexical::EXPRESSION_TOO_LONG,
    lexical::TOO_MANY_TOKENS,
    success::SYSTEM_INITIALIZATION_COMPLETED,
    success::TOKENIZATION_COMPLETE,
];

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn metadata(
    code: &'static str,
    category: &'static str,
    severity: Severity,
    recoverable: bool,
    requires_halt: bool,
    description: &'static str,
    recommended_action: &'static str,
) -> (&'static str, ErrorMetadata) {
    (
        code,
        ErrorMetadata {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        },
    )
}

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        HashMap::from([
            metadata(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
                "File a bug report",
            ),
            metadata(
                "E101",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Empty pointcut expression supplied",
                "Provide a non-empty pointcut expression",
            ),
            metadata(
                "E102",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Unexpected character while completing a two-character operator",
                "Fix the operator (&&, ||, ::, ->)",
            ),
            metadata(
                "E103",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Expression ended in the middle of a two-character operator",
                "Complete the operator or remove its first character",
            ),
            metadata(
                "E104",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Character not valid in any keyword, pattern, or identifier",
                "Remove the offending character from the expression",
            ),
            metadata(
                "E105",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Lexeme does not match any token kind in its context",
                "Check keyword spelling and pattern placement",
            ),
            metadata(
                "E106",
                "Lexical",
                Severity::Critical,
                false,
                true,
                "Token reached hand-off without a kind",
                "File a bug report",
            ),
            metadata(
                "E107",
                "Lexical",
                Severity::High,
                false,
                true,
                "Input fed to a finished lexer without a reset",
                "Reset the tokenizer before reuse",
            ),
            metadata(
                "E108",
                "Lexical",
                Severity::High,
                false,
                true,
                "Expression exceeds maximum length, possible DoS attempt",
                "Shorten the expression or raise the compile-time limit",
            ),
            metadata(
                "E109",
                "Lexical",
                Severity::High,
                false,
                true,
                "Expression produced too many tokens, possible DoS attempt",
                "Simplify the expression or raise the compile-time limit",
            ),
            metadata(
                "I001",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed successfully",
                "Continue normal operation",
            ),
            metadata(
                "I002",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Tokenization completed successfully",
                "Continue to parsing",
            ),
        ])
    })
}

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from a code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if the error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if the error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category for a code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
