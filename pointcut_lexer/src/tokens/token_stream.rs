//! Token stream produced by one tokenize pass
//!
//! Whitespace tokens are kept in the stream so the original expression can be
//! reassembled, but most consumers only care about significant tokens, so the
//! stream maintains an index of non-whitespace positions.

use crate::tokens::token::{Token, TokenKind};
use crate::utils::Span;

/// Ordered sequence of finalized tokens for a single pointcut expression
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    /// All tokens, whitespace included, in emission order
    all_tokens: Vec<Token>,
    /// Indices into `all_tokens` for non-whitespace tokens
    significant_indices: Vec<usize>,
}

impl TokenStream {
    /// Create a stream from tokens in emission order
    pub fn new(tokens: Vec<Token>) -> Self {
        let significant_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| !token.is_whitespace())
            .map(|(i, _)| i)
            .collect();

        Self {
            all_tokens: tokens,
            significant_indices,
        }
    }

    /// Total token count, whitespace included
    pub fn len(&self) -> usize {
        self.all_tokens.len()
    }

    /// Check if the stream holds no tokens
    pub fn is_empty(&self) -> bool {
        self.all_tokens.is_empty()
    }

    /// Count of significant (non-whitespace) tokens
    pub fn significant_len(&self) -> usize {
        self.significant_indices.len()
    }

    /// Get a token by emission index
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.all_tokens.get(index)
    }

    /// Get a significant token by filtered index
    pub fn significant(&self, index: usize) -> Option<&Token> {
        self.significant_indices
            .get(index)
            .and_then(|&i| self.all_tokens.get(i))
    }

    /// Iterate over all tokens in emission order
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.all_tokens.iter()
    }

    /// Iterate over significant tokens in emission order
    pub fn iter_significant(&self) -> impl Iterator<Item = &Token> {
        self.significant_indices
            .iter()
            .map(move |&i| &self.all_tokens[i])
    }

    /// Kinds of all tokens in emission order (None never appears: tokens are
    /// classified before hand-off)
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.all_tokens
            .iter()
            .filter_map(|token| token.kind())
            .collect()
    }

    /// The last significant token, if any
    pub fn last_significant(&self) -> Option<&Token> {
        self.significant_indices
            .last()
            .and_then(|&i| self.all_tokens.get(i))
    }

    /// Span covering the whole stream
    pub fn span(&self) -> Option<Span> {
        let first = self.all_tokens.first()?.span();
        let last = self.all_tokens.last()?.span();
        Some(first.merge(last))
    }

    /// Reassemble the original expression text from lexemes
    pub fn source(&self) -> String {
        self.all_tokens
            .iter()
            .map(|token| token.lexeme())
            .collect()
    }

    /// Consume the stream, yielding the tokens
    pub fn into_tokens(self) -> Vec<Token> {
        self.all_tokens
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_tokens.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stream() -> TokenStream {
        TokenStream::new(vec![
            Token::classified(TokenKind::PointcutOpen, "{", 0),
            Token::classified(TokenKind::MethodKeyword, "method", 1),
            Token::classified(TokenKind::Whitespace, " ", 7),
            Token::classified(TokenKind::PublicModifier, "public", 8),
            Token::classified(TokenKind::PointcutClose, "}", 14),
        ])
    }

    #[test]
    fn test_significant_filtering() {
        let stream = sample_stream();
        assert_eq!(stream.len(), 5);
        assert_eq!(stream.significant_len(), 4);
        assert_eq!(
            stream.significant(1).unwrap().kind(),
            Some(TokenKind::MethodKeyword)
        );
        assert_eq!(
            stream.significant(2).unwrap().kind(),
            Some(TokenKind::PublicModifier)
        );
    }

    #[test]
    fn test_source_round_trip() {
        let stream = sample_stream();
        assert_eq!(stream.source(), "{method public}");
    }

    #[test]
    fn test_stream_span() {
        let stream = sample_stream();
        assert_eq!(stream.span(), Some(Span::new(0, 15)));
        assert_eq!(TokenStream::new(vec![]).span(), None);
    }

    #[test]
    fn test_kinds_in_emission_order() {
        let stream = sample_stream();
        assert_eq!(
            stream.kinds(),
            vec![
                TokenKind::PointcutOpen,
                TokenKind::MethodKeyword,
                TokenKind::Whitespace,
                TokenKind::PublicModifier,
                TokenKind::PointcutClose,
            ]
        );
    }

    #[test]
    fn test_last_significant_skips_whitespace() {
        let stream = TokenStream::new(vec![
            Token::classified(TokenKind::PointcutIdentifier, "loggable", 0),
            Token::classified(TokenKind::Whitespace, "  ", 8),
        ]);
        assert_eq!(
            stream.last_significant().unwrap().kind(),
            Some(TokenKind::PointcutIdentifier)
        );
    }
}
