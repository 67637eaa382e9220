//! Tokens and their validating constructors

use super::kinds::{Keyword, Symbol};
use super::number::{FloatLiteral, IntegerLiteral};
use crate::logging::codes;
use crate::utils::{Location, Span};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Token construction errors; each carries the rejected text and its span
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Malformed integer literal")]
    MalformedInteger { text: String, span: Span },

    #[error("Malformed floating point literal")]
    MalformedFloat { text: String, span: Span },

    #[error("Malformed identifier")]
    MalformedIdentifier { text: String, span: Span },

    #[error("Reserved keyword \"{text}\" cannot be used as an identifier")]
    ReservedIdentifier { text: String, span: Span },

    #[error("Malformed keyword")]
    MalformedKeyword { text: String, span: Span },

    #[error("Malformed symbol")]
    MalformedSymbol { text: String, span: Span },
}

impl TokenError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            TokenError::MalformedInteger { .. } => codes::lexical::MALFORMED_INTEGER,
            TokenError::MalformedFloat { .. } => codes::lexical::MALFORMED_FLOAT,
            TokenError::MalformedIdentifier { .. } => codes::lexical::MALFORMED_IDENTIFIER,
            TokenError::ReservedIdentifier { .. } => codes::lexical::RESERVED_KEYWORD,
            TokenError::MalformedKeyword { .. } => codes::lexical::MALFORMED_KEYWORD,
            TokenError::MalformedSymbol { .. } => codes::lexical::MALFORMED_SYMBOL,
        }
    }

    /// The rejected lexeme
    pub fn text(&self) -> &str {
        match self {
            TokenError::MalformedInteger { text, .. }
            | TokenError::MalformedFloat { text, .. }
            | TokenError::MalformedIdentifier { text, .. }
            | TokenError::ReservedIdentifier { text, .. }
            | TokenError::MalformedKeyword { text, .. }
            | TokenError::MalformedSymbol { text, .. } => text,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TokenError::MalformedInteger { span, .. }
            | TokenError::MalformedFloat { span, .. }
            | TokenError::MalformedIdentifier { span, .. }
            | TokenError::ReservedIdentifier { span, .. }
            | TokenError::MalformedKeyword { span, .. }
            | TokenError::MalformedSymbol { span, .. } => *span,
        }
    }
}

/// Token variants with their decoded attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum TokenKind {
    Integer(IntegerLiteral),
    Float(FloatLiteral),
    Identifier,
    Keyword(Keyword),
    Symbol(Symbol),
    Comment,
}

impl TokenKind {
    /// Human-readable kind used in diagnostics
    pub const fn short_name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "integer literal",
            TokenKind::Float(_) => "floating point literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Comment => "comment",
        }
    }
}

/// A lexeme with its kind and source span
///
/// Equality compares kind and text only; two tokens lexed at different
/// places in the source are equal when they spell the same thing. Fields are
/// private, so the factories below are the only way to build one.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

fn identifier_grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| Regex::new(r"^\w+$").expect("identifier grammar is a valid pattern"))
}

impl Token {
    pub fn integer(text: impl Into<String>, span: Span) -> Result<Self, TokenError> {
        let text = text.into();
        match IntegerLiteral::parse(&text) {
            Some(literal) => Ok(Self::new(TokenKind::Integer(literal), text, span)),
            None => Err(TokenError::MalformedInteger { text, span }),
        }
    }

    pub fn float(text: impl Into<String>, span: Span) -> Result<Self, TokenError> {
        let text = text.into();
        match FloatLiteral::parse(&text) {
            Some(literal) => Ok(Self::new(TokenKind::Float(literal), text, span)),
            None => Err(TokenError::MalformedFloat { text, span }),
        }
    }

    /// Word characters only, not starting with a digit, and not reserved
    pub fn identifier(text: impl Into<String>, span: Span) -> Result<Self, TokenError> {
        let text = text.into();
        let starts_with_digit = text.chars().next().is_some_and(|c| c.is_ascii_digit());

        if starts_with_digit || !identifier_grammar().is_match(&text) {
            return Err(TokenError::MalformedIdentifier { text, span });
        }
        if Keyword::is_keyword(&text) {
            return Err(TokenError::ReservedIdentifier { text, span });
        }

        Ok(Self::new(TokenKind::Identifier, text, span))
    }

    pub fn keyword(text: impl Into<String>, span: Span) -> Result<Self, TokenError> {
        let text = text.into();
        match Keyword::from_str(&text) {
            Some(keyword) => Ok(Self::new(TokenKind::Keyword(keyword), text, span)),
            None => Err(TokenError::MalformedKeyword { text, span }),
        }
    }

    pub fn symbol(text: impl Into<String>, span: Span) -> Result<Self, TokenError> {
        let text = text.into();
        match Symbol::from_str(&text) {
            Some(symbol) => Ok(Self::new(TokenKind::Symbol(symbol), text, span)),
            None => Err(TokenError::MalformedSymbol { text, span }),
        }
    }

    /// Comments carry no grammar of their own
    pub fn comment(text: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Comment, text.into(), span)
    }

    fn new(kind: TokenKind, text: String, span: Span) -> Self {
        Self { kind, text, span }
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn short_name(&self) -> &'static str {
        self.kind.short_name()
    }

    pub fn start_location(&self) -> Location {
        self.span.start
    }

    pub fn end_location(&self) -> Location {
        self.span.end
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }

    pub fn integer_literal(&self) -> Option<&IntegerLiteral> {
        match &self.kind {
            TokenKind::Integer(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn float_literal(&self) -> Option<&FloatLiteral> {
        match &self.kind {
            TokenKind::Float(literal) => Some(literal),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: \"{}\"", self.short_name(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::IntegerKind;
    use assert_matches::assert_matches;

    fn span() -> Span {
        Span::new(Location::new(1, 1), Location::new(1, 2))
    }

    #[test]
    fn test_identifier_grammar() {
        for text in ["a", "hello", "こんにちは", "after_Whitespace", "hasANumber42", "_x"] {
            let token = Token::identifier(text, span()).unwrap();
            assert!(token.is_identifier());
            assert_eq!(token.text(), text);
        }

        for text in ["1number", ".E13", "1e3", " ", "\n", "a-b", ""] {
            assert_matches!(
                Token::identifier(text, span()),
                Err(TokenError::MalformedIdentifier { .. }),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_keyword_spellings_are_not_identifiers() {
        for keyword in Keyword::ALL {
            assert_matches!(
                Token::identifier(keyword.as_str(), span()),
                Err(TokenError::ReservedIdentifier { .. })
            );
            assert!(Token::keyword(keyword.as_str(), span())
                .unwrap()
                .is_keyword(keyword));
        }
        assert_matches!(
            Token::keyword("define", span()),
            Err(TokenError::MalformedKeyword { .. })
        );
    }

    #[test]
    fn test_accessors_reflect_factory_input() {
        let span = Span::new(Location::new(2, 4), Location::new(2, 6));
        let token = Token::keyword("if", span).unwrap();

        assert_eq!(token.kind(), &TokenKind::Keyword(Keyword::If));
        assert_eq!(token.text(), "if");
        assert_eq!(token.span(), span);
        assert_eq!(token.start_location(), Location::new(2, 4));
        assert_eq!(token.end_location(), Location::new(2, 6));

        // a keyword kind with a non-keyword spelling is unreachable
        assert!(Token::keyword("foo", span).is_err());
    }

    #[test]
    fn test_symbol_factory() {
        let token = Token::symbol("->", span()).unwrap();
        assert!(token.is_symbol(Symbol::Arrow));
        assert_eq!(token.short_name(), "symbol");

        let error = Token::symbol("@", span()).unwrap_err();
        assert_eq!(error.to_string(), "Malformed symbol");
        assert_eq!(error.text(), "@");
        assert_eq!(error.error_code(), codes::lexical::MALFORMED_SYMBOL);
    }

    #[test]
    fn test_integer_factory() {
        let token = Token::integer("0b1000_0001_1001u32", span()).unwrap();
        let literal = token.integer_literal().unwrap();
        assert_eq!(literal.to_u64(), Some(2073));
        assert_eq!(literal.kind, IntegerKind::U32);
        assert_eq!(token.short_name(), "integer literal");

        let error = Token::integer("0xBEEFi", span()).unwrap_err();
        assert_eq!(error.to_string(), "Malformed integer literal");
    }

    #[test]
    fn test_float_factory() {
        let token = Token::float("2.5", span()).unwrap();
        assert_eq!(token.float_literal().unwrap().value, 2.5);
        assert_eq!(token.short_name(), "floating point literal");
        assert!(token.integer_literal().is_none());

        assert_matches!(
            Token::float("25", span()),
            Err(TokenError::MalformedFloat { .. })
        );
    }

    #[test]
    fn test_equality_ignores_location() {
        let a = Token::identifier("x", span()).unwrap();
        let b = Token::identifier(
            "x",
            Span::new(Location::new(9, 4), Location::new(9, 5)),
        )
        .unwrap();
        assert_eq!(a, b);

        let c = Token::identifier("y", span()).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_requires_same_kind() {
        let comment = Token::comment("x", span());
        let identifier = Token::identifier("x", span()).unwrap();
        assert_ne!(comment, identifier);
        assert!(comment.is_comment());
    }

    #[test]
    fn test_display_names_kind_and_text() {
        let token = Token::integer("2214342345324234", span()).unwrap();
        assert_eq!(token.to_string(), "integer literal: \"2214342345324234\"");
    }
}
