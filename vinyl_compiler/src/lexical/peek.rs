//! One-token lookahead over a [`Lexer`]

use super::error::LexerError;
use super::lexer::Lexer;
use crate::stream::{CharStream, StringStream};
use crate::tokens::Token;
use crate::utils::Location;

enum Lookahead {
    Pending(Token),
    Exhausted,
    Failed(LexerError),
}

/// Buffers the next token so it can be inspected before it is consumed.
///
/// The first lexical error is sticky: once seen, every later `peek` and
/// `read` reports it again instead of lexing further.
pub struct PeekLexer<S: CharStream> {
    lexer: Lexer<S>,
    lookahead: Lookahead,
    error_yielded: bool,
}

impl<S: CharStream> PeekLexer<S> {
    /// Wraps `lexer`, pulling the first token eagerly
    pub fn new(mut lexer: Lexer<S>) -> Self {
        let lookahead = Self::pull(&mut lexer);
        Self {
            lexer,
            lookahead,
            error_yielded: false,
        }
    }

    pub fn from_stream(stream: S) -> Self {
        Self::new(Lexer::new(stream))
    }

    fn pull(lexer: &mut Lexer<S>) -> Lookahead {
        match lexer.next_token() {
            Ok(Some(token)) => Lookahead::Pending(token),
            Ok(None) => Lookahead::Exhausted,
            Err(error) => Lookahead::Failed(error),
        }
    }

    /// The next token without consuming it
    pub fn peek(&self) -> Result<Option<&Token>, LexerError> {
        match &self.lookahead {
            Lookahead::Pending(token) => Ok(Some(token)),
            Lookahead::Exhausted => Ok(None),
            Lookahead::Failed(error) => Err(error.clone()),
        }
    }

    /// Consume the next token
    pub fn read(&mut self) -> Result<Option<Token>, LexerError> {
        match std::mem::replace(&mut self.lookahead, Lookahead::Exhausted) {
            Lookahead::Pending(token) => {
                self.lookahead = Self::pull(&mut self.lexer);
                Ok(Some(token))
            }
            Lookahead::Exhausted => Ok(None),
            Lookahead::Failed(error) => {
                self.lookahead = Lookahead::Failed(error.clone());
                Err(error)
            }
        }
    }

    /// Location just past the buffered token, or the end of input once exhausted
    pub fn location(&self) -> Location {
        self.lexer.location()
    }

    pub fn lexer(&self) -> &Lexer<S> {
        &self.lexer
    }

    pub fn into_lexer(self) -> Lexer<S> {
        self.lexer
    }
}

impl PeekLexer<StringStream> {
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::from_source(source))
    }
}

/// Yields tokens, then the sticky error at most once
impl<S: CharStream> Iterator for PeekLexer<S> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read() {
            Ok(token) => token.map(Ok),
            Err(_) if self.error_yielded => None,
            Err(error) => {
                self.error_yielded = true;
                Some(Err(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Keyword, Symbol, TokenError};
    use assert_matches::assert_matches;

    #[test]
    fn test_peek_does_not_consume() {
        let mut tokens = PeekLexer::from_source("let x");

        assert!(tokens.peek().unwrap().unwrap().is_keyword(Keyword::Let));
        assert!(tokens.peek().unwrap().unwrap().is_keyword(Keyword::Let));

        let first = tokens.read().unwrap().unwrap();
        assert!(first.is_keyword(Keyword::Let));
        assert_eq!(tokens.peek().unwrap().unwrap().text(), "x");
        assert_eq!(tokens.read().unwrap().unwrap().text(), "x");

        assert!(tokens.peek().unwrap().is_none());
        assert!(tokens.read().unwrap().is_none());
        assert!(tokens.read().unwrap().is_none());
    }

    #[test]
    fn test_peek_and_read_agree() {
        let source = "def main(a Int) { let y Float = 1.5 }";
        let expected: Vec<Token> = Lexer::from_source(source)
            .collect::<Result<_, _>>()
            .unwrap();

        let mut tokens = PeekLexer::from_source(source);
        for token in &expected {
            assert_eq!(tokens.peek().unwrap(), Some(token));
            assert_eq!(tokens.read().unwrap().as_ref(), Some(token));
        }
        assert!(tokens.read().unwrap().is_none());
    }

    #[test]
    fn test_error_is_sticky() {
        let mut tokens = PeekLexer::from_source("( @ )");

        assert!(tokens.read().unwrap().unwrap().is_symbol(Symbol::ParenOpen));

        let error = tokens.peek().unwrap_err();
        assert_matches!(error, LexerError::Token(TokenError::MalformedSymbol { .. }));
        assert_eq!(tokens.read().unwrap_err(), error);
        assert_eq!(tokens.read().unwrap_err(), error);
        assert_eq!(tokens.peek().unwrap_err(), error);
    }

    #[test]
    fn test_iterator_yields_error_once() {
        let items: Vec<_> = PeekLexer::from_source("a @ b").collect();

        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_location_after_exhaustion() {
        let mut tokens = PeekLexer::from_source("x\n  ");
        tokens.read().unwrap();
        assert!(tokens.peek().unwrap().is_none());
        assert_eq!(tokens.location(), Location::new(2, 3));
    }
}
