//! Lexical analysis errors

use crate::config::compile_time::lexical::{
    MAX_COMMENT_LENGTH, MAX_IDENTIFIER_LENGTH, MAX_TOKEN_COUNT,
};
use crate::logging::codes;
use crate::tokens::TokenError;
use crate::utils::Span;

/// Lexical analysis errors with compile-time limits
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Unterminated block comment")]
    UnterminatedComment { span: Span },

    #[error("Identifier too long: {length} characters (max {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong { length: usize, span: Span },

    #[error("Comment too long: {length} characters (max {MAX_COMMENT_LENGTH})")]
    CommentTooLong { length: usize, span: Span },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize, span: Span },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::Token(error) => error.error_code(),
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::CommentTooLong { .. } => codes::lexical::COMMENT_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOKEN_LIMIT_EXCEEDED,
        }
    }

    /// Source range of the offending lexeme
    pub fn span(&self) -> Span {
        match self {
            LexerError::Token(error) => error.span(),
            LexerError::UnterminatedComment { span }
            | LexerError::IdentifierTooLong { span, .. }
            | LexerError::CommentTooLong { span, .. }
            | LexerError::TooManyTokens { span, .. } => *span,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Token;
    use crate::utils::Location;

    #[test]
    fn test_token_errors_keep_their_code() {
        let span = Span::new(Location::new(2, 3), Location::new(2, 4));
        let error: LexerError = Token::symbol("@", span).unwrap_err().into();

        assert_eq!(error.error_code(), codes::lexical::MALFORMED_SYMBOL);
        assert_eq!(error.span(), span);
        assert_eq!(error.to_string(), "Malformed symbol");
        assert_eq!(error.category(), "Lexical");
    }

    #[test]
    fn test_limit_messages_name_the_limit() {
        let error = LexerError::IdentifierTooLong {
            length: MAX_IDENTIFIER_LENGTH + 1,
            span: Span::default(),
        };
        assert!(error
            .to_string()
            .contains(&format!("(max {})", MAX_IDENTIFIER_LENGTH)));
        assert_eq!(error.error_code().as_str(), "E027");
        assert!(error.requires_halt());
    }
}
