//! Syntax errors with error code mapping
//!
//! Messages name the offending token by kind and spelling, for example
//! `Unexpected integer literal: "42" as function return type`.

use crate::lexical::LexerError;
use crate::logging::{codes, Code};
use crate::tokens::Token;
use crate::utils::{Location, Span};

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Short name used in messages where a token kind would appear
pub const END_OF_INPUT: &str = "end of input";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error("{message}")]
    UnexpectedToken { message: String, token: Token },

    #[error("{message}")]
    UnexpectedEndOfInput { message: String, location: Location },

    #[error("Maximum nesting depth of {depth} exceeded")]
    MaxRecursionDepth { depth: usize, location: Location },

    #[error("Function \"{function}\" declares {count} arguments (max {max})")]
    TooManyArguments {
        function: String,
        count: usize,
        max: usize,
        location: Location,
    },

    #[error(transparent)]
    Lexical(#[from] LexerError),
}

impl SyntaxError {
    pub fn unexpected_token(message: impl Into<String>, token: &Token) -> Self {
        Self::UnexpectedToken {
            message: message.into(),
            token: token.clone(),
        }
    }

    pub fn unexpected_end_of_input(message: impl Into<String>, location: Location) -> Self {
        Self::UnexpectedEndOfInput {
            message: message.into(),
            location,
        }
    }

    pub fn max_recursion_depth(depth: usize, location: Location) -> Self {
        Self::MaxRecursionDepth { depth, location }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The token the parser rejected, when there was one
    pub fn offending_token(&self) -> Option<&Token> {
        match self {
            Self::UnexpectedToken { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Where the error begins
    pub fn location(&self) -> Location {
        self.span().start()
    }

    /// Source range to underline when reporting
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { token, .. } => token.span(),
            Self::UnexpectedEndOfInput { location, .. }
            | Self::MaxRecursionDepth { location, .. }
            | Self::TooManyArguments { location, .. } => Span::at(*location),
            Self::Lexical(error) => error.span(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            Self::MaxRecursionDepth { .. } => codes::syntax::MAX_RECURSION_DEPTH,
            Self::TooManyArguments { .. } => codes::syntax::TOO_MANY_ARGUMENTS,
            Self::Lexical(error) => error.error_code(),
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

    pub fn description(&self) -> &'static str {
        codes::get_description(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenError;

    #[test]
    fn test_unexpected_token_reports_token_span() {
        let span = Span::new(Location::new(1, 13), Location::new(1, 14));
        let token = Token::symbol(":", span).unwrap();
        let error =
            SyntaxError::unexpected_token("The symbol \":\" is not a valid argument type", &token);

        assert_eq!(error.message(), "The symbol \":\" is not a valid argument type");
        assert_eq!(error.offending_token(), Some(&token));
        assert_eq!(error.span(), span);
        assert_eq!(error.location(), Location::new(1, 13));
        assert_eq!(error.error_code(), codes::syntax::UNEXPECTED_TOKEN);
        assert_eq!(error.category(), "Syntax");
    }

    #[test]
    fn test_end_of_input_has_no_token() {
        let error = SyntaxError::unexpected_end_of_input("Expected \";\" to end statement", Location::new(3, 1));

        assert!(error.offending_token().is_none());
        assert!(error.span().is_empty());
        assert_eq!(error.error_code().as_str(), "E051");
    }

    #[test]
    fn test_lexical_errors_pass_through() {
        let span = Span::new(Location::new(1, 1), Location::new(1, 2));
        let lexer_error = LexerError::from(TokenError::MalformedSymbol {
            text: "@".to_string(),
            span,
        });
        let error = SyntaxError::from(lexer_error);

        assert_eq!(error.message(), "Malformed symbol");
        assert_eq!(error.error_code(), codes::lexical::MALFORMED_SYMBOL);
        assert_eq!(error.span(), span);
    }

    #[test]
    fn test_recursion_depth_halts() {
        let error = SyntaxError::max_recursion_depth(129, Location::new(2, 5));
        assert!(error.requires_halt());
        assert_eq!(error.severity(), "Critical");
        assert!(error.message().contains("129"));
    }
}
