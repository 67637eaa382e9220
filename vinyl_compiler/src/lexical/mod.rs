//! Lexical analysis
//!
//! [`Lexer`] turns a character stream into tokens one at a time;
//! [`PeekLexer`] adds the single token of lookahead the parser needs.

pub mod error;
pub mod lexer;
pub mod matchers;
pub mod peek;

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::stream::StringStream;
use crate::tokens::Token;

pub use error::LexerError;
pub use lexer::{Lexer, LexicalMetrics};
pub use peek::PeekLexer;

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize a whole source string, stopping at the first error
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::from_source(source).collect()
}

/// Tokenize with custom runtime preferences (limits remain compile-time)
pub fn tokenize_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> Result<Vec<Token>, LexerError> {
    Lexer::with_preferences(StringStream::new(source), preferences).collect()
}

// ============================================================================
// MODULE INITIALIZATION AND VALIDATION
// ============================================================================

const LEXICAL_CODES: [crate::logging::Code; 10] = [
    codes::lexical::MALFORMED_INTEGER,
    codes::lexical::MALFORMED_FLOAT,
    codes::lexical::MALFORMED_IDENTIFIER,
    codes::lexical::RESERVED_KEYWORD,
    codes::lexical::MALFORMED_KEYWORD,
    codes::lexical::MALFORMED_SYMBOL,
    codes::lexical::UNTERMINATED_COMMENT,
    codes::lexical::IDENTIFIER_TOO_LONG,
    codes::lexical::COMMENT_TOO_LONG,
    codes::lexical::TOKEN_LIMIT_EXCEEDED,
];

/// Check that every lexical error code is registered and log the active limits
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    for code in &LEXICAL_CODES {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::log_debug!("Lexical limits initialized",
        "max_identifier_length" => MAX_IDENTIFIER_LENGTH,
        "max_comment_length" => MAX_COMMENT_LENGTH,
        "max_token_count" => MAX_TOKEN_COUNT);

    Ok(())
}

/// Validate compile-time limits
pub fn validate_tokenization() -> Result<(), String> {
    if MAX_IDENTIFIER_LENGTH == 0 {
        return Err("MAX_IDENTIFIER_LENGTH cannot be zero".to_string());
    }
    if MAX_COMMENT_LENGTH == 0 {
        return Err("MAX_COMMENT_LENGTH cannot be zero".to_string());
    }
    if MAX_TOKEN_COUNT == 0 {
        return Err("MAX_TOKEN_COUNT cannot be zero".to_string());
    }
    if MAX_TOKEN_COUNT > 10_000_000 {
        return Err("MAX_TOKEN_COUNT exceeds reasonable limit".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenError;
    use assert_matches::assert_matches;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("if x { }").unwrap();
        assert_eq!(tokens.len(), 4);

        assert_matches!(
            tokenize("let 9lives Int"),
            Err(LexerError::Token(TokenError::MalformedInteger { .. }))
        );
    }

    #[test]
    fn test_module_validation() {
        assert!(init_lexical_analysis_logging().is_ok());
        assert!(validate_tokenization().is_ok());
    }

    #[test]
    fn test_every_lexical_code_has_metadata() {
        for code in &LEXICAL_CODES {
            assert_eq!(codes::get_category(code.as_str()), "Lexical");
        }
    }
}
