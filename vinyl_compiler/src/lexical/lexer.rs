//! Streaming lexer
//!
//! Pulls characters from a [`CharStream`] and produces one [`Token`] per call.
//! Whitespace is skipped between lexemes; the first non-space character
//! selects the sub-lexer:
//!
//! | First character            | Sub-lexer | Ends at                         |
//! |----------------------------|-----------|---------------------------------|
//! | ASCII digit                | number    | whitespace or symbol start      |
//! | letter or `_`              | word      | whitespace or symbol start      |
//! | `//` or `/*`               | comment   | newline, or the closing `*/`    |
//! | anything else              | symbol    | longest matching symbol         |

use super::error::LexerError;
use super::matchers;
use crate::config::compile_time::lexical::{
    MAX_COMMENT_LENGTH, MAX_IDENTIFIER_LENGTH, MAX_TOKEN_COUNT,
};
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::stream::{CharStream, StringStream};
use crate::tokens::{Keyword, Symbol, Token, TokenKind};
use crate::utils::{Location, Span};
use crate::{log_debug, log_error, log_success};
use serde::Serialize;

/// Token counts gathered while lexing
#[derive(Debug, Clone, Default, Serialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub integer_tokens: usize,
    pub float_tokens: usize,
    pub identifier_tokens: usize,
    pub keyword_tokens: usize,
    pub symbol_tokens: usize,
    pub comment_tokens: usize,
    pub error_count: usize,
    pub longest_identifier: usize,
    pub longest_comment: usize,
}

impl LexicalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a produced token; per-kind counts only when detailed metrics are on
    pub fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        let length = token.text().chars().count();
        match token.kind() {
            TokenKind::Integer(_) => self.integer_tokens += 1,
            TokenKind::Float(_) => self.float_tokens += 1,
            TokenKind::Identifier => {
                self.identifier_tokens += 1;
                self.longest_identifier = self.longest_identifier.max(length);
            }
            TokenKind::Keyword(_) => self.keyword_tokens += 1,
            TokenKind::Symbol(_) => self.symbol_tokens += 1,
            TokenKind::Comment => {
                self.comment_tokens += 1;
                self.longest_comment = self.longest_comment.max(length);
            }
        }
    }

    pub fn record_error(&mut self) {
        self.error_count += 1;
    }
}

pub struct Lexer<S: CharStream> {
    stream: S,
    preferences: LexicalPreferences,
    metrics: LexicalMetrics,
    finished: bool,
}

impl<S: CharStream> Lexer<S> {
    pub fn new(stream: S) -> Self {
        Self::with_preferences(stream, LexicalPreferences::default())
    }

    pub fn with_preferences(stream: S, preferences: LexicalPreferences) -> Self {
        log_debug!("Starting lexical analysis",
            "max_tokens_allowed" => MAX_TOKEN_COUNT,
            "max_identifier_length" => MAX_IDENTIFIER_LENGTH,
            "detailed_metrics" => preferences.collect_detailed_metrics);

        Self {
            stream,
            preferences,
            metrics: LexicalMetrics::new(),
            finished: false,
        }
    }

    /// Location of the next unconsumed character
    pub fn location(&self) -> Location {
        self.stream.location()
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn token_count(&self) -> usize {
        self.metrics.total_tokens
    }

    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Produce the next token, `Ok(None)` once the input is exhausted.
    ///
    /// Errors consume the offending lexeme, so lexing may resume after one.
    /// Exceeding the token limit ends the sequence.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        if self.finished {
            return Ok(None);
        }

        self.stream.read_until(matchers::is_not_space);
        if self.stream.ended() {
            self.finish();
            return Ok(None);
        }

        if self.metrics.total_tokens >= MAX_TOKEN_COUNT {
            self.finished = true;
            return Err(self.report(LexerError::TooManyTokens {
                count: self.metrics.total_tokens + 1,
                span: Span::at(self.stream.location()),
            }));
        }

        match self.lex_token() {
            Ok(token) => {
                self.metrics.record_token(&token, &self.preferences);
                if self.preferences.trace_tokens {
                    log_debug!("Token produced",
                        "kind" => token.short_name(),
                        "text" => token.text(),
                        "span" => token.span());
                }
                Ok(Some(token))
            }
            Err(error) => Err(self.report(error)),
        }
    }

    fn lex_token(&mut self) -> Result<Token, LexerError> {
        let start = self.stream.location();
        let next = self.stream.peek(2);

        match next.chars().next() {
            Some(c) if c.is_ascii_digit() => self.lex_number(start),
            Some(c) if c.is_alphabetic() || c == '_' => self.lex_word(start),
            _ if next == "//" || next == "/*" => self.lex_comment(start),
            _ => self.lex_symbol(start),
        }
    }

    /// Integer or float; a lexeme that is neither reports the integer error
    fn lex_number(&mut self, start: Location) -> Result<Token, LexerError> {
        let mut text = self.stream.read_until(matchers::is_number_separator);
        while self.continues_past_decimal_point(&text) {
            text.push_str(&self.stream.read(1));
            text.push_str(&self.stream.read_until(matchers::is_number_separator));
        }
        let span = self.span_from(start);

        Token::float(text.as_str(), span)
            .or_else(|_| Token::integer(text, span))
            .map_err(LexerError::from)
    }

    /// A `.` directly after a digit, followed by something a number can hold
    fn continues_past_decimal_point(&self, text: &str) -> bool {
        let offset = self.stream.offset();
        text.ends_with(|c: char| c.is_ascii_digit())
            && self.stream.char_at(offset) == Some('.')
            && matchers::is_decimal_point_continuation(self.stream.char_at(offset + 1))
    }

    /// Keyword or identifier
    fn lex_word(&mut self, start: Location) -> Result<Token, LexerError> {
        let text = self.stream.read_until(matchers::is_separator);
        let span = self.span_from(start);

        if Keyword::is_keyword(&text) {
            return Ok(Token::keyword(text, span)?);
        }

        let length = text.chars().count();
        if length > MAX_IDENTIFIER_LENGTH {
            return Err(LexerError::IdentifierTooLong { length, span });
        }

        Ok(Token::identifier(text, span)?)
    }

    /// Line comments stop before the newline; block comments include `*/`
    fn lex_comment(&mut self, start: Location) -> Result<Token, LexerError> {
        let mut text = self.stream.read(2);

        if text == "//" {
            text.push_str(&self.stream.read_until_exactly('\n'));
        } else {
            text.push_str(&self.stream.read_until(matchers::is_comment_terminator));
            if self.stream.ended() {
                return Err(LexerError::UnterminatedComment {
                    span: self.span_from(start),
                });
            }
            text.push_str(&self.stream.read(1));
        }

        let span = self.span_from(start);
        let length = text.chars().count();
        if length > MAX_COMMENT_LENGTH {
            return Err(LexerError::CommentTooLong { length, span });
        }

        Ok(Token::comment(text, span))
    }

    /// Longest symbol spelling wins; an unknown character is consumed alone
    fn lex_symbol(&mut self, start: Location) -> Result<Token, LexerError> {
        let length = (1..=Symbol::LONGEST)
            .rev()
            .find(|&n| Symbol::from_str(&self.stream.peek(n)).is_some())
            .unwrap_or(1);

        let text = self.stream.read(length);
        Ok(Token::symbol(text, self.span_from(start))?)
    }

    fn span_from(&self, start: Location) -> Span {
        Span::new(start, self.stream.location())
    }

    fn report(&mut self, error: LexerError) -> LexerError {
        self.metrics.record_error();
        log_error!(error.error_code(), &error.to_string(), span = error.span());
        error
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Lexical analysis completed",
            "total_tokens" => self.metrics.total_tokens,
            "identifiers" => self.metrics.identifier_tokens,
            "keywords" => self.metrics.keyword_tokens,
            "comments" => self.metrics.comment_tokens,
            "errors" => self.metrics.error_count);
    }
}

impl Lexer<StringStream> {
    pub fn from_source(source: &str) -> Self {
        Self::new(StringStream::new(source))
    }
}

impl<S: CharStream> Iterator for Lexer<S> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
