//! Reserved words and punctuation
//!
//! Both tables are closed and injective: every spelling maps to exactly one
//! kind and back.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved words of the language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Def,
    Let,
    If,
    Else,
}

impl Keyword {
    pub const ALL: [Keyword; 4] = [Keyword::Def, Keyword::Let, Keyword::If, Keyword::Else];

    /// Spelling as it appears in source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Def => "def",
            Self::Let => "let",
            Self::If => "if",
            Self::Else => "else",
        }
    }

    /// Parse keyword from string with exact case matching
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "def" => Some(Self::Def),
            "let" => Some(Self::Let),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            _ => None,
        }
    }

    pub fn is_keyword(s: &str) -> bool {
        Self::from_str(s).is_some()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Punctuation and operator symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Arrow,
    Scope,
    Comma,
    Dot,
    SemiColon,
    Plus,
    Minus,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,
    Equal,
    Colon,
    ParenOpen,
    ParenClose,
    QuoteSingle,
    ExclamationPoint,
    BracketOpen,
    BracketClose,
    BraceOpen,
    BraceClose,
}

impl Symbol {
    pub const ALL: [Symbol; 21] = [
        Symbol::Arrow,
        Symbol::Scope,
        Symbol::Comma,
        Symbol::Dot,
        Symbol::SemiColon,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Asterisk,
        Symbol::Slash,
        Symbol::LessThan,
        Symbol::GreaterThan,
        Symbol::Equal,
        Symbol::Colon,
        Symbol::ParenOpen,
        Symbol::ParenClose,
        Symbol::QuoteSingle,
        Symbol::ExclamationPoint,
        Symbol::BracketOpen,
        Symbol::BracketClose,
        Symbol::BraceOpen,
        Symbol::BraceClose,
    ];

    /// Length in characters of the longest spelling
    pub const LONGEST: usize = 2;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arrow => "->",
            Self::Scope => "::",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::SemiColon => ";",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "=",
            Self::Colon => ":",
            Self::ParenOpen => "(",
            Self::ParenClose => ")",
            Self::QuoteSingle => "'",
            Self::ExclamationPoint => "!",
            Self::BracketOpen => "[",
            Self::BracketClose => "]",
            Self::BraceOpen => "{",
            Self::BraceClose => "}",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "->" => Some(Self::Arrow),
            "::" => Some(Self::Scope),
            "," => Some(Self::Comma),
            "." => Some(Self::Dot),
            ";" => Some(Self::SemiColon),
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Asterisk),
            "/" => Some(Self::Slash),
            "<" => Some(Self::LessThan),
            ">" => Some(Self::GreaterThan),
            "=" => Some(Self::Equal),
            ":" => Some(Self::Colon),
            "(" => Some(Self::ParenOpen),
            ")" => Some(Self::ParenClose),
            "'" => Some(Self::QuoteSingle),
            "!" => Some(Self::ExclamationPoint),
            "[" => Some(Self::BracketOpen),
            "]" => Some(Self::BracketClose),
            "{" => Some(Self::BraceOpen),
            "}" => Some(Self::BraceClose),
            _ => None,
        }
    }

    /// True if some symbol spelling begins with `c`
    pub fn starts_symbol(c: char) -> bool {
        Self::ALL
            .iter()
            .any(|symbol| symbol.as_str().starts_with(c))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
