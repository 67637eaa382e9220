// Internal modules
pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod stream;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{Lexer, LexerError, PeekLexer};
pub use stream::{load_source, CharStream, SourceError, SourceFile, StringStream};
pub use syntax::{parse_source, Parser, SyntaxError, SyntaxResult, TopLevelNode};
pub use tokens::{Token, TokenKind};
pub use utils::{Location, SourceMap, Span};
