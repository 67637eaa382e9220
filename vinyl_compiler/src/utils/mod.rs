//! Shared primitive types used by the stream, lexer and parser

pub mod span;

pub use span::{Location, SourceMap, Span};
