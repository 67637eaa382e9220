//! Syntax analysis: token stream to abstract syntax tree
//!
//! The parser pulls tokens lazily through a [`PeekLexer`], so lexical errors
//! surface as [`SyntaxError::Lexical`] at the point the parser reaches them.
//!
//! [`PeekLexer`]: crate::lexical::PeekLexer

pub mod error;
pub mod nodes;
pub mod parser;

pub use error::{SyntaxError, SyntaxResult, END_OF_INPUT};
pub use nodes::{
    ArgumentNode, ExpressionNode, FunctionDefinitionNode, IdentifierNode, IfStatementNode,
    StatementNode, TopLevelNode, TypeNameNode, VariableDeclarationNode,
};
pub use parser::Parser;

use crate::config::runtime::SyntaxPreferences;
use crate::lexical::PeekLexer;
use crate::logging::codes;
use crate::stream::SourceFile;
use crate::{log_debug, log_info};

/// Parse a source string with default preferences
pub fn parse_source(source: &str) -> SyntaxResult<Vec<TopLevelNode>> {
    log_debug!("Starting syntax analysis", "characters" => source.chars().count());
    Parser::from_source(source).parse()
}

/// Parse a loaded source file
pub fn parse_file(file: &SourceFile) -> SyntaxResult<Vec<TopLevelNode>> {
    log_debug!("Starting syntax analysis", "file" => file.path.display());
    Parser::new(PeekLexer::from_stream(file.stream())).parse()
}

pub fn parse_source_with_preferences(
    source: &str,
    preferences: SyntaxPreferences,
) -> SyntaxResult<Vec<TopLevelNode>> {
    Parser::with_preferences(PeekLexer::from_source(source), preferences).parse()
}

const SYNTAX_CODES: [crate::logging::Code; 4] = [
    codes::syntax::UNEXPECTED_TOKEN,
    codes::syntax::UNEXPECTED_END_OF_INPUT,
    codes::syntax::MAX_RECURSION_DEPTH,
    codes::syntax::TOO_MANY_ARGUMENTS,
];

/// Initialize syntax module logging validation
pub fn init_syntax_logging() -> Result<(), String> {
    for code in &SYNTAX_CODES {
        if codes::get_description(code.as_str()) == "Unknown error" {
            return Err(format!(
                "Syntax error code {} has no description",
                code.as_str()
            ));
        }
    }

    log_info!("Syntax module logging validation completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_module_initialization() {
        assert!(init_syntax_logging().is_ok());
    }

    #[test]
    fn test_parse_source() {
        let nodes = parse_source("let x Int = 42\ndef main() { }").unwrap();
        assert_eq!(nodes.len(), 2);

        let error = parse_source("def fooBar(y: Int").unwrap_err();
        assert_eq!(error.offending_token().unwrap().text(), ":");
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "if ready {{ let y Int = 1 }} else {{ }}").unwrap();

        let source = crate::stream::load_source(file.path()).unwrap();
        let nodes = parse_file(&source).unwrap();
        assert!(matches!(nodes[0], TopLevelNode::Statement(StatementNode::If(_))));
    }
}
