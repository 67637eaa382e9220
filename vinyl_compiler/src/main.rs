//! Vinyl front end driver
//!
//! ```text
//! vinylc main.vinyl            # summarize top-level nodes
//! vinylc main.vinyl --json     # print the syntax tree as JSON
//! vinylc main.vinyl --tokens   # print the token sequence
//! ```

use clap::Parser as CliParser;
use std::path::PathBuf;
use std::process;
use vinyl_compiler::{
    lexical, logging, stream, syntax, LexerError, SourceFile, SourceMap, Span, SyntaxError,
    Token, TopLevelNode,
};

#[derive(CliParser, Debug)]
#[command(name = "vinylc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexer and parser for the Vinyl programming language", long_about = None)]
#[command(after_help = vinyl_compiler::config::build_info::source_info())]
struct Cli {
    /// Source file to compile
    path: PathBuf,

    /// Print the token sequence instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Print output as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init_global_logging()?;
    lexical::init_lexical_analysis_logging()?;
    syntax::init_syntax_logging()?;

    let source = match stream::load_source(&cli.path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    let succeeded = if cli.tokens {
        dump_tokens(&source, cli.json)?
    } else {
        dump_ast(&source, cli.json)?
    };

    if !succeeded {
        process::exit(1);
    }
    Ok(())
}

/// Returns whether the whole file lexed
fn dump_tokens(source: &SourceFile, json: bool) -> Result<bool, serde_json::Error> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut failure: Option<LexerError> = None;

    for item in lexical::Lexer::new(source.stream()) {
        match item {
            Ok(token) => tokens.push(token),
            Err(error) => {
                failure = Some(error);
                break;
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{:<12} {}", token.span().to_string(), token);
        }
    }

    match failure {
        Some(error) => {
            report(source, error.span(), &error.to_string());
            Ok(false)
        }
        None => Ok(true),
    }
}

/// Returns whether the file parsed
fn dump_ast(source: &SourceFile, json: bool) -> Result<bool, serde_json::Error> {
    match syntax::parse_file(source) {
        Ok(nodes) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&nodes)?);
            } else {
                for node in &nodes {
                    println!("{}", summarize(node));
                }
            }
            Ok(true)
        }
        Err(error) => {
            report_syntax_error(source, &error);
            Ok(false)
        }
    }
}

fn summarize(node: &TopLevelNode) -> String {
    use vinyl_compiler::syntax::StatementNode;

    match node {
        TopLevelNode::FunctionDefinition(function) => format!(
            "{} function {} ({} arguments, {} statements)",
            function.identifier.span().start(),
            function.name(),
            function.arguments.len(),
            function.block.len()
        ),
        TopLevelNode::Statement(StatementNode::VariableDeclaration(declaration)) => format!(
            "{} variable {} {}",
            declaration.identifier.span().start(),
            declaration.identifier.name(),
            declaration.type_name.name()
        ),
        TopLevelNode::Statement(StatementNode::If(statement)) => format!(
            "{} if ({} / {} statements)",
            statement.condition.span().start(),
            statement.when_true.len(),
            statement.when_false.len()
        ),
        TopLevelNode::Statement(StatementNode::Expression(expression)) => format!(
            "{} expression {}",
            expression.span().start(),
            expression.token()
        ),
    }
}

fn report_syntax_error(source: &SourceFile, error: &SyntaxError) {
    report(source, error.span(), &error.message());
}

fn report(source: &SourceFile, span: Span, message: &str) {
    let source_map = SourceMap::new(source.text.as_str());
    eprintln!("{}", source.path.display());
    eprintln!("{}", source_map.format_error(&span, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arguments() {
        let cli = Cli::try_parse_from(["vinylc", "main.vinyl"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("main.vinyl"));
        assert!(!cli.tokens);
        assert!(!cli.json);

        let cli = Cli::try_parse_from(["vinylc", "--json", "main.vinyl", "--tokens"]).unwrap();
        assert!(cli.tokens);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_rejects_bad_arguments() {
        assert!(Cli::try_parse_from(["vinylc"]).is_err());
        assert!(Cli::try_parse_from(["vinylc", "a.vinyl", "b.vinyl"]).is_err());
        assert!(Cli::try_parse_from(["vinylc", "a.vinyl", "--verbose"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_summarize() {
        let nodes = vinyl_compiler::parse_source("def main(a Int) { a; }\nlet x Int").unwrap();

        assert_eq!(summarize(&nodes[0]), "1:5 function main (1 arguments, 1 statements)");
        assert_eq!(summarize(&nodes[1]), "2:5 variable x Int");
    }
}
