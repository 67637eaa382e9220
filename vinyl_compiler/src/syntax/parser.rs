//! Recursive-descent parser over a [`PeekLexer`]
//!
//! ```text
//! program       := (statement | declaration | ';')*
//! declaration   := function_def
//! function_def  := 'def' IDENT '(' (arg (',' arg)*)? ')' type_name? block
//! arg           := IDENT type_name
//! block         := '{' statement* '}'
//! statement     := var_decl | if_stmt | ';' | expr ';'
//! var_decl      := 'let' IDENT type_name ('=' expr)?
//! if_stmt       := 'if' expr block ('else' block)?
//! expr          := IDENT | INTEGER | FLOAT
//! ```
//!
//! Comments are skipped wherever a token is expected. Parsing stops at the
//! first error.

use super::error::{SyntaxError, SyntaxResult, END_OF_INPUT};
use super::nodes::*;
use crate::config::compile_time::syntax::{MAX_FUNCTION_ARGUMENTS, MAX_PARSE_DEPTH};
use crate::config::runtime::SyntaxPreferences;
use crate::lexical::{Lexer, PeekLexer};
use crate::logging::codes;
use crate::stream::{CharStream, StringStream};
use crate::tokens::{Keyword, Symbol, Token, TokenKind};
use crate::{log_debug, log_error, log_success};

fn keyword(keyword: Keyword) -> impl Fn(&Token) -> bool {
    move |token| token.is_keyword(keyword)
}

fn symbol(symbol: Symbol) -> impl Fn(&Token) -> bool {
    move |token| token.is_symbol(symbol)
}

pub struct Parser<S: CharStream> {
    tokens: PeekLexer<S>,
    preferences: SyntaxPreferences,
    context_stack: Vec<&'static str>,
    parse_depth: usize,
}

impl<S: CharStream> Parser<S> {
    pub fn new(tokens: PeekLexer<S>) -> Self {
        Self::with_preferences(tokens, SyntaxPreferences::default())
    }

    pub fn with_preferences(tokens: PeekLexer<S>, preferences: SyntaxPreferences) -> Self {
        log_debug!("Creating parser",
            "max_parse_depth" => MAX_PARSE_DEPTH,
            "trace_productions" => preferences.trace_productions);

        Self {
            tokens,
            preferences,
            context_stack: Vec::new(),
            parse_depth: 0,
        }
    }

    pub fn from_stream(stream: S) -> Self {
        Self::new(PeekLexer::new(Lexer::new(stream)))
    }

    /// Parse the whole input into top-level nodes
    pub fn parse(&mut self) -> SyntaxResult<Vec<TopLevelNode>> {
        match self.consume_program() {
            Ok(nodes) => {
                log_success!(codes::success::PARSE_COMPLETE, "Syntax analysis completed",
                    "top_level_nodes" => nodes.len(),
                    "tokens" => self.tokens.lexer().token_count());
                Ok(nodes)
            }
            Err(error) => {
                log_error!(error.error_code(), &error.message(),
                    span = error.span(),
                    "context" => self.current_context());
                Err(error)
            }
        }
    }

    fn consume_program(&mut self) -> SyntaxResult<Vec<TopLevelNode>> {
        self.enter("program");
        let mut nodes = Vec::new();

        while !self.at_end()? {
            if self.next_is(keyword(Keyword::Def))? {
                nodes.push(TopLevelNode::FunctionDefinition(
                    self.consume_function_definition()?,
                ));
            } else if let Some(statement) = self.consume_statement()? {
                nodes.push(TopLevelNode::Statement(statement));
            }
        }

        self.leave();
        Ok(nodes)
    }

    fn consume_function_definition(&mut self) -> SyntaxResult<FunctionDefinitionNode> {
        self.enter("function definition");

        self.expect(keyword(Keyword::Def), |_, _| {
            "Function definitions must begin with \"def\"".to_string()
        })?;
        let identifier = self.consume_identifier(|s, t| {
            format!("The {}: \"{}\" is not a valid function name", s, t)
        })?;
        self.expect(symbol(Symbol::ParenOpen), |_, _| {
            "Expected \"(\" to begin function argument list".to_string()
        })?;

        let mut arguments = Vec::new();
        if !self.next_is(symbol(Symbol::ParenClose))? {
            loop {
                arguments.push(self.consume_argument()?);

                if arguments.len() > MAX_FUNCTION_ARGUMENTS {
                    return Err(SyntaxError::TooManyArguments {
                        function: identifier.name().to_string(),
                        count: arguments.len(),
                        max: MAX_FUNCTION_ARGUMENTS,
                        location: identifier.span().start(),
                    });
                }

                if !self.next_is(symbol(Symbol::Comma))? {
                    break;
                }
                self.advance()?;
            }
        }

        self.expect(symbol(Symbol::ParenClose), |_, _| {
            "Expected \")\" to end function argument list".to_string()
        })?;

        let return_type = if self.next_is(symbol(Symbol::BraceOpen))? {
            None
        } else {
            Some(self.consume_type_name(|s, t| {
                format!("Unexpected {}: \"{}\" as function return type", s, t)
            })?)
        };

        let block_name = format!("the function body of \"{}\"", identifier.name());
        let block = self.consume_block(&block_name)?;

        self.leave();
        Ok(FunctionDefinitionNode {
            identifier,
            arguments,
            return_type,
            block,
        })
    }

    fn consume_argument(&mut self) -> SyntaxResult<ArgumentNode> {
        self.enter("argument");

        let identifier = self.consume_identifier(|s, t| {
            format!("The {}: \"{}\" is not a valid argument name", s, t)
        })?;
        let type_name = self.consume_type_name(|s, t| {
            format!("The {} \"{}\" is not a valid argument type", s, t)
        })?;

        self.leave();
        Ok(ArgumentNode {
            identifier,
            type_name,
        })
    }

    fn consume_block(&mut self, block_name: &str) -> SyntaxResult<Vec<StatementNode>> {
        self.enter("block");

        self.expect(symbol(Symbol::BraceOpen), |_, _| {
            format!("Expected \"{{\" to begin {}", block_name)
        })?;

        let mut statements = Vec::new();
        while !self.at_end()? && !self.next_is(symbol(Symbol::BraceClose))? {
            if let Some(statement) = self.consume_statement()? {
                statements.push(statement);
            }
        }

        self.expect(symbol(Symbol::BraceClose), |_, _| {
            format!("Expected \"}}\" to end {}", block_name)
        })?;

        self.leave();
        Ok(statements)
    }

    /// `None` for an empty statement
    fn consume_statement(&mut self) -> SyntaxResult<Option<StatementNode>> {
        if self.next_is(keyword(Keyword::Let))? {
            return Ok(Some(StatementNode::VariableDeclaration(
                self.consume_variable_declaration()?,
            )));
        }
        if self.next_is(keyword(Keyword::If))? {
            return Ok(Some(StatementNode::If(self.consume_if_statement()?)));
        }
        if self.next_is(symbol(Symbol::SemiColon))? {
            self.advance()?;
            return Ok(None);
        }

        self.enter("expression statement");
        let expression = self.consume_expression()?;
        self.expect(symbol(Symbol::SemiColon), |_, _| {
            "Expected \";\" to end statement".to_string()
        })?;
        self.leave();

        Ok(Some(StatementNode::Expression(expression)))
    }

    fn consume_if_statement(&mut self) -> SyntaxResult<IfStatementNode> {
        self.enter("if statement");

        let if_token = self.expect(keyword(Keyword::If), |_, _| {
            "If statements must begin with \"if\"".to_string()
        })?;

        if self.parse_depth >= MAX_PARSE_DEPTH {
            return Err(SyntaxError::max_recursion_depth(
                self.parse_depth + 1,
                if_token.start_location(),
            ));
        }

        self.parse_depth += 1;
        let result = self.consume_if_branches();
        self.parse_depth -= 1;

        self.leave();
        result
    }

    fn consume_if_branches(&mut self) -> SyntaxResult<IfStatementNode> {
        let condition = self.consume_expression()?;
        let when_true = self.consume_block("true-condition of if statement")?;

        let when_false = if self.next_is(keyword(Keyword::Else))? {
            self.advance()?;
            self.consume_block("false-condition of if statement")?
        } else {
            Vec::new()
        };

        Ok(IfStatementNode {
            condition,
            when_true,
            when_false,
        })
    }

    fn consume_variable_declaration(&mut self) -> SyntaxResult<VariableDeclarationNode> {
        self.enter("variable declaration");

        self.expect(keyword(Keyword::Let), |_, _| {
            "Variable declarations must begin with \"let\"".to_string()
        })?;
        let identifier = self.consume_identifier(|s, t| {
            format!("The {}: \"{}\" is not a valid variable name", s, t)
        })?;
        let type_name = self.consume_type_name(|s, t| {
            format!("The {} \"{}\" is not a valid variable type", s, t)
        })?;

        let value = if self.next_is(symbol(Symbol::Equal))? {
            self.advance()?;
            Some(self.consume_expression()?)
        } else {
            None
        };

        self.leave();
        Ok(VariableDeclarationNode {
            identifier,
            type_name,
            value,
        })
    }

    fn consume_expression(&mut self) -> SyntaxResult<ExpressionNode> {
        let token = self.expect(ExpressionNode::is_operand, |s, t| {
            format!("Expected an expression but found {}: \"{}\"", s, t)
        })?;

        let kind = token.kind().clone();
        Ok(match kind {
            TokenKind::Integer(_) => ExpressionNode::Integer(token),
            TokenKind::Float(_) => ExpressionNode::Float(token),
            // is_operand admits nothing else
            _ => ExpressionNode::Identifier(IdentifierNode { identifier: token }),
        })
    }

    fn consume_identifier<M>(&mut self, message: M) -> SyntaxResult<IdentifierNode>
    where
        M: FnOnce(&str, &str) -> String,
    {
        let identifier = self.expect(Token::is_identifier, message)?;
        Ok(IdentifierNode { identifier })
    }

    fn consume_type_name<M>(&mut self, message: M) -> SyntaxResult<TypeNameNode>
    where
        M: FnOnce(&str, &str) -> String,
    {
        let identifier = self.expect(Token::is_identifier, message)?;
        Ok(TypeNameNode { identifier })
    }

    // ------------------------------------------------------------------------
    // Token access
    // ------------------------------------------------------------------------

    fn skip_comments(&mut self) -> SyntaxResult<()> {
        while self.tokens.peek()?.is_some_and(Token::is_comment) {
            self.tokens.read()?;
        }
        Ok(())
    }

    fn at_end(&mut self) -> SyntaxResult<bool> {
        self.skip_comments()?;
        Ok(self.tokens.peek()?.is_none())
    }

    fn next_is<F>(&mut self, accept: F) -> SyntaxResult<bool>
    where
        F: Fn(&Token) -> bool,
    {
        self.skip_comments()?;
        Ok(self.tokens.peek()?.is_some_and(accept))
    }

    /// Consume the next token if `accept` holds, otherwise fail with `message`
    /// applied to the next token's short name and text
    fn expect<F, M>(&mut self, accept: F, message: M) -> SyntaxResult<Token>
    where
        F: Fn(&Token) -> bool,
        M: FnOnce(&str, &str) -> String,
    {
        if self.next_is(accept)? {
            self.advance()
        } else {
            Err(self.unexpected(message))
        }
    }

    fn advance(&mut self) -> SyntaxResult<Token> {
        match self.tokens.read()? {
            Some(token) => {
                if self.preferences.trace_productions {
                    log_debug!("Token consumed",
                        "context" => self.current_context(),
                        "token" => token);
                }
                Ok(token)
            }
            None => Err(SyntaxError::unexpected_end_of_input(
                format!("Unexpected {}", END_OF_INPUT),
                self.tokens.location(),
            )),
        }
    }

    fn unexpected<M>(&self, message: M) -> SyntaxError
    where
        M: FnOnce(&str, &str) -> String,
    {
        match self.tokens.peek() {
            Ok(Some(token)) => {
                SyntaxError::unexpected_token(message(token.short_name(), token.text()), token)
            }
            Ok(None) => SyntaxError::unexpected_end_of_input(
                message(END_OF_INPUT, ""),
                self.tokens.location(),
            ),
            Err(error) => SyntaxError::Lexical(error),
        }
    }

    // ------------------------------------------------------------------------
    // Production context
    // ------------------------------------------------------------------------

    fn enter(&mut self, production: &'static str) {
        self.context_stack.push(production);
        if self.preferences.trace_productions {
            log_debug!("Entering production",
                "production" => production,
                "depth" => self.context_stack.len(),
                "location" => self.tokens.location());
        }
    }

    fn leave(&mut self) {
        self.context_stack.pop();
    }

    /// Innermost production being parsed
    pub fn current_context(&self) -> &'static str {
        self.context_stack.last().copied().unwrap_or("program")
    }
}

impl Parser<StringStream> {
    pub fn from_source(source: &str) -> Self {
        Self::from_stream(StringStream::new(source))
    }
}
