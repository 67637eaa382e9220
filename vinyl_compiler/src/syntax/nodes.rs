//! Abstract syntax tree
//!
//! Nodes own the tokens they were built from, so every node can report its
//! source span without a side table.

use crate::tokens::{Token, TokenKind};
use crate::utils::Span;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentifierNode {
    pub identifier: Token,
}

impl IdentifierNode {
    pub fn name(&self) -> &str {
        self.identifier.text()
    }

    pub fn span(&self) -> Span {
        self.identifier.span()
    }
}

/// Type names are bare identifiers; they are not resolved here
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeNameNode {
    pub identifier: Token,
}

impl TypeNameNode {
    pub fn name(&self) -> &str {
        self.identifier.text()
    }

    pub fn span(&self) -> Span {
        self.identifier.span()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentNode {
    pub identifier: IdentifierNode,
    pub type_name: TypeNameNode,
}

impl ArgumentNode {
    pub fn span(&self) -> Span {
        self.identifier.span().merge(self.type_name.span())
    }
}

/// A single operand; operators are not part of the grammar yet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "expression", content = "value")]
pub enum ExpressionNode {
    Identifier(IdentifierNode),
    Integer(Token),
    Float(Token),
}

impl ExpressionNode {
    /// Whether `token` can start an expression
    pub fn is_operand(token: &Token) -> bool {
        matches!(
            token.kind(),
            TokenKind::Identifier | TokenKind::Integer(_) | TokenKind::Float(_)
        )
    }

    pub fn token(&self) -> &Token {
        match self {
            ExpressionNode::Identifier(node) => &node.identifier,
            ExpressionNode::Integer(token) | ExpressionNode::Float(token) => token,
        }
    }

    pub fn span(&self) -> Span {
        self.token().span()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStatementNode {
    pub condition: ExpressionNode,
    pub when_true: Vec<StatementNode>,
    /// Empty when there is no `else` block
    pub when_false: Vec<StatementNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDeclarationNode {
    pub identifier: IdentifierNode,
    pub type_name: TypeNameNode,
    pub value: Option<ExpressionNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "statement", content = "value")]
pub enum StatementNode {
    Expression(ExpressionNode),
    If(IfStatementNode),
    VariableDeclaration(VariableDeclarationNode),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDefinitionNode {
    pub identifier: IdentifierNode,
    pub arguments: Vec<ArgumentNode>,
    pub return_type: Option<TypeNameNode>,
    pub block: Vec<StatementNode>,
}

impl FunctionDefinitionNode {
    pub fn name(&self) -> &str {
        self.identifier.name()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", content = "value")]
pub enum TopLevelNode {
    FunctionDefinition(FunctionDefinitionNode),
    Statement(StatementNode),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Location;

    fn identifier(text: &str, column: u32) -> Token {
        let start = Location::new(1, column);
        let end = start.advance_str(text);
        Token::identifier(text, Span::new(start, end)).unwrap()
    }

    #[test]
    fn test_argument_span_covers_name_and_type() {
        let argument = ArgumentNode {
            identifier: IdentifierNode {
                identifier: identifier("count", 10),
            },
            type_name: TypeNameNode {
                identifier: identifier("Int", 16),
            },
        };

        assert_eq!(
            argument.span(),
            Span::new(Location::new(1, 10), Location::new(1, 19))
        );
    }

    #[test]
    fn test_operands() {
        let span = Span::default();
        assert!(ExpressionNode::is_operand(&Token::integer("1", span).unwrap()));
        assert!(ExpressionNode::is_operand(&Token::float("1.0", span).unwrap()));
        assert!(ExpressionNode::is_operand(&identifier("x", 1)));
        assert!(!ExpressionNode::is_operand(&Token::symbol(";", span).unwrap()));
        assert!(!ExpressionNode::is_operand(&Token::keyword("if", span).unwrap()));
    }

    #[test]
    fn test_nodes_serialize_with_tags() {
        let node = TopLevelNode::Statement(StatementNode::Expression(
            ExpressionNode::Identifier(IdentifierNode {
                identifier: identifier("x", 1),
            }),
        ));

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["node"], "Statement");
        assert_eq!(json["value"]["statement"], "Expression");
        assert_eq!(json["value"]["value"]["expression"], "Identifier");
    }
}
