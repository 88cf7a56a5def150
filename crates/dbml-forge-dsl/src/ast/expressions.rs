use crate::ast::{SyntaxElement, SyntaxNode};
use crate::token::{SyntaxKind, SyntaxToken};

pub enum ExpressionSyntax {
    Literal(LiteralExpression),
    Name(NameExpression),
    Backtick(BacktickExpression),
    Parenthesized(ParenthesizedExpression),
    Call(CallExpression),
}

impl ExpressionSyntax {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            ExpressionSyntax::Literal(expression) => expression,
            ExpressionSyntax::Name(expression) => expression,
            ExpressionSyntax::Backtick(expression) => expression,
            ExpressionSyntax::Parenthesized(expression) => expression,
            ExpressionSyntax::Call(expression) => expression,
        }
    }
}

impl SyntaxNode for ExpressionSyntax {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

/// A number, boolean, `null`, or string token used as a value.
pub struct LiteralExpression {
    pub literal_token: SyntaxToken,
}

impl SyntaxNode for LiteralExpression {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::LiteralExpression
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.literal_token)]
    }
}

pub struct NameExpression {
    pub identifier_token: SyntaxToken,
}

impl SyntaxNode for NameExpression {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NameExpression
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.identifier_token)]
    }
}

/// A backtick-delimited raw expression, passed through uninterpreted.
pub struct BacktickExpression {
    pub open_backtick_token: SyntaxToken,
    pub expression: Box<ExpressionSyntax>,
    pub close_backtick_token: SyntaxToken,
}

impl SyntaxNode for BacktickExpression {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::BacktickExpression
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.open_backtick_token),
            SyntaxElement::Node(self.expression.as_ref()),
            SyntaxElement::Token(&self.close_backtick_token),
        ]
    }
}

pub struct ParenthesizedExpression {
    pub open_parenthesis_token: SyntaxToken,
    pub expression: Box<ExpressionSyntax>,
    pub close_parenthesis_token: SyntaxToken,
}

impl SyntaxNode for ParenthesizedExpression {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ParenthesizedExpression
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.open_parenthesis_token),
            SyntaxElement::Node(self.expression.as_ref()),
            SyntaxElement::Token(&self.close_parenthesis_token),
        ]
    }
}

/// `name(arg, ...)`, e.g. a database function in a default value.
pub struct CallExpression {
    pub identifier_token: SyntaxToken,
    pub open_parenthesis_token: SyntaxToken,
    pub arguments: Vec<ExpressionSyntax>,
    pub separator_tokens: Vec<SyntaxToken>,
    pub close_parenthesis_token: SyntaxToken,
}

impl SyntaxNode for CallExpression {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::CallExpression
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![
            SyntaxElement::Token(&self.identifier_token),
            SyntaxElement::Token(&self.open_parenthesis_token),
        ];
        for (index, argument) in self.arguments.iter().enumerate() {
            children.push(SyntaxElement::Node(argument as &dyn SyntaxNode));
            if let Some(separator) = self.separator_tokens.get(index) {
                children.push(SyntaxElement::Token(separator));
            }
        }
        children.push(SyntaxElement::Token(&self.close_parenthesis_token));
        children
    }
}
