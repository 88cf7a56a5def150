//! Typed syntax tree produced by the parser.
//!
//! Nodes are grouped into closed unions by category (members, statements,
//! expressions, setting clauses). Every node exposes its kind and an ordered
//! child sequence of nodes and tokens, so generic consumers (printers, tree
//! walkers) need no per-node knowledge. Separator tokens are part of the
//! child sequence.

mod clauses;
mod expressions;
mod members;
mod statements;

pub use clauses::*;
pub use expressions::*;
pub use members::*;
pub use statements::*;

use crate::diagnostics::Diagnostic;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::text::{SourceText, TextSpan};
use crate::token::{SyntaxKind, SyntaxToken};

/// A tree node: a kind plus an ordered sequence of immediate children.
pub trait SyntaxNode {
    fn kind(&self) -> SyntaxKind;

    fn children(&self) -> Vec<SyntaxElement<'_>>;

    /// Covering span from the first to the last child, trivia excluded.
    fn span(&self) -> TextSpan {
        let children = self.children();
        match (children.first(), children.last()) {
            (Some(first), Some(last)) => {
                TextSpan::from_bounds(first.span().start, last.span().end())
            }
            _ => TextSpan::new(0, 0),
        }
    }

    /// Covering span including leading and trailing trivia.
    fn full_span(&self) -> TextSpan {
        let children = self.children();
        match (children.first(), children.last()) {
            (Some(first), Some(last)) => {
                TextSpan::from_bounds(first.full_span().start, last.full_span().end())
            }
            _ => TextSpan::new(0, 0),
        }
    }
}

/// One immediate child of a node.
#[derive(Clone, Copy)]
pub enum SyntaxElement<'a> {
    Node(&'a dyn SyntaxNode),
    Token(&'a SyntaxToken),
}

impl SyntaxElement<'_> {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxElement::Node(node) => node.kind(),
            SyntaxElement::Token(token) => token.kind(),
        }
    }

    pub fn span(&self) -> TextSpan {
        match self {
            SyntaxElement::Node(node) => node.span(),
            SyntaxElement::Token(token) => token.span(),
        }
    }

    pub fn full_span(&self) -> TextSpan {
        match self {
            SyntaxElement::Node(node) => node.full_span(),
            SyntaxElement::Token(token) => token.full_span(),
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, SyntaxElement::Token(_))
    }
}

/// Root node: the members of one document plus the end-of-input token.
pub struct CompilationUnit {
    pub members: Vec<MemberSyntax>,
    pub end_of_file_token: SyntaxToken,
}

impl SyntaxNode for CompilationUnit {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::CompilationUnit
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = Vec::new();
        for member in &self.members {
            children.push(SyntaxElement::Node(member as &dyn SyntaxNode));
        }
        children.push(SyntaxElement::Token(&self.end_of_file_token));
        children
    }
}

/// A parsed document: source buffer, root node, and the diagnostics that
/// lexing and parsing accumulated.
pub struct SyntaxTree {
    source: SourceText,
    root: CompilationUnit,
    diagnostics: Vec<Diagnostic>,
}

impl SyntaxTree {
    pub fn parse(text: impl Into<String>) -> Self {
        let source = SourceText::new(text);
        let (tokens, lex_diagnostics) = Lexer::tokenize(&source);
        let mut parser = Parser::new(&source, tokens);
        let root = parser.parse_compilation_unit();
        let mut diagnostics = lex_diagnostics;
        diagnostics.extend(parser.into_diagnostics());
        Self {
            source,
            root,
            diagnostics: diagnostics.into_vec(),
        }
    }

    pub fn source(&self) -> &SourceText {
        &self.source
    }

    pub fn root(&self) -> &CompilationUnit {
        &self.root
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// All tokens of the tree in source order, the end-of-input token last.
    pub fn tokens(&self) -> Vec<&SyntaxToken> {
        let mut tokens = Vec::new();
        collect_tokens(&self.root, &mut tokens);
        tokens
    }

    /// Source text reconstructed from the tree's tokens and their trivia.
    pub fn full_text(&self) -> String {
        self.tokens().iter().map(|token| token.full_text()).collect()
    }
}

fn collect_tokens<'a>(node: &'a dyn SyntaxNode, tokens: &mut Vec<&'a SyntaxToken>) {
    for child in node.children() {
        match child {
            SyntaxElement::Token(token) => tokens.push(token),
            SyntaxElement::Node(child_node) => collect_tokens(child_node, tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compilation_unit_of_empty_input() {
        let tree = SyntaxTree::parse("");
        assert_eq!(tree.root().kind(), SyntaxKind::CompilationUnit);
        assert!(tree.root().members.is_empty());
        assert!(tree.diagnostics().is_empty());
        assert_eq!(tree.tokens().len(), 1);
    }

    #[test]
    fn node_span_covers_children() {
        let tree = SyntaxTree::parse("Table users { }");
        let member = &tree.root().members[0];
        assert_eq!(member.kind(), SyntaxKind::TableDeclarationMember);
        assert_eq!(member.as_node().span(), TextSpan::from_bounds(0, 15));
    }

    #[test]
    fn full_text_reconstructs_clean_input() {
        let input = "// schema\nTable users {\n  id int [pk]\n}\n";
        let tree = SyntaxTree::parse(input);
        assert!(tree.diagnostics().is_empty());
        assert_eq!(tree.full_text(), input);
    }
}
