use crate::ast::{
    ColumnSettingListClause, EnumEntrySettingListClause, ExpressionSyntax, IndexSettingListClause,
    SyntaxElement, SyntaxNode,
};
use crate::token::{SyntaxKind, SyntaxToken};

pub enum StatementSyntax {
    Block(BlockStatement),
    NoteDeclaration(NoteDeclarationStatement),
    ColumnDeclaration(ColumnDeclarationStatement),
    IndexesDeclaration(IndexesDeclarationStatement),
    SingleFieldIndexDeclaration(SingleFieldIndexDeclarationStatement),
    CompositeIndexDeclaration(CompositeIndexDeclarationStatement),
    EnumEntryDeclaration(EnumEntryDeclarationStatement),
    Expression(ExpressionStatement),
}

impl StatementSyntax {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            StatementSyntax::Block(statement) => statement,
            StatementSyntax::NoteDeclaration(statement) => statement,
            StatementSyntax::ColumnDeclaration(statement) => statement,
            StatementSyntax::IndexesDeclaration(statement) => statement,
            StatementSyntax::SingleFieldIndexDeclaration(statement) => statement,
            StatementSyntax::CompositeIndexDeclaration(statement) => statement,
            StatementSyntax::EnumEntryDeclaration(statement) => statement,
            StatementSyntax::Expression(statement) => statement,
        }
    }
}

impl SyntaxNode for StatementSyntax {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

pub struct BlockStatement {
    pub open_brace_token: SyntaxToken,
    pub statements: Vec<StatementSyntax>,
    pub close_brace_token: SyntaxToken,
}

impl SyntaxNode for BlockStatement {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::BlockStatement
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![SyntaxElement::Token(&self.open_brace_token)];
        for statement in &self.statements {
            children.push(SyntaxElement::Node(statement as &dyn SyntaxNode));
        }
        children.push(SyntaxElement::Token(&self.close_brace_token));
        children
    }
}

/// `note: <string>`, attaching a note to the enclosing scope.
pub struct NoteDeclarationStatement {
    pub note_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for NoteDeclarationStatement {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NoteDeclarationStatement
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.note_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

/// The declared type of a column: a bare identifier or an identifier with
/// parenthesized arguments such as `decimal(10, 2)`.
pub enum ColumnTypeClause {
    Identifier(ColumnTypeIdentifierClause),
    Parenthesized(ColumnTypeParenthesizedIdentifierClause),
}

impl ColumnTypeClause {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            ColumnTypeClause::Identifier(clause) => clause,
            ColumnTypeClause::Parenthesized(clause) => clause,
        }
    }

    /// Canonical text of the declared type, e.g. `nvarchar(MAX)`.
    pub fn type_text(&self) -> String {
        match self {
            ColumnTypeClause::Identifier(clause) => clause.identifier_token.text().to_string(),
            ColumnTypeClause::Parenthesized(clause) => {
                let arguments: Vec<&str> = clause
                    .argument_tokens
                    .iter()
                    .map(|argument| argument.text())
                    .collect();
                format!("{}({})", clause.identifier_token.text(), arguments.join(", "))
            }
        }
    }
}

impl SyntaxNode for ColumnTypeClause {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

pub struct ColumnTypeIdentifierClause {
    pub identifier_token: SyntaxToken,
}

impl SyntaxNode for ColumnTypeIdentifierClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ColumnTypeIdentifierClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.identifier_token)]
    }
}

pub struct ColumnTypeParenthesizedIdentifierClause {
    pub identifier_token: SyntaxToken,
    pub open_parenthesis_token: SyntaxToken,
    pub argument_tokens: Vec<SyntaxToken>,
    pub separator_tokens: Vec<SyntaxToken>,
    pub close_parenthesis_token: SyntaxToken,
}

impl SyntaxNode for ColumnTypeParenthesizedIdentifierClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ColumnTypeParenthesizedIdentifierClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![
            SyntaxElement::Token(&self.identifier_token),
            SyntaxElement::Token(&self.open_parenthesis_token),
        ];
        for (index, argument) in self.argument_tokens.iter().enumerate() {
            children.push(SyntaxElement::Token(argument));
            if let Some(separator) = self.separator_tokens.get(index) {
                children.push(SyntaxElement::Token(separator));
            }
        }
        children.push(SyntaxElement::Token(&self.close_parenthesis_token));
        children
    }
}

/// `<name> <type> [settings]` inside a table body.
pub struct ColumnDeclarationStatement {
    pub identifier_token: SyntaxToken,
    pub type_clause: ColumnTypeClause,
    pub settings: Option<ColumnSettingListClause>,
}

impl SyntaxNode for ColumnDeclarationStatement {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ColumnDeclarationStatement
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![
            SyntaxElement::Token(&self.identifier_token),
            SyntaxElement::Node(&self.type_clause as &dyn SyntaxNode),
        ];
        if let Some(settings) = &self.settings {
            children.push(SyntaxElement::Node(settings as &dyn SyntaxNode));
        }
        children
    }
}

/// `indexes { ... }` inside a table body; entries are single-field or
/// composite index declarations.
pub struct IndexesDeclarationStatement {
    pub indexes_keyword: SyntaxToken,
    pub open_brace_token: SyntaxToken,
    pub indexes: Vec<StatementSyntax>,
    pub close_brace_token: SyntaxToken,
}

impl SyntaxNode for IndexesDeclarationStatement {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::IndexesDeclarationStatement
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![
            SyntaxElement::Token(&self.indexes_keyword),
            SyntaxElement::Token(&self.open_brace_token),
        ];
        for index in &self.indexes {
            children.push(SyntaxElement::Node(index as &dyn SyntaxNode));
        }
        children.push(SyntaxElement::Token(&self.close_brace_token));
        children
    }
}

pub struct SingleFieldIndexDeclarationStatement {
    pub identifier_token: SyntaxToken,
    pub settings: Option<IndexSettingListClause>,
}

impl SyntaxNode for SingleFieldIndexDeclarationStatement {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::SingleFieldIndexDeclarationStatement
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![SyntaxElement::Token(&self.identifier_token)];
        if let Some(settings) = &self.settings {
            children.push(SyntaxElement::Node(settings as &dyn SyntaxNode));
        }
        children
    }
}

/// `(a, b, ...)` index over several columns.
pub struct CompositeIndexDeclarationStatement {
    pub open_parenthesis_token: SyntaxToken,
    pub columns: Vec<ExpressionSyntax>,
    pub separator_tokens: Vec<SyntaxToken>,
    pub close_parenthesis_token: SyntaxToken,
    pub settings: Option<IndexSettingListClause>,
}

impl SyntaxNode for CompositeIndexDeclarationStatement {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::CompositeIndexDeclarationStatement
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![SyntaxElement::Token(&self.open_parenthesis_token)];
        for (index, column) in self.columns.iter().enumerate() {
            children.push(SyntaxElement::Node(column as &dyn SyntaxNode));
            if let Some(separator) = self.separator_tokens.get(index) {
                children.push(SyntaxElement::Token(separator));
            }
        }
        children.push(SyntaxElement::Token(&self.close_parenthesis_token));
        if let Some(settings) = &self.settings {
            children.push(SyntaxElement::Node(settings as &dyn SyntaxNode));
        }
        children
    }
}

pub struct EnumEntryDeclarationStatement {
    pub identifier_token: SyntaxToken,
    pub settings: Option<EnumEntrySettingListClause>,
}

impl SyntaxNode for EnumEntryDeclarationStatement {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::EnumEntryDeclarationStatement
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![SyntaxElement::Token(&self.identifier_token)];
        if let Some(settings) = &self.settings {
            children.push(SyntaxElement::Node(settings as &dyn SyntaxNode));
        }
        children
    }
}

pub struct ExpressionStatement {
    pub expression: ExpressionSyntax,
}

impl SyntaxNode for ExpressionStatement {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ExpressionStatement
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Node(&self.expression as &dyn SyntaxNode)]
    }
}
