use crate::ast::{
    BlockStatement, ProjectSettingListClause, RelationshipConstraintClause, StatementSyntax,
    SyntaxElement, SyntaxNode, TableSettingListClause,
};
use crate::token::{SyntaxKind, SyntaxToken};

pub enum MemberSyntax {
    ProjectDeclaration(ProjectDeclarationMember),
    EnumDeclaration(EnumDeclarationMember),
    TableDeclaration(TableDeclarationMember),
    RelationshipShortForm(RelationshipShortFormDeclarationMember),
    RelationshipLongForm(RelationshipLongFormDeclarationMember),
    GlobalStatement(GlobalStatementMember),
}

impl MemberSyntax {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            MemberSyntax::ProjectDeclaration(member) => member,
            MemberSyntax::EnumDeclaration(member) => member,
            MemberSyntax::TableDeclaration(member) => member,
            MemberSyntax::RelationshipShortForm(member) => member,
            MemberSyntax::RelationshipLongForm(member) => member,
            MemberSyntax::GlobalStatement(member) => member,
        }
    }
}

impl SyntaxNode for MemberSyntax {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

/// `Project <name> { <settings> }`.
pub struct ProjectDeclarationMember {
    pub project_keyword: SyntaxToken,
    pub identifier_token: Option<SyntaxToken>,
    pub settings: ProjectSettingListClause,
}

impl SyntaxNode for ProjectDeclarationMember {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ProjectDeclarationMember
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![SyntaxElement::Token(&self.project_keyword)];
        if let Some(identifier) = &self.identifier_token {
            children.push(SyntaxElement::Token(identifier));
        }
        children.push(SyntaxElement::Node(&self.settings as &dyn SyntaxNode));
        children
    }
}

/// The dotted name of an enum declaration: `name` or `schema.name`.
pub struct EnumIdentifierClause {
    pub parts: Vec<SyntaxToken>,
    pub dot_tokens: Vec<SyntaxToken>,
}

impl EnumIdentifierClause {
    pub fn part_texts(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.text()).collect()
    }
}

impl SyntaxNode for EnumIdentifierClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::EnumIdentifierClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        dotted_name_children(&self.parts, &self.dot_tokens)
    }
}

/// `enum <name> { <entries> }`.
pub struct EnumDeclarationMember {
    pub enum_keyword: SyntaxToken,
    pub identifier: EnumIdentifierClause,
    pub body: BlockStatement,
}

impl SyntaxNode for EnumDeclarationMember {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::EnumDeclarationMember
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.enum_keyword),
            SyntaxElement::Node(&self.identifier as &dyn SyntaxNode),
            SyntaxElement::Node(&self.body as &dyn SyntaxNode),
        ]
    }
}

/// The dotted name of a table declaration: `name`, `schema.name`, or
/// `database.schema.name`. Parts resolve right to left.
pub struct TableIdentifierClause {
    pub parts: Vec<SyntaxToken>,
    pub dot_tokens: Vec<SyntaxToken>,
}

impl TableIdentifierClause {
    pub fn part_texts(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.text()).collect()
    }
}

impl SyntaxNode for TableIdentifierClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::TableIdentifierClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        dotted_name_children(&self.parts, &self.dot_tokens)
    }
}

/// `as <alias>` after a table name.
pub struct TableAliasClause {
    pub as_keyword: SyntaxToken,
    pub identifier_token: SyntaxToken,
}

impl SyntaxNode for TableAliasClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::TableAliasClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.as_keyword),
            SyntaxElement::Token(&self.identifier_token),
        ]
    }
}

/// `Table <name> [as alias] [settings] { <body> }`.
pub struct TableDeclarationMember {
    pub table_keyword: SyntaxToken,
    pub identifier: TableIdentifierClause,
    pub alias: Option<TableAliasClause>,
    pub settings: Option<TableSettingListClause>,
    pub body: BlockStatement,
}

impl SyntaxNode for TableDeclarationMember {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::TableDeclarationMember
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![
            SyntaxElement::Token(&self.table_keyword),
            SyntaxElement::Node(&self.identifier as &dyn SyntaxNode),
        ];
        if let Some(alias) = &self.alias {
            children.push(SyntaxElement::Node(alias as &dyn SyntaxNode));
        }
        if let Some(settings) = &self.settings {
            children.push(SyntaxElement::Node(settings as &dyn SyntaxNode));
        }
        children.push(SyntaxElement::Node(&self.body as &dyn SyntaxNode));
        children
    }
}

/// `Ref <name>: from <op> to`.
pub struct RelationshipShortFormDeclarationMember {
    pub ref_keyword: SyntaxToken,
    pub identifier_token: Option<SyntaxToken>,
    pub colon_token: SyntaxToken,
    pub constraint: RelationshipConstraintClause,
}

impl SyntaxNode for RelationshipShortFormDeclarationMember {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::RelationshipShortFormDeclarationMember
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![SyntaxElement::Token(&self.ref_keyword)];
        if let Some(identifier) = &self.identifier_token {
            children.push(SyntaxElement::Token(identifier));
        }
        children.push(SyntaxElement::Token(&self.colon_token));
        children.push(SyntaxElement::Node(&self.constraint as &dyn SyntaxNode));
        children
    }
}

/// `Ref <name> { from <op> to }`.
pub struct RelationshipLongFormDeclarationMember {
    pub ref_keyword: SyntaxToken,
    pub identifier_token: Option<SyntaxToken>,
    pub open_brace_token: SyntaxToken,
    pub constraint: RelationshipConstraintClause,
    pub close_brace_token: SyntaxToken,
}

impl SyntaxNode for RelationshipLongFormDeclarationMember {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::RelationshipLongFormDeclarationMember
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![SyntaxElement::Token(&self.ref_keyword)];
        if let Some(identifier) = &self.identifier_token {
            children.push(SyntaxElement::Token(identifier));
        }
        children.push(SyntaxElement::Token(&self.open_brace_token));
        children.push(SyntaxElement::Node(&self.constraint as &dyn SyntaxNode));
        children.push(SyntaxElement::Token(&self.close_brace_token));
        children
    }
}

/// A bare statement at document top level.
pub struct GlobalStatementMember {
    pub statement: StatementSyntax,
}

impl SyntaxNode for GlobalStatementMember {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::GlobalStatementMember
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Node(&self.statement as &dyn SyntaxNode)]
    }
}

fn dotted_name_children<'a>(
    parts: &'a [SyntaxToken],
    dot_tokens: &'a [SyntaxToken],
) -> Vec<SyntaxElement<'a>> {
    let mut children = Vec::new();
    for (index, part) in parts.iter().enumerate() {
        children.push(SyntaxElement::Token(part));
        if let Some(dot) = dot_tokens.get(index) {
            children.push(SyntaxElement::Token(dot));
        }
    }
    children
}
