use crate::ast::{ExpressionSyntax, SyntaxElement, SyntaxNode};
use crate::token::{SyntaxKind, SyntaxToken};

/// A dot-separated name path addressing a column, e.g. `schema.table.column`.
/// Parts resolve right to left: the last part is the column name.
pub struct ColumnIdentifierClause {
    pub parts: Vec<SyntaxToken>,
    pub dot_tokens: Vec<SyntaxToken>,
}

impl ColumnIdentifierClause {
    pub fn part_texts(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.text()).collect()
    }
}

impl SyntaxNode for ColumnIdentifierClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ColumnIdentifierClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        interleave(&self.parts, &self.dot_tokens)
    }
}

/// `[from] <operator> to` of a relationship; the from side is absent in
/// column-level `ref:` settings, where the owning column supplies it.
pub struct RelationshipConstraintClause {
    pub from: Option<ColumnIdentifierClause>,
    pub operator_token: SyntaxToken,
    pub to: ColumnIdentifierClause,
}

impl SyntaxNode for RelationshipConstraintClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::RelationshipConstraintClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = Vec::new();
        if let Some(from) = &self.from {
            children.push(SyntaxElement::Node(from as &dyn SyntaxNode));
        }
        children.push(SyntaxElement::Token(&self.operator_token));
        children.push(SyntaxElement::Node(&self.to as &dyn SyntaxNode));
        children
    }
}

// -- Project settings --

/// The brace-delimited body of a project declaration, holding newline
/// separated settings.
pub struct ProjectSettingListClause {
    pub open_brace_token: SyntaxToken,
    pub settings: Vec<ProjectSettingClause>,
    pub close_brace_token: SyntaxToken,
}

impl SyntaxNode for ProjectSettingListClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ProjectSettingListClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        let mut children = vec![SyntaxElement::Token(&self.open_brace_token)];
        for setting in &self.settings {
            children.push(SyntaxElement::Node(setting as &dyn SyntaxNode));
        }
        children.push(SyntaxElement::Token(&self.close_brace_token));
        children
    }
}

pub enum ProjectSettingClause {
    DatabaseProvider(DatabaseProviderProjectSettingClause),
    Note(NoteProjectSettingClause),
    Unknown(UnknownProjectSettingClause),
}

impl ProjectSettingClause {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            ProjectSettingClause::DatabaseProvider(clause) => clause,
            ProjectSettingClause::Note(clause) => clause,
            ProjectSettingClause::Unknown(clause) => clause,
        }
    }
}

impl SyntaxNode for ProjectSettingClause {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

pub struct DatabaseProviderProjectSettingClause {
    pub database_type_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for DatabaseProviderProjectSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::DatabaseProviderProjectSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.database_type_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

pub struct NoteProjectSettingClause {
    pub note_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for NoteProjectSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NoteProjectSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.note_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

pub struct UnknownProjectSettingClause {
    pub name_token: SyntaxToken,
    pub colon_token: Option<SyntaxToken>,
    pub value_token: Option<SyntaxToken>,
}

impl SyntaxNode for UnknownProjectSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::UnknownProjectSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        unknown_setting_children(&self.name_token, &self.colon_token, &self.value_token)
    }
}

// -- Table settings --

pub struct TableSettingListClause {
    pub open_bracket_token: SyntaxToken,
    pub settings: Vec<TableSettingClause>,
    pub separator_tokens: Vec<SyntaxToken>,
    pub close_bracket_token: SyntaxToken,
}

impl SyntaxNode for TableSettingListClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::TableSettingListClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        setting_list_children(
            &self.open_bracket_token,
            &self.settings,
            &self.separator_tokens,
            &self.close_bracket_token,
        )
    }
}

pub enum TableSettingClause {
    HeaderColor(HeaderColorTableSettingClause),
    Unknown(UnknownTableSettingClause),
}

impl TableSettingClause {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            TableSettingClause::HeaderColor(clause) => clause,
            TableSettingClause::Unknown(clause) => clause,
        }
    }
}

impl SyntaxNode for TableSettingClause {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

pub struct HeaderColorTableSettingClause {
    pub headercolor_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for HeaderColorTableSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::HeaderColorTableSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.headercolor_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

pub struct UnknownTableSettingClause {
    pub name_token: SyntaxToken,
    pub colon_token: Option<SyntaxToken>,
    pub value_token: Option<SyntaxToken>,
}

impl SyntaxNode for UnknownTableSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::UnknownTableSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        unknown_setting_children(&self.name_token, &self.colon_token, &self.value_token)
    }
}

// -- Column settings --

pub struct ColumnSettingListClause {
    pub open_bracket_token: SyntaxToken,
    pub settings: Vec<ColumnSettingClause>,
    pub separator_tokens: Vec<SyntaxToken>,
    pub close_bracket_token: SyntaxToken,
}

impl SyntaxNode for ColumnSettingListClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::ColumnSettingListClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        setting_list_children(
            &self.open_bracket_token,
            &self.settings,
            &self.separator_tokens,
            &self.close_bracket_token,
        )
    }
}

pub enum ColumnSettingClause {
    PrimaryKey(PrimaryKeyColumnSettingClause),
    Pk(PkColumnSettingClause),
    Null(NullColumnSettingClause),
    NotNull(NotNullColumnSettingClause),
    Unique(UniqueColumnSettingClause),
    Increment(IncrementColumnSettingClause),
    Default(DefaultColumnSettingClause),
    Note(NoteColumnSettingClause),
    Relationship(RelationshipColumnSettingClause),
    Unknown(UnknownColumnSettingClause),
}

impl ColumnSettingClause {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            ColumnSettingClause::PrimaryKey(clause) => clause,
            ColumnSettingClause::Pk(clause) => clause,
            ColumnSettingClause::Null(clause) => clause,
            ColumnSettingClause::NotNull(clause) => clause,
            ColumnSettingClause::Unique(clause) => clause,
            ColumnSettingClause::Increment(clause) => clause,
            ColumnSettingClause::Default(clause) => clause,
            ColumnSettingClause::Note(clause) => clause,
            ColumnSettingClause::Relationship(clause) => clause,
            ColumnSettingClause::Unknown(clause) => clause,
        }
    }

    /// The setting name as written, used for duplicate detection.
    pub fn name(&self) -> &str {
        match self {
            ColumnSettingClause::PrimaryKey(_) => "primary key",
            ColumnSettingClause::Pk(_) => "pk",
            ColumnSettingClause::Null(_) => "null",
            ColumnSettingClause::NotNull(_) => "not null",
            ColumnSettingClause::Unique(_) => "unique",
            ColumnSettingClause::Increment(_) => "increment",
            ColumnSettingClause::Default(_) => "default",
            ColumnSettingClause::Note(_) => "note",
            ColumnSettingClause::Relationship(_) => "ref",
            ColumnSettingClause::Unknown(clause) => clause.name_token.text(),
        }
    }
}

impl SyntaxNode for ColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

pub struct PrimaryKeyColumnSettingClause {
    pub primary_keyword: SyntaxToken,
    pub key_keyword: SyntaxToken,
}

impl SyntaxNode for PrimaryKeyColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::PrimaryKeyColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.primary_keyword),
            SyntaxElement::Token(&self.key_keyword),
        ]
    }
}

pub struct PkColumnSettingClause {
    pub pk_keyword: SyntaxToken,
}

impl SyntaxNode for PkColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::PkColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.pk_keyword)]
    }
}

pub struct NullColumnSettingClause {
    pub null_keyword: SyntaxToken,
}

impl SyntaxNode for NullColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NullColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.null_keyword)]
    }
}

pub struct NotNullColumnSettingClause {
    pub not_keyword: SyntaxToken,
    pub null_keyword: SyntaxToken,
}

impl SyntaxNode for NotNullColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NotNullColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.not_keyword),
            SyntaxElement::Token(&self.null_keyword),
        ]
    }
}

pub struct UniqueColumnSettingClause {
    pub unique_keyword: SyntaxToken,
}

impl SyntaxNode for UniqueColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::UniqueColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.unique_keyword)]
    }
}

pub struct IncrementColumnSettingClause {
    pub increment_keyword: SyntaxToken,
}

impl SyntaxNode for IncrementColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::IncrementColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.increment_keyword)]
    }
}

/// `default: <expression>`; the expression is kept even when its form is
/// reported as disallowed.
pub struct DefaultColumnSettingClause {
    pub default_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub expression: ExpressionSyntax,
}

impl SyntaxNode for DefaultColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::DefaultColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.default_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Node(&self.expression as &dyn SyntaxNode),
        ]
    }
}

pub struct NoteColumnSettingClause {
    pub note_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for NoteColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NoteColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.note_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

/// `ref: <op> <path>`, an inline relationship owned by the column.
pub struct RelationshipColumnSettingClause {
    pub ref_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub constraint: RelationshipConstraintClause,
}

impl SyntaxNode for RelationshipColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::RelationshipColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.ref_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Node(&self.constraint as &dyn SyntaxNode),
        ]
    }
}

pub struct UnknownColumnSettingClause {
    pub name_token: SyntaxToken,
    pub colon_token: Option<SyntaxToken>,
    pub value_token: Option<SyntaxToken>,
}

impl SyntaxNode for UnknownColumnSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::UnknownColumnSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        unknown_setting_children(&self.name_token, &self.colon_token, &self.value_token)
    }
}

// -- Index settings --

pub struct IndexSettingListClause {
    pub open_bracket_token: SyntaxToken,
    pub settings: Vec<IndexSettingClause>,
    pub separator_tokens: Vec<SyntaxToken>,
    pub close_bracket_token: SyntaxToken,
}

impl SyntaxNode for IndexSettingListClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::IndexSettingListClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        setting_list_children(
            &self.open_bracket_token,
            &self.settings,
            &self.separator_tokens,
            &self.close_bracket_token,
        )
    }
}

pub enum IndexSettingClause {
    Pk(PkIndexSettingClause),
    PrimaryKey(PrimaryKeyIndexSettingClause),
    Unique(UniqueIndexSettingClause),
    Name(NameIndexSettingClause),
    Note(NoteIndexSettingClause),
    Type(TypeIndexSettingClause),
    Unknown(UnknownIndexSettingClause),
}

impl IndexSettingClause {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            IndexSettingClause::Pk(clause) => clause,
            IndexSettingClause::PrimaryKey(clause) => clause,
            IndexSettingClause::Unique(clause) => clause,
            IndexSettingClause::Name(clause) => clause,
            IndexSettingClause::Note(clause) => clause,
            IndexSettingClause::Type(clause) => clause,
            IndexSettingClause::Unknown(clause) => clause,
        }
    }

    /// The setting name as written, used for duplicate detection.
    pub fn name(&self) -> &str {
        match self {
            IndexSettingClause::Pk(_) => "pk",
            IndexSettingClause::PrimaryKey(_) => "primary key",
            IndexSettingClause::Unique(_) => "unique",
            IndexSettingClause::Name(_) => "name",
            IndexSettingClause::Note(_) => "note",
            IndexSettingClause::Type(_) => "type",
            IndexSettingClause::Unknown(clause) => clause.name_token.text(),
        }
    }
}

impl SyntaxNode for IndexSettingClause {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

pub struct PkIndexSettingClause {
    pub pk_keyword: SyntaxToken,
}

impl SyntaxNode for PkIndexSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::PkIndexSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.pk_keyword)]
    }
}

pub struct PrimaryKeyIndexSettingClause {
    pub primary_keyword: SyntaxToken,
    pub key_keyword: SyntaxToken,
}

impl SyntaxNode for PrimaryKeyIndexSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::PrimaryKeyIndexSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.primary_keyword),
            SyntaxElement::Token(&self.key_keyword),
        ]
    }
}

pub struct UniqueIndexSettingClause {
    pub unique_keyword: SyntaxToken,
}

impl SyntaxNode for UniqueIndexSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::UniqueIndexSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![SyntaxElement::Token(&self.unique_keyword)]
    }
}

pub struct NameIndexSettingClause {
    pub name_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for NameIndexSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NameIndexSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.name_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

pub struct NoteIndexSettingClause {
    pub note_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for NoteIndexSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NoteIndexSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.note_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

pub struct TypeIndexSettingClause {
    pub type_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for TypeIndexSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::TypeIndexSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.type_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

pub struct UnknownIndexSettingClause {
    pub name_token: SyntaxToken,
    pub colon_token: Option<SyntaxToken>,
    pub value_token: Option<SyntaxToken>,
}

impl SyntaxNode for UnknownIndexSettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::UnknownIndexSettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        unknown_setting_children(&self.name_token, &self.colon_token, &self.value_token)
    }
}

// -- Enum entry settings --

pub struct EnumEntrySettingListClause {
    pub open_bracket_token: SyntaxToken,
    pub settings: Vec<EnumEntrySettingClause>,
    pub separator_tokens: Vec<SyntaxToken>,
    pub close_bracket_token: SyntaxToken,
}

impl SyntaxNode for EnumEntrySettingListClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::EnumEntrySettingListClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        setting_list_children(
            &self.open_bracket_token,
            &self.settings,
            &self.separator_tokens,
            &self.close_bracket_token,
        )
    }
}

pub enum EnumEntrySettingClause {
    Note(NoteEnumEntrySettingClause),
    Unknown(UnknownEnumEntrySettingClause),
}

impl EnumEntrySettingClause {
    pub fn as_node(&self) -> &dyn SyntaxNode {
        match self {
            EnumEntrySettingClause::Note(clause) => clause,
            EnumEntrySettingClause::Unknown(clause) => clause,
        }
    }

    /// The setting name as written, used for duplicate detection.
    pub fn name(&self) -> &str {
        match self {
            EnumEntrySettingClause::Note(_) => "note",
            EnumEntrySettingClause::Unknown(clause) => clause.name_token.text(),
        }
    }
}

impl SyntaxNode for EnumEntrySettingClause {
    fn kind(&self) -> SyntaxKind {
        self.as_node().kind()
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        self.as_node().children()
    }
}

pub struct NoteEnumEntrySettingClause {
    pub note_keyword: SyntaxToken,
    pub colon_token: SyntaxToken,
    pub value_token: SyntaxToken,
}

impl SyntaxNode for NoteEnumEntrySettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::NoteEnumEntrySettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        vec![
            SyntaxElement::Token(&self.note_keyword),
            SyntaxElement::Token(&self.colon_token),
            SyntaxElement::Token(&self.value_token),
        ]
    }
}

pub struct UnknownEnumEntrySettingClause {
    pub name_token: SyntaxToken,
    pub colon_token: Option<SyntaxToken>,
    pub value_token: Option<SyntaxToken>,
}

impl SyntaxNode for UnknownEnumEntrySettingClause {
    fn kind(&self) -> SyntaxKind {
        SyntaxKind::UnknownEnumEntrySettingClause
    }

    fn children(&self) -> Vec<SyntaxElement<'_>> {
        unknown_setting_children(&self.name_token, &self.colon_token, &self.value_token)
    }
}

// -- Shared child layouts --

fn interleave<'a>(parts: &'a [SyntaxToken], separators: &'a [SyntaxToken]) -> Vec<SyntaxElement<'a>> {
    let mut children = Vec::new();
    for (index, part) in parts.iter().enumerate() {
        children.push(SyntaxElement::Token(part));
        if let Some(separator) = separators.get(index) {
            children.push(SyntaxElement::Token(separator));
        }
    }
    children
}

fn setting_list_children<'a, T: SyntaxNode>(
    open_bracket: &'a SyntaxToken,
    settings: &'a [T],
    separators: &'a [SyntaxToken],
    close_bracket: &'a SyntaxToken,
) -> Vec<SyntaxElement<'a>> {
    let mut children = vec![SyntaxElement::Token(open_bracket)];
    for (index, setting) in settings.iter().enumerate() {
        children.push(SyntaxElement::Node(setting as &dyn SyntaxNode));
        if let Some(separator) = separators.get(index) {
            children.push(SyntaxElement::Token(separator));
        }
    }
    children.push(SyntaxElement::Token(close_bracket));
    children
}

fn unknown_setting_children<'a>(
    name_token: &'a SyntaxToken,
    colon_token: &'a Option<SyntaxToken>,
    value_token: &'a Option<SyntaxToken>,
) -> Vec<SyntaxElement<'a>> {
    let mut children = vec![SyntaxElement::Token(name_token)];
    if let Some(colon) = colon_token {
        children.push(SyntaxElement::Token(colon));
    }
    if let Some(value) = value_token {
        children.push(SyntaxElement::Token(value));
    }
    children
}
