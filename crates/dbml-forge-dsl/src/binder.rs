//! Binds a syntax tree to the resolved domain model.
//!
//! Binding is best-effort: the model is fully populated even when the tree
//! carries errors, so consumers must check the diagnostics before trusting
//! it. Duplicate declarations warn, and the most recent declaration wins.

use tracing::debug;

use dbml_forge_core::{
    Column, ColumnIdentifier, Database, EnumDefinition, EnumEntry, Project, Relationship,
    RelationshipKind, SettingValue, Table, TableIndex, UnknownSetting,
};

use crate::ast::{
    ColumnDeclarationStatement, ColumnSettingClause, CompositeIndexDeclarationStatement,
    EnumDeclarationMember, EnumEntryDeclarationStatement, EnumEntrySettingClause,
    ExpressionSyntax, IndexSettingClause, IndexSettingListClause, MemberSyntax,
    ProjectDeclarationMember, ProjectSettingClause, RelationshipConstraintClause,
    SingleFieldIndexDeclarationStatement, StatementSyntax, SyntaxNode, SyntaxTree,
    TableDeclarationMember, TableSettingClause,
};
use crate::diagnostics::{Diagnostic, DiagnosticBag};
use crate::text::TextSpan;
use crate::token::{SyntaxKind, SyntaxToken, TokenValue};

/// Binds a parsed document to its resolved database model.
///
/// The returned diagnostics are the tree's own list followed by any
/// warnings binding added.
pub fn bind(tree: &SyntaxTree) -> (Database, Vec<Diagnostic>) {
    let mut binder = Binder::new(tree);
    let database = binder.bind_compilation_unit();
    let mut diagnostics = tree.diagnostics().to_vec();
    diagnostics.extend(binder.diagnostics.into_vec());
    debug!(
        tables = database.tables.len(),
        enums = database.enums.len(),
        diagnostics = diagnostics.len(),
        "bound database"
    );
    (database, diagnostics)
}

struct Binder<'a> {
    tree: &'a SyntaxTree,
    diagnostics: DiagnosticBag,
}

impl<'a> Binder<'a> {
    fn new(tree: &'a SyntaxTree) -> Self {
        Self {
            tree,
            diagnostics: DiagnosticBag::new(),
        }
    }

    fn bind_compilation_unit(&mut self) -> Database {
        let root = self.tree.root();
        let mut database = Database::new();
        for member in &root.members {
            match member {
                MemberSyntax::ProjectDeclaration(declaration) => {
                    database.project = Some(bind_project(declaration));
                }
                MemberSyntax::TableDeclaration(declaration) => {
                    let table = self.bind_table(declaration);
                    self.insert_table(&mut database, declaration.identifier.span(), table);
                }
                MemberSyntax::EnumDeclaration(declaration) => {
                    let definition = self.bind_enum(declaration);
                    self.insert_enum(&mut database, declaration.identifier.span(), definition);
                }
                MemberSyntax::RelationshipShortForm(declaration) => {
                    bind_relationship_member(
                        declaration.identifier_token.as_ref(),
                        &declaration.constraint,
                        &mut database,
                    );
                }
                MemberSyntax::RelationshipLongForm(declaration) => {
                    bind_relationship_member(
                        declaration.identifier_token.as_ref(),
                        &declaration.constraint,
                        &mut database,
                    );
                }
                MemberSyntax::GlobalStatement(member) => {
                    if let StatementSyntax::NoteDeclaration(note) = &member.statement {
                        if let Some(text) = decode_string_value(&note.value_token) {
                            database.notes.push(text);
                        }
                    }
                }
            }
        }
        database
    }

    fn bind_table(&mut self, declaration: &TableDeclarationMember) -> Table {
        let parts = declaration.identifier.part_texts();
        let mut table = Table::new(parts.last().copied().unwrap_or_default());
        if parts.len() >= 2 {
            table.schema = Some(parts[parts.len() - 2].to_string());
        }
        if parts.len() >= 3 {
            table.database = Some(parts[parts.len() - 3].to_string());
        }
        if let Some(alias) = &declaration.alias {
            if !alias.identifier_token.is_missing() {
                table.alias = Some(alias.identifier_token.text().to_string());
            }
        }
        if let Some(settings) = &declaration.settings {
            for setting in &settings.settings {
                match setting {
                    TableSettingClause::HeaderColor(header_color) => {
                        if !header_color.value_token.is_missing() {
                            table.header_color =
                                Some(header_color.value_token.text().to_string());
                        }
                    }
                    TableSettingClause::Unknown(unknown) => {
                        if !unknown.name_token.is_missing() {
                            UnknownSetting::record(
                                &mut table.unknown_settings,
                                unknown.name_token.text(),
                                decode_setting_value(unknown.value_token.as_ref()),
                            );
                        }
                    }
                }
            }
        }
        let schema = table.schema.clone();
        let table_name = table.name.clone();
        for statement in &declaration.body.statements {
            match statement {
                StatementSyntax::ColumnDeclaration(column_declaration) => {
                    let (column, mut relationships) =
                        bind_column(column_declaration, &schema, &table_name);
                    table.relationships.append(&mut relationships);
                    self.insert_column(
                        &mut table,
                        column_declaration.identifier_token.span(),
                        column,
                    );
                }
                StatementSyntax::NoteDeclaration(note) => {
                    if let Some(text) = decode_string_value(&note.value_token) {
                        table.notes.push(text);
                    }
                }
                StatementSyntax::IndexesDeclaration(indexes) => {
                    for index_statement in &indexes.indexes {
                        match index_statement {
                            StatementSyntax::SingleFieldIndexDeclaration(index) => {
                                table.indexes.push(bind_single_field_index(index));
                            }
                            StatementSyntax::CompositeIndexDeclaration(index) => {
                                table.indexes.push(self.bind_composite_index(index));
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }
        table
    }

    fn bind_composite_index(&self, declaration: &CompositeIndexDeclarationStatement) -> TableIndex {
        let columns = declaration
            .columns
            .iter()
            .map(|column| self.index_column_text(column))
            .collect();
        let mut index = TableIndex::new(columns);
        if let Some(settings) = &declaration.settings {
            apply_index_settings(settings, &mut index);
        }
        index
    }

    /// The source form of a composite-index column, without wrapping
    /// backticks for expression columns.
    fn index_column_text(&self, expression: &ExpressionSyntax) -> String {
        let span = match expression {
            ExpressionSyntax::Backtick(backtick) => backtick.expression.span(),
            _ => expression.span(),
        };
        self.tree.source().slice(span).to_string()
    }

    fn bind_enum(&mut self, declaration: &EnumDeclarationMember) -> EnumDefinition {
        let parts = declaration.identifier.part_texts();
        let mut definition = EnumDefinition::new(parts.last().copied().unwrap_or_default());
        if parts.len() >= 2 {
            definition.schema = Some(parts[parts.len() - 2].to_string());
        }
        for statement in &declaration.body.statements {
            if let StatementSyntax::EnumEntryDeclaration(entry_declaration) = statement {
                let entry = bind_enum_entry(entry_declaration);
                self.insert_enum_entry(
                    &mut definition,
                    entry_declaration.identifier_token.span(),
                    entry,
                );
            }
        }
        definition
    }

    // -- Declaration registries --

    fn insert_table(&mut self, database: &mut Database, span: TextSpan, table: Table) {
        let full_name = table.full_name();
        if full_name.is_empty() {
            database.tables.push(table);
            return;
        }
        match database
            .tables
            .iter_mut()
            .find(|existing| existing.full_name() == full_name)
        {
            Some(existing) => {
                let location = self.tree.source().location(span);
                self.diagnostics.report_table_already_declared(location, &full_name);
                *existing = table;
            }
            None => database.tables.push(table),
        }
    }

    fn insert_column(&mut self, table: &mut Table, span: TextSpan, column: Column) {
        if column.name.is_empty() {
            table.columns.push(column);
            return;
        }
        match table
            .columns
            .iter_mut()
            .find(|existing| existing.name == column.name)
        {
            Some(existing) => {
                let location = self.tree.source().location(span);
                self.diagnostics.report_column_already_declared(location, &column.name);
                *existing = column;
            }
            None => table.columns.push(column),
        }
    }

    fn insert_enum(&mut self, database: &mut Database, span: TextSpan, definition: EnumDefinition) {
        let full_name = definition.full_name();
        if full_name.is_empty() {
            database.enums.push(definition);
            return;
        }
        match database
            .enums
            .iter_mut()
            .find(|existing| existing.full_name() == full_name)
        {
            Some(existing) => {
                let location = self.tree.source().location(span);
                self.diagnostics.report_enum_already_declared(location, &full_name);
                *existing = definition;
            }
            None => database.enums.push(definition),
        }
    }

    fn insert_enum_entry(
        &mut self,
        definition: &mut EnumDefinition,
        span: TextSpan,
        entry: EnumEntry,
    ) {
        if entry.name.is_empty() {
            definition.entries.push(entry);
            return;
        }
        match definition
            .entries
            .iter_mut()
            .find(|existing| existing.name == entry.name)
        {
            Some(existing) => {
                let location = self.tree.source().location(span);
                self.diagnostics
                    .report_enum_entry_already_declared(location, &entry.name);
                *existing = entry;
            }
            None => definition.entries.push(entry),
        }
    }
}

fn bind_project(declaration: &ProjectDeclarationMember) -> Project {
    let name = declaration
        .identifier_token
        .as_ref()
        .map(|token| token.text().to_string());
    let mut project = Project::new(name);
    for setting in &declaration.settings.settings {
        match setting {
            ProjectSettingClause::DatabaseProvider(provider) => {
                project.database_provider = decode_string_value(&provider.value_token);
            }
            ProjectSettingClause::Note(note) => {
                if let Some(text) = decode_string_value(&note.value_token) {
                    project.notes.push(text);
                }
            }
            ProjectSettingClause::Unknown(unknown) => {
                if !unknown.name_token.is_missing() {
                    UnknownSetting::record(
                        &mut project.unknown_settings,
                        unknown.name_token.text(),
                        decode_setting_value(unknown.value_token.as_ref()),
                    );
                }
            }
        }
    }
    project
}

fn bind_column(
    declaration: &ColumnDeclarationStatement,
    schema: &Option<String>,
    table_name: &str,
) -> (Column, Vec<Relationship>) {
    let mut column = Column::new(
        declaration.identifier_token.text(),
        declaration.type_clause.type_text(),
    );
    let mut relationships = Vec::new();
    if let Some(settings) = &declaration.settings {
        for setting in &settings.settings {
            match setting {
                ColumnSettingClause::PrimaryKey(_) | ColumnSettingClause::Pk(_) => {
                    column.is_primary_key = true;
                }
                ColumnSettingClause::Null(_) => column.is_nullable = true,
                ColumnSettingClause::NotNull(_) => column.is_nullable = false,
                ColumnSettingClause::Unique(_) => column.is_unique = true,
                ColumnSettingClause::Increment(_) => column.is_auto_increment = true,
                ColumnSettingClause::Default(default) => {
                    column.default_value = decode_default(&default.expression);
                }
                ColumnSettingClause::Note(note) => {
                    if let Some(text) = decode_string_value(&note.value_token) {
                        column.notes.push(text);
                    }
                }
                ColumnSettingClause::Relationship(relationship) => {
                    // The from endpoint is always the column's own path; the
                    // table header's database part does not qualify columns.
                    let from = ColumnIdentifier::new(
                        schema.clone(),
                        Some(table_name.to_string()),
                        column.name.clone(),
                    );
                    let to =
                        ColumnIdentifier::from_parts(&relationship.constraint.to.part_texts());
                    let kind = relationship_kind(&relationship.constraint.operator_token);
                    relationships.push(Relationship::new(None, from, to, kind));
                }
                ColumnSettingClause::Unknown(unknown) => {
                    if !unknown.name_token.is_missing() {
                        UnknownSetting::record(
                            &mut column.unknown_settings,
                            unknown.name_token.text(),
                            decode_setting_value(unknown.value_token.as_ref()),
                        );
                    }
                }
            }
        }
    }
    (column, relationships)
}

fn bind_single_field_index(declaration: &SingleFieldIndexDeclarationStatement) -> TableIndex {
    let mut index = TableIndex::new(vec![declaration.identifier_token.text().to_string()]);
    if let Some(settings) = &declaration.settings {
        apply_index_settings(settings, &mut index);
    }
    index
}

fn apply_index_settings(settings: &IndexSettingListClause, index: &mut TableIndex) {
    for setting in &settings.settings {
        match setting {
            IndexSettingClause::Pk(_) | IndexSettingClause::PrimaryKey(_) => {
                index.is_primary_key = true;
            }
            IndexSettingClause::Unique(_) => index.is_unique = true,
            IndexSettingClause::Name(name) => {
                index.name = decode_string_value(&name.value_token);
            }
            IndexSettingClause::Note(note) => {
                if let Some(text) = decode_string_value(&note.value_token) {
                    index.notes.push(text);
                }
            }
            IndexSettingClause::Type(index_type) => {
                index.index_type =
                    decode_string_value(&index_type.value_token).map(|text| text.to_lowercase());
            }
            IndexSettingClause::Unknown(unknown) => {
                if !unknown.name_token.is_missing() {
                    UnknownSetting::record(
                        &mut index.unknown_settings,
                        unknown.name_token.text(),
                        decode_setting_value(unknown.value_token.as_ref()),
                    );
                }
            }
        }
    }
}

fn bind_enum_entry(declaration: &EnumEntryDeclarationStatement) -> EnumEntry {
    let mut entry = EnumEntry::new(declaration.identifier_token.text());
    if let Some(settings) = &declaration.settings {
        for setting in &settings.settings {
            match setting {
                EnumEntrySettingClause::Note(note) => {
                    if let Some(text) = decode_string_value(&note.value_token) {
                        entry.notes.push(text);
                    }
                }
                EnumEntrySettingClause::Unknown(unknown) => {
                    if !unknown.name_token.is_missing() {
                        UnknownSetting::record(
                            &mut entry.unknown_settings,
                            unknown.name_token.text(),
                            decode_setting_value(unknown.value_token.as_ref()),
                        );
                    }
                }
            }
        }
    }
    entry
}

fn bind_relationship_member(
    name_token: Option<&SyntaxToken>,
    constraint: &RelationshipConstraintClause,
    database: &mut Database,
) {
    // Without a from path there is no relationship to record; the parser
    // already reported the malformed constraint.
    let Some(from_clause) = &constraint.from else {
        return;
    };
    let name = name_token.map(|token| token.text().to_string());
    let from = ColumnIdentifier::from_parts(&from_clause.part_texts());
    let to = ColumnIdentifier::from_parts(&constraint.to.part_texts());
    let kind = relationship_kind(&constraint.operator_token);
    database
        .relationships
        .push(Relationship::new(name, from, to, kind));
}

fn relationship_kind(operator_token: &SyntaxToken) -> RelationshipKind {
    match operator_token.kind() {
        SyntaxKind::LessToken => RelationshipKind::OneToMany,
        SyntaxKind::GreaterToken => RelationshipKind::ManyToOne,
        SyntaxKind::MinusToken => RelationshipKind::OneToOne,
        SyntaxKind::LessGreaterToken => RelationshipKind::ManyToMany,
        _ => unreachable!("relationship operator token"),
    }
}

/// Decoded `default:` value. `null` and backtick expressions carry none;
/// call expressions were already rejected by the parser.
fn decode_default(expression: &ExpressionSyntax) -> Option<SettingValue> {
    match expression {
        ExpressionSyntax::Literal(literal) => match literal.literal_token.value() {
            Some(TokenValue::Number(number)) => Some(SettingValue::Number(*number)),
            Some(TokenValue::Bool(value)) => Some(SettingValue::Bool(*value)),
            Some(TokenValue::String(text)) => Some(SettingValue::String(text.clone())),
            None => None,
        },
        ExpressionSyntax::Name(name) => {
            if name.identifier_token.is_missing() {
                None
            } else {
                Some(SettingValue::String(name.identifier_token.text().to_string()))
            }
        }
        ExpressionSyntax::Parenthesized(parenthesized) => {
            decode_default(&parenthesized.expression)
        }
        ExpressionSyntax::Backtick(_) | ExpressionSyntax::Call(_) => None,
    }
}

/// Decoded text of a value token: the string content for string tokens,
/// the raw text otherwise, nothing for synthesized placeholders.
fn decode_string_value(token: &SyntaxToken) -> Option<String> {
    if token.is_missing() {
        return None;
    }
    match token.value() {
        Some(TokenValue::String(text)) => Some(text.clone()),
        _ => Some(token.text().to_string()),
    }
}

fn decode_setting_value(token: Option<&SyntaxToken>) -> Option<SettingValue> {
    let token = token?;
    if token.is_missing() {
        return None;
    }
    match token.value() {
        Some(TokenValue::String(text)) => Some(SettingValue::String(text.clone())),
        Some(TokenValue::Number(number)) => Some(SettingValue::Number(*number)),
        Some(TokenValue::Bool(value)) => Some(SettingValue::Bool(*value)),
        None => Some(SettingValue::String(token.text().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use dbml_forge_core::{Database, RelationshipKind, SettingValue};

    use crate::ast::SyntaxTree;
    use crate::diagnostics::Diagnostic;

    use super::bind;

    fn bind_text(text: &str) -> (Database, Vec<Diagnostic>) {
        bind(&SyntaxTree::parse(text))
    }

    fn bind_clean(text: &str) -> Database {
        let (database, diagnostics) = bind_text(text);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics:?}");
        database
    }

    #[test]
    fn empty_enum_binds_to_empty_definition() {
        let database = bind_clean("enum x { }");
        assert!(database.tables.is_empty());
        assert_eq!(database.enums.len(), 1);
        assert_eq!(database.enums[0].name, "x");
        assert!(database.enums[0].entries.is_empty());
    }

    #[test]
    fn table_identifier_parts_assign_right_to_left() {
        let database = bind_clean("Table crm.dbo.users { id int }");
        let table = &database.tables[0];
        assert_eq!(table.database.as_deref(), Some("crm"));
        assert_eq!(table.schema.as_deref(), Some("dbo"));
        assert_eq!(table.name, "users");
        assert_eq!(table.full_name(), "crm.dbo.users");
    }

    #[test]
    fn table_alias_and_header_color() {
        let database = bind_clean("Table users as U [headercolor: #3498DB] { id int }");
        let table = &database.tables[0];
        assert_eq!(table.alias.as_deref(), Some("U"));
        assert_eq!(table.header_color.as_deref(), Some("#3498DB"));
    }

    #[test]
    fn column_flags_and_note() {
        let database = bind_clean(
            "Table users {\n  id int [pk, increment]\n  email text [unique, not null, note: \"hi\"]\n}",
        );
        let table = &database.tables[0];
        let id = table.column("id").unwrap();
        assert!(id.is_primary_key);
        assert!(id.is_auto_increment);
        let email = table.column("email").unwrap();
        assert!(email.is_unique);
        assert!(email.is_required());
        assert_eq!(email.note(), Some("hi"));
    }

    #[test]
    fn note_then_pk_bind_together() {
        let database = bind_clean("Table t { id int [ note: \"hi\", pk ] }");
        let id = database.tables[0].column("id").unwrap();
        assert_eq!(id.note(), Some("hi"));
        assert!(id.is_primary_key);
    }

    #[test]
    fn default_values_decode_by_literal_kind() {
        let database = bind_clean(
            "Table t {\n  a int [default: 42]\n  b bool [default: true]\n  c text [default: 'x']\n  d text [default: abc]\n}",
        );
        let table = &database.tables[0];
        assert_eq!(
            table.column("a").unwrap().default_value,
            Some(SettingValue::Number("42".parse().unwrap()))
        );
        assert_eq!(
            table.column("b").unwrap().default_value,
            Some(SettingValue::Bool(true))
        );
        assert_eq!(
            table.column("c").unwrap().default_value,
            Some(SettingValue::String("x".into()))
        );
        assert_eq!(
            table.column("d").unwrap().default_value,
            Some(SettingValue::String("abc".into()))
        );
    }

    #[test]
    fn null_and_backtick_defaults_store_no_value() {
        let database =
            bind_clean("Table t {\n  a int [default: null]\n  b timestamp [default: `now`]\n}");
        let table = &database.tables[0];
        assert!(table.column("a").unwrap().default_value.is_none());
        assert!(table.column("b").unwrap().default_value.is_none());
    }

    #[test]
    fn unknown_column_setting_is_recorded_with_warning() {
        let (database, diagnostics) = bind_text("Table t { id int [ foo ] }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Unknown column setting 'foo'.");
        let column = database.tables[0].column("id").unwrap();
        let setting = column.unknown_setting("foo").unwrap();
        assert!(setting.value.is_none());
    }

    #[test]
    fn unknown_setting_with_value_records_decoded_value() {
        let (database, diagnostics) = bind_text("Table t { id int [ collate: 'nocase' ] }");
        assert_eq!(diagnostics.len(), 1);
        let column = database.tables[0].column("id").unwrap();
        let setting = column.unknown_setting("collate").unwrap();
        assert_eq!(setting.value.as_ref().unwrap().as_str(), Some("nocase"));
    }

    #[test]
    fn inline_ref_binds_from_owning_column() {
        let database = bind_clean("Table orders { user_id int [ref: > users.id] }");
        let table = &database.tables[0];
        assert_eq!(table.relationships.len(), 1);
        let relationship = &table.relationships[0];
        assert_eq!(relationship.kind, RelationshipKind::ManyToOne);
        assert_eq!(relationship.from.to_string(), "orders.user_id");
        assert_eq!(relationship.to.to_string(), "users.id");
    }

    #[test]
    fn inline_ref_from_excludes_database_part() {
        let database = bind_clean("Table crm.dbo.orders { user_id int [ref: > users.id] }");
        let relationship = &database.tables[0].relationships[0];
        assert_eq!(relationship.from.to_string(), "dbo.orders.user_id");
    }

    #[test]
    fn short_form_relationship_binds_verbatim_endpoints() {
        let database = bind_clean("Ref fk: orders.user_id > users.id");
        assert_eq!(database.relationships.len(), 1);
        let relationship = &database.relationships[0];
        assert_eq!(relationship.name.as_deref(), Some("fk"));
        assert_eq!(relationship.from.to_string(), "orders.user_id");
        assert_eq!(relationship.to.to_string(), "users.id");
        assert_eq!(relationship.kind, RelationshipKind::ManyToOne);
    }

    #[test]
    fn long_form_relationship_binds_operator_kinds() {
        let database = bind_clean("ref { a.b <> c.d }");
        assert_eq!(database.relationships[0].kind, RelationshipKind::ManyToMany);
    }

    #[test]
    fn indexes_bind_with_settings() {
        let database = bind_clean(
            "Table t {\n  id int\n  indexes {\n    id [pk]\n    (first, last) [name: 'full_name', unique, type: BTREE]\n  }\n}",
        );
        let table = &database.tables[0];
        assert_eq!(table.indexes.len(), 2);
        assert!(table.indexes[0].is_primary_key);
        assert!(!table.indexes[0].is_composite());
        let composite = &table.indexes[1];
        assert_eq!(composite.columns, vec!["first".to_string(), "last".to_string()]);
        assert_eq!(composite.name.as_deref(), Some("full_name"));
        assert!(composite.is_unique);
        assert_eq!(composite.index_type.as_deref(), Some("btree"));
    }

    #[test]
    fn backtick_index_column_strips_backticks() {
        let database =
            bind_clean("Table t {\n  email text\n  indexes {\n    (`lower(email)`)\n  }\n}");
        let index = &database.tables[0].indexes[0];
        assert_eq!(index.columns, vec!["lower(email)".to_string()]);
    }

    #[test]
    fn enum_entries_with_notes_and_schema() {
        let database = bind_clean(
            "enum sales.order_status {\n  pending [note: 'awaiting payment']\n  shipped\n}",
        );
        let definition = &database.enums[0];
        assert_eq!(definition.schema.as_deref(), Some("sales"));
        assert_eq!(definition.name, "order_status");
        assert_eq!(definition.entries.len(), 2);
        assert_eq!(
            definition.entry("pending").unwrap().note(),
            Some("awaiting payment")
        );
    }

    #[test]
    fn project_binds_provider_note_and_unknowns() {
        let (database, diagnostics) = bind_text(
            "Project crm {\n  database_type: 'PostgreSQL'\n  note: 'sample'\n  author: 'someone'\n}",
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Unknown project setting 'author'.");
        let project = database.project.unwrap();
        assert_eq!(project.name.as_deref(), Some("crm"));
        assert_eq!(project.database_provider.as_deref(), Some("PostgreSQL"));
        assert_eq!(project.note(), Some("sample"));
        assert_eq!(project.unknown_settings[0].name, "author");
    }

    #[test]
    fn most_recent_project_wins() {
        let database = bind_clean("Project a { }\nProject b { }");
        assert_eq!(database.project.unwrap().name.as_deref(), Some("b"));
    }

    #[test]
    fn duplicate_table_warns_and_replaces() {
        let (database, diagnostics) = bind_text("Table t { id int }\nTable t { name text }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Table 't' already declared.");
        assert_eq!(database.tables.len(), 1);
        assert!(database.tables[0].column("name").is_some());
        assert!(database.tables[0].column("id").is_none());
    }

    #[test]
    fn tables_in_distinct_schemas_are_distinct() {
        let database = bind_clean("Table a.t { id int }\nTable b.t { id int }");
        assert_eq!(database.tables.len(), 2);
    }

    #[test]
    fn duplicate_column_warns_and_replaces() {
        let (database, diagnostics) = bind_text("Table t { id int\n id text }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Column 'id' already declared.");
        let table = &database.tables[0];
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.column("id").unwrap().type_text, "text");
    }

    #[test]
    fn duplicate_enum_entry_warns_and_replaces() {
        let (database, diagnostics) =
            bind_text("enum status { open\n open [note: 'again'] }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message(),
            "Enum entry 'open' already declared."
        );
        let definition = &database.enums[0];
        assert_eq!(definition.entries.len(), 1);
        assert_eq!(definition.entry("open").unwrap().note(), Some("again"));
    }

    #[test]
    fn duplicate_enum_warns() {
        let (database, diagnostics) = bind_text("enum e { a }\nenum e { b }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message(), "Enum 'e' already declared.");
        assert_eq!(database.enums.len(), 1);
        assert!(database.enums[0].entry("b").is_some());
    }

    #[test]
    fn notes_bind_to_their_scopes() {
        let database = bind_clean(
            "note: 'global'\nTable t {\n  note: 'table'\n  id int\n}",
        );
        assert_eq!(database.note(), Some("global"));
        assert_eq!(database.tables[0].note(), Some("table"));
    }

    #[test]
    fn binding_survives_parse_errors() {
        let (database, diagnostics) = bind_text("Table { id int");
        assert!(!diagnostics.is_empty());
        assert_eq!(database.tables.len(), 1);
        assert!(database.tables[0].column("id").is_some());
    }
}
