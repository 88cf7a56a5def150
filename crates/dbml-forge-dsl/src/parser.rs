//! Recursive-descent parser with one-token lookahead and error recovery.
//!
//! A required token that is not present is reported and replaced by a
//! zero-width placeholder of the expected kind, so every production yields a
//! structurally complete node. Every parsing loop checks that its body
//! consumed at least one token and skips the current token otherwise, so
//! parsing terminates on any input.

use std::collections::HashSet;

use tracing::debug;

use crate::ast::{
    BlockStatement, ColumnDeclarationStatement, ColumnIdentifierClause, ColumnSettingClause,
    ColumnSettingListClause, ColumnTypeClause, ColumnTypeIdentifierClause,
    ColumnTypeParenthesizedIdentifierClause, CompilationUnit, CompositeIndexDeclarationStatement,
    DatabaseProviderProjectSettingClause, DefaultColumnSettingClause, EnumDeclarationMember,
    EnumEntryDeclarationStatement, EnumEntrySettingClause, EnumEntrySettingListClause,
    EnumIdentifierClause, ExpressionStatement, ExpressionSyntax, GlobalStatementMember,
    HeaderColorTableSettingClause, IncrementColumnSettingClause, IndexSettingClause,
    IndexSettingListClause, IndexesDeclarationStatement, LiteralExpression, MemberSyntax,
    NameExpression, NameIndexSettingClause, NotNullColumnSettingClause, NoteColumnSettingClause,
    NoteDeclarationStatement, NoteEnumEntrySettingClause, NoteIndexSettingClause,
    NoteProjectSettingClause, NullColumnSettingClause, ParenthesizedExpression,
    PkColumnSettingClause, PkIndexSettingClause, PrimaryKeyColumnSettingClause,
    PrimaryKeyIndexSettingClause, ProjectDeclarationMember, ProjectSettingClause,
    ProjectSettingListClause, RelationshipColumnSettingClause, RelationshipConstraintClause,
    RelationshipLongFormDeclarationMember, RelationshipShortFormDeclarationMember,
    SingleFieldIndexDeclarationStatement, StatementSyntax, SyntaxNode, TableAliasClause,
    TableDeclarationMember, TableIdentifierClause, TableSettingClause, TableSettingListClause,
    TypeIndexSettingClause, UniqueColumnSettingClause, UniqueIndexSettingClause,
    UnknownColumnSettingClause, UnknownEnumEntrySettingClause, UnknownIndexSettingClause,
    UnknownProjectSettingClause, UnknownTableSettingClause,
};
use crate::ast::{BacktickExpression, CallExpression};
use crate::diagnostics::DiagnosticBag;
use crate::text::SourceText;
use crate::token::{SyntaxKind, SyntaxToken, TokenValue};

const ALLOWED_INDEX_TYPES: &[&str] = &["btree", "gin", "gist", "hash"];

pub struct Parser<'a> {
    text: &'a SourceText,
    tokens: Vec<SyntaxToken>,
    position: usize,
    diagnostics: DiagnosticBag,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a SourceText, tokens: Vec<SyntaxToken>) -> Self {
        let mut tokens: Vec<SyntaxToken> = tokens
            .into_iter()
            .filter(|token| token.kind() != SyntaxKind::BadToken)
            .collect();
        if tokens.is_empty() {
            tokens.push(SyntaxToken::missing(SyntaxKind::EndOfFileToken, text.len()));
        }
        Self {
            text,
            tokens,
            position: 0,
            diagnostics: DiagnosticBag::new(),
        }
    }

    pub fn into_diagnostics(self) -> DiagnosticBag {
        self.diagnostics
    }

    pub fn parse_compilation_unit(&mut self) -> CompilationUnit {
        debug!(source_length = self.text.len(), "parsing compilation unit");
        let mut members = Vec::new();
        while self.current().kind() != SyntaxKind::EndOfFileToken {
            let start_position = self.position;
            members.push(self.parse_member());
            if self.position == start_position {
                self.next_token();
            }
        }
        let end_of_file_token = self.match_token(SyntaxKind::EndOfFileToken);
        debug!(
            members = members.len(),
            diagnostics = self.diagnostics.len(),
            "parsed compilation unit"
        );
        CompilationUnit {
            members,
            end_of_file_token,
        }
    }

    // -- Members --

    fn parse_member(&mut self) -> MemberSyntax {
        match self.current().kind() {
            SyntaxKind::ProjectKeyword => {
                MemberSyntax::ProjectDeclaration(self.parse_project_declaration())
            }
            SyntaxKind::TableKeyword => {
                MemberSyntax::TableDeclaration(self.parse_table_declaration())
            }
            SyntaxKind::EnumKeyword => MemberSyntax::EnumDeclaration(self.parse_enum_declaration()),
            SyntaxKind::RefKeyword => self.parse_relationship_declaration(),
            _ => MemberSyntax::GlobalStatement(GlobalStatementMember {
                statement: self.parse_global_statement(),
            }),
        }
    }

    fn parse_project_declaration(&mut self) -> ProjectDeclarationMember {
        let project_keyword = self.match_token(SyntaxKind::ProjectKeyword);
        let identifier_token = if self.current().kind().is_name_token() {
            Some(self.next_token())
        } else {
            None
        };
        let settings = self.parse_project_setting_list();
        ProjectDeclarationMember {
            project_keyword,
            identifier_token,
            settings,
        }
    }

    fn parse_project_setting_list(&mut self) -> ProjectSettingListClause {
        let open_brace_token = self.match_token(SyntaxKind::OpenBraceToken);
        let mut settings = Vec::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            settings.push(self.parse_project_setting());
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_brace_token = self.match_token(SyntaxKind::CloseBraceToken);
        ProjectSettingListClause {
            open_brace_token,
            settings,
            close_brace_token,
        }
    }

    fn parse_project_setting(&mut self) -> ProjectSettingClause {
        match (self.current().kind(), self.peek(1).kind()) {
            (SyntaxKind::DatabaseTypeKeyword, SyntaxKind::ColonToken) => {
                let database_type_keyword = self.next_token();
                let colon_token = self.next_token();
                let value_token = self.match_string_token();
                ProjectSettingClause::DatabaseProvider(DatabaseProviderProjectSettingClause {
                    database_type_keyword,
                    colon_token,
                    value_token,
                })
            }
            (SyntaxKind::NoteKeyword, SyntaxKind::ColonToken) => {
                let note_keyword = self.next_token();
                let colon_token = self.next_token();
                let value_token = self.match_string_token();
                ProjectSettingClause::Note(NoteProjectSettingClause {
                    note_keyword,
                    colon_token,
                    value_token,
                })
            }
            _ => {
                let name_token = self.match_name_token();
                if !name_token.is_missing() {
                    let location = self.text.location(name_token.span());
                    self.diagnostics
                        .report_unknown_project_setting(location, name_token.text());
                }
                let (colon_token, value_token) = self.parse_optional_setting_value();
                ProjectSettingClause::Unknown(UnknownProjectSettingClause {
                    name_token,
                    colon_token,
                    value_token,
                })
            }
        }
    }

    fn parse_table_declaration(&mut self) -> TableDeclarationMember {
        let table_keyword = self.match_token(SyntaxKind::TableKeyword);
        let (parts, dot_tokens) = self.parse_dotted_name();
        let identifier = TableIdentifierClause { parts, dot_tokens };
        let alias = if self.current().kind() == SyntaxKind::AsKeyword {
            let as_keyword = self.next_token();
            let identifier_token = self.match_name_token();
            Some(TableAliasClause {
                as_keyword,
                identifier_token,
            })
        } else {
            None
        };
        let settings = if self.current().kind() == SyntaxKind::OpenBracketToken {
            Some(self.parse_table_setting_list())
        } else {
            None
        };
        let body = self.parse_block_statement(Self::parse_table_statement);
        TableDeclarationMember {
            table_keyword,
            identifier,
            alias,
            settings,
            body,
        }
    }

    fn parse_table_setting_list(&mut self) -> TableSettingListClause {
        let open_bracket_token = self.match_token(SyntaxKind::OpenBracketToken);
        let mut settings = Vec::new();
        let mut separator_tokens = Vec::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseBracketToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            settings.push(self.parse_table_setting());
            if self.current().kind() == SyntaxKind::CommaToken {
                separator_tokens.push(self.next_token());
            }
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_bracket_token = self.match_token(SyntaxKind::CloseBracketToken);
        TableSettingListClause {
            open_bracket_token,
            settings,
            separator_tokens,
            close_bracket_token,
        }
    }

    fn parse_table_setting(&mut self) -> TableSettingClause {
        if self.current().kind() == SyntaxKind::HeaderColorKeyword {
            let headercolor_keyword = self.next_token();
            let colon_token = self.match_token(SyntaxKind::ColonToken);
            let value_token = self.match_token(SyntaxKind::HexTripletToken);
            return TableSettingClause::HeaderColor(HeaderColorTableSettingClause {
                headercolor_keyword,
                colon_token,
                value_token,
            });
        }
        let name_token = self.match_name_token();
        if !name_token.is_missing() {
            let location = self.text.location(name_token.span());
            self.diagnostics
                .report_unknown_table_setting(location, name_token.text());
        }
        let (colon_token, value_token) = self.parse_optional_setting_value();
        TableSettingClause::Unknown(UnknownTableSettingClause {
            name_token,
            colon_token,
            value_token,
        })
    }

    fn parse_enum_declaration(&mut self) -> EnumDeclarationMember {
        let enum_keyword = self.match_token(SyntaxKind::EnumKeyword);
        let (parts, dot_tokens) = self.parse_dotted_name();
        let identifier = EnumIdentifierClause { parts, dot_tokens };
        let body = self.parse_block_statement(Self::parse_enum_statement);
        EnumDeclarationMember {
            enum_keyword,
            identifier,
            body,
        }
    }

    fn parse_relationship_declaration(&mut self) -> MemberSyntax {
        let ref_keyword = self.match_token(SyntaxKind::RefKeyword);
        let identifier_token = if self.current().kind().is_name_token() {
            Some(self.next_token())
        } else {
            None
        };
        if self.current().kind() == SyntaxKind::OpenBraceToken {
            let open_brace_token = self.next_token();
            let constraint = self.parse_relationship_constraint_clause();
            let close_brace_token = self.match_token(SyntaxKind::CloseBraceToken);
            MemberSyntax::RelationshipLongForm(RelationshipLongFormDeclarationMember {
                ref_keyword,
                identifier_token,
                open_brace_token,
                constraint,
                close_brace_token,
            })
        } else {
            let colon_token = self.match_token(SyntaxKind::ColonToken);
            let constraint = self.parse_relationship_constraint_clause();
            MemberSyntax::RelationshipShortForm(RelationshipShortFormDeclarationMember {
                ref_keyword,
                identifier_token,
                colon_token,
                constraint,
            })
        }
    }

    fn parse_relationship_constraint_clause(&mut self) -> RelationshipConstraintClause {
        let from = if self.current().kind().is_name_token() {
            Some(self.parse_column_identifier_clause())
        } else {
            None
        };
        let operator_token = self.match_relationship_operator();
        let to = self.parse_column_identifier_clause();
        RelationshipConstraintClause {
            from,
            operator_token,
            to,
        }
    }

    fn match_relationship_operator(&mut self) -> SyntaxToken {
        match self.current().kind() {
            SyntaxKind::LessToken
            | SyntaxKind::GreaterToken
            | SyntaxKind::MinusToken
            | SyntaxKind::LessGreaterToken => self.next_token(),
            _ => self.match_token(SyntaxKind::LessToken),
        }
    }

    fn parse_column_identifier_clause(&mut self) -> ColumnIdentifierClause {
        let (parts, dot_tokens) = self.parse_dotted_name();
        ColumnIdentifierClause { parts, dot_tokens }
    }

    fn parse_dotted_name(&mut self) -> (Vec<SyntaxToken>, Vec<SyntaxToken>) {
        let mut parts = vec![self.match_name_token()];
        let mut dot_tokens = Vec::new();
        while self.current().kind() == SyntaxKind::DotToken {
            dot_tokens.push(self.next_token());
            parts.push(self.match_name_token());
        }
        (parts, dot_tokens)
    }

    // -- Statements --

    fn parse_block_statement(
        &mut self,
        parse_statement: fn(&mut Self) -> StatementSyntax,
    ) -> BlockStatement {
        let open_brace_token = self.match_token(SyntaxKind::OpenBraceToken);
        let mut statements = Vec::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            statements.push(parse_statement(self));
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_brace_token = self.match_token(SyntaxKind::CloseBraceToken);
        BlockStatement {
            open_brace_token,
            statements,
            close_brace_token,
        }
    }

    fn parse_global_statement(&mut self) -> StatementSyntax {
        match self.current().kind() {
            SyntaxKind::OpenBraceToken => {
                StatementSyntax::Block(self.parse_block_statement(Self::parse_global_statement))
            }
            SyntaxKind::NoteKeyword if self.peek(1).kind() == SyntaxKind::ColonToken => {
                StatementSyntax::NoteDeclaration(self.parse_note_declaration())
            }
            SyntaxKind::IndexesKeyword => {
                StatementSyntax::IndexesDeclaration(self.parse_indexes_declaration())
            }
            _ => StatementSyntax::Expression(ExpressionStatement {
                expression: self.parse_expression(),
            }),
        }
    }

    fn parse_table_statement(&mut self) -> StatementSyntax {
        match self.current().kind() {
            SyntaxKind::OpenBraceToken => {
                StatementSyntax::Block(self.parse_block_statement(Self::parse_table_statement))
            }
            SyntaxKind::NoteKeyword if self.peek(1).kind() == SyntaxKind::ColonToken => {
                StatementSyntax::NoteDeclaration(self.parse_note_declaration())
            }
            SyntaxKind::IndexesKeyword => {
                StatementSyntax::IndexesDeclaration(self.parse_indexes_declaration())
            }
            _ => StatementSyntax::ColumnDeclaration(self.parse_column_declaration()),
        }
    }

    fn parse_enum_statement(&mut self) -> StatementSyntax {
        match self.current().kind() {
            SyntaxKind::OpenBraceToken => {
                StatementSyntax::Block(self.parse_block_statement(Self::parse_enum_statement))
            }
            SyntaxKind::NoteKeyword if self.peek(1).kind() == SyntaxKind::ColonToken => {
                StatementSyntax::NoteDeclaration(self.parse_note_declaration())
            }
            _ => StatementSyntax::EnumEntryDeclaration(self.parse_enum_entry_declaration()),
        }
    }

    fn parse_note_declaration(&mut self) -> NoteDeclarationStatement {
        let note_keyword = self.match_token(SyntaxKind::NoteKeyword);
        let colon_token = self.match_token(SyntaxKind::ColonToken);
        let value_token = self.match_string_token();
        NoteDeclarationStatement {
            note_keyword,
            colon_token,
            value_token,
        }
    }

    fn parse_column_declaration(&mut self) -> ColumnDeclarationStatement {
        let identifier_token = self.match_name_token();
        let type_clause = self.parse_column_type_clause();
        let settings = if self.current().kind() == SyntaxKind::OpenBracketToken {
            Some(self.parse_column_setting_list())
        } else {
            None
        };
        ColumnDeclarationStatement {
            identifier_token,
            type_clause,
            settings,
        }
    }

    fn parse_column_type_clause(&mut self) -> ColumnTypeClause {
        let identifier_token = self.match_name_token();
        if self.current().kind() != SyntaxKind::OpenParenthesisToken {
            return ColumnTypeClause::Identifier(ColumnTypeIdentifierClause { identifier_token });
        }
        let open_parenthesis_token = self.next_token();
        let mut argument_tokens = Vec::new();
        let mut separator_tokens = Vec::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseParenthesisToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            let kind = self.current().kind();
            if kind.is_name_token() || kind == SyntaxKind::NumberToken {
                argument_tokens.push(self.next_token());
            } else {
                argument_tokens.push(self.match_token(SyntaxKind::IdentifierToken));
            }
            if self.current().kind() == SyntaxKind::CommaToken {
                separator_tokens.push(self.next_token());
            }
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_parenthesis_token = self.match_token(SyntaxKind::CloseParenthesisToken);
        ColumnTypeClause::Parenthesized(ColumnTypeParenthesizedIdentifierClause {
            identifier_token,
            open_parenthesis_token,
            argument_tokens,
            separator_tokens,
            close_parenthesis_token,
        })
    }

    fn parse_indexes_declaration(&mut self) -> IndexesDeclarationStatement {
        let indexes_keyword = self.match_token(SyntaxKind::IndexesKeyword);
        let open_brace_token = self.match_token(SyntaxKind::OpenBraceToken);
        let mut indexes = Vec::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            indexes.push(self.parse_index_declaration());
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_brace_token = self.match_token(SyntaxKind::CloseBraceToken);
        IndexesDeclarationStatement {
            indexes_keyword,
            open_brace_token,
            indexes,
            close_brace_token,
        }
    }

    fn parse_index_declaration(&mut self) -> StatementSyntax {
        if self.current().kind() == SyntaxKind::OpenParenthesisToken {
            StatementSyntax::CompositeIndexDeclaration(self.parse_composite_index_declaration())
        } else {
            StatementSyntax::SingleFieldIndexDeclaration(
                self.parse_single_field_index_declaration(),
            )
        }
    }

    fn parse_single_field_index_declaration(&mut self) -> SingleFieldIndexDeclarationStatement {
        let identifier_token = self.match_name_token();
        let settings = if self.current().kind() == SyntaxKind::OpenBracketToken {
            Some(self.parse_index_setting_list())
        } else {
            None
        };
        SingleFieldIndexDeclarationStatement {
            identifier_token,
            settings,
        }
    }

    fn parse_composite_index_declaration(&mut self) -> CompositeIndexDeclarationStatement {
        let open_parenthesis_token = self.match_token(SyntaxKind::OpenParenthesisToken);
        let mut columns = Vec::new();
        let mut separator_tokens = Vec::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseParenthesisToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            columns.push(self.parse_expression());
            if self.current().kind() == SyntaxKind::CommaToken {
                separator_tokens.push(self.next_token());
            }
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_parenthesis_token = self.match_token(SyntaxKind::CloseParenthesisToken);
        let settings = if self.current().kind() == SyntaxKind::OpenBracketToken {
            Some(self.parse_index_setting_list())
        } else {
            None
        };
        CompositeIndexDeclarationStatement {
            open_parenthesis_token,
            columns,
            separator_tokens,
            close_parenthesis_token,
            settings,
        }
    }

    fn parse_enum_entry_declaration(&mut self) -> EnumEntryDeclarationStatement {
        let identifier_token = self.match_name_token();
        let settings = if self.current().kind() == SyntaxKind::OpenBracketToken {
            Some(self.parse_enum_entry_setting_list())
        } else {
            None
        };
        EnumEntryDeclarationStatement {
            identifier_token,
            settings,
        }
    }

    // -- Setting lists --

    fn parse_column_setting_list(&mut self) -> ColumnSettingListClause {
        let open_bracket_token = self.match_token(SyntaxKind::OpenBracketToken);
        let mut settings: Vec<ColumnSettingClause> = Vec::new();
        let mut separator_tokens = Vec::new();
        let mut seen = HashSet::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseBracketToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            let setting = self.parse_column_setting();
            let name = setting.name().to_string();
            if !name.is_empty() && !seen.insert(name.clone()) {
                let location = self.text.location(setting.span());
                self.diagnostics.report_duplicate_column_setting(location, &name);
            }
            settings.push(setting);
            if self.current().kind() == SyntaxKind::CommaToken {
                separator_tokens.push(self.next_token());
            }
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_bracket_token = self.match_token(SyntaxKind::CloseBracketToken);
        ColumnSettingListClause {
            open_bracket_token,
            settings,
            separator_tokens,
            close_bracket_token,
        }
    }

    fn parse_column_setting(&mut self) -> ColumnSettingClause {
        match self.current().kind() {
            SyntaxKind::PrimaryKeyword => {
                let primary_keyword = self.next_token();
                let key_keyword = self.match_token(SyntaxKind::KeyKeyword);
                ColumnSettingClause::PrimaryKey(PrimaryKeyColumnSettingClause {
                    primary_keyword,
                    key_keyword,
                })
            }
            SyntaxKind::PkKeyword => ColumnSettingClause::Pk(PkColumnSettingClause {
                pk_keyword: self.next_token(),
            }),
            SyntaxKind::NullKeyword => ColumnSettingClause::Null(NullColumnSettingClause {
                null_keyword: self.next_token(),
            }),
            SyntaxKind::NotKeyword => {
                let not_keyword = self.next_token();
                let null_keyword = self.match_token(SyntaxKind::NullKeyword);
                ColumnSettingClause::NotNull(NotNullColumnSettingClause {
                    not_keyword,
                    null_keyword,
                })
            }
            SyntaxKind::UniqueKeyword => ColumnSettingClause::Unique(UniqueColumnSettingClause {
                unique_keyword: self.next_token(),
            }),
            SyntaxKind::IncrementKeyword => {
                ColumnSettingClause::Increment(IncrementColumnSettingClause {
                    increment_keyword: self.next_token(),
                })
            }
            SyntaxKind::DefaultKeyword => self.parse_default_column_setting(),
            SyntaxKind::NoteKeyword => {
                let note_keyword = self.next_token();
                let colon_token = self.match_token(SyntaxKind::ColonToken);
                let value_token = self.match_string_token();
                ColumnSettingClause::Note(NoteColumnSettingClause {
                    note_keyword,
                    colon_token,
                    value_token,
                })
            }
            SyntaxKind::RefKeyword => {
                let ref_keyword = self.next_token();
                let colon_token = self.match_token(SyntaxKind::ColonToken);
                let constraint = self.parse_relationship_constraint_clause();
                ColumnSettingClause::Relationship(RelationshipColumnSettingClause {
                    ref_keyword,
                    colon_token,
                    constraint,
                })
            }
            _ => {
                let name_token = self.match_name_token();
                if !name_token.is_missing() {
                    let location = self.text.location(name_token.span());
                    self.diagnostics
                        .report_unknown_column_setting(location, name_token.text());
                }
                let (colon_token, value_token) = self.parse_optional_setting_value();
                ColumnSettingClause::Unknown(UnknownColumnSettingClause {
                    name_token,
                    colon_token,
                    value_token,
                })
            }
        }
    }

    fn parse_default_column_setting(&mut self) -> ColumnSettingClause {
        let default_keyword = self.match_token(SyntaxKind::DefaultKeyword);
        let colon_token = self.match_token(SyntaxKind::ColonToken);
        let expression = self.parse_expression();
        if expression.kind() == SyntaxKind::CallExpression {
            let location = self.text.location(expression.span());
            self.diagnostics
                .report_disallowed_default_expression(location, expression.kind());
        }
        ColumnSettingClause::Default(DefaultColumnSettingClause {
            default_keyword,
            colon_token,
            expression,
        })
    }

    fn parse_index_setting_list(&mut self) -> IndexSettingListClause {
        let open_bracket_token = self.match_token(SyntaxKind::OpenBracketToken);
        let mut settings: Vec<IndexSettingClause> = Vec::new();
        let mut separator_tokens = Vec::new();
        let mut seen = HashSet::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseBracketToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            let setting = self.parse_index_setting();
            let name = setting.name().to_string();
            if !name.is_empty() && !seen.insert(name.clone()) {
                let location = self.text.location(setting.span());
                self.diagnostics.report_duplicate_index_setting(location, &name);
            }
            settings.push(setting);
            if self.current().kind() == SyntaxKind::CommaToken {
                separator_tokens.push(self.next_token());
            }
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_bracket_token = self.match_token(SyntaxKind::CloseBracketToken);
        IndexSettingListClause {
            open_bracket_token,
            settings,
            separator_tokens,
            close_bracket_token,
        }
    }

    fn parse_index_setting(&mut self) -> IndexSettingClause {
        match (self.current().kind(), self.peek(1).kind()) {
            (SyntaxKind::PkKeyword, _) => IndexSettingClause::Pk(PkIndexSettingClause {
                pk_keyword: self.next_token(),
            }),
            (SyntaxKind::PrimaryKeyword, _) => {
                let primary_keyword = self.next_token();
                let key_keyword = self.match_token(SyntaxKind::KeyKeyword);
                IndexSettingClause::PrimaryKey(PrimaryKeyIndexSettingClause {
                    primary_keyword,
                    key_keyword,
                })
            }
            (SyntaxKind::UniqueKeyword, _) => {
                IndexSettingClause::Unique(UniqueIndexSettingClause {
                    unique_keyword: self.next_token(),
                })
            }
            (SyntaxKind::NameKeyword, SyntaxKind::ColonToken) => {
                let name_keyword = self.next_token();
                let colon_token = self.next_token();
                let value_token = self.match_setting_value_token();
                IndexSettingClause::Name(NameIndexSettingClause {
                    name_keyword,
                    colon_token,
                    value_token,
                })
            }
            (SyntaxKind::NoteKeyword, SyntaxKind::ColonToken) => {
                let note_keyword = self.next_token();
                let colon_token = self.next_token();
                let value_token = self.match_setting_value_token();
                IndexSettingClause::Note(NoteIndexSettingClause {
                    note_keyword,
                    colon_token,
                    value_token,
                })
            }
            (SyntaxKind::TypeKeyword, SyntaxKind::ColonToken) => {
                let type_keyword = self.next_token();
                let colon_token = self.next_token();
                let value_token = self.match_setting_value_token();
                self.check_index_type(&value_token);
                IndexSettingClause::Type(TypeIndexSettingClause {
                    type_keyword,
                    colon_token,
                    value_token,
                })
            }
            _ => {
                let name_token = self.match_name_token();
                if !name_token.is_missing() {
                    let location = self.text.location(name_token.span());
                    self.diagnostics
                        .report_unknown_index_setting(location, name_token.text());
                }
                let (colon_token, value_token) = self.parse_optional_setting_value();
                IndexSettingClause::Unknown(UnknownIndexSettingClause {
                    name_token,
                    colon_token,
                    value_token,
                })
            }
        }
    }

    fn check_index_type(&mut self, value_token: &SyntaxToken) {
        if value_token.is_missing() {
            return;
        }
        let type_text = match value_token.value() {
            Some(TokenValue::String(text)) => text.clone(),
            _ => value_token.text().to_string(),
        };
        let allowed = ALLOWED_INDEX_TYPES
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(&type_text));
        if !allowed {
            let location = self.text.location(value_token.span());
            self.diagnostics
                .report_unknown_index_setting_type(location, &type_text, ALLOWED_INDEX_TYPES);
        }
    }

    fn parse_enum_entry_setting_list(&mut self) -> EnumEntrySettingListClause {
        let open_bracket_token = self.match_token(SyntaxKind::OpenBracketToken);
        let mut settings: Vec<EnumEntrySettingClause> = Vec::new();
        let mut separator_tokens = Vec::new();
        let mut seen = HashSet::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseBracketToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            let setting = self.parse_enum_entry_setting();
            let name = setting.name().to_string();
            if !name.is_empty() && !seen.insert(name.clone()) {
                let location = self.text.location(setting.span());
                self.diagnostics
                    .report_duplicate_enum_entry_setting(location, &name);
            }
            settings.push(setting);
            if self.current().kind() == SyntaxKind::CommaToken {
                separator_tokens.push(self.next_token());
            }
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_bracket_token = self.match_token(SyntaxKind::CloseBracketToken);
        EnumEntrySettingListClause {
            open_bracket_token,
            settings,
            separator_tokens,
            close_bracket_token,
        }
    }

    fn parse_enum_entry_setting(&mut self) -> EnumEntrySettingClause {
        if self.current().kind() == SyntaxKind::NoteKeyword
            && self.peek(1).kind() == SyntaxKind::ColonToken
        {
            let note_keyword = self.next_token();
            let colon_token = self.next_token();
            let value_token = self.match_string_token();
            return EnumEntrySettingClause::Note(NoteEnumEntrySettingClause {
                note_keyword,
                colon_token,
                value_token,
            });
        }
        let name_token = self.match_name_token();
        if !name_token.is_missing() {
            let location = self.text.location(name_token.span());
            self.diagnostics
                .report_unknown_enum_entry_setting(location, name_token.text());
        }
        let (colon_token, value_token) = self.parse_optional_setting_value();
        EnumEntrySettingClause::Unknown(UnknownEnumEntrySettingClause {
            name_token,
            colon_token,
            value_token,
        })
    }

    /// `: value` after an unknown setting name, absent for bare settings.
    fn parse_optional_setting_value(&mut self) -> (Option<SyntaxToken>, Option<SyntaxToken>) {
        if self.current().kind() != SyntaxKind::ColonToken {
            return (None, None);
        }
        let colon_token = self.next_token();
        let value_token = self.match_setting_value_token();
        (Some(colon_token), Some(value_token))
    }

    // -- Expressions --

    fn parse_expression(&mut self) -> ExpressionSyntax {
        match self.current().kind() {
            SyntaxKind::OpenParenthesisToken => {
                let open_parenthesis_token = self.next_token();
                let expression = Box::new(self.parse_expression());
                let close_parenthesis_token = self.match_token(SyntaxKind::CloseParenthesisToken);
                ExpressionSyntax::Parenthesized(ParenthesizedExpression {
                    open_parenthesis_token,
                    expression,
                    close_parenthesis_token,
                })
            }
            SyntaxKind::BacktickToken => {
                let open_backtick_token = self.next_token();
                let expression = Box::new(self.parse_expression());
                let close_backtick_token = self.match_token(SyntaxKind::BacktickToken);
                ExpressionSyntax::Backtick(BacktickExpression {
                    open_backtick_token,
                    expression,
                    close_backtick_token,
                })
            }
            SyntaxKind::NumberToken
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword => ExpressionSyntax::Literal(LiteralExpression {
                literal_token: self.next_token(),
            }),
            kind if kind.is_string_token() => ExpressionSyntax::Literal(LiteralExpression {
                literal_token: self.next_token(),
            }),
            SyntaxKind::IdentifierToken
                if self.peek(1).kind() == SyntaxKind::OpenParenthesisToken =>
            {
                ExpressionSyntax::Call(self.parse_call_expression())
            }
            kind if kind.is_name_token() => ExpressionSyntax::Name(NameExpression {
                identifier_token: self.next_token(),
            }),
            _ => ExpressionSyntax::Name(NameExpression {
                identifier_token: self.match_token(SyntaxKind::IdentifierToken),
            }),
        }
    }

    fn parse_call_expression(&mut self) -> CallExpression {
        let identifier_token = self.match_token(SyntaxKind::IdentifierToken);
        let open_parenthesis_token = self.match_token(SyntaxKind::OpenParenthesisToken);
        let mut arguments = Vec::new();
        let mut separator_tokens = Vec::new();
        while !matches!(
            self.current().kind(),
            SyntaxKind::CloseParenthesisToken | SyntaxKind::EndOfFileToken
        ) {
            let start_position = self.position;
            arguments.push(self.parse_expression());
            if self.current().kind() == SyntaxKind::CommaToken {
                separator_tokens.push(self.next_token());
            }
            if self.position == start_position {
                self.next_token();
            }
        }
        let close_parenthesis_token = self.match_token(SyntaxKind::CloseParenthesisToken);
        CallExpression {
            identifier_token,
            open_parenthesis_token,
            arguments,
            separator_tokens,
            close_parenthesis_token,
        }
    }

    // -- Token access --

    fn peek(&self, offset: usize) -> &SyntaxToken {
        let index = self.position + offset;
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    fn current(&self) -> &SyntaxToken {
        self.peek(0)
    }

    fn next_token(&mut self) -> SyntaxToken {
        let token = self.current().clone();
        self.position += 1;
        token
    }

    /// Consumes the current token when it has the expected kind; otherwise
    /// reports an unexpected-token error and synthesizes a zero-width
    /// placeholder of the expected kind without consuming anything.
    fn match_token(&mut self, kind: SyntaxKind) -> SyntaxToken {
        if self.current().kind() == kind {
            return self.next_token();
        }
        let (actual, position, span) = {
            let current = self.current();
            (current.kind(), current.position(), current.span())
        };
        let location = self.text.location(span);
        self.diagnostics.report_unexpected_token(location, actual, kind);
        SyntaxToken::missing(kind, position)
    }

    /// An identifier or keyword token; declarations accept keywords as names.
    fn match_name_token(&mut self) -> SyntaxToken {
        if self.current().kind().is_name_token() {
            self.next_token()
        } else {
            self.match_token(SyntaxKind::IdentifierToken)
        }
    }

    fn match_string_token(&mut self) -> SyntaxToken {
        if self.current().kind().is_string_token() {
            self.next_token()
        } else {
            self.match_token(SyntaxKind::QuotationMarksStringToken)
        }
    }

    fn match_setting_value_token(&mut self) -> SyntaxToken {
        let kind = self.current().kind();
        if kind.is_name_token()
            || kind.is_string_token()
            || matches!(kind, SyntaxKind::NumberToken | SyntaxKind::HexTripletToken)
        {
            self.next_token()
        } else {
            self.match_token(SyntaxKind::IdentifierToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        ColumnSettingClause, ColumnTypeClause, ExpressionSyntax, MemberSyntax, StatementSyntax,
        SyntaxNode, SyntaxTree,
    };
    use crate::diagnostics::Severity;
    use crate::token::SyntaxKind;

    fn parse(text: &str) -> SyntaxTree {
        SyntaxTree::parse(text)
    }

    fn single_table(tree: &SyntaxTree) -> &crate::ast::TableDeclarationMember {
        assert_eq!(tree.root().members.len(), 1);
        match &tree.root().members[0] {
            MemberSyntax::TableDeclaration(table) => table,
            other => panic!("not a table declaration: {}", other.kind()),
        }
    }

    #[test]
    fn table_with_one_column() {
        let tree = parse("Table t { id int }");
        assert!(tree.diagnostics().is_empty());
        let table = single_table(&tree);
        assert_eq!(table.identifier.part_texts(), vec!["t"]);
        assert_eq!(table.body.statements.len(), 1);
        match &table.body.statements[0] {
            StatementSyntax::ColumnDeclaration(column) => {
                assert_eq!(column.identifier_token.text(), "id");
                assert_eq!(column.type_clause.type_text(), "int");
                assert!(column.settings.is_none());
            }
            other => panic!("not a column declaration: {}", other.kind()),
        }
    }

    #[test]
    fn table_name_may_be_qualified_and_aliased() {
        let tree = parse("Table db.app.users as U { id int }");
        assert!(tree.diagnostics().is_empty());
        let table = single_table(&tree);
        assert_eq!(table.identifier.part_texts(), vec!["db", "app", "users"]);
        let alias = table.alias.as_ref().unwrap();
        assert_eq!(alias.identifier_token.text(), "U");
    }

    #[test]
    fn keywords_are_allowed_as_name_parts() {
        let tree = parse("Table primary.key { note int }");
        assert!(tree.diagnostics().is_empty());
        let table = single_table(&tree);
        assert_eq!(table.identifier.part_texts(), vec!["primary", "key"]);
        // A column named `note` is a column, not a note declaration,
        // because no colon follows.
        match &table.body.statements[0] {
            StatementSyntax::ColumnDeclaration(column) => {
                assert_eq!(column.identifier_token.text(), "note");
            }
            other => panic!("not a column declaration: {}", other.kind()),
        }
    }

    #[test]
    fn parenthesized_column_type() {
        let tree = parse("Table t { price decimal(10, 2) }");
        assert!(tree.diagnostics().is_empty());
        let table = single_table(&tree);
        match &table.body.statements[0] {
            StatementSyntax::ColumnDeclaration(column) => {
                assert!(matches!(column.type_clause, ColumnTypeClause::Parenthesized(_)));
                assert_eq!(column.type_clause.type_text(), "decimal(10, 2)");
            }
            other => panic!("not a column declaration: {}", other.kind()),
        }
    }

    #[test]
    fn missing_table_name_synthesizes_placeholder() {
        let tree = parse("Table { }");
        let table = single_table(&tree);
        assert!(table.identifier.parts[0].is_missing());
        assert_eq!(tree.diagnostics().len(), 1);
        assert_eq!(
            tree.diagnostics()[0].message(),
            "Unexpected token <OpenBraceToken>, expected <IdentifierToken>."
        );
    }

    #[test]
    fn unknown_column_setting_warns_once() {
        let tree = parse("Table t { id int [ foo ] }");
        assert_eq!(tree.diagnostics().len(), 1);
        let diagnostic = &tree.diagnostics()[0];
        assert_eq!(diagnostic.severity(), Severity::Warning);
        assert_eq!(diagnostic.message(), "Unknown column setting 'foo'.");
    }

    #[test]
    fn duplicate_column_setting_warns() {
        let tree = parse("Table t { id int [ pk, pk ] }");
        assert_eq!(tree.diagnostics().len(), 1);
        assert_eq!(
            tree.diagnostics()[0].message(),
            "Column setting 'pk' already declared."
        );
    }

    #[test]
    fn recognized_column_settings_parse_clean() {
        let tree = parse(
            "Table t { id int [ pk, unique, increment, not null, note: 'key', default: 0 ] }",
        );
        assert!(tree.diagnostics().is_empty());
        let table = single_table(&tree);
        match &table.body.statements[0] {
            StatementSyntax::ColumnDeclaration(column) => {
                let settings = column.settings.as_ref().unwrap();
                let names: Vec<&str> =
                    settings.settings.iter().map(|setting| setting.name()).collect();
                assert_eq!(
                    names,
                    vec!["pk", "unique", "increment", "not null", "note", "default"]
                );
            }
            other => panic!("not a column declaration: {}", other.kind()),
        }
    }

    #[test]
    fn default_call_expression_is_disallowed() {
        let tree = parse("Table t { ts timestamp [ default: now() ] }");
        assert_eq!(tree.diagnostics().len(), 1);
        let diagnostic = &tree.diagnostics()[0];
        assert!(diagnostic.is_error());
        assert_eq!(
            diagnostic.message(),
            "Disallowed 'default' column setting value expression 'CallExpression'."
        );
        // The expression is still recorded in the tree.
        let table = single_table(&tree);
        match &table.body.statements[0] {
            StatementSyntax::ColumnDeclaration(column) => {
                let settings = column.settings.as_ref().unwrap();
                match &settings.settings[0] {
                    ColumnSettingClause::Default(default) => {
                        assert!(matches!(default.expression, ExpressionSyntax::Call(_)));
                    }
                    other => panic!("not a default setting: {}", other.kind()),
                }
            }
            other => panic!("not a column declaration: {}", other.kind()),
        }
    }

    #[test]
    fn backtick_default_parses() {
        let tree = parse("Table t { ts timestamp [ default: `now` ] }");
        assert!(tree.diagnostics().is_empty());
    }

    #[test]
    fn inline_ref_setting() {
        let tree = parse("Table t { user_id int [ ref: > users.id ] }");
        assert!(tree.diagnostics().is_empty());
        let table = single_table(&tree);
        match &table.body.statements[0] {
            StatementSyntax::ColumnDeclaration(column) => {
                let settings = column.settings.as_ref().unwrap();
                match &settings.settings[0] {
                    ColumnSettingClause::Relationship(relationship) => {
                        assert!(relationship.constraint.from.is_none());
                        assert_eq!(
                            relationship.constraint.operator_token.kind(),
                            SyntaxKind::GreaterToken
                        );
                        assert_eq!(
                            relationship.constraint.to.part_texts(),
                            vec!["users", "id"]
                        );
                    }
                    other => panic!("not a ref setting: {}", other.kind()),
                }
            }
            other => panic!("not a column declaration: {}", other.kind()),
        }
    }

    #[test]
    fn indexes_block_with_single_and_composite_entries() {
        let tree = parse(
            "Table t {\n  indexes {\n    id [pk]\n    (first, last) [name: 'full_name', unique]\n  }\n}",
        );
        assert!(tree.diagnostics().is_empty());
        let table = single_table(&tree);
        match &table.body.statements[0] {
            StatementSyntax::IndexesDeclaration(indexes) => {
                assert_eq!(indexes.indexes.len(), 2);
                assert_eq!(
                    indexes.indexes[0].kind(),
                    SyntaxKind::SingleFieldIndexDeclarationStatement
                );
                assert_eq!(
                    indexes.indexes[1].kind(),
                    SyntaxKind::CompositeIndexDeclarationStatement
                );
            }
            other => panic!("not an indexes declaration: {}", other.kind()),
        }
    }

    #[test]
    fn unknown_index_type_warns_with_allowed_list() {
        let tree = parse("Table t {\n  indexes {\n    id [type: cluster]\n  }\n}");
        assert_eq!(tree.diagnostics().len(), 1);
        assert_eq!(
            tree.diagnostics()[0].message(),
            "Unknown index setting type 'cluster'. Allowed index types [btree|gin|gist|hash]."
        );
    }

    #[test]
    fn known_index_type_is_clean() {
        let tree = parse("Table t {\n  indexes {\n    id [type: btree]\n  }\n}");
        assert!(tree.diagnostics().is_empty());
    }

    #[test]
    fn enum_declaration_shape() {
        let tree = parse("enum status { active\n inactive [note: 'gone'] }");
        assert!(tree.diagnostics().is_empty());
        match &tree.root().members[0] {
            MemberSyntax::EnumDeclaration(declaration) => {
                assert_eq!(declaration.identifier.part_texts(), vec!["status"]);
                assert_eq!(declaration.body.statements.len(), 2);
                assert_eq!(
                    declaration.body.statements[0].kind(),
                    SyntaxKind::EnumEntryDeclarationStatement
                );
            }
            other => panic!("not an enum declaration: {}", other.kind()),
        }
    }

    #[test]
    fn relationship_short_form() {
        let tree = parse("Ref fk: orders.user_id > users.id");
        assert!(tree.diagnostics().is_empty());
        match &tree.root().members[0] {
            MemberSyntax::RelationshipShortForm(relationship) => {
                assert_eq!(
                    relationship.identifier_token.as_ref().unwrap().text(),
                    "fk"
                );
                let from = relationship.constraint.from.as_ref().unwrap();
                assert_eq!(from.part_texts(), vec!["orders", "user_id"]);
                assert_eq!(relationship.constraint.to.part_texts(), vec!["users", "id"]);
            }
            other => panic!("not a short-form relationship: {}", other.kind()),
        }
    }

    #[test]
    fn relationship_long_form() {
        let tree = parse("ref { a.b <> c.d }");
        assert!(tree.diagnostics().is_empty());
        match &tree.root().members[0] {
            MemberSyntax::RelationshipLongForm(relationship) => {
                assert!(relationship.identifier_token.is_none());
                assert_eq!(
                    relationship.constraint.operator_token.kind(),
                    SyntaxKind::LessGreaterToken
                );
            }
            other => panic!("not a long-form relationship: {}", other.kind()),
        }
    }

    #[test]
    fn project_declaration_with_settings() {
        let tree = parse("Project demo {\n  database_type: 'PostgreSQL'\n  note: 'sample'\n}");
        assert!(tree.diagnostics().is_empty());
        match &tree.root().members[0] {
            MemberSyntax::ProjectDeclaration(project) => {
                assert_eq!(project.identifier_token.as_ref().unwrap().text(), "demo");
                assert_eq!(project.settings.settings.len(), 2);
            }
            other => panic!("not a project declaration: {}", other.kind()),
        }
    }

    #[test]
    fn unknown_project_setting_warns() {
        let tree = parse("Project demo { style: dark }");
        assert_eq!(tree.diagnostics().len(), 1);
        assert_eq!(tree.diagnostics()[0].message(), "Unknown project setting 'style'.");
    }

    #[test]
    fn unknown_table_setting_warns() {
        let tree = parse("Table t [color: blue] { id int }");
        assert_eq!(tree.diagnostics().len(), 1);
        assert_eq!(tree.diagnostics()[0].message(), "Unknown table setting 'color'.");
    }

    #[test]
    fn header_color_table_setting() {
        let tree = parse("Table t [headercolor: #3498DB] { id int }");
        assert!(tree.diagnostics().is_empty());
    }

    #[test]
    fn stray_tokens_terminate_with_diagnostics() {
        let tree = parse("] ] ni😀ce {");
        assert!(!tree.diagnostics().is_empty());
    }

    #[test]
    fn unclosed_table_recovers_at_end_of_input() {
        let tree = parse("Table t { id int");
        let table = single_table(&tree);
        assert!(table.body.close_brace_token.is_missing());
        assert_eq!(
            tree.diagnostics()[0].message(),
            "Unexpected token <EndOfFileToken>, expected <CloseBraceToken>."
        );
    }

    #[test]
    fn note_statement_in_table_body() {
        let tree = parse("Table t { note: 'people' \n id int }");
        assert!(tree.diagnostics().is_empty());
        let table = single_table(&tree);
        assert_eq!(
            table.body.statements[0].kind(),
            SyntaxKind::NoteDeclarationStatement
        );
        assert_eq!(
            table.body.statements[1].kind(),
            SyntaxKind::ColumnDeclarationStatement
        );
    }
}
