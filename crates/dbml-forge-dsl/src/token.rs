//! Token kinds, decoded values, trivia, and the tokens the lexer emits.

use std::fmt;

use rust_decimal::Decimal;

use crate::text::TextSpan;

/// Every kind in the syntax layer: trivia, tokens, keywords, and tree
/// nodes share one closed discriminator so consumers can walk a tree with
/// a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // -- Special tokens --
    BadToken,
    EndOfFileToken,

    // -- Trivia --
    WhitespaceTrivia,
    LineBreakTrivia,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,

    // -- Tokens --
    NumberToken,
    PlusToken,
    MinusToken,
    StarToken,
    SlashToken,
    DotToken,
    CommaToken,
    ColonToken,
    LessToken,
    GreaterToken,
    LessGreaterToken,
    OpenParenthesisToken,
    CloseParenthesisToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    BacktickToken,
    HexTripletToken,
    QuotationMarksStringToken,
    SingleQuotationMarksStringToken,
    MultiLineStringToken,
    IdentifierToken,

    // -- Keywords --
    AsKeyword,
    DatabaseTypeKeyword,
    DefaultKeyword,
    EnumKeyword,
    FalseKeyword,
    HeaderColorKeyword,
    IncrementKeyword,
    IndexesKeyword,
    KeyKeyword,
    NameKeyword,
    NoteKeyword,
    NotKeyword,
    NullKeyword,
    PkKeyword,
    PrimaryKeyword,
    ProjectKeyword,
    RefKeyword,
    TableKeyword,
    TrueKeyword,
    TypeKeyword,
    UniqueKeyword,

    // -- Nodes --
    CompilationUnit,

    // members
    ProjectDeclarationMember,
    EnumDeclarationMember,
    TableDeclarationMember,
    RelationshipShortFormDeclarationMember,
    RelationshipLongFormDeclarationMember,
    GlobalStatementMember,

    // statements
    BlockStatement,
    NoteDeclarationStatement,
    ColumnDeclarationStatement,
    IndexesDeclarationStatement,
    SingleFieldIndexDeclarationStatement,
    CompositeIndexDeclarationStatement,
    EnumEntryDeclarationStatement,
    ExpressionStatement,

    // expressions
    LiteralExpression,
    NameExpression,
    BacktickExpression,
    ParenthesizedExpression,
    CallExpression,

    // clauses
    ColumnIdentifierClause,
    RelationshipConstraintClause,
    ProjectSettingListClause,
    DatabaseProviderProjectSettingClause,
    NoteProjectSettingClause,
    UnknownProjectSettingClause,
    TableIdentifierClause,
    TableAliasClause,
    TableSettingListClause,
    HeaderColorTableSettingClause,
    UnknownTableSettingClause,
    ColumnTypeIdentifierClause,
    ColumnTypeParenthesizedIdentifierClause,
    ColumnSettingListClause,
    PrimaryKeyColumnSettingClause,
    PkColumnSettingClause,
    NullColumnSettingClause,
    NotNullColumnSettingClause,
    UniqueColumnSettingClause,
    IncrementColumnSettingClause,
    DefaultColumnSettingClause,
    NoteColumnSettingClause,
    RelationshipColumnSettingClause,
    UnknownColumnSettingClause,
    IndexSettingListClause,
    NameIndexSettingClause,
    NoteIndexSettingClause,
    PkIndexSettingClause,
    PrimaryKeyIndexSettingClause,
    TypeIndexSettingClause,
    UniqueIndexSettingClause,
    UnknownIndexSettingClause,
    EnumIdentifierClause,
    EnumEntrySettingListClause,
    NoteEnumEntrySettingClause,
    UnknownEnumEntrySettingClause,
}

/// Keyword spellings and the kinds they resolve to. `Ref` is accepted in
/// both spellings; all other keywords have exactly one.
const KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("as", SyntaxKind::AsKeyword),
    ("database_type", SyntaxKind::DatabaseTypeKeyword),
    ("default", SyntaxKind::DefaultKeyword),
    ("enum", SyntaxKind::EnumKeyword),
    ("false", SyntaxKind::FalseKeyword),
    ("headercolor", SyntaxKind::HeaderColorKeyword),
    ("increment", SyntaxKind::IncrementKeyword),
    ("indexes", SyntaxKind::IndexesKeyword),
    ("key", SyntaxKind::KeyKeyword),
    ("name", SyntaxKind::NameKeyword),
    ("note", SyntaxKind::NoteKeyword),
    ("not", SyntaxKind::NotKeyword),
    ("null", SyntaxKind::NullKeyword),
    ("pk", SyntaxKind::PkKeyword),
    ("primary", SyntaxKind::PrimaryKeyword),
    ("Project", SyntaxKind::ProjectKeyword),
    ("ref", SyntaxKind::RefKeyword),
    ("Ref", SyntaxKind::RefKeyword),
    ("Table", SyntaxKind::TableKeyword),
    ("true", SyntaxKind::TrueKeyword),
    ("type", SyntaxKind::TypeKeyword),
    ("unique", SyntaxKind::UniqueKeyword),
];

impl SyntaxKind {
    /// Resolves identifier text against the keyword table (case-sensitive).
    /// Unrecognized text is an identifier.
    pub fn keyword_kind(text: &str) -> SyntaxKind {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == text)
            .map(|(_, kind)| *kind)
            .unwrap_or(SyntaxKind::IdentifierToken)
    }

    /// The keyword table: each accepted spelling with its kind.
    pub fn keywords() -> &'static [(&'static str, SyntaxKind)] {
        KEYWORDS
    }

    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Self::WhitespaceTrivia
                | Self::LineBreakTrivia
                | Self::SingleLineCommentTrivia
                | Self::MultiLineCommentTrivia
        )
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::AsKeyword
                | Self::DatabaseTypeKeyword
                | Self::DefaultKeyword
                | Self::EnumKeyword
                | Self::FalseKeyword
                | Self::HeaderColorKeyword
                | Self::IncrementKeyword
                | Self::IndexesKeyword
                | Self::KeyKeyword
                | Self::NameKeyword
                | Self::NoteKeyword
                | Self::NotKeyword
                | Self::NullKeyword
                | Self::PkKeyword
                | Self::PrimaryKeyword
                | Self::ProjectKeyword
                | Self::RefKeyword
                | Self::TableKeyword
                | Self::TrueKeyword
                | Self::TypeKeyword
                | Self::UniqueKeyword
        )
    }

    /// True for any string literal token kind.
    pub fn is_string_token(&self) -> bool {
        matches!(
            self,
            Self::QuotationMarksStringToken
                | Self::SingleQuotationMarksStringToken
                | Self::MultiLineStringToken
        )
    }

    /// True for token kinds that can spell a name: identifiers and
    /// keywords. Names in this dialect are deliberately keyword-tolerant.
    pub fn is_name_token(&self) -> bool {
        *self == Self::IdentifierToken || self.is_keyword()
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The decoded value carried by literal tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// Exact base-10 decimal from a number token.
    Number(Decimal),
    /// `true` or `false`.
    Bool(bool),
    /// Decoded string content (escapes resolved, indentation stripped).
    String(String),
}

impl TokenValue {
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Non-semantic text attached to a token: whitespace, line breaks, and
/// comments. Preserved only so the token stream reproduces the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTrivia {
    kind: SyntaxKind,
    position: usize,
    text: String,
}

impl SyntaxTrivia {
    pub fn new(kind: SyntaxKind, position: usize, text: impl Into<String>) -> Self {
        debug_assert!(kind.is_trivia(), "not a trivia kind: {kind}");
        Self {
            kind,
            position,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.position, self.text.len())
    }
}

/// One significant token with its surrounding trivia.
///
/// Invariant: concatenating leading trivia text, token text, and trailing
/// trivia text for every token in emission order (end-of-input token
/// included) reproduces the source exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    kind: SyntaxKind,
    position: usize,
    text: String,
    value: Option<TokenValue>,
    leading_trivia: Vec<SyntaxTrivia>,
    trailing_trivia: Vec<SyntaxTrivia>,
    missing: bool,
}

impl SyntaxToken {
    pub fn new(
        kind: SyntaxKind,
        position: usize,
        text: impl Into<String>,
        value: Option<TokenValue>,
        leading_trivia: Vec<SyntaxTrivia>,
        trailing_trivia: Vec<SyntaxTrivia>,
    ) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
            value,
            leading_trivia,
            trailing_trivia,
            missing: false,
        }
    }

    /// A zero-width placeholder the parser synthesizes in place of an
    /// expected token that was not found.
    pub fn missing(kind: SyntaxKind, position: usize) -> Self {
        Self {
            kind,
            position,
            text: String::new(),
            value: None,
            leading_trivia: Vec::new(),
            trailing_trivia: Vec::new(),
            missing: true,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    pub fn leading_trivia(&self) -> &[SyntaxTrivia] {
        &self.leading_trivia
    }

    pub fn trailing_trivia(&self) -> &[SyntaxTrivia] {
        &self.trailing_trivia
    }

    /// True for parser-synthesized placeholders.
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// The token's own span, trivia excluded.
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.position, self.text.len())
    }

    /// The token's span including leading and trailing trivia.
    pub fn full_span(&self) -> TextSpan {
        let start = self
            .leading_trivia
            .first()
            .map_or(self.position, |t| t.span().start);
        let end = self
            .trailing_trivia
            .last()
            .map_or_else(|| self.span().end(), |t| t.span().end());
        TextSpan::from_bounds(start, end)
    }

    /// Leading trivia text + token text + trailing trivia text.
    pub fn full_text(&self) -> String {
        let mut text = String::new();
        for trivia in &self.leading_trivia {
            text.push_str(trivia.text());
        }
        text.push_str(&self.text);
        for trivia in &self.trailing_trivia {
            text.push_str(trivia.text());
        }
        text
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}'", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_round_trips_through_lookup() {
        for (spelling, kind) in SyntaxKind::keywords() {
            assert_eq!(SyntaxKind::keyword_kind(spelling), *kind, "{spelling}");
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn keyword_lookup_is_case_sensitive() {
        assert_eq!(SyntaxKind::keyword_kind("Table"), SyntaxKind::TableKeyword);
        assert_eq!(SyntaxKind::keyword_kind("table"), SyntaxKind::IdentifierToken);
        assert_eq!(SyntaxKind::keyword_kind("NOTE"), SyntaxKind::IdentifierToken);
        assert_eq!(SyntaxKind::keyword_kind("custom"), SyntaxKind::IdentifierToken);
    }

    #[test]
    fn ref_keyword_has_both_spellings() {
        assert_eq!(SyntaxKind::keyword_kind("ref"), SyntaxKind::RefKeyword);
        assert_eq!(SyntaxKind::keyword_kind("Ref"), SyntaxKind::RefKeyword);
    }

    #[test]
    fn kind_display_is_variant_name() {
        assert_eq!(SyntaxKind::OpenBraceToken.to_string(), "OpenBraceToken");
        assert_eq!(SyntaxKind::TableKeyword.to_string(), "TableKeyword");
    }

    #[test]
    fn kind_predicates() {
        assert!(SyntaxKind::WhitespaceTrivia.is_trivia());
        assert!(!SyntaxKind::NumberToken.is_trivia());
        assert!(SyntaxKind::QuotationMarksStringToken.is_string_token());
        assert!(SyntaxKind::IdentifierToken.is_name_token());
        assert!(SyntaxKind::NoteKeyword.is_name_token());
        assert!(!SyntaxKind::NumberToken.is_name_token());
    }

    #[test]
    fn token_spans() {
        let leading = vec![SyntaxTrivia::new(SyntaxKind::WhitespaceTrivia, 0, "  ")];
        let trailing = vec![SyntaxTrivia::new(SyntaxKind::LineBreakTrivia, 7, "\n")];
        let token = SyntaxToken::new(
            SyntaxKind::IdentifierToken,
            2,
            "users",
            None,
            leading,
            trailing,
        );
        assert_eq!(token.span(), TextSpan::new(2, 5));
        assert_eq!(token.full_span(), TextSpan::new(0, 8));
        assert_eq!(token.full_text(), "  users\n");
        assert!(!token.is_missing());
    }

    #[test]
    fn missing_token_is_zero_width() {
        let token = SyntaxToken::missing(SyntaxKind::IdentifierToken, 13);
        assert!(token.is_missing());
        assert_eq!(token.text(), "");
        assert_eq!(token.span(), TextSpan::new(13, 0));
        assert!(token.value().is_none());
        assert_eq!(token.full_text(), "");
    }

    #[test]
    fn token_value_accessors() {
        let number = TokenValue::Number("1.5".parse().unwrap());
        assert_eq!(number.as_number(), Some("1.5".parse().unwrap()));
        assert_eq!(number.as_bool(), None);
        let flag = TokenValue::Bool(true);
        assert_eq!(flag.as_bool(), Some(true));
        let text = TokenValue::String("hi".into());
        assert_eq!(text.as_str(), Some("hi"));
    }
}
