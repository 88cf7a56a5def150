//! Severity-tagged diagnostics accumulated across lexing, parsing, and
//! binding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::TextLocation;
use crate::token::SyntaxKind;

/// How serious a diagnostic is.
///
/// Errors mark structurally unrecoverable input; warnings mark valid but
/// questionable input. Neither stops processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One reported issue: severity, resolved source location, message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    severity: Severity,
    location: TextLocation,
    message: String,
}

impl Diagnostic {
    pub fn error(location: TextLocation, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location,
            message: message.into(),
        }
    }

    pub fn warning(location: TextLocation, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn location(&self) -> TextLocation {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// An append-only, ordered diagnostic sink.
///
/// The lexer, parser, and binder all write here; reporting never fails and
/// never halts the pass that reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Moves every diagnostic out of `other` into this bag.
    pub fn extend(&mut self, other: DiagnosticBag) {
        self.diagnostics.extend(other.diagnostics);
    }

    fn report_error(&mut self, location: TextLocation, message: String) {
        self.diagnostics.push(Diagnostic::error(location, message));
    }

    fn report_warning(&mut self, location: TextLocation, message: String) {
        self.diagnostics.push(Diagnostic::warning(location, message));
    }

    pub fn report_bad_character(&mut self, location: TextLocation, character: char) {
        self.report_error(location, format!("Bad character input: '{character}'."));
    }

    pub fn report_unterminated_string(&mut self, location: TextLocation) {
        self.report_error(location, "Unterminated string literal.".to_string());
    }

    pub fn report_unterminated_multi_line_string(&mut self, location: TextLocation) {
        self.report_error(
            location,
            "Unterminated multi-line string literal.".to_string(),
        );
    }

    pub fn report_unrecognized_escape_sequence(&mut self, location: TextLocation) {
        self.report_error(location, "Unrecognized escape sequence.".to_string());
    }

    pub fn report_unterminated_multi_line_comment(&mut self, location: TextLocation) {
        self.report_error(location, "Unterminated multi-line comment.".to_string());
    }

    pub fn report_number_too_large(&mut self, location: TextLocation, text: &str) {
        self.report_error(location, format!("The number '{text}' is too large."));
    }

    pub fn report_unexpected_token(
        &mut self,
        location: TextLocation,
        actual: SyntaxKind,
        expected: SyntaxKind,
    ) {
        self.report_error(
            location,
            format!("Unexpected token <{actual}>, expected <{expected}>."),
        );
    }

    pub fn report_disallowed_default_expression(
        &mut self,
        location: TextLocation,
        kind: SyntaxKind,
    ) {
        self.report_error(
            location,
            format!("Disallowed 'default' column setting value expression '{kind}'."),
        );
    }

    pub fn report_unknown_project_setting(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Unknown project setting '{name}'."));
    }

    pub fn report_unknown_table_setting(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Unknown table setting '{name}'."));
    }

    pub fn report_unknown_column_setting(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Unknown column setting '{name}'."));
    }

    pub fn report_unknown_enum_entry_setting(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Unknown enum entry setting '{name}'."));
    }

    pub fn report_unknown_index_setting(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Unknown index setting '{name}'."));
    }

    pub fn report_unknown_index_setting_type(
        &mut self,
        location: TextLocation,
        type_text: &str,
        allowed: &[&str],
    ) {
        self.report_warning(
            location,
            format!(
                "Unknown index setting type '{type_text}'. Allowed index types [{}].",
                allowed.join("|")
            ),
        );
    }

    pub fn report_duplicate_column_setting(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Column setting '{name}' already declared."));
    }

    pub fn report_duplicate_index_setting(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Index setting '{name}' already declared."));
    }

    pub fn report_duplicate_enum_entry_setting(&mut self, location: TextLocation, name: &str) {
        self.report_warning(
            location,
            format!("Enum entry setting '{name}' already declared."),
        );
    }

    pub fn report_table_already_declared(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Table '{name}' already declared."));
    }

    pub fn report_column_already_declared(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Column '{name}' already declared."));
    }

    pub fn report_enum_already_declared(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Enum '{name}' already declared."));
    }

    pub fn report_enum_entry_already_declared(&mut self, location: TextLocation, name: &str) {
        self.report_warning(location, format!("Enum entry '{name}' already declared."));
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
