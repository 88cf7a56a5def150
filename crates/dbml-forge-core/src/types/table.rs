use std::fmt;

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::index::TableIndex;
use super::relationship::Relationship;
use super::setting_value::UnknownSetting;

/// A declared table: qualified name, alias, settings, and its columns,
/// indexes, and relationships in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub name: String,
    /// Alias from an `as` clause.
    pub alias: Option<String>,
    /// Raw hex triplet from a `headercolor:` setting, e.g. `#FF0000`.
    pub header_color: Option<String>,
    pub columns: Vec<Column>,
    pub indexes: Vec<TableIndex>,
    pub relationships: Vec<Relationship>,
    pub notes: Vec<String>,
    pub unknown_settings: Vec<UnknownSetting>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            database: None,
            schema: None,
            name: name.into(),
            alias: None,
            header_color: None,
            columns: Vec::new(),
            indexes: Vec::new(),
            relationships: Vec::new(),
            notes: Vec::new(),
            unknown_settings: Vec::new(),
        }
    }

    /// The dotted name including any declared database and schema parts.
    pub fn full_name(&self) -> String {
        let mut name = String::new();
        if let Some(database) = &self.database {
            name.push_str(database);
            name.push('.');
        }
        if let Some(schema) = &self.schema {
            name.push_str(schema);
            name.push('.');
        }
        name.push_str(&self.name);
        name
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The most recently declared note, if any.
    pub fn note(&self) -> Option<&str> {
        self.notes.last().map(String::as_str)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
