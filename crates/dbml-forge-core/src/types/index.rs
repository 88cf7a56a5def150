use serde::{Deserialize, Serialize};

use super::setting_value::UnknownSetting;

/// A table index over one or more columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableIndex {
    /// Indexed column names in declaration order; a single entry for a
    /// single-field index.
    pub columns: Vec<String>,
    /// Explicit index name from a `name:` setting.
    pub name: Option<String>,
    pub is_primary_key: bool,
    pub is_unique: bool,
    /// Validated index type (`btree`, `gin`, `gist`, or `hash`), when
    /// declared.
    pub index_type: Option<String>,
    pub notes: Vec<String>,
    pub unknown_settings: Vec<UnknownSetting>,
}

impl TableIndex {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            name: None,
            is_primary_key: false,
            is_unique: false,
            index_type: None,
            notes: Vec::new(),
            unknown_settings: Vec::new(),
        }
    }

    /// Returns true when the index spans more than one column.
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }

    /// The most recently declared note, if any.
    pub fn note(&self) -> Option<&str> {
        self.notes.last().map(String::as_str)
    }
}
