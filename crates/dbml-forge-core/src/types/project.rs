use serde::{Deserialize, Serialize};

use super::setting_value::UnknownSetting;

/// Project-level metadata from a `Project` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: Option<String>,
    /// Target provider from a `database_type:` setting.
    pub database_provider: Option<String>,
    pub notes: Vec<String>,
    pub unknown_settings: Vec<UnknownSetting>,
}

impl Project {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            database_provider: None,
            notes: Vec::new(),
            unknown_settings: Vec::new(),
        }
    }

    /// The most recently declared note, if any.
    pub fn note(&self) -> Option<&str> {
        self.notes.last().map(String::as_str)
    }
}
