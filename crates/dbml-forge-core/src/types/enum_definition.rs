use std::fmt;

use serde::{Deserialize, Serialize};

use super::setting_value::UnknownSetting;

/// One named member of an enum declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    pub name: String,
    pub notes: Vec<String>,
    pub unknown_settings: Vec<UnknownSetting>,
}

impl EnumEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: Vec::new(),
            unknown_settings: Vec::new(),
        }
    }

    /// The most recently declared note, if any.
    pub fn note(&self) -> Option<&str> {
        self.notes.last().map(String::as_str)
    }
}

/// A declared enum: qualified name and its entries in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    pub schema: Option<String>,
    pub name: String,
    pub entries: Vec<EnumEntry>,
}

impl EnumDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// The dotted name including any declared schema part.
    pub fn full_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Looks up an entry by name.
    pub fn entry(&self, name: &str) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

impl fmt::Display for EnumDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
