use serde::{Deserialize, Serialize};

use super::enum_definition::EnumDefinition;
use super::project::Project;
use super::relationship::Relationship;
use super::table::Table;

/// The root of a resolved schema: everything one source document declared.
///
/// Built best-effort by the binder; consult the diagnostics that came with
/// it before trusting the model for code generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub project: Option<Project>,
    pub tables: Vec<Table>,
    pub enums: Vec<EnumDefinition>,
    /// Relationships from standalone `Ref` declarations; relationships
    /// declared through column settings live on their owning table.
    pub relationships: Vec<Relationship>,
    /// Notes declared outside any table or enum.
    pub notes: Vec<String>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a table by bare name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Looks up an enum by bare name.
    pub fn enum_def(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// The most recently declared top-level note, if any.
    pub fn note(&self) -> Option<&str> {
        self.notes.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::column::Column;

    #[test]
    fn empty_database() {
        let db = Database::new();
        assert!(db.project.is_none());
        assert!(db.tables.is_empty());
        assert!(db.enums.is_empty());
        assert!(db.table("users").is_none());
    }

    #[test]
    fn table_and_enum_lookup() {
        let mut db = Database::new();
        db.tables.push(Table::new("users"));
        db.enums.push(EnumDefinition::new("status"));
        assert!(db.table("users").is_some());
        assert!(db.enum_def("status").is_some());
        assert!(db.enum_def("users").is_none());
    }

    #[test]
    fn serde_round_trip() {
        let mut db = Database::new();
        db.project = Some(Project::new(Some("crm".into())));
        let mut table = Table::new("users");
        table.columns.push(Column::new("id", "int"));
        db.tables.push(table);
        db.enums.push(EnumDefinition::new("status"));
        db.notes.push("exported nightly".into());

        let json = serde_json::to_string_pretty(&db).unwrap();
        let back: Database = serde_json::from_str(&json).unwrap();
        assert_eq!(db, back);
    }
}
