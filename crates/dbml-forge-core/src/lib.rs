//! # dbml-forge-core
//!
//! The resolved domain model for DBML schema documents: databases, tables,
//! columns, relationships, indexes, and enums, independent of surface
//! syntax.
//!
//! Values of these types are produced by the `dbml-forge-dsl` binder and are
//! immutable once built; downstream consumers (SQL emitters, diagram
//! renderers) read them freely across threads. All types are serde-
//! serializable so a resolved schema can be exported as data.

pub mod types;

pub use types::column::Column;
pub use types::column_identifier::ColumnIdentifier;
pub use types::database::Database;
pub use types::enum_definition::{EnumDefinition, EnumEntry};
pub use types::index::TableIndex;
pub use types::project::Project;
pub use types::relationship::{Relationship, RelationshipKind};
pub use types::setting_value::{SettingValue, UnknownSetting};
pub use types::table::Table;
