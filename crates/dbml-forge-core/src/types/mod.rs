//! Domain model types, one per file.

pub mod column;
pub mod column_identifier;
pub mod database;
pub mod enum_definition;
pub mod index;
pub mod project;
pub mod relationship;
pub mod setting_value;
pub mod table;
