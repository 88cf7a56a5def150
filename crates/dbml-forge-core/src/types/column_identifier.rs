use std::fmt;

use serde::{Deserialize, Serialize};

/// A dot-separated reference to a column, as used by relationship
/// endpoints: `column`, `table.column`, or `schema.table.column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnIdentifier {
    pub schema: Option<String>,
    pub table: Option<String>,
    pub column: String,
}

impl ColumnIdentifier {
    pub fn new(
        schema: Option<String>,
        table: Option<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            schema,
            table,
            column: column.into(),
        }
    }

    /// Builds an identifier from dot-separated parts, assigned right to
    /// left: the last part is the column, the one before it the table, the
    /// one before that the schema. Parts further left are ignored.
    pub fn from_parts(parts: &[&str]) -> Self {
        let mut iter = parts.iter().rev();
        let column = iter.next().copied().unwrap_or_default().to_string();
        let table = iter.next().map(|p| p.to_string());
        let schema = iter.next().map(|p| p.to_string());
        Self {
            schema,
            table,
            column,
        }
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "{schema}.")?;
        }
        if let Some(table) = &self.table {
            write!(f, "{table}.")?;
        }
        write!(f, "{}", self.column)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn display_joins_present_parts() {
        let bare = ColumnIdentifier::new(None, None, "id");
        assert_eq!(bare.to_string(), "id");

        let with_table = ColumnIdentifier::new(None, Some("users".into()), "id");
        assert_eq!(with_table.to_string(), "users.id");

        let full = ColumnIdentifier::new(Some("dbo".into()), Some("users".into()), "id");
        assert_eq!(full.to_string(), "dbo.users.id");
    }

    #[test]
    fn from_parts_assigns_right_to_left() {
        let one = ColumnIdentifier::from_parts(&["id"]);
        assert_eq!(one, ColumnIdentifier::new(None, None, "id"));

        let two = ColumnIdentifier::from_parts(&["users", "id"]);
        assert_eq!(two, ColumnIdentifier::new(None, Some("users".into()), "id"));

        let three = ColumnIdentifier::from_parts(&["dbo", "users", "id"]);
        assert_eq!(
            three,
            ColumnIdentifier::new(Some("dbo".into()), Some("users".into()), "id")
        );
    }

    #[test]
    fn from_parts_ignores_extra_leading_parts() {
        let id = ColumnIdentifier::from_parts(&["server", "dbo", "users", "id"]);
        assert_eq!(id.to_string(), "dbo.users.id");
    }

    #[test]
    fn from_parts_of_empty_slice_is_anonymous() {
        let id = ColumnIdentifier::from_parts(&[]);
        assert_eq!(id.column, "");
        assert!(id.table.is_none());
    }

    proptest! {
        /// Display output always splits back into the same parts it was
        /// built from (for dot-free part names).
        #[test]
        fn display_round_trips_parts(
            parts in proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 1..=3)
        ) {
            let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
            let id = ColumnIdentifier::from_parts(&refs);
            let rendered = id.to_string();
            let split: Vec<&str> = rendered.split('.').collect();
            prop_assert_eq!(split, refs);
        }
    }
}
