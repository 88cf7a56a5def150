use std::fmt;

use serde::{Deserialize, Serialize};

use super::column_identifier::ColumnIdentifier;

/// The cardinality of a relationship, as written with the four
/// relationship operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    /// `-`
    OneToOne,
    /// `<`
    OneToMany,
    /// `>`
    ManyToOne,
    /// `<>`
    ManyToMany,
}

impl RelationshipKind {
    /// The source operator spelling for this kind.
    pub fn operator(&self) -> &'static str {
        match self {
            Self::OneToOne => "-",
            Self::OneToMany => "<",
            Self::ManyToOne => ">",
            Self::ManyToMany => "<>",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operator())
    }
}

/// A resolved relationship between two column paths.
///
/// The `to` endpoint is recorded verbatim from the source; it is not
/// required to name a table or column that exists in the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The declared name, for named `Ref` declarations.
    pub name: Option<String>,
    pub from: ColumnIdentifier,
    pub to: ColumnIdentifier,
    pub kind: RelationshipKind,
}

impl Relationship {
    pub fn new(
        name: Option<String>,
        from: ColumnIdentifier,
        to: ColumnIdentifier,
        kind: RelationshipKind,
    ) -> Self {
        Self {
            name,
            from,
            to,
            kind,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.kind, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_match_source_spelling() {
        assert_eq!(RelationshipKind::OneToOne.operator(), "-");
        assert_eq!(RelationshipKind::OneToMany.operator(), "<");
        assert_eq!(RelationshipKind::ManyToOne.operator(), ">");
        assert_eq!(RelationshipKind::ManyToMany.operator(), "<>");
    }

    #[test]
    fn display_renders_endpoints_and_operator() {
        let rel = Relationship::new(
            None,
            ColumnIdentifier::from_parts(&["orders", "user_id"]),
            ColumnIdentifier::from_parts(&["users", "id"]),
            RelationshipKind::ManyToOne,
        );
        assert_eq!(rel.to_string(), "orders.user_id > users.id");
    }

    #[test]
    fn serde_round_trip() {
        let rel = Relationship::new(
            Some("fk_orders_users".into()),
            ColumnIdentifier::from_parts(&["orders", "user_id"]),
            ColumnIdentifier::from_parts(&["users", "id"]),
            RelationshipKind::ManyToOne,
        );
        let json = serde_json::to_string(&rel).unwrap();
        let back: Relationship = serde_json::from_str(&json).unwrap();
        assert_eq!(rel, back);
    }
}
