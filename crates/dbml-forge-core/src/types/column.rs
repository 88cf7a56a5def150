use serde::{Deserialize, Serialize};

use super::setting_value::{SettingValue, UnknownSetting};

/// A table column: declared name and type plus the flags and values
/// resolved from its setting list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// The declared type as written, e.g. `int` or `nvarchar(255)`.
    pub type_text: String,
    pub is_primary_key: bool,
    pub is_unique: bool,
    pub is_auto_increment: bool,
    /// Columns are nullable unless declared `not null` (or implied
    /// otherwise by a downstream consumer).
    pub is_nullable: bool,
    /// Decoded `default:` value; absent for `default: null` and for
    /// backtick expressions, which the binder does not interpret.
    pub default_value: Option<SettingValue>,
    pub notes: Vec<String>,
    pub unknown_settings: Vec<UnknownSetting>,
}

impl Column {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
            is_primary_key: false,
            is_unique: false,
            is_auto_increment: false,
            is_nullable: true,
            default_value: None,
            notes: Vec::new(),
            unknown_settings: Vec::new(),
        }
    }

    /// True when the column was declared `not null`.
    pub fn is_required(&self) -> bool {
        !self.is_nullable
    }

    /// True when a usable default value was declared.
    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// The most recently declared note, if any.
    pub fn note(&self) -> Option<&str> {
        self.notes.last().map(String::as_str)
    }

    /// Looks up an unknown setting by name.
    pub fn unknown_setting(&self, name: &str) -> Option<&UnknownSetting> {
        self.unknown_settings.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_column_is_plain_and_nullable() {
        let column = Column::new("id", "int");
        assert_eq!(column.name, "id");
        assert_eq!(column.type_text, "int");
        assert!(!column.is_primary_key);
        assert!(!column.is_unique);
        assert!(!column.is_auto_increment);
        assert!(column.is_nullable);
        assert!(!column.is_required());
        assert!(!column.has_default());
        assert_eq!(column.note(), None);
    }

    #[test]
    fn required_is_inverse_of_nullable() {
        let mut column = Column::new("id", "int");
        column.is_nullable = false;
        assert!(column.is_required());
    }

    #[test]
    fn note_returns_most_recent() {
        let mut column = Column::new("id", "int");
        column.notes.push("first".into());
        column.notes.push("second".into());
        assert_eq!(column.note(), Some("second"));
        assert_eq!(column.notes.len(), 2);
    }

    #[test]
    fn unknown_setting_lookup() {
        let mut column = Column::new("id", "int");
        UnknownSetting::record(
            &mut column.unknown_settings,
            "collate",
            Some(SettingValue::from("nocase")),
        );
        let setting = column.unknown_setting("collate").unwrap();
        assert_eq!(setting.value.as_ref().unwrap().as_str(), Some("nocase"));
        assert!(column.unknown_setting("missing").is_none());
    }

    #[test]
    fn serde_round_trip() {
        let mut column = Column::new("price", "decimal(10,2)");
        column.default_value = Some(SettingValue::Number("0.0".parse().unwrap()));
        column.is_nullable = false;
        let json = serde_json::to_string(&column).unwrap();
        let back: Column = serde_json::from_str(&json).unwrap();
        assert_eq!(column, back);
    }
}
