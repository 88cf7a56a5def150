use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The decoded value of a schema setting.
///
/// Settings in the source are loosely typed (`name: value` with a string,
/// number, boolean, or bare word on the right-hand side); this closed
/// variant keeps consumers exhaustive instead of reaching for an open
/// dynamic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingValue {
    /// A quoted string or bare-word value.
    String(String),
    /// An exact base-10 decimal value.
    Number(Decimal),
    /// A `true`/`false` value.
    Bool(bool),
}

impl SettingValue {
    /// Returns the textual content for string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content for number values.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean content for boolean values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Decimal> for SettingValue {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// A setting the parser recognized structurally but not by name, preserved
/// verbatim so no information from valid input is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownSetting {
    pub name: String,
    /// `None` for bare settings declared without a value.
    pub value: Option<SettingValue>,
}

impl UnknownSetting {
    pub fn new(name: impl Into<String>, value: Option<SettingValue>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Inserts or, when the name is already present, replaces the value of
    /// an unknown setting. The first occurrence keeps its position; the
    /// most recent value wins.
    pub fn record(settings: &mut Vec<UnknownSetting>, name: impl Into<String>, value: Option<SettingValue>) {
        let name = name.into();
        match settings.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.value = value,
            None => settings.push(UnknownSetting { name, value }),
        }
    }
}
