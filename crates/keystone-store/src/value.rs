//! Configuration value model.
//!
//! Every entry in the store is a [`ConfigValue`]: either a leaf (string,
//! integer, boolean) or a nested [`ConfigTable`] namespace. Tables nest
//! arbitrarily, so a dotted path like `data.host` walks one table per
//! segment and ends at a leaf.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A namespace: an ordered mapping from key to value.
///
/// Keys are unique within a namespace; iteration order is insertion order,
/// though nothing in the store's contract depends on it.
pub type ConfigTable = IndexMap<String, ConfigValue>;

/// A single configuration entry.
///
/// # Example
///
/// ```
/// use keystone_store::ConfigValue;
///
/// let value = ConfigValue::from("localhost");
/// assert_eq!(value.as_str(), Some("localhost"));
/// assert_eq!(value.as_int(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A string leaf.
    Str(String),
    /// An integer leaf.
    Int(i64),
    /// A boolean leaf.
    Bool(bool),
    /// A nested namespace.
    Table(ConfigTable),
}

impl ConfigValue {
    /// Returns the string value, or `None` if this is not a string leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer value, or `None` if this is not an integer leaf.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean value, or `None` if this is not a boolean leaf.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested table, or `None` if this is a leaf.
    #[must_use]
    pub const fn as_table(&self) -> Option<&ConfigTable> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Returns `true` if this value is a nested namespace.
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    /// A short name for the value's shape, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Table(_) => "namespace",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<ConfigTable> for ConfigValue {
    fn from(value: ConfigTable) -> Self {
        Self::Table(value)
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Table(t) => write!(f, "<namespace with {} keys>", t.len()),
        }
    }
}
