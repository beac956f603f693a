//! Admin API data types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wire name of the record identifier.
pub const CONFIG_KEY_FIELD: &str = "configKey";

/// Unique integer identifier of a configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(pub i64);

impl ConfigKey {
    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ConfigKey {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single configuration entry as returned by the admin API.
///
/// Only `configKey` is interpreted; every other field is kept verbatim
/// (in the order the server sent it) for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Record identifier.
    #[serde(rename = "configKey")]
    pub config_key: ConfigKey,

    /// Additional display fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ConfigRecord {
    /// Creates a record with no extra fields.
    pub fn new(config_key: i64) -> Self {
        Self {
            config_key: ConfigKey(config_key),
            fields: Map::new(),
        }
    }

    /// Builder-style helper for adding a display field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw value of a field by its accessor name.
    pub fn field(&self, accessor: &str) -> Option<&Value> {
        self.fields.get(accessor)
    }

    /// Text shown in a grid cell for `accessor`.
    ///
    /// Strings are shown verbatim, `null` and missing fields as an empty
    /// string, everything else as its JSON text.
    pub fn display_value(&self, accessor: &str) -> String {
        if accessor == CONFIG_KEY_FIELD {
            return self.config_key.to_string();
        }
        match self.fields.get(accessor) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Accessor names of the display fields, `configKey` excluded.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
