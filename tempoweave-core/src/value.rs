//! JavaScript-like configuration values.

use indexmap::IndexMap;

use crate::activity::Activity;

/// Ordered key/value record used for activity and proxy configuration.
///
/// Insertion order is preserved so that rendered literals and merged
/// registries come out the same on every run.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A configuration value with JavaScript-like semantics.
///
/// `Undefined` is the "absent" marker: record entries holding it are dropped
/// by [`deep_equal`](crate::deep_equal) at each comparison frame and skipped
/// when configurations are stored or rendered. `Null` is an ordinary value
/// and never coerces to `Undefined`.
#[derive(Debug, Clone)]
pub enum ConfigValue {
    /// Absent value marker.
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// A point in time, in milliseconds since the Unix epoch.
    Timestamp(i64),
    /// A regular-expression literal, stored as written.
    Pattern { source: String, flags: String },
    List(Vec<ConfigValue>),
    Map(ConfigMap),
    /// An opaque callable, compared by reference identity only.
    Handle(Activity),
}

impl ConfigValue {
    /// Build a [`ConfigValue::Pattern`] from its source and flags.
    pub fn pattern(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self::Pattern {
            source: source.into(),
            flags: flags.into(),
        }
    }

    /// Whether this value is the absent marker.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(values: Vec<ConfigValue>) -> Self {
        Self::List(values)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        Self::Map(map)
    }
}

impl From<Activity> for ConfigValue {
    fn from(activity: Activity) -> Self {
        Self::Handle(activity)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(fields) => Self::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}
