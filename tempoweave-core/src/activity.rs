//! Activity handles, references, configuration, and registry entries.

use std::fmt;
use std::sync::Arc;

use crate::equal::maps_equal;
use crate::value::{ConfigMap, ConfigValue};

/// Outcome of one activity invocation.
pub type ActivityResult = eyre::Result<serde_json::Value>;

type ActivityFn = dyn Fn(serde_json::Value) -> ActivityResult + Send + Sync;

/// An opaque activity implementation.
///
/// The callable is shared behind an `Arc`: cloning a handle preserves its
/// identity, and [`same_implementation`](Self::same_implementation) is true
/// only for handles cloned from the same construction. Two separately
/// constructed activities are never the same implementation, even when their
/// names and behavior match.
#[derive(Clone)]
pub struct Activity {
    func: Arc<ActivityFn>,
    name: Option<String>,
}

impl Activity {
    /// Create an anonymous activity.
    ///
    /// Anonymous activities registered without an explicit id receive
    /// auto-generated `step_<n>` keys.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(serde_json::Value) -> ActivityResult + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            name: None,
        }
    }

    /// Create a named activity. The name doubles as the default registry key.
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(serde_json::Value) -> ActivityResult + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            name: Some(name.into()),
        }
    }

    /// The activity's intrinsic name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the underlying callable.
    pub fn invoke(&self, input: serde_json::Value) -> ActivityResult {
        (self.func)(input)
    }

    /// Reference identity: true only when both handles share one callable.
    pub fn same_implementation(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }

    /// Pair this activity with a configuration, producing a reference
    /// suitable for `then`/`parallel`.
    pub fn with_config(self, config: ActivityConfig) -> ActivityRef {
        ActivityRef::Configured {
            activity: self,
            config,
        }
    }
}

impl fmt::Debug for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activity")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An activity as accepted by builder calls: bare, or paired with a
/// configuration.
#[derive(Debug, Clone)]
pub enum ActivityRef {
    Bare(Activity),
    Configured {
        activity: Activity,
        config: ActivityConfig,
    },
}

impl From<Activity> for ActivityRef {
    fn from(activity: Activity) -> Self {
        Self::Bare(activity)
    }
}

/// Configuration attached to an activity registration: an optional explicit
/// registry id plus an open option map.
#[derive(Debug, Clone, Default)]
pub struct ActivityConfig {
    pub id: Option<String>,
    pub options: ConfigMap,
}

impl ActivityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit registry id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add one option entry.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Normalize for storage: drop top-level `Undefined`-valued options, and
    /// collapse to `None` when nothing remains and no id is set.
    ///
    /// The drop is top-level only; nested maps keep their absent markers and
    /// are handled per frame by [`deep_equal`](crate::deep_equal).
    pub fn prepared(mut self) -> Option<Self> {
        self.options.retain(|_, value| !value.is_undefined());

        if self.id.is_none() && self.options.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    fn structurally_equal(&self, other: &Self) -> bool {
        self.id == other.id && maps_equal(&self.options, &other.options)
    }
}

/// One registry entry: the implementation handle, its prepared configuration,
/// and a display name (the activity's own name, or the registry key).
#[derive(Debug, Clone)]
pub struct RegisteredActivity {
    pub implementation: Activity,
    pub config: Option<ActivityConfig>,
    pub name: String,
}

impl RegisteredActivity {
    /// Whether another registration may share this one's key: same
    /// implementation by identity, structurally equal configuration, and the
    /// same display name.
    pub fn matches(&self, other: &Self) -> bool {
        let configs_equal = match (&self.config, &other.config) {
            (None, None) => true,
            (Some(left), Some(right)) => left.structurally_equal(right),
            _ => false,
        };

        self.implementation.same_implementation(&other.implementation)
            && configs_equal
            && self.name == other.name
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn passthrough() -> Activity {
        Activity::named("passthrough", |input| Ok(input))
    }

    #[test]
    fn test_clone_shares_implementation() {
        let activity = passthrough();
        let clone = activity.clone();
        assert!(activity.same_implementation(&clone));
    }

    #[test]
    fn test_separate_constructions_are_distinct() {
        assert!(!passthrough().same_implementation(&passthrough()));
    }

    #[test]
    fn test_invoke_runs_the_callable() {
        let double = Activity::new(|input| {
            let n = input.as_i64().unwrap_or(0);
            Ok(json!(n * 2))
        });
        assert_eq!(double.invoke(json!(21)).unwrap(), json!(42));
    }

    #[test]
    fn test_bare_reference_from_activity() {
        let reference: ActivityRef = passthrough().into();
        assert!(matches!(reference, ActivityRef::Bare(_)));
    }

    #[test]
    fn test_prepared_drops_undefined_options() {
        let config = ActivityConfig::new()
            .option("timeout", "1 minute")
            .option("retries", ConfigValue::Undefined);

        let prepared = config.prepared().expect("config should survive");
        assert_eq!(prepared.options.len(), 1);
        assert!(prepared.options.contains_key("timeout"));
    }

    #[test]
    fn test_prepared_collapses_empty_config() {
        let config = ActivityConfig::new().option("only", ConfigValue::Undefined);
        assert!(config.prepared().is_none());
    }

    #[test]
    fn test_prepared_keeps_id_only_config() {
        let prepared = ActivityConfig::new().id("fetch").prepared();
        assert!(prepared.is_some());
    }

    #[test]
    fn test_matches_requires_identity_config_and_name() {
        let activity = passthrough();
        let entry = RegisteredActivity {
            implementation: activity.clone(),
            config: None,
            name: "passthrough".to_owned(),
        };

        let same = RegisteredActivity {
            implementation: activity.clone(),
            config: None,
            name: "passthrough".to_owned(),
        };
        assert!(entry.matches(&same));

        let renamed = RegisteredActivity {
            implementation: activity.clone(),
            config: None,
            name: "other".to_owned(),
        };
        assert!(!entry.matches(&renamed));

        let configured = RegisteredActivity {
            implementation: activity,
            config: ActivityConfig::new().option("retries", 3i64).prepared(),
            name: "passthrough".to_owned(),
        };
        assert!(!entry.matches(&configured));

        let different_impl = RegisteredActivity {
            implementation: passthrough(),
            config: None,
            name: "passthrough".to_owned(),
        };
        assert!(!entry.matches(&different_impl));
    }
}
