//! Structural equality over configuration values.
//!
//! This is the single source of truth for "are two activity registrations
//! the same" across the builder and the collection merger. No other
//! comparison logic exists for configuration data.

use crate::value::{ConfigMap, ConfigValue};

/// Deep structural equality with JavaScript-like semantics.
///
/// Rules, in order of precedence:
/// 1. Primitive values compare by value identity: `NaN` equals `NaN`,
///    positive and negative zero are distinct.
/// 2. `Null` only equals `Null`; there is no coercion with `Undefined`.
/// 3. Timestamps compare by instant, patterns by source and flags.
/// 4. Lists compare elementwise, in order.
/// 5. Maps compare by key set after dropping `Undefined`-valued entries on
///    either side at that frame; key order is irrelevant. The drop re-applies
///    per nested map through recursion.
/// 6. Callables compare by reference identity and are never descended into.
///
/// Mismatched kinds are never equal. Terminates on any finite acyclic value.
pub fn deep_equal(left: &ConfigValue, right: &ConfigValue) -> bool {
    match (left, right) {
        (ConfigValue::Undefined, ConfigValue::Undefined) => true,
        (ConfigValue::Null, ConfigValue::Null) => true,
        (ConfigValue::Bool(left), ConfigValue::Bool(right)) => left == right,
        (ConfigValue::Number(left), ConfigValue::Number(right)) => same_number(*left, *right),
        (ConfigValue::String(left), ConfigValue::String(right)) => left == right,
        (ConfigValue::Timestamp(left), ConfigValue::Timestamp(right)) => left == right,
        (
            ConfigValue::Pattern {
                source: left_source,
                flags: left_flags,
            },
            ConfigValue::Pattern {
                source: right_source,
                flags: right_flags,
            },
        ) => left_source == right_source && left_flags == right_flags,
        (ConfigValue::List(left), ConfigValue::List(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(left, right)| deep_equal(left, right))
        }
        (ConfigValue::Map(left), ConfigValue::Map(right)) => maps_equal(left, right),
        (ConfigValue::Handle(left), ConfigValue::Handle(right)) => left.same_implementation(right),
        _ => false,
    }
}

/// Value-identity comparison for numbers: `NaN` equals `NaN`, signed zeros
/// stay distinct.
fn same_number(left: f64, right: f64) -> bool {
    if left.is_nan() && right.is_nan() {
        return true;
    }
    left.to_bits() == right.to_bits()
}

/// One record-comparison frame: drop `Undefined`-valued entries from both
/// sides, then compare the remaining key sets and values order-insensitively.
pub(crate) fn maps_equal(left: &ConfigMap, right: &ConfigMap) -> bool {
    let mut left_entries = present_entries(left);
    let mut right_entries = present_entries(right);

    if left_entries.len() != right_entries.len() {
        return false;
    }

    left_entries.sort_unstable_by_key(|(key, _)| *key);
    right_entries.sort_unstable_by_key(|(key, _)| *key);

    left_entries
        .iter()
        .zip(&right_entries)
        .all(|((left_key, left_value), (right_key, right_value))| {
            left_key == right_key && deep_equal(left_value, right_value)
        })
}

fn present_entries(map: &ConfigMap) -> Vec<(&str, &ConfigValue)> {
    map.iter()
        .filter(|(_, value)| !value.is_undefined())
        .map(|(key, value)| (key.as_str(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::activity::Activity;

    use super::*;

    fn map(entries: &[(&str, ConfigValue)]) -> ConfigValue {
        ConfigValue::Map(
            entries
                .iter()
                .map(|(key, value)| ((*key).to_owned(), value.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_number_value_identity() {
        assert!(deep_equal(
            &ConfigValue::Number(f64::NAN),
            &ConfigValue::Number(f64::NAN)
        ));
        assert!(!deep_equal(
            &ConfigValue::Number(0.0),
            &ConfigValue::Number(-0.0)
        ));
        assert!(deep_equal(
            &ConfigValue::Number(1.5),
            &ConfigValue::Number(1.5)
        ));
    }

    #[test]
    fn test_null_does_not_coerce() {
        assert!(!deep_equal(&ConfigValue::Null, &ConfigValue::Undefined));
        assert!(deep_equal(&ConfigValue::Null, &ConfigValue::Null));
    }

    #[test]
    fn test_timestamps_compare_by_instant() {
        assert!(deep_equal(
            &ConfigValue::Timestamp(0),
            &ConfigValue::Timestamp(0)
        ));
        assert!(!deep_equal(
            &ConfigValue::Timestamp(0),
            &ConfigValue::Timestamp(1)
        ));
    }

    #[test]
    fn test_patterns_compare_by_source_and_flags() {
        assert!(deep_equal(
            &ConfigValue::pattern("a", "i"),
            &ConfigValue::pattern("a", "i")
        ));
        assert!(!deep_equal(
            &ConfigValue::pattern("a", "i"),
            &ConfigValue::pattern("a", "g")
        ));
    }

    #[test]
    fn test_lists_are_order_sensitive() {
        let left = ConfigValue::from(json!([1, 2]));
        let right = ConfigValue::from(json!([2, 1]));
        assert!(!deep_equal(&left, &right));
        assert!(deep_equal(&left, &ConfigValue::from(json!([1, 2]))));
    }

    #[test]
    fn test_maps_drop_undefined_entries() {
        let with_absent = map(&[("a", 1i64.into()), ("b", ConfigValue::Undefined)]);
        let without = map(&[("a", 1i64.into())]);
        assert!(deep_equal(&with_absent, &without));
    }

    #[test]
    fn test_undefined_drop_applies_per_frame() {
        let left = map(&[("outer", map(&[("x", ConfigValue::Undefined)]))]);
        let right = map(&[("outer", map(&[]))]);
        assert!(deep_equal(&left, &right));
    }

    #[test]
    fn test_maps_ignore_key_order() {
        let left = map(&[("a", 1i64.into()), ("b", 2i64.into())]);
        let right = map(&[("b", 2i64.into()), ("a", 1i64.into())]);
        assert!(deep_equal(&left, &right));
    }

    #[test]
    fn test_map_with_extra_key_is_not_equal() {
        let left = map(&[("a", 1i64.into())]);
        let right = map(&[("a", 1i64.into()), ("b", ConfigValue::Null)]);
        assert!(!deep_equal(&left, &right));
    }

    #[test]
    fn test_handles_compare_by_identity() {
        let activity = Activity::named("fetch", |input| Ok(input));
        let clone = activity.clone();
        let other = Activity::named("fetch", |input| Ok(input));

        assert!(deep_equal(
            &ConfigValue::Handle(activity.clone()),
            &ConfigValue::Handle(clone)
        ));
        assert!(!deep_equal(
            &ConfigValue::Handle(activity),
            &ConfigValue::Handle(other)
        ));
    }

    #[test]
    fn test_mismatched_kinds_are_not_equal() {
        assert!(!deep_equal(
            &ConfigValue::String("1".into()),
            &ConfigValue::Number(1.0)
        ));
        assert!(!deep_equal(&ConfigValue::List(Vec::new()), &map(&[])));
    }
}
