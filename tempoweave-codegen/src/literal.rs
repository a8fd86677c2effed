//! Rendering of configuration values as TypeScript expressions.
//!
//! Proxy options arrive as structured [`ConfigValue`]s and have to come out
//! the other side as the literal text a developer would have written: bare
//! keys where possible, single-quoted strings, two-space indentation, and a
//! trailing comma on every multiline entry.

use tempoweave_core::{ConfigMap, ConfigValue};

use crate::Indent;
use crate::naming::format_property_key;

/// Render a single value as a TypeScript expression.
pub fn value_literal(value: &ConfigValue) -> String {
    render_value(value, 0)
}

/// Render a map as a TypeScript object literal.
pub fn object_literal(map: &ConfigMap) -> String {
    render_map(map, 0)
}

fn render_value(value: &ConfigValue, depth: usize) -> String {
    match value {
        ConfigValue::Undefined => "undefined".to_owned(),
        ConfigValue::Null => "null".to_owned(),
        ConfigValue::Bool(flag) => flag.to_string(),
        ConfigValue::Number(number) => number_literal(*number),
        ConfigValue::String(text) => string_literal(text),
        ConfigValue::Timestamp(epoch_ms) => format!("new Date({epoch_ms})"),
        ConfigValue::Pattern { source, flags } => format!("/{source}/{flags}"),
        ConfigValue::List(items) => render_list(items, depth),
        ConfigValue::Map(map) => render_map(map, depth),
        // A callable has no literal form.
        ConfigValue::Handle(_) => "undefined".to_owned(),
    }
}

fn render_map(map: &ConfigMap, depth: usize) -> String {
    let entries: Vec<(&String, &ConfigValue)> = map
        .iter()
        .filter(|(_, value)| !matches!(value, ConfigValue::Undefined | ConfigValue::Handle(_)))
        .collect();
    if entries.is_empty() {
        return "{}".to_owned();
    }

    let unit = Indent::TYPESCRIPT.as_str();
    let inner = unit.repeat(depth + 1);
    let closing = unit.repeat(depth);

    let mut out = String::from("{\n");
    for (key, value) in entries {
        out.push_str(&inner);
        out.push_str(&format_property_key(key));
        out.push_str(": ");
        out.push_str(&render_value(value, depth + 1));
        out.push_str(",\n");
    }
    out.push_str(&closing);
    out.push('}');
    out
}

fn render_list(items: &[ConfigValue], depth: usize) -> String {
    if items.is_empty() {
        return "[]".to_owned();
    }

    let unit = Indent::TYPESCRIPT.as_str();
    let inner = unit.repeat(depth + 1);
    let closing = unit.repeat(depth);

    let mut out = String::from("[\n");
    for item in items {
        out.push_str(&inner);
        out.push_str(&render_value(item, depth + 1));
        out.push_str(",\n");
    }
    out.push_str(&closing);
    out.push(']');
    out
}

/// Whole numbers print without a fractional part, matching how they would
/// have been typed; non-finite values use their global names.
fn number_literal(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_owned();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if number == number.trunc() && number.abs() < 9_007_199_254_740_992.0 {
        return format!("{}", number as i64);
    }
    format!("{number}")
}

fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}
