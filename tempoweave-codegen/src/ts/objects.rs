//! Object literal builder for generated modules.

use crate::CodeBuilder;
use crate::naming::format_property_key;

/// Builder for an object literal.
///
/// Keys render bare when they are valid identifiers and single-quoted
/// otherwise; every property carries a trailing comma.
#[derive(Debug, Clone, Default)]
pub struct ObjectLit {
    entries: Vec<(String, String)>,
}

impl ObjectLit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one `key: expression` property.
    pub fn entry(mut self, key: impl Into<String>, expression: impl Into<String>) -> Self {
        self.entries.push((key.into(), expression.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the literal into the builder. The closing brace is written
    /// without a trailing newline so callers can continue the line.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.entries.is_empty() {
            return builder.raw("{}");
        }

        builder
            .line("{")
            .indent()
            .each(&self.entries, |builder, (key, expression)| {
                builder.line(&format!("{}: {},", format_property_key(key), expression))
            })
            .dedent()
            .raw("}")
    }

    /// Render the literal on its own.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
