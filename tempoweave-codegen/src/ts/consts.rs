//! TypeScript const declaration builder.

use crate::CodeBuilder;

/// Builder for a const declaration.
///
/// Declarations are module-private unless [`exported`](Const::exported) and
/// carry no trailing semicolon, matching the emitted module style.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: String,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            exported: false,
        }
    }

    /// Export the declaration.
    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Render the declaration into the builder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let export = if self.exported { "export " } else { "" };

        // Multiline values keep their own layout after the opening line.
        let mut lines = self.value.lines();
        let first = lines.next().unwrap_or_default();
        let builder = builder.line(&format!("{}const {} = {}", export, self.name, first));
        lines.fold(builder, |builder, line| builder.line(line))
    }

    /// Render the declaration on its own.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_const() {
        let decl = Const::new("answer", "42");
        assert_eq!(decl.build(), "const answer = 42\n");
    }

    #[test]
    fn exported_const() {
        let decl = Const::new("answer", "42").exported();
        assert_eq!(decl.build(), "export const answer = 42\n");
    }

    #[test]
    fn multiline_value_keeps_its_layout() {
        let decl = Const::new("options", "{\n  startToCloseTimeout: '1 minute',\n}");
        assert_eq!(
            decl.build(),
            "const options = {\n  startToCloseTimeout: '1 minute',\n}\n"
        );
    }

    #[test]
    fn call_wrapped_multiline_value() {
        let decl = Const::new(
            "activities",
            "proxyActivities<Activities>({\n  startToCloseTimeout: '1 minute',\n})",
        );
        assert_eq!(
            decl.build(),
            "const activities = proxyActivities<Activities>({\n  startToCloseTimeout: '1 minute',\n})\n"
        );
    }
}
