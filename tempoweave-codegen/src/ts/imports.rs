//! TypeScript import statement builder.

use crate::CodeBuilder;

/// Builder for an import statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    /// Create an import from the given module specifier.
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Add a named binding.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Mark this as a type-only import.
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Render the import into the builder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let statement = if self.named.is_empty() {
            format!("import '{}'", self.from)
        } else {
            let type_kw = if self.type_only { "type " } else { "" };
            format!(
                "import {}{{ {} }} from '{}'",
                type_kw,
                self.named.join(", "),
                self.from
            )
        };
        builder.line(&statement)
    }

    /// Render the import on its own.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_import() {
        let import = Import::new("@temporalio/workflow").named("proxyActivities");
        assert_eq!(
            import.build(),
            "import { proxyActivities } from '@temporalio/workflow'\n"
        );
    }

    #[test]
    fn multiple_named_bindings() {
        let import = Import::new("./helpers").named("first").named("second");
        assert_eq!(import.build(), "import { first, second } from './helpers'\n");
    }

    #[test]
    fn type_only_import() {
        let import = Import::new("./activities").named("Activities").type_only();
        assert_eq!(
            import.build(),
            "import type { Activities } from './activities'\n"
        );
    }

    #[test]
    fn side_effect_import() {
        let import = Import::new("./polyfills");
        assert_eq!(import.build(), "import './polyfills'\n");
    }
}
