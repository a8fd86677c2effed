//! Code builder utility for generating properly indented source text.

use crate::Indent;

/// Fluent API for building source text with proper indentation.
///
/// # Example
///
/// ```
/// use tempoweave_codegen::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("function main() {")
///     .indent()
///     .line("return 1;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function main() {\n  return 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use tempoweave_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::typescript()
    ///     .block_with_close("function main() {", "}", |b: CodeBuilder| {
    ///         b.line("return 1;")
    ///     })
    ///     .build();
    ///
    /// assert_eq!(code, "function main() {\n  return 1;\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::typescript().line("const x = 1").build();
        assert_eq!(code, "const x = 1\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::typescript()
            .line("function foo() {")
            .indent()
            .line("return 1;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::typescript()
            .block_with_close("function foo() {", "}", |b| b.line("return 1;"))
            .build();

        assert_eq!(code, "function foo() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::typescript()
            .line("import { a } from 'b'")
            .blank()
            .line("const x = a")
            .build();

        assert_eq!(code, "import { a } from 'b'\n\nconst x = a\n");
    }

    #[test]
    fn test_raw_appends_without_newline() {
        let code = CodeBuilder::typescript().raw("const x = ").raw("{}").build();
        assert_eq!(code, "const x = {}");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::typescript()
            .line("const colors = [")
            .indent()
            .each(["'red'", "'green'", "'blue'"], |b, color| {
                b.line(&format!("{},", color))
            })
            .dedent()
            .line("]")
            .build();

        assert_eq!(
            code,
            "const colors = [\n  'red',\n  'green',\n  'blue',\n]\n"
        );
    }

    #[test]
    fn test_dedent_saturates_at_zero() {
        let code = CodeBuilder::typescript().dedent().line("top").build();
        assert_eq!(code, "top\n");
    }

    #[test]
    fn test_tab_indentation() {
        let code = CodeBuilder::new(Indent::Tab)
            .line("block {")
            .indent()
            .line("inner")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "block {\n\tinner\n}\n");
    }
}
