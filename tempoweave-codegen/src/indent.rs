//! Indentation styles for generated source text.

/// Indentation style used by a [`CodeBuilder`](crate::CodeBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Indent with the given number of spaces per level.
    Spaces(u8),
    /// Indent with one tab per level.
    Tab,
}

impl Indent {
    /// Two-space indentation, the convention for generated TypeScript.
    pub const TYPESCRIPT: Indent = Indent::Spaces(2);

    /// The string written once per indentation level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Indent::Spaces(2) => "  ",
            Indent::Spaces(4) => "    ",
            Indent::Spaces(8) => "        ",
            Indent::Spaces(_) => "    ",
            Indent::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::TYPESCRIPT
    }
}
