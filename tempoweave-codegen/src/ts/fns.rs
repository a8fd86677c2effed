//! TypeScript function declaration builder.

use crate::CodeBuilder;

/// A typed function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for a function declaration.
#[derive(Debug, Clone)]
pub struct Function {
    name: String,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: false,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Export the declaration.
    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Mark the function `async`.
    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type annotation.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add one body line. Empty lines render as blank lines, with no
    /// indentation written.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add body content, splitting embedded newlines into lines.
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_owned());
        }
        self
    }

    /// Render the declaration into the builder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.block_with_close(&self.signature(), "}", |builder| {
            builder.each(&self.body, |builder, line| {
                if line.is_empty() {
                    builder.blank()
                } else {
                    builder.line(line)
                }
            })
        })
    }

    /// Render the declaration on its own.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }

    fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let params = self
            .params
            .iter()
            .map(|param| format!("{}: {}", param.name, param.ty))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}{}function {}({}): {} {{",
                export, async_kw, self.name, params, ret
            ),
            None => format!("{}{}function {}({}) {{", export, async_kw, self.name, params),
        }
    }
}
