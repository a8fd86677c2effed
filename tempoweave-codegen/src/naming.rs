//! Identifier and file-name hygiene for generated modules.
//!
//! Workflow names and activity keys are user input, so everything that lands
//! in emitted source goes through here first: identifiers are sanitized and
//! uniquified per scope, property keys are quoted when they have to be, and
//! module file names are normalized before they hit the disk layout.

use std::collections::HashSet;

/// A scope of claimed identifiers (one per top level or function body).
///
/// Claiming the same base name twice yields `name`, `name_1`, `name_2`, and
/// so on. Scopes are independent: a local may reuse a top-level name.
#[derive(Debug, Default)]
pub struct IdentScope {
    used: HashSet<String>,
}

impl IdentScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as taken without sanitizing it, for identifiers that are
    /// already part of the emitted text (such as a parameter name).
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.used.insert(name.into());
    }

    /// Claim a unique identifier derived from `raw`, falling back to
    /// `fallback` when `raw` is absent or sanitizes to nothing usable.
    ///
    /// # Example
    ///
    /// ```
    /// use tempoweave_codegen::naming::IdentScope;
    ///
    /// let mut scope = IdentScope::new();
    /// assert_eq!(scope.claim(Some("my workflow"), "workflow"), "my_workflow");
    /// assert_eq!(scope.claim(Some("my workflow"), "workflow"), "my_workflow_1");
    /// ```
    pub fn claim(&mut self, raw: Option<&str>, fallback: &str) -> String {
        let mut base = sanitize(raw.unwrap_or_default().trim());
        if is_degenerate(&base) {
            base = sanitize(fallback.trim());
        }
        if is_degenerate(&base) {
            base = "value".to_owned();
        }

        let mut candidate = base.clone();
        let mut counter = 1;
        while self.used.contains(&candidate) {
            candidate = format!("{base}_{counter}");
            counter += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Replace every character outside `[A-Za-z0-9_]` with an underscore and
/// prefix an underscore when the result would start with a digit.
fn sanitize(raw: &str) -> String {
    let mut cleaned: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        cleaned.insert(0, '_');
    }
    cleaned
}

/// Empty or all underscores: nothing of the original name survived.
fn is_degenerate(candidate: &str) -> bool {
    candidate.chars().all(|c| c == '_')
}

/// Format an object-literal property key: bare when it is already a valid
/// identifier, single-quoted (with embedded quotes escaped) otherwise.
pub fn format_property_key(key: &str) -> String {
    let mut chars = key.chars();
    let bare = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if bare {
        key.to_owned()
    } else {
        format!("'{}'", key.replace('\'', "\\'"))
    }
}

/// Turn a workflow name into a module file name ending in `.ts`.
///
/// Characters outside `[A-Za-z0-9_.-]` become underscores; names that trim
/// or sanitize away entirely fall back to `workflow.ts`.
pub fn sanitize_file_name(name: &str) -> String {
    let base: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if !base.is_empty() && !base.chars().all(|c| c == '_') {
        format!("{base}.ts")
    } else {
        "workflow.ts".to_owned()
    }
}

/// Make a file name unique within `used` by inserting `_1`, `_2`, … before
/// the extension, then record the winner in `used`.
pub fn ensure_unique_file_name(base_name: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = base_name.to_owned();
    let mut counter = 1;

    while used.contains(&candidate) {
        // A dot at position zero is a hidden file, not an extension.
        let (prefix, extension) = match base_name.rfind('.') {
            Some(dot_index) if dot_index > 0 => base_name.split_at(dot_index),
            _ => (base_name, ""),
        };
        candidate = format!("{prefix}_{counter}{extension}");
        counter += 1;
    }

    used.insert(candidate.clone());
    candidate
}

/// Strip a trailing `.ts` extension, leaving other extensions alone.
pub fn strip_extension(file_name: &str) -> &str {
    file_name.strip_suffix(".ts").unwrap_or(file_name)
}
