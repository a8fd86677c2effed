//! Temporal workflow module generation.
//!
//! Turns an ordered stage plan into the TypeScript module a developer would
//! have written by hand: a `proxyActivities` binding, one awaited call per
//! sequential step, a `Promise.all` fan-out per parallel stage, and a final
//! `return` of the last stage's result.

use tempoweave_core::{BuildOptions, ConfigMap, ConfigValue, ProxyOptions, Stage};

use crate::CodeBuilder;
use crate::literal::object_literal;
use crate::naming::IdentScope;
use crate::ts::{Const, Function, Import, ObjectLit, Param};

/// Import path used for the activity interface when none is configured.
pub const DEFAULT_ACTIVITIES_IMPORT: &str = "./activities";

/// A generated workflow module.
///
/// `name` is the exported function's identifier (the sanitized workflow
/// name). `source` carries no trailing newline; writers append one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWorkflow {
    pub name: String,
    pub source: String,
}

/// Generate the workflow module source for a stage plan.
///
/// Generation is deterministic: the same plan and options always produce
/// byte-identical output. Top-level identifiers and function locals are
/// uniquified in two independent scopes, so a workflow named `activities`
/// simply pushes the proxy binding to `activities_1`.
pub fn workflow_source(stages: &[Stage], options: &BuildOptions) -> GeneratedWorkflow {
    let mut top_level = IdentScope::new();
    let name = top_level.claim(Some(&options.workflow_name), &options.workflow_name);
    let proxy = top_level.claim(Some("activities"), "activities");

    let import_path = options
        .activities_import_path
        .as_deref()
        .unwrap_or(DEFAULT_ACTIVITIES_IMPORT);

    let mut locals = IdentScope::new();
    locals.reserve("input");
    let mut current = "input".to_owned();

    let mut function = Function::new(&name)
        .exported()
        .async_()
        .param(Param::new("input", "unknown"))
        .returns("Promise<unknown>");

    for (index, stage) in stages.iter().enumerate() {
        match stage {
            Stage::Step { key } => {
                let result = locals.claim(None, &format!("step{index}"));
                function = function
                    .body_line(format!("const {result} = await {proxy}.{key}({current});"))
                    .body_line("");
                current = result;
            }
            Stage::Parallel { keys } => {
                let slots: Vec<String> = (0..keys.len())
                    .map(|slot| locals.claim(None, &format!("parallel{index}_{slot}")))
                    .collect();

                function = function.body_line(format!(
                    "const [{}] = await Promise.all([",
                    slots.join(", ")
                ));
                for (slot, key) in keys.iter().enumerate() {
                    let separator = if slot + 1 == keys.len() { "" } else { "," };
                    function = function.body_line(format!("  {proxy}.{key}({current}){separator}"));
                }
                function = function.body_line("])");

                let aggregate = locals.claim(None, &format!("parallel{index}"));
                let record = keys
                    .iter()
                    .zip(&slots)
                    .fold(ObjectLit::new(), |record, (key, slot)| {
                        record.entry(key.clone(), slot.clone())
                    });
                function = function
                    .body(format!("const {aggregate} = {}", record.build()))
                    .body_line("");
                current = aggregate;
            }
        }
    }

    function = function.body_line(format!("return {current};"));

    let proxy_binding = Const::new(
        &proxy,
        format!(
            "proxyActivities<Activities>({})",
            proxy_options_expr(options.proxy_options.as_ref())
        ),
    );

    let rendered = Import::new("@temporalio/workflow")
        .named("proxyActivities")
        .render(CodeBuilder::typescript());
    let rendered = Import::new(import_path)
        .named("Activities")
        .type_only()
        .render(rendered)
        .blank();
    let rendered = proxy_binding.render(rendered).blank();
    let mut source = function.render(rendered).build();

    // Module writers own the file's trailing newline.
    if source.ends_with('\n') {
        source.pop();
    }

    GeneratedWorkflow { name, source }
}

/// Render the `proxyActivities` argument. Raw text is trusted verbatim once
/// trimmed; blank raw text and absent options fall back to the default
/// one-minute timeout.
fn proxy_options_expr(options: Option<&ProxyOptions>) -> String {
    match options {
        Some(ProxyOptions::Raw(expression)) if !expression.trim().is_empty() => {
            expression.trim().to_owned()
        }
        Some(ProxyOptions::Literal(map)) => object_literal(map),
        _ => object_literal(&default_proxy_options()),
    }
}

fn default_proxy_options() -> ConfigMap {
    ConfigMap::from([(
        "startToCloseTimeout".to_owned(),
        ConfigValue::from("1 minute"),
    )])
}
