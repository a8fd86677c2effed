//! End-to-end pipeline builder tests through the public API.

use serde_json::json;
use tempoweave::{
    Activity, ActivityConfig, BuildOptions, ConfigValue, Error, WorkflowBuilder, deep_equal,
};

fn passthrough(name: &str) -> Activity {
    Activity::named(name, |input| Ok(input))
}

fn builder(name: &str) -> WorkflowBuilder {
    WorkflowBuilder::new(BuildOptions::new(name)).unwrap()
}

#[test]
fn full_pipeline_generates_module_and_registry() {
    let result = builder("orderSync")
        .then(passthrough("fetchOrders"))
        .unwrap()
        .parallel(vec![
            passthrough("enrichOrders").into(),
            passthrough("scoreOrders").into(),
        ])
        .unwrap()
        .then(passthrough("storeOrders"))
        .unwrap()
        .commit()
        .unwrap();

    assert_eq!(result.workflow_name, "orderSync");
    assert_eq!(
        result.activities.keys().collect::<Vec<_>>(),
        ["fetchOrders", "enrichOrders", "scoreOrders", "storeOrders"],
    );

    let source = &result.source;
    assert!(source.contains("export async function orderSync(input: unknown): Promise<unknown> {"));
    assert!(source.contains("const step0 = await activities.fetchOrders(input);"));
    assert!(source.contains("const [parallel1_0, parallel1_1] = await Promise.all(["));
    assert!(source.contains("activities.enrichOrders(step0),"));
    assert!(source.contains("activities.scoreOrders(step0)"));
    assert!(source.contains("enrichOrders: parallel1_0,"));
    assert!(source.contains("scoreOrders: parallel1_1,"));
    assert!(source.contains("const step2 = await activities.storeOrders(parallel1);"));
    assert!(source.contains("return step2;"));
}

#[test]
fn a_step_reused_in_a_fan_out_keeps_one_registration() {
    let fetch = passthrough("fetch");
    let refresh = fetch.clone();

    let result = builder("sync")
        .then(fetch)
        .unwrap()
        .parallel(vec![refresh.into(), passthrough("audit").into()])
        .unwrap()
        .commit()
        .unwrap();

    assert_eq!(result.activities.keys().collect::<Vec<_>>(), ["fetch", "audit"]);
    assert!(result.source.contains("activities.fetch(step0),"));
}

#[test]
fn anonymous_activities_count_across_stage_kinds() {
    let result = builder("sync")
        .then(Activity::new(|input| Ok(input)))
        .unwrap()
        .parallel(vec![
            Activity::new(|input| Ok(input)).into(),
            Activity::new(|input| Ok(input)).into(),
        ])
        .unwrap()
        .commit()
        .unwrap();

    assert_eq!(
        result.activities.keys().collect::<Vec<_>>(),
        ["step_1", "step_2", "step_3"],
    );
}

#[test]
fn configured_references_carry_their_options_into_the_registry() {
    let fetch = passthrough("fetch").with_config(
        ActivityConfig::new()
            .id("fetchPrimary")
            .option("startToCloseTimeout", "2 minutes"),
    );

    let result = builder("sync").then(fetch).unwrap().commit().unwrap();

    assert_eq!(result.activities.keys().collect::<Vec<_>>(), ["fetchPrimary"]);
    let entry = &result.activities["fetchPrimary"];
    assert_eq!(entry.name, "fetch");

    let config = entry.config.as_ref().unwrap();
    assert_eq!(config.id.as_deref(), Some("fetchPrimary"));
    assert!(deep_equal(
        &config.options["startToCloseTimeout"],
        &ConfigValue::from("2 minutes"),
    ));
}

#[test]
fn implementations_expose_callable_activities() {
    let double = Activity::named("double", |input| {
        let n = input.as_i64().unwrap_or(0);
        Ok(json!(n * 2))
    });

    let result = builder("math").then(double).unwrap().commit().unwrap();
    let implementations = result.implementations();

    let out = implementations["double"].invoke(json!(21)).unwrap();
    assert_eq!(out, json!(42));
}

#[test]
fn misuse_errors_read_like_usage_guidance() {
    let err = builder("sync").parallel(Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot call parallel() before defining the first step"
    );

    let err = builder("sync").commit().unwrap_err();
    assert_eq!(err.to_string(), "cannot commit a workflow without any steps");

    let err = WorkflowBuilder::new(BuildOptions::new("")).unwrap_err();
    assert!(matches!(err, Error::EmptyWorkflowName));
}
