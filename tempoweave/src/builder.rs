//! Fluent workflow pipeline builder.
//!
//! A builder accumulates an ordered plan of sequential and parallel stages,
//! registering each referenced activity under a stable key as it goes.
//! Committing generates the TypeScript workflow module and hands back the
//! activity registry alongside it.

use indexmap::IndexMap;
use tempoweave_codegen::workflow_source;
use tempoweave_core::{
    Activity, ActivityConfig, ActivityRef, BuildOptions, RegisteredActivity, Stage,
};

use crate::error::{Error, Result};
use crate::types::BuildResult;

/// Builder for a single workflow pipeline.
///
/// Stage methods consume the builder and return it, so misuse surfaces as an
/// error at the exact call: `parallel()` before the first step, an empty
/// fan-out, or a commit with no stages at all.
///
/// # Example
///
/// ```
/// use tempoweave::{Activity, BuildOptions, WorkflowBuilder};
///
/// # fn main() -> tempoweave::Result<()> {
/// let fetch = Activity::named("fetchOrders", |input| Ok(input));
/// let enrich = Activity::named("enrichOrders", |input| Ok(input));
/// let score = Activity::named("scoreOrders", |input| Ok(input));
///
/// let result = WorkflowBuilder::new(BuildOptions::new("orderSync"))?
///     .then(fetch)?
///     .parallel(vec![enrich.into(), score.into()])?
///     .commit()?;
///
/// assert_eq!(result.workflow_name, "orderSync");
/// assert_eq!(
///     result.activities.keys().collect::<Vec<_>>(),
///     ["fetchOrders", "enrichOrders", "scoreOrders"],
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WorkflowBuilder {
    options: BuildOptions,
    plan: Vec<Stage>,
    registry: IndexMap<String, RegisteredActivity>,
    started: bool,
    auto_increment: u64,
}

impl WorkflowBuilder {
    /// Create a builder for the named workflow. The name is trimmed and must
    /// not be blank.
    pub fn new(options: BuildOptions) -> Result<Self> {
        let trimmed = options.workflow_name.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyWorkflowName);
        }

        let options = BuildOptions {
            workflow_name: trimmed.to_owned(),
            ..options
        };
        Ok(Self {
            options,
            plan: Vec::new(),
            registry: IndexMap::new(),
            started: false,
            auto_increment: 0,
        })
    }

    /// Append a sequential step awaiting the referenced activity.
    pub fn then(self, reference: impl Into<ActivityRef>) -> Result<Self> {
        self.push_step(reference.into(), ActivityConfig::new())
    }

    /// Append a sequential step with an inline configuration. Inline entries
    /// override the reference's own configuration key by key.
    pub fn then_with(
        self,
        reference: impl Into<ActivityRef>,
        config: ActivityConfig,
    ) -> Result<Self> {
        self.push_step(reference.into(), config)
    }

    /// Append a fan-out stage running every referenced activity against the
    /// current value and aggregating the results by activity key.
    ///
    /// Requires a defined first step and at least one reference.
    pub fn parallel(mut self, references: Vec<ActivityRef>) -> Result<Self> {
        if !self.started {
            return Err(Error::NotStarted {
                operation: "parallel",
            });
        }
        if references.is_empty() {
            return Err(Error::EmptyParallel);
        }

        let mut keys = Vec::with_capacity(references.len());
        for reference in references {
            let (activity, config) = normalize(reference, ActivityConfig::new());
            keys.push(self.register(activity, config)?);
        }

        self.plan.push(Stage::Parallel { keys });
        Ok(self)
    }

    /// Generate the workflow module and hand back the build product.
    pub fn commit(self) -> Result<BuildResult> {
        if !self.started {
            return Err(Error::EmptyWorkflow);
        }

        let generated = workflow_source(&self.plan, &self.options);
        Ok(BuildResult {
            workflow_name: generated.name,
            source: generated.source,
            activities: self.registry,
        })
    }

    fn push_step(mut self, reference: ActivityRef, inline: ActivityConfig) -> Result<Self> {
        let (activity, config) = normalize(reference, inline);
        let key = self.register(activity, config)?;

        self.plan.push(Stage::Step { key });
        self.started = true;
        Ok(self)
    }

    /// Register an activity and return its assigned key. The base key is the
    /// configured id when present, otherwise the activity's trimmed name,
    /// otherwise an auto-generated `step_{n}`.
    fn register(&mut self, activity: Activity, config: ActivityConfig) -> Result<String> {
        let base_key = match &config.id {
            Some(id) => id.clone(),
            None => self.derive_key(&activity),
        };
        self.assign_key(&base_key, activity, config)
    }

    fn derive_key(&mut self, activity: &Activity) -> String {
        if let Some(name) = activity.name() {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                return trimmed.to_owned();
            }
        }

        self.auto_increment += 1;
        format!("step_{}", self.auto_increment)
    }

    /// Probe `candidate`, then `candidate_1`, `candidate_2`, … until a key is
    /// vacant or holds a matching registration. The candidate entry is built
    /// per probe because its display name may fall back to the probe key.
    fn assign_key(
        &mut self,
        candidate: &str,
        activity: Activity,
        config: ActivityConfig,
    ) -> Result<String> {
        let normalized = candidate.trim();
        if normalized.is_empty() {
            return Err(Error::EmptyActivityKey);
        }

        let prepared = config.prepared();
        let mut counter = 0u64;
        loop {
            let key = if counter == 0 {
                normalized.to_owned()
            } else {
                format!("{normalized}_{counter}")
            };
            counter += 1;

            let entry = registered_entry(&activity, prepared.clone(), &key);
            match self.registry.get(&key) {
                None => {
                    self.registry.insert(key.clone(), entry);
                    return Ok(key);
                }
                Some(existing) if existing.matches(&entry) => return Ok(key),
                Some(_) => continue,
            }
        }
    }
}

/// Split a reference into its activity and effective configuration, merging
/// inline entries over the reference's own.
fn normalize(reference: ActivityRef, inline: ActivityConfig) -> (Activity, ActivityConfig) {
    match reference {
        ActivityRef::Bare(activity) => (activity, inline),
        ActivityRef::Configured { activity, config } => {
            let mut merged = config;
            if inline.id.is_some() {
                merged.id = inline.id;
            }
            for (key, value) in inline.options {
                merged.options.insert(key, value);
            }
            (activity, merged)
        }
    }
}

fn registered_entry(
    activity: &Activity,
    config: Option<ActivityConfig>,
    key: &str,
) -> RegisteredActivity {
    let name = match activity.name().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_owned(),
        _ => key.to_owned(),
    };

    RegisteredActivity {
        implementation: activity.clone(),
        config,
        name,
    }
}
