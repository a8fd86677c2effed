//! Build products: what committing and collecting workflows hands back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempoweave_core::{Activity, RegisteredActivity};

use crate::bundle::BundleLayout;

/// A committed workflow's portable form: the exported function name and the
/// module source, serialized with the camelCase field names the TypeScript
/// tooling expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowArtifact {
    pub workflow_name: String,
    pub workflow_source: String,
}

/// The product of committing a single workflow builder.
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Exported workflow function identifier (the sanitized workflow name).
    pub workflow_name: String,
    /// Generated module source, without a trailing newline.
    pub source: String,
    /// Every registered activity, keyed by its assigned key in registration
    /// order.
    pub activities: IndexMap<String, RegisteredActivity>,
}

impl BuildResult {
    /// The serializable artifact for this workflow.
    pub fn artifact(&self) -> WorkflowArtifact {
        WorkflowArtifact {
            workflow_name: self.workflow_name.clone(),
            workflow_source: self.source.clone(),
        }
    }

    /// Map each activity key to its callable implementation, the shape a
    /// worker registers.
    pub fn implementations(&self) -> IndexMap<String, Activity> {
        implementations(&self.activities)
    }
}

/// The product of merging several build results.
#[derive(Debug, Clone)]
pub struct CollectionResult {
    /// One artifact per workflow, in input order.
    pub workflows: Vec<WorkflowArtifact>,
    /// The merged activity registry.
    pub activities: IndexMap<String, RegisteredActivity>,
}

impl CollectionResult {
    /// Map each activity key to its callable implementation, the shape a
    /// worker registers.
    pub fn implementations(&self) -> IndexMap<String, Activity> {
        implementations(&self.activities)
    }

    /// Lay the generated modules out as bundle files.
    pub fn layout(&self) -> BundleLayout {
        BundleLayout::new(&self.workflows)
    }
}

fn implementations(
    activities: &IndexMap<String, RegisteredActivity>,
) -> IndexMap<String, Activity> {
    activities
        .iter()
        .map(|(key, entry)| (key.clone(), entry.implementation.clone()))
        .collect()
}
