//! Merging committed workflows into one deployable collection.

use std::collections::HashSet;

use indexmap::IndexMap;
use tempoweave_core::RegisteredActivity;

use crate::error::{Error, Result};
use crate::types::{BuildResult, CollectionResult};

/// Merge several build results into a single collection.
///
/// Workflow names must be unique across the collection. Name validation runs
/// as a pre-pass, so a duplicate fails before any activity merging happens.
/// Activity keys may repeat across workflows only when their registrations
/// match exactly; anything else is a conflict.
pub fn collect_workflows(results: &[BuildResult]) -> Result<CollectionResult> {
    if results.is_empty() {
        return Err(Error::EmptyCollection);
    }

    let mut seen = HashSet::new();
    for (index, result) in results.iter().enumerate() {
        if !seen.insert(result.workflow_name.as_str()) {
            return Err(Error::DuplicateWorkflowName {
                index,
                name: result.workflow_name.clone(),
            });
        }
    }

    let mut workflows = Vec::with_capacity(results.len());
    let mut activities: IndexMap<String, RegisteredActivity> = IndexMap::new();

    for result in results {
        workflows.push(result.artifact());

        for (key, entry) in &result.activities {
            match activities.get(key) {
                None => {
                    activities.insert(key.clone(), entry.clone());
                }
                Some(existing) if existing.matches(entry) => {}
                Some(_) => {
                    return Err(Error::ActivityConflict { key: key.clone() });
                }
            }
        }
    }

    Ok(CollectionResult {
        workflows,
        activities,
    })
}
