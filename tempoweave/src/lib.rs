//! Fluent builder and TypeScript generator for Temporal workflow pipelines.
//!
//! A workflow is described as an ordered pipeline: sequential steps chained
//! with [`then`](WorkflowBuilder::then), fan-out stages with
//! [`parallel`](WorkflowBuilder::parallel). Every referenced activity is
//! registered under a stable key, structurally identical registrations
//! collapse into one entry, and [`commit`](WorkflowBuilder::commit) generates
//! the TypeScript workflow module a Temporal worker runs.
//!
//! # Usage
//!
//! ```
//! use tempoweave::{Activity, BuildOptions, WorkflowBuilder, collect_workflows};
//!
//! # fn main() -> tempoweave::Result<()> {
//! let fetch = Activity::named("fetchOrders", |input| Ok(input));
//! let enrich = Activity::named("enrichOrders", |input| Ok(input));
//! let score = Activity::named("scoreOrders", |input| Ok(input));
//!
//! let orders = WorkflowBuilder::new(BuildOptions::new("orderSync"))?
//!     .then(fetch)?
//!     .parallel(vec![enrich.into(), score.into()])?
//!     .commit()?;
//!
//! let collection = collect_workflows(std::slice::from_ref(&orders))?;
//! let layout = collection.layout();
//!
//! assert_eq!(layout.files().len(), 2);
//! assert_eq!(layout.entry_point(), "index.ts");
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`WorkflowBuilder`] - The pipeline builder and activity registry
//! - [`collect_workflows`] - Merging build results into one collection
//! - [`BundleLayout`] - On-disk layout for the generated modules
//! - [`Error`] - Everything that can go wrong, as diagnostics

mod builder;
mod bundle;
mod collection;
mod error;
mod types;

pub use builder::WorkflowBuilder;
pub use bundle::{BundleLayout, ENTRY_POINT, SourceFile};
pub use collection::collect_workflows;
pub use error::{Error, Result};
pub use types::{BuildResult, CollectionResult, WorkflowArtifact};

pub use tempoweave_core::{
    Activity, ActivityConfig, ActivityRef, ActivityResult, BuildOptions, ConfigMap, ConfigValue,
    ProxyOptions, RegisteredActivity, Stage, deep_equal,
};
