//! TypeScript source generation for tempoweave workflow pipelines.
//!
//! This crate turns an ordered stage plan into the source of a
//! [Temporal](https://temporal.io/) workflow module: imports, a
//! `proxyActivities` binding, one generated statement group per stage, and an
//! exported async workflow function.
//!
//! # Usage
//!
//! This crate is driven by the `tempoweave` builder. You typically don't need
//! to use it directly.
//!
//! ```
//! use tempoweave_codegen::workflow_source;
//! use tempoweave_core::{BuildOptions, Stage};
//!
//! let stages = vec![Stage::Step { key: "fetch".into() }];
//! let generated = workflow_source(&stages, &BuildOptions::new("sync"));
//!
//! assert_eq!(generated.name, "sync");
//! assert!(generated.source.contains("export async function sync"));
//! ```
//!
//! # Module Organization
//!
//! - [`CodeBuilder`] - Indentation-aware text assembly
//! - [`ts`] - Builders for the TypeScript constructs emitted modules use
//! - [`naming`] - Identifier, property-key, and file-name hygiene
//! - [`literal`] - Configuration values rendered as TypeScript expressions
//! - [`workflow_source`] - The workflow module generator itself

mod code_builder;
mod indent;
mod workflow;

pub mod literal;
pub mod naming;
pub mod ts;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use workflow::{DEFAULT_ACTIVITIES_IMPORT, GeneratedWorkflow, workflow_source};
