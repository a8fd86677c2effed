//! Core data model for the tempoweave workflow pipeline builder.
//!
//! This crate provides the shared type definitions used across the
//! tempoweave pipeline: activity handles and registry entries, stage plans,
//! build options, and the JavaScript-like configuration values they carry.
//!
//! # Architecture
//!
//! ```text
//! caller API (tempoweave) → tempoweave-core (shared types) → tempoweave-codegen
//! ```
//!
//! The types here are designed to be:
//! - Free of any code-generation concern (no source text, no identifiers)
//! - Deterministic (every key→value mapping preserves insertion order)
//! - Cheap to copy (activity callables are shared behind `Arc`)

mod activity;
mod equal;
mod plan;
mod value;

pub use activity::{Activity, ActivityConfig, ActivityRef, ActivityResult, RegisteredActivity};
pub use equal::deep_equal;
pub use plan::{BuildOptions, ProxyOptions, Stage};
pub use value::{ConfigMap, ConfigValue};
