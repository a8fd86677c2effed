use miette::Diagnostic;
use thiserror::Error;

/// Result type for tempoweave operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("workflow names must be non-empty strings")]
    #[diagnostic(
        code(tempoweave::empty_workflow_name),
        help("pass a human-readable name such as 'orderSync'")
    )]
    EmptyWorkflowName,

    #[error("cannot call {operation}() before defining the first step")]
    #[diagnostic(
        code(tempoweave::not_started),
        help("add the first step with then() before fanning out")
    )]
    NotStarted { operation: &'static str },

    #[error("parallel() requires at least one activity reference")]
    #[diagnostic(code(tempoweave::empty_parallel))]
    EmptyParallel,

    #[error("cannot commit a workflow without any steps")]
    #[diagnostic(
        code(tempoweave::empty_workflow),
        help("call then() at least once before commit()")
    )]
    EmptyWorkflow,

    #[error("activity keys must be non-empty strings")]
    #[diagnostic(
        code(tempoweave::empty_activity_key),
        help("set a non-blank id in the activity config, or use a named activity")
    )]
    EmptyActivityKey,

    #[error("workflow collections require at least one build result")]
    #[diagnostic(code(tempoweave::empty_collection))]
    EmptyCollection,

    #[error("duplicate workflow name '{name}' at index {index}")]
    #[diagnostic(
        code(tempoweave::duplicate_workflow_name),
        help("workflow names must be unique within a collection")
    )]
    DuplicateWorkflowName { index: usize, name: String },

    #[error("activity '{key}' is defined multiple times with conflicting definitions")]
    #[diagnostic(
        code(tempoweave::activity_conflict),
        help("rename one of the activities or give it a distinct id")
    )]
    ActivityConflict { key: String },
}
