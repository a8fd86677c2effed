//! Stage plans and build options.

use serde::{Deserialize, Serialize};

use crate::value::ConfigMap;

/// One stage of a pipeline, in execution order. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Stage {
    /// A single awaited activity call.
    Step { key: String },
    /// A concurrent fan-out: every key receives the same upstream value.
    Parallel { keys: Vec<String> },
}

/// Options for the generated proxy binding.
#[derive(Debug, Clone)]
pub enum ProxyOptions {
    /// A configuration record rendered as an object literal.
    Literal(ConfigMap),
    /// A raw expression emitted verbatim, trimmed. An expression that trims
    /// to nothing falls back to the default literal.
    Raw(String),
}

/// Options accepted by a workflow builder.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Required, non-blank. Sanitized into the exported function identifier.
    pub workflow_name: String,
    /// Import path for the activity-implementation type. Defaults to
    /// `./activities`.
    pub activities_import_path: Option<String>,
    /// Options passed to the proxy facility. Defaults to a one-minute
    /// start-to-close timeout.
    pub proxy_options: Option<ProxyOptions>,
}

impl BuildOptions {
    pub fn new(workflow_name: impl Into<String>) -> Self {
        Self {
            workflow_name: workflow_name.into(),
            activities_import_path: None,
            proxy_options: None,
        }
    }

    /// Override the activity-implementation import path.
    pub fn activities_import_path(mut self, path: impl Into<String>) -> Self {
        self.activities_import_path = Some(path.into());
        self
    }

    /// Set the proxy options.
    pub fn proxy_options(mut self, options: ProxyOptions) -> Self {
        self.proxy_options = Some(options);
        self
    }
}
