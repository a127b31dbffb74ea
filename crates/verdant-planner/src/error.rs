//! Error types for the `verdant-planner` binary.

/// Errors raised while loading a plan request.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Failed to read the plan file from disk.
    #[error("failed to read plan file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse plan YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for PlanError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}
