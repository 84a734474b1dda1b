//! Error type shared by template engine modules.
//!
//! Every operation a template backend exposes to the host funnels into
//! [`TemplateError`]. The host treats a render failure as fatal for that
//! single render request; there are no partial-failure or retry semantics.

use thiserror::Error;

/// Error type for template engine operations.
///
/// Backends map their internal error types into this enum so the host never
/// sees engine-specific errors. The variants exist for logging and test
/// assertions; callers are expected to fail the whole render on any of them.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The named template could not be resolved through the search path.
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// The template could not be parsed.
    #[error("template syntax error: {0}")]
    Syntax(String),

    /// Evaluation failed after the template parsed successfully.
    #[error("template render error: {0}")]
    Render(String),

    /// A theme could not be loaded or its manifest is invalid.
    #[error("theme error: {0}")]
    Theme(String),

    /// The requested engine is not available (module not activated).
    #[error("template engine not available: {name}")]
    EngineUnavailable { name: String },

    /// Reading a template or manifest from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for TemplateError {
    fn from(err: serde_yaml::Error) -> Self {
        TemplateError::Theme(err.to_string())
    }
}
