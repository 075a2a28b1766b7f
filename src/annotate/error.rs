//! Annotator errors
//!
//! Annotation itself never fails. Errors only come from building an engine
//! (bad configuration, matcher construction).

use super::span::SpanKind;

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotateError {
    InvalidConfig(String),
    Pattern { kind: SpanKind, message: String },
}

impl std::fmt::Display for AnnotateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnotateError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            AnnotateError::Pattern { kind, message } => {
                write!(f, "Failed to build {} pattern: {}", kind, message)
            }
        }
    }
}

impl std::error::Error for AnnotateError {}

impl From<serde_json::Error> for AnnotateError {
    fn from(e: serde_json::Error) -> Self {
        AnnotateError::InvalidConfig(e.to_string())
    }
}
