//! Typed suggestion errors.

/// Failure validating a session's suggestion configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestError {
    /// A configuration field is out of range.
    #[error("invalid session config field {field}: {detail}")]
    InvalidConfig { field: &'static str, detail: String },
}
