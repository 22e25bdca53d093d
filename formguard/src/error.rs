//! Error types

/// Error for validating a field that was never registered.
///
/// Reaching this is a programmer error: the validator only knows the fields it
/// scanned at construction, and no field is added afterwards.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Field '{field_id}' is not registered with this validator")]
pub struct UnknownFieldError {
    /// Identity of the offending field handle.
    pub field_id: String,
}

impl UnknownFieldError {
    /// Creates a new unknown-field error.
    pub fn new(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
        }
    }
}
