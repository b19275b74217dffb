/// Save-time validation failures, surfaced to the editor against a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    Field { field: String, message: String },
}

impl ValidationError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field.
    pub fn field_name(&self) -> &str {
        match self {
            Self::Field { field, .. } => field,
        }
    }

    /// Message shown next to the field.
    pub fn message(&self) -> &str {
        match self {
            Self::Field { message, .. } => message,
        }
    }
}
