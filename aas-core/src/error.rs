use thiserror::Error;

/// Main error type for AAS operations
#[derive(Error, Debug)]
pub enum AasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown model type: {0}")]
    UnknownModelType(String),

    #[error("{element} is missing required field '{field}'")]
    MissingField { element: String, field: String },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Cannot convert '{value}' to {data_type}")]
    TypeConversion { value: String, data_type: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedVersion(String),
}

impl AasError {
    /// Shorthand for a [`AasError::MissingField`]
    pub fn missing(element: impl Into<String>, field: impl Into<String>) -> Self {
        AasError::MissingField {
            element: element.into(),
            field: field.into(),
        }
    }

    /// Shorthand for a [`AasError::TypeConversion`]
    pub fn conversion(value: impl ToString, data_type: impl ToString) -> Self {
        AasError::TypeConversion {
            value: value.to_string(),
            data_type: data_type.to_string(),
        }
    }
}

/// Result type alias for AAS operations
pub type AasResult<T> = Result<T, AasError>;
