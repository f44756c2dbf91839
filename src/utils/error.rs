use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid reference in '{field}': {value} does not exist")]
    InvalidReference { field: String, value: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    InvalidInput,
    InvalidReference,
    ServerFault,
}

impl TriviaError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        TriviaError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        TriviaError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            TriviaError::NotFound { .. } => ErrorCategory::NotFound,
            TriviaError::InvalidInput { .. } => ErrorCategory::InvalidInput,
            TriviaError::InvalidReference { .. } => ErrorCategory::InvalidReference,
            TriviaError::StorageError { .. }
            | TriviaError::ConfigError { .. }
            | TriviaError::IoError(_)
            | TriviaError::SerializationError(_) => ErrorCategory::ServerFault,
        }
    }

    /// HTTP status the boundary reports for this error.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::NotFound => 404,
            ErrorCategory::InvalidInput | ErrorCategory::InvalidReference => 422,
            ErrorCategory::ServerFault => 500,
        }
    }

    /// Message placed in the `message` field of an error response.
    pub fn user_friendly_message(&self) -> String {
        match self {
            TriviaError::NotFound { entity, .. } => format!("{} not found", entity),
            TriviaError::InvalidInput { .. } => "can't process the request".to_string(),
            TriviaError::InvalidReference { field, value } => {
                format!("{} {} not found", field, value)
            }
            _ => "Internal server error".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::NotFound => "Check the id against the current listing",
            ErrorCategory::InvalidInput => "Supply every required field with a non-empty value",
            ErrorCategory::InvalidReference => "List categories and use one of the returned ids",
            ErrorCategory::ServerFault => "Check the snapshot path and configuration, then retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, TriviaError>;
