/// Errors that can occur while registering schemas or checking payloads.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The schema literal does not describe a valid schema.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// The payload failed schema validation.
    #[error("validation failed against schema {name} ({count} errors): {message}")]
    ValidationFailed {
        name: String,
        count: usize,
        message: String,
    },

    /// The payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// No schema registered under the given name.
    #[error("no schema registered as {0:?}")]
    NoSchema(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
