use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Parameter declared more than once: {0}")]
    DuplicateParameter(String),

    #[error("Required parameter {0} not set")]
    MissingRequiredParameter(String),

    #[error("Batching supports exactly one field, got {0}")]
    UnsupportedBatchShape(usize),

    #[error("Batch size must be at least 1")]
    InvalidBatchSize,

    #[error("Field {0} does not hold a list value")]
    NotBatchable(String),

    #[error("Key not found in response: {0}")]
    KeyPathNotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid service definition: {0}")]
    Config(String),
}
