use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Duplicate customer id: {0}")]
    DuplicateCustomer(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
