use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
    pub fn conflict(msg: impl Into<String>) -> Self { Self::Conflict(msg.into()) }
}
