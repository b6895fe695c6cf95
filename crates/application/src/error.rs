use domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("notification error: {0}")]
    Notification(String),
    #[error("orchestrator already initialized")]
    AlreadyInitialized,
}

impl ApplicationError {
    pub fn notification(message: impl Into<String>) -> Self {
        ApplicationError::Notification(message.into())
    }
}
