use thiserror::Error;

/// Errors that can occur while recording a punch.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PunchError {
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),
    #[error("Invalid password for employee: {0}")]
    InvalidCredential(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
