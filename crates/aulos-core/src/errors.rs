use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid fragment number: {0}")]
    InvalidFragmentNumber(String),
    #[error("invalid stream location: {0}")]
    InvalidLocation(String),
    #[error("contact id must not be empty")]
    EmptyContactId,
}

pub type CoreResult<T> = Result<T, CoreError>;
