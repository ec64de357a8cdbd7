use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid record name: {0}")]
    InvalidRecordName(String),

    #[error("Invalid TXT value: {0}")]
    InvalidTxtValue(String),

    #[error("No hosted zone found for {0}")]
    ZoneNotFound(String),

    #[error("Authorization failed: {0}")]
    Unauthorized(String),

    #[error("Token is not bound to an account: {0}")]
    AccountUnavailable(String),

    #[error("Provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}
