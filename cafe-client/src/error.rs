//! Client error types

use shared::FieldErrors;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the backend
    #[error("Request rejected ({status}): {message}")]
    Server { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Form failed client-side validation, nothing was sent
    #[error("Validation error: {0}")]
    Validation(#[from] FieldErrors),

    #[error("A submit is already in progress")]
    SubmitInProgress,

    #[error("No edit session is open")]
    NoSession,

    #[error("No delete is awaiting confirmation")]
    NoPendingDelete,

    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// How a failure should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not complete
    NetworkFailure,
    /// A field constraint was violated before submit
    ValidationFailure,
    /// The server answered with a non-success response
    ServerRejection,
    /// The call does not fit the current grid or session state
    InvalidState,
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(e) if e.is_decode() || e.is_status() => ErrorKind::ServerRejection,
            Self::Http(_) => ErrorKind::NetworkFailure,
            Self::Server { .. } | Self::InvalidResponse(_) => ErrorKind::ServerRejection,
            Self::Validation(_) => ErrorKind::ValidationFailure,
            Self::SubmitInProgress
            | Self::NoSession
            | Self::NoPendingDelete
            | Self::ReadOnlyField(_)
            | Self::UnknownField(_)
            | Self::Config(_) => ErrorKind::InvalidState,
        }
    }

    /// Field errors for inline display, if this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let rejected = ClientError::Server {
            status: 409,
            message: "Employee UIAB123 already exists".into(),
        };
        assert_eq!(rejected.kind(), ErrorKind::ServerRejection);
        assert_eq!(
            rejected.to_string(),
            "Request rejected (409): Employee UIAB123 already exists"
        );

        let mut errors = FieldErrors::new();
        errors.insert("name", "Name must be 6-10 characters");
        let invalid = ClientError::from(errors);
        assert_eq!(invalid.kind(), ErrorKind::ValidationFailure);
        assert_eq!(
            invalid.field_errors().and_then(|e| e.get("name")),
            Some("Name must be 6-10 characters")
        );

        assert_eq!(
            ClientError::InvalidResponse("expected value".into()).kind(),
            ErrorKind::ServerRejection
        );
        assert_eq!(ClientError::SubmitInProgress.kind(), ErrorKind::InvalidState);
    }
}
