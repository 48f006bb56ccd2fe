//! Frontend Errors
//!
//! Every fallible operation in the storefront returns `AppResult`.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to the user through the status banner or error view
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Missing or malformed input, caught before any request is made
    #[error("{0}")]
    Validation(String),

    /// No authenticated session for an action that needs one
    #[error("You must be signed in to do that")]
    PermissionDenied,

    /// The target id is not in the local list
    #[error("Item {0} no longer exists")]
    NotFound(String),

    /// Transport failure, the request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status or `success: false` envelope
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The backend rejected the bearer token
    #[error("Your session has expired, please sign in again")]
    Unauthorized,

    /// Response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Another request from the same control is still outstanding
    #[error("Please wait for the current request to finish")]
    Busy,
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Client-side errors never reach the network
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::PermissionDenied | AppError::NotFound(_) | AppError::Busy
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_displays_backend_message() {
        let err = AppError::Server { status: 500, message: "Video not found".to_string() };
        assert_eq!(err.to_string(), "Video not found");
    }

    #[test]
    fn test_client_side_classification() {
        assert!(AppError::validation("Title is required").is_client_side());
        assert!(AppError::PermissionDenied.is_client_side());
        assert!(!AppError::Network("offline".into()).is_client_side());
        assert!(!AppError::Unauthorized.is_client_side());
    }
}
