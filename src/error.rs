//! Error types for the Libris borrow core

use thiserror::Error;

/// Stable error codes for API layers that map errors onto wire responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotAuthorized = 2,
    NoSuchData = 4,
    ItemNotAvailable = 7,
    Conflict = 8,
    BadTransition = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The transaction's actual status does not match the status the
    /// operation requires as its starting point.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A reserve was required but the book has no copies left.
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    /// The desired status is not reachable from the current one.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wire code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Authorization(_) => ErrorCode::NotAuthorized,
            AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::OutOfStock(_) => ErrorCode::ItemNotAvailable,
            AppError::InvalidTransition(_) => ErrorCode::BadTransition,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
