//! Typed error handling for the billed application
//!
//! # Error Categories
//!
//! - [`StoreError`]: rejections coming back from the bills store
//! - [`ValidationError`]: client-side form/file validation failures
//! - [`SessionError`]: missing or unreadable logged-in user
//!
//! Fetch errors escape to the HTTP layer and are rendered on the error
//! page with their message text verbatim. Validation errors stay local
//! to the container that raised them. Submission errors are logged and
//! swallowed (see `NewBillContainer::handle_submit`).

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::fmt;
use thiserror::Error;

/// Rejection returned by the bills store
///
/// Carries the upstream message and HTTP-like status, surfaced verbatim
/// ("Erreur 404", "Erreur 500") when the bill list cannot be fetched.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
    pub status: u16,
}

impl StoreError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// The record addressed by the operation does not exist
    pub fn not_found() -> Self {
        Self::new("Erreur 404", 404)
    }

    /// The store failed internally
    pub fn internal() -> Self {
        Self::new("Erreur 500", 500)
    }
}

/// Client-side validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A form field failed one of its validators
    FieldError { field: String, message: String },

    /// The selected receipt file has a disallowed extension
    UnsupportedExtension { file_name: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Le champ '{}' est invalide: {}", field, message)
            }
            ValidationError::UnsupportedExtension { file_name } => {
                write!(
                    f,
                    "Le fichier '{}' doit être une image jpg, jpeg ou png",
                    file_name
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors around the persisted session user
#[derive(Debug, Clone)]
pub enum SessionError {
    /// No user is stored under the `user` key
    NotLoggedIn,

    /// The stored user could not be deserialized
    Corrupt { message: String },

    /// The underlying key-value store failed
    Storage { message: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotLoggedIn => write!(f, "Aucun utilisateur connecté"),
            SessionError::Corrupt { message } => {
                write!(f, "Utilisateur en session illisible: {}", message)
            }
            SessionError::Storage { message } => {
                write!(f, "Stockage de session indisponible: {}", message)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// The main error type for the application
#[derive(Debug)]
pub enum BilledError {
    /// Store rejection (list/create/update/download)
    Store(StoreError),

    /// Client-side validation failure
    Validation(ValidationError),

    /// Session/user failure
    Session(SessionError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for BilledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BilledError::Store(e) => write!(f, "{}", e),
            BilledError::Validation(e) => write!(f, "{}", e),
            BilledError::Session(e) => write!(f, "{}", e),
            BilledError::Internal(msg) => write!(f, "Erreur interne: {}", msg),
        }
    }
}

impl std::error::Error for BilledError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BilledError::Store(e) => Some(e),
            BilledError::Validation(e) => Some(e),
            BilledError::Session(e) => Some(e),
            BilledError::Internal(_) => None,
        }
    }
}

impl From<StoreError> for BilledError {
    fn from(e: StoreError) -> Self {
        BilledError::Store(e)
    }
}

impl From<ValidationError> for BilledError {
    fn from(e: ValidationError) -> Self {
        BilledError::Validation(e)
    }
}

impl From<SessionError> for BilledError {
    fn from(e: SessionError) -> Self {
        BilledError::Session(e)
    }
}

impl BilledError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BilledError::Store(e) => {
                StatusCode::from_u16(e.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            BilledError::Validation(_) => StatusCode::BAD_REQUEST,
            BilledError::Session(_) => StatusCode::UNAUTHORIZED,
            BilledError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BilledError::Store(_) => "STORE_ERROR",
            BilledError::Validation(_) => "VALIDATION_ERROR",
            BilledError::Session(_) => "SESSION_ERROR",
            BilledError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for BilledError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Html(crate::views::error_page(&self.to_string()));
        (status, body).into_response()
    }
}
