use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{
    ERR_EMAIL_TAKEN, ERR_EMPTY_CART, ERR_FORBIDDEN, ERR_INVALID_CREDENTIALS, ERR_LOGIN_REQUIRED,
    ERR_PASSWORD_MISMATCH, LOGIN_PATH,
};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{}", ERR_LOGIN_REQUIRED)]
    AuthRequired,

    #[error("{}", ERR_FORBIDDEN)]
    Forbidden,

    #[error("{}", ERR_EMPTY_CART)]
    EmptyCart,

    #[error("{}", ERR_EMAIL_TAKEN)]
    UserAlreadyExists,

    #[error("{}", ERR_INVALID_CREDENTIALS)]
    InvalidCredentials,

    #[error("{}", ERR_PASSWORD_MISMATCH)]
    PasswordMismatch,
}

impl AppError {
    /// Status code used for this error on both page and JSON routes
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Migration(_) | AppError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) | AppError::EmptyCart | AppError::PasswordMismatch => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthRequired | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::UserAlreadyExists => StatusCode::CONFLICT,
        }
    }

    fn is_internal(&self) -> bool {
        self.status() == StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Page routes send anonymous visitors to the login form
            AppError::AuthRequired => Redirect::to(LOGIN_PATH).into_response(),
            AppError::Forbidden => (StatusCode::FORBIDDEN, ERR_FORBIDDEN).into_response(),
            ref err if err.is_internal() => {
                tracing::error!("Request failed: {:?}", err);
                let body = Json(json!({ "error": "Internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            err => {
                let body = Json(json!({ "error": err.to_string() }));
                (err.status(), body).into_response()
            }
        }
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AuthRequired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::EmptyCart.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::UserAlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_required_redirects_to_login() {
        let response = AppError::AuthRequired.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], LOGIN_PATH);
    }

    #[test]
    fn test_forbidden_is_plain_text() {
        let response = AppError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }
}
