use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Unified error type for the OAuth flow.
///
/// Responses are plain text: the callback is hit by a browser, not an API client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ── Callback validation ─────────────────────────────────────────────
    #[error("Missing code in callback.")]
    MissingCode,

    #[error("Invalid state (possible CSRF).")]
    InvalidState,

    // ── Provider ────────────────────────────────────────────────────────
    #[error("{0}")]
    TokenExchange(String),

    #[error("{0}")]
    ProfileFetch(String),

    // ── Internal ────────────────────────────────────────────────────────
    #[error("{0}")]
    Storage(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(format!("token file error: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(format!("token serialization failed: {e}"))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCode | AppError::InvalidState => StatusCode::BAD_REQUEST,
            AppError::TokenExchange(_)
            | AppError::ProfileFetch(_)
            | AppError::Storage(_)
            | AppError::Crypto(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::TokenExchange(_) | AppError::ProfileFetch(_) | AppError::Storage(_) => {
                tracing::error!("Callback error: {self}");
                format!("OAuth callback error: {self}")
            }
            AppError::Crypto(_) | AppError::Internal(_) => {
                tracing::error!("{self}");
                self.to_string()
            }
            AppError::MissingCode | AppError::InvalidState => self.to_string(),
        };

        (status, body).into_response()
    }
}
