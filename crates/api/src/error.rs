use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_cloud::HostError;
use folio_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds transport-specific
/// variants. Implements [`IntoResponse`] to produce `{ "error", "code" }`
/// JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed call against the remote asset host.
    #[error(transparent)]
    Host(#[from] HostError),

    /// A database error from the links store.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The path exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Config(msg) => {
                    tracing::error!(error = %msg, "Missing configuration");
                    (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Remote(msg) => {
                    tracing::error!(error = %msg, "Remote store error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "REMOTE_ERROR", msg.clone())
                }
            },

            // --- Remote host errors: message passed through verbatim ---
            AppError::Host(err) => {
                tracing::error!(error = %err, "Asset host error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REMOTE_ERROR",
                    err.to_string(),
                )
            }

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method not allowed".to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
