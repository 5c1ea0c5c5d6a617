pub mod admin;
pub mod assets;
pub mod links;

use axum::http::{Method, StatusCode};

use crate::error::{AppError, AppResult};

/// Fallback for methods a route does not serve.
///
/// Bare `OPTIONS` requests (not CORS preflights, which the CORS layer
/// answers) get an empty 204; anything else is a 405.
pub async fn method_fallback(method: Method) -> AppResult<StatusCode> {
    if method == Method::OPTIONS {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::MethodNotAllowed)
    }
}
