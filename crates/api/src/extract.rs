//! Request body extraction.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// JSON body extractor that never rejects.
///
/// An empty, unreadable, or malformed body yields `T::default()`, so a
/// garbage request reaches the handler with no credentials and is answered
/// with the handler's own authorization or validation error instead of a
/// framework rejection. Request types mark their string fields with
/// [`lenient_string`] so one mistyped field does not discard the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Bytes::from_request(req, state).await {
            Ok(bytes) if bytes.is_empty() => T::default(),
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "Ignoring malformed JSON body");
                T::default()
            }),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Could not read request body");
                T::default()
            }
        };
        Ok(Self(value))
    }
}

/// Field deserializer that keeps JSON strings and treats any other value
/// (number, object, `null`, ...) as absent.
///
/// Use with `#[serde(default, deserialize_with = "lenient_string")]`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
