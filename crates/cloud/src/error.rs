use folio_core::error::CoreError;

/// Errors from calls against the remote asset host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host answered with a non-2xx status. `message` is the host's own
    /// error text, surfaced to callers unchanged.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The host reported that no resource of the requested kind exists.
    #[error("Resource not found - {public_id}")]
    NotFound { public_id: String },
}

impl From<HostError> for CoreError {
    fn from(err: HostError) -> Self {
        CoreError::Remote(err.to_string())
    }
}
