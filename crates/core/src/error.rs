/// Domain-level error taxonomy shared by every crate in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Required external credentials or settings are absent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Submitted admin credentials do not match the configured ones.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A required request field is missing or invalid.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The remote asset host or document store rejected a call.
    #[error("Remote error: {0}")]
    Remote(String),
}
