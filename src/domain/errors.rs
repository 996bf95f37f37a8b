use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// The completion credential is absent. Callers surface this as a
    /// stable "not connected yet" message instead of a generic error.
    #[error("missing completion credential: {0}")]
    MissingCredential(String),

    /// The completion call failed outright (transport, timeout, or a
    /// non-success HTTP status).
    #[error("completion request failed: {0}")]
    Upstream(String),

    /// The completion call succeeded but carried no usable content.
    #[error("empty response from the completion service")]
    EmptyResponse,

    /// The model output violated the tool contract. The detail names the
    /// violated invariant; it is logged, never shown to the end user.
    #[error("unexpected format: {0}")]
    UnexpectedFormat(String),

    /// Caller-supplied input failed validation before any prompt was
    /// rendered. The message is actionable and passed through as-is.
    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ToolError>;

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::UnexpectedFormat(format!("invalid JSON: {}", err))
    }
}
