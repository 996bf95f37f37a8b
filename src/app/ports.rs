use async_trait::async_trait;

use crate::domain::errors::Result;

// ── Ports ─────────────────────────────────────────────────────────────────────

/// One request/response exchange with the external completion service.
/// Implementations surface exactly two upstream failure modes distinctly:
/// `MissingCredential` (fatal, not retryable) and `EmptyResponse` /
/// `Upstream` (the caller may try again). No retry logic lives behind
/// this trait.
#[async_trait]
pub trait CompletionPort: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

// ── Transfer objects ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    /// Ask the provider for a JSON-object response where supported.
    /// Providers may ignore this; validators tolerate prose wrapping.
    pub json_response: bool,
}
