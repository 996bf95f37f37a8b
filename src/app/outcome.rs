use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::{
    errors::{Result, ToolError},
    types::DebugId,
};

/// Stable message for a missing credential; the UI shows this instead of
/// a generic error so users know the tool is unconfigured, not broken.
pub const NOT_CONNECTED_MESSAGE: &str = "Tool isn’t connected yet. OPENAI_API_KEY is missing.";

/// Everything else collapses into one retry message. The violated
/// invariant is an internal contract detail and is only logged.
pub const TRY_AGAIN_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome<T> {
    Success(T),
    Failure { message: String, debug_id: DebugId },
}

impl<T> ToolOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl<T: Serialize> ToolOutcome<T> {
    /// Wire shape returned verbatim by the route layer:
    /// `{ ok: true, data }` or `{ ok: false, message, debugId }`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(data) => json!({ "ok": true, "data": data }),
            Self::Failure { message, debug_id } => json!({
                "ok": false,
                "message": message,
                "debugId": debug_id.as_str()
            }),
        }
    }
}

/// Maps a tool run to its caller-facing outcome. Failures are logged with
/// a fresh correlation id; callers never see the underlying detail.
pub fn outcome<T>(tool: &'static str, prefix: &'static str, result: Result<T>) -> ToolOutcome<T> {
    match result {
        Ok(data) => ToolOutcome::Success(data),
        Err(err) => {
            let debug_id = DebugId::new(prefix);
            tracing::error!(tool, debug_id = %debug_id, error = %err, "tool run failed");
            let message = match &err {
                ToolError::MissingCredential(_) => NOT_CONNECTED_MESSAGE.to_string(),
                ToolError::InvalidInput(msg) => msg.clone(),
                _ => TRY_AGAIN_MESSAGE.to_string(),
            };
            ToolOutcome::Failure { message, debug_id }
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
