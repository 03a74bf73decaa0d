//! Gateway-specific error types.

use thiserror::Error;

/// Failure of a gateway read, normalized for display.
///
/// The backend attaches `{ "message": string }` to non-2xx responses; when
/// present that message is surfaced verbatim. Everything else falls back to
/// the fixed per-operation string.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network-level failure: connect, DNS, timeout.
    #[error("{fallback}")]
    Transport {
        fallback: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response from the backend.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// A 2xx payload that does not match the expected shape.
    #[error("unexpected payload: {0}")]
    Parse(String),
}

impl GatewayError {
    /// Message for the failure channel of the rendering surface.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the backend was reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
