//! View-level error type surfaced to the host.

use thiserror::Error;

use hyuga_vacations::GatewayError;

#[derive(Debug, Error)]
pub enum ViewError {
    /// A backend read failed; no events are delivered for the range.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A newer request started while this one was in flight; its result
    /// must be dropped, not rendered.
    #[error("superseded by a newer request")]
    Superseded,
}

impl ViewError {
    /// Message for the surface's native failure indication.
    pub fn user_message(&self) -> String {
        match self {
            Self::Gateway(e) => e.message(),
            Self::Superseded => "superseded by a newer request".to_string(),
        }
    }
}
