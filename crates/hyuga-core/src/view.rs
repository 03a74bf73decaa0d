use anyhow::Result;
use std::sync::Arc;

use crate::Config;

/// View provider trait for routeable application views
pub trait ViewProvider: Send + Sync {
    /// Client-side route this view is mounted at, e.g. "/calendar"
    fn route(&self) -> &str;

    /// Human-readable title
    fn title(&self) -> &str;

    /// Initialize the view with the given context
    fn initialize(&mut self, ctx: &ViewContext) -> Result<()>;

    /// Shutdown the view gracefully
    fn shutdown(&mut self) -> Result<()>;
}

/// Context provided to views during initialization
pub struct ViewContext {
    pub config: Arc<Config>,
}

impl ViewContext {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}
