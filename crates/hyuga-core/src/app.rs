use std::sync::Arc;

use crate::error::AppError;
use crate::{Config, ViewContext, ViewProvider};

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
    views: Vec<Box<dyn ViewProvider>>,
    context: ViewContext,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self, AppError> {
        let (config, _validation) = Config::load_validated()?;
        let config = Arc::new(config);
        let context = ViewContext::new(config.clone());

        Ok(Self {
            config,
            views: Vec::new(),
            context,
        })
    }

    /// Create an application around an already-built config (tests, embedders)
    pub fn with_config(config: Config) -> Self {
        let config = Arc::new(config);
        let context = ViewContext::new(config.clone());

        Self {
            config,
            views: Vec::new(),
            context,
        }
    }

    /// Register a view with the application
    pub fn register_view(&mut self, view: Box<dyn ViewProvider>) {
        tracing::info!("Registering view {} at {}", view.title(), view.route());
        self.views.push(view);
    }

    /// Initialize all registered views
    pub fn initialize(&mut self) -> Result<(), AppError> {
        tracing::info!("Initializing application with {} views", self.views.len());

        for view in &mut self.views {
            tracing::debug!("Initializing view: {}", view.title());
            view.initialize(&self.context)?;
        }

        tracing::info!("Application initialized successfully");
        Ok(())
    }

    /// Shutdown the application and all views
    pub fn shutdown(&mut self) -> Result<(), AppError> {
        tracing::info!("Shutting down application");

        for view in &mut self.views {
            tracing::debug!("Shutting down view: {}", view.title());
            if let Err(e) = view.shutdown() {
                tracing::error!("Error shutting down view {}: {}", view.title(), e);
            }
        }

        Ok(())
    }

    /// Resolve a route path to its registered view
    pub fn view_at(&self, path: &str) -> Option<&dyn ViewProvider> {
        self.views
            .iter()
            .find(|v| v.route() == path)
            .map(|v| v.as_ref())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get list of all registered views
    pub fn views(&self) -> &[Box<dyn ViewProvider>] {
        &self.views
    }
}
