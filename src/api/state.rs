//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::{GeneratorService, SessionService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Session service.
    pub session_service: Arc<SessionService>,
    /// Generation pipeline.
    pub generator_service: Arc<GeneratorService>,
    /// Prometheus recorder handle, when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let session_service = Arc::new(SessionService::new(&config.session));
        let generator_service = Arc::new(GeneratorService::new(&config.generation));

        Self {
            config,
            session_service,
            generator_service,
            metrics: None,
        }
    }

    /// Attach a Prometheus recorder handle.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
