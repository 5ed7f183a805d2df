//! Shared application state for the Axum API server.

use std::sync::Arc;

use drivn_backend::BackendApi;
use drivn_engine::service::ComplianceService;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub compliance: ComplianceService,
}

impl AppState {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self {
            compliance: ComplianceService::new(backend),
        }
    }
}
