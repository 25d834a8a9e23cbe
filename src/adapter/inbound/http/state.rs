use std::sync::Arc;

use super::proxy::QuoteProxy;
use crate::application::CompensationService;

/// Shared application state, passed to all route handlers via `axum::extract::State`.
pub struct AppState {
    pub proxy: QuoteProxy,
    pub service: CompensationService,
}

impl AppState {
    pub fn new(proxy: QuoteProxy, service: CompensationService) -> Arc<Self> {
        Arc::new(Self { proxy, service })
    }
}
