//! API server state

use std::sync::Arc;

use crate::pinning::PinningBackend;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Pinning provider client
    pub pinning: Arc<dyn PinningBackend>,

    /// Gateway base used to build content URIs
    pub gateway_url: Arc<str>,
}

impl AppState {
    pub fn new(pinning: Arc<dyn PinningBackend>, gateway_url: impl Into<Arc<str>>) -> Self {
        Self {
            pinning,
            gateway_url: gateway_url.into(),
        }
    }
}
