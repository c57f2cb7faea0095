//! Application state for the web layer.

use std::sync::Arc;

use crate::network::RouteSource;
use crate::transfer::TransferConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Stops and routes, usually cached
    pub source: Arc<dyn RouteSource>,

    /// Transfer search configuration
    pub transfer: Arc<TransferConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(source: impl RouteSource + 'static, transfer: TransferConfig) -> Self {
        Self {
            source: Arc::new(source),
            transfer: Arc::new(transfer),
        }
    }
}
