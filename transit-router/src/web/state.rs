//! Application state for the web layer.

use std::sync::Arc;

use crate::catalogue::TransportCatalogue;
use crate::routing::TransportRouter;

/// Shared application state.
///
/// Both parts are built once and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Stops and buses
    pub catalogue: Arc<TransportCatalogue>,

    /// Router built over the catalogue
    pub router: Arc<TransportRouter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalogue: TransportCatalogue, router: TransportRouter) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            router: Arc::new(router),
        }
    }
}
