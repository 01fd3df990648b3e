//! Request/response types for the HTTP API.

use serde::{Deserialize, Serialize};

/// Query string of `GET /route`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
