//! Request processing error types.

use crate::catalogue::CatalogueError;
use crate::routing::RouterError;

/// Errors that abort processing of a whole request document.
///
/// Individual queries never fail this way; a query that cannot be answered
/// gets an error message in its response instead.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading the document failed
    #[error("failed to read request document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the expected shape
    #[error("invalid request document: {0}")]
    Json(#[from] serde_json::Error),

    /// The network described by `base_requests` is inconsistent
    #[error("invalid network: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The routing settings are unusable
    #[error("invalid routing settings: {0}")]
    Router(#[from] RouterError),

    /// The document has no `routing_settings` but a router is required
    #[error("routing_settings missing from request document")]
    MissingRoutingSettings,
}
