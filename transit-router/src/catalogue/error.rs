//! Catalogue error types.

/// Errors raised while populating the catalogue.
///
/// All of these are configuration errors in the input data; the catalogue is
/// left unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A bus or distance entry names a stop that was never added
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A stop with this name already exists
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A bus with this name already exists
    #[error("duplicate bus: {0}")]
    DuplicateBus(String),
}
