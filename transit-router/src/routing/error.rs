//! Router construction errors.

/// Invalid routing settings, detected before any graph is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// Bus velocity must be a finite, positive number of km/h
    #[error("bus velocity must be positive, got {0} km/h")]
    InvalidVelocity(f64),

    /// Wait time must be a finite, non-negative number of minutes
    #[error("bus wait time must be non-negative, got {0} min")]
    InvalidWaitTime(f64),
}
