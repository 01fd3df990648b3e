//! Web layer for the transit router.
//!
//! Serves bus statistics, stop listings and fastest itineraries over HTTP
//! from a catalogue and router built once at startup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
