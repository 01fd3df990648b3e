//! Domain types for the transit network.
//!
//! Stops and buses are plain values owned by the catalogue. Everything
//! downstream (graph builder, router, request layer) refers to stops by
//! `StopId`, the stop's position in the catalogue's stop arena.

mod bus;
mod stop;

pub use bus::{Bus, BusInfo};
pub use stop::{Coordinates, Stop, StopId};
