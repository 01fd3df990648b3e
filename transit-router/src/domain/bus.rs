//! Bus line types.

use super::StopId;

/// A bus line: an ordered list of stops, ridden either as a loop or out and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    /// Bus name, e.g. "297"
    pub name: String,
    /// Stops as listed for the line
    pub stops: Vec<StopId>,
    /// Whether the listed stops already describe the full trip
    pub is_roundtrip: bool,
}

impl Bus {
    /// Creates a new bus.
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            is_roundtrip,
        }
    }

    /// Stops in riding order.
    ///
    /// A roundtrip bus rides its stops as listed. A linear bus rides them
    /// forward and then back, without repeating the turnaround stop:
    /// `[A, B, C]` becomes `[A, B, C, B, A]`.
    pub fn route_stops(&self) -> Vec<StopId> {
        let mut route = self.stops.clone();
        if !self.is_roundtrip {
            route.extend(self.stops.iter().rev().skip(1).copied());
        }
        route
    }
}

/// Aggregate statistics for one bus line.
#[derive(Debug, Clone, PartialEq)]
pub struct BusInfo {
    /// Bus name
    pub name: String,
    /// Number of stops in riding order, counting repeats
    pub stop_count: usize,
    /// Number of distinct stops
    pub unique_stop_count: usize,
    /// Road length of the full trip, in metres
    pub route_length: u64,
    /// Road length divided by great-circle length
    pub curvature: f64,
}
