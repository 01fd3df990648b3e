//! Transport catalogue: the registry of stops, buses and road distances.
//!
//! The catalogue is filled once during ingestion and is read-only afterwards.
//! Stops live in an arena indexed by `StopId`; the arena order is the order in
//! which stops were added, and the graph builder derives vertex ids from it.

mod error;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use tracing::trace;

use crate::domain::{Bus, BusInfo, Coordinates, Stop, StopId};

pub use error::CatalogueError;

/// Registry of stops, buses and directional road distances.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    stop_ids: HashMap<String, StopId>,
    /// Keyed by name so iteration is sorted.
    buses: BTreeMap<String, Bus>,
    /// Buses calling at each stop, indexed by `StopId`.
    stop_buses: Vec<BTreeSet<String>>,
    distances: HashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stop and returns its id.
    pub fn add_stop(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        if self.stop_ids.contains_key(name) {
            return Err(CatalogueError::DuplicateStop(name.to_string()));
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(name, coordinates));
        self.stop_ids.insert(name.to_string(), id);
        self.stop_buses.push(BTreeSet::new());
        trace!(stop = name, id = id.0, "added stop");
        Ok(id)
    }

    /// Records the road distance from `from` to `to`, in metres.
    ///
    /// Distances are directional; the reverse direction is only used as a
    /// fallback when it has no entry of its own.
    pub fn set_distance(&mut self, from: &str, to: &str, metres: u32) -> Result<(), CatalogueError> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        self.distances.insert((from_id, to_id), metres);
        Ok(())
    }

    /// Adds a bus running through the named stops.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<(), CatalogueError> {
        if self.buses.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_string()));
        }

        // Resolve everything first so a failure leaves the catalogue untouched.
        let stops = stop_names
            .iter()
            .map(|stop| self.require_stop(stop.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        for stop in &stops {
            self.stop_buses[stop.0].insert(name.to_string());
        }
        trace!(bus = name, stops = stops.len(), is_roundtrip, "added bus");
        self.buses
            .insert(name.to_string(), Bus::new(name, stops, is_roundtrip));
        Ok(())
    }

    /// All stops, in the order they were added.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the stop with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Looks up a stop id by name.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_ids.get(name).copied()
    }

    /// Looks up a stop by name.
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| self.stop(id))
    }

    /// Names of all buses, sorted.
    pub fn bus_names(&self) -> Vec<&str> {
        self.buses.keys().map(String::as_str).collect()
    }

    /// Looks up a bus by name.
    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    /// Number of buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Road distance from `from` to `to`, in metres.
    ///
    /// Uses the recorded distance for this direction, then the recorded
    /// distance for the opposite direction, then the rounded great-circle
    /// distance between the two stops.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        if let Some(&metres) = self.distances.get(&(from, to)) {
            return metres;
        }
        if let Some(&metres) = self.distances.get(&(to, from)) {
            return metres;
        }
        self.geo_distance(from, to).round() as u32
    }

    /// Buses calling at the named stop, sorted by name.
    ///
    /// Returns `None` if the stop does not exist and an empty list if it
    /// exists but no bus serves it.
    pub fn buses_by_stop(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.stop_id(name)?;
        Some(self.stop_buses[id.0].iter().map(String::as_str).collect())
    }

    /// Aggregate statistics for the named bus.
    pub fn bus_info(&self, name: &str) -> Option<BusInfo> {
        let bus = self.find_bus(name)?;
        let route = bus.route_stops();

        let mut route_length = 0u64;
        let mut geo_length = 0.0f64;
        for pair in route.windows(2) {
            route_length += u64::from(self.distance(pair[0], pair[1]));
            geo_length += self.geo_distance(pair[0], pair[1]);
        }

        let curvature = if geo_length > 0.0 {
            route_length as f64 / geo_length
        } else {
            1.0
        };

        let unique_stop_count = bus.stops.iter().collect::<HashSet<_>>().len();

        Some(BusInfo {
            name: bus.name.clone(),
            stop_count: route.len(),
            unique_stop_count,
            route_length,
            curvature,
        })
    }

    fn geo_distance(&self, from: StopId, to: StopId) -> f64 {
        self.stop(from)
            .coordinates
            .distance_to(&self.stop(to).coordinates)
    }

    fn require_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }
}
