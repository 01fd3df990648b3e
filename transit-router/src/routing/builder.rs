//! Transit graph construction.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::RoutingSettings;
use crate::catalogue::TransportCatalogue;
use crate::domain::StopId;
use crate::graph::{DirectedWeightedGraph, Edge, VertexId};

/// Label of a ride edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    /// Bus ridden
    pub bus: Arc<str>,
    /// Number of stop-to-stop hops covered
    pub span_count: usize,
}

/// Graph of wait edges (label `None`) and ride edges, weighted in minutes.
pub type TransitGraph = DirectedWeightedGraph<f64, Option<Ride>>;

/// Vertex where riders arrive at and wait on `stop`.
pub fn wait_vertex(stop: StopId) -> VertexId {
    2 * stop.0
}

/// Vertex from which riders board buses at `stop`.
pub fn board_vertex(stop: StopId) -> VertexId {
    2 * stop.0 + 1
}

/// Maps stop names to vertices and vertices back to stop names.
///
/// Derived from the catalogue at build time; rebuilt with the graph.
#[derive(Debug, Clone, Default)]
pub struct VertexMap {
    names: Vec<String>,
    ids: HashMap<String, StopId>,
}

impl VertexMap {
    fn from_catalogue(catalogue: &TransportCatalogue) -> Self {
        let names: Vec<String> = catalogue.stops().iter().map(|s| s.name.clone()).collect();
        let ids = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), StopId(i)))
            .collect();
        Self { names, ids }
    }

    /// Wait vertex of the named stop, if the stop is known.
    pub fn wait_vertex(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied().map(wait_vertex)
    }

    /// Board vertex of the named stop, if the stop is known.
    pub fn board_vertex(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied().map(board_vertex)
    }

    /// Name of the stop owning `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the graph this map was built with.
    pub fn stop_name(&self, vertex: VertexId) -> &str {
        &self.names[vertex / 2]
    }

    /// Number of stops mapped.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Builds the transit graph for `catalogue`.
///
/// Settings are expected to be validated already; see
/// [`RoutingSettings::validate`].
pub fn build_graph(
    catalogue: &TransportCatalogue,
    settings: &RoutingSettings,
) -> (TransitGraph, VertexMap) {
    let stop_count = catalogue.stops().len();
    let mut graph = TransitGraph::with_vertex_count(2 * stop_count);

    for i in 0..stop_count {
        let stop = StopId(i);
        graph.add_edge(Edge::new(
            wait_vertex(stop),
            board_vertex(stop),
            settings.bus_wait_time,
            None,
        ));
    }

    for bus_name in catalogue.bus_names() {
        let Some(bus) = catalogue.find_bus(bus_name) else {
            continue;
        };
        let label: Arc<str> = Arc::from(bus_name);
        let route = bus.route_stops();

        for (i, &board) in route.iter().enumerate() {
            let mut metres = 0u64;
            for j in (i + 1)..route.len() {
                metres += u64::from(catalogue.distance(route[j - 1], route[j]));
                graph.add_edge(Edge::new(
                    board_vertex(board),
                    wait_vertex(route[j]),
                    settings.ride_time(metres),
                    Some(Ride {
                        bus: label.clone(),
                        span_count: j - i,
                    }),
                ));
            }
        }
    }

    debug!(
        stops = stop_count,
        buses = catalogue.bus_count(),
        edges = graph.edge_count(),
        "transit graph built"
    );

    (graph, VertexMap::from_catalogue(catalogue))
}
