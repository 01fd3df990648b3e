//! Transport router: graph, route table and stop lookup built in one go.

use std::time::Instant;

use tracing::{debug, info};

use super::{
    Ride, Route, RouterError, RoutingSettings, TransitGraph, VertexMap, assemble_route, build_graph,
};
use crate::catalogue::TransportCatalogue;
use crate::graph::Router;

/// Answers fastest-itinerary queries between named stops.
///
/// Built once from a finished catalogue; immutable afterwards and safe to
/// share between threads.
#[derive(Debug, Clone)]
pub struct TransportRouter {
    settings: RoutingSettings,
    router: Router<f64, Option<Ride>>,
    vertices: VertexMap,
}

impl TransportRouter {
    /// Validates `settings`, builds the transit graph and precomputes all routes.
    pub fn new(
        catalogue: &TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, RouterError> {
        settings.validate()?;

        let started = Instant::now();
        let (graph, vertices) = build_graph(catalogue, &settings);
        let router = Router::new(graph);

        info!(
            stops = vertices.len(),
            vertices = router.vertex_count(),
            edges = router.graph().edge_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "transport router ready"
        );

        Ok(Self {
            settings,
            router,
            vertices,
        })
    }

    /// Fastest itinerary from stop `from` to stop `to`.
    ///
    /// Returns `None` if either stop is unknown or `to` cannot be reached.
    pub fn build_route(&self, from: &str, to: &str) -> Option<Route> {
        let (Some(source), Some(target)) =
            (self.vertices.wait_vertex(from), self.vertices.wait_vertex(to))
        else {
            debug!(from, to, "route requested for unknown stop");
            return None;
        };

        let info = self.router.build_route(source, target)?;
        Some(assemble_route(
            self.router.graph(),
            &self.vertices,
            &info.edges,
            info.weight,
        ))
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// The transit graph routes are computed on.
    pub fn graph(&self) -> &TransitGraph {
        self.router.graph()
    }
}
