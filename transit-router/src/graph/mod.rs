//! Directed weighted graph and all-pairs shortest-path router.
//!
//! The graph is a flat edge list with per-vertex incidence lists. The router
//! runs Dijkstra from every vertex once, keeps the resulting `V × V` table and
//! answers `(from, to)` queries by lookup plus predecessor-edge walk.

mod digraph;
mod router;
mod weight;

pub use digraph::{DirectedWeightedGraph, Edge, EdgeId, VertexId};
pub use router::{RouteInfo, Router};
pub use weight::Weight;
