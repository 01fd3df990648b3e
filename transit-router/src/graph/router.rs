//! All-pairs shortest-path router.
//!
//! Construction runs Dijkstra from every vertex and keeps, for each reachable
//! `(source, target)` pair, the path weight and the last edge of an optimal
//! path. Queries are a table lookup followed by a walk back along those
//! predecessor edges.
//!
//! Among several optimal paths the one returned depends on heap order; only
//! the weight is guaranteed minimal.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use tracing::debug;

use super::{DirectedWeightedGraph, EdgeId, VertexId, Weight};

/// A shortest path between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo<W> {
    /// Total weight of the path
    pub weight: W,
    /// Edge ids from source to target
    pub edges: Vec<EdgeId>,
}

/// Best known way to reach a vertex from a fixed source.
#[derive(Debug, Clone, Copy)]
struct RouteData<W> {
    weight: W,
    /// `None` only for the source itself.
    prev_edge: Option<EdgeId>,
}

/// Heap entry ordered so that `BinaryHeap` pops the lightest first.
#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    weight: W,
    vertex: VertexId,
}

impl<W: Weight> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Candidate<W> {}

impl<W: Weight> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .compare(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Shortest-path router over an owned, immutable graph.
#[derive(Debug, Clone)]
pub struct Router<W, L> {
    graph: DirectedWeightedGraph<W, L>,
    /// Row-major `V × V` table; row = source, column = target.
    routes: Vec<Option<RouteData<W>>>,
}

impl<W: Weight, L> Router<W, L> {
    /// Takes ownership of `graph` and precomputes routes between all vertex pairs.
    ///
    /// Edge weights must be non-negative.
    pub fn new(graph: DirectedWeightedGraph<W, L>) -> Self {
        let started = Instant::now();
        let vertex_count = graph.vertex_count();
        let mut routes = vec![None; vertex_count * vertex_count];

        for (source, row) in routes.chunks_mut(vertex_count.max(1)).enumerate() {
            relax_from(&graph, source, row);
        }

        debug!(
            vertices = vertex_count,
            edges = graph.edge_count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "route table computed"
        );

        Self { graph, routes }
    }

    /// The graph routes were computed on.
    pub fn graph(&self) -> &DirectedWeightedGraph<W, L> {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Shortest path from `from` to `to`, or `None` if `to` is unreachable.
    ///
    /// A vertex reaches itself with zero weight and no edges.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is not in the graph.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo<W>> {
        let vertex_count = self.vertex_count();
        assert!(
            from < vertex_count && to < vertex_count,
            "route {from} -> {to} out of range for {vertex_count} vertices"
        );

        let row = &self.routes[from * vertex_count..(from + 1) * vertex_count];
        let target = row[to]?;

        let mut edges = Vec::new();
        let mut prev_edge = target.prev_edge;
        while let Some(edge_id) = prev_edge {
            edges.push(edge_id);
            let edge_from = self.graph.edge(edge_id).from;
            prev_edge = row[edge_from].and_then(|data| data.prev_edge);
        }
        edges.reverse();

        Some(RouteInfo {
            weight: target.weight,
            edges,
        })
    }
}

/// Fills `row` with shortest paths from `source` (Dijkstra).
fn relax_from<W: Weight, L>(
    graph: &DirectedWeightedGraph<W, L>,
    source: VertexId,
    row: &mut [Option<RouteData<W>>],
) {
    let mut heap = BinaryHeap::new();
    row[source] = Some(RouteData {
        weight: W::ZERO,
        prev_edge: None,
    });
    heap.push(Candidate {
        weight: W::ZERO,
        vertex: source,
    });

    while let Some(Candidate { weight, vertex }) = heap.pop() {
        // Skip stale heap entries.
        if let Some(best) = row[vertex] {
            if best.weight.compare(&weight) == Ordering::Less {
                continue;
            }
        }

        for &edge_id in graph.incident_edges(vertex) {
            let edge = graph.edge(edge_id);
            let candidate = weight + edge.weight;
            let improves = match row[edge.to] {
                Some(known) => candidate.compare(&known.weight) == Ordering::Less,
                None => true,
            };
            if improves {
                row[edge.to] = Some(RouteData {
                    weight: candidate,
                    prev_edge: Some(edge_id),
                });
                heap.push(Candidate {
                    weight: candidate,
                    vertex: edge.to,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    /// 0 -> 1 -> 2 -> 3 chain plus a costly shortcut 0 -> 3 and isolated vertex 4.
    fn chain() -> DirectedWeightedGraph<u32, &'static str> {
        let mut graph = DirectedWeightedGraph::with_vertex_count(5);
        graph.add_edge(Edge::new(0, 1, 1, "a"));
        graph.add_edge(Edge::new(1, 2, 2, "b"));
        graph.add_edge(Edge::new(2, 3, 3, "c"));
        graph.add_edge(Edge::new(0, 3, 10, "shortcut"));
        graph
    }

    #[test]
    fn route_to_self_is_empty() {
        let router = Router::new(chain());
        for v in 0..5 {
            let route = router.build_route(v, v).unwrap();
            assert_eq!(route.weight, 0);
            assert!(route.edges.is_empty());
        }
    }

    #[test]
    fn picks_cheapest_path() {
        let router = Router::new(chain());
        let route = router.build_route(0, 3).unwrap();
        assert_eq!(route.weight, 6);
        assert_eq!(route.edges, vec![0, 1, 2]);
    }

    #[test]
    fn prefers_shortcut_when_cheaper() {
        let mut graph = chain();
        graph.add_edge(Edge::new(0, 3, 4, "express"));
        let router = Router::new(graph);

        let route = router.build_route(0, 3).unwrap();
        assert_eq!(route.weight, 4);
        assert_eq!(route.edges, vec![4]);
        assert_eq!(router.graph().edge(route.edges[0]).label, "express");
    }

    #[test]
    fn intermediate_routes() {
        let router = Router::new(chain());
        let route = router.build_route(1, 3).unwrap();
        assert_eq!(route.weight, 5);
        assert_eq!(route.edges, vec![1, 2]);
    }

    #[test]
    fn unreachable_is_none() {
        let router = Router::new(chain());
        assert!(router.build_route(3, 0).is_none());
        assert!(router.build_route(0, 4).is_none());
        assert!(router.build_route(4, 0).is_none());
    }

    #[test]
    fn zero_weight_cycle() {
        let mut graph = DirectedWeightedGraph::with_vertex_count(3);
        graph.add_edge(Edge::new(0, 1, 0u32, ()));
        graph.add_edge(Edge::new(1, 0, 0u32, ()));
        graph.add_edge(Edge::new(1, 2, 5u32, ()));
        let router = Router::new(graph);

        let route = router.build_route(0, 2).unwrap();
        assert_eq!(route.weight, 5);
        assert_eq!(route.edges, vec![0, 2]);
        assert_eq!(router.build_route(1, 1).unwrap().edges, Vec::<EdgeId>::new());
    }

    #[test]
    fn float_weights() {
        let mut graph = DirectedWeightedGraph::with_vertex_count(3);
        graph.add_edge(Edge::new(0, 1, 6.0, ()));
        graph.add_edge(Edge::new(1, 2, 1.5, ()));
        graph.add_edge(Edge::new(0, 2, 8.0, ()));
        let router = Router::new(graph);

        let route = router.build_route(0, 2).unwrap();
        assert_eq!(route.weight, 7.5);
        assert_eq!(route.edges, vec![0, 1]);
    }

    #[test]
    fn empty_graph() {
        let router: Router<u32, ()> = Router::new(DirectedWeightedGraph::default());
        assert_eq!(router.vertex_count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_vertex_panics() {
        let router = Router::new(chain());
        router.build_route(0, 5);
    }
}
