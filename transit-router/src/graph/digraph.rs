//! Directed weighted graph storage.

/// Index of a vertex.
pub type VertexId = usize;

/// Index of an edge, in insertion order.
pub type EdgeId = usize;

/// A directed edge carrying a weight and an arbitrary label.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W, L> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
    pub label: L,
}

impl<W, L> Edge<W, L> {
    pub fn new(from: VertexId, to: VertexId, weight: W, label: L) -> Self {
        Self {
            from,
            to,
            weight,
            label,
        }
    }
}

/// Directed graph with weighted, labelled edges.
///
/// Vertices are `0..vertex_count()`; edges are never removed, so edge ids stay
/// valid for the lifetime of the graph.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<W, L> {
    edges: Vec<Edge<W, L>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<W, L> Default for DirectedWeightedGraph<W, L> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            incidence: Vec::new(),
        }
    }
}

impl<W, L> DirectedWeightedGraph<W, L> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn with_vertex_count(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: (0..vertex_count).map(|_| Vec::new()).collect(),
        }
    }

    /// Appends a new isolated vertex.
    pub fn add_vertex(&mut self) -> VertexId {
        self.incidence.push(Vec::new());
        self.incidence.len() - 1
    }

    /// Adds an edge and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge<W, L>) -> EdgeId {
        let vertex_count = self.vertex_count();
        assert!(
            edge.from < vertex_count && edge.to < vertex_count,
            "edge {} -> {} out of range for {vertex_count} vertices",
            edge.from,
            edge.to,
        );

        let id = self.edges.len();
        self.incidence[edge.from].push(id);
        self.edges.push(edge);
        id
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<W, L> {
        &self.edges[id]
    }

    /// Ids of the edges leaving `vertex`.
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex]
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges with their ids.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<W, L>)> {
        self.edges.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let graph: DirectedWeightedGraph<u32, ()> = DirectedWeightedGraph::default();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_vertices_and_edges() {
        let mut graph = DirectedWeightedGraph::with_vertex_count(2);
        let c = graph.add_vertex();
        assert_eq!(c, 2);

        let ab = graph.add_edge(Edge::new(0, 1, 5u32, "ab"));
        let ac = graph.add_edge(Edge::new(0, 2, 7u32, "ac"));
        let ca = graph.add_edge(Edge::new(2, 0, 1u32, "ca"));

        assert_eq!((ab, ac, ca), (0, 1, 2));
        assert_eq!(graph.incident_edges(0), &[ab, ac]);
        assert!(graph.incident_edges(1).is_empty());
        assert_eq!(graph.incident_edges(2), &[ca]);
        assert_eq!(graph.edge(ac).label, "ac");
        assert_eq!(graph.edge(ca).to, 0);
        assert_eq!(graph.edges().count(), 3);
    }

    #[test]
    fn parallel_edges_and_loops_are_kept() {
        let mut graph = DirectedWeightedGraph::with_vertex_count(1);
        graph.add_edge(Edge::new(0, 0, 1u32, ()));
        graph.add_edge(Edge::new(0, 0, 2u32, ()));
        assert_eq!(graph.incident_edges(0).len(), 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn edge_to_missing_vertex_panics() {
        let mut graph = DirectedWeightedGraph::with_vertex_count(1);
        graph.add_edge(Edge::new(0, 3, 1u32, ()));
    }
}
