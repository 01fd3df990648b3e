//! Rider-facing itineraries.

use super::{TransitGraph, VertexMap};
use crate::graph::EdgeId;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteItem {
    /// Wait at a stop for the next bus
    Wait { stop_name: String, time: f64 },
    /// Ride a bus for `span_count` stops
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    /// Minutes spent on this step.
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }

    /// Returns true if this is a wait step.
    pub fn is_wait(&self) -> bool {
        matches!(self, RouteItem::Wait { .. })
    }
}

/// A complete itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Total minutes from arriving at the origin to arriving at the destination
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

/// Turns a path of graph edges into an itinerary.
///
/// Wait edges become `Wait` items named after their stop. Consecutive ride
/// edges on the same bus collapse into a single `Bus` item with summed span
/// and time, so a rider sees one item per boarding.
pub fn assemble_route(
    graph: &TransitGraph,
    vertices: &VertexMap,
    edges: &[EdgeId],
    total_time: f64,
) -> Route {
    let mut items: Vec<RouteItem> = Vec::with_capacity(edges.len());

    for &edge_id in edges {
        let edge = graph.edge(edge_id);
        let Some(ride) = &edge.label else {
            items.push(RouteItem::Wait {
                stop_name: vertices.stop_name(edge.from).to_string(),
                time: edge.weight,
            });
            continue;
        };

        if let Some(RouteItem::Bus {
            bus,
            span_count,
            time,
        }) = items.last_mut()
        {
            if bus.as_str() == &*ride.bus {
                *span_count += ride.span_count;
                *time += edge.weight;
                continue;
            }
        }

        items.push(RouteItem::Bus {
            bus: ride.bus.to_string(),
            span_count: ride.span_count,
            time: edge.weight,
        });
    }

    Route { total_time, items }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalogue::TransportCatalogue;
    use crate::domain::{Coordinates, StopId};
    use crate::graph::Edge;
    use crate::routing::{Ride, RoutingSettings, board_vertex, build_graph, wait_vertex};

    /// Stops A, B, C with no buses; ride edges are added by hand.
    fn bare_graph() -> (TransitGraph, VertexMap) {
        let mut catalogue = TransportCatalogue::new();
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            catalogue
                .add_stop(name, Coordinates::new(55.0, 37.0 + i as f64 * 0.01))
                .unwrap();
        }
        build_graph(&catalogue, &RoutingSettings::new(2.0, 30.0))
    }

    fn ride(
        graph: &mut TransitGraph,
        from: usize,
        to: usize,
        bus: &str,
        span: usize,
        time: f64,
    ) -> EdgeId {
        graph.add_edge(Edge::new(
            board_vertex(StopId(from)),
            wait_vertex(StopId(to)),
            time,
            Some(Ride {
                bus: Arc::from(bus),
                span_count: span,
            }),
        ))
    }

    #[test]
    fn empty_path() {
        let (graph, vertices) = bare_graph();
        let route = assemble_route(&graph, &vertices, &[], 0.0);
        assert_eq!(route.total_time, 0.0);
        assert!(route.items.is_empty());
    }

    #[test]
    fn wait_then_ride() {
        let (mut graph, vertices) = bare_graph();
        let ab = ride(&mut graph, 0, 1, "297", 1, 1.5);

        // Edge 0 is the wait edge of stop A
        let route = assemble_route(&graph, &vertices, &[0, ab], 3.5);
        assert_eq!(route.total_time, 3.5);
        assert_eq!(
            route.items,
            vec![
                RouteItem::Wait {
                    stop_name: "A".into(),
                    time: 2.0
                },
                RouteItem::Bus {
                    bus: "297".into(),
                    span_count: 1,
                    time: 1.5
                },
            ]
        );
    }

    #[test]
    fn consecutive_rides_on_same_bus_merge() {
        let (mut graph, vertices) = bare_graph();
        let ab = ride(&mut graph, 0, 1, "55", 1, 1.5);
        let bc = ride(&mut graph, 1, 2, "55", 2, 2.5);

        let route = assemble_route(&graph, &vertices, &[0, ab, bc], 6.0);
        assert_eq!(
            route.items,
            vec![
                RouteItem::Wait {
                    stop_name: "A".into(),
                    time: 2.0
                },
                RouteItem::Bus {
                    bus: "55".into(),
                    span_count: 3,
                    time: 4.0
                },
            ]
        );
    }

    #[test]
    fn different_buses_stay_separate() {
        let (mut graph, vertices) = bare_graph();
        let ab = ride(&mut graph, 0, 1, "55", 1, 1.5);
        let bc = ride(&mut graph, 1, 2, "828", 1, 2.5);

        let route = assemble_route(&graph, &vertices, &[0, ab, bc], 6.0);
        assert_eq!(route.items.len(), 3);
        assert!(matches!(&route.items[2], RouteItem::Bus { bus, .. } if bus == "828"));
    }

    #[test]
    fn waits_never_merge() {
        let (mut graph, vertices) = bare_graph();
        let ab = ride(&mut graph, 0, 1, "55", 1, 1.5);
        let bc = ride(&mut graph, 1, 2, "55", 1, 2.5);

        // Alight at B, wait, reboard the same bus
        let route = assemble_route(&graph, &vertices, &[0, ab, 1, bc], 8.0);
        let kinds: Vec<bool> = route.items.iter().map(RouteItem::is_wait).collect();
        assert_eq!(kinds, vec![true, false, true, false]);
        assert_eq!(
            route.items[2],
            RouteItem::Wait {
                stop_name: "B".into(),
                time: 2.0
            }
        );
    }

    #[test]
    fn item_time() {
        let wait = RouteItem::Wait {
            stop_name: "A".into(),
            time: 6.0,
        };
        let bus = RouteItem::Bus {
            bus: "297".into(),
            span_count: 1,
            time: 1.5,
        };
        assert_eq!(wait.time(), 6.0);
        assert_eq!(bus.time(), 1.5);
        assert!(wait.is_wait());
        assert!(!bus.is_wait());
    }
}
