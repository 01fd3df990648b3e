//! Transit routing on top of the generic graph router.
//!
//! Every stop becomes two vertices: a *wait* vertex (`2i`) where riders
//! arrive, and a *board* vertex (`2i + 1`) reached from it after the fixed
//! wait time. Each bus contributes one ride edge from the board vertex of
//! every stop to the wait vertex of every later stop on its route, so staying
//! on a bus past several stops is a single edge rather than a chain of
//! alight-and-reboard hops.

mod builder;
mod error;
mod route;
mod settings;
mod transport_router;

pub use builder::{Ride, TransitGraph, VertexMap, board_vertex, build_graph, wait_vertex};
pub use error::RouterError;
pub use route::{Route, RouteItem, assemble_route};
pub use settings::RoutingSettings;
pub use transport_router::TransportRouter;
