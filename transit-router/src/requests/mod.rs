//! JSON request processing.
//!
//! A request document carries the network (`base_requests`), the routing
//! settings and a list of statistics queries (`stat_requests`). Processing a
//! document fills a catalogue, builds the router once and answers every
//! query in order.

mod error;
mod handler;
mod model;
mod response;

pub use error::RequestError;
pub use handler::{RequestHandler, load_catalogue, process_document};
pub use model::{BaseRequest, Document, RoutingSettingsInput, StatRequest};
pub use response::{
    BusStats, BusStatsResponse, ErrorMessageResponse, Itinerary, ItineraryItem, NOT_FOUND,
    RouteResponse, StatResponse, StopBuses, StopBusesResponse,
};
