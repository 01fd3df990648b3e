//! Request dispatch.

use tracing::{debug, info, warn};

use super::{
    BaseRequest, BusStats, BusStatsResponse, Document, Itinerary, RequestError, RouteResponse,
    StatRequest, StatResponse, StopBuses, StopBusesResponse,
};
use crate::catalogue::TransportCatalogue;
use crate::domain::Coordinates;
use crate::routing::{RoutingSettings, TransportRouter};

const MAP_UNSUPPORTED: &str = "map rendering is not supported";

/// Builds a catalogue from the document's `base_requests`.
///
/// Stops are added first, then road distances, then buses, so requests may
/// appear in any order within the document.
pub fn load_catalogue(document: &Document) -> Result<TransportCatalogue, RequestError> {
    let mut catalogue = TransportCatalogue::new();

    for request in &document.base_requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue.add_stop(name, Coordinates::new(*latitude, *longitude))?;
        }
    }

    for request in &document.base_requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (to, metres) in road_distances {
                catalogue.set_distance(name, to, *metres)?;
            }
        }
    }

    for request in &document.base_requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            catalogue.add_bus(name, stops.as_slice(), *is_roundtrip)?;
        }
    }

    info!(
        stops = catalogue.stops().len(),
        buses = catalogue.bus_count(),
        "catalogue loaded"
    );
    Ok(catalogue)
}

/// Answers stat requests against a catalogue and, if present, a router.
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    router: Option<&'a TransportRouter>,
}

impl<'a> RequestHandler<'a> {
    /// Create a handler. Without a router every route request is answered
    /// with "not found".
    pub fn new(catalogue: &'a TransportCatalogue, router: Option<&'a TransportRouter>) -> Self {
        Self { catalogue, router }
    }

    /// Answers one request.
    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let id = request.id();
        match request {
            StatRequest::Bus { name, .. } => match self.catalogue.bus_info(name) {
                Some(info) => StatResponse::Bus(BusStatsResponse {
                    request_id: id,
                    stats: BusStats::from_info(&info),
                }),
                None => StatResponse::not_found(id),
            },
            StatRequest::Stop { name, .. } => match self.catalogue.buses_by_stop(name) {
                Some(buses) => StatResponse::Stop(StopBusesResponse {
                    request_id: id,
                    stop: StopBuses {
                        buses: buses.into_iter().map(str::to_string).collect(),
                    },
                }),
                None => StatResponse::not_found(id),
            },
            StatRequest::Route { from, to, .. } => {
                match self.router.and_then(|router| router.build_route(from, to)) {
                    Some(route) => StatResponse::Route(RouteResponse {
                        request_id: id,
                        itinerary: Itinerary::from_route(&route),
                    }),
                    None => StatResponse::not_found(id),
                }
            }
            StatRequest::Map { .. } => StatResponse::error(id, MAP_UNSUPPORTED),
        }
    }

    /// Answers requests in order.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|request| self.handle(request)).collect()
    }
}

/// Processes a whole document: load, build the router, answer every query.
///
/// The router is only built when the document has routing settings; without
/// them route requests are answered with "not found".
pub fn process_document(document: &Document) -> Result<Vec<StatResponse>, RequestError> {
    let catalogue = load_catalogue(document)?;

    let router = match document.routing_settings {
        Some(input) => Some(TransportRouter::new(
            &catalogue,
            RoutingSettings::from(input),
        )?),
        None => {
            warn!("no routing_settings in document; route requests will not be answered");
            None
        }
    };

    let handler = RequestHandler::new(&catalogue, router.as_ref());
    let responses = handler.handle_all(&document.stat_requests);
    debug!(requests = responses.len(), "stat requests answered");
    Ok(responses)
}
