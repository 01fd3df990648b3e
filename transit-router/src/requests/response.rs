//! Response types.
//!
//! The bodies (`BusStats`, `StopBuses`, `Itinerary`) are shared with the web
//! layer; the `*Response` wrappers add the `request_id` used in batch output.

use serde::Serialize;

use crate::domain::BusInfo;
use crate::routing::{Route, RouteItem};

/// Message returned for any query whose subject does not exist or has no answer.
pub const NOT_FOUND: &str = "not found";

/// Statistics of one bus line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusStats {
    pub curvature: f64,
    /// Metres
    pub route_length: u64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

impl BusStats {
    pub fn from_info(info: &BusInfo) -> Self {
        Self {
            curvature: info.curvature,
            route_length: info.route_length,
            stop_count: info.stop_count,
            unique_stop_count: info.unique_stop_count,
        }
    }
}

/// Buses calling at a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopBuses {
    /// Sorted bus names
    pub buses: Vec<String>,
}

/// One itinerary step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ItineraryItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

/// A fastest itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Minutes
    pub total_time: f64,
    pub items: Vec<ItineraryItem>,
}

impl Itinerary {
    pub fn from_route(route: &Route) -> Self {
        let items = route
            .items
            .iter()
            .map(|item| match item {
                RouteItem::Wait { stop_name, time } => ItineraryItem::Wait {
                    stop_name: stop_name.clone(),
                    time: *time,
                },
                RouteItem::Bus {
                    bus,
                    span_count,
                    time,
                } => ItineraryItem::Bus {
                    bus: bus.clone(),
                    span_count: *span_count,
                    time: *time,
                },
            })
            .collect();

        Self {
            total_time: route.total_time,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusStatsResponse {
    pub request_id: i64,
    #[serde(flatten)]
    pub stats: BusStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopBusesResponse {
    pub request_id: i64,
    #[serde(flatten)]
    pub stop: StopBuses,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    #[serde(flatten)]
    pub itinerary: Itinerary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorMessageResponse {
    pub request_id: i64,
    pub error_message: String,
}

/// Answer to one stat request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusStatsResponse),
    Stop(StopBusesResponse),
    Route(RouteResponse),
    Error(ErrorMessageResponse),
}

impl StatResponse {
    pub fn error(request_id: i64, message: impl Into<String>) -> Self {
        StatResponse::Error(ErrorMessageResponse {
            request_id,
            error_message: message.into(),
        })
    }

    pub fn not_found(request_id: i64) -> Self {
        Self::error(request_id, NOT_FOUND)
    }

    pub fn request_id(&self) -> i64 {
        match self {
            StatResponse::Bus(r) => r.request_id,
            StatResponse::Stop(r) => r.request_id,
            StatResponse::Route(r) => r.request_id,
            StatResponse::Error(r) => r.request_id,
        }
    }
}
