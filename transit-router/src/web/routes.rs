//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::requests::{
    BusStats, Itinerary, NOT_FOUND, RequestHandler, StatRequest, StatResponse, StopBuses,
};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/buses/:name", get(bus_stats))
        .route("/stops/:name", get(stop_buses))
        .route("/route", get(route))
        .route("/stat_requests", post(stat_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Statistics of one bus line.
async fn bus_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BusStats>, AppError> {
    let info = state
        .catalogue
        .bus_info(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Bus {name}: {NOT_FOUND}"),
        })?;

    Ok(Json(BusStats::from_info(&info)))
}

/// Buses calling at a stop, sorted by name.
async fn stop_buses(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StopBuses>, AppError> {
    let buses = state
        .catalogue
        .buses_by_stop(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Stop {name}: {NOT_FOUND}"),
        })?;

    Ok(Json(StopBuses {
        buses: buses.into_iter().map(str::to_string).collect(),
    }))
}

/// Fastest itinerary between two stops.
async fn route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<Itinerary>, AppError> {
    let route = state
        .router
        .build_route(&query.from, &query.to)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Route {} -> {}: {NOT_FOUND}", query.from, query.to),
        })?;

    debug!(
        from = %query.from,
        to = %query.to,
        total_time = route.total_time,
        "route served"
    );
    Ok(Json(Itinerary::from_route(&route)))
}

/// Answers a batch of stat requests, in order.
async fn stat_requests(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<StatResponse>>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let requests: Vec<StatRequest> = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid stat requests");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let handler = RequestHandler::new(&state.catalogue, Some(state.router.as_ref()));
    Ok(Json(handler.handle_all(&requests)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        debug!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
