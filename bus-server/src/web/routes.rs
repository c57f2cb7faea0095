//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{
    Coordinates, Direction, DomainError, RouteStopPair, ServiceNo, Station, StationCode, StopCode,
    great_circle_metres,
};
use crate::network::distances_from_point;
use crate::topology::RouteView;
use crate::transfer::{find_services_to, rank_matches};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/services/:service/:direction/route", get(route_view))
        .route("/services/:service/:direction/after-loop", get(after_loop))
        .route("/stops/:code/opposite", get(opposite_stop))
        .route("/transfers", get(transfers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up a service's full route, which must have at least one stop.
fn published_route(
    state: &AppState,
    service: &str,
    direction: u8,
) -> Result<Vec<RouteStopPair>, AppError> {
    let service_no = ServiceNo::new(service).map_err(DomainError::from)?;
    let direction = Direction::from_number(direction).map_err(DomainError::from)?;

    let route = state.source.fetch_route(&service_no, direction);
    if route.is_empty() {
        return Err(AppError::NotFound {
            message: format!("no route for service {service_no} direction {direction}"),
        });
    }
    Ok(route)
}

/// A point given as separate latitude and longitude query parameters.
fn requested_point(lat: Option<f64>, lon: Option<f64>) -> Result<Option<Coordinates>, AppError> {
    let point = match (lat, lon) {
        (None, None) => return Ok(None),
        (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
        _ => {
            return Err(AppError::BadRequest {
                message: "a point needs both latitude and longitude".to_string(),
            });
        }
    };
    if !point.is_valid() {
        return Err(AppError::BadRequest {
            message: "coordinates out of range".to_string(),
        });
    }
    Ok(Some(point))
}

/// A service's route, optionally started from a stop of a previous view.
async fn route_view(
    State(state): State<AppState>,
    Path((service, direction)): Path<(String, u8)>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let point = requested_point(req.lat, req.lon)?;
    let route = published_route(&state, &service, direction)?;

    let mut view = RouteView::resumed(route, req.offset.unwrap_or(0));
    if let Some(from) = req.from {
        view.start_from(from);
    }

    let mut response = RouteResponse::from_view(&service, direction, &view);
    if let Some(point) = point {
        let walks = distances_from_point(point, view.displayed(), great_circle_metres);
        response = response.with_walks(&walks);
    }
    Ok(Json(response))
}

/// What a loop service does after its first lap.
async fn after_loop(
    State(state): State<AppState>,
    Path((service, direction)): Path<(String, u8)>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = published_route(&state, &service, direction)?;

    let mut view = RouteView::new(route);
    view.start_after_loop();

    Ok(Json(RouteResponse::from_view(&service, direction, &view)))
}

/// The stop on the other side of the road.
async fn opposite_stop(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StopResult>, AppError> {
    let code = StopCode::new(&code).map_err(DomainError::from)?;
    if !code.has_opposite() {
        return Err(AppError::NotFound {
            message: format!("stop {code} has no opposite stop"),
        });
    }

    let opposite = code.opposite();
    let stop = state
        .source
        .fetch_stop(&opposite)
        .ok_or_else(|| AppError::NotFound {
            message: format!("opposite stop {opposite} of {code} is not in the network"),
        })?;

    Ok(Json(StopResult::from_stop(&stop)))
}

/// Resolve the target of a transfer search: a station code if one was
/// given, otherwise a coordinate pair.
fn transfer_target(
    state: &AppState,
    req: &TransferRequest,
) -> Result<(Coordinates, Option<Station>), AppError> {
    if let Some(code) = &req.station {
        let code = StationCode::new(code).map_err(DomainError::from)?;
        let station = state
            .source
            .fetch_station(&code)
            .ok_or_else(|| AppError::NotFound {
                message: format!("no station {code}"),
            })?;
        return Ok((station.location, Some(station)));
    }

    let target = requested_point(req.target_lat, req.target_lon)?.ok_or_else(|| {
        AppError::BadRequest {
            message: "a target station or point is required".to_string(),
        }
    })?;
    Ok((target, None))
}

/// Services that shorten the walk from origin to target.
async fn transfers(
    State(state): State<AppState>,
    Query(req): Query<TransferRequest>,
) -> Result<Json<TransfersResponse>, AppError> {
    let origin = Coordinates::new(req.origin_lat, req.origin_lon);
    if !origin.is_valid() {
        return Err(AppError::BadRequest {
            message: "coordinates out of range".to_string(),
        });
    }
    let (target, station) = transfer_target(&state, &req)?;
    let budget = req.budget.unwrap_or(state.transfer.default_budget_metres);

    // The search reads every stop and many routes; keep it off the async
    // workers.
    let source = state.source.clone();
    let config = state.transfer.clone();
    let search = tokio::task::spawn_blocking(move || {
        find_services_to(
            origin,
            target,
            budget,
            source.as_ref(),
            great_circle_metres,
            &config,
        )
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("transfer search failed: {e}"),
    })?;

    let ranked = rank_matches(search.matches, req.sort.unwrap_or_default());
    Ok(Json(TransfersResponse {
        station: station.as_ref().map(StationResult::from_station),
        direct_metres: search.direct_metres,
        budget_metres: search.budget_metres,
        transfers: ranked.iter().map(TransferResult::from_match).collect(),
    }))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
