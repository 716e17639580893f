use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use flyin_core::{Location, ParsedLocation};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    extract::{AppJson, AppQuery},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ParseLocationRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseLocationResponse {
    pub location: Option<ParsedLocation>,
}

#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    /// False when the default distance was used
    pub resolved: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/locations", get(list_locations))
        .route("/v1/locations/parse", post(parse_location))
        .route("/v1/locations/{code}", get(get_location))
        .route("/v1/distance", get(distance))
}

/// GET /v1/locations
pub async fn list_locations(State(state): State<AppState>) -> Json<Vec<Location>> {
    Json(state.locations.iter().cloned().collect())
}

/// GET /v1/locations/{code}
pub async fn get_location(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Location>, AppError> {
    state.locations.get(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Unknown location: {}", code)))
}

/// POST /v1/locations/parse
pub async fn parse_location(
    State(state): State<AppState>,
    AppJson(req): AppJson<ParseLocationRequest>,
) -> Json<ParseLocationResponse> {
    Json(ParseLocationResponse {
        location: state.locations.parse_custom_location(&req.text),
    })
}

/// GET /v1/distance?from=GUA&to=FRS
pub async fn distance(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<DistanceQuery>,
) -> Json<DistanceResponse> {
    let resolved = state.locations.get(&query.from).is_some() && state.locations.get(&query.to).is_some();
    let distance_km = state.locations.distance_between(&query.from, &query.to);

    Json(DistanceResponse {
        from: query.from,
        to: query.to,
        distance_km,
        resolved,
    })
}
