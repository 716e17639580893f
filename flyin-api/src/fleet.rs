use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use flyin_catalog::Aircraft;
use serde::Deserialize;

use crate::{error::AppError, extract::AppQuery, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    pub passengers: u32,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/fleet", get(list_available))
        .route("/v1/fleet/select", get(select_aircraft))
        .route("/v1/fleet/{id}", get(get_aircraft))
}

/// GET /v1/fleet
/// Available aircraft, cheapest first
pub async fn list_available(State(state): State<AppState>) -> Json<Vec<Aircraft>> {
    Json(state.fleet.available().cloned().collect())
}

/// GET /v1/fleet/select?passengers=4
/// Cheapest available aircraft for the party
pub async fn select_aircraft(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SelectQuery>,
) -> Result<Json<Aircraft>, AppError> {
    if query.passengers == 0 {
        return Err(AppError::ValidationError("At least one passenger is required".to_string()));
    }

    Ok(Json(state.fleet.select_for(query.passengers)?.clone()))
}

/// GET /v1/fleet/{id}
pub async fn get_aircraft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Aircraft>, AppError> {
    state.fleet.get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Aircraft not found: {}", id)))
}
