use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use flyin_catalog::{Experience, ExperienceQuote};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, extract::AppJson, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ExperienceQuoteRequest {
    pub experience_id: String,
    /// Index into the experience's aircraft options
    #[serde(default)]
    pub aircraft_option: usize,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
}

fn default_passengers() -> u32 { 2 }

#[derive(Debug, Serialize)]
pub struct ExperienceQuoteResponse {
    pub quote_id: Uuid,
    #[serde(flatten)]
    pub quote: ExperienceQuote,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/experiences", get(list_experiences))
        .route("/v1/experiences/{id}", get(get_experience))
        .route("/v1/quotes/experience", post(quote_experience))
}

/// GET /v1/experiences
pub async fn list_experiences(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.experiences.iter().cloned().collect())
}

/// GET /v1/experiences/{id}
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Experience>, AppError> {
    state.experiences.get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Experience not found: {}", id)))
}

/// POST /v1/quotes/experience
/// Price a packaged flight for a party
pub async fn quote_experience(
    State(state): State<AppState>,
    AppJson(req): AppJson<ExperienceQuoteRequest>,
) -> Result<Json<ExperienceQuoteResponse>, AppError> {
    let quote = state.experiences.price(&req.experience_id, Some(req.aircraft_option), req.passengers)?;

    let quote_id = Uuid::new_v4();
    tracing::info!(
        %quote_id,
        experience = %quote.experience_id,
        passengers = quote.passengers,
        price = quote.price,
        "Experience quote issued"
    );

    Ok(Json(ExperienceQuoteResponse { quote_id, quote }))
}
