use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use flyin_catalog::{PriceQuote, RoundTripQuote};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, extract::AppJson, state::AppState};

#[derive(Debug, Deserialize)]
pub struct TransportQuoteRequest {
    pub from: String,
    pub to: String,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    pub aircraft_id: Option<String>,
    #[serde(default)]
    pub is_round_trip: bool,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
}

fn default_passengers() -> u32 { 1 }

#[derive(Debug, Serialize)]
pub struct TransportQuoteResponse {
    pub quote_id: Uuid,
    pub from: String,
    pub to: String,
    pub aircraft_id: Option<String>,
    pub hourly_rate: f64,
    pub quote: PriceQuote,
    pub round_trip: Option<RoundTripQuote>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/quotes/transport", post(quote_transport))
}

/// POST /v1/quotes/transport
/// Estimate the price of a charter between two locations
pub async fn quote_transport(
    State(state): State<AppState>,
    AppJson(req): AppJson<TransportQuoteRequest>,
) -> Result<Json<TransportQuoteResponse>, AppError> {
    if req.from.trim().is_empty() || req.to.trim().is_empty() {
        return Err(AppError::ValidationError("Both from and to are required".to_string()));
    }
    if req.passengers == 0 {
        return Err(AppError::ValidationError("At least one passenger is required".to_string()));
    }

    let hourly_rate = match &req.aircraft_id {
        Some(id) => state.fleet.check_capacity(id, req.passengers)?.hourly_rate,
        None => state.pricing.config().standard_hourly_rate,
    };

    let quote = state.pricing.quote_route(&state.locations, &req.from, &req.to, hourly_rate, req.passengers);

    // Return pricing needs both dates to tell a same-day trip apart
    let round_trip = match (req.is_round_trip, req.departure_date, req.return_date) {
        (true, Some(departure), Some(return_date)) => {
            Some(state.pricing.round_trip(quote, departure, return_date))
        }
        _ => None,
    };

    let quote_id = Uuid::new_v4();
    tracing::info!(
        %quote_id,
        from = %req.from,
        to = %req.to,
        passengers = req.passengers,
        total = round_trip.map_or(quote.total_price, |r| r.total_price),
        "Transport quote issued"
    );

    Ok(Json(TransportQuoteResponse {
        quote_id,
        from: req.from,
        to: req.to,
        aircraft_id: req.aircraft_id,
        hourly_rate,
        quote,
        round_trip,
    }))
}
