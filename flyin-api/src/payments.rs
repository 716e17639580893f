use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use flyin_core::{PaymentMethod, StablecoinConfig};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, extract::AppJson, state::AppState};

#[derive(Debug, Deserialize)]
pub struct FeeRequest {
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct FeeResponse {
    pub method: String,
    pub amount: f64,
    pub fee: f64,
    pub total: f64,
    pub auto_approve: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/payment-methods", get(list_methods))
        .route("/v1/payment-methods/stablecoin", get(stablecoin_config))
        .route("/v1/payment-methods/{id}/fee", post(calculate_fee))
}

/// GET /v1/payment-methods
pub async fn list_methods(State(state): State<AppState>) -> Json<Vec<PaymentMethod>> {
    Json(state.payments.methods().to_vec())
}

/// GET /v1/payment-methods/stablecoin
/// Networks and tokens accepted for stablecoin top-ups
pub async fn stablecoin_config(State(state): State<AppState>) -> Json<StablecoinConfig> {
    Json(state.payments.stablecoin().clone())
}

/// POST /v1/payment-methods/{id}/fee
pub async fn calculate_fee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(req): AppJson<FeeRequest>,
) -> Result<Json<FeeResponse>, AppError> {
    let fee = state.payments.processing_fee(&id, req.amount)?;

    Ok(Json(FeeResponse {
        auto_approve: state.payments.should_auto_approve(req.amount, &id),
        method: id,
        amount: req.amount,
        fee,
        total: req.amount + fee,
    }))
}
