use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flyin_catalog::{ExperienceError, FleetError};
use flyin_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    /// Body or query string the extractors could not accept
    RejectedRequest(StatusCode, String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::RejectedRequest(status, msg) => (status, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<FleetError> for AppError {
    fn from(err: FleetError) -> Self {
        match err {
            FleetError::NotFound(_) => AppError::NotFoundError(err.to_string()),
            FleetError::CapacityExceeded { .. } => AppError::ValidationError(err.to_string()),
            FleetError::Unavailable(_) | FleetError::NoSuitableAircraft(_) => {
                AppError::ConflictError(err.to_string())
            },
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(_) => AppError::ValidationError(err.to_string()),
            CoreError::UnknownPaymentMethod(_) => AppError::NotFoundError(err.to_string()),
        }
    }
}

impl From<ExperienceError> for AppError {
    fn from(err: ExperienceError) -> Self {
        match err {
            ExperienceError::NotFound(_) => AppError::NotFoundError(err.to_string()),
            ExperienceError::PassengersOutOfRange { .. } => AppError::ValidationError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::RejectedRequest(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::RejectedRequest(rejection.status(), rejection.body_text())
    }
}
