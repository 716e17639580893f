pub mod geo;
pub mod location;
pub mod payment;

pub use geo::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use location::{
    distance_between, parse_custom_location, Location, LocationKind, LocationTable,
    ParsedLocation, DEFAULT_DISTANCE_KM,
};
pub use payment::{PaymentCatalog, PaymentFees, PaymentMethod, StablecoinConfig, StablecoinToken};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
