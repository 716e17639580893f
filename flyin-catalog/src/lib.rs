pub mod experience;
pub mod fleet;
pub mod pricing;

pub use experience::{
    AircraftOption, Experience, ExperienceCatalog, ExperienceCategory, ExperienceError, ExperienceQuote,
};
pub use fleet::{Aircraft, AircraftType, Fleet, FleetError};
pub use pricing::{flight_time, transport_price, PriceQuote, PricingConfig, PricingEngine, RoundTripQuote};
