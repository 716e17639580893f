use chrono::NaiveDate;
use flyin_core::LocationTable;
use serde::{Deserialize, Serialize};

/// Typical helicopter cruise speed
pub const DEFAULT_CRUISE_SPEED_KMH: f64 = 180.0;
/// Allowance for takeoff, landing and navigation
pub const DEFAULT_OVERHEAD_FACTOR: f64 = 1.2;
/// Surcharge per passenger beyond the first, as a fraction of the base price
pub const DEFAULT_PASSENGER_SURCHARGE_RATE: f64 = 0.2;

/// Estimated flight time in hours, overhead included
pub fn flight_time(distance_km: f64, cruise_speed_kmh: f64) -> f64 {
    (distance_km / cruise_speed_kmh) * DEFAULT_OVERHEAD_FACTOR
}

/// One-way transport price with the default pricing configuration
pub fn transport_price(distance_km: f64, hourly_rate: f64, passengers: u32) -> PriceQuote {
    PricingEngine::default().transport_price(distance_km, hourly_rate, passengers)
}

/// Rounds half-way values up, the same way the booking form always did
fn round_half_up(value: f64) -> f64 {
    // `f64::round` sends ties away from zero; negative ties go back up
    let rounded = value.round();
    if value - rounded == 0.5 { rounded + 1.0 } else { rounded }
}

/// Price breakdown for a single leg. All figures are whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub distance_km: f64,
    pub flight_time_minutes: f64,
    pub base_price: f64,
    pub passenger_fee: f64,
    pub total_price: f64,
}

/// A one-way quote scaled for the return leg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundTripQuote {
    /// Distance and flight time are per leg
    pub one_way: PriceQuote,
    pub multiplier: f64,
    pub same_day: bool,
    pub base_price: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_cruise_speed")]
    pub cruise_speed_kmh: f64,

    #[serde(default = "default_overhead_factor")]
    pub overhead_factor: f64,

    #[serde(default = "default_passenger_surcharge_rate")]
    pub passenger_surcharge_rate: f64,

    /// Rate used for estimates when no aircraft has been picked yet
    #[serde(default = "default_standard_hourly_rate")]
    pub standard_hourly_rate: f64,

    #[serde(default = "default_same_day_multiplier")]
    pub same_day_round_trip_multiplier: f64,

    #[serde(default = "default_round_trip_multiplier")]
    pub round_trip_multiplier: f64,
}

fn default_cruise_speed() -> f64 { DEFAULT_CRUISE_SPEED_KMH }
fn default_overhead_factor() -> f64 { DEFAULT_OVERHEAD_FACTOR }
fn default_passenger_surcharge_rate() -> f64 { DEFAULT_PASSENGER_SURCHARGE_RATE }
fn default_standard_hourly_rate() -> f64 { 600.0 }
fn default_same_day_multiplier() -> f64 { 1.8 }
fn default_round_trip_multiplier() -> f64 { 2.0 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cruise_speed_kmh: default_cruise_speed(),
            overhead_factor: default_overhead_factor(),
            passenger_surcharge_rate: default_passenger_surcharge_rate(),
            standard_hourly_rate: default_standard_hourly_rate(),
            same_day_round_trip_multiplier: default_same_day_multiplier(),
            round_trip_multiplier: default_round_trip_multiplier(),
        }
    }
}

/// Transport pricing engine.
///
/// Stateless apart from its configuration; every method is a pure function of
/// its arguments and can be called as often as needed.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Flight time in hours at the configured cruise speed
    pub fn flight_time(&self, distance_km: f64) -> f64 {
        (distance_km / self.config.cruise_speed_kmh) * self.config.overhead_factor
    }

    /// Price a one-way flight.
    ///
    /// Each passenger after the first adds a flat share of the base price; the
    /// surcharge is linear, not compounding. Inputs are not validated, so a NaN
    /// distance or rate comes back as NaN.
    pub fn transport_price(&self, distance_km: f64, hourly_rate: f64, passengers: u32) -> PriceQuote {
        let flight_time = self.flight_time(distance_km);
        let base_price = hourly_rate * flight_time;

        let additional_passengers = passengers.saturating_sub(1) as f64;
        let passenger_fee = base_price * additional_passengers * self.config.passenger_surcharge_rate;

        let total_price = base_price + passenger_fee;

        PriceQuote {
            distance_km: round_half_up(distance_km),
            flight_time_minutes: round_half_up(flight_time * 60.0),
            base_price: round_half_up(base_price),
            passenger_fee: round_half_up(passenger_fee),
            total_price: round_half_up(total_price),
        }
    }

    /// Price a flight between two location codes
    pub fn quote_route(
        &self,
        locations: &LocationTable,
        from: &str,
        to: &str,
        hourly_rate: f64,
        passengers: u32,
    ) -> PriceQuote {
        let distance_km = locations.distance_between(from, to);
        let quote = self.transport_price(distance_km, hourly_rate, passengers);

        tracing::debug!(from, to, distance_km, total = quote.total_price, "Priced route");
        quote
    }

    pub fn round_trip_multiplier(&self, departure: NaiveDate, return_date: NaiveDate) -> f64 {
        if departure == return_date {
            self.config.same_day_round_trip_multiplier
        } else {
            self.config.round_trip_multiplier
        }
    }

    /// Scale a one-way quote for a return flight.
    ///
    /// Only the base and total prices are multiplied; they are scaled from the
    /// already rounded one-way figures.
    pub fn round_trip(&self, quote: PriceQuote, departure: NaiveDate, return_date: NaiveDate) -> RoundTripQuote {
        let multiplier = self.round_trip_multiplier(departure, return_date);

        RoundTripQuote {
            one_way: quote,
            multiplier,
            same_day: departure == return_date,
            base_price: round_half_up(quote.base_price * multiplier),
            total_price: round_half_up(quote.total_price * multiplier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_flight_time() {
        assert_eq!(flight_time(180.0, DEFAULT_CRUISE_SPEED_KMH), 1.2);
        assert_eq!(flight_time(0.0, DEFAULT_CRUISE_SPEED_KMH), 0.0);
        assert_eq!(flight_time(100.0, 100.0), 1.2);
        // Not clamped
        assert!(flight_time(-90.0, DEFAULT_CRUISE_SPEED_KMH) < 0.0);
    }

    #[test]
    fn test_single_passenger() {
        let quote = transport_price(180.0, 600.0, 1);
        assert_eq!(quote.distance_km, 180.0);
        assert_eq!(quote.flight_time_minutes, 72.0);
        assert_eq!(quote.base_price, 720.0);
        assert_eq!(quote.passenger_fee, 0.0);
        assert_eq!(quote.total_price, 720.0);
    }

    #[test]
    fn test_additional_passengers_are_linear() {
        let quote = transport_price(180.0, 600.0, 3);
        assert_eq!(quote.base_price, 720.0);
        assert_eq!(quote.passenger_fee, 288.0);
        assert_eq!(quote.total_price, 1008.0);
    }

    #[test]
    fn test_zero_passengers_pay_no_fee() {
        let quote = transport_price(180.0, 600.0, 0);
        assert_eq!(quote.passenger_fee, 0.0);
        assert_eq!(quote.total_price, 720.0);
    }

    #[test]
    fn test_default_distance_quote() {
        let quote = transport_price(100.0, 600.0, 1);
        assert_eq!(quote.flight_time_minutes, 40.0);
        assert_eq!(quote.total_price, 400.0);
    }

    #[test]
    fn test_rounding() {
        // 268.623 km at 600/h -> 1074.49
        let quote = transport_price(268.62304872914063, 600.0, 1);
        assert_eq!(quote.distance_km, 269.0);
        assert_eq!(quote.flight_time_minutes, 107.0);
        assert_eq!(quote.base_price, 1074.0);

        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_rounding_near_half() {
        // Adding 0.5 first would round this up to 1.0
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        // Odd integers above 2^52 have no room for a half step
        assert_eq!(round_half_up(4503599627370497.0), 4503599627370497.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(1074.49), 1074.0);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_idempotent() {
        let engine = PricingEngine::default();
        let first = engine.transport_price(268.6, 1800.0, 4);
        let second = engine.transport_price(268.6, 1800.0, 4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_nan_propagates() {
        let quote = transport_price(f64::NAN, 600.0, 2);
        assert!(quote.distance_km.is_nan());
        assert!(quote.total_price.is_nan());
    }

    #[test]
    fn test_configured_engine() {
        let engine = PricingEngine::new(PricingConfig {
            cruise_speed_kmh: 240.0,
            passenger_surcharge_rate: 0.1,
            ..PricingConfig::default()
        });

        let quote = engine.transport_price(240.0, 1000.0, 2);
        assert_eq!(quote.flight_time_minutes, 72.0);
        assert_eq!(quote.base_price, 1200.0);
        assert_eq!(quote.passenger_fee, 120.0);
        assert_eq!(quote.total_price, 1320.0);
    }

    #[test]
    fn test_quote_route() {
        let engine = PricingEngine::default();
        let table = LocationTable::builtin();

        let quote = engine.quote_route(table, "gua", "frs", 600.0, 1);
        assert_eq!(quote.distance_km, 269.0);
        assert_eq!(quote.total_price, 1074.0);

        let fallback = engine.quote_route(table, "GUA", "My Finca", 600.0, 1);
        assert_eq!(fallback.distance_km, 100.0);
        assert_eq!(fallback.total_price, 400.0);
    }

    #[test]
    fn test_round_trip_same_day() {
        let engine = PricingEngine::default();
        let quote = engine.transport_price(180.0, 600.0, 3);
        let round_trip = engine.round_trip(quote, date(2025, 3, 1), date(2025, 3, 1));

        assert!(round_trip.same_day);
        assert_eq!(round_trip.multiplier, 1.8);
        assert_eq!(round_trip.base_price, 1296.0);
        assert_eq!(round_trip.total_price, 1814.0);
        assert_eq!(round_trip.one_way.passenger_fee, 288.0);
    }

    #[test]
    fn test_round_trip_different_days() {
        let engine = PricingEngine::default();
        let quote = engine.transport_price(180.0, 600.0, 1);
        let round_trip = engine.round_trip(quote, date(2025, 3, 1), date(2025, 3, 4));

        assert!(!round_trip.same_day);
        assert_eq!(round_trip.multiplier, 2.0);
        assert_eq!(round_trip.base_price, 1440.0);
        assert_eq!(round_trip.total_price, 1440.0);
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: PricingConfig = serde_json::from_str(r#"{ "standard_hourly_rate": 750.0 }"#).unwrap();
        assert_eq!(config.standard_hourly_rate, 750.0);
        assert_eq!(config.cruise_speed_kmh, 180.0);
        assert_eq!(config.round_trip_multiplier, 2.0);
    }
}
