use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Distance reported when either end of a route is not in the table
pub const DEFAULT_DISTANCE_KM: f64 = 100.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Airport,
    Helipad,
    TouristDestination,
    PrivateAirstrip,
}

/// A named point that can be used as a departure or destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub kind: LocationKind,
}

impl Location {
    pub fn new(code: &str, name: &str, lat: f64, lng: f64, kind: LocationKind) -> Self {
        Self {
            code: code.to_uppercase(),
            name: name.to_string(),
            coordinates: Coordinates::new(lat, lng),
            kind,
        }
    }
}

/// Result of resolving free-form location text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedLocation {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl From<&Location> for ParsedLocation {
    fn from(location: &Location) -> Self {
        Self {
            lat: location.coordinates.lat,
            lng: location.coordinates.lng,
            name: location.name.clone(),
        }
    }
}

use LocationKind::*;

// Airports, landing sites and tourist destinations offered by the booking form.
const GUATEMALA: &[(&str, f64, f64, &str, LocationKind)] = &[
    ("MGGT", 14.5833, -90.5275, "Guatemala City (La Aurora)", Airport),
    ("GUA", 14.5833, -90.5275, "Guatemala City (La Aurora)", Airport),
    ("FRS", 16.9138, -89.8664, "Flores (Mundo Maya)", Airport),
    ("MGCB", 15.4689, -90.4067, "Coban Airport", Airport),
    ("MGQZ", 14.8656, -91.5019, "Quetzaltenango Airport", Airport),
    ("PBR", 15.7306, -88.5836, "Puerto Barrios Airport", Airport),
    ("RER", 14.5211, -91.6972, "Retalhuleu Airport", Airport),
    ("CUSTOM001", 14.5586, -90.7339, "Antigua Helipad", Helipad),
    ("CUSTOM002", 14.7406, -91.1581, "Lake Atitlán Landing", Helipad),
    ("CUSTOM003", 17.2222, -89.6228, "Tikal Airstrip", PrivateAirstrip),
    ("CUSTOM004", 15.5333, -89.9667, "Semuc Champey Landing", Helipad),
    ("ANTIGUA", 14.5586, -90.7339, "Antigua Guatemala", TouristDestination),
    ("ATITLAN", 14.7406, -91.1581, "Lake Atitlán", TouristDestination),
    ("TIKAL", 17.2222, -89.6228, "Tikal National Park", TouristDestination),
    ("XELA", 14.8656, -91.5019, "Quetzaltenango (Xela)", TouristDestination),
    ("SEMUC", 15.5333, -89.9667, "Semuc Champey", TouristDestination),
    ("LIVINGSTON", 15.8292, -88.7500, "Livingston", TouristDestination),
    ("MONTERRICO", 13.9333, -90.8333, "Monterrico Beach", TouristDestination),
    ("COBAN", 15.4689, -90.4067, "Cobán", TouristDestination),
    ("HUEHUE", 15.3197, -91.4711, "Huehuetenango", TouristDestination),
    ("ESCUINTLA", 14.3056, -90.7850, "Escuintla", TouristDestination),
];

static BUILTIN: LazyLock<LocationTable> = LazyLock::new(|| {
    LocationTable::new(
        GUATEMALA
            .iter()
            .map(|&(code, lat, lng, name, kind)| Location::new(code, name, lat, lng, kind)),
    )
});

// "Name (lat, lng)"
static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((-?[0-9]+\.?[0-9]*),\s*(-?[0-9]+\.?[0-9]*)\)").unwrap()
});

/// Immutable code -> location lookup table.
///
/// Codes are matched case-insensitively. The table never changes after
/// construction, so a shared reference can be handed to any number of callers.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    entries: BTreeMap<String, Location>,
}

impl LocationTable {
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        let entries = locations
            .into_iter()
            .map(|mut location| {
                location.code = location.code.to_uppercase();
                (location.code.clone(), location)
            })
            .collect();

        Self { entries }
    }

    /// The Guatemala table shipped with the service
    pub fn builtin() -> &'static LocationTable {
        &BUILTIN
    }

    pub fn get(&self, code: &str) -> Option<&Location> {
        self.entries.get(&code.to_uppercase())
    }

    /// Entries ordered by code
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Great-circle distance in kilometers between two codes.
    ///
    /// Falls back to [`DEFAULT_DISTANCE_KM`] when either code is unknown so a
    /// quote can always be produced.
    pub fn distance_between(&self, from: &str, to: &str) -> f64 {
        match (self.get(from), self.get(to)) {
            (Some(origin), Some(destination)) => {
                origin.coordinates.distance_to(&destination.coordinates)
            }
            _ => {
                tracing::debug!(from, to, "Unknown location code, using default distance");
                DEFAULT_DISTANCE_KM
            }
        }
    }

    /// Resolve free-form location text.
    ///
    /// Known codes win; otherwise an embedded `(lat, lng)` pair is extracted and
    /// the text around it becomes the name.
    pub fn parse_custom_location(&self, text: &str) -> Option<ParsedLocation> {
        if let Some(known) = self.get(text) {
            return Some(known.into());
        }

        let captures = COORDINATE_PATTERN.captures(text)?;
        let lat = captures[1].parse::<f64>().ok()?;
        let lng = captures[2].parse::<f64>().ok()?;

        let whole = captures.get(0)?;
        let name = format!("{}{}", &text[..whole.start()], &text[whole.end()..])
            .trim()
            .to_string();

        Some(ParsedLocation { lat, lng, name })
    }
}

/// [`LocationTable::distance_between`] on the builtin table
pub fn distance_between(from: &str, to: &str) -> f64 {
    LocationTable::builtin().distance_between(from, to)
}

/// [`LocationTable::parse_custom_location`] on the builtin table
pub fn parse_custom_location(text: &str) -> Option<ParsedLocation> {
    LocationTable::builtin().parse_custom_location(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_code_is_zero() {
        for location in LocationTable::builtin().iter() {
            assert_eq!(distance_between(&location.code, &location.code), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let table = LocationTable::builtin();
        for a in table.iter() {
            for b in table.iter() {
                let there = table.distance_between(&a.code, &b.code);
                let back = table.distance_between(&b.code, &a.code);
                assert!((there - back).abs() < 1e-9, "{} <-> {}", a.code, b.code);
            }
        }
    }

    #[test]
    fn test_guatemala_city_to_flores() {
        let distance = distance_between("GUA", "FRS");
        assert!((distance - 268.623).abs() < 0.01);
        assert_eq!(distance.round(), 269.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(distance_between("gua", "frs"), distance_between("GUA", "FRS"));
        assert_eq!(
            LocationTable::builtin().get("antigua").map(|l| l.name.as_str()),
            Some("Antigua Guatemala")
        );
    }

    #[test]
    fn test_unknown_codes_use_default() {
        assert_eq!(distance_between("UNKNOWN1", "UNKNOWN2"), DEFAULT_DISTANCE_KM);
        assert_eq!(distance_between("GUA", "NOWHERE"), 100.0);
        assert_eq!(distance_between("NOWHERE", "GUA"), 100.0);
    }

    #[test]
    fn test_builtin_covers_booking_form_options() {
        let table = LocationTable::builtin();
        for code in ["GUA", "FRS", "ANTIGUA", "ATITLAN", "TIKAL", "SEMUC", "MONTERRICO", "LIVINGSTON"] {
            assert!(table.get(code).is_some(), "missing {}", code);
        }
        assert_eq!(table.len(), 21);
    }

    #[test]
    fn test_parse_embedded_coordinates() {
        let parsed = parse_custom_location("My Spot (14.5, -90.5)").unwrap();
        assert_eq!(
            parsed,
            ParsedLocation { lat: 14.5, lng: -90.5, name: "My Spot".to_string() }
        );
    }

    #[test]
    fn test_parse_known_code() {
        let parsed = parse_custom_location("tikal").unwrap();
        assert_eq!(parsed.name, "Tikal National Park");
        assert_eq!(parsed.lat, 17.2222);
        assert_eq!(parsed.lng, -89.6228);
    }

    #[test]
    fn test_parse_integer_coordinates_without_space() {
        let parsed = parse_custom_location("Finca (15,-91)").unwrap();
        assert_eq!(parsed.lat, 15.0);
        assert_eq!(parsed.lng, -91.0);
        assert_eq!(parsed.name, "Finca");
    }

    #[test]
    fn test_parse_unknown_text() {
        assert!(parse_custom_location("totally unknown place").is_none());
        assert!(parse_custom_location("Somewhere (north, south)").is_none());
    }

    #[test]
    fn test_injected_table() {
        let table = LocationTable::new(vec![
            Location::new("a", "Alpha", 0.0, 0.0, LocationKind::Helipad),
            Location::new("b", "Bravo", 0.0, 1.0, LocationKind::Helipad),
        ]);

        assert_eq!(table.len(), 2);
        assert!(table.get("A").is_some());
        assert!((table.distance_between("a", "B") - 111.195).abs() < 0.01);
        assert_eq!(table.distance_between("A", "GUA"), DEFAULT_DISTANCE_KM);
    }

    #[test]
    fn test_location_serializes_flat() {
        let location = LocationTable::builtin().get("GUA").unwrap();
        let json = serde_json::to_value(location).unwrap();
        assert_eq!(json["code"], "GUA");
        assert_eq!(json["lat"], 14.5833);
        assert_eq!(json["kind"], "airport");
    }
}
