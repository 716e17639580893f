use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AircraftType {
    Helicopter,
    Airplane,
}

/// An aircraft that can be assigned to a charter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: String,
    pub name: String,
    pub model: String,
    pub aircraft_type: AircraftType,
    pub capacity: u32,
    pub hourly_rate: f64,
    pub description: String,
    pub features: Vec<String>,
    pub is_available: bool,
}

impl Aircraft {
    pub fn fits(&self, passengers: u32) -> bool {
        passengers <= self.capacity
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    #[error("Aircraft not found: {0}")]
    NotFound(String),

    #[error("Aircraft not available: {0}")]
    Unavailable(String),

    #[error("Capacity exceeded: requested {requested}, capacity {capacity}")]
    CapacityExceeded {
        requested: u32,
        capacity: u32,
    },

    #[error("No available aircraft for {0} passengers")]
    NoSuitableAircraft(u32),
}

/// The charter fleet
#[derive(Debug, Clone)]
pub struct Fleet {
    aircraft: Vec<Aircraft>,
}

impl Fleet {
    pub fn new(aircraft: Vec<Aircraft>) -> Self {
        let mut aircraft = aircraft;
        aircraft.sort_by(|a, b| a.hourly_rate.total_cmp(&b.hourly_rate));
        Self { aircraft }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            helicopter(
                "robinson-r44",
                "Robinson R44",
                "R44 Raven II",
                3,
                1200.0,
                "Perfect for scenic tours and short transfers",
                &["3 passengers", "Excellent visibility", "Cost effective", "Ideal for tours"],
            ),
            helicopter(
                "bell-206",
                "Bell 206 JetRanger",
                "Bell 206B-3",
                4,
                1800.0,
                "Premium comfort and reliability",
                &["4 passengers", "Turbine engine", "Smooth flight", "Professional standard"],
            ),
            helicopter(
                "airbus-h125",
                "Airbus H125",
                "H125 Ecureuil",
                5,
                2200.0,
                "High performance for challenging destinations",
                &["5 passengers", "High altitude capable", "Advanced avionics", "Luxury interior"],
            ),
            helicopter(
                "bell-407",
                "Bell 407",
                "Bell 407GXi",
                6,
                2800.0,
                "Ultimate luxury and space for larger groups",
                &["6 passengers", "Spacious cabin", "Premium comfort", "Executive transport"],
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| a.id == id)
    }

    /// Available aircraft, cheapest first
    pub fn available(&self) -> impl Iterator<Item = &Aircraft> {
        self.aircraft.iter().filter(|a| a.is_available)
    }

    /// Cheapest available aircraft that seats the whole party
    pub fn select_for(&self, passengers: u32) -> Result<&Aircraft, FleetError> {
        let selected = self
            .available()
            .find(|a| a.fits(passengers))
            .ok_or(FleetError::NoSuitableAircraft(passengers))?;

        tracing::debug!(aircraft = %selected.id, passengers, "Selected aircraft");
        Ok(selected)
    }

    /// Look up an aircraft and make sure it can fly this party
    pub fn check_capacity(&self, id: &str, passengers: u32) -> Result<&Aircraft, FleetError> {
        let aircraft = self.get(id)
            .ok_or_else(|| FleetError::NotFound(id.to_string()))?;

        if !aircraft.is_available {
            return Err(FleetError::Unavailable(id.to_string()));
        }

        if !aircraft.fits(passengers) {
            return Err(FleetError::CapacityExceeded {
                requested: passengers,
                capacity: aircraft.capacity,
            });
        }

        Ok(aircraft)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn helicopter(
    id: &str,
    name: &str,
    model: &str,
    capacity: u32,
    hourly_rate: f64,
    description: &str,
    features: &[&str],
) -> Aircraft {
    Aircraft {
        id: id.to_string(),
        name: name.to_string(),
        model: model.to_string(),
        aircraft_type: AircraftType::Helicopter,
        capacity,
        hourly_rate,
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        is_available: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_sorted_by_rate() {
        let fleet = Fleet::builtin();
        let rates: Vec<f64> = fleet.available().map(|a| a.hourly_rate).collect();
        assert_eq!(rates, vec![1200.0, 1800.0, 2200.0, 2800.0]);
    }

    #[test]
    fn test_select_cheapest_that_fits() {
        let fleet = Fleet::builtin();
        assert_eq!(fleet.select_for(2).unwrap().id, "robinson-r44");
        assert_eq!(fleet.select_for(4).unwrap().id, "bell-206");
        assert_eq!(fleet.select_for(6).unwrap().id, "bell-407");
        assert!(matches!(fleet.select_for(7), Err(FleetError::NoSuitableAircraft(7))));
    }

    #[test]
    fn test_check_capacity() {
        let mut fleet = Fleet::builtin();
        assert!(fleet.check_capacity("bell-206", 4).is_ok());
        assert!(matches!(
            fleet.check_capacity("bell-206", 5),
            Err(FleetError::CapacityExceeded { requested: 5, capacity: 4 })
        ));
        assert!(matches!(fleet.check_capacity("ec-135", 1), Err(FleetError::NotFound(_))));

        fleet.aircraft.iter_mut()
            .filter(|a| a.id == "bell-206")
            .for_each(|a| a.is_available = false);
        assert!(matches!(fleet.check_capacity("bell-206", 1), Err(FleetError::Unavailable(_))));
        assert_eq!(fleet.select_for(4).unwrap().id, "airbus-h125");
    }
}
