use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceCategory {
    Scenic,
    Romantic,
    Volcano,
    Cultural,
    Beach,
}

/// One way of flying an experience, priced for a full cabin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftOption {
    pub aircraft: String,
    pub capacity: u32,
    pub price: f64,
}

/// A packaged sightseeing flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub name: String,
    pub name_es: String,
    pub description: String,
    pub description_es: String,
    pub duration_minutes: u32,
    /// Per-passenger price when no aircraft option applies
    pub base_price: f64,
    pub min_passengers: u32,
    pub max_passengers: u32,
    pub includes: Vec<String>,
    pub includes_es: Vec<String>,
    pub location: String,
    pub aircraft_options: Vec<AircraftOption>,
    pub route_waypoints: Vec<String>,
    pub category: ExperienceCategory,
}

impl Experience {
    pub fn accepts(&self, passengers: u32) -> bool {
        (self.min_passengers..=self.max_passengers).contains(&passengers)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExperienceError {
    #[error("Experience not found: {0}")]
    NotFound(String),

    #[error("Experience {id} takes {min} to {max} passengers, requested {requested}")]
    PassengersOutOfRange {
        id: String,
        requested: u32,
        min: u32,
        max: u32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceQuote {
    pub experience_id: String,
    /// `None` when the per-passenger base price was used
    pub aircraft: Option<String>,
    pub passengers: u32,
    pub price: f64,
}

/// The experiences on sale
#[derive(Debug, Clone)]
pub struct ExperienceCatalog {
    experiences: Vec<Experience>,
}

impl ExperienceCatalog {
    pub fn new(experiences: Vec<Experience>) -> Self {
        Self { experiences }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_experiences())
    }

    pub fn get(&self, id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Experience> {
        self.experiences.iter()
    }

    /// Price an experience for a party.
    ///
    /// An aircraft option is charged by the share of its cabin the party
    /// fills, never more than its full price. Without a matching option the
    /// party pays `base_price` per passenger. Prices are not rounded.
    pub fn price(
        &self,
        id: &str,
        option_index: Option<usize>,
        passengers: u32,
    ) -> Result<ExperienceQuote, ExperienceError> {
        let experience = self.get(id)
            .ok_or_else(|| ExperienceError::NotFound(id.to_string()))?;

        if !experience.accepts(passengers) {
            return Err(ExperienceError::PassengersOutOfRange {
                id: id.to_string(),
                requested: passengers,
                min: experience.min_passengers,
                max: experience.max_passengers,
            });
        }

        let option = option_index.and_then(|i| experience.aircraft_options.get(i));
        let price = match option {
            Some(option) => {
                let share = (f64::from(passengers) / f64::from(option.capacity)).min(1.0);
                option.price * share
            }
            None => {
                tracing::debug!(experience = %id, ?option_index, "No aircraft option, using base price");
                experience.base_price * f64::from(passengers)
            }
        };

        Ok(ExperienceQuote {
            experience_id: experience.id.clone(),
            aircraft: option.map(|o| o.aircraft.clone()),
            passengers,
            price,
        })
    }
}

impl Default for ExperienceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: "1".into(),
            name: "Heli-Tour Ciudad, Antigua & Laguna Calderas".into(),
            name_es: "Heli-Tour Ciudad, Antigua y Laguna Calderas".into(),
            description: "Panoramic tour of Guatemala City, colonial Antigua, Pacaya Volcano, and Amatitlán Lake in 35 unforgettable minutes".into(),
            description_es: "Tour panorámico de Ciudad de Guatemala, la colonial Antigua, volcán Pacaya y lago de Amatitlán en 35 minutos inolvidables".into(),
            duration_minutes: 35,
            base_price: 479.0,
            min_passengers: 2,
            max_passengers: 3,
            includes: strings(&["Professional pilot", "Aerial photography", "Safety briefing", "Stunning views"]),
            includes_es: strings(&["Piloto profesional", "Fotografía aérea", "Briefing de seguridad", "Vistas impresionantes"]),
            location: "Guatemala City - Antigua".into(),
            aircraft_options: vec![
                AircraftOption { aircraft: "Robinson R44 II".into(), capacity: 3, price: 479.0 },
            ],
            route_waypoints: strings(&["Guatemala City", "Antigua Guatemala", "Pacaya Volcano", "Lake Amatitlán"]),
            category: ExperienceCategory::Scenic,
        },
        Experience {
            id: "2".into(),
            name: "Panoramic Overflight - 45 min".into(),
            name_es: "Sobrevuelo Panorámico - 45 min".into(),
            description: "Extended panoramic tour featuring Guatemala City, Antigua, surrounding volcanoes, and pristine lakes".into(),
            description_es: "Tour panorámico extendido que incluye Ciudad de Guatemala, Antigua, volcanes circundantes y lagos prístinos".into(),
            duration_minutes: 45,
            base_price: 745.0,
            min_passengers: 2,
            max_passengers: 4,
            includes: strings(&["Professional pilot", "Extended route", "Multiple aircraft options", "Scenic photography stops"]),
            includes_es: strings(&["Piloto profesional", "Ruta extendida", "Múltiples opciones de aeronave", "Paradas fotográficas panorámicas"]),
            location: "Guatemala City - Antigua - Volcanoes".into(),
            aircraft_options: vec![
                AircraftOption { aircraft: "Robinson R44 II".into(), capacity: 3, price: 745.0 },
                AircraftOption { aircraft: "Robinson R66".into(), capacity: 4, price: 979.0 },
            ],
            route_waypoints: strings(&["Guatemala City", "Antigua Guatemala", "Agua Volcano", "Fuego Volcano", "Acatenango Volcano"]),
            category: ExperienceCategory::Scenic,
        },
        Experience {
            id: "3".into(),
            name: "Romantic Heli-Tour".into(),
            name_es: "Heli-Tour Romántico".into(),
            description: "Special romantic helicopter experience with flowers, champagne, and photography time for unforgettable moments".into(),
            description_es: "Experiencia romántica especial en helicóptero con flores, champán y tiempo para fotografías en momentos inolvidables".into(),
            duration_minutes: 35,
            base_price: 525.0,
            min_passengers: 2,
            max_passengers: 2,
            includes: strings(&["Professional pilot", "Fresh flowers", "Champagne service", "Professional photography", "Romantic setup"]),
            includes_es: strings(&["Piloto profesional", "Flores frescas", "Servicio de champán", "Fotografía profesional", "Ambiente romántico"]),
            location: "Romantic scenic route".into(),
            aircraft_options: vec![
                AircraftOption { aircraft: "Robinson R44 II".into(), capacity: 2, price: 525.0 },
            ],
            route_waypoints: strings(&["Romantic viewpoints", "Sunset locations", "Private moments"]),
            category: ExperienceCategory::Romantic,
        },
        Experience {
            id: "4".into(),
            name: "Four Volcanoes Tour".into(),
            name_es: "Tour de Cuatro Volcanes".into(),
            description: "Epic helicopter journey to witness Guatemala’TMPs most spectacular volcanoes: Agua, Fuego, Acatenango, and Pacaya".into(),
            description_es: "Épico viaje en helicóptero para presenciar los volcanes más espectaculares de Guatemala: Agua, Fuego, Acatenango y Pacaya".into(),
            duration_minutes: 150,
            base_price: 1899.0,
            min_passengers: 2,
            max_passengers: 4,
            includes: strings(&["Professional pilot", "Four volcano circuit", "Geological insights", "Aerial photography", "Safety equipment"]),
            includes_es: strings(&["Piloto profesional", "Circuito de cuatro volcanes", "Conocimientos geológicos", "Fotografía aérea", "Equipo de seguridad"]),
            location: "Volcano circuit".into(),
            aircraft_options: vec![
                AircraftOption { aircraft: "Robinson R66".into(), capacity: 4, price: 1899.0 },
                AircraftOption { aircraft: "Airbus H125".into(), capacity: 5, price: 2299.0 },
            ],
            route_waypoints: strings(&["Agua Volcano", "Fuego Volcano", "Acatenango Volcano", "Pacaya Volcano"]),
            category: ExperienceCategory::Volcano,
        },
        Experience {
            id: "5".into(),
            name: "Tikal National Park Expedition".into(),
            name_es: "Expedición Parque Nacional Tikal".into(),
            description: "Full day helicopter expedition to Tikal with guided tour of ancient Mayan pyramids and jungle exploration".into(),
            description_es: "Expedición de día completo en helicóptero a Tikal con tour guiado de pirámides mayas antiguas y exploración de la selva".into(),
            duration_minutes: 480,
            base_price: 4500.0,
            min_passengers: 2,
            max_passengers: 6,
            includes: strings(&["Round trip helicopter", "Professional guide", "Tikal entrance fees", "Lunch", "Mayan ruins tour", "Jungle wildlife"]),
            includes_es: strings(&["Helicóptero ida y vuelta", "Guía profesional", "Tarifas de entrada a Tikal", "Almuerzo", "Tour ruinas mayas", "Vida silvestre de la selva"]),
            location: "Tikal, Petén".into(),
            aircraft_options: vec![
                AircraftOption { aircraft: "Bell 206 LongRanger".into(), capacity: 6, price: 4500.0 },
                AircraftOption { aircraft: "Airbus AS 350".into(), capacity: 5, price: 5200.0 },
            ],
            route_waypoints: strings(&["Guatemala City", "Flores", "Tikal National Park", "El Mirador viewpoint"]),
            category: ExperienceCategory::Cultural,
        },
        Experience {
            id: "6".into(),
            name: "Lake Atitlán Complete Experience".into(),
            name_es: "Experiencia Completa Lago Atitlán".into(),
            description: "Helicopter flight to stunning Lake Atitlán with hotel landing, boat tour, and indigenous village visits".into(),
            description_es: "Vuelo en helicóptero al impresionante Lago Atitlán con aterrizaje en hotel, tour en lancha y visitas a pueblos indígenas".into(),
            duration_minutes: 300,
            base_price: 2299.0,
            min_passengers: 2,
            max_passengers: 4,
            includes: strings(&["Helicopter to lake", "Hotel Casa Palopó landing", "Boat tour", "Indigenous villages", "Local lunch", "Cultural experience"]),
            includes_es: strings(&["Helicóptero al lago", "Aterrizaje Hotel Casa Palopó", "Tour en lancha", "Pueblos indígenas", "Almuerzo local", "Experiencia cultural"]),
            location: "Lake Atitlán".into(),
            aircraft_options: vec![
                AircraftOption { aircraft: "Robinson R66".into(), capacity: 4, price: 2299.0 },
                AircraftOption { aircraft: "Bell 206".into(), capacity: 4, price: 2699.0 },
            ],
            route_waypoints: strings(&["Guatemala City", "Lake Atitlán", "Panajachel", "Santiago Atitlán", "San Pedro"]),
            category: ExperienceCategory::Cultural,
        },
        Experience {
            id: "7".into(),
            name: "Monterrico Beach Experience".into(),
            name_es: "Experiencia Playa Monterrico".into(),
            description: "Helicopter flight to Guatemala’TMPs famous black sand beaches with beach time and turtle conservation visit".into(),
            description_es: "Vuelo en helicóptero a las famosas playas de arena negra de Guatemala con tiempo en la playa y visita de conservación de tortugas".into(),
            duration_minutes: 240,
            base_price: 1599.0,
            min_passengers: 2,
            max_passengers: 4,
            includes: strings(&["Beach helicopter landing", "Black sand beaches", "Turtle conservation center", "Lunch included", "Beach time"]),
            includes_es: strings(&["Aterrizaje en helicóptero en playa", "Playas de arena negra", "Centro de conservación de tortugas", "Almuerzo incluido", "Tiempo en playa"]),
            location: "Monterrico, Pacific Coast".into(),
            aircraft_options: vec![
                AircraftOption { aircraft: "Robinson R66".into(), capacity: 4, price: 1599.0 },
                AircraftOption { aircraft: "Bell 206".into(), capacity: 4, price: 1899.0 },
            ],
            route_waypoints: strings(&["Guatemala City", "Pacific Coast", "Monterrico Beach", "Turtle Sanctuary"]),
            category: ExperienceCategory::Beach,
        },
        Experience {
            id: "8".into(),
            name: "Seven Volcanoes + Atitlán Tour".into(),
            name_es: "Tour Siete Volcanes + Atitlán".into(),
            description: "Ultimate helicopter experience covering seven volcanoes and Lake Atitlán in one spectacular journey".into(),
            description_es: "Experiencia definitiva en helicóptero cubriendo siete volcanes y el Lago Atitlán en un viaje espectacular".into(),
            duration_minutes: 210,
            base_price: 3299.0,
            min_passengers: 2,
            max_passengers: 4,
            includes: strings(&["Seven volcano circuit", "Lake Atitlán overflight", "Professional commentary", "Aerial photography", "Premium experience"]),
            includes_es: strings(&["Circuito de siete volcanes", "Sobrevuelo Lago Atitlán", "Comentario profesional", "Fotografía aérea", "Experiencia premium"]),
            location: "Multi-volcano circuit".into(),
            aircraft_options: vec![
                AircraftOption { aircraft: "Bell 206 LongRanger".into(), capacity: 4, price: 3299.0 },
                AircraftOption { aircraft: "Airbus AS 350".into(), capacity: 5, price: 3799.0 },
            ],
            route_waypoints: strings(&["All major volcanoes", "Lake Atitlán", "Scenic viewpoints"]),
            category: ExperienceCategory::Volcano,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = ExperienceCatalog::builtin();
        assert_eq!(catalog.iter().count(), 8);

        let tikal = catalog.get("5").unwrap();
        assert_eq!(tikal.category, ExperienceCategory::Cultural);
        assert_eq!(tikal.max_passengers, 6);
        assert_eq!(tikal.aircraft_options.len(), 2);
        assert!(catalog.get("9").is_none());
    }

    #[test]
    fn test_price_by_cabin_share() {
        let catalog = ExperienceCatalog::builtin();

        // Two of the R44's three seats
        let quote = catalog.price("1", Some(0), 2).unwrap();
        assert_close(quote.price, 479.0 * 2.0 / 3.0);
        assert_eq!(quote.aircraft.as_deref(), Some("Robinson R44 II"));

        let quote = catalog.price("1", Some(0), 3).unwrap();
        assert_close(quote.price, 479.0);
    }

    #[test]
    fn test_price_capped_at_full_cabin() {
        let catalog = ExperienceCatalog::builtin();
        // Four passengers on a three-seat option still pay one cabin
        let quote = catalog.price("2", Some(0), 4).unwrap();
        assert_close(quote.price, 745.0);

        let quote = catalog.price("2", Some(1), 4).unwrap();
        assert_close(quote.price, 979.0);
    }

    #[test]
    fn test_price_falls_back_to_base_price() {
        let catalog = ExperienceCatalog::builtin();

        let quote = catalog.price("1", Some(5), 2).unwrap();
        assert_close(quote.price, 958.0);
        assert!(quote.aircraft.is_none());

        let quote = catalog.price("4", None, 3).unwrap();
        assert_close(quote.price, 1899.0 * 3.0);
    }

    #[test]
    fn test_price_errors() {
        let catalog = ExperienceCatalog::builtin();
        assert!(matches!(catalog.price("42", Some(0), 2), Err(ExperienceError::NotFound(_))));
        assert!(matches!(
            catalog.price("3", Some(0), 3),
            Err(ExperienceError::PassengersOutOfRange { requested: 3, min: 2, max: 2, .. })
        ));
        assert!(catalog.price("1", Some(0), 0).is_err());
    }
}
