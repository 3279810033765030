use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit strings keyed by wire field name, as reported in `current_units`.
pub type Units = BTreeMap<String, String>;

/// A geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Instantaneous conditions at a coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub precipitation: f64,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
}

/// What a successful forecast call yields.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub conditions: CurrentConditions,
    pub units: Units,
}

/// Everything the presenter needs for one lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub city: String,
    pub country: String,
    #[serde(flatten)]
    pub conditions: CurrentConditions,
    pub units: Units,
}

impl DisplayRecord {
    pub fn new(place: Place, observation: Observation) -> Self {
        Self {
            city: place.name,
            country: place.country,
            conditions: observation.conditions,
            units: observation.units,
        }
    }

    /// "City, Country", or just the city when the provider gave no country.
    pub fn location_label(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}
