use serde::{Deserialize, Serialize};

/// A single city lookup as requested by a client.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    /// City name; must be non-empty after trimming.
    pub city: String,
    /// Optional ISO country code used to disambiguate the city.
    pub country: Option<String>,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>, country: Option<String>) -> Self {
        Self { city: city.into(), country }
    }

    /// The location string sent upstream: `"city"` alone, or `"city,country"`.
    ///
    /// A country that is empty after trimming counts as absent. The city is
    /// passed through verbatim.
    pub fn location(&self) -> String {
        match self.country.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(country) => format!("{},{}", self.city, country),
            None => self.city.clone(),
        }
    }

    /// Whether the city survives trimming.
    pub fn has_city(&self) -> bool {
        !self.city.trim().is_empty()
    }
}

/// Simplified weather payload returned to clients.
///
/// A per-request projection of the upstream response; built once, sent, and
/// discarded. Display-formatted fields carry their units inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: Option<String>,
    /// E.g. `"18.5 °C"`.
    pub temperature: String,
    pub description: String,
    /// E.g. `"70%"`.
    pub humidity: String,
    /// E.g. `"3.1 m/s"`.
    pub wind: String,
    /// Full URL of the upstream condition icon.
    pub icon: String,
}
