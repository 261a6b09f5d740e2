use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    config::Config,
    error::WeatherError,
    model::{WeatherQuery, WeatherReport},
};

use super::WeatherProvider;

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn";

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// Holds the credential and one reqwest client (with the configured timeout)
/// for the whole process; each lookup is a single GET with no retries.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    http: Client,
    endpoint: String,
}

impl OpenWeatherProvider {
    /// Build the provider from process configuration.
    ///
    /// An absent credential is accepted here; lookups will fail with
    /// [`WeatherError::ApiKeyNotConfigured`] until one is provided.
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(config.upstream_timeout).build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            http,
            endpoint: OPENWEATHER_URL.to_string(),
        })
    }

    /// Point the provider at a different endpoint, e.g. a stub server in tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

// Numeric fields stay `serde_json::Number`: their `Display` keeps the
// upstream text, so `18.0` renders as `"18.0"`, not `"18"`.
#[derive(Debug, Deserialize)]
struct OwMain {
    temp: serde_json::Number,
    humidity: serde_json::Number,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: serde_json::Number,
}

/// Upstream payload, parsed leniently so the empty-`name` guard can run
/// before any missing-section complaint.
#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    sys: Option<OwSys>,
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: Option<OwWind>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::ApiKeyNotConfigured)?;

        if !query.has_city() {
            return Err(WeatherError::InvalidLocation);
        }

        let location = query.location();
        tracing::debug!(%location, "querying upstream weather provider");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", location.as_str()),
                ("appid", api_key),
                ("units", "metric"),
                ("lang", "en"),
            ])
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    WeatherError::Timeout
                } else {
                    WeatherError::from(err)
                }
            })?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound(query.city.trim().to_string()));
        }
        if !status.is_success() {
            let detail = res.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "upstream returned an error");
            return Err(WeatherError::Upstream { status: status.as_u16(), detail });
        }

        let body = res.text().await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|err| WeatherError::UnexpectedPayload(err.to_string()))?;

        // Upstream occasionally answers 200 with an empty match; the missing
        // name is the tell.
        let name = parsed.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(WeatherError::InvalidLocation);
        }

        let main = parsed
            .main
            .ok_or_else(|| WeatherError::UnexpectedPayload("missing `main` section".to_string()))?;
        let wind = parsed
            .wind
            .ok_or_else(|| WeatherError::UnexpectedPayload("missing `wind` section".to_string()))?;
        let weather = parsed.weather.into_iter().next().ok_or_else(|| {
            WeatherError::UnexpectedPayload("empty `weather` conditions".to_string())
        })?;

        Ok(WeatherReport {
            city: name.to_string(),
            country: parsed.sys.and_then(|sys| sys.country),
            temperature: format!("{} °C", main.temp),
            description: weather.description,
            humidity: format!("{}%", main.humidity),
            wind: format!("{} m/s", wind.speed),
            icon: format!("{ICON_URL_BASE}/{}@2x.png", weather.icon),
        })
    }
}
