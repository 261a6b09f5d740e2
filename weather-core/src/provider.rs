use crate::{WeatherError, WeatherQuery, WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Seam between the HTTP surface and the upstream weather source.
///
/// One implementation exists ([`openweather::OpenWeatherProvider`]); the trait
/// keeps the server layer ignorant of which upstream it talks to and lets
/// tests substitute a stub.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up the current weather for the queried city.
    ///
    /// Performs at most one outbound call; every failure is reported as a
    /// typed [`WeatherError`] on the first attempt.
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError>;
}
