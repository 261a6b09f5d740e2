//! Core library for the global weather API backend.
//!
//! This crate defines:
//! - Configuration loaded once at process start
//! - The error taxonomy for a weather lookup
//! - Shared domain models (queries, reports)
//! - The OpenWeatherMap provider client
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::WeatherError;
pub use model::{WeatherQuery, WeatherReport};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
