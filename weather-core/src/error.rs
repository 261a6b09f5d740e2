use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong during a weather lookup.
///
/// Each variant maps to one HTTP status via [`WeatherError::status_code`];
/// the server layer turns that plus [`WeatherError::detail`] into the
/// `{"detail": ...}` error body. No variant is retried and none is fatal to
/// the process.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The upstream credential was never configured. Surfaced per request.
    #[error("API key not configured")]
    ApiKeyNotConfigured,

    /// Upstream reported no match for the requested city.
    #[error("City '{0}' not found.")]
    CityNotFound(String),

    /// The query was empty, or upstream answered 200 without a location name.
    #[error("Invalid location. Please enter a valid city name.")]
    InvalidLocation,

    /// Any other non-success upstream status; carries the raw error body.
    #[error("upstream request failed with status {status}")]
    Upstream { status: u16, detail: String },

    /// The outbound request exceeded the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// Network-level failure talking to upstream.
    #[error("failed to reach upstream: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered 200 with a body we could not make sense of.
    #[error("could not parse upstream response: {0}")]
    UnexpectedPayload(String),
}

impl WeatherError {
    /// HTTP status reported to the client for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ApiKeyNotConfigured => 500,
            Self::CityNotFound(_) | Self::InvalidLocation => 404,
            Self::Upstream { status, .. } => *status,
            Self::Timeout => 504,
            Self::Transport(_) | Self::UnexpectedPayload(_) => 502,
        }
    }

    /// Value placed under `"detail"` in the client-facing error body.
    ///
    /// For upstream passthrough the raw body is re-embedded as JSON when it
    /// parses, otherwise as a plain string.
    pub fn detail(&self) -> Value {
        match self {
            Self::Upstream { detail, .. } => serde_json::from_str(detail)
                .unwrap_or_else(|_| Value::String(detail.clone())),
            other => Value::String(other.to_string()),
        }
    }
}
