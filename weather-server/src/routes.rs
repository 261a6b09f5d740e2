use std::{path::Path, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use weather_core::{WeatherError, WeatherProvider, WeatherQuery, WeatherReport};

/// Shared state: the one upstream provider, built at startup.
#[derive(Clone)]
struct AppState {
    provider: Arc<dyn WeatherProvider>,
}

/// Build the application router.
///
/// When `frontend_dir` is given, `/` serves its `index.html` and the
/// `static/` and `img/` subdirectories are mounted; otherwise only the API
/// routes exist.
pub fn router(provider: impl WeatherProvider + 'static, frontend_dir: Option<&Path>) -> Router {
    let state = AppState { provider: Arc::new(provider) };

    let mut app = Router::new().route("/weather/", get(get_weather)).with_state(state);

    if let Some(dir) = frontend_dir {
        app = app
            .route_service("/", ServeFile::new(dir.join("index.html")))
            .nest_service("/static", ServeDir::new(dir.join("static")))
            .nest_service("/img", ServeDir::new(dir.join("img")));
    }

    app.layer(CorsLayer::permissive()).layer(TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
struct WeatherParams {
    city: Option<String>,
    country: Option<String>,
}

/// `GET /weather/?city=<name>&country=<code>`
async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Some(city) = params.city else {
        return Err(ApiError::missing_city());
    };

    let query = WeatherQuery::new(city, params.country);
    let report = state.provider.current_weather(&query).await?;

    Ok(Json(report))
}

/// Client-facing failure; always rendered as `{"detail": ...}`.
struct ApiError {
    status: StatusCode,
    detail: serde_json::Value,
}

impl ApiError {
    fn missing_city() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: json!("Query parameter 'city' is required"),
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);

        Self { status, detail: err.detail() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_keep_their_status() {
        let api: ApiError = WeatherError::ApiKeyNotConfigured.into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.detail, json!("API key not configured"));

        let api: ApiError = WeatherError::CityNotFound("Quito".to_string()).into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);

        let api: ApiError = WeatherError::Timeout.into();
        assert_eq!(api.status, StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn upstream_status_survives_the_translation() {
        let err = WeatherError::Upstream {
            status: 429,
            detail: r#"{"cod":429,"message":"quota exceeded"}"#.to_string(),
        };

        let api: ApiError = err.into();
        assert_eq!(api.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(api.detail["message"], "quota exceeded");
    }
}
