use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use smarthome_api::models::*;

use crate::errors::ApiError;
use crate::services::WeatherService;

#[derive(Clone)]
pub struct WeatherState {
    pub weather_service: Arc<WeatherService>,
}

pub fn weather_router(weather_state: WeatherState) -> Router {
    Router::new()
        .route(
            "/api/v1/weather/current-temperature",
            get(get_current_temperature),
        )
        .route("/api/v1/weather/sunrise", get(get_sunrise))
        .route("/api/v1/weather/sunset", get(get_sunset))
        .with_state(weather_state)
}

#[utoipa::path(
    get,
    path = "/api/v1/weather/current-temperature",
    tag = "weather",
    params(
        ("latitude" = f64, Query, description = "Latitude in degrees"),
        ("longitude" = f64, Query, description = "Longitude in degrees")
    ),
    responses(
        (status = 200, description = "Temperature at the current hour", body = WeatherReport),
        (status = 400, description = "Invalid coordinates"),
        (status = 502, description = "Weather service unavailable")
    )
)]
pub async fn get_current_temperature(
    State(state): State<WeatherState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    Ok(Json(state.weather_service.current_temperature(query).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/weather/sunrise",
    tag = "weather",
    params(
        ("latitude" = f64, Query, description = "Latitude in degrees"),
        ("longitude" = f64, Query, description = "Longitude in degrees")
    ),
    responses(
        (status = 200, description = "Sunrise time of the current day", body = WeatherReport),
        (status = 400, description = "Invalid coordinates"),
        (status = 502, description = "Weather service unavailable")
    )
)]
pub async fn get_sunrise(
    State(state): State<WeatherState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    Ok(Json(state.weather_service.sunrise(query).await?))
}

#[utoipa::path(
    get,
    path = "/api/v1/weather/sunset",
    tag = "weather",
    params(
        ("latitude" = f64, Query, description = "Latitude in degrees"),
        ("longitude" = f64, Query, description = "Longitude in degrees")
    ),
    responses(
        (status = 200, description = "Sunset time of the current day", body = WeatherReport),
        (status = 400, description = "Invalid coordinates"),
        (status = 502, description = "Weather service unavailable")
    )
)]
pub async fn get_sunset(
    State(state): State<WeatherState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    Ok(Json(state.weather_service.sunset(query).await?))
}
