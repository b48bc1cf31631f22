use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use smarthome_api::models::*;

use crate::domain::{AggregateRoot, SensorReading};
use crate::errors::{ApiError, ReadingError};
use crate::services::ReadingService;

#[derive(Clone)]
pub struct ReadingState {
    pub reading_service: Arc<ReadingService>,
}

pub fn reading_router(reading_state: ReadingState) -> Router {
    Router::new()
        .route(
            "/api/v1/sensor-readings",
            get(get_sensor_readings).post(create_sensor_reading),
        )
        .route(
            "/api/v1/sensor-readings/:reading_id",
            get(get_sensor_reading_by_id),
        )
        .with_state(reading_state)
}

pub(crate) fn reading_response(reading: &SensorReading) -> SensorReadingResponse {
    SensorReadingResponse {
        id: reading.identity().to_string(),
        device_id: reading.device_id().to_string(),
        sensor_id: reading.sensor_id().to_string(),
        value: reading.reading().to_string(),
        timestamp: reading.timestamp(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/sensor-readings",
    tag = "sensor-reading",
    request_body = CreateSensorReadingRequest,
    responses(
        (status = 201, description = "Reading recorded successfully", body = SensorReadingResponse),
        (status = 400, description = "Invalid value or sensor not in device"),
        (status = 404, description = "Device or sensor not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_sensor_reading(
    State(state): State<ReadingState>,
    Json(body): Json<CreateSensorReadingRequest>,
) -> Result<(StatusCode, Json<SensorReadingResponse>), ApiError> {
    let reading = state.reading_service.add_reading(body).await?;

    Ok((StatusCode::CREATED, Json(reading_response(&reading))))
}

/// Answers two queries on one path: the readings of `device_id` within
/// `[start, end]`, or, when both `device_id_indoor` and `device_id_outdoor`
/// are given, their maximum temperature difference.
#[utoipa::path(
    get,
    path = "/api/v1/sensor-readings",
    tag = "sensor-reading",
    params(
        ("device_id" = Option<String>, Query, description = "Device whose readings are listed"),
        ("device_id_indoor" = Option<String>, Query, description = "Indoor device of a temperature comparison"),
        ("device_id_outdoor" = Option<String>, Query, description = "Outdoor device of a temperature comparison"),
        ("delta_time" = Option<i64>, Query, description = "Pairing tolerance in minutes"),
        ("start" = Option<String>, Query, description = "Start of the period, RFC 3339"),
        ("end" = Option<String>, Query, description = "End of the period, RFC 3339")
    ),
    responses(
        (status = 200, description = "Readings, or a TemperatureDifferenceResponse for a comparison", body = [SensorReadingResponse]),
        (status = 400, description = "Missing or invalid parameters"),
        (status = 404, description = "Device or readings not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensor_readings(
    State(state): State<ReadingState>,
    Query(query): Query<SensorReadingQuery>,
) -> Result<Response, ApiError> {
    let start = query.start.ok_or(ReadingError::MissingParameter("start"))?;
    let end = query.end.ok_or(ReadingError::MissingParameter("end"))?;

    if let (Some(indoor), Some(outdoor)) = (&query.device_id_indoor, &query.device_id_outdoor) {
        let delta_time = query
            .delta_time
            .ok_or(ReadingError::MissingParameter("delta_time"))?;

        let max_difference = state
            .reading_service
            .max_temperature_difference(indoor, outdoor, delta_time, start, end)
            .await?;

        let response = TemperatureDifferenceResponse {
            device_id_indoor: indoor.clone(),
            device_id_outdoor: outdoor.clone(),
            delta_time,
            max_difference,
        };

        return Ok(Json(response).into_response());
    }

    let device_id = query
        .device_id
        .ok_or(ReadingError::MissingParameter("device_id"))?;

    let readings = state
        .reading_service
        .readings_within_period(&device_id, start, end)
        .await?;
    let readings: Vec<SensorReadingResponse> = readings.iter().map(reading_response).collect();

    Ok(Json(readings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v1/sensor-readings/{reading_id}",
    tag = "sensor-reading",
    params(
        ("reading_id" = String, Path, description = "Sensor reading ID")
    ),
    responses(
        (status = 200, description = "Reading retrieved successfully", body = SensorReadingResponse),
        (status = 404, description = "Reading not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensor_reading_by_id(
    State(state): State<ReadingState>,
    Path(reading_id): Path<String>,
) -> Result<Json<SensorReadingResponse>, ApiError> {
    let reading = state.reading_service.get_reading(&reading_id).await?;

    Ok(Json(reading_response(&reading)))
}
