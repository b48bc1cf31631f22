use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use smarthome_api::models::*;

use crate::domain::{AggregateRoot, Sensor};
use crate::errors::ApiError;
use crate::services::SensorService;

#[derive(Clone)]
pub struct SensorState {
    pub sensor_service: Arc<SensorService>,
}

pub fn sensor_router(sensor_state: SensorState) -> Router {
    Router::new()
        .route("/api/v1/sensors", post(create_sensor))
        .route("/api/v1/sensors/:sensor_id", get(get_sensor_by_id))
        .with_state(sensor_state)
}

pub(crate) fn sensor_response(sensor: &Sensor) -> SensorResponse {
    SensorResponse {
        id: sensor.identity().to_string(),
        device_id: sensor.device_id().to_string(),
        sensor_model_id: sensor.model().to_string(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/sensors",
    tag = "sensor",
    request_body = CreateSensorRequest,
    responses(
        (status = 201, description = "Sensor created successfully", body = SensorResponse),
        (status = 400, description = "Unknown sensor model"),
        (status = 404, description = "Device or sensor model not found"),
        (status = 409, description = "Sensor already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_sensor(
    State(state): State<SensorState>,
    Json(body): Json<CreateSensorRequest>,
) -> Result<(StatusCode, Json<SensorResponse>), ApiError> {
    let sensor = state.sensor_service.add_sensor(body).await?;

    Ok((StatusCode::CREATED, Json(sensor_response(&sensor))))
}

#[utoipa::path(
    get,
    path = "/api/v1/sensors/{sensor_id}",
    tag = "sensor",
    params(
        ("sensor_id" = String, Path, description = "Sensor ID")
    ),
    responses(
        (status = 200, description = "Sensor retrieved successfully", body = SensorResponse),
        (status = 404, description = "Sensor not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensor_by_id(
    State(state): State<SensorState>,
    Path(sensor_id): Path<String>,
) -> Result<Json<SensorResponse>, ApiError> {
    let sensor = state.sensor_service.get_sensor(&sensor_id).await?;

    Ok(Json(sensor_response(&sensor)))
}
