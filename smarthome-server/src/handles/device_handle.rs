use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use smarthome_api::models::*;

use super::{actuator_response, reading_response, sensor_response};
use crate::domain::{AggregateRoot, Device};
use crate::errors::ApiError;
use crate::services::{
    ActuatorService, DeviceService, DeviceTypeService, ReadingService, SensorService,
};

#[derive(Clone)]
pub struct DeviceState {
    pub device_service: Arc<DeviceService>,
    pub device_type_service: Arc<DeviceTypeService>,
    pub sensor_service: Arc<SensorService>,
    pub actuator_service: Arc<ActuatorService>,
    pub reading_service: Arc<ReadingService>,
}

pub fn device_router(device_state: DeviceState) -> Router {
    Router::new()
        .route(
            "/api/v1/devices",
            get(get_devices).post(create_device).patch(deactivate_device),
        )
        .route("/api/v1/devices/:device_id", get(get_device_by_id))
        .route(
            "/api/v1/devices/:device_id/sensors",
            get(get_sensors_by_device_id),
        )
        .route(
            "/api/v1/devices/:device_id/actuators",
            get(get_actuators_by_device_id),
        )
        .route(
            "/api/v1/devices/:device_id/sensor-readings",
            get(get_readings_by_device_id),
        )
        .with_state(device_state)
}

pub(crate) fn device_response(device: &Device) -> DeviceResponse {
    DeviceResponse {
        id: device.identity().to_string(),
        room_id: device.room_id().to_string(),
        name: device.name().to_string(),
        model: device.model().to_string(),
        active: device.is_active(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/devices",
    tag = "device",
    request_body = CreateDeviceRequest,
    responses(
        (status = 201, description = "Device created successfully", body = DeviceResponse),
        (status = 400, description = "Invalid device attributes"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Device already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_device(
    State(state): State<DeviceState>,
    Json(body): Json<CreateDeviceRequest>,
) -> Result<(StatusCode, Json<DeviceResponse>), ApiError> {
    let device = state.device_service.add_device(body).await?;

    Ok((StatusCode::CREATED, Json(device_response(&device))))
}

#[utoipa::path(
    get,
    path = "/api/v1/devices",
    tag = "device",
    params(
        ("get_by" = Option<DeviceFilter>, Query, description = "List only active devices, or group devices by functionality")
    ),
    responses(
        (status = 200, description = "Devices retrieved successfully. Grouped by type description when get_by is functionality", body = [DeviceResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_devices(
    State(state): State<DeviceState>,
    Query(query): Query<DeviceListQuery>,
) -> Result<Response, ApiError> {
    let devices = match query.get_by {
        Some(DeviceFilter::Functionality) => {
            let grouped: DevicesByFunctionality = state
                .device_type_service
                .devices_by_functionality()
                .await?
                .into_iter()
                .map(|(description, devices)| {
                    (description, devices.iter().map(device_response).collect())
                })
                .collect();

            return Ok(Json(grouped).into_response());
        }
        Some(DeviceFilter::Active) => state.device_service.active_devices().await?,
        None => state.device_service.all_devices().await?,
    };

    let devices: Vec<DeviceResponse> = devices.iter().map(device_response).collect();

    Ok(Json(devices).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/v1/devices",
    tag = "device",
    params(
        ("device_id" = String, Query, description = "Device to deactivate")
    ),
    responses(
        (status = 200, description = "Device deactivated successfully", body = DeviceResponse),
        (status = 404, description = "Device not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn deactivate_device(
    State(state): State<DeviceState>,
    Query(query): Query<DeactivateDeviceQuery>,
) -> Result<Json<DeviceResponse>, ApiError> {
    let device = state
        .device_service
        .deactivate_device(&query.device_id)
        .await?;

    Ok(Json(device_response(&device)))
}

#[utoipa::path(
    get,
    path = "/api/v1/devices/{device_id}",
    tag = "device",
    params(
        ("device_id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Device retrieved successfully", body = DeviceResponse),
        (status = 404, description = "Device not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_device_by_id(
    State(state): State<DeviceState>,
    Path(device_id): Path<String>,
) -> Result<Json<DeviceResponse>, ApiError> {
    let device = state.device_service.get_device(&device_id).await?;

    Ok(Json(device_response(&device)))
}

#[utoipa::path(
    get,
    path = "/api/v1/devices/{device_id}/sensors",
    tag = "device",
    params(
        ("device_id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Sensors retrieved successfully", body = [SensorResponse]),
        (status = 404, description = "Device not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensors_by_device_id(
    State(state): State<DeviceState>,
    Path(device_id): Path<String>,
) -> Result<Json<Vec<SensorResponse>>, ApiError> {
    let sensors = state.sensor_service.sensors_by_device(&device_id).await?;

    Ok(Json(sensors.iter().map(sensor_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/devices/{device_id}/actuators",
    tag = "device",
    params(
        ("device_id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Actuators retrieved successfully", body = [ActuatorResponse]),
        (status = 404, description = "Device not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_actuators_by_device_id(
    State(state): State<DeviceState>,
    Path(device_id): Path<String>,
) -> Result<Json<Vec<ActuatorResponse>>, ApiError> {
    let actuators = state
        .actuator_service
        .actuators_by_device(&device_id)
        .await?;

    Ok(Json(actuators.iter().map(actuator_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/devices/{device_id}/sensor-readings",
    tag = "device",
    params(
        ("device_id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "Readings retrieved successfully", body = [SensorReadingResponse]),
        (status = 404, description = "Device not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_readings_by_device_id(
    State(state): State<DeviceState>,
    Path(device_id): Path<String>,
) -> Result<Json<Vec<SensorReadingResponse>>, ApiError> {
    let readings = state.reading_service.readings_by_device(&device_id).await?;

    Ok(Json(readings.iter().map(reading_response).collect()))
}
