use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use smarthome_api::models::*;

use super::device_response;
use crate::domain::{AggregateRoot, Room};
use crate::errors::ApiError;
use crate::services::{DeviceService, RoomService};

#[derive(Clone)]
pub struct RoomState {
    pub room_service: Arc<RoomService>,
    pub device_service: Arc<DeviceService>,
}

pub fn room_router(room_state: RoomState) -> Router {
    Router::new()
        .route("/api/v1/rooms", post(create_room))
        .route("/api/v1/rooms/outside", get(get_outside_rooms))
        .route("/api/v1/rooms/:room_id", get(get_room_by_id))
        .route("/api/v1/rooms/:room_id/devices", get(get_devices_by_room_id))
        .with_state(room_state)
}

pub(crate) fn room_response(room: &Room) -> RoomResponse {
    let dimensions = room.dimensions();

    RoomResponse {
        id: room.identity().to_string(),
        house_id: room.house_id().to_string(),
        name: room.name().to_string(),
        floor: room.floor().value(),
        dimensions: DimensionsData {
            length: dimensions.length.value(),
            width: dimensions.width.value(),
            height: dimensions.height.value(),
        },
        is_inside: room.is_inside(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    tag = "room",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created successfully", body = RoomResponse),
        (status = 400, description = "Invalid room attributes"),
        (status = 404, description = "House not found"),
        (status = 409, description = "Room already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_room(
    State(state): State<RoomState>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let room = state.room_service.add_room(body).await?;

    Ok((StatusCode::CREATED, Json(room_response(&room))))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/outside",
    tag = "room",
    responses(
        (status = 200, description = "Outside rooms retrieved successfully", body = [RoomResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_outside_rooms(
    State(state): State<RoomState>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = state.room_service.outside_rooms().await?;

    Ok(Json(rooms.iter().map(room_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}",
    tag = "room",
    params(
        ("room_id" = String, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room retrieved successfully", body = RoomResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_room_by_id(
    State(state): State<RoomState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = state.room_service.get_room(&room_id).await?;

    Ok(Json(room_response(&room)))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}/devices",
    tag = "room",
    params(
        ("room_id" = String, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Devices retrieved successfully", body = [DeviceResponse]),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_devices_by_room_id(
    State(state): State<RoomState>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<DeviceResponse>>, ApiError> {
    let devices = state.device_service.devices_in_room(&room_id).await?;

    Ok(Json(devices.iter().map(device_response).collect()))
}
