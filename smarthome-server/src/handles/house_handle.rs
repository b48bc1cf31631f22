use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use smarthome_api::models::*;

use super::room_response;
use crate::domain::{AggregateRoot, House};
use crate::errors::ApiError;
use crate::services::{HouseService, ReadingService, RoomService};

#[derive(Clone)]
pub struct HouseState {
    pub house_service: Arc<HouseService>,
    pub room_service: Arc<RoomService>,
    pub reading_service: Arc<ReadingService>,
}

pub fn house_router(house_state: HouseState) -> Router {
    Router::new()
        .route("/api/v1/houses", get(get_houses).post(create_house))
        .route(
            "/api/v1/houses/:house_id",
            get(get_house_by_id).patch(configure_location),
        )
        .route("/api/v1/houses/:house_id/rooms", get(get_rooms_by_house_id))
        .route(
            "/api/v1/houses/:house_id/peak-power-consumption",
            get(get_peak_power_consumption),
        )
        .with_state(house_state)
}

pub(crate) fn house_response(house: &House) -> HouseResponse {
    let location = house.location();
    let gps = location.gps();

    HouseResponse {
        id: house.identity().to_string(),
        location: LocationData {
            address: location.address().to_string(),
            country: location.zip_code().country().to_string(),
            zip_code: location.zip_code().code().to_string(),
            latitude: gps.latitude().value(),
            longitude: gps.longitude().value(),
        },
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/houses",
    tag = "house",
    request_body = CreateHouseRequest,
    responses(
        (status = 201, description = "House created successfully", body = HouseResponse),
        (status = 400, description = "Invalid location"),
        (status = 409, description = "House already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_house(
    State(state): State<HouseState>,
    Json(body): Json<CreateHouseRequest>,
) -> Result<(StatusCode, Json<HouseResponse>), ApiError> {
    let house = state.house_service.add_house(body).await?;

    Ok((StatusCode::CREATED, Json(house_response(&house))))
}

#[utoipa::path(
    get,
    path = "/api/v1/houses",
    tag = "house",
    responses(
        (status = 200, description = "Houses retrieved successfully", body = [HouseResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_houses(
    State(state): State<HouseState>,
) -> Result<Json<Vec<HouseResponse>>, ApiError> {
    let houses = state.house_service.list_houses().await?;

    Ok(Json(houses.iter().map(house_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/houses/{house_id}",
    tag = "house",
    params(
        ("house_id" = String, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "House retrieved successfully", body = HouseResponse),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_house_by_id(
    State(state): State<HouseState>,
    Path(house_id): Path<String>,
) -> Result<Json<HouseResponse>, ApiError> {
    let house = state.house_service.get_house(&house_id).await?;

    Ok(Json(house_response(&house)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/houses/{house_id}",
    tag = "house",
    params(
        ("house_id" = String, Path, description = "House ID")
    ),
    request_body = LocationData,
    responses(
        (status = 200, description = "Location configured successfully", body = HouseResponse),
        (status = 400, description = "Invalid location"),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn configure_location(
    State(state): State<HouseState>,
    Path(house_id): Path<String>,
    Json(body): Json<LocationData>,
) -> Result<Json<HouseResponse>, ApiError> {
    let house = state
        .house_service
        .configure_location(&house_id, body)
        .await?;

    Ok(Json(house_response(&house)))
}

#[utoipa::path(
    get,
    path = "/api/v1/houses/{house_id}/rooms",
    tag = "house",
    params(
        ("house_id" = String, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "Rooms retrieved successfully", body = [RoomResponse]),
        (status = 404, description = "House not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_rooms_by_house_id(
    State(state): State<HouseState>,
    Path(house_id): Path<String>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = state.room_service.rooms_by_house(&house_id).await?;

    Ok(Json(rooms.iter().map(room_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/houses/{house_id}/peak-power-consumption",
    tag = "house",
    params(
        ("house_id" = String, Path, description = "House ID"),
        ("start" = String, Query, description = "Start of the period, RFC 3339"),
        ("end" = String, Query, description = "End of the period, RFC 3339"),
        ("interval" = i64, Query, description = "Interval length in minutes")
    ),
    responses(
        (status = 200, description = "Peak power computed successfully", body = PeakPowerResponse),
        (status = 400, description = "Invalid period or interval"),
        (status = 404, description = "House or power grid meter not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_peak_power_consumption(
    State(state): State<HouseState>,
    Path(house_id): Path<String>,
    Query(query): Query<PeakPowerQuery>,
) -> Result<Json<PeakPowerResponse>, ApiError> {
    let peak = state
        .reading_service
        .house_peak_power(&house_id, query.start, query.end, query.interval)
        .await?;

    Ok(Json(PeakPowerResponse {
        house_id,
        peak_power_consumption: peak,
    }))
}
