use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use smarthome_api::models::*;

use crate::domain::{Actuator, AggregateRoot};
use crate::errors::ApiError;
use crate::services::ActuatorService;

#[derive(Clone)]
pub struct ActuatorState {
    pub actuator_service: Arc<ActuatorService>,
}

pub fn actuator_router(actuator_state: ActuatorState) -> Router {
    Router::new()
        .route("/api/v1/actuators", post(create_actuator))
        .route(
            "/api/v1/actuators/:actuator_id",
            get(get_actuator_by_id).patch(update_roller_blind),
        )
        .with_state(actuator_state)
}

pub(crate) fn actuator_response(actuator: &Actuator) -> ActuatorResponse {
    ActuatorResponse {
        id: actuator.identity().to_string(),
        device_id: actuator.device_id().to_string(),
        actuator_model_id: actuator.model().to_string(),
        value: actuator.value().map(ToString::to_string),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/actuators",
    tag = "actuator",
    request_body = CreateActuatorRequest,
    responses(
        (status = 201, description = "Actuator created successfully", body = ActuatorResponse),
        (status = 400, description = "Unknown actuator model"),
        (status = 404, description = "Device or actuator model not found"),
        (status = 409, description = "Actuator already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_actuator(
    State(state): State<ActuatorState>,
    Json(body): Json<CreateActuatorRequest>,
) -> Result<(StatusCode, Json<ActuatorResponse>), ApiError> {
    let actuator = state.actuator_service.add_actuator(body).await?;

    Ok((StatusCode::CREATED, Json(actuator_response(&actuator))))
}

#[utoipa::path(
    get,
    path = "/api/v1/actuators/{actuator_id}",
    tag = "actuator",
    params(
        ("actuator_id" = String, Path, description = "Actuator ID")
    ),
    responses(
        (status = 200, description = "Actuator retrieved successfully", body = ActuatorResponse),
        (status = 404, description = "Actuator not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_actuator_by_id(
    State(state): State<ActuatorState>,
    Path(actuator_id): Path<String>,
) -> Result<Json<ActuatorResponse>, ApiError> {
    let actuator = state.actuator_service.get_actuator(&actuator_id).await?;

    Ok(Json(actuator_response(&actuator)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/actuators/{actuator_id}",
    tag = "actuator",
    params(
        ("actuator_id" = String, Path, description = "Roller blind actuator ID")
    ),
    request_body = UpdateRollerBlindRequest,
    responses(
        (status = 200, description = "Roller blind moved successfully", body = ActuatorResponse),
        (status = 400, description = "Not a roller blind, wrong sensor or position out of range"),
        (status = 404, description = "Actuator or sensor not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_roller_blind(
    State(state): State<ActuatorState>,
    Path(actuator_id): Path<String>,
    Json(body): Json<UpdateRollerBlindRequest>,
) -> Result<Json<ActuatorResponse>, ApiError> {
    let actuator = state
        .actuator_service
        .update_roller_blind(&actuator_id, body)
        .await?;

    Ok(Json(actuator_response(&actuator)))
}
