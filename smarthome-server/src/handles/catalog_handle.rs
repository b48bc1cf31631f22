use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use smarthome_api::models::*;

use crate::domain::{ActuatorModel, ActuatorType, AggregateRoot, SensorModel, SensorType};
use crate::errors::ApiError;
use crate::services::CatalogService;

#[derive(Clone)]
pub struct CatalogState {
    pub catalog_service: Arc<CatalogService>,
}

pub fn catalog_router(catalog_state: CatalogState) -> Router {
    Router::new()
        .route(
            "/api/v1/sensor-types",
            get(get_sensor_types).post(create_sensor_type),
        )
        .route(
            "/api/v1/sensor-types/:sensor_type_id",
            get(get_sensor_type_by_id),
        )
        .route(
            "/api/v1/actuator-types",
            get(get_actuator_types).post(create_actuator_type),
        )
        .route(
            "/api/v1/actuator-types/:actuator_type_id",
            get(get_actuator_type_by_id),
        )
        .route(
            "/api/v1/sensor-models",
            get(get_sensor_models_by_type).post(create_sensor_model),
        )
        .route(
            "/api/v1/sensor-models/:sensor_model_id",
            get(get_sensor_model_by_id),
        )
        .route(
            "/api/v1/actuator-models",
            get(get_actuator_models_by_type).post(create_actuator_model),
        )
        .route(
            "/api/v1/actuator-models/:actuator_model_id",
            get(get_actuator_model_by_id),
        )
        .with_state(catalog_state)
}

fn sensor_type_response(sensor_type: &SensorType) -> SensorTypeResponse {
    SensorTypeResponse {
        id: sensor_type.identity().to_string(),
        description: sensor_type.description().to_string(),
        unit: sensor_type.unit().to_string(),
    }
}

fn actuator_type_response(actuator_type: &ActuatorType) -> ActuatorTypeResponse {
    ActuatorTypeResponse {
        id: actuator_type.identity().to_string(),
        description: actuator_type.description().to_string(),
        unit: actuator_type.unit().to_string(),
    }
}

fn sensor_model_response(model: &SensorModel) -> SensorModelResponse {
    SensorModelResponse {
        id: model.identity().to_string(),
        sensor_type_id: model.sensor_type_id().to_string(),
    }
}

fn actuator_model_response(model: &ActuatorModel) -> ActuatorModelResponse {
    ActuatorModelResponse {
        id: model.identity().to_string(),
        actuator_type_id: model.actuator_type_id().to_string(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/sensor-types",
    tag = "catalog",
    request_body = CreateSensorTypeRequest,
    responses(
        (status = 201, description = "Sensor type created successfully", body = SensorTypeResponse),
        (status = 400, description = "Invalid sensor type"),
        (status = 409, description = "Sensor type already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_sensor_type(
    State(state): State<CatalogState>,
    Json(body): Json<CreateSensorTypeRequest>,
) -> Result<(StatusCode, Json<SensorTypeResponse>), ApiError> {
    let sensor_type = state.catalog_service.create_sensor_type(body).await?;

    Ok((StatusCode::CREATED, Json(sensor_type_response(&sensor_type))))
}

#[utoipa::path(
    get,
    path = "/api/v1/sensor-types",
    tag = "catalog",
    responses(
        (status = 200, description = "Sensor types retrieved successfully", body = [SensorTypeResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensor_types(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<SensorTypeResponse>>, ApiError> {
    let sensor_types = state.catalog_service.sensor_types().await?;

    Ok(Json(sensor_types.iter().map(sensor_type_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/sensor-types/{sensor_type_id}",
    tag = "catalog",
    params(
        ("sensor_type_id" = String, Path, description = "Sensor type ID")
    ),
    responses(
        (status = 200, description = "Sensor type retrieved successfully", body = SensorTypeResponse),
        (status = 404, description = "Sensor type not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensor_type_by_id(
    State(state): State<CatalogState>,
    Path(sensor_type_id): Path<String>,
) -> Result<Json<SensorTypeResponse>, ApiError> {
    let sensor_type = state.catalog_service.sensor_type(&sensor_type_id).await?;

    Ok(Json(sensor_type_response(&sensor_type)))
}

#[utoipa::path(
    post,
    path = "/api/v1/actuator-types",
    tag = "catalog",
    request_body = CreateActuatorTypeRequest,
    responses(
        (status = 201, description = "Actuator type created successfully", body = ActuatorTypeResponse),
        (status = 400, description = "Invalid actuator type"),
        (status = 409, description = "Actuator type already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_actuator_type(
    State(state): State<CatalogState>,
    Json(body): Json<CreateActuatorTypeRequest>,
) -> Result<(StatusCode, Json<ActuatorTypeResponse>), ApiError> {
    let actuator_type = state.catalog_service.create_actuator_type(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(actuator_type_response(&actuator_type)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/actuator-types",
    tag = "catalog",
    responses(
        (status = 200, description = "Actuator types retrieved successfully", body = [ActuatorTypeResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_actuator_types(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<ActuatorTypeResponse>>, ApiError> {
    let actuator_types = state.catalog_service.actuator_types().await?;

    Ok(Json(
        actuator_types.iter().map(actuator_type_response).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/actuator-types/{actuator_type_id}",
    tag = "catalog",
    params(
        ("actuator_type_id" = String, Path, description = "Actuator type ID")
    ),
    responses(
        (status = 200, description = "Actuator type retrieved successfully", body = ActuatorTypeResponse),
        (status = 404, description = "Actuator type not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_actuator_type_by_id(
    State(state): State<CatalogState>,
    Path(actuator_type_id): Path<String>,
) -> Result<Json<ActuatorTypeResponse>, ApiError> {
    let actuator_type = state
        .catalog_service
        .actuator_type(&actuator_type_id)
        .await?;

    Ok(Json(actuator_type_response(&actuator_type)))
}

#[utoipa::path(
    post,
    path = "/api/v1/sensor-models",
    tag = "catalog",
    request_body = CreateSensorModelRequest,
    responses(
        (status = 201, description = "Sensor model registered successfully", body = SensorModelResponse),
        (status = 400, description = "Unknown sensor model"),
        (status = 404, description = "Sensor type not found"),
        (status = 409, description = "Sensor model already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_sensor_model(
    State(state): State<CatalogState>,
    Json(body): Json<CreateSensorModelRequest>,
) -> Result<(StatusCode, Json<SensorModelResponse>), ApiError> {
    let model = state.catalog_service.add_sensor_model(body).await?;

    Ok((StatusCode::CREATED, Json(sensor_model_response(&model))))
}

#[utoipa::path(
    get,
    path = "/api/v1/sensor-models",
    tag = "catalog",
    params(
        ("sensor_type_id" = String, Query, description = "Sensor type ID")
    ),
    responses(
        (status = 200, description = "Sensor models retrieved successfully", body = [SensorModelResponse]),
        (status = 404, description = "Sensor type not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensor_models_by_type(
    State(state): State<CatalogState>,
    Query(query): Query<SensorModelQuery>,
) -> Result<Json<Vec<SensorModelResponse>>, ApiError> {
    let models = state
        .catalog_service
        .sensor_models_by_type(&query.sensor_type_id)
        .await?;

    Ok(Json(models.iter().map(sensor_model_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/sensor-models/{sensor_model_id}",
    tag = "catalog",
    params(
        ("sensor_model_id" = String, Path, description = "Sensor model name")
    ),
    responses(
        (status = 200, description = "Sensor model retrieved successfully", body = SensorModelResponse),
        (status = 400, description = "Unknown sensor model"),
        (status = 404, description = "Sensor model not registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sensor_model_by_id(
    State(state): State<CatalogState>,
    Path(sensor_model_id): Path<String>,
) -> Result<Json<SensorModelResponse>, ApiError> {
    let model = state.catalog_service.sensor_model(&sensor_model_id).await?;

    Ok(Json(sensor_model_response(&model)))
}

#[utoipa::path(
    post,
    path = "/api/v1/actuator-models",
    tag = "catalog",
    request_body = CreateActuatorModelRequest,
    responses(
        (status = 201, description = "Actuator model registered successfully", body = ActuatorModelResponse),
        (status = 400, description = "Unknown actuator model"),
        (status = 404, description = "Actuator type not found"),
        (status = 409, description = "Actuator model already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_actuator_model(
    State(state): State<CatalogState>,
    Json(body): Json<CreateActuatorModelRequest>,
) -> Result<(StatusCode, Json<ActuatorModelResponse>), ApiError> {
    let model = state.catalog_service.add_actuator_model(body).await?;

    Ok((StatusCode::CREATED, Json(actuator_model_response(&model))))
}

#[utoipa::path(
    get,
    path = "/api/v1/actuator-models",
    tag = "catalog",
    params(
        ("actuator_type_id" = String, Query, description = "Actuator type ID")
    ),
    responses(
        (status = 200, description = "Actuator models retrieved successfully", body = [ActuatorModelResponse]),
        (status = 404, description = "Actuator type not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_actuator_models_by_type(
    State(state): State<CatalogState>,
    Query(query): Query<ActuatorModelQuery>,
) -> Result<Json<Vec<ActuatorModelResponse>>, ApiError> {
    let models = state
        .catalog_service
        .actuator_models_by_type(&query.actuator_type_id)
        .await?;

    Ok(Json(models.iter().map(actuator_model_response).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/actuator-models/{actuator_model_id}",
    tag = "catalog",
    params(
        ("actuator_model_id" = String, Path, description = "Actuator model name")
    ),
    responses(
        (status = 200, description = "Actuator model retrieved successfully", body = ActuatorModelResponse),
        (status = 400, description = "Unknown actuator model"),
        (status = 404, description = "Actuator model not registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_actuator_model_by_id(
    State(state): State<CatalogState>,
    Path(actuator_model_id): Path<String>,
) -> Result<Json<ActuatorModelResponse>, ApiError> {
    let model = state
        .catalog_service
        .actuator_model(&actuator_model_id)
        .await?;

    Ok(Json(actuator_model_response(&model)))
}
