use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use super::*;

#[derive(OpenApi)]
#[openapi(
    info(title = "Smart Home API", description = "Houses, rooms, devices and their readings"),
    paths(
        create_house,
        get_houses,
        get_house_by_id,
        configure_location,
        get_rooms_by_house_id,
        get_peak_power_consumption,
        create_room,
        get_outside_rooms,
        get_room_by_id,
        get_devices_by_room_id,
        create_device,
        get_devices,
        deactivate_device,
        get_device_by_id,
        get_sensors_by_device_id,
        get_actuators_by_device_id,
        get_readings_by_device_id,
        create_sensor,
        get_sensor_by_id,
        create_actuator,
        get_actuator_by_id,
        update_roller_blind,
        create_sensor_type,
        get_sensor_types,
        get_sensor_type_by_id,
        create_actuator_type,
        get_actuator_types,
        get_actuator_type_by_id,
        create_sensor_model,
        get_sensor_models_by_type,
        get_sensor_model_by_id,
        create_actuator_model,
        get_actuator_models_by_type,
        get_actuator_model_by_id,
        create_sensor_reading,
        get_sensor_readings,
        get_sensor_reading_by_id,
        get_current_temperature,
        get_sunrise,
        get_sunset,
    ),
    tags(
        (name = "house", description = "Houses and their location"),
        (name = "room", description = "Rooms of a house"),
        (name = "device", description = "Devices placed in rooms"),
        (name = "sensor", description = "Sensors attached to devices"),
        (name = "actuator", description = "Actuators attached to devices"),
        (name = "catalog", description = "Sensor and actuator types and models"),
        (name = "sensor-reading", description = "Recorded sensor values"),
        (name = "weather", description = "External weather service")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(get_openapi))
}

async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
