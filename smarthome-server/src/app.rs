use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::{Backend, SchemaManager, SeedData, Settings, Storage};
use crate::domain::UuidGenerator;
use crate::handles::*;
use crate::repositories::Repositories;
use crate::services::{HttpWeatherGateway, Services};

pub async fn create_app(settings: &Arc<Settings>) -> anyhow::Result<Router> {
    let repositories = match settings.database.backend {
        Backend::Sqlite => {
            let storage = Arc::new(
                Storage::new(settings.database.clone(), SchemaManager::default()).await?,
            );
            Repositories::sqlite(storage)
        }
        Backend::Memory => Repositories::in_memory(),
    };

    let gateway = Arc::new(HttpWeatherGateway::new(&settings.weather)?);
    let services = Services::new(&repositories, Arc::new(UuidGenerator), gateway);

    if let Some(path) = &settings.seed.path {
        SeedData::load(path)?.apply(&services).await?;
    }

    Ok(create_router(&services))
}

pub fn create_router(services: &Services) -> Router {
    let houses = house_router(HouseState {
        house_service: services.houses.clone(),
        room_service: services.rooms.clone(),
        reading_service: services.readings.clone(),
    });

    let rooms = room_router(RoomState {
        room_service: services.rooms.clone(),
        device_service: services.devices.clone(),
    });

    let devices = device_router(DeviceState {
        device_service: services.devices.clone(),
        device_type_service: services.device_types.clone(),
        sensor_service: services.sensors.clone(),
        actuator_service: services.actuators.clone(),
        reading_service: services.readings.clone(),
    });

    let sensors = sensor_router(SensorState {
        sensor_service: services.sensors.clone(),
    });

    let actuators = actuator_router(ActuatorState {
        actuator_service: services.actuators.clone(),
    });

    let catalog = catalog_router(CatalogState {
        catalog_service: services.catalog.clone(),
    });

    let readings = reading_router(ReadingState {
        reading_service: services.readings.clone(),
    });

    let weather = weather_router(WeatherState {
        weather_service: services.weather.clone(),
    });

    Router::new()
        .merge(houses)
        .merge(rooms)
        .merge(devices)
        .merge(sensors)
        .merge(actuators)
        .merge(catalog)
        .merge(readings)
        .merge(weather)
        .merge(docs_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
