use axum::http::StatusCode;
use serde_json::json;

use smarthome_server::tests::{
    create_test_device, create_test_house, create_test_room, create_test_sensor,
};

mod common;
use common::mock_app::MockApp;

const DAY: &str = "start=2024-03-01T00:00:00Z&end=2024-03-02T00:00:00Z";

/// A house with an indoor thermostat and an outdoor weather station.
async fn thermometer_app() -> MockApp {
    let app = MockApp::new().await;
    let house = create_test_house(app.storage.clone(), "home").await;
    let living = create_test_room(app.storage.clone(), &house, "living", true).await;
    let garden = create_test_room(app.storage.clone(), &house, "garden", false).await;
    let indoor = create_test_device(app.storage.clone(), &living, "thermostat").await;
    let outdoor = create_test_device(app.storage.clone(), &garden, "station").await;
    create_test_sensor(app.storage.clone(), &indoor, "GA100K").await;
    create_test_sensor(app.storage.clone(), &outdoor, "DP22C").await;

    app
}

async fn record(app: &MockApp, device_id: &str, sensor_id: &str, value: &str, timestamp: &str) {
    let (status, _) = app
        .post(
            "/api/v1/sensor-readings",
            json!({
                "device_id": device_id,
                "sensor_id": sensor_id,
                "value": value,
                "timestamp": timestamp
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_sensor_reading() {
    let app = thermometer_app().await;

    let (status, body) = app
        .post(
            "/api/v1/sensor-readings",
            json!({
                "device_id": "home-living-thermostat",
                "sensor_id": "home-living-thermostat-GA100K",
                "value": "21",
                "timestamp": "2024-03-01T10:00:00Z"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["value"], json!("21"));
    assert_eq!(body["timestamp"], json!("2024-03-01T10:00:00Z"));

    let id = body["id"].as_str().unwrap().to_string();
    let (status, body) = app.get(&format!("/api/v1/sensor-readings/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sensor_id"], json!("home-living-thermostat-GA100K"));

    let (status, _) = app.get("/api/v1/sensor-readings/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_sensor_reading_validation() {
    let app = thermometer_app().await;

    // GA100K only reports whole degrees
    let (status, _) = app
        .post(
            "/api/v1/sensor-readings",
            json!({
                "device_id": "home-living-thermostat",
                "sensor_id": "home-living-thermostat-GA100K",
                "value": "21.5"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/v1/sensor-readings",
            json!({
                "device_id": "home-garden-station",
                "sensor_id": "home-living-thermostat-GA100K",
                "value": "21"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/v1/sensor-readings",
            json!({
                "device_id": "home-living-thermostat",
                "sensor_id": "home-living-thermostat-DP22C",
                "value": "21"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_sensor_readings_within_period() {
    let app = thermometer_app().await;
    let device = "home-living-thermostat";
    let sensor = "home-living-thermostat-GA100K";
    record(&app, device, sensor, "20", "2024-02-29T23:59:00Z").await;
    record(&app, device, sensor, "21", "2024-03-01T08:00:00Z").await;
    record(&app, device, sensor, "22", "2024-03-01T20:00:00Z").await;

    let (status, body) = app
        .get(&format!("/api/v1/sensor-readings?device_id={device}&{DAY}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = app
        .get(&format!("/api/v1/devices/{device}/sensor-readings"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, _) = app
        .get(&format!(
            "/api/v1/sensor-readings?device_id={device}&start=2024-03-02T00:00:00Z&end=2024-03-01T00:00:00Z"
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .get(&format!("/api/v1/sensor-readings?device_id={device}"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        json!("Missing query parameter: start")
    );

    let (status, _) = app
        .get(&format!("/api/v1/sensor-readings?device_id=ghost&{DAY}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_max_temperature_difference() {
    let app = thermometer_app().await;
    let indoor = "home-living-thermostat";
    let outdoor = "home-garden-station";
    record(&app, indoor, "home-living-thermostat-GA100K", "22", "2024-03-01T10:00:00Z").await;
    record(&app, indoor, "home-living-thermostat-GA100K", "25", "2024-03-01T12:00:00Z").await;
    record(&app, outdoor, "home-garden-station-DP22C", "10.5", "2024-03-01T10:04:00Z").await;
    record(&app, outdoor, "home-garden-station-DP22C", "2", "2024-03-01T14:00:00Z").await;

    let (status, body) = app
        .get(&format!(
            "/api/v1/sensor-readings?device_id_indoor={indoor}&device_id_outdoor={outdoor}&delta_time=5&{DAY}"
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_difference"], json!(11.5));
    assert_eq!(body["delta_time"], json!(5));

    // Nothing pairs within one minute
    let (status, body) = app
        .get(&format!(
            "/api/v1/sensor-readings?device_id_indoor={indoor}&device_id_outdoor={outdoor}&delta_time=1&{DAY}"
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["message"],
        json!("No readings found within the given time period")
    );

    // Swapped placements
    let (status, _) = app
        .get(&format!(
            "/api/v1/sensor-readings?device_id_indoor={outdoor}&device_id_outdoor={indoor}&delta_time=5&{DAY}"
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .get(&format!(
            "/api/v1/sensor-readings?device_id_indoor={indoor}&device_id_outdoor={outdoor}&delta_time=-5&{DAY}"
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Any gap pairs under the largest tolerance
    let (status, body) = app
        .get(&format!(
            "/api/v1/sensor-readings?device_id_indoor={indoor}&device_id_outdoor={outdoor}&delta_time={}&{DAY}",
            i64::MAX
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_difference"], json!(23.0));
    assert_eq!(body["delta_time"], json!(i64::MAX));

    let (status, body) = app
        .get(&format!(
            "/api/v1/sensor-readings?device_id_indoor={indoor}&device_id_outdoor={outdoor}&{DAY}"
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        json!("Missing query parameter: delta_time")
    );
}

#[tokio::test]
async fn test_max_temperature_difference_without_readings() {
    let app = thermometer_app().await;

    let (status, body) = app
        .get(&format!(
            "/api/v1/sensor-readings?device_id_indoor=home-living-thermostat&device_id_outdoor=home-garden-station&delta_time=5&{DAY}"
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["message"],
        json!("No temperature readings found for the given time period")
    );
}

#[tokio::test]
async fn test_peak_power_consumption() {
    let app = MockApp::new().await;
    let house = create_test_house(app.storage.clone(), "home").await;
    let utility = create_test_room(app.storage.clone(), &house, "utility", true).await;
    let pump = create_test_device(app.storage.clone(), &utility, "pump").await;
    create_test_sensor(app.storage.clone(), &pump, "PC500W").await;

    let query = "start=2024-03-01T00:00:00Z&end=2024-03-01T00:30:00Z&interval=15";
    let (status, body) = app
        .get(&format!("/api/v1/houses/home/peak-power-consumption?{query}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["message"],
        json!("No power grid meter found in the house")
    );

    let meter = create_test_device(app.storage.clone(), &utility, "Power Grid Meter").await;
    create_test_sensor(app.storage.clone(), &meter, "PC500W").await;

    let pump_sensor = "home-utility-pump-PC500W";
    let meter_sensor = "home-utility-Power Grid Meter-PC500W";
    record(&app, "home-utility-pump", pump_sensor, "100", "2024-03-01T00:05:00Z").await;
    record(&app, "home-utility-pump", pump_sensor, "300", "2024-03-01T00:10:00Z").await;
    record(&app, "home-utility-pump", pump_sensor, "50", "2024-03-01T00:20:00Z").await;
    record(&app, "home-utility-Power Grid Meter", meter_sensor, "40", "2024-03-01T00:01:00Z").await;

    let (status, body) = app
        .get(&format!("/api/v1/houses/home/peak-power-consumption?{query}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["house_id"], json!("home"));
    assert_eq!(body["peak_power_consumption"], json!(240.0));

    let (status, _) = app
        .get("/api/v1/houses/home/peak-power-consumption?start=2024-03-01T00:00:00Z&end=2024-03-01T00:30:00Z&interval=0")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .get(&format!(
            "/api/v1/houses/home/peak-power-consumption?start=2024-03-01T00:00:00Z&end=2024-03-01T00:30:00Z&interval={}",
            i64::MAX
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .get(&format!("/api/v1/houses/cabin/peak-power-consumption?{query}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
