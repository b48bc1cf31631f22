use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_sensor_types() {
    let app = MockApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/sensor-types",
            json!({ "id": "humidity", "description": "Humidity", "unit": "Percent" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!("humidity"));
    assert_eq!(body["unit"], json!("Percent"));

    let (status, _) = app
        .post(
            "/api/v1/sensor-types",
            json!({ "id": "humidity", "description": "Air Humidity", "unit": "Percent" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post(
            "/api/v1/sensor-types",
            json!({ "id": "pressure", "description": " ", "unit": "Pascal" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/v1/sensor-types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, body) = app.get("/api/v1/sensor-types/temperature").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], json!("Temperature"));

    let (status, _) = app.get("/api/v1/sensor-types/radiation").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_actuator_types() {
    let app = MockApp::new().await;

    let (status, _) = app
        .post(
            "/api/v1/actuator-types",
            json!({ "id": "switch", "description": "Switch", "unit": "Binary" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.get("/api/v1/actuator-types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = app.get("/api/v1/actuator-types/blind").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], json!("Roller Blind"));

    let (status, _) = app.get("/api/v1/actuator-types/heater").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sensor_models() {
    let app = MockApp::new().await;

    let (status, body) = app
        .get("/api/v1/sensor-models?sensor_type_id=temperature")
        .await;
    assert_eq!(status, StatusCode::OK);
    let mut models: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|model| model["id"].as_str().unwrap().to_string())
        .collect();
    models.sort();
    assert_eq!(models, ["DP22C", "GA100K"]);

    let (status, _) = app
        .get("/api/v1/sensor-models?sensor_type_id=radiation")
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .post(
            "/api/v1/sensor-models",
            json!({ "id": "TSY01", "sensor_type_id": "temperature" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sensor_type_id"], json!("temperature"));

    let (status, _) = app
        .post(
            "/api/v1/sensor-models",
            json!({ "id": "TSY01", "sensor_type_id": "temperature" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post(
            "/api/v1/sensor-models",
            json!({ "id": "NOPE1", "sensor_type_id": "temperature" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/v1/sensor-models/CAP200").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sensor_type_id"], json!("position"));
}

#[tokio::test]
async fn test_actuator_models() {
    let app = MockApp::new().await;

    let (status, body) = app
        .get("/api/v1/actuator-models?actuator_type_id=blind")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], json!("OPNCL0100"));

    let (status, _) = app
        .post(
            "/api/v1/actuator-models",
            json!({ "id": "SPV300", "actuator_type_id": "heater" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/api/v1/actuator-models/SIV280").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["actuator_type_id"], json!("valve"));

    let (status, _) = app.get("/api/v1/actuator-models/ONF01A").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
