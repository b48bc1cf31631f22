use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use smarthome_api::models::CreateDeviceRequest;
use smarthome_server::domain::AggregateRoot;
use smarthome_server::tests::{
    create_test_device, create_test_house, create_test_room, create_test_sensor,
};

mod common;
use common::mock_app::MockApp;

#[tokio::test]
async fn test_create_device() {
    let app = MockApp::new().await;
    let house = create_test_house(app.storage.clone(), "home").await;
    let room = create_test_room(app.storage.clone(), &house, "office", true).await;

    let request = Request::builder()
        .uri("/api/v1/devices")
        .method(Method::POST)
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_string(&CreateDeviceRequest {
                id: Some("desk-lamp".to_string()),
                room_id: room.identity().to_string(),
                name: "Desk Lamp".to_string(),
                model: "DL-42".to_string(),
            })
            .unwrap(),
        ))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let device_response: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(device_response["id"], json!("desk-lamp"));
    assert_eq!(device_response["room_id"], json!("home-office"));
    assert_eq!(device_response["name"], json!("Desk Lamp"));
    assert_eq!(device_response["model"], json!("DL-42"));
    assert_eq!(device_response["active"], json!(true));

    // Test duplicate identifier
    let (status, _) = app
        .post(
            "/api/v1/devices",
            json!({
                "id": "desk-lamp",
                "room_id": "home-office",
                "name": "Another Lamp",
                "model": "DL-43"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_device_requires_room() {
    let app = MockApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/devices",
            json!({ "room_id": "attic", "name": "Fan", "model": "F-1" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], json!("Room not found"));
}

#[tokio::test]
async fn test_deactivate_device() {
    let app = MockApp::new().await;
    let house = create_test_house(app.storage.clone(), "home").await;
    let room = create_test_room(app.storage.clone(), &house, "office", true).await;
    create_test_device(app.storage.clone(), &room, "lamp").await;
    create_test_device(app.storage.clone(), &room, "heater").await;

    let (status, body) = app
        .patch("/api/v1/devices?device_id=home-office-lamp", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], json!(false));

    // Deactivating twice keeps the device inactive
    let (status, body) = app
        .patch("/api/v1/devices?device_id=home-office-lamp", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active"], json!(false));

    let (status, body) = app.get("/api/v1/devices?get_by=active").await;
    assert_eq!(status, StatusCode::OK);
    let active = body.as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["id"], json!("home-office-heater"));

    let (status, body) = app.get("/api/v1/devices").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, _) = app
        .patch("/api/v1/devices?device_id=home-office-fridge", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_devices_by_functionality() {
    let app = MockApp::new().await;
    let house = create_test_house(app.storage.clone(), "home").await;
    let room = create_test_room(app.storage.clone(), &house, "office", true).await;
    let thermostat = create_test_device(app.storage.clone(), &room, "thermostat").await;
    let blind = create_test_device(app.storage.clone(), &room, "blind").await;
    create_test_device(app.storage.clone(), &room, "idle").await;

    create_test_sensor(app.storage.clone(), &thermostat, "GA100K").await;
    create_test_sensor(app.storage.clone(), &thermostat, "DP22C").await;
    create_test_sensor(app.storage.clone(), &blind, "CAP200").await;
    let (status, _) = app
        .post(
            "/api/v1/actuators",
            json!({ "device_id": "home-office-blind", "actuator_model_id": "OPNCL0100" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.get("/api/v1/devices?get_by=functionality").await;
    assert_eq!(status, StatusCode::OK);

    let temperature = body["Temperature"].as_array().unwrap();
    assert_eq!(temperature.len(), 1);
    assert_eq!(temperature[0]["id"], json!("home-office-thermostat"));
    assert_eq!(body["Position"].as_array().unwrap().len(), 1);
    assert_eq!(body["Roller Blind"][0]["id"], json!("home-office-blind"));
    assert!(body.get("Power Consumption").is_none());
}

#[tokio::test]
async fn test_get_device_details() {
    let app = MockApp::new().await;
    let house = create_test_house(app.storage.clone(), "home").await;
    let room = create_test_room(app.storage.clone(), &house, "office", true).await;
    let device = create_test_device(app.storage.clone(), &room, "thermostat").await;
    create_test_sensor(app.storage.clone(), &device, "GA100K").await;

    let (status, body) = app.get("/api/v1/devices/home-office-thermostat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("thermostat"));

    let (status, body) = app
        .get("/api/v1/devices/home-office-thermostat/sensors")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["sensor_model_id"], json!("GA100K"));

    let (status, body) = app
        .get("/api/v1/devices/home-office-thermostat/actuators")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = app.get("/api/v1/devices/home-office-toaster").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
