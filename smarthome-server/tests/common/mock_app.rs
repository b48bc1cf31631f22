#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use smarthome_server::app::create_router;
use smarthome_server::configs::Storage;
use smarthome_server::domain::SequentialGenerator;
use smarthome_server::domain::values::GpsCoordinates;
use smarthome_server::errors::WeatherError;
use smarthome_server::repositories::Repositories;
use smarthome_server::services::{Services, SunEvent, WeatherGateway};
use smarthome_server::tests::{create_test_catalog, setup_test_db};

/// Answers every weather query with fixed values.
pub struct StubWeatherGateway;

#[async_trait]
impl WeatherGateway for StubWeatherGateway {
    async fn current_temperature(
        &self,
        _gps: GpsCoordinates,
        _hour: u8,
    ) -> Result<Value, WeatherError> {
        Ok(json!(18.5))
    }

    async fn sun_time(&self, _gps: GpsCoordinates, event: SunEvent) -> Result<Value, WeatherError> {
        match event {
            SunEvent::Sunrise => Ok(json!("07:42")),
            SunEvent::Sunset => Ok(json!("18:15")),
        }
    }
}

/// Fails every weather query as an unavailable upstream would.
pub struct DownWeatherGateway;

#[async_trait]
impl WeatherGateway for DownWeatherGateway {
    async fn current_temperature(
        &self,
        _gps: GpsCoordinates,
        _hour: u8,
    ) -> Result<Value, WeatherError> {
        Err(WeatherError::Upstream(503))
    }

    async fn sun_time(&self, _gps: GpsCoordinates, _event: SunEvent) -> Result<Value, WeatherError> {
        Err(WeatherError::Upstream(503))
    }
}

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub services: Services,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        Self::with_gateway(Arc::new(StubWeatherGateway)).await
    }

    pub async fn with_gateway(gateway: Arc<dyn WeatherGateway>) -> Self {
        let storage = setup_test_db().await;
        create_test_catalog(storage.clone()).await;

        let services = Services::new(
            &Repositories::sqlite(storage.clone()),
            Arc::new(SequentialGenerator::new("mock")),
            gateway,
        );
        let router = create_router(&services);

        Self {
            storage,
            services,
            router,
        }
    }

    /// Sends a request and returns the status with the decoded JSON body,
    /// `Value::Null` when the body is empty.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().uri(uri).method(method);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, body).await
    }
}
