use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use smarthome_api::models::{CoordinatesQuery, WeatherReport};
use time::OffsetDateTime;

use crate::configs::Weather;
use crate::domain::values::{GpsCoordinates, Latitude, Longitude};
use crate::errors::{ApiError, WeatherError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunEvent {
    Sunrise,
    Sunset,
}

impl SunEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SunEvent::Sunrise => "sunrise",
            SunEvent::Sunset => "sunset",
        }
    }
}

impl fmt::Display for SunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote source of weather observations.
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Temperature at the given hour (UTC) of the current day.
    async fn current_temperature(
        &self,
        gps: GpsCoordinates,
        hour: u8,
    ) -> Result<Value, WeatherError>;

    async fn sun_time(&self, gps: GpsCoordinates, event: SunEvent) -> Result<Value, WeatherError>;
}

/// Gateway over the HTTP weather service.
pub struct HttpWeatherGateway {
    client: Client,
    base_url: String,
    group_number: u32,
}

impl HttpWeatherGateway {
    pub fn new(settings: &Weather) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            group_number: settings.group_number,
        })
    }

    async fn fetch(&self, resource: &str, query: &[(&str, String)]) -> Result<Value, WeatherError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, resource))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Upstream(status.as_u16()));
        }

        // plain text answers are passed through as strings
        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}

#[async_trait]
impl WeatherGateway for HttpWeatherGateway {
    async fn current_temperature(
        &self,
        gps: GpsCoordinates,
        hour: u8,
    ) -> Result<Value, WeatherError> {
        self.fetch(
            "InstantaneousTemperature",
            &[
                ("groupNumber", self.group_number.to_string()),
                ("latitude", gps.latitude().value().to_string()),
                ("longitude", gps.longitude().value().to_string()),
                ("hour", hour.to_string()),
            ],
        )
        .await
    }

    async fn sun_time(&self, gps: GpsCoordinates, event: SunEvent) -> Result<Value, WeatherError> {
        self.fetch(
            "SunriseOrSunsetTime",
            &[
                ("groupNumber", self.group_number.to_string()),
                ("latitude", gps.latitude().value().to_string()),
                ("longitude", gps.longitude().value().to_string()),
                ("option", event.to_string()),
            ],
        )
        .await
    }
}

pub struct WeatherService {
    gateway: Arc<dyn WeatherGateway>,
}

impl WeatherService {
    pub fn new(gateway: Arc<dyn WeatherGateway>) -> Self {
        Self { gateway }
    }

    pub async fn current_temperature(
        &self,
        coordinates: CoordinatesQuery,
    ) -> Result<WeatherReport, ApiError> {
        let gps = coordinates_of(coordinates)?;
        let hour = OffsetDateTime::now_utc().hour();
        let value = self.gateway.current_temperature(gps, hour).await?;

        tracing::debug!(hour, "current temperature fetched");

        Ok(report("current-temperature", coordinates, value))
    }

    pub async fn sunrise(&self, coordinates: CoordinatesQuery) -> Result<WeatherReport, ApiError> {
        self.sun_time(coordinates, SunEvent::Sunrise).await
    }

    pub async fn sunset(&self, coordinates: CoordinatesQuery) -> Result<WeatherReport, ApiError> {
        self.sun_time(coordinates, SunEvent::Sunset).await
    }

    async fn sun_time(
        &self,
        coordinates: CoordinatesQuery,
        event: SunEvent,
    ) -> Result<WeatherReport, ApiError> {
        let gps = coordinates_of(coordinates)?;
        let value = self.gateway.sun_time(gps, event).await?;

        Ok(report(event.as_str(), coordinates, value))
    }
}

fn coordinates_of(coordinates: CoordinatesQuery) -> Result<GpsCoordinates, ApiError> {
    Ok(GpsCoordinates::new(
        Latitude::new(coordinates.latitude)?,
        Longitude::new(coordinates.longitude)?,
    ))
}

fn report(kind: &str, coordinates: CoordinatesQuery, value: Value) -> WeatherReport {
    WeatherReport {
        kind: kind.to_string(),
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        value,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct FixedGateway;

    #[async_trait]
    impl WeatherGateway for FixedGateway {
        async fn current_temperature(
            &self,
            _gps: GpsCoordinates,
            hour: u8,
        ) -> Result<Value, WeatherError> {
            Ok(json!({ "hour": hour, "temperature": 18.5 }))
        }

        async fn sun_time(
            &self,
            _gps: GpsCoordinates,
            event: SunEvent,
        ) -> Result<Value, WeatherError> {
            match event {
                SunEvent::Sunrise => Ok(json!("06:41")),
                SunEvent::Sunset => Err(WeatherError::Upstream(503)),
            }
        }
    }

    fn porto() -> CoordinatesQuery {
        CoordinatesQuery {
            latitude: 41.15,
            longitude: -8.61,
        }
    }

    #[tokio::test]
    async fn test_weather_reports() {
        let service = WeatherService::new(Arc::new(FixedGateway));

        let report = service.current_temperature(porto()).await.unwrap();
        assert_eq!(report.kind, "current-temperature");
        assert_eq!(report.value["temperature"], json!(18.5));

        let report = service.sunrise(porto()).await.unwrap();
        assert_eq!(report.value, json!("06:41"));

        assert!(matches!(
            service.sunset(porto()).await,
            Err(ApiError::WeatherError(WeatherError::Upstream(503)))
        ));
    }

    #[tokio::test]
    async fn test_weather_rejects_bad_coordinates() {
        let service = WeatherService::new(Arc::new(FixedGateway));
        let coordinates = CoordinatesQuery {
            latitude: 91.0,
            longitude: 0.0,
        };

        assert!(matches!(
            service.sunrise(coordinates).await,
            Err(ApiError::ValidationError(_))
        ));
    }
}
