use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSensorReadingRequest {
    /// Device emitting the reading
    pub device_id: Id,
    /// Sensor that produced the value
    pub sensor_id: Id,
    /// Raw value, validated against the sensor model
    pub value: String,
    /// Measurement time, defaults to now
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorReadingResponse {
    /// Reading identifier
    pub id: Id,
    /// Device emitting the reading
    pub device_id: Id,
    /// Sensor that produced the value
    pub sensor_id: Id,
    /// Recorded value
    pub value: String,
    /// Measurement time
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// Query string of `GET /api/v1/sensor-readings`.
///
/// With `device_id` the readings of one device are listed. With
/// `device_id_indoor`, `device_id_outdoor` and `delta_time` the maximum
/// temperature difference between the two devices is computed instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorReadingQuery {
    #[serde(default)]
    pub device_id: Option<Id>,
    #[serde(default)]
    pub device_id_indoor: Option<Id>,
    #[serde(default)]
    pub device_id_outdoor: Option<Id>,
    /// Pairing tolerance in minutes
    #[serde(default)]
    pub delta_time: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end: Option<OffsetDateTime>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureDifferenceResponse {
    /// Indoor device
    pub device_id_indoor: Id,
    /// Outdoor device
    pub device_id_outdoor: Id,
    /// Pairing tolerance in minutes
    pub delta_time: i64,
    /// Maximum absolute difference between paired readings
    pub max_difference: f64,
}
