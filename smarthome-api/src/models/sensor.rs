use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSensorRequest {
    /// Optional caller supplied identifier
    #[serde(default)]
    pub id: Option<Id>,
    /// Device hosting the sensor
    pub device_id: Id,
    /// Sensor model, e.g. GA100K
    pub sensor_model_id: Id,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorResponse {
    /// Sensor identifier
    pub id: Id,
    /// Device hosting the sensor
    pub device_id: Id,
    /// Sensor model
    pub sensor_model_id: Id,
}
