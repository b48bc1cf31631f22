use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSensorTypeRequest {
    /// Sensor type identifier
    pub id: Id,
    /// What the sensor measures
    pub description: String,
    /// Unit of the measurement
    pub unit: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorTypeResponse {
    pub id: Id,
    pub description: String,
    pub unit: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActuatorTypeRequest {
    /// Actuator type identifier
    pub id: Id,
    /// What the actuator drives
    pub description: String,
    /// Unit of the applied value
    pub unit: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorTypeResponse {
    pub id: Id,
    pub description: String,
    pub unit: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSensorModelRequest {
    /// Model name, one of the supported sensor models
    pub id: Id,
    /// Type this model measures
    pub sensor_type_id: Id,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActuatorModelRequest {
    /// Model name, one of the supported actuator models
    pub id: Id,
    /// Type this model drives
    pub actuator_type_id: Id,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorModelResponse {
    /// Model name, e.g. GA100K
    pub id: Id,
    /// Type this model measures
    pub sensor_type_id: Id,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorModelResponse {
    /// Model name, e.g. OPNCL0100
    pub id: Id,
    /// Type this model drives
    pub actuator_type_id: Id,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorModelQuery {
    pub sensor_type_id: Id,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorModelQuery {
    pub actuator_type_id: Id,
}
