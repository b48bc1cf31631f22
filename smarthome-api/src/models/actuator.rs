use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActuatorRequest {
    /// Optional caller supplied identifier
    #[serde(default)]
    pub id: Option<Id>,
    /// Device hosting the actuator
    pub device_id: Id,
    /// Actuator model, e.g. OPNCL0100
    pub actuator_model_id: Id,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActuatorResponse {
    /// Actuator identifier
    pub id: Id,
    /// Device hosting the actuator
    pub device_id: Id,
    /// Actuator model
    pub actuator_model_id: Id,
    /// Last value applied, if any
    pub value: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRollerBlindRequest {
    /// Position sensor reporting the blind, must be on the same device
    pub sensor_id: Id,
    /// Target position percentage (0-100)
    pub value: i32,
}
