use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeviceRequest {
    /// Optional caller supplied identifier
    #[serde(default)]
    pub id: Option<Id>,
    /// Room hosting the device
    pub room_id: Id,
    /// Device name
    pub name: String,
    /// Commercial model of the device
    pub model: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceResponse {
    /// Device identifier
    pub id: Id,
    /// Room hosting the device
    pub room_id: Id,
    /// Device name
    pub name: String,
    /// Commercial model of the device
    pub model: String,
    /// Activation status
    pub active: bool,
}

/// Devices keyed by the description of the sensor or actuator type they host.
pub type DevicesByFunctionality = BTreeMap<String, Vec<DeviceResponse>>;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFilter {
    /// Only active devices
    Active,
    /// Devices grouped by functionality
    Functionality,
}

impl fmt::Display for DeviceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceFilter::Active => write!(f, "active"),
            DeviceFilter::Functionality => write!(f, "functionality"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceListQuery {
    /// Optional listing mode
    pub get_by: Option<DeviceFilter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeactivateDeviceQuery {
    /// Device to deactivate
    pub device_id: Id,
}
