use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Street address
    pub address: String,
    /// Country the zip code belongs to (Portugal, France, USA, Canada)
    pub country: String,
    /// Postal code formatted for the country
    pub zip_code: String,
    /// Latitude in degrees, -90 to 90
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180
    pub longitude: f64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHouseRequest {
    /// Optional caller supplied identifier
    #[serde(default)]
    pub id: Option<Id>,
    /// House location
    pub location: LocationData,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseResponse {
    /// House identifier
    pub id: Id,
    /// House location
    pub location: LocationData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakPowerQuery {
    /// Start of the period
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// End of the period
    #[serde(with = "time::serde::rfc3339")]
    pub end: OffsetDateTime,
    /// Interval length in minutes
    pub interval: i64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakPowerResponse {
    /// House identifier
    pub house_id: Id,
    /// Highest summed average consumption over all intervals
    pub peak_power_consumption: f64,
}
