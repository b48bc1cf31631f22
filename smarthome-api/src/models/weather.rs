use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinatesQuery {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// One of `current-temperature`, `sunrise` or `sunset`
    pub kind: String,
    /// Latitude the report was requested for
    pub latitude: f64,
    /// Longitude the report was requested for
    pub longitude: f64,
    /// Payload returned by the weather service
    #[cfg_attr(feature = "docs", schema(value_type = Object))]
    pub value: serde_json::Value,
}
