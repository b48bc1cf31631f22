use serde::{Deserialize, Serialize};

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionsData {
    /// Length in meters
    pub length: f64,
    /// Width in meters
    pub width: f64,
    /// Height in meters
    pub height: f64,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    /// Optional caller supplied identifier
    #[serde(default)]
    pub id: Option<Id>,
    /// Parent house identifier
    pub house_id: Id,
    /// Room name
    pub name: String,
    /// Floor number, may be negative
    pub floor: i32,
    /// Room dimensions
    pub dimensions: DimensionsData,
    /// Whether the room is inside the house
    pub is_inside: bool,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    /// Room identifier
    pub id: Id,
    /// Parent house identifier
    pub house_id: Id,
    /// Room name
    pub name: String,
    /// Floor number
    pub floor: i32,
    /// Room dimensions
    pub dimensions: DimensionsData,
    /// Whether the room is inside the house
    pub is_inside: bool,
}
