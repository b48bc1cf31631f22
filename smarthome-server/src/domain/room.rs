use crate::domain::AggregateRoot;
use crate::domain::values::{Dimensions, FloorNumber, HouseId, RoomId, RoomName};

#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    house_id: HouseId,
    name: RoomName,
    floor: FloorNumber,
    dimensions: Dimensions,
    is_inside: bool,
}

impl Room {
    pub fn new(
        id: RoomId,
        house_id: HouseId,
        name: RoomName,
        floor: FloorNumber,
        dimensions: Dimensions,
        is_inside: bool,
    ) -> Self {
        Self {
            id,
            house_id,
            name,
            floor,
            dimensions,
            is_inside,
        }
    }

    pub fn house_id(&self) -> &HouseId {
        &self.house_id
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    pub fn floor(&self) -> FloorNumber {
        self.floor
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_inside(&self) -> bool {
        self.is_inside
    }
}

impl AggregateRoot for Room {
    type Id = RoomId;

    fn identity(&self) -> &RoomId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.house_id == other.house_id
            && self.name == other.name
            && self.floor == other.floor
            && self.dimensions == other.dimensions
            && self.is_inside == other.is_inside
    }
}
