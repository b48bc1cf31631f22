use crate::domain::AggregateRoot;
use crate::domain::values::{HouseId, Location};

#[derive(Debug, Clone)]
pub struct House {
    id: HouseId,
    location: Location,
}

impl House {
    pub fn new(id: HouseId, location: Location) -> Self {
        Self { id, location }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn configure_location(&mut self, location: Location) {
        self.location = location;
    }
}

impl AggregateRoot for House {
    type Id = HouseId;

    fn identity(&self) -> &HouseId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.location == other.location
    }
}
