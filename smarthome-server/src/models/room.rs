use serde::{Deserialize, Serialize};

use super::Table;
use crate::domain::values::{Dimensions, FloorNumber, HouseId, RoomId, RoomName};
use crate::domain::{AggregateRoot, DomainError, Room};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoomRow {
    pub id: String,
    pub house_id: String,
    pub name: String,
    pub floor: i32,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub is_inside: bool,
}

impl From<&Room> for RoomRow {
    fn from(room: &Room) -> Self {
        let dimensions = room.dimensions();
        Self {
            id: room.identity().to_string(),
            house_id: room.house_id().to_string(),
            name: room.name().to_string(),
            floor: room.floor().value(),
            length: dimensions.length.value(),
            width: dimensions.width.value(),
            height: dimensions.height.value(),
            is_inside: room.is_inside(),
        }
    }
}

impl TryFrom<RoomRow> for Room {
    type Error = DomainError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        Ok(Room::new(
            RoomId::new(row.id)?,
            HouseId::new(row.house_id)?,
            RoomName::new(row.name)?,
            FloorNumber::new(row.floor),
            Dimensions::new(row.length, row.width, row.height)?,
            row.is_inside,
        ))
    }
}

#[derive(Clone)]
pub struct RoomTable;

impl Table for RoomTable {
    fn name(&self) -> &'static str {
        "rooms"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS rooms (
                id VARCHAR(64) PRIMARY KEY,
                house_id VARCHAR(64) NOT NULL,
                name VARCHAR(255) NOT NULL,
                floor INTEGER NOT NULL,
                length REAL NOT NULL,
                width REAL NOT NULL,
                height REAL NOT NULL,
                is_inside BOOLEAN NOT NULL DEFAULT TRUE,
                FOREIGN KEY (house_id) REFERENCES houses (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS rooms;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["houses"]
    }
}
