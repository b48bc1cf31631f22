use serde::{Deserialize, Serialize};

use super::Table;
use crate::domain::values::{DeviceId, DeviceModel, DeviceName, RoomId};
use crate::domain::{AggregateRoot, Device, DomainError};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DeviceRow {
    pub id: String,
    pub room_id: String,
    pub name: String,
    pub model: String,
    pub active: bool,
}

impl From<&Device> for DeviceRow {
    fn from(device: &Device) -> Self {
        Self {
            id: device.identity().to_string(),
            room_id: device.room_id().to_string(),
            name: device.name().to_string(),
            model: device.model().to_string(),
            active: device.is_active(),
        }
    }
}

impl TryFrom<DeviceRow> for Device {
    type Error = DomainError;

    fn try_from(row: DeviceRow) -> Result<Self, Self::Error> {
        Ok(Device::restore(
            DeviceId::new(row.id)?,
            RoomId::new(row.room_id)?,
            DeviceName::new(row.name)?,
            DeviceModel::new(row.model)?,
            row.active.into(),
        ))
    }
}

#[derive(Clone)]
pub struct DeviceTable;

impl Table for DeviceTable {
    fn name(&self) -> &'static str {
        "devices"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS devices (
                id VARCHAR(64) PRIMARY KEY,
                room_id VARCHAR(64) NOT NULL,
                name VARCHAR(255) NOT NULL,
                model VARCHAR(255) NOT NULL,
                active BOOLEAN NOT NULL DEFAULT TRUE,
                FOREIGN KEY (room_id) REFERENCES rooms (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS devices;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["rooms"]
    }
}
