use std::sync::Arc;

use async_trait::async_trait;

use super::{insert_error, restore_all, restore_one};
use crate::configs::Storage;
use crate::domain::Device;
use crate::domain::values::{DeviceId, RoomId};
use crate::models::DeviceRow;
use crate::repositories::{DeviceRepository, Repository, RepositoryError};

const ENTITY: &str = "Device";

pub struct SqlDeviceRepository {
    storage: Arc<Storage>,
}

impl SqlDeviceRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<DeviceId, Device> for SqlDeviceRepository {
    async fn save(&self, device: Device) -> Result<Device, RepositoryError> {
        let row = DeviceRow::from(&device);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO devices (id, room_id, name, model, active)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&row.id)
        .bind(&row.room_id)
        .bind(&row.name)
        .bind(&row.model)
        .bind(row.active)
        .execute(&mut *transaction)
        .await
        .map_err(|e| insert_error(ENTITY, &row.id, e))?;

        transaction.commit().await?;

        Ok(device)
    }

    async fn find_all(&self) -> Result<Vec<Device>, RepositoryError> {
        let rows: Vec<DeviceRow> = sqlx::query_as("SELECT * FROM devices ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        restore_all(ENTITY, rows)
    }

    async fn of_identity(&self, id: &DeviceId) -> Result<Option<Device>, RepositoryError> {
        let row: Option<DeviceRow> = sqlx::query_as("SELECT * FROM devices WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(self.storage.get_pool())
            .await?;

        row.map(|row| restore_one(ENTITY, row)).transpose()
    }
}

#[async_trait]
impl DeviceRepository for SqlDeviceRepository {
    async fn update(&self, device: Device) -> Result<Device, RepositoryError> {
        let row = DeviceRow::from(&device);
        let mut transaction = self.storage.get_pool().begin().await?;

        let affected = sqlx::query(
            r#"
            UPDATE devices
            SET room_id = $1, name = $2, model = $3, active = $4
            WHERE id = $5
            "#,
        )
        .bind(&row.room_id)
        .bind(&row.name)
        .bind(&row.model)
        .bind(row.active)
        .bind(&row.id)
        .execute(&mut *transaction)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(RepositoryError::Missing {
                entity: ENTITY,
                id: row.id,
            });
        }

        transaction.commit().await?;

        Ok(device)
    }

    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Device>, RepositoryError> {
        let rows: Vec<DeviceRow> =
            sqlx::query_as("SELECT * FROM devices WHERE room_id = $1 ORDER BY id")
                .bind(room_id.as_str())
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all(ENTITY, rows)
    }

    async fn find_active(&self) -> Result<Vec<Device>, RepositoryError> {
        let rows: Vec<DeviceRow> =
            sqlx::query_as("SELECT * FROM devices WHERE active = TRUE ORDER BY id")
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all(ENTITY, rows)
    }
}
