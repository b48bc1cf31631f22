use std::sync::Arc;

use async_trait::async_trait;

use super::{insert_error, restore_all, restore_one};
use crate::configs::Storage;
use crate::domain::Sensor;
use crate::domain::values::{DeviceId, SensorId};
use crate::models::SensorRow;
use crate::repositories::{Repository, RepositoryError, SensorRepository};

const ENTITY: &str = "Sensor";

pub struct SqlSensorRepository {
    storage: Arc<Storage>,
}

impl SqlSensorRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<SensorId, Sensor> for SqlSensorRepository {
    async fn save(&self, sensor: Sensor) -> Result<Sensor, RepositoryError> {
        let row = SensorRow::from(&sensor);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query("INSERT INTO sensors (id, device_id, sensor_model_id) VALUES ($1, $2, $3)")
            .bind(&row.id)
            .bind(&row.device_id)
            .bind(&row.sensor_model_id)
            .execute(&mut *transaction)
            .await
            .map_err(|e| insert_error(ENTITY, &row.id, e))?;

        transaction.commit().await?;

        Ok(sensor)
    }

    async fn find_all(&self) -> Result<Vec<Sensor>, RepositoryError> {
        let rows: Vec<SensorRow> = sqlx::query_as("SELECT * FROM sensors ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        restore_all(ENTITY, rows)
    }

    async fn of_identity(&self, id: &SensorId) -> Result<Option<Sensor>, RepositoryError> {
        let row: Option<SensorRow> = sqlx::query_as("SELECT * FROM sensors WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(self.storage.get_pool())
            .await?;

        row.map(|row| restore_one(ENTITY, row)).transpose()
    }
}

#[async_trait]
impl SensorRepository for SqlSensorRepository {
    async fn find_by_device(&self, device_id: &DeviceId) -> Result<Vec<Sensor>, RepositoryError> {
        let rows: Vec<SensorRow> =
            sqlx::query_as("SELECT * FROM sensors WHERE device_id = $1 ORDER BY id")
                .bind(device_id.as_str())
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all(ENTITY, rows)
    }
}
