use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use super::{insert_error, restore_all, restore_one};
use crate::configs::Storage;
use crate::domain::SensorReading;
use crate::domain::values::{DeviceId, SensorId, SensorReadingId};
use crate::models::{SensorReadingRow, to_millis, to_millis_ceil};
use crate::repositories::{Repository, RepositoryError, SensorReadingRepository};

const ENTITY: &str = "Sensor reading";

pub struct SqlSensorReadingRepository {
    storage: Arc<Storage>,
}

impl SqlSensorReadingRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<SensorReadingId, SensorReading> for SqlSensorReadingRepository {
    async fn save(&self, reading: SensorReading) -> Result<SensorReading, RepositoryError> {
        let row = SensorReadingRow::from(&reading);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO sensor_readings (id, device_id, sensor_id, reading, timestamp)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&row.id)
        .bind(&row.device_id)
        .bind(&row.sensor_id)
        .bind(&row.reading)
        .bind(row.timestamp)
        .execute(&mut *transaction)
        .await
        .map_err(|e| insert_error(ENTITY, &row.id, e))?;

        transaction.commit().await?;

        Ok(reading)
    }

    async fn find_all(&self) -> Result<Vec<SensorReading>, RepositoryError> {
        let rows: Vec<SensorReadingRow> =
            sqlx::query_as("SELECT * FROM sensor_readings ORDER BY id")
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all(ENTITY, rows)
    }

    async fn of_identity(
        &self,
        id: &SensorReadingId,
    ) -> Result<Option<SensorReading>, RepositoryError> {
        let row: Option<SensorReadingRow> =
            sqlx::query_as("SELECT * FROM sensor_readings WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(self.storage.get_pool())
                .await?;

        row.map(|row| restore_one(ENTITY, row)).transpose()
    }
}

#[async_trait]
impl SensorReadingRepository for SqlSensorReadingRepository {
    async fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Vec<SensorReading>, RepositoryError> {
        let rows: Vec<SensorReadingRow> = sqlx::query_as(
            "SELECT * FROM sensor_readings WHERE device_id = $1 ORDER BY timestamp, id",
        )
        .bind(device_id.as_str())
        .fetch_all(self.storage.get_pool())
        .await?;

        restore_all(ENTITY, rows)
    }

    async fn find_by_device_within_period(
        &self,
        device_id: &DeviceId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, RepositoryError> {
        let rows: Vec<SensorReadingRow> = sqlx::query_as(
            r#"
            SELECT * FROM sensor_readings
            WHERE device_id = $1 AND timestamp >= $2 AND timestamp <= $3
            ORDER BY timestamp, id
            "#,
        )
        .bind(device_id.as_str())
        .bind(to_millis_ceil(start))
        .bind(to_millis(end))
        .fetch_all(self.storage.get_pool())
        .await?;

        restore_all(ENTITY, rows)
    }

    async fn find_by_sensor_within_period(
        &self,
        sensor_id: &SensorId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, RepositoryError> {
        let rows: Vec<SensorReadingRow> = sqlx::query_as(
            r#"
            SELECT * FROM sensor_readings
            WHERE sensor_id = $1 AND timestamp >= $2 AND timestamp <= $3
            ORDER BY timestamp, id
            "#,
        )
        .bind(sensor_id.as_str())
        .bind(to_millis_ceil(start))
        .bind(to_millis(end))
        .fetch_all(self.storage.get_pool())
        .await?;

        restore_all(ENTITY, rows)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::AggregateRoot;
    use crate::domain::values::Reading;
    use crate::tests::{
        create_test_catalog, create_test_device, create_test_house, create_test_room,
        create_test_sensor, setup_test_db,
    };

    #[tokio::test]
    async fn test_readings_within_period() {
        let storage = setup_test_db().await;
        create_test_catalog(storage.clone()).await;
        let house = create_test_house(storage.clone(), "h1").await;
        let room = create_test_room(storage.clone(), &house, "living", true).await;
        let device = create_test_device(storage.clone(), &room, "Thermostat").await;
        let sensor = create_test_sensor(storage.clone(), &device, "GA100K").await;

        let repository = SqlSensorReadingRepository::new(storage);
        for (id, at) in [
            ("r3", datetime!(2024-01-01 12:00 UTC)),
            ("r1", datetime!(2024-01-01 10:00 UTC)),
            ("r2", datetime!(2024-01-01 11:00 +01:00)),
        ] {
            repository
                .save(SensorReading::new(
                    SensorReadingId::new(id).unwrap(),
                    device.identity().clone(),
                    sensor.identity().clone(),
                    Reading::new("20").unwrap(),
                    at,
                ))
                .await
                .unwrap();
        }

        // 11:00 +01:00 is 10:00 UTC
        let readings = repository
            .find_by_device_within_period(
                device.identity(),
                datetime!(2024-01-01 10:00 UTC),
                datetime!(2024-01-01 11:00 UTC),
            )
            .await
            .unwrap();
        let ids: Vec<_> = readings.iter().map(|r| r.identity().to_string()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);

        let readings = repository
            .find_by_sensor_within_period(
                sensor.identity(),
                datetime!(2024-01-01 10:30 UTC),
                datetime!(2024-01-01 12:00 UTC),
            )
            .await
            .unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(repository.find_by_device(device.identity()).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_sub_millisecond_bounds() {
        let storage = setup_test_db().await;
        create_test_catalog(storage.clone()).await;
        let house = create_test_house(storage.clone(), "h1").await;
        let room = create_test_room(storage.clone(), &house, "living", true).await;
        let device = create_test_device(storage.clone(), &room, "Thermostat").await;
        let sensor = create_test_sensor(storage.clone(), &device, "GA100K").await;

        let repository = SqlSensorReadingRepository::new(storage);
        repository
            .save(SensorReading::new(
                SensorReadingId::new("r1").unwrap(),
                device.identity().clone(),
                sensor.identity().clone(),
                Reading::new("20").unwrap(),
                datetime!(2024-01-01 10:00:00.0005 UTC),
            ))
            .await
            .unwrap();

        let readings = repository
            .find_by_sensor_within_period(
                sensor.identity(),
                datetime!(2024-01-01 10:00:00.0009 UTC),
                datetime!(2024-01-01 11:00 UTC),
            )
            .await
            .unwrap();
        assert!(readings.is_empty());

        let readings = repository
            .find_by_sensor_within_period(
                sensor.identity(),
                datetime!(2024-01-01 10:00 UTC),
                datetime!(2024-01-01 10:00 UTC),
            )
            .await
            .unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].timestamp(), datetime!(2024-01-01 10:00 UTC));
    }
}
