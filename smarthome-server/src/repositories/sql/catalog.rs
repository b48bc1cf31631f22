use std::sync::Arc;

use async_trait::async_trait;

use super::{insert_error, restore_all, restore_one};
use crate::configs::Storage;
use crate::domain::values::{ActuatorTypeId, SensorTypeId};
use crate::domain::{ActuatorModel, ActuatorModelKind, ActuatorType, SensorModel, SensorModelKind, SensorType};
use crate::models::{ActuatorModelRow, ActuatorTypeRow, SensorModelRow, SensorTypeRow};
use crate::repositories::{
    ActuatorModelRepository, ActuatorTypeRepository, Repository, RepositoryError,
    SensorModelRepository, SensorTypeRepository,
};

pub struct SqlSensorTypeRepository {
    storage: Arc<Storage>,
}

impl SqlSensorTypeRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<SensorTypeId, SensorType> for SqlSensorTypeRepository {
    async fn save(&self, sensor_type: SensorType) -> Result<SensorType, RepositoryError> {
        let row = SensorTypeRow::from(&sensor_type);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query("INSERT INTO sensor_types (id, description, unit) VALUES ($1, $2, $3)")
            .bind(&row.id)
            .bind(&row.description)
            .bind(&row.unit)
            .execute(&mut *transaction)
            .await
            .map_err(|e| insert_error("Sensor type", &row.id, e))?;

        transaction.commit().await?;

        Ok(sensor_type)
    }

    async fn find_all(&self) -> Result<Vec<SensorType>, RepositoryError> {
        let rows: Vec<SensorTypeRow> = sqlx::query_as("SELECT * FROM sensor_types ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        restore_all("Sensor type", rows)
    }

    async fn of_identity(&self, id: &SensorTypeId) -> Result<Option<SensorType>, RepositoryError> {
        let row: Option<SensorTypeRow> =
            sqlx::query_as("SELECT * FROM sensor_types WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(self.storage.get_pool())
                .await?;

        row.map(|row| restore_one("Sensor type", row)).transpose()
    }
}

impl SensorTypeRepository for SqlSensorTypeRepository {}

pub struct SqlActuatorTypeRepository {
    storage: Arc<Storage>,
}

impl SqlActuatorTypeRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<ActuatorTypeId, ActuatorType> for SqlActuatorTypeRepository {
    async fn save(&self, actuator_type: ActuatorType) -> Result<ActuatorType, RepositoryError> {
        let row = ActuatorTypeRow::from(&actuator_type);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query("INSERT INTO actuator_types (id, description, unit) VALUES ($1, $2, $3)")
            .bind(&row.id)
            .bind(&row.description)
            .bind(&row.unit)
            .execute(&mut *transaction)
            .await
            .map_err(|e| insert_error("Actuator type", &row.id, e))?;

        transaction.commit().await?;

        Ok(actuator_type)
    }

    async fn find_all(&self) -> Result<Vec<ActuatorType>, RepositoryError> {
        let rows: Vec<ActuatorTypeRow> =
            sqlx::query_as("SELECT * FROM actuator_types ORDER BY id")
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all("Actuator type", rows)
    }

    async fn of_identity(
        &self,
        id: &ActuatorTypeId,
    ) -> Result<Option<ActuatorType>, RepositoryError> {
        let row: Option<ActuatorTypeRow> =
            sqlx::query_as("SELECT * FROM actuator_types WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(self.storage.get_pool())
                .await?;

        row.map(|row| restore_one("Actuator type", row)).transpose()
    }
}

impl ActuatorTypeRepository for SqlActuatorTypeRepository {}

pub struct SqlSensorModelRepository {
    storage: Arc<Storage>,
}

impl SqlSensorModelRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<SensorModelKind, SensorModel> for SqlSensorModelRepository {
    async fn save(&self, model: SensorModel) -> Result<SensorModel, RepositoryError> {
        let row = SensorModelRow::from(&model);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query("INSERT INTO sensor_models (id, sensor_type_id) VALUES ($1, $2)")
            .bind(&row.id)
            .bind(&row.sensor_type_id)
            .execute(&mut *transaction)
            .await
            .map_err(|e| insert_error("Sensor model", &row.id, e))?;

        transaction.commit().await?;

        Ok(model)
    }

    async fn find_all(&self) -> Result<Vec<SensorModel>, RepositoryError> {
        let rows: Vec<SensorModelRow> = sqlx::query_as("SELECT * FROM sensor_models ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        restore_all("Sensor model", rows)
    }

    async fn of_identity(
        &self,
        id: &SensorModelKind,
    ) -> Result<Option<SensorModel>, RepositoryError> {
        let row: Option<SensorModelRow> =
            sqlx::query_as("SELECT * FROM sensor_models WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(self.storage.get_pool())
                .await?;

        row.map(|row| restore_one("Sensor model", row)).transpose()
    }
}

#[async_trait]
impl SensorModelRepository for SqlSensorModelRepository {
    async fn find_by_sensor_type(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>, RepositoryError> {
        let rows: Vec<SensorModelRow> =
            sqlx::query_as("SELECT * FROM sensor_models WHERE sensor_type_id = $1 ORDER BY id")
                .bind(sensor_type_id.as_str())
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all("Sensor model", rows)
    }
}

pub struct SqlActuatorModelRepository {
    storage: Arc<Storage>,
}

impl SqlActuatorModelRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<ActuatorModelKind, ActuatorModel> for SqlActuatorModelRepository {
    async fn save(&self, model: ActuatorModel) -> Result<ActuatorModel, RepositoryError> {
        let row = ActuatorModelRow::from(&model);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query("INSERT INTO actuator_models (id, actuator_type_id) VALUES ($1, $2)")
            .bind(&row.id)
            .bind(&row.actuator_type_id)
            .execute(&mut *transaction)
            .await
            .map_err(|e| insert_error("Actuator model", &row.id, e))?;

        transaction.commit().await?;

        Ok(model)
    }

    async fn find_all(&self) -> Result<Vec<ActuatorModel>, RepositoryError> {
        let rows: Vec<ActuatorModelRow> =
            sqlx::query_as("SELECT * FROM actuator_models ORDER BY id")
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all("Actuator model", rows)
    }

    async fn of_identity(
        &self,
        id: &ActuatorModelKind,
    ) -> Result<Option<ActuatorModel>, RepositoryError> {
        let row: Option<ActuatorModelRow> =
            sqlx::query_as("SELECT * FROM actuator_models WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(self.storage.get_pool())
                .await?;

        row.map(|row| restore_one("Actuator model", row)).transpose()
    }
}

#[async_trait]
impl ActuatorModelRepository for SqlActuatorModelRepository {
    async fn find_by_actuator_type(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>, RepositoryError> {
        let rows: Vec<ActuatorModelRow> = sqlx::query_as(
            "SELECT * FROM actuator_models WHERE actuator_type_id = $1 ORDER BY id",
        )
        .bind(actuator_type_id.as_str())
        .fetch_all(self.storage.get_pool())
        .await?;

        restore_all("Actuator model", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_catalog, setup_test_db};

    #[tokio::test]
    async fn test_models_by_type() {
        let storage = setup_test_db().await;
        create_test_catalog(storage.clone()).await;

        let sensor_models = SqlSensorModelRepository::new(storage.clone());
        let temperature = sensor_models
            .find_by_sensor_type(&SensorTypeId::new("temperature").unwrap())
            .await
            .unwrap();
        assert_eq!(temperature.len(), 2);

        let actuator_models = SqlActuatorModelRepository::new(storage.clone());
        let blinds = actuator_models
            .find_by_actuator_type(&ActuatorTypeId::new("blind").unwrap())
            .await
            .unwrap();
        assert_eq!(blinds.len(), 1);

        let sensor_types = SqlSensorTypeRepository::new(storage);
        assert!(matches!(
            sensor_types
                .save(SensorType::new(
                    SensorTypeId::new("temperature").unwrap(),
                    crate::domain::values::Description::new("Temperature").unwrap(),
                    crate::domain::values::Unit::new("C").unwrap(),
                ))
                .await,
            Err(RepositoryError::Conflict { .. })
        ));
    }
}
