use std::sync::Arc;

use async_trait::async_trait;

use super::{insert_error, restore_all, restore_one};
use crate::configs::Storage;
use crate::domain::Actuator;
use crate::domain::values::{ActuatorId, DeviceId};
use crate::models::ActuatorRow;
use crate::repositories::{ActuatorRepository, Repository, RepositoryError};

const ENTITY: &str = "Actuator";

pub struct SqlActuatorRepository {
    storage: Arc<Storage>,
}

impl SqlActuatorRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<ActuatorId, Actuator> for SqlActuatorRepository {
    async fn save(&self, actuator: Actuator) -> Result<Actuator, RepositoryError> {
        let row = ActuatorRow::from(&actuator);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO actuators (id, device_id, actuator_model_id, value)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&row.id)
        .bind(&row.device_id)
        .bind(&row.actuator_model_id)
        .bind(&row.value)
        .execute(&mut *transaction)
        .await
        .map_err(|e| insert_error(ENTITY, &row.id, e))?;

        transaction.commit().await?;

        Ok(actuator)
    }

    async fn find_all(&self) -> Result<Vec<Actuator>, RepositoryError> {
        let rows: Vec<ActuatorRow> = sqlx::query_as("SELECT * FROM actuators ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        restore_all(ENTITY, rows)
    }

    async fn of_identity(&self, id: &ActuatorId) -> Result<Option<Actuator>, RepositoryError> {
        let row: Option<ActuatorRow> = sqlx::query_as("SELECT * FROM actuators WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(self.storage.get_pool())
            .await?;

        row.map(|row| restore_one(ENTITY, row)).transpose()
    }
}

#[async_trait]
impl ActuatorRepository for SqlActuatorRepository {
    async fn update(&self, actuator: Actuator) -> Result<Actuator, RepositoryError> {
        let row = ActuatorRow::from(&actuator);
        let mut transaction = self.storage.get_pool().begin().await?;

        let affected = sqlx::query(
            r#"
            UPDATE actuators
            SET device_id = $1, actuator_model_id = $2, value = $3
            WHERE id = $4
            "#,
        )
        .bind(&row.device_id)
        .bind(&row.actuator_model_id)
        .bind(&row.value)
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

        Ok(actuator)
    }

    async fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Vec<Actuator>, RepositoryError> {
        let rows: Vec<ActuatorRow> =
            sqlx::query_as("SELECT * FROM actuators WHERE device_id = $1 ORDER BY id")
                .bind(device_id.as_str())
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all(ENTITY, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActuatorModelKind, ActuatorValue, AggregateRoot};
    use crate::tests::{
        create_test_catalog, create_test_device, create_test_house, create_test_room,
        setup_test_db,
    };

    #[tokio::test]
    async fn test_actuator_value_is_persisted() {
        let storage = setup_test_db().await;
        create_test_catalog(storage.clone()).await;
        let house = create_test_house(storage.clone(), "h1").await;
        let room = create_test_room(storage.clone(), &house, "bedroom", true).await;
        let device = create_test_device(storage.clone(), &room, "Blind").await;

        let repository = SqlActuatorRepository::new(storage);
        let mut actuator = repository
            .save(Actuator::new(
                ActuatorId::new("a1").unwrap(),
                device.identity().clone(),
                ActuatorModelKind::Opncl0100,
            ))
            .await
            .unwrap();

        actuator.set_value(ActuatorValue::Position(75)).unwrap();
        repository.update(actuator).await.unwrap();

        let stored = repository.find_by_device(device.identity()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].value(), Some(&ActuatorValue::Position(75)));
    }
}
