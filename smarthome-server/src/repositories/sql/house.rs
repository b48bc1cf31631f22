use std::sync::Arc;

use async_trait::async_trait;

use super::{insert_error, restore_all, restore_one};
use crate::configs::Storage;
use crate::domain::House;
use crate::domain::values::HouseId;
use crate::models::HouseRow;
use crate::repositories::{HouseRepository, Repository, RepositoryError};

const ENTITY: &str = "House";

pub struct SqlHouseRepository {
    storage: Arc<Storage>,
}

impl SqlHouseRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<HouseId, House> for SqlHouseRepository {
    async fn save(&self, house: House) -> Result<House, RepositoryError> {
        let row = HouseRow::from(&house);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO houses (id, address, country, zip_code, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&row.id)
        .bind(&row.address)
        .bind(&row.country)
        .bind(&row.zip_code)
        .bind(row.latitude)
        .bind(row.longitude)
        .execute(&mut *transaction)
        .await
        .map_err(|e| insert_error(ENTITY, &row.id, e))?;

        transaction.commit().await?;

        Ok(house)
    }

    async fn find_all(&self) -> Result<Vec<House>, RepositoryError> {
        let rows: Vec<HouseRow> = sqlx::query_as("SELECT * FROM houses ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        restore_all(ENTITY, rows)
    }

    async fn of_identity(&self, id: &HouseId) -> Result<Option<House>, RepositoryError> {
        let row: Option<HouseRow> = sqlx::query_as("SELECT * FROM houses WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(self.storage.get_pool())
            .await?;

        row.map(|row| restore_one(ENTITY, row)).transpose()
    }
}

#[async_trait]
impl HouseRepository for SqlHouseRepository {
    async fn update(&self, house: House) -> Result<House, RepositoryError> {
        let row = HouseRow::from(&house);
        let mut transaction = self.storage.get_pool().begin().await?;

        let affected = sqlx::query(
            r#"
            UPDATE houses
            SET address = $1, country = $2, zip_code = $3, latitude = $4, longitude = $5
            WHERE id = $6
            "#,
        )
        .bind(&row.address)
        .bind(&row.country)
        .bind(&row.zip_code)
        .bind(row.latitude)
        .bind(row.longitude)
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

        Ok(house)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{setup_test_db, test_location};

    #[tokio::test]
    async fn test_save_and_find_house() {
        let repository = SqlHouseRepository::new(setup_test_db().await);
        let house = House::new(HouseId::new("h1").unwrap(), test_location());

        repository.save(house.clone()).await.unwrap();

        let found = repository.of_identity(&HouseId::new("h1").unwrap()).await.unwrap();
        assert!(found.is_some_and(|found| found.location() == house.location()));
        assert!(matches!(
            repository.save(house).await,
            Err(RepositoryError::Conflict { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_missing_house() {
        let repository = SqlHouseRepository::new(setup_test_db().await);
        let house = House::new(HouseId::new("ghost").unwrap(), test_location());

        assert!(matches!(
            repository.update(house).await,
            Err(RepositoryError::Missing { .. })
        ));
    }
}
