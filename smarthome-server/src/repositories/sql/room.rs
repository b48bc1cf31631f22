use std::sync::Arc;

use async_trait::async_trait;

use super::{insert_error, restore_all, restore_one};
use crate::configs::Storage;
use crate::domain::Room;
use crate::domain::values::{HouseId, RoomId};
use crate::models::RoomRow;
use crate::repositories::{Repository, RepositoryError, RoomRepository};

const ENTITY: &str = "Room";

pub struct SqlRoomRepository {
    storage: Arc<Storage>,
}

impl SqlRoomRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl Repository<RoomId, Room> for SqlRoomRepository {
    async fn save(&self, room: Room) -> Result<Room, RepositoryError> {
        let row = RoomRow::from(&room);
        let mut transaction = self.storage.get_pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO rooms (id, house_id, name, floor, length, width, height, is_inside)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&row.id)
        .bind(&row.house_id)
        .bind(&row.name)
        .bind(row.floor)
        .bind(row.length)
        .bind(row.width)
        .bind(row.height)
        .bind(row.is_inside)
        .execute(&mut *transaction)
        .await
        .map_err(|e| insert_error(ENTITY, &row.id, e))?;

        transaction.commit().await?;

        Ok(room)
    }

    async fn find_all(&self) -> Result<Vec<Room>, RepositoryError> {
        let rows: Vec<RoomRow> = sqlx::query_as("SELECT * FROM rooms ORDER BY id")
            .fetch_all(self.storage.get_pool())
            .await?;

        restore_all(ENTITY, rows)
    }

    async fn of_identity(&self, id: &RoomId) -> Result<Option<Room>, RepositoryError> {
        let row: Option<RoomRow> = sqlx::query_as("SELECT * FROM rooms WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(self.storage.get_pool())
            .await?;

        row.map(|row| restore_one(ENTITY, row)).transpose()
    }
}

#[async_trait]
impl RoomRepository for SqlRoomRepository {
    async fn find_by_house(&self, house_id: &HouseId) -> Result<Vec<Room>, RepositoryError> {
        let rows: Vec<RoomRow> =
            sqlx::query_as("SELECT * FROM rooms WHERE house_id = $1 ORDER BY id")
                .bind(house_id.as_str())
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all(ENTITY, rows)
    }

    async fn find_outside_rooms(&self) -> Result<Vec<Room>, RepositoryError> {
        let rows: Vec<RoomRow> =
            sqlx::query_as("SELECT * FROM rooms WHERE is_inside = FALSE ORDER BY id")
                .fetch_all(self.storage.get_pool())
                .await?;

        restore_all(ENTITY, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_house, create_test_room, setup_test_db};

    #[tokio::test]
    async fn test_find_rooms_by_house_and_outside() {
        let storage = setup_test_db().await;
        let house = create_test_house(storage.clone(), "h1").await;
        create_test_room(storage.clone(), &house, "kitchen", true).await;
        create_test_room(storage.clone(), &house, "garden", false).await;

        let repository = SqlRoomRepository::new(storage);

        let rooms = repository.find_by_house(&HouseId::new("h1").unwrap()).await.unwrap();
        assert_eq!(rooms.len(), 2);

        let outside = repository.find_outside_rooms().await.unwrap();
        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].name().as_str(), "garden");
    }
}
