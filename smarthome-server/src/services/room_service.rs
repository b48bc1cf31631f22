use std::sync::Arc;

use smarthome_api::models::CreateRoomRequest;

use super::{identity_or_generate, on_conflict};
use crate::domain::values::{Dimensions, FloorNumber, HouseId, RoomId, RoomName};
use crate::domain::{AggregateRoot, IdGenerator, Room};
use crate::errors::{ApiError, HouseError, RoomError};
use crate::repositories::{HouseRepository, Repositories, Repository, RoomRepository};

pub struct RoomService {
    houses: Arc<dyn HouseRepository>,
    rooms: Arc<dyn RoomRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl RoomService {
    pub fn new(repositories: &Repositories, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            houses: repositories.houses.clone(),
            rooms: repositories.rooms.clone(),
            ids,
        }
    }

    pub async fn add_room(&self, request: CreateRoomRequest) -> Result<Room, ApiError> {
        let house_id = self.existing_house(&request.house_id).await?;
        let id: RoomId = identity_or_generate(request.id, self.ids.as_ref())?;
        let dimensions = Dimensions::new(
            request.dimensions.length,
            request.dimensions.width,
            request.dimensions.height,
        )?;

        let room = Room::new(
            id,
            house_id,
            RoomName::new(request.name)?,
            FloorNumber::new(request.floor),
            dimensions,
            request.is_inside,
        );

        let room = self
            .rooms
            .save(room)
            .await
            .map_err(on_conflict(RoomError::RoomExists))?;

        tracing::info!(room_id = %room.identity(), house_id = %room.house_id(), "room created");

        Ok(room)
    }

    pub async fn rooms_by_house(&self, house_id: &str) -> Result<Vec<Room>, ApiError> {
        let house_id = self.existing_house(house_id).await?;

        Ok(self.rooms.find_by_house(&house_id).await?)
    }

    pub async fn get_room(&self, id: &str) -> Result<Room, ApiError> {
        let id = RoomId::new(id)?;

        self.rooms
            .of_identity(&id)
            .await?
            .ok_or_else(|| RoomError::RoomNotFound.into())
    }

    pub async fn outside_rooms(&self) -> Result<Vec<Room>, ApiError> {
        Ok(self.rooms.find_outside_rooms().await?)
    }

    async fn existing_house(&self, house_id: &str) -> Result<HouseId, ApiError> {
        let house_id = HouseId::new(house_id)?;

        if !self.houses.contains_identity(&house_id).await? {
            return Err(HouseError::HouseNotFound.into());
        }

        Ok(house_id)
    }
}

#[cfg(test)]
mod tests {
    use smarthome_api::models::DimensionsData;

    use super::*;
    use crate::domain::{House, SequentialGenerator};
    use crate::tests::test_location;

    async fn setup() -> RoomService {
        let repositories = Repositories::in_memory();
        repositories
            .houses
            .save(House::new(HouseId::new("h1").unwrap(), test_location()))
            .await
            .unwrap();

        RoomService::new(&repositories, Arc::new(SequentialGenerator::new("room")))
    }

    fn request(house_id: &str, name: &str, is_inside: bool) -> CreateRoomRequest {
        CreateRoomRequest {
            id: None,
            house_id: house_id.to_string(),
            name: name.to_string(),
            floor: -1,
            dimensions: DimensionsData {
                length: 5.0,
                width: 4.0,
                height: 2.7,
            },
            is_inside,
        }
    }

    #[tokio::test]
    async fn test_add_room_and_list() {
        let service = setup().await;
        service.add_room(request("h1", "Cellar", true)).await.unwrap();
        service.add_room(request("h1", "Patio", false)).await.unwrap();

        assert_eq!(service.rooms_by_house("h1").await.unwrap().len(), 2);

        let outside = service.outside_rooms().await.unwrap();
        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].name().as_str(), "Patio");

        let room = service.get_room("room-1").await.unwrap();
        assert_eq!(room.floor().value(), -1);
    }

    #[tokio::test]
    async fn test_add_room_to_unknown_house() {
        let service = setup().await;

        assert!(matches!(
            service.add_room(request("h2", "Cellar", true)).await,
            Err(ApiError::HouseError(HouseError::HouseNotFound))
        ));
        assert!(matches!(
            service.rooms_by_house("h2").await,
            Err(ApiError::HouseError(HouseError::HouseNotFound))
        ));
    }

    #[tokio::test]
    async fn test_add_room_rejects_flat_room() {
        let service = setup().await;
        let mut request = request("h1", "Attic", true);
        request.dimensions.height = 0.0;

        assert!(matches!(
            service.add_room(request).await,
            Err(ApiError::ValidationError(_))
        ));
    }
}
