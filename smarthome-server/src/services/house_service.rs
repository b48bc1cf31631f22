use std::sync::Arc;

use smarthome_api::models::{CreateHouseRequest, LocationData};

use super::{identity_or_generate, on_conflict};
use crate::domain::values::{
    Address, GpsCoordinates, HouseId, Latitude, Location, Longitude, ZipCode,
};
use crate::domain::{AggregateRoot, DomainError, House, IdGenerator};
use crate::errors::{ApiError, HouseError};
use crate::repositories::{HouseRepository, Repositories, Repository, RepositoryError};

pub struct HouseService {
    houses: Arc<dyn HouseRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl HouseService {
    pub fn new(repositories: &Repositories, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            houses: repositories.houses.clone(),
            ids,
        }
    }

    pub async fn add_house(&self, request: CreateHouseRequest) -> Result<House, ApiError> {
        let id: HouseId = identity_or_generate(request.id, self.ids.as_ref())?;
        let location = parse_location(&request.location)?;

        let house = self
            .houses
            .save(House::new(id, location))
            .await
            .map_err(on_conflict(HouseError::HouseExists))?;

        tracing::info!(house_id = %house.identity(), "house created");

        Ok(house)
    }

    pub async fn configure_location(
        &self,
        id: &str,
        location: LocationData,
    ) -> Result<House, ApiError> {
        let mut house = self.get_house(id).await?;
        house.configure_location(parse_location(&location)?);

        let house = self.houses.update(house).await.map_err(|e| match e {
            RepositoryError::Missing { .. } => HouseError::HouseNotFound.into(),
            e => ApiError::from(e),
        })?;

        tracing::info!(house_id = %house.identity(), "house location configured");

        Ok(house)
    }

    pub async fn list_houses(&self) -> Result<Vec<House>, ApiError> {
        Ok(self.houses.find_all().await?)
    }

    pub async fn get_house(&self, id: &str) -> Result<House, ApiError> {
        let id = HouseId::new(id)?;

        self.houses
            .of_identity(&id)
            .await?
            .ok_or_else(|| HouseError::HouseNotFound.into())
    }
}

pub(crate) fn parse_location(data: &LocationData) -> Result<Location, DomainError> {
    Ok(Location::new(
        Address::new(data.address.as_str())?,
        ZipCode::new(&data.country, data.zip_code.as_str())?,
        GpsCoordinates::new(Latitude::new(data.latitude)?, Longitude::new(data.longitude)?),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SequentialGenerator;

    fn service() -> HouseService {
        HouseService::new(
            &Repositories::in_memory(),
            Arc::new(SequentialGenerator::new("house")),
        )
    }

    fn location(zip_code: &str) -> LocationData {
        LocationData {
            address: "Rua do Ouro 10".to_string(),
            country: "Portugal".to_string(),
            zip_code: zip_code.to_string(),
            latitude: 38.71,
            longitude: -9.14,
        }
    }

    #[tokio::test]
    async fn test_add_house_generates_identity() {
        let service = service();
        let house = service
            .add_house(CreateHouseRequest {
                id: None,
                location: location("1100-001"),
            })
            .await
            .unwrap();

        assert_eq!(house.identity().as_str(), "house-1");
        assert_eq!(service.list_houses().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_house_rejects_bad_zip_code() {
        let result = service()
            .add_house(CreateHouseRequest {
                id: None,
                location: location("11000"),
            })
            .await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_duplicate_house() {
        let service = service();
        let request = CreateHouseRequest {
            id: Some("home".to_string()),
            location: location("1100-001"),
        };
        service.add_house(request.clone()).await.unwrap();

        assert!(matches!(
            service.add_house(request).await,
            Err(ApiError::HouseError(HouseError::HouseExists))
        ));
    }

    #[tokio::test]
    async fn test_configure_location() {
        let service = service();
        let house = service
            .add_house(CreateHouseRequest {
                id: None,
                location: location("1100-001"),
            })
            .await
            .unwrap();

        let updated = service
            .configure_location(house.identity().as_str(), location("4000-123"))
            .await
            .unwrap();
        assert_eq!(updated.location().zip_code().code(), "4000-123");

        assert!(matches!(
            service.configure_location("nowhere", location("4000-123")).await,
            Err(ApiError::HouseError(HouseError::HouseNotFound))
        ));
    }
}
