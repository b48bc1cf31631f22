use std::sync::Arc;

use smarthome_api::models::CreateDeviceRequest;

use super::{identity_or_generate, on_conflict};
use crate::domain::values::{DeviceId, DeviceModel, DeviceName, HouseId, RoomId};
use crate::domain::{AggregateRoot, Device, IdGenerator};
use crate::errors::{ApiError, DeviceError, HouseError, RoomError};
use crate::repositories::{
    DeviceRepository, HouseRepository, Repositories, Repository, RepositoryError, RoomRepository,
};

pub struct DeviceService {
    houses: Arc<dyn HouseRepository>,
    rooms: Arc<dyn RoomRepository>,
    devices: Arc<dyn DeviceRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl DeviceService {
    pub fn new(repositories: &Repositories, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            houses: repositories.houses.clone(),
            rooms: repositories.rooms.clone(),
            devices: repositories.devices.clone(),
            ids,
        }
    }

    pub async fn add_device(&self, request: CreateDeviceRequest) -> Result<Device, ApiError> {
        let room_id = self.existing_room(&request.room_id).await?;
        let id: DeviceId = identity_or_generate(request.id, self.ids.as_ref())?;

        let device = Device::new(
            id,
            room_id,
            DeviceName::new(request.name)?,
            DeviceModel::new(request.model)?,
        );

        let device = self
            .devices
            .save(device)
            .await
            .map_err(on_conflict(DeviceError::DeviceExists))?;

        tracing::info!(device_id = %device.identity(), room_id = %device.room_id(), "device created");

        Ok(device)
    }

    pub async fn devices_in_room(&self, room_id: &str) -> Result<Vec<Device>, ApiError> {
        let room_id = self.existing_room(room_id).await?;

        Ok(self.devices.find_by_room(&room_id).await?)
    }

    pub async fn active_devices(&self) -> Result<Vec<Device>, ApiError> {
        Ok(self.devices.find_active().await?)
    }

    pub async fn all_devices(&self) -> Result<Vec<Device>, ApiError> {
        Ok(self.devices.find_all().await?)
    }

    pub async fn get_device(&self, id: &str) -> Result<Device, ApiError> {
        let id = DeviceId::new(id)?;

        self.devices
            .of_identity(&id)
            .await?
            .ok_or_else(|| DeviceError::DeviceNotFound.into())
    }

    /// Deactivating an inactive device leaves it unchanged.
    pub async fn deactivate_device(&self, id: &str) -> Result<Device, ApiError> {
        let mut device = self.get_device(id).await?;
        if !device.is_active() {
            return Ok(device);
        }

        device.deactivate();
        let device = self.devices.update(device).await.map_err(|e| match e {
            RepositoryError::Missing { .. } => DeviceError::DeviceNotFound.into(),
            e => ApiError::from(e),
        })?;

        tracing::info!(device_id = %device.identity(), "device deactivated");

        Ok(device)
    }

    /// Devices placed in any room of the house.
    pub async fn devices_in_house(&self, house_id: &str) -> Result<Vec<Device>, ApiError> {
        let house_id = HouseId::new(house_id)?;
        if !self.houses.contains_identity(&house_id).await? {
            return Err(HouseError::HouseNotFound.into());
        }

        let mut devices = Vec::new();
        for room in self.rooms.find_by_house(&house_id).await? {
            devices.extend(self.devices.find_by_room(room.identity()).await?);
        }

        Ok(devices)
    }

    pub async fn power_grid_meter(&self, house_id: &str) -> Result<Device, ApiError> {
        self.devices_in_house(house_id)
            .await?
            .into_iter()
            .find(Device::is_power_grid_meter)
            .ok_or_else(|| HouseError::PowerGridMeterNotFound.into())
    }

    async fn existing_room(&self, room_id: &str) -> Result<RoomId, ApiError> {
        let room_id = RoomId::new(room_id)?;

        if !self.rooms.contains_identity(&room_id).await? {
            return Err(RoomError::RoomNotFound.into());
        }

        Ok(room_id)
    }
}
