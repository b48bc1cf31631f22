use crate::domain::AggregateRoot;
use crate::domain::values::{ActivationStatus, DeviceId, DeviceModel, DeviceName, RoomId};

/// Name identifying the device that meters the whole house.
pub const POWER_GRID_METER: &str = "Power Grid Meter";

#[derive(Debug, Clone)]
pub struct Device {
    id: DeviceId,
    room_id: RoomId,
    name: DeviceName,
    model: DeviceModel,
    status: ActivationStatus,
}

impl Device {
    /// New devices always start active.
    pub fn new(id: DeviceId, room_id: RoomId, name: DeviceName, model: DeviceModel) -> Self {
        Self {
            id,
            room_id,
            name,
            model,
            status: ActivationStatus::active(),
        }
    }

    /// Rebuilds a device from storage, whatever its status.
    pub fn restore(
        id: DeviceId,
        room_id: RoomId,
        name: DeviceName,
        model: DeviceModel,
        status: ActivationStatus,
    ) -> Self {
        Self {
            id,
            room_id,
            name,
            model,
            status,
        }
    }

    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    pub fn model(&self) -> &DeviceModel {
        &self.model
    }

    pub fn status(&self) -> ActivationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_power_grid_meter(&self) -> bool {
        self.name.as_str() == POWER_GRID_METER
    }

    pub fn deactivate(&mut self) {
        self.status = ActivationStatus::inactive();
    }
}

impl AggregateRoot for Device {
    type Id = DeviceId;

    fn identity(&self) -> &DeviceId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.room_id == other.room_id
            && self.name == other.name
            && self.model == other.model
            && self.status == other.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str) -> Device {
        Device::new(
            DeviceId::new("d1").unwrap(),
            RoomId::new("r1").unwrap(),
            DeviceName::new(name).unwrap(),
            DeviceModel::new("XPTO").unwrap(),
        )
    }

    #[test]
    fn test_new_device_is_active() {
        assert!(device("Heater").is_active());
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut device = device("Heater");
        device.deactivate();
        device.deactivate();

        assert!(!device.is_active());
    }

    #[test]
    fn test_same_as_compares_all_fields() {
        let left = device("Heater");
        let mut right = device("Heater");
        assert!(left.same_as(&right));

        right.deactivate();
        assert!(!left.same_as(&right));
        assert_eq!(left.identity(), right.identity());
    }

    #[test]
    fn test_power_grid_meter_by_name() {
        assert!(device(POWER_GRID_METER).is_power_grid_meter());
        assert!(!device("power grid meter").is_power_grid_meter());
    }
}
