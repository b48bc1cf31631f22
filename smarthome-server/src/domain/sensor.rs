use crate::domain::catalog::SensorModelKind;
use crate::domain::measurement::SensorValue;
use crate::domain::values::{DeviceId, SensorId};
use crate::domain::{AggregateRoot, DomainError};

#[derive(Debug, Clone)]
pub struct Sensor {
    id: SensorId,
    device_id: DeviceId,
    model: SensorModelKind,
}

impl Sensor {
    pub fn new(id: SensorId, device_id: DeviceId, model: SensorModelKind) -> Self {
        Self {
            id,
            device_id,
            model,
        }
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn model(&self) -> SensorModelKind {
        self.model
    }

    pub fn is_temperature(&self) -> bool {
        self.model.is_temperature()
    }

    /// Validates a raw value against this sensor's model.
    pub fn measure(&self, raw: &str) -> Result<SensorValue, DomainError> {
        SensorValue::parse(self.model, raw)
    }
}

impl AggregateRoot for Sensor {
    type Id = SensorId;

    fn identity(&self) -> &SensorId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.device_id == other.device_id && self.model == other.model
    }
}
