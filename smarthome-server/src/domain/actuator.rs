use crate::domain::catalog::ActuatorModelKind;
use crate::domain::measurement::ActuatorValue;
use crate::domain::values::{ActuatorId, DeviceId};
use crate::domain::{AggregateRoot, DomainError};

#[derive(Debug, Clone)]
pub struct Actuator {
    id: ActuatorId,
    device_id: DeviceId,
    model: ActuatorModelKind,
    value: Option<ActuatorValue>,
}

impl Actuator {
    pub fn new(id: ActuatorId, device_id: DeviceId, model: ActuatorModelKind) -> Self {
        Self {
            id,
            device_id,
            model,
            value: None,
        }
    }

    pub fn restore(
        id: ActuatorId,
        device_id: DeviceId,
        model: ActuatorModelKind,
        value: Option<ActuatorValue>,
    ) -> Self {
        Self {
            id,
            device_id,
            model,
            value,
        }
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn model(&self) -> ActuatorModelKind {
        self.model
    }

    pub fn value(&self) -> Option<&ActuatorValue> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: ActuatorValue) -> Result<(), DomainError> {
        if value.kind() != self.model {
            return Err(DomainError::ModelMismatch {
                expected: self.model.as_str(),
                given: value.kind().as_str(),
            });
        }
        self.value = Some(value);
        Ok(())
    }
}

impl AggregateRoot for Actuator {
    type Id = ActuatorId;

    fn identity(&self) -> &ActuatorId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.device_id == other.device_id
            && self.model == other.model
            && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_checks_model() {
        let mut actuator = Actuator::new(
            ActuatorId::new("a1").unwrap(),
            DeviceId::new("d1").unwrap(),
            ActuatorModelKind::Opncl0100,
        );

        assert!(actuator.set_value(ActuatorValue::Position(40)).is_ok());
        assert_eq!(actuator.value(), Some(&ActuatorValue::Position(40)));

        assert_eq!(
            actuator.set_value(ActuatorValue::Switch(true)),
            Err(DomainError::ModelMismatch {
                expected: "OPNCL0100",
                given: "ONF01A",
            })
        );
        assert_eq!(actuator.value(), Some(&ActuatorValue::Position(40)));
    }
}
