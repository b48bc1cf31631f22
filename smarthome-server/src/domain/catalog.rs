use std::fmt;
use std::str::FromStr;

use crate::domain::values::{ActuatorTypeId, Description, SensorTypeId, Unit};
use crate::domain::{AggregateRoot, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SensorModelKind {
    Avpc500w,
    Cap200,
    Dp22c,
    Eca300k,
    Ga100k,
    Onf01s,
    Pc500w,
    Sr001,
    Sunrise407,
    Tsy01,
    Ws8600,
}

impl SensorModelKind {
    pub const ALL: [SensorModelKind; 11] = [
        SensorModelKind::Avpc500w,
        SensorModelKind::Cap200,
        SensorModelKind::Dp22c,
        SensorModelKind::Eca300k,
        SensorModelKind::Ga100k,
        SensorModelKind::Onf01s,
        SensorModelKind::Pc500w,
        SensorModelKind::Sr001,
        SensorModelKind::Sunrise407,
        SensorModelKind::Tsy01,
        SensorModelKind::Ws8600,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorModelKind::Avpc500w => "AVPC500W",
            SensorModelKind::Cap200 => "CAP200",
            SensorModelKind::Dp22c => "DP22C",
            SensorModelKind::Eca300k => "ECA300K",
            SensorModelKind::Ga100k => "GA100K",
            SensorModelKind::Onf01s => "ONF01S",
            SensorModelKind::Pc500w => "PC500W",
            SensorModelKind::Sr001 => "SR001",
            SensorModelKind::Sunrise407 => "SUNRISE407",
            SensorModelKind::Tsy01 => "TSY01",
            SensorModelKind::Ws8600 => "WS8600",
        }
    }

    pub fn is_temperature(&self) -> bool {
        matches!(self, SensorModelKind::Ga100k | SensorModelKind::Dp22c)
    }

    /// Instantaneous power meter used for peak consumption.
    pub fn is_power_meter(&self) -> bool {
        matches!(self, SensorModelKind::Pc500w)
    }
}

impl FromStr for SensorModelKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| DomainError::UnknownSensorModel(value.to_string()))
    }
}

impl fmt::Display for SensorModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActuatorModelKind {
    Onf01a,
    Opncl0100,
    Siv280,
    Spv300,
}

impl ActuatorModelKind {
    pub const ALL: [ActuatorModelKind; 4] = [
        ActuatorModelKind::Onf01a,
        ActuatorModelKind::Opncl0100,
        ActuatorModelKind::Siv280,
        ActuatorModelKind::Spv300,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActuatorModelKind::Onf01a => "ONF01A",
            ActuatorModelKind::Opncl0100 => "OPNCL0100",
            ActuatorModelKind::Siv280 => "SIV280",
            ActuatorModelKind::Spv300 => "SPV300",
        }
    }
}

impl FromStr for ActuatorModelKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| DomainError::UnknownActuatorModel(value.to_string()))
    }
}

impl fmt::Display for ActuatorModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SensorType {
    id: SensorTypeId,
    description: Description,
    unit: Unit,
}

impl SensorType {
    pub fn new(id: SensorTypeId, description: Description, unit: Unit) -> Self {
        Self {
            id,
            description,
            unit,
        }
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }
}

impl AggregateRoot for SensorType {
    type Id = SensorTypeId;

    fn identity(&self) -> &SensorTypeId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.description == other.description && self.unit == other.unit
    }
}

#[derive(Debug, Clone)]
pub struct ActuatorType {
    id: ActuatorTypeId,
    description: Description,
    unit: Unit,
}

impl ActuatorType {
    pub fn new(id: ActuatorTypeId, description: Description, unit: Unit) -> Self {
        Self {
            id,
            description,
            unit,
        }
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }
}

impl AggregateRoot for ActuatorType {
    type Id = ActuatorTypeId;

    fn identity(&self) -> &ActuatorTypeId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.description == other.description && self.unit == other.unit
    }
}

/// Catalog entry binding a sensor model to the type it measures.
#[derive(Debug, Clone)]
pub struct SensorModel {
    id: SensorModelKind,
    sensor_type_id: SensorTypeId,
}

impl SensorModel {
    pub fn new(id: SensorModelKind, sensor_type_id: SensorTypeId) -> Self {
        Self { id, sensor_type_id }
    }

    pub fn sensor_type_id(&self) -> &SensorTypeId {
        &self.sensor_type_id
    }
}

impl AggregateRoot for SensorModel {
    type Id = SensorModelKind;

    fn identity(&self) -> &SensorModelKind {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.sensor_type_id == other.sensor_type_id
    }
}

#[derive(Debug, Clone)]
pub struct ActuatorModel {
    id: ActuatorModelKind,
    actuator_type_id: ActuatorTypeId,
}

impl ActuatorModel {
    pub fn new(id: ActuatorModelKind, actuator_type_id: ActuatorTypeId) -> Self {
        Self {
            id,
            actuator_type_id,
        }
    }

    pub fn actuator_type_id(&self) -> &ActuatorTypeId {
        &self.actuator_type_id
    }
}

impl AggregateRoot for ActuatorModel {
    type Id = ActuatorModelKind;

    fn identity(&self) -> &ActuatorModelKind {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.actuator_type_id == other.actuator_type_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names_round_trip() {
        for kind in SensorModelKind::ALL {
            assert_eq!(kind.as_str().parse::<SensorModelKind>(), Ok(kind));
        }
        for kind in ActuatorModelKind::ALL {
            assert_eq!(kind.as_str().parse::<ActuatorModelKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        assert_eq!(
            "XYZ1".parse::<SensorModelKind>(),
            Err(DomainError::UnknownSensorModel("XYZ1".to_string()))
        );
        assert!("ga100k".parse::<SensorModelKind>().is_err());
        assert!("OPNCL".parse::<ActuatorModelKind>().is_err());
    }

    #[test]
    fn test_temperature_models() {
        let temperature: Vec<_> = SensorModelKind::ALL
            .into_iter()
            .filter(SensorModelKind::is_temperature)
            .collect();

        assert_eq!(temperature, vec![SensorModelKind::Dp22c, SensorModelKind::Ga100k]);
    }
}
