use serde::{Deserialize, Serialize};

use super::Table;
use crate::domain::values::{ActuatorTypeId, Description, SensorTypeId, Unit};
use crate::domain::{
    ActuatorModel, ActuatorType, AggregateRoot, DomainError, SensorModel, SensorType,
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorTypeRow {
    pub id: String,
    pub description: String,
    pub unit: String,
}

impl From<&SensorType> for SensorTypeRow {
    fn from(sensor_type: &SensorType) -> Self {
        Self {
            id: sensor_type.identity().to_string(),
            description: sensor_type.description().to_string(),
            unit: sensor_type.unit().to_string(),
        }
    }
}

impl TryFrom<SensorTypeRow> for SensorType {
    type Error = DomainError;

    fn try_from(row: SensorTypeRow) -> Result<Self, Self::Error> {
        Ok(SensorType::new(
            SensorTypeId::new(row.id)?,
            Description::new(row.description)?,
            Unit::new(row.unit)?,
        ))
    }
}

#[derive(Clone)]
pub struct SensorTypeTable;

impl Table for SensorTypeTable {
    fn name(&self) -> &'static str {
        "sensor_types"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensor_types (
                id VARCHAR(64) PRIMARY KEY,
                description VARCHAR(255) NOT NULL,
                unit VARCHAR(32) NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensor_types;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActuatorTypeRow {
    pub id: String,
    pub description: String,
    pub unit: String,
}

impl From<&ActuatorType> for ActuatorTypeRow {
    fn from(actuator_type: &ActuatorType) -> Self {
        Self {
            id: actuator_type.identity().to_string(),
            description: actuator_type.description().to_string(),
            unit: actuator_type.unit().to_string(),
        }
    }
}

impl TryFrom<ActuatorTypeRow> for ActuatorType {
    type Error = DomainError;

    fn try_from(row: ActuatorTypeRow) -> Result<Self, Self::Error> {
        Ok(ActuatorType::new(
            ActuatorTypeId::new(row.id)?,
            Description::new(row.description)?,
            Unit::new(row.unit)?,
        ))
    }
}

#[derive(Clone)]
pub struct ActuatorTypeTable;

impl Table for ActuatorTypeTable {
    fn name(&self) -> &'static str {
        "actuator_types"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS actuator_types (
                id VARCHAR(64) PRIMARY KEY,
                description VARCHAR(255) NOT NULL,
                unit VARCHAR(32) NOT NULL
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS actuator_types;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SensorModelRow {
    pub id: String,
    pub sensor_type_id: String,
}

impl From<&SensorModel> for SensorModelRow {
    fn from(model: &SensorModel) -> Self {
        Self {
            id: model.identity().to_string(),
            sensor_type_id: model.sensor_type_id().to_string(),
        }
    }
}

impl TryFrom<SensorModelRow> for SensorModel {
    type Error = DomainError;

    fn try_from(row: SensorModelRow) -> Result<Self, Self::Error> {
        Ok(SensorModel::new(
            row.id.parse()?,
            SensorTypeId::new(row.sensor_type_id)?,
        ))
    }
}

#[derive(Clone)]
pub struct SensorModelTable;

impl Table for SensorModelTable {
    fn name(&self) -> &'static str {
        "sensor_models"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sensor_models (
                id VARCHAR(32) PRIMARY KEY,
                sensor_type_id VARCHAR(64) NOT NULL,
                FOREIGN KEY (sensor_type_id) REFERENCES sensor_types (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sensor_models;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["sensor_types"]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActuatorModelRow {
    pub id: String,
    pub actuator_type_id: String,
}

impl From<&ActuatorModel> for ActuatorModelRow {
    fn from(model: &ActuatorModel) -> Self {
        Self {
            id: model.identity().to_string(),
            actuator_type_id: model.actuator_type_id().to_string(),
        }
    }
}

impl TryFrom<ActuatorModelRow> for ActuatorModel {
    type Error = DomainError;

    fn try_from(row: ActuatorModelRow) -> Result<Self, Self::Error> {
        Ok(ActuatorModel::new(
            row.id.parse()?,
            ActuatorTypeId::new(row.actuator_type_id)?,
        ))
    }
}

#[derive(Clone)]
pub struct ActuatorModelTable;

impl Table for ActuatorModelTable {
    fn name(&self) -> &'static str {
        "actuator_models"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS actuator_models (
                id VARCHAR(32) PRIMARY KEY,
                actuator_type_id VARCHAR(64) NOT NULL,
                FOREIGN KEY (actuator_type_id) REFERENCES actuator_types (id) ON DELETE CASCADE
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS actuator_models;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["actuator_types"]
    }
}
