use serde::{Deserialize, Serialize};

use super::Table;
use crate::domain::values::{ActuatorId, DeviceId};
use crate::domain::{Actuator, ActuatorModelKind, ActuatorValue, AggregateRoot, DomainError};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActuatorRow {
    pub id: String,
    pub device_id: String,
    pub actuator_model_id: String,
    pub value: Option<String>,
}

impl From<&Actuator> for ActuatorRow {
    fn from(actuator: &Actuator) -> Self {
        Self {
            id: actuator.identity().to_string(),
            device_id: actuator.device_id().to_string(),
            actuator_model_id: actuator.model().to_string(),
            value: actuator.value().map(ToString::to_string),
        }
    }
}

impl TryFrom<ActuatorRow> for Actuator {
    type Error = DomainError;

    fn try_from(row: ActuatorRow) -> Result<Self, Self::Error> {
        let model: ActuatorModelKind = row.actuator_model_id.parse()?;
        let value = row
            .value
            .as_deref()
            .map(|raw| ActuatorValue::parse(model, raw))
            .transpose()?;

        Ok(Actuator::restore(
            ActuatorId::new(row.id)?,
            DeviceId::new(row.device_id)?,
            model,
            value,
        ))
    }
}

#[derive(Clone)]
pub struct ActuatorTable;

impl Table for ActuatorTable {
    fn name(&self) -> &'static str {
        "actuators"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS actuators (
                id VARCHAR(64) PRIMARY KEY,
                device_id VARCHAR(64) NOT NULL,
                actuator_model_id VARCHAR(32) NOT NULL,
                value VARCHAR(64),
                FOREIGN KEY (device_id) REFERENCES devices (id) ON DELETE CASCADE,
                FOREIGN KEY (actuator_model_id) REFERENCES actuator_models (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS actuators;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["devices", "actuator_models"]
    }
}
