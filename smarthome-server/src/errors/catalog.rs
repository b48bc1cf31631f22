use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Sensor type not found")]
    SensorTypeNotFound,

    #[error("Sensor type already exists")]
    SensorTypeExists,

    #[error("Actuator type not found")]
    ActuatorTypeNotFound,

    #[error("Actuator type already exists")]
    ActuatorTypeExists,

    #[error("Sensor model not found")]
    SensorModelNotFound,

    #[error("Sensor model already exists")]
    SensorModelExists,

    #[error("Actuator model not found")]
    ActuatorModelNotFound,

    #[error("Actuator model already exists")]
    ActuatorModelExists,
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::SensorTypeNotFound
            | CatalogError::ActuatorTypeNotFound
            | CatalogError::SensorModelNotFound
            | CatalogError::ActuatorModelNotFound => StatusCode::NOT_FOUND,
            CatalogError::SensorTypeExists
            | CatalogError::ActuatorTypeExists
            | CatalogError::SensorModelExists
            | CatalogError::ActuatorModelExists => StatusCode::CONFLICT,
        }
    }
}
