use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ActuatorError {
    #[error("Actuator not found")]
    ActuatorNotFound,

    #[error("Actuator already exists")]
    ActuatorExists,

    #[error("Actuator is not a roller blind")]
    NotRollerBlind,

    #[error("Sensor is not a roller blind position sensor")]
    NotPositionSensor,

    #[error("Actuator and sensor are not on the same device")]
    DeviceMismatch,
}

impl ActuatorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActuatorError::ActuatorNotFound => StatusCode::NOT_FOUND,
            ActuatorError::ActuatorExists => StatusCode::CONFLICT,
            ActuatorError::NotRollerBlind => StatusCode::BAD_REQUEST,
            ActuatorError::NotPositionSensor => StatusCode::BAD_REQUEST,
            ActuatorError::DeviceMismatch => StatusCode::BAD_REQUEST,
        }
    }
}
