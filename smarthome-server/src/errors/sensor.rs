use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("Sensor not found")]
    SensorNotFound,

    #[error("Sensor already exists")]
    SensorExists,

    #[error("Sensor does not belong to the device")]
    SensorNotInDevice,
}

impl SensorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SensorError::SensorNotFound => StatusCode::NOT_FOUND,
            SensorError::SensorExists => StatusCode::CONFLICT,
            SensorError::SensorNotInDevice => StatusCode::BAD_REQUEST,
        }
    }
}
