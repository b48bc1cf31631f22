use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    #[error("Sensor reading not found")]
    ReadingNotFound,

    #[error("Start time must not be after end time")]
    InvalidTimePeriod,

    #[error("Interval must be greater than zero")]
    InvalidInterval,

    #[error("Delta time must not be negative")]
    InvalidDeltaTime,

    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("No temperature readings found for the given time period")]
    NoTemperatureReadings,

    #[error("No readings found within the given time period")]
    NoPairedReadings,

    #[error("Reading {0} is not numeric")]
    NonNumericReading(String),

    #[error("Indoor device must be inside and outdoor device outside")]
    PlacementMismatch,
}

impl ReadingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReadingError::ReadingNotFound => StatusCode::NOT_FOUND,
            ReadingError::InvalidTimePeriod => StatusCode::BAD_REQUEST,
            ReadingError::InvalidInterval => StatusCode::BAD_REQUEST,
            ReadingError::InvalidDeltaTime => StatusCode::BAD_REQUEST,
            ReadingError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ReadingError::NoTemperatureReadings => StatusCode::NOT_FOUND,
            ReadingError::NoPairedReadings => StatusCode::NOT_FOUND,
            ReadingError::NonNumericReading(_) => StatusCode::BAD_REQUEST,
            ReadingError::PlacementMismatch => StatusCode::BAD_REQUEST,
        }
    }
}
