use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum HouseError {
    #[error("House not found")]
    HouseNotFound,

    #[error("House already exists")]
    HouseExists,

    #[error("No power grid meter found in the house")]
    PowerGridMeterNotFound,
}

impl HouseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HouseError::HouseNotFound => StatusCode::NOT_FOUND,
            HouseError::HouseExists => StatusCode::CONFLICT,
            HouseError::PowerGridMeterNotFound => StatusCode::NOT_FOUND,
        }
    }
}
