pub mod actuator;
pub mod api;
pub mod catalog;
pub mod device;
pub mod house;
pub mod reading;
pub mod room;
pub mod sensor;
pub mod weather;

pub use actuator::ActuatorError;
pub use api::ApiError;
pub use catalog::CatalogError;
pub use device::DeviceError;
pub use house::HouseError;
pub use reading::ReadingError;
pub use room::RoomError;
pub use sensor::SensorError;
pub use weather::WeatherError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

use crate::repositories::RepositoryError;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::HouseError(e) => e.status_code(),
            ApiError::RoomError(e) => e.status_code(),
            ApiError::DeviceError(e) => e.status_code(),
            ApiError::SensorError(e) => e.status_code(),
            ApiError::ActuatorError(e) => e.status_code(),
            ApiError::CatalogError(e) => e.status_code(),
            ApiError::ReadingError(e) => e.status_code(),
            ApiError::WeatherError(e) => e.status_code(),
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::RepositoryError(RepositoryError::Conflict { .. }) => StatusCode::CONFLICT,
            ApiError::RepositoryError(RepositoryError::Missing { .. }) => StatusCode::NOT_FOUND,
            ApiError::RepositoryError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal failures are logged with an id and hidden from the caller
        let (error_message, error_id) = match &self {
            ApiError::RepositoryError(
                e @ (RepositoryError::Conflict { .. } | RepositoryError::Missing { .. }),
            ) => (e.to_string(), None),
            ApiError::RepositoryError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Repository error: {}", e);
                ("Internal server error".to_string(), Some(error_id.to_string()))
            }
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                ("Internal server error".to_string(), Some(error_id.to_string()))
            }
            ApiError::WeatherError(e) => {
                tracing::warn!("Weather service failure: {}", e);
                (e.to_string(), None)
            }
            ApiError::HouseError(e) => (e.to_string(), None),
            ApiError::RoomError(e) => (e.to_string(), None),
            ApiError::DeviceError(e) => (e.to_string(), None),
            ApiError::SensorError(e) => (e.to_string(), None),
            ApiError::ActuatorError(e) => (e.to_string(), None),
            ApiError::CatalogError(e) => (e.to_string(), None),
            ApiError::ReadingError(e) => (e.to_string(), None),
            ApiError::ValidationError(e) => (e.to_string(), None),
        };

        let mut error_obj = json!({
            "code": status.as_u16(),
            "message": error_message
        });

        if let Some(error_id) = error_id {
            error_obj["error_id"] = json!(error_id);
        }

        let body = Json(json!({
            "error": error_obj
        }));

        (status, body).into_response()
    }
}
