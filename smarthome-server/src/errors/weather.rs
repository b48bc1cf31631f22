use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Weather service answered with status {0}")]
    Upstream(u16),
}

impl WeatherError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_GATEWAY
    }
}
