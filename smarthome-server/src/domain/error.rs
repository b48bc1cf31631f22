/// Rejections raised while building value objects and entities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{0} cannot be empty")]
    Blank(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("Zip code {code} is not valid for {country}")]
    InvalidZipCode { country: String, code: String },

    #[error("Country {0} is not supported")]
    UnsupportedCountry(String),

    #[error("Sensor model {0} does not exist in list")]
    UnknownSensorModel(String),

    #[error("Actuator model {0} does not exist in list")]
    UnknownActuatorModel(String),

    #[error("Invalid value {value} for model {model}")]
    InvalidValue { model: &'static str, value: String },

    #[error("Value for model {given} cannot be applied to model {expected}")]
    ModelMismatch {
        expected: &'static str,
        given: &'static str,
    },
}
