use std::fmt;

use crate::domain::DomainError;

macro_rules! text {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::Blank($label));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text!(
    /// What a sensor or actuator type measures or drives.
    Description,
    "Description"
);
text!(Unit, "Unit");
text!(DeviceName, "Device name");
text!(DeviceModel, "Device model");
text!(RoomName, "Room name");
text!(Address, "Address");
text!(
    /// Raw value emitted by a sensor.
    Reading,
    "Reading"
);

impl Reading {
    /// Numeric view of the reading, if it holds a finite number.
    pub fn as_number(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|value| value.is_finite())
    }
}
