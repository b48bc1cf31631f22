use std::f64::consts::PI;
use std::fmt;

use time::Time;
use time::macros::format_description;

use crate::domain::DomainError;
use crate::domain::catalog::{ActuatorModelKind, SensorModelKind};

/// A reading validated against the rules of the sensor model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorValue {
    /// GA100K, integer degrees Celsius
    WholeTemperature(i64),
    /// DP22C, degrees Celsius in (-273, 300)
    Temperature(f64),
    /// CAP200 and TSY01, integer percentage
    Percentage(u8),
    /// PC500W, AVPC500W, ECA300K and SR001, non-negative quantity
    NonNegative(f64),
    /// ONF01S
    Switch(bool),
    /// SUNRISE407
    TimeOfDay(Time),
    /// WS8600, speed in km/h and direction in radians
    Wind { speed: f64, direction: f64 },
}

impl SensorValue {
    pub fn parse(kind: SensorModelKind, raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidValue {
            model: kind.as_str(),
            value: raw.to_string(),
        };
        let trimmed = raw.trim();

        match kind {
            SensorModelKind::Ga100k => trimmed
                .parse::<i64>()
                .map(SensorValue::WholeTemperature)
                .map_err(|_| invalid()),
            SensorModelKind::Dp22c => {
                let value = parse_finite(trimmed).ok_or_else(invalid)?;
                if value <= -273.0 || value >= 300.0 {
                    return Err(invalid());
                }
                Ok(SensorValue::Temperature(value))
            }
            SensorModelKind::Cap200 | SensorModelKind::Tsy01 => trimmed
                .parse::<u8>()
                .ok()
                .filter(|value| *value <= 100)
                .map(SensorValue::Percentage)
                .ok_or_else(invalid),
            SensorModelKind::Pc500w
            | SensorModelKind::Avpc500w
            | SensorModelKind::Eca300k
            | SensorModelKind::Sr001 => parse_finite(trimmed)
                .filter(|value| *value >= 0.0)
                .map(SensorValue::NonNegative)
                .ok_or_else(invalid),
            SensorModelKind::Onf01s => parse_switch(trimmed)
                .map(SensorValue::Switch)
                .ok_or_else(invalid),
            SensorModelKind::Sunrise407 => parse_time_of_day(trimmed)
                .map(SensorValue::TimeOfDay)
                .ok_or_else(invalid),
            SensorModelKind::Ws8600 => {
                let (speed, direction) = trimmed.split_once(',').ok_or_else(invalid)?;
                let speed = parse_finite(speed.trim()).ok_or_else(invalid)?;
                let direction = parse_finite(direction.trim()).ok_or_else(invalid)?;
                if speed < 0.0 || !(0.0..=2.0 * PI).contains(&direction) {
                    return Err(invalid());
                }
                Ok(SensorValue::Wind { speed, direction })
            }
        }
    }

    /// Numeric magnitude used by aggregations, if the value has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SensorValue::WholeTemperature(value) => Some(*value as f64),
            SensorValue::Temperature(value) | SensorValue::NonNegative(value) => Some(*value),
            SensorValue::Percentage(value) => Some(f64::from(*value)),
            SensorValue::Wind { speed, .. } => Some(*speed),
            SensorValue::Switch(_) | SensorValue::TimeOfDay(_) => None,
        }
    }

    /// Compass direction of a wind reading, east at zero radians.
    pub fn cardinal(&self) -> Option<&'static str> {
        let SensorValue::Wind { direction, .. } = self else {
            return None;
        };

        let quarter = *direction / PI;
        let name = if quarter < 0.125 {
            "East"
        } else if quarter < 0.375 {
            "North East"
        } else if quarter < 0.625 {
            "North"
        } else if quarter < 0.875 {
            "North West"
        } else if quarter < 1.125 {
            "West"
        } else if quarter < 1.375 {
            "South West"
        } else if quarter < 1.625 {
            "South"
        } else {
            "South East"
        };
        Some(name)
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorValue::WholeTemperature(value) => write!(f, "{value}"),
            SensorValue::Temperature(value) | SensorValue::NonNegative(value) => {
                write!(f, "{value}")
            }
            SensorValue::Percentage(value) => write!(f, "{value}"),
            SensorValue::Switch(true) => f.write_str("ON"),
            SensorValue::Switch(false) => f.write_str("OFF"),
            SensorValue::TimeOfDay(time) => write_time(f, *time),
            SensorValue::Wind { speed, direction } => write!(f, "{speed},{direction}"),
        }
    }
}

/// A command validated against the rules of an actuator model.
#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorValue {
    /// ONF01A
    Switch(bool),
    /// OPNCL0100, roller blind opening percentage
    Position(u8),
    /// SIV280, integer in -50..=50
    Level(i32),
    /// SPV300, decimal in 0..=100 rounded to three places
    Setpoint(f64),
}

impl ActuatorValue {
    pub fn parse(kind: ActuatorModelKind, raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidValue {
            model: kind.as_str(),
            value: raw.to_string(),
        };
        let trimmed = raw.trim();

        match kind {
            ActuatorModelKind::Onf01a => parse_switch(trimmed)
                .map(ActuatorValue::Switch)
                .ok_or_else(invalid),
            ActuatorModelKind::Opncl0100 => trimmed
                .parse::<u8>()
                .ok()
                .filter(|value| *value <= 100)
                .map(ActuatorValue::Position)
                .ok_or_else(invalid),
            ActuatorModelKind::Siv280 => trimmed
                .parse::<i32>()
                .ok()
                .filter(|value| (-50..=50).contains(value))
                .map(ActuatorValue::Level)
                .ok_or_else(invalid),
            ActuatorModelKind::Spv300 => parse_finite(trimmed)
                .filter(|value| (0.0..=100.0).contains(value))
                .map(|value| ActuatorValue::Setpoint((value * 1000.0).round() / 1000.0))
                .ok_or_else(invalid),
        }
    }

    /// Model able to apply this value.
    pub fn kind(&self) -> ActuatorModelKind {
        match self {
            ActuatorValue::Switch(_) => ActuatorModelKind::Onf01a,
            ActuatorValue::Position(_) => ActuatorModelKind::Opncl0100,
            ActuatorValue::Level(_) => ActuatorModelKind::Siv280,
            ActuatorValue::Setpoint(_) => ActuatorModelKind::Spv300,
        }
    }
}

impl fmt::Display for ActuatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuatorValue::Switch(true) => f.write_str("ON"),
            ActuatorValue::Switch(false) => f.write_str("OFF"),
            ActuatorValue::Position(value) => write!(f, "{value}"),
            ActuatorValue::Level(value) => write!(f, "{value}"),
            ActuatorValue::Setpoint(value) => write!(f, "{value}"),
        }
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.to_ascii_uppercase().as_str() {
        "ON" => Some(true),
        "OFF" => Some(false),
        _ => None,
    }
}

fn parse_time_of_day(raw: &str) -> Option<Time> {
    Time::parse(raw, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(raw, format_description!("[hour]:[minute]")))
        .ok()
}

fn write_time(f: &mut fmt::Formatter<'_>, time: Time) -> fmt::Result {
    if time.second() == 0 {
        write!(f, "{:02}:{:02}", time.hour(), time.minute())
    } else {
        write!(f, "{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_models() {
        assert_eq!(
            SensorValue::parse(SensorModelKind::Ga100k, "21").unwrap(),
            SensorValue::WholeTemperature(21)
        );
        assert!(SensorValue::parse(SensorModelKind::Ga100k, "21.5").is_err());

        assert!(SensorValue::parse(SensorModelKind::Dp22c, "-272.9").is_ok());
        assert!(SensorValue::parse(SensorModelKind::Dp22c, "-273").is_err());
        assert!(SensorValue::parse(SensorModelKind::Dp22c, "300").is_err());
    }

    #[test]
    fn test_percentage_and_power_models() {
        assert_eq!(
            SensorValue::parse(SensorModelKind::Cap200, "100").unwrap(),
            SensorValue::Percentage(100)
        );
        assert!(SensorValue::parse(SensorModelKind::Cap200, "101").is_err());
        assert!(SensorValue::parse(SensorModelKind::Tsy01, "-1").is_err());

        assert!(SensorValue::parse(SensorModelKind::Pc500w, "0").is_ok());
        assert!(SensorValue::parse(SensorModelKind::Eca300k, "-0.1").is_err());
        assert!(SensorValue::parse(SensorModelKind::Sr001, "inf").is_err());
    }

    #[test]
    fn test_switch_is_normalized() {
        let value = SensorValue::parse(SensorModelKind::Onf01s, "on").unwrap();
        assert_eq!(value.to_string(), "ON");
        assert!(SensorValue::parse(SensorModelKind::Onf01s, "maybe").is_err());
    }

    #[test]
    fn test_sunrise_time_of_day() {
        let value = SensorValue::parse(SensorModelKind::Sunrise407, "06:30").unwrap();
        assert_eq!(value.to_string(), "06:30");

        let value = SensorValue::parse(SensorModelKind::Sunrise407, "06:30:15").unwrap();
        assert_eq!(value.to_string(), "06:30:15");

        assert!(SensorValue::parse(SensorModelKind::Sunrise407, "25:00").is_err());
    }

    #[test]
    fn test_wind_direction() {
        let value = SensorValue::parse(SensorModelKind::Ws8600, "12.5, 1.5708").unwrap();
        assert_eq!(value.cardinal(), Some("North"));
        assert_eq!(value.as_number(), Some(12.5));

        assert!(SensorValue::parse(SensorModelKind::Ws8600, "-1,0").is_err());
        assert!(SensorValue::parse(SensorModelKind::Ws8600, "1,7").is_err());
        assert!(SensorValue::parse(SensorModelKind::Ws8600, "1").is_err());
    }

    #[test]
    fn test_actuator_values() {
        assert_eq!(
            ActuatorValue::parse(ActuatorModelKind::Onf01a, "off").unwrap(),
            ActuatorValue::Switch(false)
        );
        assert_eq!(
            ActuatorValue::parse(ActuatorModelKind::Opncl0100, "42").unwrap(),
            ActuatorValue::Position(42)
        );
        assert!(ActuatorValue::parse(ActuatorModelKind::Opncl0100, "142").is_err());
        assert!(ActuatorValue::parse(ActuatorModelKind::Siv280, "-50").is_ok());
        assert!(ActuatorValue::parse(ActuatorModelKind::Siv280, "51").is_err());
        assert_eq!(
            ActuatorValue::parse(ActuatorModelKind::Spv300, "12.34567").unwrap(),
            ActuatorValue::Setpoint(12.346)
        );
        assert!(ActuatorValue::parse(ActuatorModelKind::Spv300, "100.1").is_err());
    }
}
