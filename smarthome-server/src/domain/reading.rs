use time::{Duration, OffsetDateTime};

use crate::domain::AggregateRoot;
use crate::domain::values::{DeviceId, Reading, SensorId, SensorReadingId};

#[derive(Debug, Clone)]
pub struct SensorReading {
    id: SensorReadingId,
    device_id: DeviceId,
    sensor_id: SensorId,
    reading: Reading,
    timestamp: OffsetDateTime,
}

/// Drops everything below the millisecond, rounding toward the past.
pub fn truncate_to_millis(at: OffsetDateTime) -> OffsetDateTime {
    at - Duration::nanoseconds(i64::from(at.nanosecond() % 1_000_000))
}

impl SensorReading {
    /// Timestamps keep millisecond precision so every backend stores the same instant.
    pub fn new(
        id: SensorReadingId,
        device_id: DeviceId,
        sensor_id: SensorId,
        reading: Reading,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            device_id,
            sensor_id,
            reading,
            timestamp: truncate_to_millis(timestamp),
        }
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn sensor_id(&self) -> &SensorId {
        &self.sensor_id
    }

    pub fn reading(&self) -> &Reading {
        &self.reading
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Whether the reading lies within `[start, end]`.
    pub fn within(&self, start: OffsetDateTime, end: OffsetDateTime) -> bool {
        self.timestamp >= start && self.timestamp <= end
    }
}

impl AggregateRoot for SensorReading {
    type Id = SensorReadingId;

    fn identity(&self) -> &SensorReadingId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.device_id == other.device_id
            && self.sensor_id == other.sensor_id
            && self.reading == other.reading
            && self.timestamp == other.timestamp
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn reading_at(at: OffsetDateTime) -> SensorReading {
        SensorReading::new(
            SensorReadingId::new("r1").unwrap(),
            DeviceId::new("d1").unwrap(),
            SensorId::new("s1").unwrap(),
            Reading::new("20").unwrap(),
            at,
        )
    }

    #[test]
    fn test_timestamp_truncated_to_millis() {
        let reading = reading_at(datetime!(2024-03-01 10:00:00.0005 UTC));
        assert_eq!(reading.timestamp(), datetime!(2024-03-01 10:00:00 UTC));

        let reading = reading_at(datetime!(1969-12-31 23:59:59.9995 UTC));
        assert_eq!(reading.timestamp(), datetime!(1969-12-31 23:59:59.999 UTC));
    }

    #[test]
    fn test_within_sub_millisecond_bounds() {
        let reading = reading_at(datetime!(2024-03-01 10:00:00.0005 UTC));

        assert!(!reading.within(
            datetime!(2024-03-01 10:00:00.0009 UTC),
            datetime!(2024-03-01 11:00 UTC)
        ));
        assert!(reading.within(
            datetime!(2024-03-01 10:00 UTC),
            datetime!(2024-03-01 10:00:00.0001 UTC)
        ));
    }
}
