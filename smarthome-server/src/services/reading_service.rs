use std::sync::Arc;

use smarthome_api::models::CreateSensorReadingRequest;
use time::{Duration, OffsetDateTime};

use super::DeviceService;
use crate::domain::analysis::{self, Sample};
use crate::domain::reading::truncate_to_millis;
use crate::domain::values::{DeviceId, Reading, RoomId, SensorId, SensorReadingId};
use crate::domain::{AggregateRoot, Device, IdGenerator, SensorReading};
use crate::errors::{ApiError, DeviceError, ReadingError, RoomError, SensorError};
use crate::repositories::{
    DeviceRepository, Repositories, Repository, RoomRepository, SensorReadingRepository,
    SensorRepository,
};

pub struct ReadingService {
    rooms: Arc<dyn RoomRepository>,
    devices: Arc<dyn DeviceRepository>,
    sensors: Arc<dyn SensorRepository>,
    readings: Arc<dyn SensorReadingRepository>,
    device_service: Arc<DeviceService>,
    ids: Arc<dyn IdGenerator>,
}

impl ReadingService {
    pub fn new(
        repositories: &Repositories,
        device_service: Arc<DeviceService>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            rooms: repositories.rooms.clone(),
            devices: repositories.devices.clone(),
            sensors: repositories.sensors.clone(),
            readings: repositories.readings.clone(),
            device_service,
            ids,
        }
    }

    pub async fn add_reading(
        &self,
        request: CreateSensorReadingRequest,
    ) -> Result<SensorReading, ApiError> {
        let device = self.existing_device(&request.device_id).await?;
        let sensor = self
            .sensors
            .of_identity(&SensorId::new(request.sensor_id.as_str())?)
            .await?
            .ok_or(SensorError::SensorNotFound)?;
        if sensor.device_id() != device.identity() {
            return Err(SensorError::SensorNotInDevice.into());
        }

        let value = sensor.measure(&request.value)?;
        let reading = SensorReading::new(
            SensorReadingId::new(self.ids.generate())?,
            device.identity().clone(),
            sensor.identity().clone(),
            Reading::new(value.to_string())?,
            request.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
        );

        let reading = self.readings.save(reading).await?;

        tracing::debug!(
            reading_id = %reading.identity(),
            sensor_id = %reading.sensor_id(),
            value = %reading.reading(),
            "sensor reading recorded"
        );

        Ok(reading)
    }

    pub async fn get_reading(&self, id: &str) -> Result<SensorReading, ApiError> {
        self.readings
            .of_identity(&SensorReadingId::new(id)?)
            .await?
            .ok_or_else(|| ReadingError::ReadingNotFound.into())
    }

    /// Whether `sensor_id` already has a reading at exactly `timestamp`.
    pub async fn contains_reading(
        &self,
        sensor_id: &str,
        timestamp: OffsetDateTime,
    ) -> Result<bool, ApiError> {
        let timestamp = truncate_to_millis(timestamp);
        let readings = self
            .readings
            .find_by_sensor_within_period(&SensorId::new(sensor_id)?, timestamp, timestamp)
            .await?;

        Ok(!readings.is_empty())
    }

    pub async fn readings_by_device(&self, device_id: &str) -> Result<Vec<SensorReading>, ApiError> {
        let device = self.existing_device(device_id).await?;

        Ok(self.readings.find_by_device(device.identity()).await?)
    }

    pub async fn readings_within_period(
        &self,
        device_id: &str,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, ApiError> {
        validate_period(start, end)?;
        let device = self.existing_device(device_id).await?;

        Ok(self
            .readings
            .find_by_device_within_period(device.identity(), start, end)
            .await?)
    }

    /// Readings of the device's temperature sensors within `[start, end]`.
    pub async fn temperature_readings(
        &self,
        device_id: &str,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, ApiError> {
        validate_period(start, end)?;
        let device = self.existing_device(device_id).await?;

        self.temperature_readings_of(&device, start, end).await
    }

    /// Largest absolute difference between an indoor and an outdoor
    /// temperature taken at most `delta_minutes` apart.
    pub async fn max_temperature_difference(
        &self,
        indoor_id: &str,
        outdoor_id: &str,
        delta_minutes: i64,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<f64, ApiError> {
        if delta_minutes < 0 {
            return Err(ReadingError::InvalidDeltaTime.into());
        }
        validate_period(start, end)?;

        let indoor = self.existing_device(indoor_id).await?;
        let outdoor = self.existing_device(outdoor_id).await?;
        if !self.is_inside(indoor.room_id()).await? || self.is_inside(outdoor.room_id()).await? {
            return Err(ReadingError::PlacementMismatch.into());
        }

        let inside = samples(self.temperature_readings_of(&indoor, start, end).await?)?;
        let outside = samples(self.temperature_readings_of(&outdoor, start, end).await?)?;

        let difference = analysis::max_difference(&inside, &outside, delta_minutes)
            .ok_or(ReadingError::NoPairedReadings)?;

        tracing::debug!(
            indoor = %indoor.identity(),
            outdoor = %outdoor.identity(),
            delta_minutes,
            difference,
            "temperature difference computed"
        );

        Ok(difference)
    }

    /// Peak of the summed per-interval average consumption of every power
    /// meter sensor in the house.
    pub async fn house_peak_power(
        &self,
        house_id: &str,
        start: OffsetDateTime,
        end: OffsetDateTime,
        interval_minutes: i64,
    ) -> Result<f64, ApiError> {
        let interval = interval_minutes
            .checked_mul(60)
            .filter(|seconds| *seconds > 0)
            .map(Duration::seconds)
            .ok_or(ReadingError::InvalidInterval)?;
        validate_period(start, end)?;

        self.device_service.power_grid_meter(house_id).await?;

        let mut sources = Vec::new();
        for device in self.device_service.devices_in_house(house_id).await? {
            for sensor in self.sensors.find_by_device(device.identity()).await? {
                if !sensor.model().is_power_meter() {
                    continue;
                }

                let readings = self
                    .readings
                    .find_by_sensor_within_period(sensor.identity(), start, end)
                    .await?;
                sources.push(samples(readings)?);
            }
        }

        let peak = analysis::peak_interval_load(&sources, start, end, interval);

        tracing::debug!(house_id, sources = sources.len(), peak, "peak power computed");

        Ok(peak)
    }

    async fn temperature_readings_of(
        &self,
        device: &Device,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<SensorReading>, ApiError> {
        let mut readings = Vec::new();
        for sensor in self.sensors.find_by_device(device.identity()).await? {
            if sensor.is_temperature() {
                readings.extend(
                    self.readings
                        .find_by_sensor_within_period(sensor.identity(), start, end)
                        .await?,
                );
            }
        }

        if readings.is_empty() {
            return Err(ReadingError::NoTemperatureReadings.into());
        }

        readings.sort_by_key(SensorReading::timestamp);
        Ok(readings)
    }

    async fn existing_device(&self, device_id: &str) -> Result<Device, ApiError> {
        self.devices
            .of_identity(&DeviceId::new(device_id)?)
            .await?
            .ok_or_else(|| DeviceError::DeviceNotFound.into())
    }

    async fn is_inside(&self, room_id: &RoomId) -> Result<bool, ApiError> {
        let room = self
            .rooms
            .of_identity(room_id)
            .await?
            .ok_or(RoomError::RoomNotFound)?;

        Ok(room.is_inside())
    }
}

fn validate_period(start: OffsetDateTime, end: OffsetDateTime) -> Result<(), ReadingError> {
    if start > end {
        return Err(ReadingError::InvalidTimePeriod);
    }
    Ok(())
}

fn samples(readings: Vec<SensorReading>) -> Result<Vec<Sample>, ReadingError> {
    readings
        .into_iter()
        .map(|reading| {
            reading
                .reading()
                .as_number()
                .map(|value| Sample::new(reading.timestamp(), value))
                .ok_or_else(|| ReadingError::NonNumericReading(reading.reading().to_string()))
        })
        .collect()
}
