mod actuator;
mod catalog;
mod device;
mod house;
mod reading;
mod room;
mod sensor;

pub use actuator::SqlActuatorRepository;
pub use catalog::{
    SqlActuatorModelRepository, SqlActuatorTypeRepository, SqlSensorModelRepository,
    SqlSensorTypeRepository,
};
pub use device::SqlDeviceRepository;
pub use house::SqlHouseRepository;
pub use reading::SqlSensorReadingRepository;
pub use room::SqlRoomRepository;
pub use sensor::SqlSensorRepository;

use super::RepositoryError;
use crate::domain::DomainError;

/// Maps a failed insert, turning primary key collisions into conflicts.
fn insert_error(entity: &'static str, id: &str, error: sqlx::Error) -> RepositoryError {
    match error.as_database_error() {
        Some(database) if database.is_unique_violation() => RepositoryError::Conflict {
            entity,
            id: id.to_string(),
        },
        _ => RepositoryError::Database(error),
    }
}

fn restore_one<R, E>(entity: &'static str, row: R) -> Result<E, RepositoryError>
where
    E: TryFrom<R, Error = DomainError>,
{
    E::try_from(row).map_err(|source| RepositoryError::Corrupted { entity, source })
}

fn restore_all<R, E>(entity: &'static str, rows: Vec<R>) -> Result<Vec<E>, RepositoryError>
where
    E: TryFrom<R, Error = DomainError>,
{
    rows.into_iter().map(|row| restore_one(entity, row)).collect()
}
