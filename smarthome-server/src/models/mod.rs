mod actuator;
mod catalog;
mod device;
mod house;
mod reading;
mod room;
mod sensor;

pub use actuator::{ActuatorRow, ActuatorTable};
pub use catalog::{
    ActuatorModelRow, ActuatorModelTable, ActuatorTypeRow, ActuatorTypeTable, SensorModelRow,
    SensorModelTable, SensorTypeRow, SensorTypeTable,
};
pub use device::{DeviceRow, DeviceTable};
pub use house::{HouseRow, HouseTable};
pub use reading::{SensorReadingRow, SensorReadingTable, from_millis, to_millis, to_millis_ceil};
pub use room::{RoomRow, RoomTable};
pub use sensor::{SensorRow, SensorTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
