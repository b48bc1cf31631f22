mod actuator;
mod catalog;
mod device;
mod house;
mod reading;
mod room;
mod sensor;
mod weather;

pub use actuator::*;
pub use catalog::*;
pub use device::*;
pub use house::*;
pub use reading::*;
pub use room::*;
pub use sensor::*;
pub use weather::*;

/// Identifiers travel as opaque strings, UUIDs unless supplied by the caller.
pub type Id = String;
