mod actuator_handle;
mod catalog_handle;
mod device_handle;
mod docs;
mod house_handle;
mod reading_handle;
mod room_handle;
mod sensor_handle;
mod weather_handle;

pub use actuator_handle::*;
pub use catalog_handle::*;
pub use device_handle::*;
pub use docs::*;
pub use house_handle::*;
pub use reading_handle::*;
pub use room_handle::*;
pub use sensor_handle::*;
pub use weather_handle::*;
