mod dimensions;
mod ids;
mod location;
mod text;

pub use dimensions::*;
pub use ids::*;
pub use location::*;
pub use text::*;
