#[forbid(unsafe_code)]
mod averages;
mod chart;
mod clock;
pub(crate) mod csv;
mod emissions;
mod factors;
mod input;
mod model;
mod offsets;
mod screen;

pub use averages::*;
pub use chart::*;
pub use clock::*;
pub use emissions::*;
pub use factors::*;
pub use input::*;
pub use model::*;
pub use offsets::*;
pub use screen::*;
