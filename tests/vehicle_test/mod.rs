mod controls_builder;
mod mock_world;
mod setup;

pub use controls_builder::*;
pub use mock_world::*;
pub use setup::*;
