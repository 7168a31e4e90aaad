mod arena;
mod arena_config;
mod phys_state;
mod vehicle;

pub use arena::*;
pub use arena_config::*;
pub use phys_state::*;
pub use vehicle::*;
