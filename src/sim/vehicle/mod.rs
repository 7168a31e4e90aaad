mod axle;
mod vehicle;
mod vehicle_config;
mod vehicle_controls;
mod vehicle_state;
mod wheel_visuals;

pub use axle::*;
pub use vehicle::*;
pub use vehicle_config::*;
pub use vehicle_controls::*;
pub use vehicle_state::*;
pub use wheel_visuals::*;
