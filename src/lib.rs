//! Arcade car-soccer vehicle controller.
//!
//! A [`Vehicle`] turns player controls into forces, torques and wheel
//! commands on a rigid body living in any [`PhysicsWorld`]. [`Arena`] runs
//! vehicles and a [`SimulationWorld`] at a fixed tick rate, and
//! [`FlatWorld`] is a small built-in world with a flat ground plane.

pub mod consts;
mod error;
mod logging;
pub mod physics;
mod sim;

pub use error::{ConfigError, Result};
pub use physics::{
    BodyCategory, BodyHandle, CarRig, ChassisConfig, CollisionEvent, FlatWorld, PhysicsWorld,
    SimulationWorld, WheelHandle, WheelHit, WheelPairConfig, WheelPose,
};
pub use sim::*;

/// Installs the crate's `env_logger` setup
///
/// Defaults to the `Info` level, `RUST_LOG` overrides it.
pub fn init_logging() -> std::result::Result<(), log::SetLoggerError> {
    logging::try_init()
}
