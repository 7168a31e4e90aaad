//! Error types for vehicle setup.

use glam::Vec3A;
use thiserror::Error;

use crate::physics::{BodyHandle, WheelHandle};

/// Result type for vehicle setup.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A vehicle that cannot be built from the given world and configuration.
///
/// These are raised once, at construction. A running vehicle never errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The chassis body does not exist in the physics world.
    #[error("rigid body {0:?} does not exist")]
    MissingBody(BodyHandle),
    /// An axle refers to a wheel that does not exist in the physics world.
    #[error("wheel {0:?} does not exist")]
    MissingWheel(WheelHandle),
    /// The same wheel was given to more than one axle slot.
    #[error("wheel {0:?} is used by more than one axle slot")]
    DuplicateWheel(WheelHandle),
    /// At least one axle is required.
    #[error("a vehicle needs at least one axle")]
    NoAxles,
    /// More axles than a vehicle can hold.
    #[error("{count} axles given, a vehicle holds at most {max}")]
    TooManyAxles {
        /// Number of axles given.
        count: usize,
        /// Capacity of a vehicle.
        max: usize,
    },
    /// A tunable is negative or not finite.
    #[error("tunable `{field}` must be finite and non-negative, got {value}")]
    InvalidTuning {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The center-of-mass offset is not finite.
    #[error("center of mass offset {0} is not finite")]
    InvalidCenterOfMass(Vec3A),
    /// Another vehicle already drives this body.
    #[error("rigid body {0:?} is already driven by another vehicle")]
    BodyAlreadyOwned(BodyHandle),
}
