//! The boundary between the vehicle controller and the physics engine.
//!
//! The controller never holds references into the engine. It keeps
//! [`BodyHandle`]s and [`WheelHandle`]s and is handed the world every tick.

pub mod flat_world;
mod rigid_body;
mod wheel_info;

pub use flat_world::{CarRig, ChassisConfig, FlatWorld, WheelPairConfig};
pub use rigid_body::{RigidBody, RigidBodyConstructionInfo};
pub use wheel_info::{WheelInfo, WheelInfoConstructionInfo};

use glam::{Affine3A, Quat, Vec3A};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WheelHandle(pub usize);

/// What a body is, as far as the vehicle cares
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodyCategory {
    /// The playing surface (floor, walls, ceiling)
    Arena,
    Ball,
    Vehicle,
    #[default]
    Other,
}

/// Ground contact of a single wheel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelHit {
    /// World space
    pub point: Vec3A,
    /// World space, unit length
    pub normal: Vec3A,
    pub category: BodyCategory,
}

/// World pose of a wheel, for placing a cosmetic mesh
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelPose {
    pub position: Vec3A,
    pub rotation: Quat,
}

impl Default for WheelPose {
    fn default() -> Self {
        Self {
            position: Vec3A::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Delivered once per new contact between `body` and something else
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionEvent {
    pub body: BodyHandle,
    pub other: BodyCategory,
    pub contact_point: Vec3A,
    /// Points from the other body towards `body`
    pub contact_normal: Vec3A,
}

/// Queries and commands a vehicle needs from the physics engine.
///
/// Handles passed in are expected to be valid; `Vehicle::new` checks them
/// once with [`contains_body`](Self::contains_body) and
/// [`contains_wheel`](Self::contains_wheel).
pub trait PhysicsWorld {
    fn contains_body(&self, body: BodyHandle) -> bool;
    fn contains_wheel(&self, wheel: WheelHandle) -> bool;

    fn body_transform(&self, body: BodyHandle) -> Affine3A;
    fn linear_velocity(&self, body: BodyHandle) -> Vec3A;
    fn angular_velocity(&self, body: BodyHandle) -> Vec3A;
    /// Body-local offset
    fn center_of_mass(&self, body: BodyHandle) -> Vec3A;
    fn set_center_of_mass(&mut self, body: BodyHandle, local_offset: Vec3A);

    fn apply_central_force(&mut self, body: BodyHandle, force: Vec3A);
    fn apply_central_impulse(&mut self, body: BodyHandle, impulse: Vec3A);
    fn apply_force_at_position(&mut self, body: BodyHandle, force: Vec3A, world_pos: Vec3A);
    fn apply_torque(&mut self, body: BodyHandle, torque: Vec3A);

    /// `None` when the wheel has no ground contact
    fn wheel_ground_hit(&self, wheel: WheelHandle) -> Option<WheelHit>;
    /// Frame of the suspension mount (top of the suspension travel)
    fn wheel_transform(&self, wheel: WheelHandle) -> Affine3A;
    fn wheel_radius(&self, wheel: WheelHandle) -> f32;
    /// Maximum suspension travel
    fn suspension_distance(&self, wheel: WheelHandle) -> f32;
    /// Degrees
    fn steer_angle(&self, wheel: WheelHandle) -> f32;
    fn set_steer_angle(&mut self, wheel: WheelHandle, degrees: f32);
    fn motor_torque(&self, wheel: WheelHandle) -> f32;
    fn set_motor_torque(&mut self, wheel: WheelHandle, torque: f32);
    fn wheel_world_pose(&self, wheel: WheelHandle) -> WheelPose;
}

/// A world that can be stepped by a fixed-tick driver
pub trait SimulationWorld: PhysicsWorld {
    fn step(&mut self, tick_time: f32);

    /// Moves every collision-enter event since the last drain into `out`
    fn drain_collision_events(&mut self, out: &mut Vec<CollisionEvent>);
}
