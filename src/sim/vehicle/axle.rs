use glam::{Affine3A, Vec3A};
use log::trace;

use crate::{
    consts::vehicle::UNGROUNDED_TRAVEL,
    physics::{BodyHandle, PhysicsWorld, WheelHandle},
};

/// A left/right wheel pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axle {
    pub left_wheel: WheelHandle,
    pub right_wheel: WheelHandle,
    /// Accepts steering commands
    pub is_steering: bool,
    /// Accepts motor torque commands
    pub is_motorized: bool,
}

/// How far a wheel's suspension has traveled, sampled once per tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSample {
    pub grounded: bool,
    /// 0 = fully compressed, 1 = fully extended
    pub travel: f32,
    /// World position of the suspension mount
    pub position: Vec3A,
}

impl WheelSample {
    pub fn new<W: PhysicsWorld + ?Sized>(world: &W, wheel: WheelHandle) -> Self {
        let wheel_trans = world.wheel_transform(wheel);

        let (grounded, travel) = match world.wheel_ground_hit(wheel) {
            Some(hit) => (
                true,
                suspension_travel(
                    hit.point,
                    &wheel_trans,
                    world.wheel_radius(wheel),
                    world.suspension_distance(wheel),
                ),
            ),
            // no load on the spring, so it is fully extended
            None => (false, UNGROUNDED_TRAVEL),
        };

        Self {
            grounded,
            travel,
            position: wheel_trans.translation,
        }
    }
}

/// Normalized suspension travel from a ground contact point
///
/// The contact point is moved into the wheel's local space; its depth below
/// the mount, minus the wheel radius, is the length the spring is extended.
/// A degenerate suspension distance reports the wheel as fully extended.
pub fn suspension_travel(
    contact_point: Vec3A,
    wheel_trans: &Affine3A,
    wheel_radius: f32,
    suspension_distance: f32,
) -> f32 {
    if suspension_distance.is_nan() || suspension_distance <= f32::EPSILON {
        trace!("Degenerate suspension distance {suspension_distance}, treating wheel as extended");
        return UNGROUNDED_TRAVEL;
    }

    let local_contact = wheel_trans.inverse().transform_point3a(contact_point);
    let travel = (-local_contact.z - wheel_radius) / suspension_distance;

    if travel.is_finite() {
        travel
    } else {
        trace!("Non-finite suspension travel from contact {contact_point}, treating as extended");
        UNGROUNDED_TRAVEL
    }
}

/// Anti-roll result for one axle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntiRoll {
    /// Positive when the left side is more extended than the right
    pub roll_force: f32,
    pub left: WheelSample,
    pub right: WheelSample,
}

impl AntiRoll {
    /// Force and world position for the left wheel, `None` if it is airborne
    pub fn left_force(&self, up: Vec3A) -> Option<(Vec3A, Vec3A)> {
        self.left
            .grounded
            .then(|| (up * -self.roll_force, self.left.position))
    }

    /// Force and world position for the right wheel, `None` if it is airborne
    pub fn right_force(&self, up: Vec3A) -> Option<(Vec3A, Vec3A)> {
        self.right
            .grounded
            .then(|| (up * self.roll_force, self.right.position))
    }

    pub fn apply<W: PhysicsWorld + ?Sized>(&self, world: &mut W, body: BodyHandle, up: Vec3A) {
        for (force, pos) in [self.left_force(up), self.right_force(up)]
            .into_iter()
            .flatten()
        {
            world.apply_force_at_position(body, force, pos);
        }
    }
}

impl Axle {
    pub const fn new(
        left_wheel: WheelHandle,
        right_wheel: WheelHandle,
        is_steering: bool,
        is_motorized: bool,
    ) -> Self {
        Self {
            left_wheel,
            right_wheel,
            is_steering,
            is_motorized,
        }
    }

    pub const fn wheels(&self) -> [WheelHandle; 2] {
        [self.left_wheel, self.right_wheel]
    }

    /// Writes the commands this axle accepts to both of its wheels
    pub fn apply_drive<W: PhysicsWorld + ?Sized>(
        &self,
        world: &mut W,
        motor_torque: f32,
        steer_angle: f32,
    ) {
        for wheel in self.wheels() {
            if self.is_steering {
                world.set_steer_angle(wheel, steer_angle);
            }

            if self.is_motorized {
                world.set_motor_torque(wheel, motor_torque);
            }
        }
    }

    /// Roll force from the difference in suspension travel across the axle
    ///
    /// An airborne wheel counts as fully extended, so a single grounded
    /// wheel still produces a force.
    pub fn compute_anti_roll<W: PhysicsWorld + ?Sized>(
        &self,
        world: &W,
        anti_roll: f32,
    ) -> AntiRoll {
        let left = WheelSample::new(world, self.left_wheel);
        let right = WheelSample::new(world, self.right_wheel);

        AntiRoll {
            roll_force: (left.travel - right.travel) * anti_roll,
            left,
            right,
        }
    }
}
