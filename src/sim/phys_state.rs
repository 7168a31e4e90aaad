use std::fmt::Display;

use glam::{Mat3A, Vec3A};

use crate::physics::{BodyHandle, PhysicsWorld};

/// Axes follow a Z-up, X-forward frame, so Y points to the vehicle's left
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysState {
    pub pos: Vec3A,
    pub rot_mat: Mat3A,
    pub vel: Vec3A,
    pub ang_vel: Vec3A,
}

impl Default for PhysState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PhysState {
    pub const DEFAULT: Self = Self {
        pos: Vec3A::ZERO,
        rot_mat: Mat3A::IDENTITY,
        vel: Vec3A::ZERO,
        ang_vel: Vec3A::ZERO,
    };

    pub(crate) fn from_world<W: PhysicsWorld + ?Sized>(world: &W, body: BodyHandle) -> Self {
        let trans = world.body_transform(body);

        Self {
            pos: trans.translation,
            rot_mat: trans.matrix3,
            vel: world.linear_velocity(body),
            ang_vel: world.angular_velocity(body),
        }
    }

    #[must_use]
    pub const fn get_forward_dir(&self) -> Vec3A {
        self.rot_mat.x_axis
    }

    #[must_use]
    pub fn get_right_dir(&self) -> Vec3A {
        -self.rot_mat.y_axis
    }

    #[must_use]
    pub const fn get_up_dir(&self) -> Vec3A {
        self.rot_mat.z_axis
    }
}

impl Display for PhysState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("PhysState {")?;
        f.write_fmt(format_args!("\n\tpos: {}", self.pos))?;
        f.write_fmt(format_args!("\n\trot_mat: {}", self.rot_mat))?;
        f.write_fmt(format_args!("\n\tvel: {}", self.vel))?;
        f.write_fmt(format_args!("\n\tang_vel: {}", self.ang_vel))?;
        f.write_str("}")
    }
}
