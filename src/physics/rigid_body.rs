use glam::{Affine3A, Mat3A, Quat, Vec3A};

use super::BodyCategory;

pub struct RigidBodyConstructionInfo {
    pub mass: f32,
    pub category: BodyCategory,
    pub start_world_transform: Affine3A,
    /// Half-size of the collision box
    pub half_extents: Vec3A,
    pub local_inertia: Vec3A,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub friction: f32,
}

impl RigidBodyConstructionInfo {
    pub fn new(mass: f32, half_extents: Vec3A) -> Self {
        Self {
            mass,
            category: BodyCategory::Vehicle,
            start_world_transform: Affine3A::IDENTITY,
            half_extents,
            local_inertia: calculate_box_inertia(half_extents, mass),
            linear_damping: 0.0,
            angular_damping: 0.0,
            friction: 0.5,
        }
    }
}

fn calculate_box_inertia(half_extents: Vec3A, mass: f32) -> Vec3A {
    let l = half_extents * 2.0;
    let l2 = l * l;

    Vec3A::new(l2.y + l2.z, l2.x + l2.z, l2.x + l2.y) * (mass / 12.0)
}

/// A box-shaped dynamic body.
///
/// The position is the body origin; rotation happens about the center of
/// mass, which can be moved away from the origin.
pub struct RigidBody {
    pub category: BodyCategory,
    pub half_extents: Vec3A,
    pub position: Vec3A,
    pub rotation: Quat,
    /// Body-local
    pub center_of_mass: Vec3A,
    pub linear_velocity: Vec3A,
    pub angular_velocity: Vec3A,
    pub inverse_mass: f32,
    pub inv_inertia_local: Vec3A,
    pub total_force: Vec3A,
    pub total_torque: Vec3A,
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub friction: f32,
    pub(crate) in_ground_contact: bool,
}

impl RigidBody {
    pub fn new(info: RigidBodyConstructionInfo) -> Self {
        let inverse_mass = if info.mass == 0.0 { 0.0 } else { 1.0 / info.mass };

        let inv_inertia_local = Vec3A::select(
            info.local_inertia.cmpeq(Vec3A::ZERO),
            Vec3A::ZERO,
            info.local_inertia.recip(),
        );

        Self {
            category: info.category,
            half_extents: info.half_extents,
            position: info.start_world_transform.translation,
            rotation: Quat::from_mat3a(&info.start_world_transform.matrix3).normalize(),
            center_of_mass: Vec3A::ZERO,
            linear_velocity: Vec3A::ZERO,
            angular_velocity: Vec3A::ZERO,
            inverse_mass,
            inv_inertia_local,
            total_force: Vec3A::ZERO,
            total_torque: Vec3A::ZERO,
            linear_damping: info.linear_damping.clamp(0.0, 1.0),
            angular_damping: info.angular_damping.clamp(0.0, 1.0),
            friction: info.friction,
            in_ground_contact: false,
        }
    }

    pub const fn is_static_object(&self) -> bool {
        self.inverse_mass == 0.0
    }

    pub fn get_world_transform(&self) -> Affine3A {
        Affine3A {
            matrix3: Mat3A::from_quat(self.rotation),
            translation: self.position,
        }
    }

    pub fn set_world_transform(&mut self, trans: Affine3A) {
        self.position = trans.translation;
        self.rotation = Quat::from_mat3a(&trans.matrix3).normalize();
    }

    pub fn get_up_vector(&self) -> Vec3A {
        self.rotation * Vec3A::Z
    }

    pub fn center_of_mass_world(&self) -> Vec3A {
        self.position + self.rotation * self.center_of_mass
    }

    pub fn inv_inertia_tensor_world(&self) -> Mat3A {
        let rot = Mat3A::from_quat(self.rotation);
        rot * Mat3A::from_diagonal(self.inv_inertia_local.into()) * rot.transpose()
    }

    pub fn get_velocity_in_local_point(&self, rel_pos: Vec3A) -> Vec3A {
        self.linear_velocity + self.angular_velocity.cross(rel_pos)
    }

    pub fn apply_central_force(&mut self, force: Vec3A) {
        self.total_force += force;
    }

    pub fn apply_torque(&mut self, torque: Vec3A) {
        self.total_torque += torque;
    }

    /// `rel_pos` is relative to the center of mass
    pub fn apply_force(&mut self, force: Vec3A, rel_pos: Vec3A) {
        self.apply_central_force(force);
        self.apply_torque(rel_pos.cross(force));
    }

    pub fn apply_central_impulse(&mut self, impulse: Vec3A) {
        self.linear_velocity += impulse * self.inverse_mass;
    }

    /// `rel_pos` is relative to the center of mass
    pub fn apply_impulse(&mut self, impulse: Vec3A, rel_pos: Vec3A) {
        if self.inverse_mass == 0.0 {
            return;
        }

        self.apply_central_impulse(impulse);
        self.angular_velocity += self.inv_inertia_tensor_world() * rel_pos.cross(impulse);
    }

    /// Inverse of the effective mass felt by an impulse along `normal` at `rel_pos`
    pub fn compute_impulse_denominator(&self, rel_pos: Vec3A, normal: Vec3A) -> f32 {
        let r0 = rel_pos.cross(normal);
        let vec = (self.inv_inertia_tensor_world() * r0).cross(rel_pos);

        self.inverse_mass + normal.dot(vec)
    }

    pub fn integrate_velocities(&mut self, step: f32, gravity: Vec3A) {
        if self.is_static_object() {
            return;
        }

        self.linear_velocity += (self.total_force * self.inverse_mass + gravity) * step;
        self.angular_velocity += self.inv_inertia_tensor_world() * self.total_torque * step;

        self.linear_velocity *= (1.0 - self.linear_damping).powf(step);
        self.angular_velocity *= (1.0 - self.angular_damping).powf(step);
    }

    pub fn integrate_transform(&mut self, step: f32) {
        if self.is_static_object() {
            return;
        }

        let com = self.center_of_mass_world() + self.linear_velocity * step;

        let ang_step = self.angular_velocity * step;
        if ang_step.length_squared() > 0.0 {
            let delta = Quat::from_scaled_axis(ang_step.into());
            self.rotation = (delta * self.rotation).normalize();
        }

        self.position = com - self.rotation * self.center_of_mass;
    }

    pub fn clear_forces(&mut self) {
        self.total_force = Vec3A::ZERO;
        self.total_torque = Vec3A::ZERO;
    }

    pub fn corners(&self) -> [Vec3A; 8] {
        let trans = self.get_world_transform();
        let h = self.half_extents;

        std::array::from_fn(|i| {
            let sign = Vec3A::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            );
            trans.transform_point3a(h * sign)
        })
    }
}
