use glam::{Affine3A, Quat, Vec3A};

use super::{BodyCategory, BodyHandle, WheelHit, WheelPose};

#[derive(Clone, Copy, Debug)]
pub struct WheelInfoConstructionInfo {
    pub chassis_connection_cs: Vec3A,
    pub wheel_radius: f32,
    pub suspension_distance: f32,
    pub suspension_stiffness: f32,
    pub suspension_damping: f32,
    pub friction: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RaycastInfo {
    pub contact_normal_ws: Vec3A,
    pub contact_point_ws: Vec3A,
    pub suspension_length: f32,
    pub hard_point_ws: Vec3A,
    pub wheel_direction_ws: Vec3A,
    pub is_in_contact: bool,
}

/// Raycast wheel hanging off a chassis body
pub struct WheelInfo {
    pub body: BodyHandle,
    pub raycast_info: RaycastInfo,
    pub chassis_connection_point_cs: Vec3A,
    pub wheels_radius: f32,
    pub suspension_distance: f32,
    pub suspension_stiffness: f32,
    pub suspension_damping: f32,
    pub friction: f32,
    /// Degrees
    pub steer_angle: f32,
    pub motor_torque: f32,
    /// Spin about the axle, radians
    pub rotation: f32,
    pub wheels_suspension_force: f32,
    prev_suspension_length: f32,
}

impl WheelInfo {
    pub fn new(body: BodyHandle, ci: WheelInfoConstructionInfo) -> Self {
        Self {
            body,
            raycast_info: RaycastInfo {
                suspension_length: ci.suspension_distance,
                ..Default::default()
            },
            chassis_connection_point_cs: ci.chassis_connection_cs,
            wheels_radius: ci.wheel_radius,
            suspension_distance: ci.suspension_distance,
            suspension_stiffness: ci.suspension_stiffness,
            suspension_damping: ci.suspension_damping,
            friction: ci.friction,
            steer_angle: 0.0,
            motor_torque: 0.0,
            rotation: 0.0,
            wheels_suspension_force: 0.0,
            prev_suspension_length: ci.suspension_distance,
        }
    }

    /// Frame of the suspension mount
    pub fn mount_transform(&self, chassis_trans: &Affine3A) -> Affine3A {
        Affine3A {
            matrix3: chassis_trans.matrix3,
            translation: chassis_trans.transform_point3a(self.chassis_connection_point_cs),
        }
    }

    fn update_wheel_transform_ws(&mut self, chassis_trans: &Affine3A) {
        self.raycast_info.is_in_contact = false;
        self.raycast_info.hard_point_ws =
            chassis_trans.transform_point3a(self.chassis_connection_point_cs);
        self.raycast_info.wheel_direction_ws = -chassis_trans.matrix3.z_axis;
    }

    /// Casts the suspension ray against the ground plane `z = 0`
    pub fn ray_cast(&mut self, chassis_trans: &Affine3A) {
        self.update_wheel_transform_ws(chassis_trans);

        let real_ray_length = self.suspension_distance + self.wheels_radius;
        let source = self.raycast_info.hard_point_ws;
        let dir = self.raycast_info.wheel_direction_ws;

        // ray must point into the ground
        let hit_fraction = if dir.z < -f32::EPSILON {
            Some((-source.z / dir.z).max(0.0))
        } else {
            None
        };

        let Some(hit_dist) = hit_fraction.filter(|&dist| dist <= real_ray_length) else {
            self.raycast_info.suspension_length = self.suspension_distance;
            self.raycast_info.contact_point_ws = source + dir * real_ray_length;
            self.raycast_info.contact_normal_ws = -dir;
            return;
        };

        self.raycast_info.is_in_contact = true;
        self.raycast_info.contact_point_ws = source + dir * hit_dist;
        self.raycast_info.contact_normal_ws = Vec3A::Z;
        self.raycast_info.suspension_length =
            (hit_dist - self.wheels_radius).clamp(0.0, self.suspension_distance);
    }

    /// Spring + damper force along the contact normal, zero without contact
    pub fn update_suspension(&mut self, delta_time: f32) -> f32 {
        if !self.raycast_info.is_in_contact {
            self.prev_suspension_length = self.suspension_distance;
            self.wheels_suspension_force = 0.0;
            return 0.0;
        }

        let compression = self.suspension_distance - self.raycast_info.suspension_length;
        let compression_vel = if delta_time > 0.0 {
            (self.prev_suspension_length - self.raycast_info.suspension_length) / delta_time
        } else {
            0.0
        };
        self.prev_suspension_length = self.raycast_info.suspension_length;

        self.wheels_suspension_force = (compression * self.suspension_stiffness
            + compression_vel * self.suspension_damping)
            .max(0.0);
        self.wheels_suspension_force
    }

    /// Rolling direction on the ground, with steering applied
    pub fn forward_dir(&self, chassis_trans: &Affine3A) -> Vec3A {
        let up = chassis_trans.matrix3.z_axis;
        let steering_orn = Quat::from_axis_angle(up.into(), self.steer_angle.to_radians());

        steering_orn * chassis_trans.matrix3.x_axis
    }

    pub fn ground_hit(&self) -> Option<WheelHit> {
        self.raycast_info.is_in_contact.then_some(WheelHit {
            point: self.raycast_info.contact_point_ws,
            normal: self.raycast_info.contact_normal_ws,
            category: BodyCategory::Arena,
        })
    }

    pub fn world_pose(&self, chassis_trans: &Affine3A) -> WheelPose {
        let up = chassis_trans.matrix3.z_axis;
        let position = chassis_trans.transform_point3a(self.chassis_connection_point_cs)
            - up * self.raycast_info.suspension_length;

        let chassis_rot = Quat::from_mat3a(&chassis_trans.matrix3);
        let steer = Quat::from_rotation_z(self.steer_angle.to_radians());
        let spin = Quat::from_rotation_y(self.rotation);

        WheelPose {
            position,
            rotation: (chassis_rot * steer * spin).normalize(),
        }
    }
}
