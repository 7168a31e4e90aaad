//! A small rigid-body world with an infinite ground plane at `z = 0`.
//!
//! It exists so vehicles can be driven end to end without an external
//! engine. Chassis bodies are boxes; wheels are raycasts with a spring and
//! damper; the ground plane counts as the arena surface.

use arrayvec::ArrayVec;
use glam::{Affine3A, Vec3A};
use log::{debug, warn};

use super::{
    BodyCategory, BodyHandle, CollisionEvent, PhysicsWorld, RigidBody,
    RigidBodyConstructionInfo, SimulationWorld, WheelHandle, WheelHit, WheelInfo,
    WheelInfoConstructionInfo, WheelPose,
};
use crate::{
    consts::{self, flat_world as world_consts},
    sim::Axle,
};

#[derive(Clone, Copy, Debug)]
pub struct WheelPairConfig {
    /// Radius of both wheels
    pub wheel_radius: f32,
    /// Maximum travel of the suspension
    pub suspension_distance: f32,
    /// Where the suspension mounts on the chassis
    ///
    /// NOTE: Y should ALWAYS be positive. It will be automatically negated when creating the right wheel.
    pub connection_point_offset: Vec3A,
}

#[derive(Clone, Copy, Debug)]
pub struct ChassisConfig {
    pub mass: f32,
    /// Full size of the chassis box (NOT the half-size/extent)
    pub hitbox_size: Vec3A,
    pub front_wheels: WheelPairConfig,
    pub back_wheels: WheelPairConfig,
    pub suspension_stiffness: f32,
    pub suspension_damping: f32,
    pub tire_friction: f32,
}

impl Default for ChassisConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ChassisConfig {
    pub const DEFAULT: Self = Self {
        mass: world_consts::CHASSIS_MASS,
        hitbox_size: world_consts::CHASSIS_SIZE,
        front_wheels: WheelPairConfig {
            wheel_radius: world_consts::FRONT_WHEEL_RADIUS,
            suspension_distance: world_consts::SUSPENSION_DISTANCE,
            connection_point_offset: world_consts::FRONT_WHEEL_OFFSET,
        },
        back_wheels: WheelPairConfig {
            wheel_radius: world_consts::BACK_WHEEL_RADIUS,
            suspension_distance: world_consts::SUSPENSION_DISTANCE,
            connection_point_offset: world_consts::BACK_WHEEL_OFFSET,
        },
        suspension_stiffness: world_consts::SUSPENSION_STIFFNESS,
        suspension_damping: world_consts::SUSPENSION_DAMPING,
        tire_friction: world_consts::TIRE_FRICTION,
    };
}

/// Handles of a car built by [`FlatWorld::add_car`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarRig {
    pub body: BodyHandle,
    /// Left, right
    pub front_wheels: [WheelHandle; 2],
    /// Left, right
    pub back_wheels: [WheelHandle; 2],
}

impl CarRig {
    /// Front axle steers, back axle drives
    pub fn axles(&self) -> ArrayVec<Axle, { consts::vehicle::MAX_AXLES }> {
        let mut axles = ArrayVec::new();
        axles.push(Axle::new(self.front_wheels[0], self.front_wheels[1], true, false));
        axles.push(Axle::new(self.back_wheels[0], self.back_wheels[1], false, true));
        axles
    }
}

pub struct FlatWorld {
    gravity: Vec3A,
    bodies: Vec<RigidBody>,
    wheels: Vec<WheelInfo>,
    collision_events: Vec<CollisionEvent>,
}

impl Default for FlatWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatWorld {
    pub fn new() -> Self {
        Self {
            gravity: Vec3A::new(0.0, 0.0, consts::GRAVITY_Z),
            bodies: Vec::new(),
            wheels: Vec::new(),
            collision_events: Vec::new(),
        }
    }

    pub const fn gravity(&self) -> Vec3A {
        self.gravity
    }

    pub const fn set_gravity(&mut self, gravity: Vec3A) {
        self.gravity = gravity;
    }

    pub fn add_body(&mut self, info: RigidBodyConstructionInfo) -> BodyHandle {
        self.bodies.push(RigidBody::new(info));
        BodyHandle(self.bodies.len() - 1)
    }

    pub fn add_wheel(&mut self, body: BodyHandle, ci: WheelInfoConstructionInfo) -> WheelHandle {
        let chassis_trans = self.bodies[body.0].get_world_transform();

        let mut wheel = WheelInfo::new(body, ci);
        wheel.ray_cast(&chassis_trans);
        self.wheels.push(wheel);

        WheelHandle(self.wheels.len() - 1)
    }

    /// Builds a four-wheeled car, wheels mirrored across the chassis Y axis
    pub fn add_car(&mut self, start: Affine3A, config: &ChassisConfig) -> CarRig {
        let mut info = RigidBodyConstructionInfo::new(config.mass, config.hitbox_size * 0.5);
        info.start_world_transform = start;
        info.linear_damping = world_consts::LINEAR_DAMPING;
        info.angular_damping = world_consts::ANGULAR_DAMPING;
        info.friction = world_consts::CONTACT_FRICTION;
        let body = self.add_body(info);

        let mut handles = [WheelHandle(0); 4];
        for (i, handle) in handles.iter_mut().enumerate() {
            let front = i < 2;
            let right = i % 2 != 0;

            let wheels = if front {
                &config.front_wheels
            } else {
                &config.back_wheels
            };

            let mut connection_point = wheels.connection_point_offset;
            if right {
                connection_point.y *= -1.0;
            }

            *handle = self.add_wheel(
                body,
                WheelInfoConstructionInfo {
                    chassis_connection_cs: connection_point,
                    wheel_radius: wheels.wheel_radius,
                    suspension_distance: wheels.suspension_distance,
                    suspension_stiffness: config.suspension_stiffness,
                    suspension_damping: config.suspension_damping,
                    friction: config.tire_friction,
                },
            );
        }

        debug!("Added car body {body:?} with wheels {handles:?}");

        CarRig {
            body,
            front_wheels: [handles[0], handles[1]],
            back_wheels: [handles[2], handles[3]],
        }
    }

    pub fn body(&self, body: BodyHandle) -> &RigidBody {
        &self.bodies[body.0]
    }

    pub fn body_mut(&mut self, body: BodyHandle) -> &mut RigidBody {
        &mut self.bodies[body.0]
    }

    pub fn wheel(&self, wheel: WheelHandle) -> &WheelInfo {
        &self.wheels[wheel.0]
    }

    pub fn wheel_mut(&mut self, wheel: WheelHandle) -> &mut WheelInfo {
        &mut self.wheels[wheel.0]
    }

    /// Teleports a body, refreshing the contact state of its wheels
    pub fn set_body_transform(&mut self, body: BodyHandle, trans: Affine3A) {
        self.bodies[body.0].set_world_transform(trans);
        self.update_wheel_contacts();
    }

    fn update_wheel_contacts(&mut self) {
        for wheel in &mut self.wheels {
            let chassis_trans = self.bodies[wheel.body.0].get_world_transform();
            wheel.ray_cast(&chassis_trans);
        }
    }

    fn apply_wheel_forces(&mut self, step: f32) {
        let mut wheels_in_contact = vec![0u8; self.bodies.len()];
        for wheel in &self.wheels {
            wheels_in_contact[wheel.body.0] += u8::from(wheel.raycast_info.is_in_contact);
        }

        for wheel in &mut self.wheels {
            let chassis = &mut self.bodies[wheel.body.0];
            let chassis_trans = chassis.get_world_transform();
            let suspension_force = wheel.update_suspension(step);

            let forward_dir = wheel.forward_dir(&chassis_trans);
            if !wheel.raycast_info.is_in_contact {
                continue;
            }

            let normal = wheel.raycast_info.contact_normal_ws;
            let rel_pos = wheel.raycast_info.contact_point_ws - chassis.center_of_mass_world();
            chassis.apply_force(normal * suspension_force, rel_pos);

            let long_dir = (forward_dir - normal * forward_dir.dot(normal)).normalize_or_zero();
            let lat_dir = normal.cross(long_dir);

            let contact_vel = chassis.get_velocity_in_local_point(rel_pos);
            let long_vel = contact_vel.dot(long_dir);
            let lat_vel = contact_vel.dot(lat_dir);

            let max_friction = wheel.friction * suspension_force;
            let mass_share =
                1.0 / (chassis.inverse_mass * f32::from(wheels_in_contact[wheel.body.0]));

            let long_force = (wheel.motor_torque / wheel.wheels_radius
                - long_vel * world_consts::ROLLING_RESISTANCE)
                .clamp(-max_friction, max_friction);
            let lat_force = (-lat_vel * mass_share * world_consts::LATERAL_GRIP / step)
                .clamp(-max_friction, max_friction);

            // friction acts at chassis height
            let up = chassis_trans.matrix3.z_axis;
            let friction_rel_pos = rel_pos - up * up.dot(rel_pos);
            chassis.apply_force(long_dir * long_force + lat_dir * lat_force, friction_rel_pos);

            wheel.rotation += long_vel * step / wheel.wheels_radius;
        }
    }

    /// Pushes chassis boxes out of the ground plane and reports new contacts
    fn resolve_ground_contacts(&mut self) {
        for (i, body) in self.bodies.iter_mut().enumerate() {
            if body.is_static_object() {
                continue;
            }

            let corners = body.corners();
            let deepest = corners
                .iter()
                .copied()
                .min_by(|a, b| a.z.total_cmp(&b.z))
                .unwrap_or(Vec3A::ZERO);

            let touching = deepest.z < 0.0;
            if touching {
                body.position.z -= deepest.z * world_consts::CONTACT_CORRECTION;

                for corner in corners.iter().filter(|corner| corner.z < 0.0) {
                    let rel_pos = *corner - body.center_of_mass_world();
                    let vel = body.get_velocity_in_local_point(rel_pos);
                    if vel.z >= 0.0 {
                        continue;
                    }

                    let normal_impulse =
                        -vel.z / body.compute_impulse_denominator(rel_pos, Vec3A::Z);
                    body.apply_impulse(Vec3A::Z * normal_impulse, rel_pos);

                    let tangent_vel = body.get_velocity_in_local_point(rel_pos).with_z(0.0);
                    let tangent_speed = tangent_vel.length();
                    if tangent_speed > f32::EPSILON {
                        let tangent_dir = tangent_vel / tangent_speed;
                        let friction_impulse = (tangent_speed
                            / body.compute_impulse_denominator(rel_pos, tangent_dir))
                        .min(body.friction * normal_impulse);
                        body.apply_impulse(-tangent_dir * friction_impulse, rel_pos);
                    }
                }

                if !body.in_ground_contact {
                    self.collision_events.push(CollisionEvent {
                        body: BodyHandle(i),
                        other: BodyCategory::Arena,
                        contact_point: deepest.with_z(0.0),
                        contact_normal: Vec3A::Z,
                    });
                }
            }

            body.in_ground_contact = touching;
        }
    }
}

impl PhysicsWorld for FlatWorld {
    fn contains_body(&self, body: BodyHandle) -> bool {
        body.0 < self.bodies.len()
    }

    fn contains_wheel(&self, wheel: WheelHandle) -> bool {
        wheel.0 < self.wheels.len()
    }

    fn body_transform(&self, body: BodyHandle) -> Affine3A {
        self.bodies[body.0].get_world_transform()
    }

    fn linear_velocity(&self, body: BodyHandle) -> Vec3A {
        self.bodies[body.0].linear_velocity
    }

    fn angular_velocity(&self, body: BodyHandle) -> Vec3A {
        self.bodies[body.0].angular_velocity
    }

    fn center_of_mass(&self, body: BodyHandle) -> Vec3A {
        self.bodies[body.0].center_of_mass
    }

    fn set_center_of_mass(&mut self, body: BodyHandle, local_offset: Vec3A) {
        self.bodies[body.0].center_of_mass = local_offset;
    }

    fn apply_central_force(&mut self, body: BodyHandle, force: Vec3A) {
        self.bodies[body.0].apply_central_force(force);
    }

    fn apply_central_impulse(&mut self, body: BodyHandle, impulse: Vec3A) {
        self.bodies[body.0].apply_central_impulse(impulse);
    }

    fn apply_force_at_position(&mut self, body: BodyHandle, force: Vec3A, world_pos: Vec3A) {
        let rb = &mut self.bodies[body.0];
        let rel_pos = world_pos - rb.center_of_mass_world();
        rb.apply_force(force, rel_pos);
    }

    fn apply_torque(&mut self, body: BodyHandle, torque: Vec3A) {
        self.bodies[body.0].apply_torque(torque);
    }

    fn wheel_ground_hit(&self, wheel: WheelHandle) -> Option<WheelHit> {
        self.wheels[wheel.0].ground_hit()
    }

    fn wheel_transform(&self, wheel: WheelHandle) -> Affine3A {
        let wheel = &self.wheels[wheel.0];
        wheel.mount_transform(&self.bodies[wheel.body.0].get_world_transform())
    }

    fn wheel_radius(&self, wheel: WheelHandle) -> f32 {
        self.wheels[wheel.0].wheels_radius
    }

    fn suspension_distance(&self, wheel: WheelHandle) -> f32 {
        self.wheels[wheel.0].suspension_distance
    }

    fn steer_angle(&self, wheel: WheelHandle) -> f32 {
        self.wheels[wheel.0].steer_angle
    }

    fn set_steer_angle(&mut self, wheel: WheelHandle, degrees: f32) {
        self.wheels[wheel.0].steer_angle = degrees;
    }

    fn motor_torque(&self, wheel: WheelHandle) -> f32 {
        self.wheels[wheel.0].motor_torque
    }

    fn set_motor_torque(&mut self, wheel: WheelHandle, torque: f32) {
        self.wheels[wheel.0].motor_torque = torque;
    }

    fn wheel_world_pose(&self, wheel: WheelHandle) -> WheelPose {
        let wheel = &self.wheels[wheel.0];
        wheel.world_pose(&self.bodies[wheel.body.0].get_world_transform())
    }
}

impl SimulationWorld for FlatWorld {
    fn step(&mut self, tick_time: f32) {
        if !(tick_time.is_finite() && tick_time > 0.0) {
            warn!("Ignoring world step of {tick_time} s");
            return;
        }

        self.update_wheel_contacts();
        self.apply_wheel_forces(tick_time);

        for body in &mut self.bodies {
            body.integrate_velocities(tick_time, self.gravity);
            body.integrate_transform(tick_time);
            body.clear_forces();
        }

        self.resolve_ground_contacts();

        // queries between steps see the post-step contacts
        self.update_wheel_contacts();
    }

    fn drain_collision_events(&mut self, out: &mut Vec<CollisionEvent>) {
        out.append(&mut self.collision_events);
    }
}
