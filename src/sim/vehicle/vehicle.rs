use arrayvec::ArrayVec;
use glam::{Mat3A, Vec3A};
use log::{debug, info, trace};

use super::{
    Axle, GroundState, ResolvedInput, VehicleConfig, VehicleControls, VehicleState, WheelVisuals,
};
use crate::{
    PhysState,
    consts::{
        WORLD_DOWN,
        vehicle::{MAX_AXLES, MAX_WHEELS},
    },
    error::{ConfigError, Result},
    physics::{BodyCategory, BodyHandle, CollisionEvent, PhysicsWorld, WheelHandle, WheelPose},
};

/// Drives one rigid body as a car: steering, motor, anti-roll, jump,
/// boost, air control and flip recovery.
///
/// Call [`tick`](Self::tick) once per fixed physics step, before the world
/// integrates. Collision-enter events go through
/// [`on_collision_enter`](Self::on_collision_enter) and take effect at the
/// start of the next tick.
pub struct Vehicle {
    body: BodyHandle,
    axles: ArrayVec<Axle, MAX_AXLES>,
    config: VehicleConfig,
    pending_collisions: Vec<CollisionEvent>,
    pub(crate) internal_state: VehicleState,
}

impl Vehicle {
    /// Wires a vehicle to `body` and writes the center of mass offset to it
    pub fn new<W: PhysicsWorld + ?Sized>(
        world: &mut W,
        body: BodyHandle,
        axles: &[Axle],
        config: VehicleConfig,
    ) -> Result<Self> {
        config.validate()?;

        if !world.contains_body(body) {
            return Err(ConfigError::MissingBody(body));
        }

        if axles.is_empty() {
            return Err(ConfigError::NoAxles);
        }

        let axles: ArrayVec<Axle, MAX_AXLES> =
            ArrayVec::try_from(axles).map_err(|_| ConfigError::TooManyAxles {
                count: axles.len(),
                max: MAX_AXLES,
            })?;

        let mut seen_wheels = ArrayVec::<WheelHandle, MAX_WHEELS>::new();
        for wheel in axles.iter().flat_map(Axle::wheels) {
            if !world.contains_wheel(wheel) {
                return Err(ConfigError::MissingWheel(wheel));
            }

            if seen_wheels.contains(&wheel) {
                return Err(ConfigError::DuplicateWheel(wheel));
            }

            seen_wheels.push(wheel);
        }

        world.set_center_of_mass(body, config.center_of_mass_offset);

        info!(
            "Vehicle on body {body:?} ready with {} axles ({} steering, {} motorized)",
            axles.len(),
            axles.iter().filter(|axle| axle.is_steering).count(),
            axles.iter().filter(|axle| axle.is_motorized).count(),
        );

        Ok(Self {
            body,
            axles,
            config,
            pending_collisions: Vec::new(),
            internal_state: VehicleState {
                phys: PhysState::from_world(world, body),
                ..Default::default()
            },
        })
    }

    #[must_use]
    pub const fn body(&self) -> BodyHandle {
        self.body
    }

    #[must_use]
    pub fn axles(&self) -> &[Axle] {
        &self.axles
    }

    /// Configuration for this vehicle
    #[must_use]
    pub const fn config(&self) -> &VehicleConfig {
        &self.config
    }

    #[must_use]
    pub const fn get_state(&self) -> &VehicleState {
        &self.internal_state
    }

    /// Get the forward direction as a unit vector
    #[must_use]
    pub const fn get_forward_dir(&self) -> Vec3A {
        self.internal_state.phys.get_forward_dir()
    }

    /// Get the rightward direction as a unit vector
    #[must_use]
    pub fn get_right_dir(&self) -> Vec3A {
        self.internal_state.phys.get_right_dir()
    }

    /// Get the upward direction as a unit vector
    #[must_use]
    pub const fn get_up_dir(&self) -> Vec3A {
        self.internal_state.phys.get_up_dir()
    }

    pub const fn set_controls(&mut self, new_controls: VehicleControls) {
        self.internal_state.controls = new_controls;
    }

    /// Queues a collision-enter event for the start of the next tick
    pub fn on_collision_enter(&mut self, event: CollisionEvent) {
        self.pending_collisions.push(event);
    }

    #[must_use]
    pub fn has_pending_collisions(&self) -> bool {
        !self.pending_collisions.is_empty()
    }

    fn set_ground_state(&mut self, ground_state: GroundState) {
        if self.internal_state.ground_state != ground_state {
            debug!(
                "Vehicle {:?}: {:?} -> {ground_state:?}",
                self.body, self.internal_state.ground_state
            );
            self.internal_state.ground_state = ground_state;
        }
    }

    /// Arena collisions decide whether we landed upside-down
    fn apply_pending_collisions(&mut self, up_dir: Vec3A) {
        let mut events = std::mem::take(&mut self.pending_collisions);

        for event in events.drain(..) {
            if event.body != self.body {
                trace!(
                    "Vehicle {:?} ignoring collision addressed to {:?}",
                    self.body, event.body
                );
                continue;
            }

            if event.other != BodyCategory::Arena {
                continue;
            }

            if up_dir.dot(WORLD_DOWN) > 0.0 {
                self.set_ground_state(GroundState::Flipped);
            } else if self.internal_state.is_flipped() {
                self.set_ground_state(GroundState::Airborne);
            }
        }

        self.pending_collisions = events;
    }

    /// Steering, motor and anti-roll for every axle
    ///
    /// Returns the number of wheels with ground contact
    fn update_axles<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        input: &ResolvedInput,
        up_dir: Vec3A,
    ) -> u8 {
        let mut num_wheels_in_contact = 0u8;

        for (i, axle) in self.axles.iter().enumerate() {
            axle.apply_drive(world, input.motor_torque, input.steer_angle);

            let anti_roll = axle.compute_anti_roll(world, self.config.anti_roll);
            anti_roll.apply(world, self.body, up_dir);

            self.internal_state.wheels_with_contact[i] =
                [anti_roll.left.grounded, anti_roll.right.grounded];
            self.internal_state.last_anti_roll[i] = anti_roll.roll_force;

            num_wheels_in_contact +=
                u8::from(anti_roll.left.grounded) + u8::from(anti_roll.right.grounded);
        }

        num_wheels_in_contact
    }

    /// Wheel contact always wins over a flip
    fn update_ground_state(&mut self, num_wheels_in_contact: u8) {
        self.internal_state.num_wheels_in_contact = num_wheels_in_contact;

        let ground_state = if num_wheels_in_contact > 0 {
            GroundState::Grounded
        } else if self.internal_state.is_flipped() {
            GroundState::Flipped
        } else {
            GroundState::Airborne
        };

        self.set_ground_state(ground_state);
    }

    fn update_jump<W: PhysicsWorld + ?Sized>(
        &self,
        world: &mut W,
        jump_pressed: bool,
        up_dir: Vec3A,
    ) {
        if jump_pressed && self.internal_state.is_grounded() {
            debug!("Vehicle {:?} jumped", self.body);
            world.apply_central_impulse(self.body, up_dir * self.config.jump_impulse);
        }
    }

    fn update_air_torque<W: PhysicsWorld + ?Sized>(
        &self,
        world: &mut W,
        input: &ResolvedInput,
        tick_time: f32,
        rot_mat: &Mat3A,
    ) {
        let dir_forward = rot_mat.x_axis;
        let dir_right = -rot_mat.y_axis;
        let dir_up = rot_mat.z_axis;

        let torque = match self.internal_state.ground_state {
            GroundState::Grounded => return,
            GroundState::Airborne => {
                (dir_right * input.pitch * self.config.flip_torque_scale
                    + dir_up * input.yaw * self.config.spin_torque_scale)
                    * tick_time
            }
            // not scaled by tick time
            GroundState::Flipped => dir_forward * input.pitch * self.config.spin_torque_scale,
        };

        if torque != Vec3A::ZERO {
            world.apply_torque(self.body, torque);
        }
    }

    fn update_boost<W: PhysicsWorld + ?Sized>(
        &self,
        world: &mut W,
        boost: bool,
        forward_dir: Vec3A,
    ) {
        if boost {
            world.apply_central_impulse(self.body, forward_dir * self.config.boost_impulse);
        }
    }

    fn update_speed_and_down_force<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        up_dir: Vec3A,
    ) {
        self.internal_state.current_speed = world.linear_velocity(self.body).length();

        world.apply_central_force(
            self.body,
            -up_dir * self.internal_state.current_speed * self.config.down_force_scale,
        );
    }

    /// Runs one fixed step of the controller against `world`
    pub fn tick<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W, tick_time: f32) {
        let trans = world.body_transform(self.body);
        let rot_mat = trans.matrix3;

        self.apply_pending_collisions(rot_mat.z_axis);

        let input = self
            .internal_state
            .controls
            .resolve(&self.internal_state.prev_controls, &self.config);

        let num_wheels_in_contact = self.update_axles(world, &input, rot_mat.z_axis);
        self.update_ground_state(num_wheels_in_contact);

        self.update_jump(world, input.jump_pressed, rot_mat.z_axis);
        self.update_air_torque(world, &input, tick_time, &rot_mat);
        self.update_boost(world, input.boost, rot_mat.x_axis);

        self.update_speed_and_down_force(world, rot_mat.z_axis);

        self.internal_state.phys = PhysState::from_world(world, self.body);
        self.internal_state.prev_controls = self.internal_state.controls;
        self.internal_state.tick_count += 1;
    }

    /// Refreshes the physics snapshot after the world has stepped
    pub(crate) fn post_tick_update<W: PhysicsWorld + ?Sized>(&mut self, world: &W) {
        self.internal_state.phys = PhysState::from_world(world, self.body);
    }

    /// World pose of every wheel, left before right, axle by axle
    pub fn wheel_poses<'a, W: PhysicsWorld + ?Sized>(
        &'a self,
        world: &'a W,
    ) -> impl Iterator<Item = (WheelHandle, WheelPose)> + 'a {
        self.axles
            .iter()
            .flat_map(Axle::wheels)
            .map(|wheel| (wheel, world.wheel_world_pose(wheel)))
    }

    /// Copies wheel poses onto their cosmetic meshes, skipping wheels without one
    pub fn sync_visuals<W, V>(&self, world: &W, visuals: &mut V)
    where
        W: PhysicsWorld + ?Sized,
        V: WheelVisuals + ?Sized,
    {
        for (wheel, pose) in self.wheel_poses(world) {
            if let Some(visual) = visuals.visual_mut(wheel) {
                *visual = pose;
            }
        }
    }
}
