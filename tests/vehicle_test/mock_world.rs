use carsoccer::{
    BodyCategory, BodyHandle, PhysicsWorld, WheelHandle, WheelHit, WheelPose,
};
use glam::{Affine3A, Quat, Vec3A};

/// Everything the vehicle asked the world to do to the body
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    CentralForce(Vec3A),
    CentralImpulse(Vec3A),
    ForceAt { force: Vec3A, pos: Vec3A },
    Torque(Vec3A),
}

#[derive(Clone, Copy, Debug)]
pub struct MockWheel {
    /// Body-local mount point
    pub mount: Vec3A,
    pub radius: f32,
    pub suspension_distance: f32,
    pub hit: Option<WheelHit>,
    pub steer_angle: f32,
    pub motor_torque: f32,
    pub steer_writes: u32,
    pub motor_writes: u32,
}

/// A world with a single body that never moves on its own
///
/// Wheel contacts are set by hand and every command is recorded.
pub struct MockWorld {
    pub body: BodyHandle,
    pub transform: Affine3A,
    pub linear_velocity: Vec3A,
    pub angular_velocity: Vec3A,
    pub center_of_mass: Vec3A,
    pub center_of_mass_writes: u32,
    pub wheels: Vec<MockWheel>,
    pub commands: Vec<Command>,
}

pub const MOCK_WHEEL_RADIUS: f32 = 0.35;
pub const MOCK_SUSPENSION_DISTANCE: f32 = 0.3;

impl MockWorld {
    /// Front-left, front-right, back-left, back-right; all airborne
    pub fn four_wheeled() -> Self {
        let mounts = [
            Vec3A::new(1.35, 0.8, -0.2),
            Vec3A::new(1.35, -0.8, -0.2),
            Vec3A::new(-1.3, 0.8, -0.2),
            Vec3A::new(-1.3, -0.8, -0.2),
        ];

        Self {
            body: BodyHandle(0),
            transform: Affine3A::from_translation(glam::Vec3::new(0.0, 0.0, 1.0)),
            linear_velocity: Vec3A::ZERO,
            angular_velocity: Vec3A::ZERO,
            center_of_mass: Vec3A::ZERO,
            center_of_mass_writes: 0,
            wheels: mounts
                .into_iter()
                .map(|mount| MockWheel {
                    mount,
                    radius: MOCK_WHEEL_RADIUS,
                    suspension_distance: MOCK_SUSPENSION_DISTANCE,
                    hit: None,
                    steer_angle: 0.0,
                    motor_torque: 0.0,
                    steer_writes: 0,
                    motor_writes: 0,
                })
                .collect(),
            commands: Vec::new(),
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.transform =
            Affine3A::from_rotation_translation(rotation, self.transform.translation.into());
        self
    }

    pub fn mount_world(&self, wheel: usize) -> Vec3A {
        self.transform.transform_point3a(self.wheels[wheel].mount)
    }

    /// Puts the ground under a wheel so its suspension sits at `travel`
    pub fn set_wheel_travel(&mut self, wheel: usize, travel: f32) {
        let down = -self.transform.matrix3.z_axis;
        let info = self.wheels[wheel];
        let point =
            self.mount_world(wheel) + down * (info.radius + travel * info.suspension_distance);

        self.wheels[wheel].hit = Some(WheelHit {
            point,
            normal: -down,
            category: BodyCategory::Arena,
        });
    }

    pub fn ground_all(&mut self, travel: f32) {
        for i in 0..self.wheels.len() {
            self.set_wheel_travel(i, travel);
        }
    }

    pub fn lift_all(&mut self) {
        for wheel in &mut self.wheels {
            wheel.hit = None;
        }
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn torques(&self) -> Vec<Vec3A> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::Torque(torque) => Some(*torque),
                _ => None,
            })
            .collect()
    }

    pub fn impulses(&self) -> Vec<Vec3A> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::CentralImpulse(impulse) => Some(*impulse),
                _ => None,
            })
            .collect()
    }

    pub fn central_forces(&self) -> Vec<Vec3A> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::CentralForce(force) => Some(*force),
                _ => None,
            })
            .collect()
    }

    pub fn forces_at(&self) -> Vec<(Vec3A, Vec3A)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::ForceAt { force, pos } => Some((*force, *pos)),
                _ => None,
            })
            .collect()
    }
}

impl PhysicsWorld for MockWorld {
    fn contains_body(&self, body: BodyHandle) -> bool {
        body == self.body
    }

    fn contains_wheel(&self, wheel: WheelHandle) -> bool {
        wheel.0 < self.wheels.len()
    }

    fn body_transform(&self, _body: BodyHandle) -> Affine3A {
        self.transform
    }

    fn linear_velocity(&self, _body: BodyHandle) -> Vec3A {
        self.linear_velocity
    }

    fn angular_velocity(&self, _body: BodyHandle) -> Vec3A {
        self.angular_velocity
    }

    fn center_of_mass(&self, _body: BodyHandle) -> Vec3A {
        self.center_of_mass
    }

    fn set_center_of_mass(&mut self, _body: BodyHandle, local_offset: Vec3A) {
        self.center_of_mass = local_offset;
        self.center_of_mass_writes += 1;
    }

    fn apply_central_force(&mut self, _body: BodyHandle, force: Vec3A) {
        self.commands.push(Command::CentralForce(force));
    }

    fn apply_central_impulse(&mut self, _body: BodyHandle, impulse: Vec3A) {
        self.commands.push(Command::CentralImpulse(impulse));
    }

    fn apply_force_at_position(&mut self, _body: BodyHandle, force: Vec3A, world_pos: Vec3A) {
        self.commands.push(Command::ForceAt {
            force,
            pos: world_pos,
        });
    }

    fn apply_torque(&mut self, _body: BodyHandle, torque: Vec3A) {
        self.commands.push(Command::Torque(torque));
    }

    fn wheel_ground_hit(&self, wheel: WheelHandle) -> Option<WheelHit> {
        self.wheels[wheel.0].hit
    }

    fn wheel_transform(&self, wheel: WheelHandle) -> Affine3A {
        Affine3A {
            matrix3: self.transform.matrix3,
            translation: self.mount_world(wheel.0),
        }
    }

    fn wheel_radius(&self, wheel: WheelHandle) -> f32 {
        self.wheels[wheel.0].radius
    }

    fn suspension_distance(&self, wheel: WheelHandle) -> f32 {
        self.wheels[wheel.0].suspension_distance
    }

    fn steer_angle(&self, wheel: WheelHandle) -> f32 {
        self.wheels[wheel.0].steer_angle
    }

    fn set_steer_angle(&mut self, wheel: WheelHandle, degrees: f32) {
        let wheel = &mut self.wheels[wheel.0];
        wheel.steer_angle = degrees;
        wheel.steer_writes += 1;
    }

    fn motor_torque(&self, wheel: WheelHandle) -> f32 {
        self.wheels[wheel.0].motor_torque
    }

    fn set_motor_torque(&mut self, wheel: WheelHandle, torque: f32) {
        let wheel = &mut self.wheels[wheel.0];
        wheel.motor_torque = torque;
        wheel.motor_writes += 1;
    }

    fn wheel_world_pose(&self, wheel: WheelHandle) -> WheelPose {
        WheelPose {
            position: self.mount_world(wheel.0),
            rotation: Quat::from_mat3a(&self.transform.matrix3),
        }
    }
}
