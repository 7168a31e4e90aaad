use glam::Vec3A;

pub const GRAVITY_Z: f32 = -9.81;

/// Direction the vehicle's up axis is compared against to detect an inverted landing
pub const WORLD_DOWN: Vec3A = Vec3A::NEG_Z;

pub mod vehicle {
    use glam::Vec3A;

    pub const MAX_AXLES: usize = 4;
    pub const MAX_WHEELS: usize = MAX_AXLES * 2;

    pub const MAX_MOTOR_TORQUE: f32 = 400.0;
    /// Degrees
    pub const MAX_STEERING_ANGLE: f32 = 30.0;
    /// Should roughly match the suspension spring force
    pub const ANTI_ROLL: f32 = 35_000.0;
    pub const JUMP_IMPULSE: f32 = 7_000.0;
    /// Applied every tick the boost button is held
    pub const BOOST_IMPULSE: f32 = 400.0;
    /// Flipped roll torque in N·m, and airborne yaw once scaled by tick time.
    /// Must beat the gravity moment of an inverted chassis resting on a roof edge.
    pub const SPIN_TORQUE_SCALE: f32 = 40_000.0;
    /// Airborne pitch, scaled by tick time: about 8300 N·m at 120 Hz
    pub const FLIP_TORQUE_SCALE: f32 = 1_000_000.0;
    pub const DOWN_FORCE_SCALE: f32 = 1.0;
    pub const CENTER_OF_MASS_OFFSET: Vec3A = Vec3A::new(0.0, 0.0, -0.3);

    /// Travel ratio reported for a wheel without ground contact
    pub const UNGROUNDED_TRAVEL: f32 = 1.0;
}

pub mod arena {
    pub const MIN_TICK_RATE: f32 = 15.0;
    pub const MAX_TICK_RATE: f32 = 120.0;
    pub const DEFAULT_TICK_RATE: f32 = 120.0;
}

pub mod flat_world {
    use glam::Vec3A;

    pub const CHASSIS_MASS: f32 = 1_500.0;
    /// Full size of the chassis box (NOT the half-size/extent)
    pub const CHASSIS_SIZE: Vec3A = Vec3A::new(4.0, 1.9, 0.8);

    pub const FRONT_WHEEL_RADIUS: f32 = 0.35;
    pub const BACK_WHEEL_RADIUS: f32 = 0.38;
    pub const SUSPENSION_DISTANCE: f32 = 0.3;
    pub const FRONT_WHEEL_OFFSET: Vec3A = Vec3A::new(1.35, 0.8, -0.2);
    pub const BACK_WHEEL_OFFSET: Vec3A = Vec3A::new(-1.3, 0.8, -0.2);

    pub const SUSPENSION_STIFFNESS: f32 = 35_000.0;
    pub const SUSPENSION_DAMPING: f32 = 4_500.0;
    pub const TIRE_FRICTION: f32 = 1.1;
    /// Fraction of the lateral contact velocity removed per tick
    pub const LATERAL_GRIP: f32 = 0.5;
    /// Longitudinal resistance per unit of contact speed (N per m/s)
    pub const ROLLING_RESISTANCE: f32 = 60.0;

    pub const LINEAR_DAMPING: f32 = 0.01;
    pub const ANGULAR_DAMPING: f32 = 0.05;
    /// Fraction of the penetration depth corrected per tick
    pub const CONTACT_CORRECTION: f32 = 0.8;
    pub const CONTACT_FRICTION: f32 = 0.5;
}
