use super::VehicleConfig;

/// Held state of the player's controls for one tick
///
/// Axes are normalized to [-1, 1]; buttons are true while held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleControls {
    /// Throttle on the ground, pitch in the air, recovery roll when flipped
    pub vertical: f32,
    /// Steering on the ground, yaw in the air
    ///
    /// Positive turns towards +Y, the vehicle's left
    pub horizontal: f32,
    pub jump: bool,
    pub boost: bool,
}

impl Default for VehicleControls {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl VehicleControls {
    pub const DEFAULT: Self = Self {
        vertical: 0.0,
        horizontal: 0.0,
        jump: false,
        boost: false,
    };

    #[must_use]
    pub const fn with_vertical(mut self, val: f32) -> Self {
        self.vertical = val;
        self
    }

    #[must_use]
    pub const fn with_horizontal(mut self, val: f32) -> Self {
        self.horizontal = val;
        self
    }

    #[must_use]
    pub const fn with_jump(mut self, val: bool) -> Self {
        self.jump = val;
        self
    }

    #[must_use]
    pub const fn with_boost(mut self, val: bool) -> Self {
        self.boost = val;
        self
    }

    #[must_use]
    pub const fn clamp(mut self) -> Self {
        self.vertical = self.vertical.clamp(-1.0, 1.0);
        self.horizontal = self.horizontal.clamp(-1.0, 1.0);
        self
    }

    /// Turns held controls into this tick's commands
    ///
    /// `prev` is the snapshot of the previous tick, used for button edges.
    #[must_use]
    pub fn resolve(self, prev: &Self, config: &VehicleConfig) -> ResolvedInput {
        let controls = self.clamp();

        ResolvedInput {
            motor_torque: controls.vertical * config.max_motor_torque,
            steer_angle: controls.horizontal * config.max_steering_angle,
            pitch: controls.vertical,
            yaw: controls.horizontal,
            jump_pressed: controls.jump && !prev.jump,
            boost: controls.boost,
        }
    }
}

/// Commands for a single tick, recomputed from scratch every tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedInput {
    pub motor_torque: f32,
    /// Degrees
    pub steer_angle: f32,
    pub pitch: f32,
    pub yaw: f32,
    /// Rising edge of the jump button
    pub jump_pressed: bool,
    pub boost: bool,
}
