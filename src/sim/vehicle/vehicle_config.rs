use glam::Vec3A;

use crate::{
    consts::vehicle as vehicle_consts,
    error::{ConfigError, Result},
};

/// Tunables of a vehicle, fixed once the vehicle is built
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleConfig {
    /// Motor torque at full throttle, applied to every motorized wheel
    pub max_motor_torque: f32,
    /// Steer angle at full lock, in degrees
    pub max_steering_angle: f32,
    /// Reduces body roll, should be close to the suspension spring force
    pub anti_roll: f32,
    pub jump_impulse: f32,
    /// Applied every tick the boost button is held
    pub boost_impulse: f32,
    /// Air yaw, and the recovery roll while flipped
    pub spin_torque_scale: f32,
    /// Air pitch
    pub flip_torque_scale: f32,
    /// Down-force per unit of speed
    pub down_force_scale: f32,
    /// Written to the rigid body once, when the vehicle is built
    pub center_of_mass_offset: Vec3A,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl VehicleConfig {
    pub const DEFAULT: Self = Self {
        max_motor_torque: vehicle_consts::MAX_MOTOR_TORQUE,
        max_steering_angle: vehicle_consts::MAX_STEERING_ANGLE,
        anti_roll: vehicle_consts::ANTI_ROLL,
        jump_impulse: vehicle_consts::JUMP_IMPULSE,
        boost_impulse: vehicle_consts::BOOST_IMPULSE,
        spin_torque_scale: vehicle_consts::SPIN_TORQUE_SCALE,
        flip_torque_scale: vehicle_consts::FLIP_TORQUE_SCALE,
        down_force_scale: vehicle_consts::DOWN_FORCE_SCALE,
        center_of_mass_offset: vehicle_consts::CENTER_OF_MASS_OFFSET,
    };

    pub fn validate(&self) -> Result<()> {
        let tunables = [
            ("max_motor_torque", self.max_motor_torque),
            ("max_steering_angle", self.max_steering_angle),
            ("anti_roll", self.anti_roll),
            ("jump_impulse", self.jump_impulse),
            ("boost_impulse", self.boost_impulse),
            ("spin_torque_scale", self.spin_torque_scale),
            ("flip_torque_scale", self.flip_torque_scale),
            ("down_force_scale", self.down_force_scale),
        ];

        if let Some(&(field, value)) = tunables
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(ConfigError::InvalidTuning { field, value });
        }

        if !self.center_of_mass_offset.is_finite() {
            return Err(ConfigError::InvalidCenterOfMass(self.center_of_mass_offset));
        }

        Ok(())
    }
}
