use std::ops::{Deref, DerefMut};

use crate::{PhysState, VehicleControls, consts::vehicle::MAX_AXLES};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GroundState {
    /// At least one wheel touches the ground
    Grounded,
    /// No wheel contact, assumed until the first contact
    #[default]
    Airborne,
    /// Resting upside-down against the arena, needs a recovery roll
    Flipped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleState {
    /// Physics state when last sampled, refreshed after every world step
    pub phys: PhysState,
    /// Controls to simulate the vehicle with
    pub controls: VehicleControls,
    /// Controls from the last tick (equals `controls` after a tick)
    pub prev_controls: VehicleControls,
    pub ground_state: GroundState,
    /// Magnitude of the linear velocity
    pub current_speed: f32,
    /// Whether each wheel had ground contact last tick, `[left, right]` per axle
    ///
    /// Slots past the vehicle's axle count are always false
    pub wheels_with_contact: [[bool; 2]; MAX_AXLES],
    pub num_wheels_in_contact: u8,
    /// Roll force of each axle last tick, zero past the axle count
    pub last_anti_roll: [f32; MAX_AXLES],
    pub tick_count: u64,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl VehicleState {
    pub const DEFAULT: Self = Self {
        phys: PhysState::DEFAULT,
        controls: VehicleControls::DEFAULT,
        prev_controls: VehicleControls::DEFAULT,
        ground_state: GroundState::Airborne,
        current_speed: 0.0,
        wheels_with_contact: [[false; 2]; MAX_AXLES],
        num_wheels_in_contact: 0,
        last_anti_roll: [0.0; MAX_AXLES],
        tick_count: 0,
    };

    #[must_use]
    pub const fn is_grounded(&self) -> bool {
        matches!(self.ground_state, GroundState::Grounded)
    }

    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        matches!(self.ground_state, GroundState::Flipped)
    }
}

impl Deref for VehicleState {
    type Target = PhysState;
    fn deref(&self) -> &Self::Target {
        &self.phys
    }
}

impl DerefMut for VehicleState {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.phys
    }
}
