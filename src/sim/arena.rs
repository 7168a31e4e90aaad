use ahash::AHashMap;
use log::{info, trace};

use super::{ArenaConfig, Axle, Vehicle, VehicleConfig, VehicleControls, VehicleState};
use crate::{
    consts::arena::{MAX_TICK_RATE, MIN_TICK_RATE},
    error::{ConfigError, Result},
    physics::{BodyHandle, CollisionEvent, SimulationWorld},
};

/// Owns a physics world and every vehicle driving in it
pub struct Arena<W: SimulationWorld> {
    config: ArenaConfig,
    tick_time: f32,
    tick_count: u64,
    world: W,
    /// Do NOT add/remove vehicles by adding/removing them from the hashmap.
    vehicles: AHashMap<u64, Vehicle>,
    last_vehicle_id: u64,
    collision_events: Vec<CollisionEvent>,
}

impl<W: SimulationWorld> Arena<W> {
    #[must_use]
    pub fn new(world: W) -> Self {
        Self::new_with_config(world, ArenaConfig::DEFAULT)
    }

    pub fn new_with_config(world: W, config: ArenaConfig) -> Self {
        assert!(
            config.tick_rate >= MIN_TICK_RATE,
            "tick_rate must be at least {MIN_TICK_RATE}"
        );
        assert!(
            config.tick_rate <= MAX_TICK_RATE,
            "tick_rate must not be greater than {MAX_TICK_RATE}"
        );

        info!("Arena created at {} ticks per second", config.tick_rate);

        Self {
            tick_time: 1.0 / config.tick_rate,
            config,
            tick_count: 0,
            world,
            vehicles: AHashMap::new(),
            last_vehicle_id: 0,
            collision_events: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ArenaConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn tick_time(&self) -> f32 {
        self.tick_time
    }

    #[inline]
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[inline]
    #[must_use]
    pub const fn world(&self) -> &W {
        &self.world
    }

    /// Direct access to the world, e.g. to teleport a body
    #[inline]
    pub const fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Adds a vehicle driving `body`,
    /// returning the id of the vehicle.
    pub fn add_vehicle(
        &mut self,
        body: BodyHandle,
        axles: &[Axle],
        config: VehicleConfig,
    ) -> Result<u64> {
        if self.vehicles.values().any(|vehicle| vehicle.body() == body) {
            return Err(ConfigError::BodyAlreadyOwned(body));
        }

        let vehicle = Vehicle::new(&mut self.world, body, axles, config)?;

        self.last_vehicle_id += 1;
        self.vehicles.insert(self.last_vehicle_id, vehicle);
        Ok(self.last_vehicle_id)
    }

    /// Removes a vehicle, its body stays in the world
    pub fn remove_vehicle(&mut self, id: u64) -> Option<Vehicle> {
        self.vehicles.remove(&id)
    }

    #[must_use]
    pub fn get_vehicle(&self, id: u64) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn get_vehicle_mut(&mut self, id: u64) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    #[must_use]
    pub fn get_vehicle_state(&self, id: u64) -> Option<&VehicleState> {
        self.vehicles.get(&id).map(Vehicle::get_state)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = (u64, &Vehicle)> {
        self.vehicles.iter().map(|(&id, vehicle)| (id, vehicle))
    }

    #[must_use]
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns false if no vehicle has this id
    pub fn set_vehicle_controls(&mut self, id: u64, controls: VehicleControls) -> bool {
        let Some(vehicle) = self.vehicles.get_mut(&id) else {
            return false;
        };

        vehicle.set_controls(controls);
        true
    }

    fn internal_step(&mut self) {
        for vehicle in self.vehicles.values_mut() {
            vehicle.tick(&mut self.world, self.tick_time);
        }

        self.world.step(self.tick_time);

        for vehicle in self.vehicles.values_mut() {
            vehicle.post_tick_update(&self.world);
        }

        self.world.drain_collision_events(&mut self.collision_events);
        for event in self.collision_events.drain(..) {
            match self
                .vehicles
                .values_mut()
                .find(|vehicle| vehicle.body() == event.body)
            {
                Some(vehicle) => vehicle.on_collision_enter(event),
                None => trace!("No vehicle drives {:?}, dropping collision", event.body),
            }
        }

        self.tick_count += 1;
    }

    pub fn step(&mut self, ticks_to_simulate: u32) {
        for _ in 0..ticks_to_simulate {
            self.internal_step();
        }
    }
}
