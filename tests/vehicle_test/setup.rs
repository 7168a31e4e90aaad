use carsoccer::{
    Arena, ArenaConfig, Axle, CarRig, ChassisConfig, FlatWorld, Vehicle, VehicleConfig,
    WheelHandle,
};
use glam::{Affine3A, Quat, Vec3};

use super::MockWorld;

pub const TICK_TIME: f32 = 1.0 / 120.0;

/// Front axle steers, back axle drives
pub const STANDARD_AXLES: [Axle; 2] = [
    Axle::new(WheelHandle(0), WheelHandle(1), true, false),
    Axle::new(WheelHandle(2), WheelHandle(3), false, true),
];

pub fn mock_vehicle(world: &mut MockWorld) -> Vehicle {
    mock_vehicle_with_config(world, VehicleConfig::DEFAULT)
}

pub fn mock_vehicle_with_config(world: &mut MockWorld, config: VehicleConfig) -> Vehicle {
    let body = world.body;
    Vehicle::new(world, body, &STANDARD_AXLES, config).unwrap()
}

/// Clears the command log, then runs one tick
pub fn tick_fresh(vehicle: &mut Vehicle, world: &mut MockWorld) {
    world.clear_commands();
    vehicle.tick(world, TICK_TIME);
}

/// Height of the body origin where a default car spawns with its wheels touching
pub const SPAWN_HEIGHT: f32 = 0.8;

pub fn spawn_transform(height: f32, rotation: Quat) -> Affine3A {
    Affine3A::from_rotation_translation(rotation, Vec3::new(0.0, 0.0, height))
}

/// An arena on a flat world with one default car
pub fn flat_arena_with_car(
    start: Affine3A,
    config: VehicleConfig,
) -> (Arena<FlatWorld>, CarRig, u64) {
    let mut world = FlatWorld::new();
    let rig = world.add_car(start, &ChassisConfig::DEFAULT);

    let mut arena = Arena::new_with_config(world, ArenaConfig::DEFAULT);
    let id = arena.add_vehicle(rig.body, &rig.axles(), config).unwrap();

    (arena, rig, id)
}

pub fn settled_arena() -> (Arena<FlatWorld>, CarRig, u64) {
    let (mut arena, rig, id) =
        flat_arena_with_car(spawn_transform(SPAWN_HEIGHT, Quat::IDENTITY), VehicleConfig::DEFAULT);
    arena.step(240);
    (arena, rig, id)
}

#[track_caller]
pub fn assert_vec_near(actual: glam::Vec3A, expected: glam::Vec3A, eps: f32) {
    assert!(
        (actual - expected).length() <= eps,
        "expected {expected}, got {actual} (eps {eps})"
    );
}
