use std::f32::consts::PI;

use ahash::AHashMap;
use carsoccer::{
    Arena, ChassisConfig, FlatWorld, VehicleConfig, VehicleControls, WheelPose, init_logging,
};
use glam::{Affine3A, Quat, Vec3};

fn main() {
    init_logging().unwrap();

    let mut world = FlatWorld::new();
    let rig = world.add_car(
        Affine3A::from_translation(Vec3::new(0.0, 0.0, 0.8)),
        &ChassisConfig::DEFAULT,
    );
    let flipped_rig = world.add_car(
        Affine3A::from_rotation_translation(Quat::from_rotation_x(PI), Vec3::new(0.0, 10.0, 1.5)),
        &ChassisConfig::DEFAULT,
    );

    let mut arena = Arena::new(world);
    let car_id = arena
        .add_vehicle(rig.body, &rig.axles(), VehicleConfig::DEFAULT)
        .unwrap();
    let flipped_id = arena
        .add_vehicle(flipped_rig.body, &flipped_rig.axles(), VehicleConfig::DEFAULT)
        .unwrap();

    let mut visuals: AHashMap<_, _> = rig
        .front_wheels
        .into_iter()
        .chain(rig.back_wheels)
        .map(|wheel| (wheel, WheelPose::default()))
        .collect();

    // (ticks, controls)
    let script = [
        (120, VehicleControls::DEFAULT),
        (240, VehicleControls::DEFAULT.with_vertical(1.0)),
        (240, VehicleControls::DEFAULT.with_vertical(1.0).with_horizontal(0.6)),
        (1, VehicleControls::DEFAULT.with_jump(true)),
        (90, VehicleControls::DEFAULT.with_vertical(-1.0)),
        (60, VehicleControls::DEFAULT.with_boost(true)),
    ];

    for (ticks, controls) in script {
        arena.set_vehicle_controls(car_id, controls);
        arena.set_vehicle_controls(flipped_id, VehicleControls::DEFAULT.with_vertical(1.0));
        arena.step(ticks);

        let Some(vehicle) = arena.get_vehicle(car_id) else {
            break;
        };
        vehicle.sync_visuals(arena.world(), &mut visuals);

        let state = vehicle.get_state();
        println!(
            "tick {}: {:?}, speed {:.2}, wheels {}",
            arena.tick_count(),
            state.ground_state,
            state.current_speed,
            state.num_wheels_in_contact
        );
        println!("{}", state.phys);
        println!("front left wheel at {}", visuals[&rig.front_wheels[0]].position);

        if let Some(flipped) = arena.get_vehicle_state(flipped_id) {
            println!(
                "second car: {:?}, up {}",
                flipped.ground_state,
                flipped.get_up_dir()
            );
        }
    }
}
