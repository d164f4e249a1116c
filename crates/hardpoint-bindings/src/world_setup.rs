//! Block archetypes and vehicle factories.
//!
//! Used by the host to build its demo vehicle and by tests to build
//! vehicles with known or seeded-random layouts.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hardpoint_core::components::{BlockSpec, Footprint};
use hardpoint_core::enums::BlockFeatures;
use hardpoint_core::types::BlockRef;

use crate::cluster::BlockCluster;

pub fn command_pod() -> BlockSpec {
    spec(1, "Command Pod", BlockFeatures::COMMAND | BlockFeatures::GENERATOR)
}

pub fn armor_plate() -> BlockSpec {
    spec(2, "Armor Plate", BlockFeatures::ARMOR)
}

pub fn thruster() -> BlockSpec {
    spec(3, "Thruster", BlockFeatures::THRUSTER)
}

pub fn autocannon() -> BlockSpec {
    spec(10, "Autocannon", BlockFeatures::CANNON)
}

pub fn pulse_laser() -> BlockSpec {
    spec(11, "Pulse Laser", BlockFeatures::LASER)
}

pub fn missile_launcher() -> BlockSpec {
    spec(12, "Missile Launcher", BlockFeatures::LAUNCHER)
}

pub fn flak_turret() -> BlockSpec {
    spec(
        13,
        "Flak Turret",
        BlockFeatures::CANNON | BlockFeatures::POINT_DEFENSE,
    )
}

/// Every archetype a factory may place, weapons and structure alike.
pub fn all_archetypes() -> Vec<BlockSpec> {
    vec![
        command_pod(),
        armor_plate(),
        thruster(),
        autocannon(),
        pulse_laser(),
        missile_launcher(),
        flak_turret(),
    ]
}

fn spec(ident: u32, name: &str, features: BlockFeatures) -> BlockSpec {
    BlockSpec {
        ident,
        name: name.to_string(),
        features,
    }
}

/// Place a block at `offset` with the given radius.
pub fn place(cluster: &mut BlockCluster, spec: BlockSpec, offset: Vec2, radius: f32) -> BlockRef {
    cluster.add_block(spec, Footprint { offset, radius })
}

/// A small symmetric gunship: command pod, armor, thrusters, paired cannons,
/// a laser, paired launchers and a flak turret.
pub fn spawn_demo_ship() -> BlockCluster {
    let mut cluster = BlockCluster::new();
    place(&mut cluster, command_pod(), Vec2::ZERO, 10.0);
    place(&mut cluster, armor_plate(), Vec2::new(20.0, 0.0), 10.0);
    place(&mut cluster, thruster(), Vec2::new(-20.0, 10.0), 6.0);
    place(&mut cluster, thruster(), Vec2::new(-20.0, -10.0), 6.0);
    place(&mut cluster, autocannon(), Vec2::new(30.0, 12.0), 5.0);
    place(&mut cluster, autocannon(), Vec2::new(30.0, -12.0), 5.0);
    place(&mut cluster, pulse_laser(), Vec2::new(36.0, 0.0), 5.0);
    place(&mut cluster, missile_launcher(), Vec2::new(8.0, 20.0), 6.0);
    place(&mut cluster, missile_launcher(), Vec2::new(8.0, -20.0), 6.0);
    place(&mut cluster, flak_turret(), Vec2::new(-6.0, 0.0), 4.0);
    cluster
}

/// A vehicle with a command pod and `count` random blocks on a grid.
pub fn spawn_random_ship(rng: &mut ChaCha8Rng, count: usize) -> BlockCluster {
    let archetypes = all_archetypes();
    let mut cluster = BlockCluster::new();
    place(&mut cluster, command_pod(), Vec2::ZERO, 10.0);
    for i in 0..count {
        let spec = archetypes[rng.gen_range(1..archetypes.len())].clone();
        let column = (i % 8) as f32 - 3.5;
        let row = (i / 8) as f32 + 1.0;
        let offset = Vec2::new(column * 12.0, row * 12.0);
        let radius = rng.gen_range(3.0..6.0);
        place(&mut cluster, spec, offset, radius);
    }
    cluster
}
