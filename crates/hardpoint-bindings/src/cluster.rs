//! hecs-backed vehicle: one entity per block.
//!
//! `BlockCluster` keeps an ordered entity list so block ordinals are stable
//! regardless of archetype iteration order.

use glam::Vec2;
use hecs::{Entity, EntityBuilder, World};

use hardpoint_core::components::*;
use hardpoint_core::constants::{FG_COUNT, FIRE_MODE_GROUPS, UNBOUND};
use hardpoint_core::enums::{BlockFeatures, CommandFlags, FireMode};
use hardpoint_core::types::{BlockRef, Transform};

use crate::vehicle::Vehicle;

/// A constructed vehicle.
pub struct BlockCluster {
    world: World,
    blocks: Vec<Entity>,
    transform: Transform,
    fire_modes: [FireMode; FIRE_MODE_GROUPS],
    /// Zone the vehicle is simulated in. `None` for an editor sandbox.
    zone: Option<u32>,
    /// Weapons per group as seen by the live instance. Index = binding id - 1.
    armed_groups: Vec<Vec<BlockRef>>,
}

impl Default for BlockCluster {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCluster {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            blocks: Vec::new(),
            transform: Transform::IDENTITY,
            fire_modes: [FireMode::default(); FIRE_MODE_GROUPS],
            zone: None,
            armed_groups: vec![Vec::new(); FG_COUNT],
        }
    }

    /// Spawn a block. Weapons start unbound; command blocks get an empty
    /// command module.
    pub fn add_block(&mut self, spec: BlockSpec, footprint: Footprint) -> BlockRef {
        let mut builder = EntityBuilder::new();
        if spec.features.intersects(BlockFeatures::WEAPON) {
            builder.add(WeaponBinding {
                binding_id: UNBOUND,
            });
        }
        if spec.features.contains(BlockFeatures::COMMAND) {
            builder.add(CommandModule::default());
        }
        builder.add(spec).add(footprint);

        let entity = self.world.spawn(builder.build());
        self.blocks.push(entity);
        BlockRef(self.blocks.len() as u32 - 1)
    }

    pub fn entity(&self, block: BlockRef) -> Option<Entity> {
        self.blocks.get(block.index()).copied()
    }

    pub fn zone(&self) -> Option<u32> {
        self.zone
    }

    pub fn set_zone(&mut self, zone: Option<u32>) {
        self.zone = zone;
    }

    /// Weapons the live instance fires for `binding_id` (1-based).
    pub fn armed_group(&self, binding_id: u8) -> &[BlockRef] {
        match (binding_id as usize).checked_sub(1) {
            Some(slot) if slot < self.armed_groups.len() => &self.armed_groups[slot],
            _ => &[],
        }
    }

    fn component<T: hecs::Component + Copy>(&self, block: BlockRef) -> Option<T> {
        let entity = self.entity(block)?;
        self.world.get::<&T>(entity).ok().map(|c| *c)
    }
}

impl Vehicle for BlockCluster {
    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn block_spec(&self, block: BlockRef) -> Option<BlockSpec> {
        let entity = self.entity(block)?;
        self.world
            .get::<&BlockSpec>(entity)
            .ok()
            .map(|spec| (*spec).clone())
    }

    fn footprint(&self, block: BlockRef) -> Option<Footprint> {
        self.component::<Footprint>(block)
    }

    fn binding_id(&self, block: BlockRef) -> Option<u8> {
        self.component::<WeaponBinding>(block).map(|b| b.binding_id)
    }

    fn set_binding_id(&mut self, block: BlockRef, binding_id: u8) -> Option<u8> {
        let entity = self.entity(block)?;
        let mut binding = self.world.get::<&mut WeaponBinding>(entity).ok()?;
        Some(std::mem::replace(&mut binding.binding_id, binding_id))
    }

    fn command_flags(&self, block: BlockRef) -> Option<CommandFlags> {
        self.component::<CommandModule>(block).map(|c| c.flags)
    }

    fn set_command_flags(&mut self, block: BlockRef, flags: CommandFlags) -> bool {
        let Some(entity) = self.entity(block) else {
            return false;
        };
        match self.world.get::<&mut CommandModule>(entity) {
            Ok(mut module) => {
                module.flags = flags;
                true
            }
            Err(_) => false,
        }
    }

    fn fire_mode(&self, group: usize) -> Option<FireMode> {
        self.fire_modes.get(group).copied()
    }

    fn set_fire_mode(&mut self, group: usize, mode: FireMode) -> bool {
        match self.fire_modes.get_mut(group) {
            Some(slot) => {
                *slot = mode;
                true
            }
            None => false,
        }
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn bounds(&self) -> (Vec2, f32) {
        let footprints: Vec<Footprint> = self
            .world
            .query::<&Footprint>()
            .iter()
            .map(|(_, f)| *f)
            .collect();
        if footprints.is_empty() {
            return (Vec2::ZERO, 0.0);
        }

        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for f in &footprints {
            min = min.min(f.offset - Vec2::splat(f.radius));
            max = max.max(f.offset + Vec2::splat(f.radius));
        }
        let center = (min + max) / 2.0;
        let radius = footprints
            .iter()
            .map(|f| f.offset.distance(center) + f.radius)
            .fold(0.0, f32::max);
        (center, radius)
    }

    fn in_live_zone(&self) -> bool {
        self.zone.is_some()
    }

    fn apply_binding_effects(&mut self) {
        for group in &mut self.armed_groups {
            group.clear();
        }
        for (ordinal, &entity) in self.blocks.iter().enumerate() {
            let Ok(binding) = self.world.get::<&WeaponBinding>(entity) else {
                continue;
            };
            if let Some(slot) = (binding.binding_id as usize).checked_sub(1) {
                if let Some(group) = self.armed_groups.get_mut(slot) {
                    group.push(BlockRef(ordinal as u32));
                }
            }
        }
    }
}
