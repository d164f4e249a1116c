//! Collaborator contracts the binding screen consumes.
//!
//! The engine never owns vehicle data beyond one activation. It reads and
//! writes blocks through `Vehicle`, obtains vehicles through
//! `VehicleProvider`, and hands dirty bindings to `BindingPersistence`.

use glam::Vec2;

use hardpoint_core::components::{BlockSpec, Footprint};
use hardpoint_core::enums::{CommandFlags, FireMode};
use hardpoint_core::error::PersistError;
use hardpoint_core::types::{BlockRef, Transform};

/// Field-level access to a constructed vehicle.
///
/// Blocks are addressed by ordinal, `BlockRef(0..block_count())`. Accessors
/// return `None` for blocks that do not carry the requested data.
pub trait Vehicle {
    fn block_count(&self) -> usize;

    fn block_spec(&self, block: BlockRef) -> Option<BlockSpec>;

    fn footprint(&self, block: BlockRef) -> Option<Footprint>;

    /// Current fire-group binding of a weapon block.
    fn binding_id(&self, block: BlockRef) -> Option<u8>;

    /// Set a weapon block's binding. Returns the previous value, or `None`
    /// if the block cannot be bound.
    fn set_binding_id(&mut self, block: BlockRef, binding_id: u8) -> Option<u8>;

    fn command_flags(&self, block: BlockRef) -> Option<CommandFlags>;

    /// Returns false if the block has no command module.
    fn set_command_flags(&mut self, block: BlockRef, flags: CommandFlags) -> bool;

    /// The vehicle's primary command module, if any.
    fn command_module(&self) -> Option<BlockRef> {
        (0..self.block_count() as u32)
            .map(BlockRef)
            .find(|&block| self.command_flags(block).is_some())
    }

    /// Fire mode of group `group` (`0..=FG_AUTO`).
    fn fire_mode(&self, group: usize) -> Option<FireMode>;

    fn set_fire_mode(&mut self, group: usize, mode: FireMode) -> bool;

    fn transform(&self) -> Transform;

    fn set_transform(&mut self, transform: Transform);

    /// World position of a block under the current transform.
    fn block_position(&self, block: BlockRef) -> Option<Vec2> {
        let footprint = self.footprint(block)?;
        Some(self.transform().apply(footprint.offset))
    }

    /// Center and radius of the circle enclosing every block (vehicle-local).
    fn bounds(&self) -> (Vec2, f32);

    /// Whether the vehicle lives in a running zone rather than an editor sandbox.
    fn in_live_zone(&self) -> bool;

    /// Push the current bindings into the live instance's weapon groups.
    fn apply_binding_effects(&mut self);
}

/// Source of vehicles when the caller names no explicit target.
pub trait VehicleProvider<V> {
    /// Blueprint currently applied in the constructor, if any.
    fn applied_blueprint(&mut self) -> Option<V>;

    /// The vehicle the player is piloting, if any.
    fn player_vehicle(&mut self) -> Option<V>;

    /// Called once per activation, whether or not a vehicle was found.
    fn bindings_opened(&mut self) {}
}

/// Simple provider holding at most one blueprint and one player vehicle.
#[derive(Debug)]
pub struct Hangar<V> {
    pub blueprint: Option<V>,
    pub player: Option<V>,
    pub times_opened: u32,
}

impl<V> Default for Hangar<V> {
    fn default() -> Self {
        Self {
            blueprint: None,
            player: None,
            times_opened: 0,
        }
    }
}

impl<V> VehicleProvider<V> for Hangar<V> {
    fn applied_blueprint(&mut self) -> Option<V> {
        self.blueprint.take()
    }

    fn player_vehicle(&mut self) -> Option<V> {
        self.player.take()
    }

    fn bindings_opened(&mut self) {
        self.times_opened += 1;
    }
}

/// Writes changed bindings out when the screen closes.
pub trait BindingPersistence {
    fn write_bindings(&mut self) -> Result<(), PersistError>;
}

impl<F> BindingPersistence for F
where
    F: FnMut() -> Result<(), PersistError>,
{
    fn write_bindings(&mut self) -> Result<(), PersistError> {
        self()
    }
}
