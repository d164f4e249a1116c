//! ECS components for the blocks of a vehicle.
//!
//! Components are plain data structs with no methods.
//! Binding logic lives in the engine, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BlockFeatures, CommandFlags};

/// Block archetype. Every block built from the same shape shares `ident`,
/// which is the type tag used by "select all of type".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub ident: u32,
    pub name: String,
    pub features: BlockFeatures,
}

/// Geometric footprint, relative to the vehicle origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub offset: Vec2,
    /// Smallest enclosing radius (world units).
    pub radius: f32,
}

/// Fire-group binding of a weapon block. 0 means unbound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponBinding {
    pub binding_id: u8,
}

/// Command module state (attached to blocks with `BlockFeatures::COMMAND`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandModule {
    pub flags: CommandFlags,
}
