//! Ordered list of the active vehicle's weapon hardpoints.
//!
//! Hardpoints are addressed by their position in this list, which is what
//! selections and hardpoint buttons store. The list is rebuilt on every
//! activation, so an index never outlives the vehicle it was taken from.

use hardpoint_core::enums::BlockFeatures;
use hardpoint_core::types::BlockRef;

use crate::vehicle::Vehicle;

/// One weapon-capable block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hardpoint {
    pub block: BlockRef,
    /// Type tag shared by every block of the same archetype.
    pub ident: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct BlockIndex {
    hardpoints: Vec<Hardpoint>,
}

impl BlockIndex {
    /// Collect every block with launcher, cannon or laser capability, in block order.
    pub fn scan<V: Vehicle + ?Sized>(vehicle: &V) -> Self {
        let hardpoints = (0..vehicle.block_count() as u32)
            .map(BlockRef)
            .filter_map(|block| {
                let spec = vehicle.block_spec(block)?;
                spec.features
                    .intersects(BlockFeatures::WEAPON)
                    .then(|| Hardpoint {
                        block,
                        ident: spec.ident,
                        name: spec.name,
                    })
            })
            .collect();
        Self { hardpoints }
    }

    pub fn clear(&mut self) {
        self.hardpoints.clear();
    }

    pub fn len(&self) -> usize {
        self.hardpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hardpoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Hardpoint> {
        self.hardpoints.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hardpoint> {
        self.hardpoints.iter()
    }

    /// Indices of every hardpoint sharing `index`'s type tag, in order.
    /// Empty if `index` is out of range.
    pub fn same_type(&self, index: usize) -> Vec<usize> {
        let Some(ident) = self.get(index).map(|h| h.ident) else {
            return Vec::new();
        };
        self.hardpoints
            .iter()
            .enumerate()
            .filter(|(_, h)| h.ident == ident)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn binding_id<V: Vehicle + ?Sized>(&self, index: usize, vehicle: &V) -> Option<u8> {
        vehicle.binding_id(self.get(index)?.block)
    }
}
