//! Binding assignment engine.
//!
//! `BindingAssignmentEngine` owns the per-activation state (block index,
//! selection, fire-group table, dirty flag) and performs every binding
//! mutation. The vehicle is passed in per call; the engine never stores it.

use tracing::{debug, info};

use hardpoint_core::constants::FG_AUTO;
use hardpoint_core::enums::{AiBehavior, CommandFlags, FireMode};
use hardpoint_core::error::BindingError;
use hardpoint_core::types::BlockRef;

use crate::block_index::BlockIndex;
use crate::defaults::DefaultBindingPolicy;
use crate::fire_groups::FireGroupTable;
use crate::selection::SelectionSet;
use crate::vehicle::Vehicle;

#[derive(Debug, Clone, Default)]
pub struct BindingAssignmentEngine {
    blocks: BlockIndex,
    selection: SelectionSet,
    groups: FireGroupTable,
    dirty: bool,
}

impl BindingAssignmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session on `vehicle`: drop the old selection, rescan hardpoints,
    /// mirror fire modes, clear the dirty flag.
    pub fn begin<V: Vehicle + ?Sized>(&mut self, vehicle: &V) {
        self.selection.clear();
        self.blocks = BlockIndex::scan(vehicle);
        self.groups.load(vehicle);
        self.dirty = false;
    }

    /// End the session: forget hardpoints and selection. Returns the dirty
    /// flag and clears it.
    pub fn finish(&mut self) -> bool {
        self.selection.clear();
        self.blocks.clear();
        std::mem::take(&mut self.dirty)
    }

    pub fn blocks(&self) -> &BlockIndex {
        &self.blocks
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn groups(&self) -> &FireGroupTable {
        &self.groups
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Press on hardpoint `index`: select it alone, or every hardpoint of its
    /// type on a double-click.
    pub fn select_hardpoint(&mut self, index: usize, double_click: bool) -> Result<(), BindingError> {
        if index >= self.blocks.len() {
            return Err(BindingError::HardpointOutOfRange {
                index,
                count: self.blocks.len(),
            });
        }
        if double_click {
            self.selection.select_all_of_type(index, &self.blocks);
        } else {
            self.selection.select_single(index);
        }
        debug!(index, double_click, selected = self.selection.len(), "hardpoint selection");
        Ok(())
    }

    /// Empty the selection. Returns true if anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear()
    }

    /// Bind every selected hardpoint to `group_id` (1-based) and clear the
    /// selection. Returns whether any binding changed; the dirty flag is set
    /// only then and is never cleared here.
    pub fn assign_selection_to_group<V: Vehicle + ?Sized>(
        &mut self,
        vehicle: &mut V,
        group_id: u8,
    ) -> Result<bool, BindingError> {
        let count = self.groups.len();
        if group_id == 0 || group_id as usize > count {
            return Err(BindingError::BindingOutOfRange {
                binding_id: group_id,
                count,
            });
        }

        let mut changed = false;
        for index in self.selection.iter() {
            let Some(hardpoint) = self.blocks.get(index) else {
                continue;
            };
            let previous = vehicle.set_binding_id(hardpoint.block, group_id);
            changed |= previous.is_some_and(|old| old != group_id);
        }
        let assigned = self.selection.len();
        self.selection.clear();
        self.dirty |= changed;

        info!(group_id, assigned, changed, "assigned hardpoints to fire group");
        Ok(changed)
    }

    /// Flip the fire mode of group `index` and write it to the vehicle.
    pub fn toggle_group_fire_mode<V: Vehicle + ?Sized>(
        &mut self,
        vehicle: &mut V,
        index: usize,
    ) -> Result<FireMode, BindingError> {
        let mode = self
            .groups
            .toggle_fire_mode(index)
            .ok_or(BindingError::FireModeOutOfRange {
                index,
                last: FG_AUTO,
            })?;
        vehicle.set_fire_mode(index, mode);
        self.dirty = true;
        info!(group = index, ?mode, "toggled fire mode");
        Ok(mode)
    }

    /// Run the default-binding policy. Always marks the session dirty.
    pub fn reset_to_defaults(&mut self, vehicle: &mut dyn Vehicle, policy: &dyn DefaultBindingPolicy) {
        policy.apply_defaults(vehicle);
        self.groups.load(&*vehicle);
        self.dirty = true;
        info!("reset weapon bindings to defaults");
    }

    /// Replace the AI behavior bits on every command module. Always marks the
    /// session dirty, even when the behavior was already set. Returns the
    /// number of modules updated.
    pub fn set_ai_behavior<V: Vehicle + ?Sized>(&mut self, vehicle: &mut V, behavior: AiBehavior) -> usize {
        let mut updated = 0;
        for block in (0..vehicle.block_count() as u32).map(BlockRef) {
            let Some(flags) = vehicle.command_flags(block) else {
                continue;
            };
            let flags = (flags - CommandFlags::AI_BEHAVIOR) | behavior.flag();
            if vehicle.set_command_flags(block, flags) {
                updated += 1;
            }
        }
        self.dirty = true;
        info!(behavior = behavior.label(), updated, "set AI behavior");
        updated
    }
}
