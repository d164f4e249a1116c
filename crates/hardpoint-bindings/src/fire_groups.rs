//! Fire-group table: labels, fire modes and cached subtexts.
//!
//! Fire modes belong to the vehicle. The table mirrors them for the
//! duration of an activation and the engine writes every toggle through.

use hardpoint_core::constants::*;
use hardpoint_core::enums::FireMode;
use hardpoint_core::error::BindingError;

use crate::vehicle::Vehicle;

/// One binding slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireGroup {
    pub index: usize,
    pub label: String,
    mode: Option<FireMode>,
    subtext: Option<String>,
}

impl FireGroup {
    fn new(index: usize) -> Self {
        let label = if index < FIRE_KEY_COUNT {
            FIRE_KEY_LABELS[index]
        } else {
            FIRE_GROUP_NAMES[index]
        };
        let mode = (index <= FG_AUTO).then_some(FireMode::default());
        Self {
            index,
            label: label.to_string(),
            mode,
            subtext: mode.map(|m| m.subtext().to_string()),
        }
    }

    /// Hardpoints bound to this group carry this id.
    pub fn binding_id(&self) -> u8 {
        self.index as u8 + 1
    }

    /// Tooltip identifier of the group button.
    pub fn ident(&self) -> i32 {
        -(self.index as i32 + 1)
    }

    pub fn mode(&self) -> Option<FireMode> {
        self.mode
    }

    pub fn subtext(&self) -> Option<&str> {
        self.subtext.as_deref()
    }

    fn set_mode(&mut self, mode: FireMode) {
        self.mode = Some(mode);
        self.subtext = Some(mode.subtext().to_string());
    }
}

#[derive(Debug, Clone)]
pub struct FireGroupTable {
    groups: Vec<FireGroup>,
}

impl Default for FireGroupTable {
    fn default() -> Self {
        Self {
            groups: (0..FG_COUNT).map(FireGroup::new).collect(),
        }
    }
}

impl FireGroupTable {
    /// Mirror the vehicle's fire modes. Groups the vehicle has no mode for
    /// fall back to `FireAll`.
    pub fn load<V: Vehicle + ?Sized>(&mut self, vehicle: &V) {
        for group in self.groups.iter_mut().take(FIRE_MODE_GROUPS) {
            let mode = vehicle.fire_mode(group.index).unwrap_or_default();
            group.set_mode(mode);
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FireGroup> {
        self.groups.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FireGroup> {
        self.groups.iter()
    }

    pub fn label(&self, index: usize) -> Result<&str, BindingError> {
        self.groups
            .get(index)
            .map(|g| g.label.as_str())
            .ok_or(BindingError::GroupOutOfRange {
                index,
                count: self.groups.len(),
            })
    }

    pub fn fire_mode(&self, index: usize) -> Result<FireMode, BindingError> {
        self.groups
            .get(index)
            .and_then(FireGroup::mode)
            .ok_or(BindingError::FireModeOutOfRange {
                index,
                last: FG_AUTO,
            })
    }

    /// Flip `FireAll <-> RippleFire` and refresh the subtext. Groups without a
    /// fire mode are left alone and yield `None`.
    pub fn toggle_fire_mode(&mut self, index: usize) -> Option<FireMode> {
        let group = self.groups.get_mut(index)?;
        let mode = group.mode?.toggled();
        group.set_mode(mode);
        Some(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_keys_then_names() {
        let table = FireGroupTable::default();
        assert_eq!(table.label(0).unwrap(), "LMB");
        assert_eq!(table.label(FIRE_KEY_COUNT - 1).unwrap(), "Shift");
        assert_eq!(table.label(FG_AUTO).unwrap(), "Autofire");
        assert_eq!(table.label(FG_DEFENSE).unwrap(), "Point Defense");
        assert!(table.label(FG_COUNT).is_err());
    }

    #[test]
    fn test_fire_mode_defined_only_up_to_auto() {
        let table = FireGroupTable::default();
        for i in 0..=FG_AUTO {
            assert_eq!(table.fire_mode(i), Ok(FireMode::FireAll));
        }
        assert_eq!(
            table.fire_mode(FG_DEFENSE),
            Err(BindingError::FireModeOutOfRange {
                index: FG_DEFENSE,
                last: FG_AUTO
            })
        );
        assert!(table.get(FG_DEFENSE).unwrap().subtext().is_none());
    }

    #[test]
    fn test_toggle_updates_subtext() {
        let mut table = FireGroupTable::default();
        assert_eq!(table.toggle_fire_mode(2), Some(FireMode::RippleFire));
        assert_eq!(table.get(2).unwrap().subtext(), Some("Ripple Fire"));
        assert_eq!(table.toggle_fire_mode(2), Some(FireMode::FireAll));
        assert_eq!(table.get(2).unwrap().subtext(), Some("Fire All"));
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut table = FireGroupTable::default();
        assert_eq!(table.toggle_fire_mode(FG_DEFENSE), None);
        assert_eq!(table.toggle_fire_mode(FG_COUNT + 3), None);
        assert!(table.get(FG_DEFENSE).unwrap().mode().is_none());
    }

    #[test]
    fn test_group_identifiers() {
        let table = FireGroupTable::default();
        let idents: Vec<i32> = table.iter().map(FireGroup::ident).collect();
        assert_eq!(idents, vec![-1, -2, -3, -4, -5, -6]);
        assert_eq!(table.get(1).unwrap().binding_id(), 2);
    }
}
