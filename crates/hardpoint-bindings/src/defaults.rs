//! Default weapon bindings.

use hardpoint_core::constants::*;
use hardpoint_core::enums::{BlockFeatures, FireMode};
use hardpoint_core::types::BlockRef;

use crate::vehicle::Vehicle;

/// Policy that reassigns every binding of a vehicle.
pub trait DefaultBindingPolicy: Send {
    fn apply_defaults(&self, vehicle: &mut dyn Vehicle);
}

/// Direct-fire weapons to the primary group, launchers to the secondary
/// group, point defense to the point-defense group. Fire modes go back to
/// `FireAll`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBindings;

impl StandardBindings {
    /// Default binding id for a block with `features`, or `None` for non-weapons.
    pub fn binding_for(features: BlockFeatures) -> Option<u8> {
        if !features.intersects(BlockFeatures::WEAPON) {
            None
        } else if features.contains(BlockFeatures::POINT_DEFENSE) {
            Some(DEFAULT_DEFENSE_BINDING)
        } else if features.contains(BlockFeatures::LAUNCHER) {
            Some(DEFAULT_LAUNCHER_BINDING)
        } else {
            Some(DEFAULT_DIRECT_FIRE_BINDING)
        }
    }
}

impl DefaultBindingPolicy for StandardBindings {
    fn apply_defaults(&self, vehicle: &mut dyn Vehicle) {
        for block in (0..vehicle.block_count() as u32).map(BlockRef) {
            let Some(spec) = vehicle.block_spec(block) else {
                continue;
            };
            if let Some(binding_id) = Self::binding_for(spec.features) {
                vehicle.set_binding_id(block, binding_id);
            }
        }
        for group in 0..FIRE_MODE_GROUPS {
            vehicle.set_fire_mode(group, FireMode::FireAll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_for_features() {
        assert_eq!(StandardBindings::binding_for(BlockFeatures::ARMOR), None);
        assert_eq!(
            StandardBindings::binding_for(BlockFeatures::CANNON),
            Some(DEFAULT_DIRECT_FIRE_BINDING)
        );
        assert_eq!(
            StandardBindings::binding_for(BlockFeatures::LASER),
            Some(DEFAULT_DIRECT_FIRE_BINDING)
        );
        assert_eq!(
            StandardBindings::binding_for(BlockFeatures::LAUNCHER),
            Some(DEFAULT_LAUNCHER_BINDING)
        );
        assert_eq!(
            StandardBindings::binding_for(BlockFeatures::CANNON | BlockFeatures::POINT_DEFENSE),
            Some(DEFAULT_DEFENSE_BINDING)
        );
    }
}
