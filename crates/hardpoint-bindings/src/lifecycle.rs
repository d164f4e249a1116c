//! Activation lifecycle: entering and leaving the binding screen.

use tracing::{info, warn};

use hardpoint_core::enums::{AiBehavior, ScreenPhase};
use hardpoint_core::types::Transform;

use crate::interface::BindingInterface;
use crate::vehicle::{BindingPersistence, Vehicle, VehicleProvider};
use crate::widgets::Button;

/// Outcome of leaving the binding screen.
#[derive(Debug)]
pub struct ExitReport<V> {
    /// The vehicle bound during the activation, handed back to its owner.
    pub vehicle: Option<V>,
    /// Bindings changed (or persistence is forced). With deferred
    /// persistence this is the caller's cue to write.
    pub bindings_changed: bool,
    /// The persistence collaborator was called and succeeded.
    pub persisted: bool,
}

impl<V: Vehicle> BindingInterface<V> {
    /// Enter the screen. Binds `target`, else a vehicle left over from a
    /// previous activation, else the provider's applied blueprint, else the
    /// player's vehicle. Returns whether a vehicle was bound.
    pub fn swap_in(&mut self, target: Option<V>, provider: &mut dyn VehicleProvider<V>) -> bool {
        self.phase = ScreenPhase::Active;
        self.tooltip.invalidate();
        let unsaved = self.engine.finish();
        self.hardpoint_buttons.clear();

        let leftover = self.vehicle.take();
        if target.is_some() && leftover.is_some() {
            warn!(
                unsaved,
                "replacing a vehicle that was never swapped out; its bindings are dropped"
            );
        }
        let vehicle = target
            .or(leftover)
            .or_else(|| provider.applied_blueprint())
            .or_else(|| provider.player_vehicle());
        provider.bindings_opened();

        let Some(mut vehicle) = vehicle else {
            info!("binding screen opened without a vehicle");
            return false;
        };

        self.saved_transform = vehicle.transform();
        vehicle.set_transform(Transform::IDENTITY);
        if let Some(flags) = vehicle.command_module().and_then(|b| vehicle.command_flags(b)) {
            self.ai_selector.selected = AiBehavior::from_flags(flags);
        }
        self.camera_inited = false;

        self.engine.begin(&vehicle);
        self.hardpoint_buttons = (0..self.engine.blocks().len())
            .map(|i| Button::new(i as i32))
            .collect();

        info!(
            blocks = vehicle.block_count(),
            hardpoints = self.engine.blocks().len(),
            "binding screen opened"
        );
        self.vehicle = Some(vehicle);
        true
    }

    /// Leave the screen. Flushes changed bindings, restores a live vehicle's
    /// pose and runtime weapon groups, and hands the vehicle back.
    pub fn swap_out(&mut self, persistence: &mut dyn BindingPersistence) -> ExitReport<V> {
        self.phase = ScreenPhase::Inactive;
        self.hardpoint_buttons.clear();
        self.tooltip.invalidate();

        let dirty = self.engine.finish();
        let Some(mut vehicle) = self.vehicle.take() else {
            return ExitReport {
                vehicle: None,
                bindings_changed: false,
                persisted: false,
            };
        };

        let bindings_changed = dirty || self.config.always_persist;
        let mut persisted = false;
        if bindings_changed && !self.config.defer_persistence {
            match persistence.write_bindings() {
                Ok(()) => persisted = true,
                Err(err) => warn!(%err, "failed to persist weapon bindings"),
            }
        }

        if vehicle.in_live_zone() {
            vehicle.set_transform(self.saved_transform);
            vehicle.apply_binding_effects();
        }

        info!(bindings_changed, persisted, "binding screen closed");
        ExitReport {
            vehicle: Some(vehicle),
            bindings_changed,
            persisted,
        }
    }
}
