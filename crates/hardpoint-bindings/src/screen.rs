//! Lock-guarded binding screen.
//!
//! Input handling and the frame pass may run on different threads. Both take
//! the same lock for their whole duration, so a frame never observes half of
//! an event's mutations.

use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use hardpoint_core::commands::InputEvent;
use hardpoint_core::state::BindingScreenView;

use crate::config::BindingConfig;
use crate::interface::BindingInterface;
use crate::lifecycle::ExitReport;
use crate::vehicle::{BindingPersistence, Vehicle, VehicleProvider};
use crate::view::{Projector, ViewFrame};

pub struct BindingScreen<V> {
    interface: Mutex<BindingInterface<V>>,
}

impl<V: Vehicle> BindingScreen<V> {
    pub fn new(config: BindingConfig) -> Self {
        Self::from_interface(BindingInterface::new(config))
    }

    pub fn from_interface(interface: BindingInterface<V>) -> Self {
        Self {
            interface: Mutex::new(interface),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BindingInterface<V>> {
        self.interface.lock().unwrap_or_else(|poisoned| {
            warn!("binding screen lock poisoned; continuing with inner state");
            poisoned.into_inner()
        })
    }

    pub fn swap_in(&self, target: Option<V>, provider: &mut dyn VehicleProvider<V>) -> bool {
        self.lock().swap_in(target, provider)
    }

    pub fn swap_out(&self, persistence: &mut dyn BindingPersistence) -> ExitReport<V> {
        self.lock().swap_out(persistence)
    }

    pub fn handle_event(&self, event: &InputEvent) -> bool {
        self.lock().handle_event(event)
    }

    pub fn render(&self, frame: &ViewFrame, projector: &mut dyn Projector) -> BindingScreenView {
        self.lock().render(frame, projector)
    }

    /// Run `f` with exclusive access to the interface.
    pub fn with<R>(&self, f: impl FnOnce(&mut BindingInterface<V>) -> R) -> R {
        f(&mut self.lock())
    }
}
