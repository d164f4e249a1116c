//! Event dispatch for the binding screen.
//!
//! Order: group buttons, hardpoint buttons, then selection cancel, the reset
//! button, and the AI behavior selector. Anything left over falls through
//! to other handlers (reported as unhandled).

use glam::Vec2;
use tracing::error;

use hardpoint_core::commands::{InputEvent, MouseButton};
use hardpoint_core::constants::FG_AUTO;
use hardpoint_core::error::BindingError;

use crate::interface::BindingInterface;
use crate::vehicle::Vehicle;

/// Decides whether a press completes a double-click.
pub trait DoubleClick: Send {
    fn is_double_click(&mut self, event: &InputEvent) -> bool;
}

/// Same button pressed twice within a time window and a small distance.
#[derive(Debug, Clone)]
pub struct ClickTimer {
    window_secs: f64,
    slop: f32,
    last: Option<(MouseButton, Vec2, f64)>,
}

impl ClickTimer {
    pub fn new(window_secs: f64, slop: f32) -> Self {
        Self {
            window_secs,
            slop,
            last: None,
        }
    }
}

impl DoubleClick for ClickTimer {
    fn is_double_click(&mut self, event: &InputEvent) -> bool {
        let InputEvent::MouseDown {
            button,
            pos,
            time_secs,
        } = *event
        else {
            return false;
        };
        let double = self.last.is_some_and(|(last_button, last_pos, last_time)| {
            last_button == button
                && time_secs - last_time <= self.window_secs
                && last_pos.distance(pos) <= self.slop
        });
        // A third press starts a new pair.
        self.last = if double {
            None
        } else {
            Some((button, pos, time_secs))
        };
        double
    }
}

impl<V: Vehicle> BindingInterface<V> {
    /// Feed one input event. Returns whether the screen consumed it.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if self.vehicle.is_none() {
            return false;
        }

        let mut handled = false;

        for group in 0..self.group_buttons.len() {
            let response = self.group_buttons[group].handle_event(event);
            if !response.handled {
                continue;
            }
            handled = true;
            if !self.engine.selection().is_empty() {
                if event.is_release() {
                    self.commit_to_group(group);
                }
            } else if response.activated && group <= FG_AUTO {
                self.toggle_group(group);
            }
        }

        for hardpoint in 0..self.hardpoint_buttons.len() {
            let response = self.hardpoint_buttons[hardpoint].handle_event(event);
            if !response.handled {
                continue;
            }
            handled = true;
            if response.pressed {
                let double = self.clicks.is_double_click(event);
                report(self.engine.select_hardpoint(hardpoint, double));
            }
        }

        if handled {
            // Controls later in the order never see this release.
            if event.is_release() {
                self.reset_button.cancel_hold();
                self.ai_selector.cancel_holds();
            }
            return true;
        }

        if (event.is_press() || event.is_escape()) && self.engine.clear_selection() {
            return true;
        }

        let reset = self.reset_button.handle_event(event);
        if reset.handled {
            if event.is_release() {
                self.ai_selector.cancel_holds();
            }
            if reset.activated {
                self.reset_defaults();
            }
            return true;
        }

        // The selector is only shown for vehicles with a command module.
        let has_command = self
            .vehicle
            .as_ref()
            .is_some_and(|v| v.command_module().is_some());
        if !has_command {
            return false;
        }

        let (ai_handled, ai_choice) = self.ai_selector.handle_event(event);
        if let Some(behavior) = ai_choice {
            if let Some(vehicle) = self.vehicle.as_mut() {
                self.engine.set_ai_behavior(vehicle, behavior);
            }
        }
        ai_handled
    }

    fn commit_to_group(&mut self, group: usize) {
        let Some(vehicle) = self.vehicle.as_mut() else {
            return;
        };
        report(self.engine.assign_selection_to_group(vehicle, group as u8 + 1));
    }

    fn toggle_group(&mut self, group: usize) {
        let Some(vehicle) = self.vehicle.as_mut() else {
            return;
        };
        if report(self.engine.toggle_group_fire_mode(vehicle, group)).is_some() {
            // The group tooltip carries the mode hint.
            self.tooltip.invalidate();
        }
    }

    fn reset_defaults(&mut self) {
        let Some(vehicle) = self.vehicle.as_mut() else {
            return;
        };
        self.engine.reset_to_defaults(vehicle, self.policy.as_ref());
        self.tooltip.invalidate();
    }
}

/// Log a contract violation from an engine call made by the UI. Debug
/// builds panic so wiring bugs surface in tests.
fn report<T>(result: Result<T, BindingError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!(%err, "binding screen contract violation");
            if cfg!(debug_assertions) {
                panic!("binding screen contract violation: {err}");
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(pos: Vec2, time_secs: f64) -> InputEvent {
        InputEvent::MouseDown {
            button: MouseButton::Primary,
            pos,
            time_secs,
        }
    }

    #[test]
    fn test_click_timer_window_and_slop() {
        let mut clicks = ClickTimer::new(0.35, 6.0);
        assert!(!clicks.is_double_click(&down(Vec2::ZERO, 0.0)));
        assert!(clicks.is_double_click(&down(Vec2::new(3.0, 0.0), 0.2)));
        // Third press starts over.
        assert!(!clicks.is_double_click(&down(Vec2::ZERO, 0.3)));
        assert!(!clicks.is_double_click(&down(Vec2::ZERO, 1.0)));
        assert!(!clicks.is_double_click(&down(Vec2::new(20.0, 0.0), 1.1)));
    }

    #[test]
    fn test_report_passes_values_through() {
        assert_eq!(report::<u8>(Ok(3)), Some(3));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "contract violation")]
    fn test_report_panics_in_debug_builds() {
        report::<()>(Err(BindingError::HardpointOutOfRange { index: 9, count: 2 }));
    }
}
