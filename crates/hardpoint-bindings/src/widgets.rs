//! Rect buttons and the AI behavior selector.

use hardpoint_core::commands::{InputEvent, MouseButton};
use hardpoint_core::enums::AiBehavior;
use hardpoint_core::types::Rect;

/// What a button made of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonResponse {
    /// A press or release landed inside the button.
    pub handled: bool,
    /// Primary press inside the button.
    pub pressed: bool,
    /// Primary release inside a button that was pressed.
    pub activated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Button {
    pub ident: i32,
    pub rect: Rect,
    pub visible: bool,
    pub hovered: bool,
    held: bool,
}

impl Button {
    pub fn new(ident: i32) -> Self {
        Self {
            ident,
            visible: true,
            ..Default::default()
        }
    }

    /// Forget a press whose release went to another control.
    pub fn cancel_hold(&mut self) {
        self.held = false;
    }

    fn hit(&self, pos: glam::Vec2) -> bool {
        self.visible && self.rect.contains(pos)
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> ButtonResponse {
        match *event {
            InputEvent::MouseMove { pos } => {
                self.hovered = self.hit(pos);
                ButtonResponse::default()
            }
            InputEvent::MouseDown { button, pos, .. } if self.hit(pos) => {
                let pressed = button == MouseButton::Primary;
                self.held |= pressed;
                self.hovered = true;
                ButtonResponse {
                    handled: true,
                    pressed,
                    activated: false,
                }
            }
            InputEvent::MouseUp { button, pos } => {
                let was_held = std::mem::take(&mut self.held);
                if !self.hit(pos) {
                    return ButtonResponse::default();
                }
                ButtonResponse {
                    handled: true,
                    pressed: false,
                    activated: was_held && button == MouseButton::Primary,
                }
            }
            _ => ButtonResponse::default(),
        }
    }
}

/// Row of option buttons, one per `AiBehavior`.
#[derive(Debug, Clone)]
pub struct AiSelector {
    pub selected: AiBehavior,
    options: Vec<(AiBehavior, Button)>,
}

impl Default for AiSelector {
    fn default() -> Self {
        Self {
            selected: AiBehavior::default(),
            options: AiBehavior::ALL
                .iter()
                .enumerate()
                .map(|(i, &behavior)| (behavior, Button::new(i as i32)))
                .collect(),
        }
    }
}

impl AiSelector {
    pub fn options_mut(&mut self) -> impl Iterator<Item = (AiBehavior, &mut Button)> {
        self.options
            .iter_mut()
            .map(|(behavior, button)| (*behavior, button))
    }

    /// Returns `(handled, activated behavior)`. An activation also becomes
    /// the selector's current choice.
    pub fn cancel_holds(&mut self) {
        for (_, button) in &mut self.options {
            button.cancel_hold();
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> (bool, Option<AiBehavior>) {
        let mut handled = false;
        let mut chosen = None;
        for (behavior, button) in &mut self.options {
            let response = button.handle_event(event);
            handled |= response.handled;
            if response.activated {
                chosen = Some(*behavior);
            }
        }
        if let Some(behavior) = chosen {
            self.selected = behavior;
        }
        (handled, chosen)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn button_at(center: Vec2) -> Button {
        let mut button = Button::new(0);
        button.rect = Rect::new(center, Vec2::new(10.0, 10.0));
        button
    }

    fn down(pos: Vec2) -> InputEvent {
        InputEvent::MouseDown {
            button: MouseButton::Primary,
            pos,
            time_secs: 0.0,
        }
    }

    fn up(pos: Vec2) -> InputEvent {
        InputEvent::MouseUp {
            button: MouseButton::Primary,
            pos,
        }
    }

    #[test]
    fn test_press_then_release_activates() {
        let mut button = button_at(Vec2::new(50.0, 50.0));
        let press = button.handle_event(&down(Vec2::new(52.0, 50.0)));
        assert!(press.handled && press.pressed && !press.activated);
        let release = button.handle_event(&up(Vec2::new(50.0, 48.0)));
        assert!(release.handled && release.activated);
    }

    #[test]
    fn test_release_without_press_is_handled_not_activated() {
        let mut button = button_at(Vec2::new(50.0, 50.0));
        let release = button.handle_event(&up(Vec2::new(50.0, 50.0)));
        assert!(release.handled);
        assert!(!release.activated);
    }

    #[test]
    fn test_release_outside_cancels_press() {
        let mut button = button_at(Vec2::new(50.0, 50.0));
        button.handle_event(&down(Vec2::new(50.0, 50.0)));
        assert_eq!(
            button.handle_event(&up(Vec2::new(90.0, 90.0))),
            ButtonResponse::default()
        );
        let later = button.handle_event(&up(Vec2::new(50.0, 50.0)));
        assert!(!later.activated);
    }

    #[test]
    fn test_cancel_hold_blocks_activation() {
        let mut button = button_at(Vec2::new(50.0, 50.0));
        button.handle_event(&down(Vec2::new(50.0, 50.0)));
        button.cancel_hold();
        let release = button.handle_event(&up(Vec2::new(50.0, 50.0)));
        assert!(release.handled);
        assert!(!release.activated);
    }

    #[test]
    fn test_hidden_button_ignores_events() {
        let mut button = button_at(Vec2::new(50.0, 50.0));
        button.visible = false;
        assert!(!button.handle_event(&down(Vec2::new(50.0, 50.0))).handled);
    }

    #[test]
    fn test_hover_tracks_cursor() {
        let mut button = button_at(Vec2::new(50.0, 50.0));
        button.handle_event(&InputEvent::MouseMove {
            pos: Vec2::new(51.0, 51.0),
        });
        assert!(button.hovered);
        button.handle_event(&InputEvent::MouseMove {
            pos: Vec2::new(0.0, 0.0),
        });
        assert!(!button.hovered);
    }
}
