//! Input events delivered to the binding screen.
//!
//! Positions are screen points (y up), already in the same space as the
//! rects the frame pass lays out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Mouse button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// A single user input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Button pressed. `time_secs` feeds double-click detection.
    MouseDown {
        button: MouseButton,
        pos: Vec2,
        time_secs: f64,
    },
    /// Button released.
    MouseUp { button: MouseButton, pos: Vec2 },
    /// Cursor moved (updates hover state).
    MouseMove { pos: Vec2 },
    /// Cancel key.
    Escape,
    /// Wheel scroll. Zoom belongs to the camera, so the screen never consumes it.
    ScrollWheel { delta: f32 },
}

impl InputEvent {
    pub fn position(&self) -> Option<Vec2> {
        match self {
            InputEvent::MouseDown { pos, .. }
            | InputEvent::MouseUp { pos, .. }
            | InputEvent::MouseMove { pos } => Some(*pos),
            InputEvent::Escape | InputEvent::ScrollWheel { .. } => None,
        }
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, InputEvent::Escape)
    }

    pub fn is_press(&self) -> bool {
        matches!(self, InputEvent::MouseDown { .. })
    }

    pub fn is_release(&self) -> bool {
        matches!(self, InputEvent::MouseUp { .. })
    }
}
