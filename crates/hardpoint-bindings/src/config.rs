//! Binding screen configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use hardpoint_core::constants::*;

/// Configuration for a binding screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Persist on exit even when nothing changed.
    pub always_persist: bool,
    /// Report changes through `ExitReport` instead of calling persistence,
    /// so the caller can batch writes.
    pub defer_persistence: bool,
    /// Double-click window (seconds).
    pub double_click_secs: f64,
    /// Double-click cursor tolerance (points).
    pub double_click_slop: f32,
    pub button_pad: Vec2,
    pub title_height: f32,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            always_persist: false,
            defer_persistence: false,
            double_click_secs: DOUBLE_CLICK_SECS,
            double_click_slop: DOUBLE_CLICK_SLOP,
            button_pad: BUTTON_PAD,
            title_height: TITLE_HEIGHT,
        }
    }
}
