//! Screen view snapshot — the complete visible state produced by each frame pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Rect;

/// Everything a renderer needs to draw one frame of the binding screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingScreenView {
    pub phase: ScreenPhase,
    /// Whether the vehicle thumbnail should be drawn. False for every frame
    /// rendered after exit begins.
    pub thumbnail: bool,
    /// Panel the vehicle thumbnail is drawn into.
    pub ship_panel: Rect,
    pub groups: Vec<GroupView>,
    pub hardpoints: Vec<HardpointView>,
    pub links: Vec<LinkView>,
    /// Hover text. When present it replaces the reset button.
    pub tooltip: Option<String>,
    pub reset_button: Option<Rect>,
    pub ai_behavior: Option<AiBehaviorView>,
    /// Selected hardpoint indices, in selection order.
    pub selection: Vec<usize>,
    /// Unsaved binding changes exist.
    pub dirty: bool,
}

/// One fire-group button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupView {
    pub index: usize,
    pub label: String,
    /// Fire-mode subtext; `None` for groups without a fire mode.
    pub subtext: Option<String>,
    pub rect: Rect,
    pub hovered: bool,
    /// A link into this group is hovered.
    pub highlighted: bool,
}

/// One hardpoint button, placed over the vehicle thumbnail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardpointView {
    pub index: usize,
    pub name: String,
    pub rect: Rect,
    /// Inside the ship panel.
    pub visible: bool,
    pub selected: bool,
    pub hovered: bool,
    pub binding_id: u8,
}

/// A line between two screen points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinkView {
    pub from: Vec2,
    pub to: Vec2,
    pub style: LinkStyle,
}

/// AI behavior selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiBehaviorView {
    pub selected: AiBehavior,
    pub options: Vec<(AiBehavior, Rect)>,
}
