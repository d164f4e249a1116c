//! The binding screen: one vehicle, its hardpoint and group buttons, and the
//! assignment engine, for the duration of an activation.
//!
//! Lifecycle lives in `lifecycle`, event dispatch in `input`, and the frame
//! pass in `frame`. `BindingScreen` wraps all of it behind one lock.

use std::sync::Arc;

use hardpoint_core::constants::FG_COUNT;
use hardpoint_core::enums::ScreenPhase;
use hardpoint_core::types::Transform;

use crate::config::BindingConfig;
use crate::defaults::{DefaultBindingPolicy, StandardBindings};
use crate::engine::BindingAssignmentEngine;
use crate::input::{ClickTimer, DoubleClick};
use crate::tooltip::{self, TooltipCache};
use crate::widgets::{AiSelector, Button};

pub struct BindingInterface<V> {
    pub(crate) config: BindingConfig,
    pub(crate) phase: ScreenPhase,
    pub(crate) vehicle: Option<V>,
    pub(crate) engine: BindingAssignmentEngine,
    pub(crate) tooltip: TooltipCache,
    pub(crate) policy: Box<dyn DefaultBindingPolicy>,
    pub(crate) clicks: Box<dyn DoubleClick>,

    // --- Buttons ---
    pub(crate) group_buttons: Vec<Button>,
    pub(crate) hardpoint_buttons: Vec<Button>,
    pub(crate) reset_button: Button,
    pub(crate) ai_selector: AiSelector,

    // --- Activation scratch ---
    /// Vehicle pose before it was normalized for display.
    pub(crate) saved_transform: Transform,
    pub(crate) camera_inited: bool,
}

impl<V> BindingInterface<V> {
    pub fn new(config: BindingConfig) -> Self {
        let clicks = ClickTimer::new(config.double_click_secs, config.double_click_slop);
        Self {
            config,
            phase: ScreenPhase::Inactive,
            vehicle: None,
            engine: BindingAssignmentEngine::new(),
            tooltip: TooltipCache::default(),
            policy: Box::new(StandardBindings),
            clicks: Box::new(clicks),
            group_buttons: (0..FG_COUNT)
                .map(|i| Button::new(-(i as i32 + 1)))
                .collect(),
            hardpoint_buttons: Vec::new(),
            reset_button: Button::new(0),
            ai_selector: AiSelector::default(),
            saved_transform: Transform::IDENTITY,
            camera_inited: false,
        }
    }

    /// Replace the default-binding policy.
    pub fn with_policy(mut self, policy: impl DefaultBindingPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replace the double-click detector.
    pub fn with_double_click(mut self, clicks: impl DoubleClick + 'static) -> Self {
        self.clicks = Box::new(clicks);
        self
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub fn vehicle(&self) -> Option<&V> {
        self.vehicle.as_ref()
    }

    pub fn engine(&self) -> &BindingAssignmentEngine {
        &self.engine
    }

    pub fn is_dirty(&self) -> bool {
        self.engine.is_dirty()
    }

    pub fn camera_inited(&self) -> bool {
        self.camera_inited
    }

    /// Hover text for a hardpoint (`ident >= 0`) or group (`-(group + 1)`).
    pub fn tooltip(&mut self, ident: i32) -> Arc<str> {
        let engine = &self.engine;
        self.tooltip.get_or_compute(ident, || {
            tooltip::describe(ident, engine.blocks(), engine.groups())
        })
    }
}
