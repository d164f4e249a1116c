//! Frame pass: lay out buttons, project hardpoints, build the view snapshot.
//!
//! Runs under the same lock as event handling. Button rects written here are
//! what the next events are hit-tested against.

use glam::Vec2;

use hardpoint_core::constants::*;
use hardpoint_core::enums::{LinkStyle, ScreenPhase};
use hardpoint_core::state::*;
use hardpoint_core::types::Rect;

use crate::interface::BindingInterface;
use crate::tooltip;
use crate::vehicle::Vehicle;
use crate::view::{Projector, ViewFrame};

impl<V: Vehicle> BindingInterface<V> {
    /// Lay out and snapshot one frame. With no vehicle bound (before entry or
    /// once exit has begun) this is the inactive view, which draws no
    /// thumbnail.
    pub fn render(&mut self, frame: &ViewFrame, projector: &mut dyn Projector) -> BindingScreenView {
        let Some(vehicle) = self.vehicle.as_ref() else {
            return BindingScreenView::default();
        };
        let pad = self.config.button_pad;
        let size = frame.size;

        // Ship panel: left three fifths of the screen.
        let ship_panel = Rect::new(
            frame.center + Vec2::new(-0.2 * size.x, 0.0),
            Vec2::new(0.6 * size.x, size.y - pad.y),
        );

        // Group column under the title, right of the panel.
        let group_count = self.group_buttons.len() as f32;
        let column_height = size.y - self.config.title_height;
        let mut pos = frame.center + size / 2.0 - Vec2::new(size.x / 5.0, 0.0);
        pos.y -= self.config.title_height + 0.5 * column_height / group_count;
        for button in &mut self.group_buttons {
            button.rect = Rect::new(
                pos,
                Vec2::new(size.x / 4.0 - pad.x, column_height / (group_count + 2.0)),
            );
            pos.y -= column_height / group_count;
        }

        projector.set_viewport(ship_panel.size);
        if !self.camera_inited {
            let (center, radius) = vehicle.bounds();
            projector.frame(center, radius);
            self.camera_inited = true;
        }

        let mut hover_ident = self
            .group_buttons
            .iter()
            .filter(|b| b.hovered)
            .map(|b| b.ident)
            .last();
        let mut highlighted = vec![false; self.group_buttons.len()];
        let mut links = Vec::new();
        let mut hardpoints = Vec::with_capacity(self.hardpoint_buttons.len());
        let origin = ship_panel.min();

        for (index, button) in self.hardpoint_buttons.iter_mut().enumerate() {
            let Some(hardpoint) = self.engine.blocks().get(index) else {
                continue;
            };
            let world = vehicle.block_position(hardpoint.block).unwrap_or_default();
            let radius = vehicle
                .footprint(hardpoint.block)
                .map(|f| f.radius)
                .unwrap_or_default();
            let diameter = projector.to_screen_size(2.0 * radius) - pad.x;
            button.rect = Rect::new(projector.to_screen(world) + origin, Vec2::splat(diameter));
            button.visible = Rect::new(ship_panel.center, ship_panel.size - button.rect.size)
                .contains(button.rect.center);
            if !button.visible {
                button.hovered = false;
            }

            let binding_id = vehicle.binding_id(hardpoint.block).unwrap_or(UNBOUND);
            if button.visible && binding_id != UNBOUND && (binding_id as usize) <= self.group_buttons.len() {
                let slot = binding_id as usize - 1;
                let group = &self.group_buttons[slot];
                let hot = button.hovered || group.hovered;
                highlighted[slot] |= hot;
                links.push(LinkView {
                    from: button.rect.center,
                    to: group.rect.center,
                    style: if hot { LinkStyle::Highlight } else { LinkStyle::Default },
                });
            }

            if button.hovered {
                hover_ident = Some(button.ident);
            }

            hardpoints.push(HardpointView {
                index,
                name: hardpoint.name.clone(),
                rect: button.rect,
                visible: button.visible,
                selected: self.engine.selection().contains(index),
                hovered: button.hovered,
                binding_id,
            });
        }

        for index in self.engine.selection().iter() {
            if let Some(button) = self.hardpoint_buttons.get(index) {
                links.push(LinkView {
                    from: button.rect.center,
                    to: frame.cursor,
                    style: LinkStyle::Active,
                });
            }
        }

        let engine = &self.engine;
        let tooltip = hover_ident.map(|ident| {
            self.tooltip
                .get_or_compute(ident, || tooltip::describe(ident, engine.blocks(), engine.groups()))
                .to_string()
        });

        let corner = origin + 2.0 * pad;
        self.reset_button.rect = Rect::new(corner + RESET_BUTTON_SIZE / 2.0, RESET_BUTTON_SIZE);
        let reset_button = tooltip.is_none().then_some(self.reset_button.rect);

        // AI behavior options along the top edge of the panel.
        let mut option_pos = Vec2::new(origin.x, ship_panel.center.y + ship_panel.size.y / 2.0)
            + Vec2::new(AI_OPTION_SIZE.x / 2.0 + 4.0 * pad.x, -(AI_OPTION_SIZE.y / 2.0 + 4.0 * pad.y));
        let mut options = Vec::new();
        for (behavior, button) in self.ai_selector.options_mut() {
            button.rect = Rect::new(option_pos, AI_OPTION_SIZE);
            options.push((behavior, button.rect));
            option_pos.x += AI_OPTION_SIZE.x + pad.x;
        }
        let ai_behavior = vehicle.command_module().map(|_| AiBehaviorView {
            selected: self.ai_selector.selected,
            options,
        });

        let groups = self
            .engine
            .groups()
            .iter()
            .zip(&self.group_buttons)
            .map(|(group, button)| GroupView {
                index: group.index,
                label: group.label.clone(),
                subtext: group.subtext().map(str::to_string),
                rect: button.rect,
                hovered: button.hovered,
                highlighted: highlighted[group.index],
            })
            .collect();

        BindingScreenView {
            phase: ScreenPhase::Active,
            thumbnail: true,
            ship_panel,
            groups,
            hardpoints,
            links,
            tooltip,
            reset_button,
            ai_behavior,
            selection: self.engine.selection().as_slice().to_vec(),
            dirty: self.engine.is_dirty(),
        }
    }
}
