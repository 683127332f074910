//! Stack state and layer geometry.
//!
//! The stack is seeded from its input exactly once. There is deliberately no
//! way to replace the cards afterwards: re-supplying a different list to a
//! mounted stack has no effect.

use crate::card::{Card, CardId};
use crate::css;
use crate::order::CardOrder;
use crate::params::StackParams;
use crate::spring::{SpringConfig, SpringValue};

/// Target pose of a card's visual layer at a given stack position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub rotate_z_deg: f32,
    pub scale: f32,
    pub origin_x_pct: f32,
    pub origin_y_pct: f32,
    /// The card's own `z`, unchanged by reordering.
    pub z_index: i32,
}

impl LayerStyle {
    pub fn at(position: usize, count: usize, z: i32, params: &StackParams) -> Self {
        let depth = count as f32 - position as f32 - 1.0;
        Self {
            rotate_z_deg: depth * params.rotate_step_deg,
            scale: 1.0 + position as f32 * params.scale_step - count as f32 * params.scale_step,
            origin_x_pct: params.origin_x_pct,
            origin_y_pct: params.origin_y_pct,
            z_index: z,
        }
    }

    pub fn transform_origin_css(&self) -> String {
        format!("{} {}", css::pct(self.origin_x_pct), css::pct(self.origin_y_pct))
    }
}

#[derive(Debug, Clone)]
pub struct CardStack {
    order: CardOrder,
    params: StackParams,
}

impl CardStack {
    pub fn new(cards: Vec<Card>, params: StackParams) -> Self {
        Self {
            order: CardOrder::new(cards),
            params,
        }
    }

    pub fn order(&self) -> &CardOrder {
        &self.order
    }

    pub fn params(&self) -> &StackParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn front_id(&self) -> Option<CardId> {
        self.order.front().map(|c| c.id)
    }

    /// Move the card to the back of the stack. Unknown ids are ignored.
    pub fn move_to_back(&mut self, id: CardId) -> bool {
        let moved = self.order.move_to_back(id);
        if moved {
            tracing::debug!(id, order = ?self.order.ids(), "card moved to back");
        } else {
            tracing::debug!(id, "move to back ignored: no such card");
        }
        moved
    }

    pub fn layer_at(&self, position: usize) -> Option<LayerStyle> {
        let card = self.order.get(position)?;
        Some(LayerStyle::at(position, self.len(), card.z, &self.params))
    }

    pub fn layer_for(&self, id: CardId) -> Option<LayerStyle> {
        self.layer_at(self.order.position_of(id)?)
    }

    /// Every card with its current layer style, back to front.
    pub fn layers(&self) -> Vec<(&Card, LayerStyle)> {
        let n = self.len();
        self.order
            .iter()
            .enumerate()
            .map(|(i, c)| (c, LayerStyle::at(i, n, c.z, &self.params)))
            .collect()
    }
}

/// Animated layer pose. Starts on its first target without animating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerMotion {
    rotate_z: SpringValue,
    scale: SpringValue,
    style: LayerStyle,
}

impl LayerMotion {
    pub fn new(style: LayerStyle) -> Self {
        Self {
            rotate_z: SpringValue::new(style.rotate_z_deg),
            scale: SpringValue::new(style.scale),
            style,
        }
    }

    pub fn retarget(&mut self, style: LayerStyle) {
        self.rotate_z.set_target(style.rotate_z_deg);
        self.scale.set_target(style.scale);
        self.style = style;
    }

    pub fn is_animating(&self) -> bool {
        !(self.rotate_z.is_settled() && self.scale.is_settled())
    }

    /// Returns `true` once both springs are settled.
    pub fn advance(&mut self, dt: f32, spring: &SpringConfig) -> bool {
        let r = self.rotate_z.step(spring, dt);
        let s = self.scale.step(&spring.for_scale(), dt);
        r && s
    }

    pub fn rotate_z_deg(&self) -> f32 {
        self.rotate_z.value
    }

    pub fn scale(&self) -> f32 {
        self.scale.value
    }

    pub fn z_index(&self) -> i32 {
        self.style.z_index
    }

    /// Inline style for the layer inside the draggable wrapper.
    pub fn style_css(&self, params: &StackParams) -> String {
        format!(
            "width: 100%; height: 100%; overflow: hidden; border-radius: {}; \
             transform-origin: {}; transform: rotateZ({}) scale({});",
            css::px(params.corner_radius_px),
            self.style.transform_origin_css(),
            css::deg(self.rotate_z.value),
            css::num(self.scale.value)
        )
    }
}
