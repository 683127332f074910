//! Per-card drag gesture state.
//!
//! `CardMotion` owns everything that moves on a single card: the element
//! offset (x, y), the hover scale, and the gesture phase. Visuals are derived
//! from it in [`crate::visual`].
//!
//! Phases:
//! - `Resting`: offset (0, 0), nothing animating.
//! - `Dragging`: offset follows the pointer through the elastic bounds.
//! - `SnappingBack`: springs pulling the offset to (0, 0).
//! - `Exiting`: released past the threshold; the offset stays where the
//!   release left it until the stack has reordered and calls
//!   [`CardMotion::reenter_rest`].

use crate::params::SwipeParams;
use crate::spring::SpringValue;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl core::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Drag limits relative to the rest position. Past a limit the element only
/// follows a fraction (`SwipeParams::elastic`) of the overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragBounds {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl DragBounds {
    pub fn apply(&self, p: Point, elastic: f32) -> Point {
        Point::new(
            apply_elastic(p.x, self.left, self.right, elastic),
            apply_elastic(p.y, self.top, self.bottom, elastic),
        )
    }

    /// Inverse of [`DragBounds::apply`]: the unconstrained position that
    /// lands the element on `p`.
    pub fn unapply(&self, p: Point, elastic: f32) -> Point {
        Point::new(
            unapply_elastic(p.x, self.left, self.right, elastic),
            unapply_elastic(p.y, self.top, self.bottom, elastic),
        )
    }
}

fn apply_elastic(v: f32, min: f32, max: f32, elastic: f32) -> f32 {
    if v < min {
        min + (v - min) * elastic
    } else if v > max {
        max + (v - max) * elastic
    } else {
        v
    }
}

fn unapply_elastic(v: f32, min: f32, max: f32, elastic: f32) -> f32 {
    if elastic <= 0.0 {
        return v;
    }
    if v < min {
        min + (v - min) / elastic
    } else if v > max {
        max + (v - max) / elastic
    } else {
        v
    }
}

/// Whether a pointer offset counts as a swipe. Axes are checked separately.
pub fn exceeds_threshold(offset: Point, threshold: f32) -> bool {
    offset.x.abs() > threshold || offset.y.abs() > threshold
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Resting,
    Dragging,
    SnappingBack,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Below threshold; the card springs back to rest.
    SnapBack,
    /// Past threshold; the owner should move the card to the back.
    SendToBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMotion {
    x: SpringValue,
    y: SpringValue,
    scale: SpringValue,
    phase: DragPhase,
    bounds: DragBounds,
    hovered: bool,
    press_pointer: Point,
    /// Unconstrained position at press time.
    press_offset: Point,
    pointer_offset: Point,
}

impl CardMotion {
    pub fn new() -> Self {
        Self::with_bounds(DragBounds::default())
    }

    pub fn with_bounds(bounds: DragBounds) -> Self {
        Self {
            x: SpringValue::new(0.0),
            y: SpringValue::new(0.0),
            scale: SpringValue::new(1.0),
            phase: DragPhase::Resting,
            bounds,
            hovered: false,
            press_pointer: Point::ZERO,
            press_offset: Point::ZERO,
            pointer_offset: Point::ZERO,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current element offset from the rest position.
    pub fn offset(&self) -> Point {
        Point::new(self.x.value, self.y.value)
    }

    /// Pointer movement since the press. This, not the elastic element
    /// offset, is what the threshold is checked against.
    pub fn pointer_offset(&self) -> Point {
        self.pointer_offset
    }

    pub fn scale(&self) -> f32 {
        self.scale.value
    }

    pub fn is_pressed(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn cursor(&self) -> &'static str {
        if self.is_pressed() {
            "grabbing"
        } else {
            "grab"
        }
    }

    /// Start a drag. Picks up from wherever the element currently is, so a
    /// card grabbed mid-animation does not jump.
    pub fn press(&mut self, pointer: Point, params: &SwipeParams) {
        let here = self.offset();
        self.x.jump(here.x);
        self.y.jump(here.y);
        self.press_pointer = pointer;
        self.press_offset = self.bounds.unapply(here, params.elastic);
        self.pointer_offset = Point::ZERO;
        self.phase = DragPhase::Dragging;
    }

    pub fn drag_to(&mut self, pointer: Point, params: &SwipeParams) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.pointer_offset = pointer - self.press_pointer;
        let p = self
            .bounds
            .apply(self.press_offset + self.pointer_offset, params.elastic);
        self.x.jump(p.x);
        self.y.jump(p.y);
    }

    /// End the drag. Returns `None` if no drag was in progress.
    pub fn release(&mut self, params: &SwipeParams) -> Option<ReleaseOutcome> {
        if self.phase != DragPhase::Dragging {
            return None;
        }

        let outcome = if exceeds_threshold(self.pointer_offset, params.threshold) {
            self.phase = DragPhase::Exiting;
            ReleaseOutcome::SendToBack
        } else {
            self.spring_home();
            ReleaseOutcome::SnapBack
        };

        tracing::debug!(
            ?outcome,
            dx = self.pointer_offset.x,
            dy = self.pointer_offset.y,
            "drag released"
        );
        Some(outcome)
    }

    /// Abort the drag without a swipe (pointer cancel, lost capture).
    pub fn cancel(&mut self) {
        if self.phase == DragPhase::Dragging {
            tracing::debug!("drag cancelled");
            self.spring_home();
        }
    }

    /// Bring an exited card back to rest once it has been reordered.
    pub fn reenter_rest(&mut self) {
        if self.phase == DragPhase::Exiting {
            self.spring_home();
        }
    }

    pub fn set_hovered(&mut self, hovered: bool, params: &SwipeParams) {
        self.hovered = hovered;
        self.scale
            .set_target(if hovered { params.hover_scale } else { 1.0 });
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_animating(&self) -> bool {
        self.phase == DragPhase::SnappingBack || !self.scale.is_settled()
    }

    /// Step the springs by `dt` seconds. Returns `true` when nothing is left
    /// to animate.
    pub fn advance(&mut self, dt: f32, params: &SwipeParams) -> bool {
        self.scale.step(&params.spring.for_scale(), dt);

        if self.phase == DragPhase::SnappingBack {
            let x_done = self.x.step(&params.spring, dt);
            let y_done = self.y.step(&params.spring, dt);
            if x_done && y_done {
                self.phase = DragPhase::Resting;
            }
        }

        !self.is_animating()
    }

    fn spring_home(&mut self) {
        self.x.set_target(0.0);
        self.y.set_target(0.0);
        self.phase = DragPhase::SnappingBack;
    }
}

impl Default for CardMotion {
    fn default() -> Self {
        Self::new()
    }
}
