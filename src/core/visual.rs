//! Visuals derived from a card's motion.
//!
//! All of these are pure functions of the element offset and scale held in
//! [`CardMotion`]; nothing here stores state.

use crate::css;
use crate::drag::{CardMotion, Point};
use crate::params::{StackParams, SwipeParams};

/// Linear map of `v` from `[in_lo, in_hi]` to `[out_lo, out_hi]`, clamped at
/// the input extremes.
pub fn map_range(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let span = in_hi - in_lo;
    if span == 0.0 || !v.is_finite() {
        return out_lo;
    }
    let t = ((v - in_lo) / span).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// 3D tilt in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation around the horizontal axis, driven by the vertical offset.
    pub rotate_x: f32,
    /// Rotation around the vertical axis, driven by the horizontal offset.
    pub rotate_y: f32,
}

impl Tilt {
    pub fn from_offset(offset: Point, params: &SwipeParams) -> Self {
        let r = params.tilt_range;
        let m = params.tilt_max_deg;
        Self {
            rotate_x: map_range(offset.y, -r, r, m, -m),
            rotate_y: map_range(offset.x, -r, r, -m, m),
        }
    }
}

/// Drop shadow trailing the tilt direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub dx: f32,
    pub dy: f32,
    pub blur: f32,
    pub color: String,
}

impl Shadow {
    pub fn from_offset(offset: Point, params: &SwipeParams) -> Self {
        let d = if params.shadow_divisor == 0.0 {
            1.0
        } else {
            params.shadow_divisor
        };
        Self {
            dx: offset.x / d,
            dy: offset.y / d,
            blur: params.shadow_blur,
            color: params.shadow_color.clone(),
        }
    }

    /// `box-shadow` value.
    pub fn css(&self) -> String {
        format!(
            "{} {} {} {}",
            css::px(self.dx),
            css::px(self.dy),
            css::px(self.blur),
            self.color
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardVisual {
    pub offset: Point,
    pub tilt: Tilt,
    pub scale: f32,
    pub shadow: Shadow,
    pub cursor: &'static str,
}

impl CardVisual {
    pub fn from_motion(motion: &CardMotion, params: &SwipeParams) -> Self {
        let offset = motion.offset();
        Self {
            offset,
            tilt: Tilt::from_offset(offset, params),
            scale: motion.scale(),
            shadow: Shadow::from_offset(offset, params),
            cursor: motion.cursor(),
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}, {}, 0) rotateX({}) rotateY({}) scale({})",
            css::px(self.offset.x),
            css::px(self.offset.y),
            css::deg(self.tilt.rotate_x),
            css::deg(self.tilt.rotate_y),
            css::num(self.scale)
        )
    }

    /// Inline style for the draggable wrapper.
    pub fn style_css(&self, stack: &StackParams) -> String {
        let size = css::px(stack.card_size_px);
        format!(
            "position: absolute; width: {size}; height: {size}; border-radius: {}; \
             touch-action: none; user-select: none; cursor: {}; transform: {}; box-shadow: {};",
            css::px(stack.corner_radius_px),
            self.cursor,
            self.transform_css(),
            self.shadow.css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_is_linear_and_clamped() {
        let p = SwipeParams::default();
        let t = Tilt::from_offset(Point::new(100.0, -100.0), &p);
        assert!((t.rotate_y - 15.0).abs() < 1.0e-5);
        assert!((t.rotate_x - 15.0).abs() < 1.0e-5);

        let t = Tilt::from_offset(Point::new(-1000.0, 1000.0), &p);
        assert_eq!(t.rotate_y, -30.0);
        assert_eq!(t.rotate_x, -30.0);

        let t = Tilt::from_offset(Point::ZERO, &p);
        assert_eq!(t.rotate_x, 0.0);
        assert_eq!(t.rotate_y, 0.0);
    }

    #[test]
    fn shadow_trails_offset() {
        let p = SwipeParams::default();
        let s = Shadow::from_offset(Point::new(40.0, -25.0), &p);
        assert_eq!(s.dx, 4.0);
        assert_eq!(s.dy, -2.5);
        assert_eq!(s.css(), "4px -2.5px 15px rgba(0,0,0,0.3)");
    }

    #[test]
    fn resting_card_css() {
        let p = SwipeParams::default();
        let v = CardVisual::from_motion(&CardMotion::new(), &p);
        assert_eq!(
            v.transform_css(),
            "translate3d(0px, 0px, 0) rotateX(0deg) rotateY(0deg) scale(1)"
        );
        assert_eq!(v.shadow.css(), "0px 0px 15px rgba(0,0,0,0.3)");

        let style = v.style_css(&StackParams::default());
        assert!(style.contains("width: 320px"));
        assert!(style.contains("cursor: grab;"));
    }

    #[test]
    fn map_range_degenerate_input() {
        assert_eq!(map_range(5.0, 1.0, 1.0, 3.0, 9.0), 3.0);
        assert_eq!(map_range(f32::NAN, -1.0, 1.0, -2.0, 2.0), -2.0);
    }
}
