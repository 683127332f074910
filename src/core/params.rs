//! Tunable parameters.
//!
//! Units: offsets and sizes in CSS pixels, angles in degrees.

use crate::spring::SpringConfig;

/// Per-card drag behaviour and derived visuals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeParams {
    /// A release whose pointer offset exceeds this on either axis sends the
    /// card to the back.
    pub threshold: f32,
    /// Offset at which tilt reaches `tilt_max_deg` (symmetric around 0).
    pub tilt_range: f32,
    pub tilt_max_deg: f32,
    /// Shadow offset is the element offset divided by this.
    pub shadow_divisor: f32,
    pub shadow_blur: f32,
    pub shadow_color: String,
    /// Fraction of the overshoot past the drag bounds the element follows.
    pub elastic: f32,
    pub hover_scale: f32,
    pub spring: SpringConfig,
}

impl Default for SwipeParams {
    fn default() -> Self {
        Self {
            threshold: 150.0,
            tilt_range: 200.0,
            tilt_max_deg: 30.0,
            shadow_divisor: 10.0,
            shadow_blur: 15.0,
            shadow_color: "rgba(0,0,0,0.3)".to_string(),
            elastic: 0.5,
            hover_scale: 1.08,
            spring: SpringConfig::new(300.0, 30.0),
        }
    }
}

/// Stack layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackParams {
    /// Extra z-rotation per card of depth below the front.
    pub rotate_step_deg: f32,
    pub scale_step: f32,
    /// Transform origin in percent of the card box.
    pub origin_x_pct: f32,
    pub origin_y_pct: f32,
    pub perspective_px: f32,
    pub card_size_px: f32,
    pub corner_radius_px: f32,
    pub spring: SpringConfig,
}

impl Default for StackParams {
    fn default() -> Self {
        Self {
            rotate_step_deg: 7.0,
            scale_step: 0.1,
            origin_x_pct: 80.0,
            origin_y_pct: 80.0,
            perspective_px: 1200.0,
            card_size_px: 320.0,
            corner_radius_px: 12.0,
            spring: SpringConfig::new(250.0, 25.0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeckParams {
    pub swipe: SwipeParams,
    pub stack: StackParams,
}
