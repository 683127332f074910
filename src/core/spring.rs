//! Spring-driven animated values.
//!
//! A damped harmonic oscillator integrated with semi-implicit Euler in small
//! fixed substeps, so it stays stable for any frame delta the browser hands us.

/// Longest frame we integrate; anything longer (tab in background, debugger
/// pause) is treated as this.
const MAX_FRAME_DT: f32 = 0.1;

/// Integration substep (seconds).
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Rest thresholds for unitless values are this fraction of the px ones.
const SCALE_REST_FACTOR: f32 = 1.0e-3;

/// Frames a driver may spend on one animation before giving up on it.
pub const MAX_SETTLE_FRAMES: u32 = 60 * 30;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target under which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            ..Self::default()
        }
    }

    /// The same spring with rest thresholds suited to a scale factor.
    pub fn for_scale(&self) -> Self {
        Self {
            rest_delta: self.rest_delta * SCALE_REST_FACTOR,
            rest_speed: self.rest_speed * SCALE_REST_FACTOR,
            ..*self
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringValue {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
}

impl SpringValue {
    /// A value at rest on `value`.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Place the value directly, discarding any motion. The target follows.
    pub fn jump(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.target = value;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Returns `true` once the value sits exactly on
    /// its target with no velocity.
    pub fn step(&mut self, cfg: &SpringConfig, dt: f32) -> bool {
        if self.is_settled() {
            return true;
        }

        let mass = cfg.mass.max(1.0e-3);
        let mut remaining = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.value - self.target;
            let accel = (-cfg.stiffness * displacement - cfg.damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        // Diverged (stiffness too high for the substep): land on the target.
        if !self.value.is_finite() || !self.velocity.is_finite() {
            tracing::warn!(to = self.target, "spring diverged; snapping to target");
            self.jump(self.target);
            return true;
        }

        if (self.value - self.target).abs() <= cfg.rest_delta
            && self.velocity.abs() <= cfg.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            return true;
        }
        false
    }
}

impl Default for SpringValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(v: &mut SpringValue, cfg: &SpringConfig, frames: usize) -> bool {
        let mut settled = false;
        for _ in 0..frames {
            settled = v.step(cfg, 1.0 / 60.0);
        }
        settled
    }

    #[test]
    fn settles_exactly_on_target() {
        let cfg = SpringConfig::default();
        let mut v = SpringValue::new(120.0);
        v.set_target(0.0);
        assert!(!v.step(&cfg, 1.0 / 60.0));
        assert!(run(&mut v, &cfg, 300));
        assert_eq!(v.value, 0.0);
        assert_eq!(v.velocity, 0.0);
    }

    #[test]
    fn moves_toward_target() {
        let cfg = SpringConfig::new(250.0, 25.0);
        let mut v = SpringValue::new(1.0);
        v.set_target(0.5);
        v.step(&cfg, 1.0 / 60.0);
        assert!(v.value < 1.0);
        assert!(v.value > 0.5);
    }

    #[test]
    fn huge_frame_delta_is_clamped() {
        let cfg = SpringConfig::default();
        let mut v = SpringValue::new(100.0);
        v.set_target(0.0);
        v.step(&cfg, 30.0);
        assert!(v.value.is_finite());
        assert!(v.value.abs() <= 100.0);
    }

    #[test]
    fn scale_thresholds_are_finer() {
        let cfg = SpringConfig::default();
        let mut v = SpringValue::new(0.9);
        v.set_target(0.8);
        // 0.005 of a 320 px card is 1.6 px.
        v.value = 0.805;
        assert!(!v.step(&cfg.for_scale(), 0.0));
        assert_eq!(v.value, 0.805);
        assert!(v.step(&cfg, 0.0));
        assert_eq!(v.value, 0.8);
    }

    #[test]
    fn diverging_spring_lands_on_target() {
        let cfg = SpringConfig::new(1.0e7, 0.0);
        let mut v = SpringValue::new(50.0);
        v.set_target(0.0);
        assert!(run(&mut v, &cfg, 10));
        assert_eq!(v.value, 0.0);
        assert!(v.is_settled());
    }

    #[test]
    fn undamped_spring_stays_bounded() {
        let cfg = SpringConfig::new(300.0, 0.0);
        let mut v = SpringValue::new(10.0);
        v.set_target(0.0);
        assert!(!run(&mut v, &cfg, MAX_SETTLE_FRAMES as usize));
        assert!(v.value.abs() <= 11.0);
    }

    #[test]
    fn jump_discards_motion() {
        let mut v = SpringValue::new(10.0);
        v.set_target(0.0);
        v.velocity = 5.0;
        v.jump(3.0);
        assert!(v.is_settled());
        assert_eq!(v.value, 3.0);
    }
}
