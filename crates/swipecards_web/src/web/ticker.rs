use leptos::prelude::*;
use swipecards::spring::MAX_SETTLE_FRAMES;
use web_time::Instant;

/// Drives a step function once per animation frame until it reports done.
///
/// At most one loop runs per ticker; `run` while a loop is active is a no-op,
/// the active loop keeps reading the same signals. The loop ends on its own
/// once the owning component is disposed, or after `MAX_SETTLE_FRAMES`
/// frames if the step never settles.
#[derive(Clone, Copy)]
pub(super) struct Ticker {
    running: StoredValue<bool>,
}

impl Ticker {
    pub(super) fn new() -> Self {
        Self {
            running: StoredValue::new(false),
        }
    }

    /// `step` receives the frame delta in seconds and returns `true` when
    /// there is nothing left to animate.
    pub(super) fn run(self, step: impl FnMut(f32) -> bool + 'static) {
        match self.running.try_get_value() {
            Some(false) => {}
            _ => return,
        }
        self.running.set_value(true);
        schedule(self, Box::new(step), Instant::now(), 0);
    }
}

fn schedule(
    ticker: Ticker,
    mut step: Box<dyn FnMut(f32) -> bool>,
    last: Instant,
    frame: u32,
) {
    request_animation_frame(move || {
        if ticker.running.try_get_value().is_none() {
            return;
        }
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        if step(dt) {
            ticker.running.set_value(false);
        } else if frame + 1 >= MAX_SETTLE_FRAMES {
            tracing::warn!(frames = frame + 1, "animation never settled; stopping");
            ticker.running.set_value(false);
        } else {
            schedule(ticker, step, now, frame + 1);
        }
    });
}
