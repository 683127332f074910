use leptos::ev::PointerEvent;
use leptos::prelude::*;
use swipecards::drag::{CardMotion, Point, ReleaseOutcome};
use swipecards::params::{StackParams, SwipeParams};
use swipecards::visual::CardVisual;
use wasm_bindgen::JsCast;

use super::ticker::Ticker;

fn pointer_point(ev: &PointerEvent) -> Point {
    Point::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn event_element(ev: &PointerEvent) -> Option<web_sys::Element> {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

fn capture_pointer(ev: &PointerEvent) -> Result<(), String> {
    let el = event_element(ev).ok_or("pointer: no target element")?;
    el.set_pointer_capture(ev.pointer_id())
        .map_err(|_| "pointer: set_pointer_capture threw".to_string())
}

fn release_pointer(ev: &PointerEvent) {
    if let Some(el) = event_element(ev) {
        if el.has_pointer_capture(ev.pointer_id()) {
            let _ = el.release_pointer_capture(ev.pointer_id());
        }
    }
}

/// Pointer-draggable wrapper around `children`.
///
/// A release past `params.threshold` on either axis calls `on_send_to_back`
/// once; anything shorter springs back to rest.
#[component]
pub fn DraggableCard(
    params: SwipeParams,
    stack_params: StackParams,
    #[prop(into)] z_index: Signal<i32>,
    on_send_to_back: Callback<()>,
    children: Children,
) -> impl IntoView {
    let motion = RwSignal::new(CardMotion::new());
    let params = StoredValue::new(params);
    let ticker = Ticker::new();

    let animate = move || {
        ticker.run(move |dt| {
            params
                .try_with_value(|p| motion.try_update(|m| m.advance(dt, p)))
                .flatten()
                .unwrap_or(true)
        });
    };

    let on_pointer_down = move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Err(e) = capture_pointer(&ev) {
            tracing::debug!("{e}");
        }
        let p = pointer_point(&ev);
        params.with_value(|pr| motion.update(|m| m.press(p, pr)));
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !motion.with_untracked(|m| m.is_pressed()) {
            return;
        }
        ev.prevent_default();
        let p = pointer_point(&ev);
        params.with_value(|pr| motion.update(|m| m.drag_to(p, pr)));
    };

    let on_pointer_up = move |ev: PointerEvent| {
        release_pointer(&ev);
        let mut outcome = None;
        params.with_value(|pr| motion.update(|m| outcome = m.release(pr)));

        match outcome {
            Some(ReleaseOutcome::SendToBack) => {
                on_send_to_back.run(());
                // Hold the exit pose until the stack has re-rendered the card
                // at its new position.
                request_animation_frame(move || {
                    if motion.try_update(|m| m.reenter_rest()).is_some() {
                        animate();
                    }
                });
            }
            Some(ReleaseOutcome::SnapBack) => animate(),
            None => {}
        }
    };

    let on_pointer_cancel = move |ev: PointerEvent| {
        release_pointer(&ev);
        motion.update(|m| m.cancel());
        animate();
    };

    let set_hovered = move |hovered: bool| {
        params.with_value(|pr| motion.update(|m| m.set_hovered(hovered, pr)));
        animate();
    };

    let style = move || {
        let visual = params.with_value(|p| motion.with(|m| CardVisual::from_motion(m, p)));
        format!(
            "{} z-index: {};",
            visual.style_css(&stack_params),
            z_index.get()
        )
    };

    view! {
        <div
            class="swipe-card"
            style=style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:pointerenter=move |_| set_hovered(true)
            on:pointerleave=move |_| set_hovered(false)
        >
            {children()}
        </div>
    }
}
