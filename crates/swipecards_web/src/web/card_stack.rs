use leptos::prelude::*;
use swipecards::card::Card;
use swipecards::params::{DeckParams, StackParams};
use swipecards::stack::{CardStack as StackState, LayerMotion, LayerStyle};

use super::draggable_card::DraggableCard;
use super::ticker::Ticker;
use crate::ui_model::{self, CardKey};

/// Stack of swipe cards.
///
/// `cards` seeds the stack once at mount. The component owns the order from
/// then on; there is no way to push a new list into a mounted stack.
#[component]
pub fn CardStack(cards: Vec<Card>, #[prop(optional)] params: DeckParams) -> impl IntoView {
    let stack = RwSignal::new(StackState::new(cards, params.stack.clone()));
    let container_style = ui_model::container_style(&params.stack);
    let DeckParams {
        swipe,
        stack: stack_params,
    } = params;

    view! {
        <div class="swipe-stack" style=container_style>
            <For
                each=move || stack.with(|s| ui_model::card_keys(s.order()))
                key=|k: &CardKey| *k
                children=move |key: CardKey| {
                    let (id, _) = key;
                    let card = stack.with_untracked(|s| {
                        ui_model::position_of_key(s.order(), key)
                            .and_then(|p| s.order().get(p).cloned())
                    });
                    let Some(card) = card else {
                        return ().into_any();
                    };

                    let layer = Memo::new(move |_| {
                        stack.with(|s| {
                            ui_model::position_of_key(s.order(), key).and_then(|p| s.layer_at(p))
                        })
                    });
                    let z_index = Signal::derive(move || {
                        layer.get().map(|l| l.z_index).unwrap_or_default()
                    });
                    let on_send_to_back = Callback::new(move |()| {
                        stack.update(|s| {
                            s.move_to_back(id);
                        });
                    });

                    view! {
                        <DraggableCard
                            params=swipe.clone()
                            stack_params=stack_params.clone()
                            z_index=z_index
                            on_send_to_back=on_send_to_back
                        >
                            <CardLayer
                                layer=layer
                                img=card.img.clone()
                                alt=card.alt_text()
                                params=stack_params.clone()
                            />
                        </DraggableCard>
                    }
                    .into_any()
                }
            />
        </div>
    }
}

/// Rotated, scaled image layer inside a draggable card. Pose changes spring
/// toward the new target; the first pose is shown as-is.
#[component]
fn CardLayer(
    layer: Memo<Option<LayerStyle>>,
    img: String,
    alt: String,
    params: StackParams,
) -> impl IntoView {
    let initial = layer
        .get_untracked()
        .unwrap_or_else(|| LayerStyle::at(0, 1, 0, &params));
    let motion = RwSignal::new(LayerMotion::new(initial));
    let ticker = Ticker::new();
    let spring = params.spring;

    Effect::new(move |_| {
        let Some(target) = layer.get() else {
            return;
        };
        motion.update(|m| m.retarget(target));
        if motion.with_untracked(|m| m.is_animating()) {
            ticker.run(move |dt| {
                motion
                    .try_update(|m| m.advance(dt, &spring))
                    .unwrap_or(true)
            });
        }
    });

    let style = move || motion.with(|m| m.style_css(&params));

    view! {
        <div class="swipe-card-layer" style=style>
            <img src=img alt=alt draggable="false" style=ui_model::IMAGE_STYLE />
        </div>
    }
}
