use leptos::prelude::*;
use swipecards::deck::Deck;
use swipecards::params::DeckParams;

use crate::ui_model;

mod card_stack;
mod draggable_card;
mod logging;
mod ticker;

pub use card_stack::CardStack;
pub use draggable_card::DraggableCard;

pub fn start() {
    logging::init();

    let deck = match ui_model::demo_deck() {
        Ok(deck) => deck,
        Err(e) => {
            tracing::error!(%e, "demo deck failed to load");
            Deck::default()
        }
    };

    mount_to_body(move || view! { <App deck=deck /> });
}

#[component]
fn App(deck: Deck) -> impl IntoView {
    let params: DeckParams = deck.params();
    let count = deck.cards.len();

    view! {
        <main style="font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; padding: 64px 18px; max-width: 880px; margin: 0 auto;">
            <h1 style="margin: 0 0 8px 0; text-align: center;">"swipecards"</h1>
            <p style="margin: 0 0 56px 0; color: #555; text-align: center;">
                {format!("{count} cards. Drag the top card away to send it to the back.")}
            </p>
            <CardStack cards=deck.cards params=params />
        </main>
    }
}
