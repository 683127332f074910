//! UI data that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! demo deck, list keys and container styling on the host.

use swipecards::card::CardId;
use swipecards::css;
use swipecards::deck::{Deck, DeckError};
use swipecards::order::CardOrder;
use swipecards::params::StackParams;

/// Deck shown by the demo page.
pub const DEMO_DECK_JSON: &str = r#"[
    { "id": 1, "z": 1, "img": "https://picsum.photos/seed/swipecards-1/640/640" },
    { "id": 2, "z": 2, "img": "https://picsum.photos/seed/swipecards-2/640/640" },
    { "id": 3, "z": 3, "img": "https://picsum.photos/seed/swipecards-3/640/640" },
    { "id": 4, "z": 4, "img": "https://picsum.photos/seed/swipecards-4/640/640" }
]"#;

pub fn demo_deck() -> Result<Deck, DeckError> {
    Deck::from_json_str(DEMO_DECK_JSON)
}

/// Stable list key for a rendered card: its id plus which occurrence of that
/// id it is, so duplicate ids still get distinct keys.
pub type CardKey = (CardId, usize);

pub fn card_keys(order: &CardOrder) -> Vec<CardKey> {
    let mut out: Vec<CardKey> = Vec::with_capacity(order.len());
    for card in order {
        let nth = out.iter().filter(|(id, _)| *id == card.id).count();
        out.push((card.id, nth));
    }
    out
}

pub fn position_of_key(order: &CardOrder, key: CardKey) -> Option<usize> {
    order
        .iter()
        .enumerate()
        .filter(|(_, c)| c.id == key.0)
        .nth(key.1)
        .map(|(i, _)| i)
}

/// Inline style for the stacking container.
pub fn container_style(params: &StackParams) -> String {
    let size = css::px(params.card_size_px);
    format!(
        "position: relative; width: {size}; height: {size}; margin: 0 auto; perspective: {};",
        css::px(params.perspective_px)
    )
}

/// Inline style for a card image. The image is never a pointer target so the
/// browser's native image drag does not steal the gesture.
pub const IMAGE_STYLE: &str =
    "display: block; width: 100%; height: 100%; object-fit: cover; pointer-events: none;";

#[cfg(test)]
mod tests {
    use super::*;
    use swipecards::card::Card;

    #[test]
    fn demo_deck_parses_with_unique_ids() {
        let deck = demo_deck().expect("demo deck");
        assert_eq!(deck.cards.len(), 4);
        assert!(deck.duplicate_ids().is_empty());
        for c in &deck.cards {
            assert!(!c.img.trim().is_empty());
        }
    }

    #[test]
    fn keys_disambiguate_duplicates() {
        let order = CardOrder::new(vec![
            Card::new(1, 0, "a"),
            Card::new(2, 0, "b"),
            Card::new(1, 0, "c"),
        ]);
        let keys = card_keys(&order);
        assert_eq!(keys, vec![(1, 0), (2, 0), (1, 1)]);
        assert_eq!(position_of_key(&order, (1, 1)), Some(2));
        assert_eq!(position_of_key(&order, (2, 0)), Some(1));
        assert_eq!(position_of_key(&order, (3, 0)), None);
    }

    #[test]
    fn keys_follow_reorder() {
        let mut order = CardOrder::new(vec![
            Card::new(1, 0, "a"),
            Card::new(2, 0, "b"),
            Card::new(3, 0, "c"),
        ]);
        order.move_to_back(3);
        assert_eq!(position_of_key(&order, (3, 0)), Some(0));
        assert_eq!(position_of_key(&order, (2, 0)), Some(2));
    }

    #[test]
    fn container_has_fixed_size_and_perspective() {
        let s = container_style(&StackParams::default());
        assert!(s.contains("width: 320px; height: 320px"));
        assert!(s.contains("perspective: 1200px"));
    }
}
