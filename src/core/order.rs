//! Card order.
//!
//! Position 0 is the back of the visual stack; the last position is the front
//! (topmost, draggable) card.

use crate::card::{Card, CardId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardOrder {
    cards: Vec<Card>,
}

impl CardOrder {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Topmost card, the only one the user can grab.
    pub fn front(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Position of the first card with `id`.
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    /// Move the first card with `id` to position 0.
    ///
    /// Returns `false` and leaves the order untouched when no card matches.
    pub fn move_to_back(&mut self, id: CardId) -> bool {
        let Some(idx) = self.position_of(id) else {
            return false;
        };
        // rotate_right on the prefix keeps everyone else's relative order.
        self.cards[..=idx].rotate_right(1);
        true
    }
}

impl From<Vec<Card>> for CardOrder {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl<'a> IntoIterator for &'a CardOrder {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(ids: &[CardId]) -> CardOrder {
        CardOrder::new(
            ids.iter()
                .map(|&id| {
                    let z = i32::try_from(id).unwrap_or(0);
                    Card::new(id, z, format!("{id}.jpg"))
                })
                .collect(),
        )
    }

    #[test]
    fn move_to_back_relocates_to_position_zero() {
        let mut o = order(&[1, 2, 3, 4]);
        assert!(o.move_to_back(3));
        assert_eq!(o.ids(), vec![3, 1, 2, 4]);
        assert_eq!(o.len(), 4);
    }

    #[test]
    fn move_to_back_of_front_card() {
        let mut o = order(&[1, 2, 3]);
        assert!(o.move_to_back(3));
        assert_eq!(o.ids(), vec![3, 1, 2]);
        assert_eq!(o.front().map(|c| c.id), Some(2));
    }

    #[test]
    fn missing_id_is_noop() {
        let mut o = order(&[1, 2, 3]);
        assert!(!o.move_to_back(42));
        assert_eq!(o.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn repeated_move_of_back_card_is_stable() {
        let mut o = order(&[1, 2, 3]);
        o.move_to_back(2);
        let once = o.ids();
        o.move_to_back(2);
        assert_eq!(o.ids(), once);
    }

    #[test]
    fn duplicate_ids_first_match_wins() {
        let mut o = CardOrder::new(vec![
            Card::new(1, 1, "a"),
            Card::new(2, 2, "b"),
            Card::new(2, 3, "c"),
        ]);
        o.move_to_back(2);
        let zs: Vec<i32> = o.iter().map(|c| c.z).collect();
        assert_eq!(zs, vec![2, 1, 3]);
    }

    #[test]
    fn empty_order() {
        let mut o = CardOrder::default();
        assert!(o.is_empty());
        assert!(o.front().is_none());
        assert!(!o.move_to_back(1));
    }
}
