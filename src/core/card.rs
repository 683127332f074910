//! Card model.

/// Caller-assigned card identifier.
///
/// Identifiers are expected to be unique within a stack but this is not
/// validated; lookups resolve to the first match.
pub type CardId = i64;

/// One tile in the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    /// Paint order hint. Taken verbatim from input and never recomputed when
    /// the stack is reordered.
    pub z: i32,
    /// Image locator (URL or path).
    pub img: String,
}

impl Card {
    pub fn new(id: CardId, z: i32, img: impl Into<String>) -> Self {
        Self {
            id,
            z,
            img: img.into(),
        }
    }

    /// Alternative text for the card's image.
    pub fn alt_text(&self) -> String {
        format!("card-{}", self.id)
    }
}
