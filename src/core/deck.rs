//! Deck files.
//!
//! A deck is either a bare card list:
//!
//! ```json
//! [{ "id": 1, "z": 1, "img": "a.jpg" }, { "id": 2, "z": 2, "img": "b.jpg" }]
//! ```
//!
//! or an object with optional parameter overrides:
//!
//! ```json
//! { "cards": [...], "swipe": { "threshold": 120 }, "stack": { "rotate_step_deg": 5 } }
//! ```
//!
//! Cards are not validated. Duplicate ids are logged and kept; the stack
//! resolves them first-match-wins.

use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::{Card, CardId};
use crate::params::{DeckParams, StackParams, SwipeParams};
use crate::stack::CardStack;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid deck json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub cards: Vec<Card>,
    #[serde(default)]
    pub swipe: SwipeParams,
    #[serde(default)]
    pub stack: StackParams,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, DeckError> {
        // A leading `[` is the bare card list; anything else is the object form.
        let deck = if s.trim_start().starts_with('[') {
            Deck::new(serde_json::from_str::<Vec<Card>>(s)?)
        } else {
            serde_json::from_str::<Deck>(s)?
        };

        let dups = deck.duplicate_ids();
        if !dups.is_empty() {
            tracing::warn!(ids = ?dups, "deck has duplicate card ids; first match wins");
        }
        tracing::info!(cards = deck.cards.len(), "deck loaded");
        Ok(deck)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, DeckError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Ids that appear more than once, in first-repeat order.
    pub fn duplicate_ids(&self) -> Vec<CardId> {
        let mut seen = HashSet::with_capacity(self.cards.len());
        let mut reported = HashSet::new();
        let mut out = Vec::new();
        for c in &self.cards {
            if !seen.insert(c.id) && reported.insert(c.id) {
                out.push(c.id);
            }
        }
        out
    }

    pub fn params(&self) -> DeckParams {
        DeckParams {
            swipe: self.swipe.clone(),
            stack: self.stack.clone(),
        }
    }

    pub fn into_stack(self) -> CardStack {
        CardStack::new(self.cards, self.stack)
    }
}
