//! # swipecards
//!
//! State and geometry for a stack of draggable "swipe cards".
//!
//! The top card of the stack can be dragged; released past a distance
//! threshold it moves to the back of the stack, otherwise it springs back to
//! rest. Everything here is plain data and pure functions so it can be tested
//! on the host; the browser front-end lives in `crates/swipecards_web`.
//!
//! ## Quick Start
//!
//! ```
//! use swipecards::prelude::*;
//!
//! let mut stack = CardStack::new(
//!     vec![
//!         Card::new(1, 1, "a.jpg"),
//!         Card::new(2, 2, "b.jpg"),
//!         Card::new(3, 3, "c.jpg"),
//!     ],
//!     StackParams::default(),
//! );
//!
//! let params = SwipeParams::default();
//! let mut motion = CardMotion::new();
//! motion.press(Point::new(0.0, 0.0), &params);
//! motion.drag_to(Point::new(200.0, 0.0), &params);
//!
//! if motion.release(&params) == Some(ReleaseOutcome::SendToBack) {
//!     stack.move_to_back(3);
//! }
//! assert_eq!(stack.order().ids(), vec![3, 1, 2]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): (de)serialization of cards and parameters, deck files
//! - `cli` (default): the `swipecards-cli` headless driver
//!
//! ## Modules
//!
//! - [`card`]: Card model
//! - [`order`]: Card order and move-to-back
//! - [`drag`]: Per-card drag gesture state machine
//! - [`spring`]: Spring-driven animated values
//! - [`visual`]: Tilt, shadow and CSS rendering of a card
//! - [`stack`]: Stack layer geometry
//! - [`params`]: Tunable parameters
//! - [`deck`]: Deck files

#[path = "core/card.rs"]
pub mod card;

#[path = "core/order.rs"]
pub mod order;

#[path = "core/spring.rs"]
pub mod spring;

#[path = "core/params.rs"]
pub mod params;

#[path = "core/drag.rs"]
pub mod drag;

#[path = "core/css.rs"]
pub mod css;

#[path = "core/visual.rs"]
pub mod visual;

#[path = "core/stack.rs"]
pub mod stack;

#[cfg(feature = "serde")]
#[path = "core/deck.rs"]
pub mod deck;

/// Prelude module for convenient imports.
///
/// ```
/// use swipecards::prelude::*;
/// ```
pub mod prelude {
    pub use crate::card::{Card, CardId};
    pub use crate::drag::{CardMotion, DragBounds, DragPhase, Point, ReleaseOutcome};
    pub use crate::order::CardOrder;
    pub use crate::params::{DeckParams, StackParams, SwipeParams};
    pub use crate::spring::{SpringConfig, SpringValue};
    pub use crate::stack::{CardStack, LayerMotion, LayerStyle};
    pub use crate::visual::{CardVisual, Shadow, Tilt};

    #[cfg(feature = "serde")]
    pub use crate::deck::{Deck, DeckError};
}
