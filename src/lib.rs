//! Disjoint maximum-weight deck selection.
//!
//! Players log *decks* for a recurring raid: five character picks plus
//! the score the team achieved. This crate answers one question about a
//! pool of such decks: which five decks, using no character twice, give
//! the highest combined score?
//!
//! - **Normalize**: [`normalize`] maps free-form pick labels to
//!   case- and whitespace-insensitive comparison keys.
//! - **Deck**: [`deck::Deck`] is the input record, with validation,
//!   overlap tests and content keys for duplicate suppression.
//! - **Select**: [`select`] runs an exact branch-and-bound search and
//!   returns a [`select::SelectionResult`].
//!
//! # Architecture
//!
//! The crate is a pure computation: no I/O, no global state. Storage,
//! text parsing and presentation belong to the caller. With the `wasm`
//! feature a `selectBestFive` binding is exported for browser hosts.
//!
//! ```
//! use deckpick::{select_best_five, Deck};
//!
//! let pool: Vec<Deck> = (1..=6)
//!     .map(|d| {
//!         let members: Vec<String> = (0..5).map(|m| format!("char {d}-{m}")).collect();
//!         Deck::new(format!("deck {d}"), members, d as f64 * 100.0)
//!     })
//!     .collect();
//!
//! let best = select_best_five(&pool);
//! assert_eq!(best.picked.len(), 5);
//! assert_eq!(best.total, 2000.0);
//! ```

pub mod deck;
pub mod error;
pub mod normalize;
pub mod select;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use deck::Deck;
pub use error::{ConfigError, DeckError};
pub use select::{select_best_five, SelectConfig, SelectionResult};
