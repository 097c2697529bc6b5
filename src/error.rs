//! Error types.
//!
//! Bad decks are never fatal to a selection run: the engine skips them
//! and reports how many it skipped. [`DeckError`] exists so callers can
//! ask *why* a deck would be skipped before submitting it.

use thiserror::Error;

/// Why a deck is not an acceptable selection candidate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeckError {
    /// The deck does not have exactly [`DECK_SIZE`](crate::deck::DECK_SIZE) members.
    #[error("deck must have {expected} members, got {actual}")]
    MemberCount { expected: usize, actual: usize },

    /// Score is NaN or infinite.
    #[error("deck score must be finite, got {score}")]
    NonFiniteScore { score: f64 },

    /// Score is zero or negative.
    #[error("deck score must be positive, got {score}")]
    NonPositiveScore { score: f64 },
}

/// Invalid [`SelectConfig`](crate::select::SelectConfig) parameter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("node_budget must be at least 1 or None")]
    ZeroNodeBudget,

    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,
}
