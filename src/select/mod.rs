//! Disjoint maximum-weight deck selection.
//!
//! Given a pool of scored five-member decks, finds exactly
//! [`PICK_COUNT`] decks that share no member (after
//! [normalization](crate::normalize)) and whose total score is maximal.
//! When the pool does not contain that many mutually disjoint decks the
//! result is empty with a total of 0.
//!
//! The search is an exact depth-first branch-and-bound. Its worst-case
//! running time is exponential in the pool size; see [`SelectConfig`]
//! for node and time limits and [`SelectRunner::run_with_cancel`] for
//! cooperative cancellation.
//!
//! # References
//!
//! Land, A. H. & Doig, A. G. (1960). "An Automatic Method of Solving
//! Discrete Programming Problems", *Econometrica* 28(3), 497-520.

mod config;
mod runner;
mod types;

pub use config::SelectConfig;
pub use runner::{select_best_five, SelectRunner};
pub use types::{SearchStatus, SelectionResult};

/// Number of decks in a complete selection.
pub const PICK_COUNT: usize = 5;
