//! Branch-and-bound selection engine.
//!
//! # Algorithm
//!
//! 1. Drop invalid decks, normalize members of the rest
//! 2. Stable-sort candidates by score, descending
//! 3. Depth-first search over include/exclude decisions per candidate:
//!    a. Include candidate `i` if it shares no pick with the decks
//!       already chosen, then exclude it
//!    b. Before expanding, bound the branch by the running total plus the
//!       next `need` scores; prune if the bound cannot beat the best total
//!    c. Record a complete combination only if it strictly improves the
//!       best total
//!
//! Because scores are sorted, the next `need` scores are the largest any
//! completion could add, so the bound never cuts an improving branch.
//!
//! # Tie-breaking
//!
//! Among equally scored optimal combinations the first one reached wins.
//! With descending sort and include-first branching this favours decks
//! that appear earlier in the input among equal scores. This is a
//! property of traversal order, stable for a given input order, and
//! callers should not rely on it for anything beyond reproducibility.
//!
//! # Complexity
//!
//! Worst case is exponential in the number of candidates. Pruning makes
//! typical pools fast, but adversarial pools (many decks with similar
//! scores and heavy overlap) are not. Use [`SelectConfig`] limits or
//! [`SelectRunner::run_with_cancel`] when the pool size is not under
//! your control.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::config::SelectConfig;
use super::types::{SearchStatus, SelectionResult};
use super::PICK_COUNT;
use crate::deck::Deck;
use crate::normalize::MemberSet;

/// Nodes between polls of the clock and the cancel flag.
const CHECK_INTERVAL: u64 = 4096;

/// A valid deck with its normalized members.
struct Candidate<'a> {
    deck: &'a Deck,
    members: MemberSet,
}

/// Filters and sorts the pool. Returns the candidates and the number of
/// rejected decks.
fn prepare(pool: &[Deck]) -> (Vec<Candidate<'_>>, usize) {
    let mut rejected = 0;
    let mut candidates: Vec<Candidate<'_>> = pool
        .iter()
        .filter(|deck| match deck.validate() {
            Ok(()) => true,
            Err(e) => {
                debug!(id = %deck.id, error = %e, "excluding invalid deck");
                rejected += 1;
                false
            }
        })
        .map(|deck| Candidate {
            deck,
            members: deck.member_set(),
        })
        .collect();

    // sort_by is stable: equal scores keep input order
    candidates.sort_by(|a, b| b.deck.score.total_cmp(&a.deck.score));
    (candidates, rejected)
}

/// Search state threaded through the recursion.
struct Search<'a> {
    candidates: &'a [Candidate<'a>],
    /// Tokens claimed by the decks in `picked`.
    used: HashSet<&'a str>,
    picked: Vec<usize>,
    best_total: f64,
    best_pick: Vec<usize>,
    nodes: u64,
    pruned: u64,
    node_budget: Option<u64>,
    deadline: Option<Instant>,
    cancel: Option<&'a AtomicBool>,
    interrupted: bool,
}

impl<'a> Search<'a> {
    fn new(
        candidates: &'a [Candidate<'a>],
        config: &SelectConfig,
        cancel: Option<&'a AtomicBool>,
    ) -> Self {
        let deadline = config
            .time_limit_ms
            .and_then(|ms| Instant::now().checked_add(Duration::from_millis(ms)));
        Self {
            candidates,
            used: HashSet::with_capacity(PICK_COUNT * crate::deck::DECK_SIZE),
            picked: Vec::with_capacity(PICK_COUNT),
            best_total: f64::NEG_INFINITY,
            best_pick: Vec::new(),
            nodes: 0,
            pruned: 0,
            node_budget: config.node_budget,
            deadline,
            cancel,
            interrupted: false,
        }
    }

    /// Counts a node and reports whether the search may continue.
    fn enter(&mut self) -> bool {
        if self.interrupted {
            return false;
        }
        self.nodes += 1;

        if let Some(budget) = self.node_budget {
            if self.nodes > budget {
                self.interrupted = true;
                return false;
            }
        }

        if (self.nodes - 1) % CHECK_INTERVAL == 0 {
            let cancelled = self
                .cancel
                .is_some_and(|flag| flag.load(Ordering::Relaxed));
            let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
            if cancelled || expired {
                self.interrupted = true;
                return false;
            }
        }
        true
    }

    /// Sum of the `need` scores starting at `start`, or -inf when fewer
    /// than `need` candidates remain.
    fn upper_bound(&self, start: usize, need: usize) -> f64 {
        match self.candidates.get(start..start + need) {
            Some(window) => window.iter().map(|c| c.deck.score).sum(),
            None => f64::NEG_INFINITY,
        }
    }

    fn dfs(&mut self, i: usize, total: f64) {
        if !self.enter() {
            return;
        }

        let need = PICK_COUNT - self.picked.len();
        if need == 0 {
            if total > self.best_total {
                trace!(total, nodes = self.nodes, "improved best combination");
                self.best_total = total;
                self.best_pick.clone_from(&self.picked);
            }
            return;
        }

        let candidates = self.candidates;
        if i >= candidates.len() {
            return;
        }

        if total + self.upper_bound(i, need) <= self.best_total {
            self.pruned += 1;
            return;
        }

        let cand = &candidates[i];

        // Include
        if !cand.members.iter().any(|t| self.used.contains(t)) {
            self.used.extend(cand.members.iter());
            self.picked.push(i);
            self.dfs(i + 1, total + cand.deck.score);
            self.picked.pop();
            for t in cand.members.iter() {
                self.used.remove(t);
            }
        }

        // Exclude
        self.dfs(i + 1, total);
    }
}

/// Selection runner.
pub struct SelectRunner;

impl SelectRunner {
    /// Selects the best five disjoint decks from `pool`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SelectConfig::validate`] first to get a descriptive error).
    ///
    /// # Examples
    ///
    /// ```
    /// use deckpick::deck::Deck;
    /// use deckpick::select::{SearchStatus, SelectConfig, SelectRunner};
    ///
    /// let pool: Vec<Deck> = (0..5)
    ///     .map(|d| {
    ///         let members: Vec<String> = (0..5).map(|m| format!("p{d}{m}")).collect();
    ///         Deck::new(format!("deck{d}"), members, 10.0 * (d + 1) as f64)
    ///     })
    ///     .collect();
    ///
    /// let result = SelectRunner::run(&pool, &SelectConfig::default());
    /// assert_eq!(result.status, SearchStatus::Optimal);
    /// assert_eq!(result.total, 150.0);
    /// ```
    pub fn run(pool: &[Deck], config: &SelectConfig) -> SelectionResult {
        Self::run_with_cancel(pool, config, None)
    }

    /// Runs the selection with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search
    /// stops at its next poll and returns the best combination found so
    /// far with [`SearchStatus::Interrupted`].
    pub fn run_with_cancel(
        pool: &[Deck],
        config: &SelectConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SelectionResult {
        config.validate().expect("invalid SelectConfig");

        let (candidates, rejected) = prepare(pool);
        debug!(
            pool = pool.len(),
            candidates = candidates.len(),
            rejected,
            "starting deck selection"
        );

        if candidates.len() < PICK_COUNT {
            debug!("fewer candidates than picks, nothing to search");
            return SelectionResult {
                candidates: candidates.len(),
                rejected,
                ..SelectionResult::empty(SearchStatus::Infeasible)
            };
        }

        let mut search = Search::new(&candidates, config, cancel.as_deref());
        search.dfs(0, 0.0);

        let status = if search.interrupted {
            warn!(
                nodes = search.nodes,
                found = !search.best_pick.is_empty(),
                "deck selection interrupted, returning best so far"
            );
            SearchStatus::Interrupted
        } else if search.best_pick.is_empty() {
            SearchStatus::Infeasible
        } else {
            SearchStatus::Optimal
        };

        let (picked, total) = if search.best_pick.is_empty() {
            (Vec::new(), 0.0)
        } else {
            let picked = search
                .best_pick
                .iter()
                .map(|&idx| candidates[idx].deck.clone())
                .collect();
            (picked, search.best_total)
        };

        debug!(
            ?status,
            total,
            nodes = search.nodes,
            pruned = search.pruned,
            "deck selection finished"
        );

        SelectionResult {
            picked,
            total,
            status,
            candidates: candidates.len(),
            rejected,
            nodes: search.nodes,
            pruned: search.pruned,
        }
    }

    /// Runs an independent selection per pool.
    ///
    /// With the `parallel` feature the pools are searched concurrently;
    /// each individual search stays single-threaded, so results are the
    /// same either way and come back in `pools` order.
    pub fn run_batch(pools: &[Vec<Deck>], config: &SelectConfig) -> Vec<SelectionResult> {
        #[cfg(feature = "parallel")]
        {
            pools.par_iter().map(|pool| Self::run(pool, config)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            pools.iter().map(|pool| Self::run(pool, config)).collect()
        }
    }
}

/// Selects the best five pairwise disjoint decks with no search limits.
///
/// Shorthand for [`SelectRunner::run`] with [`SelectConfig::default`].
/// The running time is exponential in the worst case; see the
/// [`select`](crate::select) module docs before calling it on untrusted
/// pools.
pub fn select_best_five(pool: &[Deck]) -> SelectionResult {
    SelectRunner::run(pool, &SelectConfig::default())
}
