//! Selection result types.

use crate::deck::Deck;

/// How a selection search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The search finished; `picked` is an optimal combination.
    Optimal,
    /// The search finished without finding five mutually disjoint decks.
    Infeasible,
    /// A node budget, time limit or cancellation stopped the search.
    /// `picked` holds the best combination found so far, if any.
    Interrupted,
}

/// Outcome of a selection search.
///
/// `picked` is either empty or holds exactly
/// [`PICK_COUNT`](super::PICK_COUNT) pairwise disjoint decks, in the
/// order the search committed them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionResult {
    /// Chosen decks.
    pub picked: Vec<Deck>,
    /// Sum of `picked` scores; 0 when nothing was picked.
    pub total: f64,
    pub status: SearchStatus,
    /// Valid decks that entered the search.
    pub candidates: usize,
    /// Invalid decks excluded before the search.
    pub rejected: usize,
    /// Search nodes visited.
    pub nodes: u64,
    /// Branches cut by the upper bound.
    pub pruned: u64,
}

impl SelectionResult {
    /// A result with nothing picked.
    pub fn empty(status: SearchStatus) -> Self {
        Self {
            picked: Vec::new(),
            total: 0.0,
            status,
            candidates: 0,
            rejected: 0,
            nodes: 0,
            pruned: 0,
        }
    }

    /// Whether a full combination was picked.
    pub fn is_complete(&self) -> bool {
        !self.picked.is_empty()
    }

    /// Ids of the picked decks, in pick order.
    pub fn picked_ids(&self) -> Vec<&str> {
        self.picked.iter().map(|d| d.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let r = SelectionResult::empty(SearchStatus::Infeasible);
        assert!(!r.is_complete());
        assert_eq!(r.total, 0.0);
        assert!(r.picked_ids().is_empty());
        assert_eq!(r.status, SearchStatus::Infeasible);
    }
}
