//! Selection search configuration.
//!
//! [`SelectConfig`] bounds how long a search may run. The default is
//! unbounded: the search always runs to proven optimality.

use crate::error::ConfigError;

/// Limits for a selection search.
///
/// When a limit trips, the runner stops and returns the best complete
/// combination found so far with
/// [`SearchStatus::Interrupted`](super::SearchStatus::Interrupted).
///
/// # Examples
///
/// ```
/// use deckpick::select::SelectConfig;
///
/// let config = SelectConfig::default()
///     .with_node_budget(1_000_000)
///     .with_time_limit_ms(250);
/// assert_eq!(config.node_budget, Some(1_000_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectConfig {
    /// Maximum number of search nodes to visit.
    ///
    /// `None` disables the node limit (the default).
    pub node_budget: Option<u64>,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// The clock is polled every few thousand nodes, so a run may
    /// overshoot slightly. Not available on `wasm32-unknown-unknown`,
    /// where `std::time::Instant` panics; use `node_budget` there.
    ///
    /// `None` disables time-based termination (the default).
    pub time_limit_ms: Option<u64>,
}

impl SelectConfig {
    /// No limits. Identical to [`Default`].
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Preset for calling from an interactive thread.
    ///
    /// - Node budget: 2,000,000
    /// - Time limit: 200 ms
    pub fn interactive() -> Self {
        Self {
            node_budget: Some(2_000_000),
            time_limit_ms: Some(200),
        }
    }

    /// Sets the node budget.
    pub fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Checks that limits, when set, are non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_budget == Some(0) {
            return Err(ConfigError::ZeroNodeBudget);
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}
