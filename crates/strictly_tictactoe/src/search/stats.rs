//! Counters describing how much of the tree a search visited.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Search statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions entered, terminal or not.
    nodes: u64,
    /// Terminal positions scored.
    leaves: u64,
    /// Times the remaining siblings were skipped.
    cutoffs: u64,
}

impl SearchStats {
    pub(crate) fn enter(&mut self) {
        self.nodes += 1;
    }

    pub(crate) fn leaf(&mut self) {
        self.leaves += 1;
    }

    pub(crate) fn cutoff(&mut self) {
        self.cutoffs += 1;
    }

    /// Adds another search's counters to these.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} leaves, {} cutoffs",
            self.nodes, self.leaves, self.cutoffs
        )
    }
}
