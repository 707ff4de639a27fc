use crate::hypergraph::{empty_set, full_set, Hypergraph};
use bit_set::BitSet;

/// Coverage bookkeeping for a partial hitting set `S`.
///
/// `crit[v]` holds the edges for which `v` is the only member of `S` covering them, and
/// `uncov` the edges no member of `S` covers yet. Both are bit-vectors over edge indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalSets {
    crit: Vec<BitSet>,
    uncov: BitSet,
}

/// Outcome of trying to add a vertex to `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extension {
    Accepted(CriticalSets),
    /// The vertex would leave some member of `S` without a critical edge.
    Rejected,
}

impl CriticalSets {
    /// The state for `S = ∅`: nothing is critical and every edge is uncovered.
    pub fn new(num_verts: usize, num_edges: usize) -> CriticalSets {
        CriticalSets {
            crit: vec![empty_set(num_edges); num_verts],
            uncov: full_set(num_edges),
        }
    }

    pub fn critical(&self, v: usize) -> &BitSet {
        &self.crit[v]
    }

    pub fn uncovered(&self) -> &BitSet {
        &self.uncov
    }

    /// Lowest-indexed edge for which `v` is critical.
    pub fn first_critical(&self, v: usize) -> Option<usize> {
        self.crit[v].iter().next()
    }

    /// Computes the state for `S ∪ {v}`, given the transpose `t` of the hypergraph.
    ///
    /// `self` is never modified; on rejection the partially updated copy is dropped.
    pub fn extend(&self, t: &Hypergraph, solution: &BitSet, v: usize) -> Extension {
        let incident = &t[v];

        let mut newly_covered = self.uncov.clone();
        newly_covered.intersect_with(incident);

        let mut crit = self.crit.clone();
        for u in solution.iter() {
            if crit[u].is_disjoint(incident) {
                continue;
            }
            crit[u].difference_with(incident);
            if crit[u].is_empty() {
                return Extension::Rejected;
            }
        }

        let mut uncov = self.uncov.clone();
        uncov.difference_with(incident);
        crit[v] = newly_covered;
        Extension::Accepted(CriticalSets { crit, uncov })
    }
}
