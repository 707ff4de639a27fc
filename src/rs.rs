use crate::collector::Collector;
use crate::critical::{CriticalSets, Extension};
use crate::hypergraph::{empty_set, full_set, Hypergraph, HypergraphError};
use bit_set::BitSet;
use itertools::Itertools;
use log::{debug, info};
use rayon::{Scope, ThreadPoolBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransversalError {
    #[error("at least one worker thread is required")]
    NoThreads,
    #[error("failed to start the worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Hypergraph(#[from] HypergraphError),
}

/// Read-only data shared by every branch of one search.
struct Search<'a> {
    h: &'a Hypergraph,
    t: Hypergraph,
    cutoff_size: usize,
    hitting_sets: Collector,
}

/// State owned by one node of the search tree.
struct Branch {
    s: BitSet,
    cand: BitSet,
    state: CriticalSets,
}

impl<'a> Search<'a> {
    fn within_cutoff(&self, size: usize) -> bool {
        self.cutoff_size == 0 || size < self.cutoff_size
    }

    /// The uncovered edge with the fewest live candidates; ties go to the lowest index.
    fn select_edge(&self, branch: &Branch) -> Option<usize> {
        let live = |e: usize| self.h[e].intersection(&branch.cand).count();
        branch.state.uncovered().iter().min_by_key(|&e| (live(e), e))
    }

    /// Whether any member of `s` has its first critical edge at or after `boundary`.
    /// A member without critical edges counts as having one past every boundary.
    fn any_edge_critical_after(s: &BitSet, state: &CriticalSets, boundary: usize) -> bool {
        s.iter()
            .any(|w| state.first_critical(w).map_or(true, |e| e >= boundary))
    }

    /// Tries every way of hitting the selected edge from `branch`, emitting finished
    /// hitting sets and spawning a task for every branch that needs further extension.
    fn extend_or_confirm<'scope>(&'scope self, scope: &Scope<'scope>, branch: Branch) {
        debug_assert!(!branch.state.uncovered().is_empty());
        debug_assert!(self.within_cutoff(branch.s.len()));

        let Some(search_edge) = self.select_edge(&branch) else {
            return;
        };
        let e = &self.h[search_edge];
        // Selection scans every uncovered edge, so the canonical boundary is the end of
        // the edge range.
        let boundary = self.h.num_edges();

        let mut c = branch.cand.clone();
        c.intersect_with(e);
        let mut new_cand = branch.cand.clone();
        new_cand.difference_with(e);

        for v in c.iter().collect_vec().into_iter().rev() {
            let state = match branch.state.extend(&self.t, &branch.s, v) {
                Extension::Accepted(state) => state,
                Extension::Rejected => {
                    new_cand.insert(v);
                    continue;
                }
            };
            if Self::any_edge_critical_after(&branch.s, &state, boundary) {
                new_cand.insert(v);
                continue;
            }

            let mut new_s = branch.s.clone();
            new_s.insert(v);
            let size = new_s.len();

            if state.uncovered().is_empty() {
                if self.within_cutoff(size) {
                    self.hitting_sets.push(new_s);
                }
            } else if self.within_cutoff(size + 1) {
                let child = Branch { s: new_s, cand: new_cand.clone(), state };
                scope.spawn(move |scope| self.extend_or_confirm(scope, child));
            }

            new_cand.insert(v);
        }
    }
}

/// Computes all minimal transversals (hitting sets) of `h`.
///
/// The search runs on a pool of `num_threads` workers. With `cutoff_size > 0` only the
/// transversals with fewer than `cutoff_size` vertices are returned. The edges of the
/// result are the transversals, in no particular order, over the same vertex universe.
pub fn transversal(h: &Hypergraph, num_threads: usize, cutoff_size: usize) -> Result<Hypergraph, TransversalError> {
    if num_threads == 0 {
        return Err(TransversalError::NoThreads);
    }
    let pool = ThreadPoolBuilder::new().num_threads(num_threads).build()?;
    debug!(
        "rs: {} vertices, {} edges, {} threads, cutoff {}",
        h.num_verts(),
        h.num_edges(),
        num_threads,
        cutoff_size
    );

    let mut htrans = Hypergraph::new(h.num_verts(), 0);
    if h.num_edges() == 0 {
        // The empty set hits every edge of an edgeless hypergraph.
        htrans.add_edge(empty_set(h.num_verts()))?;
        return Ok(htrans);
    }

    let search = Search {
        h,
        t: h.transpose(),
        cutoff_size,
        hitting_sets: Collector::new(),
    };
    let root = Branch {
        s: empty_set(h.num_verts()),
        cand: full_set(h.num_verts()),
        state: CriticalSets::new(h.num_verts(), h.num_edges()),
    };
    if search.within_cutoff(1) {
        pool.scope(|scope| search.extend_or_confirm(scope, root));
    }

    for set in search.hitting_sets.into_sets() {
        htrans.add_edge(set)?;
    }
    info!("rs: found {} minimal transversals", htrans.num_edges());
    Ok(htrans)
}
