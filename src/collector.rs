use bit_set::BitSet;
use std::sync::{Mutex, PoisonError};

/// Multi-producer sink for finished hitting sets.
///
/// Any number of search branches may [`push`](Collector::push) concurrently; the
/// results are taken out once by [`into_sets`](Collector::into_sets) after every
/// producer is done. No order is kept.
#[derive(Debug, Default)]
pub struct Collector {
    found: Mutex<Vec<BitSet>>,
}

impl Collector {
    pub fn new() -> Collector {
        Collector::default()
    }

    pub fn push(&self, set: BitSet) {
        self.found.lock().unwrap_or_else(PoisonError::into_inner).push(set);
    }

    pub fn len(&self) -> usize {
        self.found.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_sets(self) -> Vec<BitSet> {
        self.found.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
