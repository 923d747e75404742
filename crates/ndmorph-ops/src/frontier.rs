//! Watershed flood frontier: a min-heap on `(cost, sequence)`.

use ndmorph_core::{Coord, Element};
use ndmorph_grid::GridError;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A position waiting to commit its label.
#[derive(Clone, Debug)]
pub(crate) struct FrontierEntry<T> {
    pub(crate) cost: T,
    pub(crate) seq: u64,
    pub(crate) position: Coord,
}

// `seq` is unique per entry, so equality on (cost, seq) is total.
impl<T: Element> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<T: Element> Eq for FrontierEntry<T> {}

impl<T: Element> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap pops the lowest cost, then the earliest seq.
impl<T: Element> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority frontier with a single sequence counter for the whole run.
#[derive(Debug)]
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_seq: u64,
}

impl<T: Element> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Push `position` at `cost`, stamping it with the next sequence number.
    pub(crate) fn push(&mut self, cost: T, position: Coord) -> Result<u64, GridError> {
        self.heap
            .try_reserve(1)
            .map_err(|_| GridError::AllocationFailed {
                elements: self.heap.len() + 1,
            })?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            cost,
            seq,
            position,
        });
        Ok(seq)
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry<T>> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total sequence numbers issued so far.
    pub(crate) fn issued(&self) -> u64 {
        self.next_seq
    }
}
