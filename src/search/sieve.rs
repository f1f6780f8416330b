//! Bounded top-K selection.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Keeps the `capacity` best `(score, document_id)` pairs offered to it.
///
/// A higher score is better. Among equal scores the smaller document id is better,
/// so the outcome does not depend on the order in which pairs are sifted.
#[derive(Debug, Clone)]
pub struct Sieve {
    capacity: usize,
    /// Max-heap on "worseness": the root is the weakest retained entry.
    heap: BinaryHeap<Entry>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    score: f64,
    document_id: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower scores and, on ties, larger ids sort greater.
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.document_id.cmp(&other.document_id))
    }
}

impl Sieve {
    /// Create a sieve retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Sieve {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(1024)),
        }
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer a candidate. It is kept only if it ranks among the best `capacity` so far.
    pub fn sift(&mut self, score: f64, document_id: u64) {
        if self.capacity == 0 {
            return;
        }

        let entry = Entry { score, document_id };
        if self.heap.len() < self.capacity {
            self.heap.push(entry);
        } else if let Some(mut worst) = self.heap.peek_mut() {
            if entry < *worst {
                *worst = entry;
            }
        }
    }

    /// Retained entries, best first.
    pub fn winners(&self) -> Vec<(f64, u64)> {
        self.heap
            .clone()
            .into_sorted_vec()
            .into_iter()
            .map(|entry| (entry.score, entry.document_id))
            .collect()
    }

    /// Drop every retained entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
