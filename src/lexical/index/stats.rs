//! Posting list statistics.

use std::collections::BTreeMap;

use serde::Serialize;

/// Shape of the posting lists of an index.
///
/// Gaps are measured between consecutive document ids of a list; the first posting
/// contributes its own document id. Both histograms map a value to the number of
/// postings that have it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostingStats {
    /// Number of posting lists, one per vocabulary term.
    pub posting_list_count: usize,
    /// Total number of postings across all lists.
    pub total_postings: usize,
    /// Mean list length.
    pub avg_postings_per_list: f64,
    /// Longest list length.
    pub max_posting_list_size: usize,
    /// Document-id gap histogram.
    pub gap_histogram: BTreeMap<u64, usize>,
    /// Term frequency histogram.
    pub frequency_histogram: BTreeMap<u64, usize>,
    /// Bits used by compressed lists; 0 when lists are stored plain.
    pub compressed_bits: usize,
}

impl PostingStats {
    /// Average number of bits spent per posting, if any are compressed.
    pub fn bits_per_posting(&self) -> Option<f64> {
        if self.compressed_bits == 0 || self.total_postings == 0 {
            return None;
        }
        Some(self.compressed_bits as f64 / self.total_postings as f64)
    }
}
