//! Streaming set algebra over posting iterators.
//!
//! All operations take two iterators sorted by ascending document id, with no
//! duplicate ids inside either one, and return a lazy iterator that is sorted the
//! same way. Nothing is buffered beyond one look-ahead posting per input. Inputs
//! that are not sorted are not detected and give meaningless output.
//!
//! When both inputs hold a posting for the same document, intersection and union
//! yield the posting from the left input.
//!
//! # Examples
//!
//! ```
//! use pilum::lexical::merger::PostingsMerger;
//! use pilum::lexical::posting::Posting;
//!
//! let a: Vec<Posting> = [1, 3, 5, 7].iter().map(|&d| Posting::new(d, 1)).collect();
//! let b: Vec<Posting> = [3, 4, 5].iter().map(|&d| Posting::new(d, 1)).collect();
//!
//! let ids = |postings: Vec<Posting>| -> Vec<u64> {
//!     postings.iter().map(|p| p.document_id).collect()
//! };
//! let both = PostingsMerger::intersection(a.clone(), b.clone()).collect();
//! assert_eq!(ids(both), vec![3, 5]);
//! let either = PostingsMerger::union(a.clone(), b.clone()).collect();
//! assert_eq!(ids(either), vec![1, 3, 4, 5, 7]);
//! let only_a = PostingsMerger::difference(a, b).collect();
//! assert_eq!(ids(only_a), vec![1, 7]);
//! ```

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::lexical::posting::Posting;

/// Entry points for merging two posting streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostingsMerger;

impl PostingsMerger {
    /// Postings whose document occurs in both inputs.
    pub fn intersection<A, B>(left: A, right: B) -> Intersection<A::IntoIter, B::IntoIter>
    where
        A: IntoIterator<Item = Posting>,
        B: IntoIterator<Item = Posting>,
    {
        Intersection {
            left: left.into_iter(),
            right: right.into_iter(),
        }
    }

    /// Postings whose document occurs in either input.
    pub fn union<A, B>(left: A, right: B) -> Union<A::IntoIter, B::IntoIter>
    where
        A: IntoIterator<Item = Posting>,
        B: IntoIterator<Item = Posting>,
    {
        Union {
            left: left.into_iter().peekable(),
            right: right.into_iter().peekable(),
        }
    }

    /// Postings of `left` whose document does not occur in `right`.
    pub fn difference<A, B>(left: A, right: B) -> Difference<A::IntoIter, B::IntoIter>
    where
        A: IntoIterator<Item = Posting>,
        B: IntoIterator<Item = Posting>,
    {
        Difference {
            left: left.into_iter(),
            right: right.into_iter().peekable(),
        }
    }
}

/// Iterator returned by [`PostingsMerger::intersection`].
#[derive(Debug)]
pub struct Intersection<A, B> {
    left: A,
    right: B,
}

impl<A, B> Iterator for Intersection<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        let mut left = self.left.next()?;
        let mut right = self.right.next()?;
        loop {
            match left.document_id.cmp(&right.document_id) {
                Ordering::Less => left = self.left.next()?,
                Ordering::Greater => right = self.right.next()?,
                Ordering::Equal => return Some(left),
            }
        }
    }
}

/// Iterator returned by [`PostingsMerger::union`].
pub struct Union<A: Iterator, B: Iterator> {
    left: Peekable<A>,
    right: Peekable<B>,
}

impl<A, B> Iterator for Union<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        let order = match (self.left.peek(), self.right.peek()) {
            (Some(left), Some(right)) => left.document_id.cmp(&right.document_id),
            (Some(_), None) => return self.left.next(),
            (None, _) => return self.right.next(),
        };
        match order {
            Ordering::Less => self.left.next(),
            Ordering::Greater => self.right.next(),
            Ordering::Equal => {
                self.right.next();
                self.left.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_low, left_high) = self.left.size_hint();
        let (right_low, right_high) = self.right.size_hint();
        let high = match (left_high, right_high) {
            (Some(l), Some(r)) => l.checked_add(r),
            _ => None,
        };
        (left_low.max(right_low), high)
    }
}

/// Iterator returned by [`PostingsMerger::difference`].
pub struct Difference<A, B: Iterator> {
    left: A,
    right: Peekable<B>,
}

impl<A, B> Iterator for Difference<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        'left: loop {
            let left = self.left.next()?;
            while let Some(right) = self.right.peek() {
                match left.document_id.cmp(&right.document_id) {
                    Ordering::Less => return Some(left),
                    Ordering::Greater => {
                        self.right.next();
                    }
                    Ordering::Equal => {
                        self.right.next();
                        continue 'left;
                    }
                }
            }
            return Some(left);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn postings(ids: &[u64]) -> Vec<Posting> {
        ids.iter().map(|&id| Posting::new(id, 1)).collect()
    }

    fn ids<I: Iterator<Item = Posting>>(iter: I) -> Vec<u64> {
        iter.map(|p| p.document_id).collect()
    }

    #[test]
    fn test_worked_example() {
        let a = postings(&[1, 3, 5, 7]);
        let b = postings(&[3, 4, 5]);

        assert_eq!(ids(PostingsMerger::intersection(a.clone(), b.clone())), vec![3, 5]);
        assert_eq!(ids(PostingsMerger::union(a.clone(), b.clone())), vec![1, 3, 4, 5, 7]);
        assert_eq!(ids(PostingsMerger::difference(a.clone(), b.clone())), vec![1, 7]);
        assert_eq!(ids(PostingsMerger::difference(b, a)), vec![4]);
    }

    #[test]
    fn test_empty_inputs() {
        let a = postings(&[2, 4]);
        let empty: Vec<Posting> = Vec::new();

        assert!(ids(PostingsMerger::intersection(a.clone(), empty.clone())).is_empty());
        assert!(ids(PostingsMerger::intersection(empty.clone(), a.clone())).is_empty());
        assert_eq!(ids(PostingsMerger::union(a.clone(), empty.clone())), vec![2, 4]);
        assert_eq!(ids(PostingsMerger::union(empty.clone(), a.clone())), vec![2, 4]);
        assert_eq!(ids(PostingsMerger::difference(a.clone(), empty.clone())), vec![2, 4]);
        assert!(ids(PostingsMerger::difference(empty, a)).is_empty());
    }

    #[test]
    fn test_left_posting_wins_ties() {
        let a = vec![Posting::new(1, 10), Posting::new(2, 20)];
        let b = vec![Posting::new(2, 99), Posting::new(3, 30)];

        let both: Vec<Posting> = PostingsMerger::intersection(a.clone(), b.clone()).collect();
        assert_eq!(both, vec![Posting::new(2, 20)]);

        let either: Vec<Posting> = PostingsMerger::union(a, b).collect();
        assert_eq!(
            either,
            vec![Posting::new(1, 10), Posting::new(2, 20), Posting::new(3, 30)]
        );
    }

    #[test]
    fn test_lazy_pull() {
        // An unbounded right input is fine as long as the left one ends.
        let a = postings(&[0, 10]);
        let b = (0u64..).map(|id| Posting::new(id * 3, 1));
        assert_eq!(ids(PostingsMerger::intersection(a.clone(), b)), vec![0]);

        let b = (0u64..).map(|id| Posting::new(id * 5, 1));
        assert_eq!(ids(PostingsMerger::difference(a, b)), Vec::<u64>::new());
    }

    #[test]
    fn test_random_against_sets() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let a: BTreeSet<u64> = (0..rng.random_range(0..30))
                .map(|_| rng.random_range(0..60))
                .collect();
            let b: BTreeSet<u64> = (0..rng.random_range(0..30))
                .map(|_| rng.random_range(0..60))
                .collect();
            let pa: Vec<Posting> = a.iter().map(|&id| Posting::new(id, 1)).collect();
            let pb: Vec<Posting> = b.iter().map(|&id| Posting::new(id, 2)).collect();

            let expected: Vec<u64> = a.intersection(&b).copied().collect();
            assert_eq!(ids(PostingsMerger::intersection(pa.clone(), pb.clone())), expected);

            let expected: Vec<u64> = a.union(&b).copied().collect();
            assert_eq!(ids(PostingsMerger::union(pa.clone(), pb.clone())), expected);

            let expected: Vec<u64> = a.difference(&b).copied().collect();
            assert_eq!(ids(PostingsMerger::difference(pa, pb)), expected);
        }
    }
}
