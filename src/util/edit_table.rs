//! Incremental Damerau-Levenshtein edit table.
//!
//! The table has one row per query symbol and one column per candidate symbol,
//! padded with a leading row and column for the empty prefix. Columns are computed
//! left to right, and each column only depends on the two before it, so a client
//! that walks a trie of candidate strings can overwrite the candidate one symbol at
//! a time and recompute just the affected columns. The column minimum returned by
//! [`EditTable::update`] bounds every distance reachable by extending the current
//! prefix, which is what lets such a walk prune whole subtrees.
//!
//! All edit operations cost 1. Adjacent transpositions count as a single edit
//! (optimal string alignment).
//!
//! # Examples
//!
//! ```
//! use pilum::util::edit_table::EditTable;
//!
//! let table = EditTable::new("elephant", "elephnat");
//! assert_eq!(table.distance(), 1);
//! ```

use std::fmt;

use crate::error::{PilumError, Result};

const PLACEHOLDER: char = '?';

/// Edit table between a fixed query and a mutable candidate.
///
/// Follows standard optimal string alignment: a swap of two adjacent symbols costs 1
/// wherever it occurs, including at the start of either string, so `"ab"` and `"ba"`
/// are at distance 1. The minimum reported by [`EditTable::update`] and
/// [`EditTable::update_symbol`] covers every row of the column, the empty-query row
/// included.
#[derive(Debug, Clone)]
pub struct EditTable {
    query: Vec<char>,
    /// `None` marks a column appended by [`EditTable::update_symbol`] whose symbol
    /// has not been set yet.
    candidate: Vec<Option<char>>,
    /// `table[i][j]` is the distance between `query[..i]` and `candidate[..j]`.
    table: Vec<Vec<usize>>,
}

impl EditTable {
    /// Create and fully compute the table for `query` and `candidate`.
    pub fn new(query: &str, candidate: &str) -> Self {
        let mut table = Self::uncomputed(query, candidate);
        table.compute_all();
        table
    }

    /// Create a table with only the padding row and column filled in.
    pub fn uncomputed(query: &str, candidate: &str) -> Self {
        let query: Vec<char> = query.chars().collect();
        let candidate: Vec<Option<char>> = candidate.chars().map(Some).collect();

        let mut table = vec![vec![0; candidate.len() + 1]; query.len() + 1];
        for (i, row) in table.iter_mut().enumerate() {
            row[0] = i;
        }
        for (j, cell) in table[0].iter_mut().enumerate() {
            *cell = j;
        }

        EditTable {
            query,
            candidate,
            table,
        }
    }

    /// The query string.
    pub fn query(&self) -> String {
        self.query.iter().collect()
    }

    /// The candidate string; unset symbols are shown as `?`.
    pub fn candidate(&self) -> String {
        self.prefix(self.candidate.len())
    }

    /// Compute every column.
    pub fn compute_all(&mut self) {
        for j in 1..=self.candidate.len() {
            self.update_column(j);
        }
    }

    /// Recompute column `j` (1-based, `candidate[j - 1]`) from the columns to its left,
    /// which must already be computed. Returns the minimum value in the column.
    pub fn update(&mut self, j: usize) -> Result<usize> {
        if j == 0 || j > self.candidate.len() {
            return Err(PilumError::out_of_range(format!(
                "column {j} is outside 1..={}",
                self.candidate.len()
            )));
        }
        Ok(self.update_column(j))
    }

    /// Set candidate symbol `j` (0-based) to `symbol` and recompute every column from
    /// it to the right. If `j` is past the end, the candidate grows to `j + 1` symbols.
    /// Returns the minimum value in the column of the updated symbol.
    pub fn update_symbol(&mut self, j: usize, symbol: char) -> usize {
        if j >= self.candidate.len() {
            self.extend(j + 1 - self.candidate.len());
        }
        self.candidate[j] = Some(symbol);

        let mut column_min = 0;
        for column in (j + 1)..=self.candidate.len() {
            let minimum = self.update_column(column);
            if column == j + 1 {
                column_min = minimum;
            }
        }
        column_min
    }

    /// Distance between the query and the candidate up to its first unset symbol.
    pub fn distance(&self) -> usize {
        let j = self
            .candidate
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.candidate.len());
        self.table[self.query.len()][j]
    }

    /// Distance between the query and the first `j` candidate symbols.
    pub fn distance_at(&self, j: usize) -> Result<usize> {
        self.table[self.query.len()]
            .get(j)
            .copied()
            .ok_or_else(|| {
                PilumError::out_of_range(format!(
                    "column {j} is outside 0..={}",
                    self.candidate.len()
                ))
            })
    }

    /// The first `j` candidate symbols, or the whole candidate if it is shorter.
    pub fn prefix(&self, j: usize) -> String {
        self.candidate
            .iter()
            .take(j)
            .map(|symbol| symbol.unwrap_or(PLACEHOLDER))
            .collect()
    }

    fn extend(&mut self, extra: usize) {
        let current = self.candidate.len();
        self.candidate.extend(std::iter::repeat_n(None, extra));
        self.table[0].extend((current + 1)..=(current + extra));
        for row in self.table.iter_mut().skip(1) {
            row.extend(std::iter::repeat_n(0, extra));
        }
    }

    fn update_column(&mut self, j: usize) -> usize {
        let mut column_min = self.table[0][j];
        for i in 1..=self.query.len() {
            let symbol = self.candidate[j - 1];
            let cost = usize::from(symbol != Some(self.query[i - 1]));

            let deletion = self.table[i - 1][j] + 1;
            let insertion = self.table[i][j - 1] + 1;
            let substitution = self.table[i - 1][j - 1] + cost;
            let transposition = (i > 1
                && j > 1
                && Some(self.query[i - 1]) == self.candidate[j - 2]
                && Some(self.query[i - 2]) == symbol)
                .then(|| self.table[i - 2][j - 2] + 1);

            let value = deletion
                .min(insertion)
                .min(substitution)
                .min(transposition.unwrap_or(usize::MAX));
            self.table[i][j] = value;
            column_min = column_min.min(value);
        }
        column_min
    }
}

impl fmt::Display for EditTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for symbol in &self.candidate {
            write!(f, "{:>3}", symbol.unwrap_or(PLACEHOLDER))?;
        }
        writeln!(f)?;

        for (i, row) in self.table.iter().enumerate() {
            let label = if i == 0 { ' ' } else { self.query[i - 1] };
            write!(f, "{label}")?;
            for value in row {
                write!(f, "{value:>3}")?;
            }
            if i < self.query.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_distances() {
        let cases = [
            (0, "elephant", "elephant"),
            (1, "elephant", "elephnat"),
            (3, "relevant", "elephant"),
            (6, "ballad", "handball"),
            (7, "bullfrog", "frogger"),
        ];
        for (expected, query, candidate) in cases {
            assert_eq!(
                EditTable::new(query, candidate).distance(),
                expected,
                "{query} / {candidate}"
            );
        }
    }

    #[test]
    fn test_transposition_at_start() {
        assert_eq!(EditTable::new("ab", "ba").distance(), 1);
        assert_eq!(EditTable::new("abc", "acb").distance(), 1);
    }

    #[test]
    fn test_column_minimum_includes_padding_row() {
        let mut table = EditTable::uncomputed("", "ab");
        assert_eq!(table.update(1).unwrap(), 1);
        assert_eq!(table.update(2).unwrap(), 2);

        let mut table = EditTable::uncomputed("xy", "abc");
        assert_eq!(table.update(1).unwrap(), 1);
        assert_eq!(table.update(2).unwrap(), 2);
        assert_eq!(table.update(3).unwrap(), 3);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(EditTable::new("", "").distance(), 0);
        assert_eq!(EditTable::new("abc", "").distance(), 3);
        assert_eq!(EditTable::new("", "abcd").distance(), 4);
    }

    #[test]
    fn test_distance_at_prefix() {
        let table = EditTable::new("frog", "frogger");
        assert_eq!(table.distance_at(4).unwrap(), 0);
        assert_eq!(table.distance_at(0).unwrap(), 4);
        assert_eq!(table.distance(), 3);
        assert!(matches!(
            table.distance_at(8),
            Err(PilumError::OutOfRange(_))
        ));
        assert_eq!(table.prefix(4), "frog");
        assert_eq!(table.prefix(100), "frogger");
    }

    #[test]
    fn test_update_bounds() {
        let mut table = EditTable::uncomputed("abc", "abc");
        assert_eq!(table.update(1).unwrap(), 0);
        assert_eq!(table.update(2).unwrap(), 0);
        assert_eq!(table.update(3).unwrap(), 0);
        assert_eq!(table.distance(), 0);
        assert!(table.update(0).is_err());
        assert!(table.update(4).is_err());
    }

    #[test]
    fn test_update_symbol_walks_like_a_trie() {
        let mut table = EditTable::uncomputed("elephant", "");
        for (j, symbol) in "elephnat".chars().enumerate() {
            table.update_symbol(j, symbol);
        }
        assert_eq!(table.candidate(), "elephnat");
        assert_eq!(table.distance(), 1);

        // Backtrack and take a different branch.
        table.update_symbol(5, 'a');
        table.update_symbol(6, 'n');
        assert_eq!(table.candidate(), "elephant");
        assert_eq!(table.distance(), 0);
    }

    #[test]
    fn test_update_symbol_column_minimum() {
        let mut table = EditTable::uncomputed("cat", "");
        assert_eq!(table.update_symbol(0, 'x'), 1);
        assert_eq!(table.update_symbol(1, 'y'), 2);
        assert_eq!(table.update_symbol(2, 'z'), 3);
    }

    #[test]
    fn test_unset_symbols() {
        let mut table = EditTable::uncomputed("abcd", "");
        table.update_symbol(3, 'd');
        assert_eq!(table.candidate(), "???d");
        // Distance stops at the first unset symbol.
        assert_eq!(table.distance(), 4);
    }

    #[test]
    fn test_display() {
        let table = EditTable::new("ab", "b");
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["      b", "   0  1", "a  1  1", "b  2  1"]);
    }
}
