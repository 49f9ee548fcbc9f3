use ahash::AHashMap;

use crate::csr::Csr;
use crate::{Error, NonZeros};

/// A DOK-style (dictionary-of-keys) sparse matrix builder.
///
/// `set(i, j, v)` is O(1) amortized (a hash map insert per row) and may be
/// called multiple times for the same coordinate; the last write wins. This
/// is the working representation `precond`'s factorizer emits into before
/// converting to [`Csr`] for substitution.
#[derive(Debug, Clone)]
pub struct SparseTriplets {
    rows: usize,
    cols: usize,
    entries: Vec<AHashMap<usize, f64>>,
}

impl SparseTriplets {
    /// Creates an empty `rows x cols` builder.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: (0..rows).map(|_| AHashMap::default()).collect(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sets `(row, col)` to `value`, overwriting any prior entry.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()` or `col >= self.cols()`. Use
    /// [`SparseTriplets::try_set`] to get an [`Error`] back instead.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.try_set(row, col, value).expect("coordinate in bounds");
    }

    /// Fallible form of [`SparseTriplets::set`], for callers building a
    /// matrix from coordinates they haven't already validated (e.g. parsed
    /// input).
    pub fn try_set(&mut self, row: usize, col: usize, value: f64) -> Result<(), Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.entries[row].insert(col, value);
        Ok(())
    }

    /// Returns the current value at `(row, col)`, or `0.0` if unset.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.entries[row].get(&col).copied().unwrap_or(0.0)
    }

    /// Whether `(row, col)` has an entry, regardless of its value.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries[row].contains_key(&col)
    }

    /// Removes and returns the entry at `(row, col)`, if any.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<f64> {
        self.entries[row].remove(&col)
    }

    /// Keys present in `row`, in arbitrary order.
    pub fn row_keys(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries[row].keys().copied()
    }

    /// Converts the builder into immutable compressed-row storage.
    pub fn to_csr(&self) -> Csr {
        let by_row = self
            .entries
            .iter()
            .map(|row| row.iter().map(|(&c, &v)| (c, v)).collect())
            .collect();
        Csr::from_rows(self.rows, self.cols, by_row)
    }
}

impl NonZeros for SparseTriplets {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn for_each_non_zero(&self, mut f: impl FnMut(usize, usize, f64)) {
        for (row, entries) in self.entries.iter().enumerate() {
            for (&col, &v) in entries {
                f(row, col, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut t = SparseTriplets::new(2, 2);
        t.set(0, 1, 4.2);
        assert_eq!(t.get(0, 1), 4.2);
        assert_eq!(t.get(1, 0), 0.0);
    }

    #[test]
    fn set_overwrites() {
        let mut t = SparseTriplets::new(1, 1);
        t.set(0, 0, 1.0);
        t.set(0, 0, 2.0);
        assert_eq!(t.get(0, 0), 2.0);
    }

    #[test]
    #[should_panic]
    fn set_out_of_bounds_panics() {
        let mut t = SparseTriplets::new(1, 1);
        t.set(1, 0, 1.0);
    }

    #[test]
    fn try_set_out_of_bounds_returns_error() {
        let mut t = SparseTriplets::new(1, 1);
        assert_eq!(
            t.try_set(1, 0, 1.0),
            Err(Error::IndexOutOfBounds {
                row: 1,
                col: 0,
                rows: 1,
                cols: 1,
            })
        );
    }

    #[test]
    fn to_csr_preserves_non_zeros() {
        let mut t = SparseTriplets::new(2, 2);
        t.set(0, 0, 1.0);
        t.set(1, 1, 2.0);
        let csr = t.to_csr();
        assert_eq!(csr.at(0, 0), 1.0);
        assert_eq!(csr.at(1, 1), 2.0);
        assert_eq!(csr.nnz(), 2);
    }
}
