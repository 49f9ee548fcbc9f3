use crate::{ColNonZeros, NonZeros, RowNonZeros};

/// Compressed-Sparse-Row storage for a square or rectangular `f64` matrix.
///
/// The data structure is composed of three arrays: `offsets`, `col` and
/// `val`. For a matrix with `rows` rows and `nnz` non-zero entries, `offsets`
/// has exactly `rows + 1` entries and `col`/`val` exactly `nnz` entries each.
///
/// For a given row `i`, `offsets[i]` stores the start index of `i`'s entries
/// in `col`/`val`. The number of non-zeros in `i` is `offsets[i + 1] -
/// offsets[i]`. Within a row, `col` is sorted, so row lookups and row-visitor
/// iteration both proceed without scanning the whole row.
///
/// A `Csr` is immutable once built; construct one via
/// [`crate::triplets::SparseTriplets::to_csr`].
#[derive(Debug, Clone)]
pub struct Csr {
    rows: usize,
    cols: usize,
    offsets: Box<[usize]>,
    col: Box<[usize]>,
    val: Box<[f64]>,
}

impl Csr {
    /// Builds a `Csr` from already-grouped, per-row `(col, value)` pairs.
    ///
    /// Each inner vector is sorted by column internally; duplicate columns
    /// within a row are not deduplicated, since `precond`'s working map never
    /// produces them (see its zero fill-in rule).
    pub fn from_rows(rows: usize, cols: usize, mut by_row: Vec<Vec<(usize, f64)>>) -> Self {
        assert_eq!(by_row.len(), rows, "one row vector per matrix row");

        let mut offsets = Vec::with_capacity(rows + 1);
        let nnz: usize = by_row.iter().map(Vec::len).sum();
        let mut col = Vec::with_capacity(nnz);
        let mut val = Vec::with_capacity(nnz);

        offsets.push(0);
        for row in by_row.iter_mut() {
            row.sort_unstable_by_key(|(c, _)| *c);
            for (c, v) in row.drain(..) {
                col.push(c);
                val.push(v);
            }
            offsets.push(col.len());
        }

        Self {
            rows,
            cols,
            offsets: offsets.into_boxed_slice(),
            col: col.into_boxed_slice(),
            val: val.into_boxed_slice(),
        }
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.val.len()
    }

    fn row_slice(&self, row: usize) -> (&[usize], &[f64]) {
        let start = self.offsets[row];
        let end = self.offsets[row + 1];
        (&self.col[start..end], &self.val[start..end])
    }

    /// Looks up `(row, col)`, returning `0.0` when the pattern has no entry
    /// there. Uses binary search since each row is stored sorted by column.
    pub fn at(&self, row: usize, col: usize) -> f64 {
        let (cols, vals) = self.row_slice(row);
        match cols.binary_search(&col) {
            Ok(i) => vals[i],
            Err(_) => 0.0,
        }
    }

    /// Produces the transpose `{(j, i, v) : (i, j, v) in self}` as a new
    /// `Csr`.
    pub fn transpose(&self) -> Csr {
        let mut by_row = vec![Vec::new(); self.cols];
        self.for_each_non_zero(|i, j, v| by_row[j].push((i, v)));
        Csr::from_rows(self.cols, self.rows, by_row)
    }
}

impl NonZeros for Csr {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn for_each_non_zero(&self, mut f: impl FnMut(usize, usize, f64)) {
        for row in 0..self.rows {
            let (cols, vals) = self.row_slice(row);
            for (&c, &v) in cols.iter().zip(vals) {
                f(row, c, v);
            }
        }
    }
}

impl RowNonZeros for Csr {
    fn for_each_row_non_zero(&self, row: usize, mut f: impl FnMut(usize, usize, f64)) {
        let (cols, vals) = self.row_slice(row);
        for (&c, &v) in cols.iter().zip(vals) {
            f(row, c, v);
        }
    }
}

impl ColNonZeros for Csr {
    fn for_each_col_non_zero(&self, col: usize, mut f: impl FnMut(usize, usize, f64)) {
        // Csr is row-major, so a column visit scans every row's slice. This
        // is the one place a column-major sibling would pay off; precond
        // only calls it once per column during partial pivoting.
        for row in 0..self.rows {
            let (cols, vals) = self.row_slice(row);
            if let Ok(i) = cols.binary_search(&col) {
                f(row, col, vals[i]);
            }
        }
    }
}
