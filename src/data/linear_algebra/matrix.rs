//! # Dense matrix
//!
//! A dense matrix backed by a single row-major buffer. Rows are borrowed as slices; the resizes
//! needed when entering and leaving the first simplex phase rebuild the buffer once instead of
//! reallocating per row.
use std::fmt::{Debug, Display};
use std::mem;
use std::ops::{Index, IndexMut};

use num::Zero;

/// Indices start at `0`. The row length is fixed at creation and changes only through the
/// explicit column resizes.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RowMajor<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: PartialEq + Display + Debug> RowMajor<F> {
    /// Create a matrix from a nested row representation.
    pub fn from_rows(rows: Vec<Vec<F>>, nr_columns: usize) -> Self {
        let nr_rows = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let mut data = Vec::with_capacity(nr_rows * nr_columns);
        for row in rows {
            data.extend(row);
        }

        Self { data, nr_rows, nr_columns, }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Borrow a row as a slice.
    pub fn row(&self, row: usize) -> &[F] {
        debug_assert!(row < self.nr_rows);

        &self.data[(row * self.nr_columns)..((row + 1) * self.nr_columns)]
    }

    /// Borrow a row as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [F] {
        debug_assert!(row < self.nr_rows);

        &mut self.data[(row * self.nr_columns)..((row + 1) * self.nr_columns)]
    }

    /// Borrow two different rows at once, the first mutably.
    ///
    /// Used for the elimination step of a pivot, where the pivot row is read while another row is
    /// modified.
    pub fn target_and_source_row(&mut self, target: usize, source: usize) -> (&mut [F], &[F]) {
        debug_assert!(target < self.nr_rows && source < self.nr_rows);
        debug_assert_ne!(target, source);

        let n = self.nr_columns;
        if target < source {
            let (front, back) = self.data.split_at_mut(source * n);
            (
                &mut front[(target * n)..((target + 1) * n)],
                &back[..n],
            )
        } else {
            let (front, back) = self.data.split_at_mut(target * n);
            (
                &mut back[..n],
                &front[(source * n)..((source + 1) * n)],
            )
        }
    }

    /// Append zero-initialized columns to every row.
    pub fn extend_columns(&mut self, extra: usize)
    where
        F: Zero,
    {
        let new_nr_columns = self.nr_columns + extra;
        let old = mem::take(&mut self.data);
        let mut data = Vec::with_capacity(self.nr_rows * new_nr_columns);
        let mut values = old.into_iter();
        for _ in 0..self.nr_rows {
            data.extend(values.by_ref().take(self.nr_columns));
            data.extend((0..extra).map(|_| F::zero()));
        }

        self.data = data;
        self.nr_columns = new_nr_columns;
    }

    /// Drop the trailing columns of every row, keeping the first `new_nr_columns`.
    pub fn truncate_columns(&mut self, new_nr_columns: usize) {
        debug_assert!(new_nr_columns <= self.nr_columns);

        let old = mem::take(&mut self.data);
        let mut data = Vec::with_capacity(self.nr_rows * new_nr_columns);
        let mut values = old.into_iter();
        for _ in 0..self.nr_rows {
            data.extend(values.by_ref().take(new_nr_columns));
            for _ in new_nr_columns..self.nr_columns {
                values.next();
            }
        }

        self.data = data;
        self.nr_columns = new_nr_columns;
    }

    /// Remove a single row.
    pub fn remove_row(&mut self, row: usize) {
        debug_assert!(row < self.nr_rows);

        let n = self.nr_columns;
        self.data.drain((row * n)..((row + 1) * n));
        self.nr_rows -= 1;
    }
}

impl<F: PartialEq + Display + Debug> Index<(usize, usize)> for RowMajor<F> {
    type Output = F;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.nr_rows && column < self.nr_columns);

        &self.data[row * self.nr_columns + column]
    }
}

impl<F: PartialEq + Display + Debug> IndexMut<(usize, usize)> for RowMajor<F> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.nr_rows && column < self.nr_columns);

        &mut self.data[row * self.nr_columns + column]
    }
}

#[cfg(test)]
mod test {
    use num::FromPrimitive;

    use crate::data::number_types::RationalBig;
    use crate::RB;

    use super::RowMajor;

    fn matrix() -> RowMajor<RationalBig> {
        RowMajor::from_rows(
            vec![
                vec![RB!(1), RB!(2)],
                vec![RB!(3), RB!(4)],
                vec![RB!(5), RB!(6)],
            ],
            2,
        )
    }

    #[test]
    fn test_rows_and_indexing() {
        let m = matrix();
        assert_eq!(m.nr_rows(), 3);
        assert_eq!(m.nr_columns(), 2);
        assert_eq!(m.row(1), &[RB!(3), RB!(4)]);
        assert_eq!(m[(2, 0)], RB!(5));
    }

    #[test]
    fn test_target_and_source_row() {
        let mut m = matrix();
        let (target, source) = m.target_and_source_row(0, 2);
        assert_eq!(target, &[RB!(1), RB!(2)]);
        assert_eq!(source, &[RB!(5), RB!(6)]);

        let (target, source) = m.target_and_source_row(2, 1);
        assert_eq!(target, &[RB!(5), RB!(6)]);
        assert_eq!(source, &[RB!(3), RB!(4)]);
    }

    #[test]
    fn test_extend_and_truncate_columns() {
        let mut m = matrix();
        m.extend_columns(2);
        assert_eq!(m.nr_columns(), 4);
        assert_eq!(m.row(1), &[RB!(3), RB!(4), RB!(0), RB!(0)]);

        m[(1, 3)] = RB!(7);
        m.truncate_columns(2);
        assert_eq!(m.nr_columns(), 2);
        assert_eq!(m.row(1), &[RB!(3), RB!(4)]);
        assert_eq!(m.row(2), &[RB!(5), RB!(6)]);
    }

    #[test]
    fn test_remove_row() {
        let mut m = matrix();
        m.remove_row(1);
        assert_eq!(m.nr_rows(), 2);
        assert_eq!(m.row(0), &[RB!(1), RB!(2)]);
        assert_eq!(m.row(1), &[RB!(5), RB!(6)]);
    }
}
