//! Fixed-shape grid stored as an [`Array`] of row [`Array`]s.

use core::fmt;
use core::ops;

use crate::{Array, Result};

/// A `rows x cols` grid.
///
/// # Example
///
/// ```
/// use linear_collections::Matrix;
///
/// let mut mat: Matrix<i32> = Matrix::new(3, 4);
/// mat.set(1, 2, 5).unwrap();
/// mat.set(0, 0, 9).unwrap();
/// assert_eq!(mat[(1, 2)], 5);
/// assert_eq!(
///     mat.to_string(),
///     "[9, 0, 0, 0]\n[0, 0, 5, 0]\n[0, 0, 0, 0]\n"
/// );
/// ```
pub struct Matrix<T> {
    rows: Array<Array<T>>,
    cols: usize,
}

impl<T: Default> Matrix<T> {
    /// Creates a grid filled with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be > 0");
        let mut data = Array::with_capacity(rows);
        for _ in 0..rows {
            let mut row = Array::with_capacity(cols);
            for _ in 0..cols {
                row.push(T::default());
            }
            data.push(row);
        }
        Self { rows: data, cols }
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) for the first coordinate that is out of
    /// range.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.rows.get(row)?.get(col)
    }

    /// Replaces the cell at (`row`, `col`), returning the previous value.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) for the first coordinate that is out of
    /// range.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<T> {
        self.rows.get_mut(row)?.set(col, value)
    }

    /// Iterates over the rows, top to bottom.
    pub fn iter_rows(&self) -> impl DoubleEndedIterator<Item = &Array<T>> {
        self.rows.iter()
    }
}

impl<T> ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T> ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_rows()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            cols: self.cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn starts_with_defaults() {
        let mat: Matrix<u8> = Matrix::new(2, 3);
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 3);
        assert_eq!(mat.to_string(), "[0, 0, 0]\n[0, 0, 0]\n");
    }

    #[test]
    fn assignment_by_tuple_index() {
        let mut mat: Matrix<i32> = Matrix::new(3, 4);
        mat[(1, 2)] = 5;
        mat[(0, 0)] = 9;
        assert_eq!(mat[(1, 2)], 5);
        assert_eq!(mat.get(0, 0), Ok(&9));
        assert_eq!(
            mat.to_string(),
            "[9, 0, 0, 0]\n[0, 0, 5, 0]\n[0, 0, 0, 0]\n"
        );
    }

    #[test]
    fn set_returns_previous() {
        let mut mat: Matrix<i32> = Matrix::new(1, 1);
        assert_eq!(mat.set(0, 0, 4), Ok(0));
        assert_eq!(mat.set(0, 0, 7), Ok(4));
    }

    #[test]
    fn bad_coordinates() {
        let mut mat: Matrix<i32> = Matrix::new(2, 2);
        assert_eq!(
            mat.get(2, 0),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(
            mat.set(0, 5, 1),
            Err(Error::IndexOutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "matrix dimensions must be > 0")]
    fn zero_rows_panics() {
        let _ = Matrix::<u8>::new(0, 3);
    }
}
