//! Dense row-major matrix
//!
//! [`Matrix`] stores its grid as a vector of rows. The row count is the
//! number of stored rows and the column count is the length of the first
//! row; every constructor checks that all rows share that length.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::{Flatten, FusedIterator};
use core::ops::{Index, IndexMut};
use core::slice;

use log::{debug, trace};

use crate::{MatrixError, Result};

/// Which diagonal of a square matrix to traverse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalKind {
    /// Elements at `(i, i)`
    Primary,
    /// Elements at `(i, rows - 1 - i)`, the side diagonal
    Anti,
}

/// Dense matrix exclusively owning its elements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix<T> {
    items: Vec<Vec<T>>,
}

impl<T: Clone + Default> Matrix<T> {
    /// Create a `rows x cols` matrix filled with the default value
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            items: alloc::vec![alloc::vec![T::default(); cols]; rows],
        }
    }

    /// Create a `size x size` matrix filled with the default value
    pub fn square(size: usize) -> Self {
        Matrix::new(size, size)
    }
}

impl<T> Matrix<T> {
    /// Create an empty matrix with room for `rows` rows
    pub fn with_capacity(rows: usize) -> Self {
        Matrix {
            items: Vec::with_capacity(rows),
        }
    }

    /// Wrap a list of rows, checking that every row has the same length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, ragged)) = rows
                .iter()
                .enumerate()
                .find(|(_, row)| row.len() != expected)
            {
                return Err(MatrixError::InvalidShape {
                    row,
                    len: ragged.len(),
                    expected,
                });
            }
        }

        Ok(Matrix { items: rows })
    }

    /// Append a row
    ///
    /// The first row pushed into an empty matrix fixes the column count.
    pub fn push_row(&mut self, row: Vec<T>) -> Result<()> {
        if !self.items.is_empty() && row.len() != self.cols() {
            return Err(MatrixError::InvalidShape {
                row: self.rows(),
                len: row.len(),
                expected: self.cols(),
            });
        }

        self.items.push(row);
        Ok(())
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.items.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.items.first().map_or(0, Vec::len)
    }

    /// Matrix dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Whether the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Whether the matrix holds no elements
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Get a reference to an element, or `None` out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.items.get(row).and_then(|items| items.get(col))
    }

    /// Overwrite an element
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    /// Exchange two elements
    ///
    /// Swapping a position with itself leaves the matrix unchanged.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap_elements(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ((ar, ac), (br, bc)) = if a.0 <= b.0 { (a, b) } else { (b, a) };

        if ar == br {
            self.items[ar].swap(ac, bc);
        } else {
            // `ar < br`, so row `ar` lives in the head and row `br` starts the tail.
            let (head, tail) = self.items.split_at_mut(br);
            core::mem::swap(&mut head[ar][ac], &mut tail[0][bc]);
        }
    }

    /// Transpose in place, turning a `rows x cols` matrix into `cols x rows`
    ///
    /// A square matrix is transposed by swapping elements across the main
    /// diagonal and never allocates. Any other shape moves every element
    /// into a freshly allocated store that replaces the old one.
    pub fn transpose(&mut self) {
        let (rows, cols) = self.shape();

        if rows == cols {
            debug!("transposing {rows}x{cols} matrix in place");
            for i in 0..rows {
                for j in (i + 1)..cols {
                    self.swap_elements((i, j), (j, i));
                }
            }
        } else {
            debug!("transposing {rows}x{cols} matrix into a new {cols}x{rows} store");
            let mut sources: Vec<_> = core::mem::take(&mut self.items)
                .into_iter()
                .map(Vec::into_iter)
                .collect();

            let mut transposed = Vec::with_capacity(cols);
            for _ in 0..cols {
                transposed.push(sources.iter_mut().filter_map(Iterator::next).collect());
            }
            self.items = transposed;
        }
    }

    /// Coordinates of the `i`-th element of a diagonal
    pub fn diagonal_position(&self, kind: DiagonalKind, i: usize) -> (usize, usize) {
        match kind {
            DiagonalKind::Primary => (i, i),
            DiagonalKind::Anti => (i, self.rows() - 1 - i),
        }
    }

    /// Iterate over a diagonal of a square matrix
    ///
    /// The caller guarantees the matrix is square.
    pub fn diagonal(&self, kind: DiagonalKind) -> Diagonal<'_, T> {
        debug_assert!(self.is_square(), "diagonal of a non-square matrix");

        Diagonal {
            matrix: self,
            kind,
            front: 0,
            back: self.rows(),
        }
    }

    /// Sort a diagonal of a square matrix with an exchange sort
    ///
    /// For each position `i` along the diagonal, the element at `i` is
    /// compared with every later position `j` and the two are swapped when
    /// `cmp` orders `i` after `j`. The sort stops after the first pass over
    /// `i` that swaps nothing.
    pub fn sort_diagonal_by<F>(&mut self, kind: DiagonalKind, mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        debug_assert!(self.is_square(), "diagonal of a non-square matrix");
        let len = self.rows();

        for i in 0..len {
            let mut swapped = false;
            let a = self.diagonal_position(kind, i);

            for j in (i + 1)..len {
                let b = self.diagonal_position(kind, j);
                if cmp(&self[a], &self[b]) == Ordering::Greater {
                    self.swap_elements(a, b);
                    swapped = true;
                }
            }

            trace!("diagonal pass {i} swapped: {swapped}");
            if !swapped {
                break;
            }
        }
    }

    /// Iterate over all elements in row-major order
    pub fn iter(&self) -> Flatten<slice::Iter<'_, Vec<T>>> {
        self.items.iter().flatten()
    }

    /// Iterate mutably over all elements in row-major order
    pub fn iter_mut(&mut self) -> Flatten<slice::IterMut<'_, Vec<T>>> {
        self.items.iter_mut().flatten()
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.items.iter().map(Vec::as_slice)
    }

    /// Consume the matrix into its rows
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.items
    }

    /// Copy the grid out as a list of rows
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &Self::Output {
        &self.items[row]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.items[row]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.items[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.items[row][col]
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = Flatten<slice::Iter<'a, Vec<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.items.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Matrix<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Matrix<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

//------------------------------------------------------------------------------
// Diagonal iterator
//------------------------------------------------------------------------------

/// Iterator over one diagonal of a square matrix
///
/// Clone it before consuming to traverse the same diagonal again.
#[derive(Debug)]
pub struct Diagonal<'a, T> {
    matrix: &'a Matrix<T>,
    kind: DiagonalKind,
    front: usize,
    back: usize,
}

impl<T> Clone for Diagonal<'_, T> {
    fn clone(&self) -> Self {
        Diagonal { ..*self }
    }
}

impl<'a, T> Iterator for Diagonal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let position = self.matrix.diagonal_position(self.kind, self.front);
        self.front += 1;
        Some(&self.matrix[position])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Diagonal<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        let position = self.matrix.diagonal_position(self.kind, self.back);
        Some(&self.matrix[position])
    }
}

impl<T> ExactSizeIterator for Diagonal<'_, T> {}

impl<T> FusedIterator for Diagonal<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rand::Rng;

    fn grid(rows: Vec<Vec<i32>>) -> Matrix<i32> {
        Matrix::from_rows(rows).unwrap()
    }

    fn random_matrix(rng: &mut impl Rng, rows: usize, cols: usize) -> Matrix<i32> {
        let items = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-100..100)).collect())
            .collect();
        grid(items)
    }

    #[test]
    fn test_constructors() {
        let zeros = Matrix::<i32>::new(2, 3);
        assert_eq!(zeros.shape(), (2, 3));
        assert!(zeros.iter().all(|&value| value == 0));

        let square = Matrix::<f64>::square(4);
        assert_eq!(square.shape(), (4, 4));
        assert!(square.is_square());

        let empty = Matrix::<i32>::from_rows(vec![]).unwrap();
        assert_eq!(empty.shape(), (0, 0));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
        assert_eq!(
            result,
            Err(MatrixError::InvalidShape {
                row: 2,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn test_push_row() {
        let mut matrix = Matrix::with_capacity(2);
        assert_eq!(matrix.push_row(vec![1, 2]), Ok(()));
        assert_eq!(
            matrix.push_row(vec![3]),
            Err(MatrixError::InvalidShape {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(matrix.push_row(vec![3, 4]), Ok(()));
        assert_eq!(matrix, grid(vec![vec![1, 2], vec![3, 4]]));
    }

    #[test]
    fn test_get_and_set() {
        let mut matrix = grid(vec![vec![1, 2], vec![3, 4]]);

        assert_eq!(matrix.get(1, 0), Some(&3));
        assert_eq!(matrix.get(2, 0), None);
        assert_eq!(matrix.get(0, 2), None);

        matrix.set(0, 1, 9);
        assert_eq!(matrix[(0, 1)], 9);
        assert_eq!(&matrix[1], &[3, 4]);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut matrix = Matrix::<i32>::new(2, 2);
        matrix.set(2, 0, 1);
    }

    #[test]
    fn test_swap_elements() {
        let mut matrix = grid(vec![vec![1, 2, 3], vec![4, 5, 6]]);

        matrix.swap_elements((0, 0), (1, 2));
        assert_eq!(matrix, grid(vec![vec![6, 2, 3], vec![4, 5, 1]]));

        // Order of the arguments does not matter.
        matrix.swap_elements((1, 2), (0, 0));
        assert_eq!(matrix, grid(vec![vec![1, 2, 3], vec![4, 5, 6]]));

        matrix.swap_elements((1, 0), (1, 2));
        assert_eq!(matrix, grid(vec![vec![1, 2, 3], vec![6, 5, 4]]));

        let before = matrix.clone();
        matrix.swap_elements((1, 1), (1, 1));
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_swap_twice_restores() {
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let rows = rng.gen_range(1..6);
            let cols = rng.gen_range(1..6);
            let original = random_matrix(&mut rng, rows, cols);
            let a = (rng.gen_range(0..rows), rng.gen_range(0..cols));
            let b = (rng.gen_range(0..rows), rng.gen_range(0..cols));

            let mut matrix = original.clone();
            matrix.swap_elements(a, b);
            assert_eq!(matrix[a], original[b]);
            assert_eq!(matrix[b], original[a]);
            matrix.swap_elements(a, b);
            assert_eq!(matrix, original);
        }
    }

    #[test]
    fn test_transpose_square() {
        let mut matrix = grid(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        matrix.transpose();
        assert_eq!(
            matrix,
            grid(vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]])
        );
    }

    #[test]
    fn test_transpose_rectangular() {
        let mut matrix = grid(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        matrix.transpose();
        assert_eq!(matrix.shape(), (3, 2));
        assert_eq!(matrix, grid(vec![vec![1, 4], vec![2, 5], vec![3, 6]]));

        matrix.transpose();
        assert_eq!(matrix, grid(vec![vec![1, 2, 3], vec![4, 5, 6]]));

        let mut column = grid(vec![vec![1], vec![2], vec![3]]);
        column.transpose();
        assert_eq!(column, grid(vec![vec![1, 2, 3]]));
    }

    #[test]
    fn test_transpose_is_an_involution() {
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let rows = rng.gen_range(1..7);
            let cols = if rng.gen_bool(0.5) {
                rows
            } else {
                rng.gen_range(1..7)
            };
            let original = random_matrix(&mut rng, rows, cols);

            let mut matrix = original.clone();
            matrix.transpose();
            assert_eq!(matrix.shape(), (cols, rows));
            for r in 0..rows {
                for c in 0..cols {
                    assert_eq!(matrix[(c, r)], original[(r, c)]);
                }
            }
            matrix.transpose();
            assert_eq!(matrix, original);
        }
    }

    #[test]
    fn test_diagonals() {
        let matrix = grid(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);

        let primary: Vec<_> = matrix.diagonal(DiagonalKind::Primary).copied().collect();
        assert_eq!(primary, vec![1, 5, 9]);

        let anti = matrix.diagonal(DiagonalKind::Anti);
        assert_eq!(anti.len(), 3);
        let restart = anti.clone();
        assert_eq!(anti.copied().collect::<Vec<_>>(), vec![3, 5, 7]);
        assert_eq!(restart.rev().copied().collect::<Vec<_>>(), vec![7, 5, 3]);

        assert_eq!(matrix.diagonal_position(DiagonalKind::Anti, 0), (0, 2));
        assert_eq!(matrix.diagonal_position(DiagonalKind::Anti, 2), (2, 0));
    }

    #[test]
    fn test_diagonal_of_single_element() {
        let matrix = grid(vec![vec![42]]);
        assert_eq!(
            matrix.diagonal(DiagonalKind::Anti).collect::<Vec<_>>(),
            vec![&42]
        );
    }

    #[test]
    fn test_sort_diagonal_by() {
        let mut matrix = grid(vec![vec![9, 0, 0], vec![0, 8, 0], vec![0, 0, 7]]);
        matrix.sort_diagonal_by(DiagonalKind::Primary, |a, b| a.cmp(b));
        assert_eq!(
            matrix.diagonal(DiagonalKind::Primary).copied().collect::<Vec<_>>(),
            vec![7, 8, 9]
        );
        // Off-diagonal cells are untouched.
        assert_eq!(matrix.iter().filter(|&&value| value == 0).count(), 6);
    }

    #[test]
    fn test_iteration_is_row_major() {
        let matrix = grid(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(
            matrix.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!((&matrix).into_iter().count(), 6);
        assert_eq!(matrix.iter_rows().len(), 2);
    }

    #[test]
    fn test_iter_mut() {
        let mut matrix = grid(vec![vec![1, -2], vec![-3, 4]]);
        for value in matrix.iter_mut() {
            *value = -*value;
        }
        assert_eq!(matrix, grid(vec![vec![-1, 2], vec![3, -4]]));
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
        let matrix = Matrix::try_from(rows.clone()).unwrap();
        assert_eq!(matrix.to_rows(), rows);
        assert_eq!(matrix.into_rows(), rows);
    }

    #[test]
    fn test_display() {
        let matrix = grid(vec![vec![1, -2, 3], vec![4, 5, 60]]);
        assert_eq!(matrix.to_string(), "1 -2 3\n4 5 60");

        let single = grid(vec![vec![7]]);
        assert_eq!(single.to_string(), "7");

        assert_eq!(Matrix::<i32>::default().to_string(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let matrix = grid(vec![vec![1, 2], vec![3, 4]]);
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");

        let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);

        assert!(serde_json::from_str::<Matrix<i32>>("[[1,2],[3]]").is_err());
    }
}
