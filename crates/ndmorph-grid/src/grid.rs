//! Dense N-dimensional element storage.

use crate::error::GridError;
use crate::shape::{Positions, Shape};
use ndmorph_core::{Coord, Element};

/// A dense, row-major N-dimensional array of `T`.
///
/// Two access modes are offered:
///
/// - **checked**: [`get`](Self::get) / [`get_mut`](Self::get_mut) return
///   `None` for coordinates outside the grid;
/// - **known-valid**: [`at`](Self::at) / [`at_mut`](Self::at_mut) are for
///   coordinates the caller has already bounds-tested, and panic if that
///   contract is broken.
///
/// # Examples
///
/// ```
/// use ndmorph_grid::{Grid, Shape};
///
/// let shape = Shape::new(&[2, 2]).unwrap();
/// let mut g = Grid::<u8>::zeros(shape).unwrap();
/// *g.at_mut(&[1, 0]) = 7;
/// assert_eq!(g.get(&[1, 0]), Some(7));
/// assert_eq!(g.get(&[2, 0]), None);
/// assert_eq!(g.as_slice(), &[0, 0, 7, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    shape: Shape,
    data: Vec<T>,
}

/// Allocate a `Vec` of `len` copies of `value`, reporting exhaustion
/// instead of aborting.
///
/// # Errors
///
/// [`GridError::AllocationFailed`] if the allocator refuses the request.
pub fn alloc_filled<V: Clone>(len: usize, value: V) -> Result<Vec<V>, GridError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| GridError::AllocationFailed { elements: len })?;
    data.resize(len, value);
    Ok(data)
}

impl<T: Element> Grid<T> {
    /// A grid of `shape` with every element set to `T::ZERO`.
    ///
    /// # Errors
    ///
    /// [`GridError::AllocationFailed`] if storage cannot be allocated.
    pub fn zeros(shape: Shape) -> Result<Self, GridError> {
        Self::filled(shape, T::ZERO)
    }

    /// A grid of `shape` with every element set to `value`.
    ///
    /// # Errors
    ///
    /// [`GridError::AllocationFailed`] if storage cannot be allocated.
    pub fn filled(shape: Shape, value: T) -> Result<Self, GridError> {
        let data = alloc_filled(shape.len(), value)?;
        Ok(Self { shape, data })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// [`GridError::LengthMismatch`] if `data.len() != shape.len()`.
    pub fn from_vec(shape: Shape, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != shape.len() {
            return Err(GridError::LengthMismatch {
                expected: shape.len(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Build a shape from `dims` and wrap `data` in one step.
    ///
    /// # Errors
    ///
    /// Any error from [`Shape::new`] or [`Grid::from_vec`].
    pub fn new(dims: &[usize], data: Vec<T>) -> Result<Self, GridError> {
        Self::from_vec(Shape::new(dims)?, data)
    }

    /// A zeroed grid with the same shape as `self`.
    ///
    /// # Errors
    ///
    /// [`GridError::AllocationFailed`] if storage cannot be allocated.
    pub fn zeros_like(&self) -> Result<Self, GridError> {
        Self::zeros(self.shape.clone())
    }

    /// Checked read: `None` if `coord` is outside the grid.
    pub fn get(&self, coord: &[i32]) -> Option<T> {
        self.shape.flat_index(coord).map(|i| self.data[i])
    }

    /// Checked mutable access: `None` if `coord` is outside the grid.
    pub fn get_mut(&mut self, coord: &[i32]) -> Option<&mut T> {
        let i = self.shape.flat_index(coord)?;
        Some(&mut self.data[i])
    }

    /// Read at a coordinate already known to be inside the grid.
    ///
    /// # Panics
    ///
    /// In debug builds, if `coord` is outside the grid. Release builds only
    /// panic when the computed flat index falls past the end of storage.
    pub fn at(&self, coord: &[i32]) -> T {
        self.data[self.shape.flat_index_unchecked(coord)]
    }

    /// Mutable access at a coordinate already known to be inside the grid.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`at`](Self::at).
    pub fn at_mut(&mut self, coord: &[i32]) -> &mut T {
        let i = self.shape.flat_index_unchecked(coord);
        &mut self.data[i]
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Position-aware traversal: `(coord, value)` in row-major order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        self.shape.positions().zip(self.data.iter().copied())
    }

    /// Number of nonzero elements.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|v| v.is_nonzero()).count()
    }
}

impl<T> Grid<T> {
    /// The grid's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Per-axis extents.
    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the grid holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row-major traversal of the coordinates, without values.
    pub fn positions(&self) -> Positions {
        self.shape.positions()
    }

    /// Consume the grid, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(dims: &[usize]) -> Shape {
        Shape::new(dims).unwrap()
    }

    #[test]
    fn zeros_has_shape_len() {
        let g = Grid::<i16>::zeros(shape(&[3, 4, 2])).unwrap();
        assert_eq!(g.len(), 24);
        assert_eq!(g.ndim(), 3);
        assert!(g.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Grid::from_vec(shape(&[2, 2]), vec![1u8, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn checked_and_known_valid_access_agree() {
        let g = Grid::new(&[2, 3], vec![0u32, 1, 2, 3, 4, 5]).unwrap();
        for coord in g.positions() {
            assert_eq!(g.get(&coord), Some(g.at(&coord)));
        }
        assert_eq!(g.at(&[1, 2]), 5);
        assert_eq!(g.get(&[0, -1]), None);
        assert_eq!(g.get(&[0, 0, 0]), None);
    }

    #[test]
    #[should_panic]
    fn at_panics_outside_grid() {
        let g = Grid::new(&[2], vec![1u8, 2]).unwrap();
        let _ = g.at(&[5]);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut g = Grid::<u8>::zeros(shape(&[3])).unwrap();
        *g.get_mut(&[2]).unwrap() = 9;
        assert!(g.get_mut(&[3]).is_none());
        assert_eq!(g.into_vec(), vec![0, 0, 9]);
    }

    #[test]
    fn iter_indexed_pairs_coords_with_values() {
        let g = Grid::new(&[2, 2], vec![10i64, 11, 12, 13]).unwrap();
        let items: Vec<(Vec<i32>, i64)> =
            g.iter_indexed().map(|(c, v)| (c.to_vec(), v)).collect();
        assert_eq!(
            items,
            vec![
                (vec![0, 0], 10),
                (vec![0, 1], 11),
                (vec![1, 0], 12),
                (vec![1, 1], 13),
            ]
        );
    }

    #[test]
    fn count_nonzero_and_fill() {
        let mut g = Grid::new(&[4], vec![0u8, 3, 0, 1]).unwrap();
        assert_eq!(g.count_nonzero(), 2);
        g.fill(5);
        assert_eq!(g.count_nonzero(), 4);
    }

    #[test]
    fn zeros_like_keeps_shape() {
        let g = Grid::new(&[1, 3], vec![4u16, 5, 6]).unwrap();
        let z = g.zeros_like().unwrap();
        assert_eq!(z.shape(), g.shape());
        assert_eq!(z.count_nonzero(), 0);
    }

    #[test]
    fn alloc_filled_reports_exhaustion() {
        let err = alloc_filled(usize::MAX, 0u64).unwrap_err();
        assert_eq!(
            err,
            GridError::AllocationFailed {
                elements: usize::MAX
            }
        );
    }
}
