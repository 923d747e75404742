//! Grid shapes, row-major strides, and position traversal.

use crate::error::GridError;
use ndmorph_core::Coord;
use smallvec::SmallVec;

/// Extents of an N-dimensional grid and the row-major strides derived
/// from them.
///
/// The last axis varies fastest: `strides[ndim - 1] == 1` and
/// `strides[i] = strides[i + 1] * dims[i + 1]`.
///
/// # Examples
///
/// ```
/// use ndmorph_grid::Shape;
///
/// let shape = Shape::new(&[2, 3, 4]).unwrap();
/// assert_eq!(shape.len(), 24);
/// assert_eq!(shape.strides(), &[12, 4, 1]);
/// assert_eq!(shape.flat_index(&[1, 2, 3]), Some(23));
/// assert_eq!(shape.flat_index(&[2, 0, 0]), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: SmallVec<[usize; 4]>,
    strides: SmallVec<[usize; 4]>,
    len: usize,
}

impl Shape {
    /// Maximum extent per axis: coordinates use `i32`, so extents must fit.
    pub const MAX_EXTENT: usize = i32::MAX as usize;

    /// Build a shape from per-axis extents.
    ///
    /// Zero extents are accepted and yield an empty shape.
    ///
    /// # Errors
    ///
    /// - [`GridError::ZeroDimensional`] if `dims` is empty
    /// - [`GridError::DimensionTooLarge`] if an extent exceeds [`Self::MAX_EXTENT`]
    /// - [`GridError::SizeOverflow`] if the element count overflows `usize`
    pub fn new(dims: &[usize]) -> Result<Self, GridError> {
        if dims.is_empty() {
            return Err(GridError::ZeroDimensional);
        }
        for (axis, &extent) in dims.iter().enumerate() {
            if extent > Self::MAX_EXTENT {
                return Err(GridError::DimensionTooLarge {
                    axis,
                    extent,
                    max: Self::MAX_EXTENT,
                });
            }
        }
        let len = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or(GridError::SizeOverflow)?;

        let n = dims.len();
        let mut strides: SmallVec<[usize; 4]> = smallvec::smallvec![1; n];
        for i in (0..n.saturating_sub(1)).rev() {
            // A zero extent on an earlier axis lets these exceed `len`.
            strides[i] = strides[i + 1].saturating_mul(dims[i + 1]);
        }

        Ok(Self {
            dims: SmallVec::from_slice(dims),
            strides,
            len,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Per-axis extents.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Row-major strides, in elements.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if some extent is zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` if `coord` has this shape's arity and lies inside it.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.dims.len()
            && coord
                .iter()
                .zip(&self.dims)
                .all(|(&c, &d)| c >= 0 && (c as usize) < d)
    }

    /// Bounds-checked flat index of `coord`.
    ///
    /// Returns `None` if the arity differs or any axis is out of range.
    pub fn flat_index(&self, coord: &[i32]) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(self.flat_index_unchecked(coord))
    }

    /// Flat index of a coordinate already known to be inside the shape.
    ///
    /// Out-of-range input is a caller bug; it is caught by a debug
    /// assertion and yields an unspecified index in release builds.
    #[inline]
    pub fn flat_index_unchecked(&self, coord: &[i32]) -> usize {
        debug_assert!(self.contains(coord), "coordinate {coord:?} outside {:?}", self.dims);
        coord
            .iter()
            .zip(&self.strides)
            .map(|(&c, &s)| c as usize * s)
            .sum()
    }

    /// Coordinate of the element at flat index `index`.
    ///
    /// Returns `None` if `index >= len()`.
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index >= self.len {
            return None;
        }
        let mut rem = index;
        Some(
            self.strides
                .iter()
                .map(|&s| {
                    let c = rem / s;
                    rem %= s;
                    c as i32
                })
                .collect(),
        )
    }

    /// Geometric centre: `dims / 2` per axis (floor).
    pub fn center(&self) -> Coord {
        self.dims.iter().map(|&d| (d / 2) as i32).collect()
    }

    /// Traverse every position in row-major order.
    pub fn positions(&self) -> Positions {
        Positions::new(&self.dims)
    }
}

/// Row-major traversal over every coordinate of a [`Shape`].
///
/// The n-th item is the coordinate whose flat index is n, so
/// `positions().enumerate()` pairs each coordinate with its flat index.
#[derive(Clone, Debug)]
pub struct Positions {
    dims: SmallVec<[usize; 4]>,
    next: Coord,
    remaining: usize,
}

impl Positions {
    fn new(dims: &[usize]) -> Self {
        let remaining = dims.iter().product();
        Self {
            dims: SmallVec::from_slice(dims),
            next: smallvec::smallvec![0; dims.len()],
            remaining,
        }
    }
}

impl Iterator for Positions {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next.clone();
        // Odometer increment, last axis fastest.
        for axis in (0..self.dims.len()).rev() {
            self.next[axis] += 1;
            if (self.next[axis] as usize) < self.dims[axis] {
                break;
            }
            self.next[axis] = 0;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Positions {}
