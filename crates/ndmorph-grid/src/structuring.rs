//! Structuring elements and the neighbourhood walk.
//!
//! A structuring element is a small [`Grid`] whose nonzero cells mark the
//! active neighbourhood of an anchor position. The cell at
//! `shape / 2` (per-axis floor) is the anchor itself; every other active
//! cell contributes the offset `cell - center`. For dilation, a cell's
//! value also serves as an additive weight.

use crate::error::GridError;
use crate::grid::Grid;
use crate::shape::{Positions, Shape};
use ndmorph_core::{difference, translate, Coord, Element};
use std::slice;

/// A neighbourhood mask centred at `shape / 2`.
///
/// # Examples
///
/// ```
/// use ndmorph_grid::StructuringElement;
///
/// // 1D element [1, 0, 2]: center index 1 is inactive.
/// let se = StructuringElement::from_vec(&[3], vec![1u8, 0, 2]).unwrap();
/// let offsets: Vec<(Vec<i32>, u8)> = se
///     .active_offsets()
///     .map(|o| (o.delta.to_vec(), o.weight))
///     .collect();
/// assert_eq!(offsets, vec![(vec![-1], 1), (vec![1], 2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuringElement<T> {
    grid: Grid<T>,
    center: Coord,
}

/// One active cell of a structuring element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offset<T> {
    /// Position of the cell relative to the element's center.
    pub delta: Coord,
    /// The cell's value (nonzero).
    pub weight: T,
}

impl<T: Element> StructuringElement<T> {
    /// Interpret `grid` as a structuring element.
    ///
    /// Odd extents give a symmetric neighbourhood; even extents are
    /// accepted and centred at the floor of `extent / 2`.
    pub fn new(grid: Grid<T>) -> Self {
        let center = grid.shape().center();
        Self { grid, center }
    }

    /// Build from extents and a row-major buffer.
    ///
    /// # Errors
    ///
    /// Any error from [`Grid::new`].
    pub fn from_vec(dims: &[usize], data: Vec<T>) -> Result<Self, GridError> {
        Ok(Self::new(Grid::new(dims, data)?))
    }

    /// The face-connected element: a 3^N box with the center and its
    /// two neighbours along each axis active (weight `ONE`).
    ///
    /// In 2D this is the plus shape (4-connectivity); in 3D, the
    /// 6-connected cross.
    ///
    /// # Errors
    ///
    /// [`GridError::ZeroDimensional`] if `ndim == 0`, or an allocation failure.
    pub fn cross(ndim: usize) -> Result<Self, GridError> {
        let shape = Shape::new(&vec![3; ndim])?;
        let mut grid = Grid::zeros(shape)?;
        let positions = grid.positions();
        for (slot, coord) in grid.as_mut_slice().iter_mut().zip(positions) {
            // Active iff at most one axis is off-center.
            let off_center = coord.iter().filter(|&&c| c != 1).count();
            if off_center <= 1 {
                *slot = T::ONE;
            }
        }
        Ok(Self::new(grid))
    }

    /// The fully-connected element: a 3^N box with every cell active
    /// (weight `ONE`).
    ///
    /// # Errors
    ///
    /// [`GridError::ZeroDimensional`] if `ndim == 0`, or an allocation failure.
    pub fn full(ndim: usize) -> Result<Self, GridError> {
        let shape = Shape::new(&vec![3; ndim])?;
        Ok(Self::new(Grid::filled(shape, T::ONE)?))
    }

    /// Number of active (nonzero) cells.
    pub fn active_count(&self) -> usize {
        self.grid.count_nonzero()
    }

    /// Lazily enumerate the active offsets in row-major cell order.
    ///
    /// The sequence is finite and deterministic; call again to restart it.
    pub fn active_offsets(&self) -> ActiveOffsets<'_, T> {
        ActiveOffsets {
            positions: self.grid.positions(),
            values: self.grid.as_slice().iter(),
            center: &self.center,
        }
    }

    /// Enumerate `(anchor + offset, weight)` for every active offset.
    ///
    /// Positions are not bounds-tested; callers decide how to treat
    /// positions that fall outside their grid.
    pub fn walk<'a>(&'a self, anchor: &'a [i32]) -> impl Iterator<Item = (Coord, T)> + 'a {
        self.active_offsets()
            .map(move |o| (translate(anchor, &o.delta), o.weight))
    }
}

impl<T> StructuringElement<T> {
    /// The underlying mask grid.
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// The anchor cell, `shape / 2` per axis.
    pub fn center(&self) -> &[i32] {
        &self.center
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.grid.ndim()
    }
}

impl<T: Element> From<Grid<T>> for StructuringElement<T> {
    fn from(grid: Grid<T>) -> Self {
        Self::new(grid)
    }
}

/// Iterator returned by [`StructuringElement::active_offsets`].
#[derive(Clone, Debug)]
pub struct ActiveOffsets<'a, T> {
    positions: Positions,
    values: slice::Iter<'a, T>,
    center: &'a [i32],
}

impl<T: Element> Iterator for ActiveOffsets<'_, T> {
    type Item = Offset<T>;

    fn next(&mut self) -> Option<Offset<T>> {
        loop {
            let cell = self.positions.next()?;
            let weight = *self.values.next()?;
            if weight.is_nonzero() {
                return Some(Offset {
                    delta: difference(&cell, self.center),
                    weight,
                });
            }
        }
    }
}
