//! Test utilities for ndmorph development.
//!
//! Literal grid builders ([`line`], [`image`], [`volume`], [`filled`]),
//! seeded random generators ([`random`]) and label statistics
//! ([`label_histogram`]) shared by the workspace's unit, integration and
//! benchmark code.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod random;

use indexmap::IndexMap;
use ndmorph_core::Element;
use ndmorph_grid::{Grid, Shape};
use std::hash::Hash;

pub use random::{random_grid, random_markers};

/// A 1D grid holding `values`.
pub fn line<T: Element>(values: &[T]) -> Grid<T> {
    Grid::new(&[values.len()], values.to_vec()).expect("line fixture")
}

/// A 2D grid from equal-length rows.
///
/// # Panics
///
/// If the rows are ragged.
pub fn image<T: Element>(rows: &[&[T]]) -> Grid<T> {
    let cols = rows.first().map_or(0, |r| r.len());
    assert!(
        rows.iter().all(|r| r.len() == cols),
        "image fixture rows must have equal length"
    );
    let data: Vec<T> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Grid::new(&[rows.len(), cols], data).expect("image fixture")
}

/// A 3D grid from equal-shaped planes.
///
/// # Panics
///
/// If planes or rows are ragged.
pub fn volume<T: Element>(planes: &[&[&[T]]]) -> Grid<T> {
    let slices: Vec<Grid<T>> = planes.iter().map(|p| image(p)).collect();
    let dims = slices.first().map_or(&[0usize, 0][..], |g| g.dims()).to_vec();
    assert!(
        slices.iter().all(|g| g.dims() == dims.as_slice()),
        "volume fixture planes must have equal shape"
    );
    let data: Vec<T> = slices.iter().flat_map(|g| g.as_slice().iter().copied()).collect();
    Grid::new(&[planes.len(), dims[0], dims[1]], data).expect("volume fixture")
}

/// A grid of `dims` with every element set to `value`.
pub fn filled<T: Element>(dims: &[usize], value: T) -> Grid<T> {
    let shape = Shape::new(dims).expect("filled fixture shape");
    Grid::filled(shape, value).expect("filled fixture allocation")
}

/// Count of each distinct value, in order of first appearance
/// (row-major).
pub fn label_histogram<T: Element + Hash>(grid: &Grid<T>) -> IndexMap<T, usize> {
    let mut counts = IndexMap::new();
    for &v in grid.as_slice() {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}
