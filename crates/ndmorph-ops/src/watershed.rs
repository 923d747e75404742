//! Marker-seeded watershed by priority flood.
//!
//! Every nonzero marker seeds a region labelled with the marker's value.
//! Positions are then committed in ascending order of intensity, ties
//! broken by discovery order, and each committed position offers its
//! label to every uncommitted neighbour whose intensity improves on the
//! cost recorded for it so far. The cost of a position is its own
//! intensity, not a path sum.
//!
//! # Determinism
//!
//! Discovery order is a function of the marker scan (row-major) and the
//! neighbourhood walk (row-major over the structuring element), so
//! repeated runs on the same arguments produce identical output.

use crate::error::MorphError;
use crate::frontier::Frontier;
use crate::validate;
use log::debug;
use ndmorph_core::{translate, Element};
use ndmorph_grid::{alloc_filled, Grid, Offset, StructuringElement};

/// Label `input` by flooding outward from the nonzero cells of `markers`
/// through the neighbourhood defined by `se`.
///
/// Seeds keep their own marker value. Positions no flood reaches stay
/// zero, including every position whose intensity equals `T::MAX`.
/// With no nonzero marker the result is all zero.
///
/// # Errors
///
/// - [`MorphError::ShapeMismatch`] / [`MorphError::DimensionMismatch`]
///   if `markers` is not shaped like `input`
/// - [`MorphError::DimensionMismatch`] if `se` has a different
///   dimensionality than `input`
/// - [`MorphError::Grid`] if the output, the scratch maps or the frontier
///   cannot be allocated
///
/// # Examples
///
/// ```
/// use ndmorph_grid::{Grid, StructuringElement};
/// use ndmorph_ops::watershed;
///
/// let input = Grid::new(&[5], vec![5u8, 3, 6, 2, 8]).unwrap();
/// let markers = Grid::new(&[5], vec![1u8, 0, 0, 2, 0]).unwrap();
/// let se = StructuringElement::from_vec(&[3], vec![1u8, 1, 1]).unwrap();
/// let labels = watershed(&input, &markers, &se).unwrap();
/// assert_eq!(labels.as_slice(), &[1, 1, 2, 2, 2]);
/// ```
pub fn watershed<T: Element>(
    input: &Grid<T>,
    markers: &Grid<T>,
    se: &StructuringElement<T>,
) -> Result<Grid<T>, MorphError> {
    validate::check_markers(input, markers)?;
    validate::check_structuring_element(input, se)?;
    let offsets: Vec<Offset<T>> = se.active_offsets().collect();

    let shape = input.shape();
    let intensity = input.as_slice();
    let mut output = input.zeros_like()?;
    let labels = output.as_mut_slice();
    let mut cost = alloc_filled(shape.len(), T::MAX)?;
    let mut committed = alloc_filled(shape.len(), false)?;
    let mut frontier = Frontier::new();

    // Seeding.
    for (i, (m, label)) in markers.iter_indexed().enumerate() {
        if label.is_nonzero() {
            frontier.push(intensity[i], m)?;
            labels[i] = label;
            cost[i] = intensity[i];
        }
    }
    let seeds = frontier.len();
    debug!(
        "watershed: shape={:?} active_offsets={} seeds={}",
        input.dims(),
        offsets.len(),
        seeds
    );

    // Flooding.
    let mut pops = 0usize;
    while let Some(entry) = frontier.pop() {
        pops += 1;
        let here = shape.flat_index_unchecked(&entry.position);
        committed[here] = true;
        let label = labels[here];

        for o in &offsets {
            let q = translate(&entry.position, &o.delta);
            let Some(j) = shape.flat_index(&q) else {
                continue;
            };
            if committed[j] {
                continue;
            }
            let c = intensity[j];
            if c < cost[j] {
                cost[j] = c;
                labels[j] = label;
                frontier.push(c, q)?;
            }
        }
    }

    debug!(
        "watershed: {} frontier pops, {} sequence numbers issued",
        pops,
        frontier.issued()
    );
    Ok(output)
}
