//! Binary erosion.
//!
//! Output is `ONE` at `p` unless some active offset `o` puts `p + o`
//! inside the grid on a zero input value. Offsets that leave the grid
//! never disqualify: the boundary behaves as if padded with foreground.

use crate::error::MorphError;
use crate::validate;
use log::debug;
use ndmorph_core::{translate, Element};
use ndmorph_grid::{Grid, Offset, StructuringElement};

/// Erode `input` by the active cells of `se`.
///
/// The result holds only `T::ZERO` and `T::ONE`. Scanning the
/// neighbourhood of a position stops at the first zero neighbour found.
///
/// # Errors
///
/// - [`MorphError::DimensionMismatch`] if `se` has a different
///   dimensionality than `input`
/// - [`MorphError::Grid`] if the output cannot be allocated
///
/// # Examples
///
/// ```
/// use ndmorph_grid::{Grid, StructuringElement};
/// use ndmorph_ops::erode;
///
/// let input = Grid::new(&[5], vec![1u8, 1, 0, 1, 1]).unwrap();
/// let se = StructuringElement::from_vec(&[3], vec![1u8, 1, 1]).unwrap();
/// let out = erode(&input, &se).unwrap();
/// assert_eq!(out.as_slice(), &[1, 0, 0, 0, 1]);
/// ```
pub fn erode<T: Element>(
    input: &Grid<T>,
    se: &StructuringElement<T>,
) -> Result<Grid<T>, MorphError> {
    validate::check_structuring_element(input, se)?;
    let offsets: Vec<Offset<T>> = se.active_offsets().collect();
    debug!(
        "erode: shape={:?} active_offsets={}",
        input.dims(),
        offsets.len()
    );

    let shape = input.shape();
    let values = input.as_slice();
    let mut output = input.zeros_like()?;

    for (slot, p) in output.as_mut_slice().iter_mut().zip(shape.positions()) {
        let eroded = offsets.iter().any(|o| {
            let q = translate(&p, &o.delta);
            shape
                .flat_index(&q)
                .is_some_and(|i| !values[i].is_nonzero())
        });
        *slot = if eroded { T::ZERO } else { T::ONE };
    }

    Ok(output)
}
