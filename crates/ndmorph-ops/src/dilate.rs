//! Additive (grayscale) dilation.
//!
//! Every nonzero source `p` writes `input(p) + weight` to each in-bounds
//! `p + o`. Sources are visited in row-major order and a later write
//! replaces an earlier one at the same target; positions never written
//! stay zero.

use crate::config::DilateConfig;
use crate::error::MorphError;
use crate::validate;
use log::{debug, warn};
use ndmorph_core::{translate, Element};
use ndmorph_grid::{Grid, Offset, StructuringElement};

/// Dilate `input` by `se` with the default [`DilateConfig`].
///
/// # Errors
///
/// See [`dilate_with`]. The default wrapping policy never reports
/// [`MorphError::Overflow`].
///
/// # Examples
///
/// ```
/// use ndmorph_grid::{Grid, StructuringElement};
/// use ndmorph_ops::dilate;
///
/// let input = Grid::new(&[5], vec![0u8, 0, 3, 0, 0]).unwrap();
/// let se = StructuringElement::from_vec(&[3], vec![1u8, 2, 1]).unwrap();
/// let out = dilate(&input, &se).unwrap();
/// assert_eq!(out.as_slice(), &[0, 4, 5, 4, 0]);
/// ```
pub fn dilate<T: Element>(
    input: &Grid<T>,
    se: &StructuringElement<T>,
) -> Result<Grid<T>, MorphError> {
    dilate_with(input, se, &DilateConfig::default())
}

/// Dilate `input` by `se`, combining values and weights under
/// `config.overflow`.
///
/// # Errors
///
/// - [`MorphError::DimensionMismatch`] if `se` has a different
///   dimensionality than `input`
/// - [`MorphError::Grid`] if the output cannot be allocated
/// - [`MorphError::Overflow`] under
///   [`OverflowPolicy::Checked`](crate::OverflowPolicy::Checked) when a
///   sum does not fit `T`
pub fn dilate_with<T: Element>(
    input: &Grid<T>,
    se: &StructuringElement<T>,
    config: &DilateConfig,
) -> Result<Grid<T>, MorphError> {
    validate::check_structuring_element(input, se)?;
    let offsets: Vec<Offset<T>> = se.active_offsets().collect();
    debug!(
        "dilate: shape={:?} active_offsets={} overflow={:?}",
        input.dims(),
        offsets.len(),
        config.overflow
    );

    let shape = input.shape();
    let mut output = input.zeros_like()?;
    let out = output.as_mut_slice();

    for (p, value) in input.iter_indexed() {
        if !value.is_nonzero() {
            continue;
        }
        for o in &offsets {
            let q = translate(&p, &o.delta);
            let Some(i) = shape.flat_index(&q) else {
                continue;
            };
            out[i] = match config.overflow.add(value, o.weight) {
                Some(v) => v,
                None => {
                    warn!("dilate: {value:?} + {:?} overflows at {q:?}", o.weight);
                    return Err(MorphError::Overflow { coord: q });
                }
            };
        }
    }

    Ok(output)
}
