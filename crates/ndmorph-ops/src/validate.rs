//! Argument validation run before any operation touches its inputs.
//!
//! Element types already agree statically in the typed API; what remains
//! is dimensionality and, for watershed markers, exact shape equality.
//! The structuring element's extents are free.

use crate::error::MorphError;
use ndmorph_grid::{Grid, StructuringElement};

/// Role name used in errors for the structuring element.
pub const ROLE_STRUCTURING_ELEMENT: &str = "structuring element";
/// Role name used in errors for watershed markers.
pub const ROLE_MARKERS: &str = "markers";

/// Check that `se` has the input's dimensionality.
pub fn check_structuring_element<T>(
    input: &Grid<T>,
    se: &StructuringElement<T>,
) -> Result<(), MorphError> {
    if se.ndim() != input.ndim() {
        return Err(MorphError::DimensionMismatch {
            role: ROLE_STRUCTURING_ELEMENT,
            expected: input.ndim(),
            actual: se.ndim(),
        });
    }
    Ok(())
}

/// Check that `markers` has exactly the input's shape.
pub fn check_markers<T>(input: &Grid<T>, markers: &Grid<T>) -> Result<(), MorphError> {
    if markers.ndim() != input.ndim() {
        return Err(MorphError::DimensionMismatch {
            role: ROLE_MARKERS,
            expected: input.ndim(),
            actual: markers.ndim(),
        });
    }
    if markers.shape() != input.shape() {
        return Err(MorphError::ShapeMismatch {
            role: ROLE_MARKERS,
            expected: input.dims().to_vec(),
            actual: markers.dims().to_vec(),
        });
    }
    Ok(())
}
