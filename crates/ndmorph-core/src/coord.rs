//! The [`Coord`] type alias and elementwise coordinate arithmetic.

use smallvec::SmallVec;

/// A position (or offset) in an N-dimensional grid.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for grids up to
/// 4 dimensions, which covers images, volumes and volume time series.
/// Higher-dimensional grids spill to the heap transparently.
pub type Coord = SmallVec<[i32; 4]>;

/// Elementwise `a + b`.
///
/// Both operands must have the same arity; this is a caller invariant
/// checked only in debug builds.
///
/// # Examples
///
/// ```
/// use ndmorph_core::{translate, Coord};
///
/// let p: Coord = vec![2i32, 3].into();
/// let o: Coord = vec![-1i32, 1].into();
/// assert_eq!(translate(&p, &o).as_slice(), &[1, 4]);
/// ```
pub fn translate(a: &[i32], b: &[i32]) -> Coord {
    debug_assert_eq!(a.len(), b.len(), "coordinate arity mismatch");
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// Elementwise `a - b`.
///
/// Both operands must have the same arity; this is a caller invariant
/// checked only in debug builds.
pub fn difference(a: &[i32], b: &[i32]) -> Coord {
    debug_assert_eq!(a.len(), b.len(), "coordinate arity mismatch");
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}
