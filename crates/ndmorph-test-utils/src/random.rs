//! Seeded random grids.
//!
//! Every generator takes an explicit seed and draws from ChaCha8, so a
//! failing test or a benchmark profile reproduces exactly.

use indexmap::IndexSet;
use ndmorph_core::Element;
use ndmorph_grid::{Grid, Shape};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A grid of `dims` with values drawn uniformly from `0..levels`.
///
/// # Panics
///
/// If `levels` is zero or `dims` is not a valid shape.
pub fn random_grid<T: Element + From<u8>>(dims: &[usize], levels: u8, seed: u64) -> Grid<T> {
    assert!(levels > 0, "random_grid needs at least one level");
    let shape = Shape::new(dims).expect("random_grid shape");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data: Vec<T> = (0..shape.len())
        .map(|_| T::from((rng.next_u32() % u32::from(levels)) as u8))
        .collect();
    Grid::from_vec(shape, data).expect("random_grid data")
}

/// A marker grid of `dims` with `count` seeds at distinct random
/// positions, labelled `1..=count` in the order they were drawn.
///
/// # Panics
///
/// If `count` exceeds the number of positions or 255.
pub fn random_markers<T: Element + From<u8>>(dims: &[usize], count: usize, seed: u64) -> Grid<T> {
    let shape = Shape::new(dims).expect("random_markers shape");
    assert!(count <= shape.len(), "more markers than positions");
    assert!(count <= usize::from(u8::MAX), "labels must fit u8");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut picked = IndexSet::with_capacity(count);
    while picked.len() < count {
        picked.insert((rng.next_u64() % shape.len() as u64) as usize);
    }

    let mut markers = Grid::zeros(shape).expect("random_markers allocation");
    let slots = markers.as_mut_slice();
    for (label, &i) in picked.iter().enumerate() {
        slots[i] = T::from(label as u8 + 1);
    }
    markers
}
