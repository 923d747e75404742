use ndmorph_grid::{Grid, Shape, StructuringElement};

#[test]
fn corner_anchor_walk_reaches_outside_the_grid() {
    let grid = Grid::<u8>::zeros(Shape::new(&[3, 3, 3]).unwrap()).unwrap();
    let se = StructuringElement::<u8>::full(3).unwrap();

    let anchor = [0, 0, 0];
    let (inside, outside): (Vec<_>, Vec<_>) = se
        .walk(&anchor)
        .map(|(c, _)| c)
        .partition(|c| grid.shape().contains(c));

    // Only the octant with all deltas >= 0 stays inside.
    assert_eq!(inside.len(), 8);
    assert_eq!(outside.len(), 19);
    assert!(outside.iter().all(|c| grid.get(c).is_none()));
}

#[test]
fn weights_come_from_cell_values() {
    let se = StructuringElement::from_vec(&[3, 3], vec![0i32, 2, 0, 3, 1, 4, 0, 5, 0]).unwrap();
    let weights: Vec<i32> = se.active_offsets().map(|o| o.weight).collect();
    assert_eq!(weights, vec![2, 3, 1, 4, 5]);
}

#[test]
fn interior_anchor_cross_stays_in_bounds() {
    let grid = Grid::new(&[5, 5], (0u16..25).collect()).unwrap();
    let se = StructuringElement::<u16>::cross(2).unwrap();
    let anchor = [2, 2];
    let values: Vec<u16> = se
        .walk(&anchor)
        .map(|(c, _)| grid.get(&c).unwrap())
        .collect();
    assert_eq!(values, vec![7, 11, 12, 13, 17]);
}

#[test]
fn from_grid_conversion_matches_new() {
    let g = Grid::new(&[3], vec![1u64, 1, 1]).unwrap();
    let a: StructuringElement<u64> = g.clone().into();
    let b = StructuringElement::new(g);
    assert_eq!(a, b);
    assert_eq!(a.grid().len(), 3);
}
