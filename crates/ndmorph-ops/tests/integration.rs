//! End-to-end scenarios across dimensionalities and element types.
//!
//! These drive the public operations with fixture and seeded-random grids
//! rather than hand-traced one-liners.

use ndmorph_grid::{Grid, StructuringElement};
use ndmorph_ops::{dilate, erode, watershed, DilateConfig, MorphError, MorphOp};
use ndmorph_test_utils::{filled, label_histogram, random_grid, random_markers, volume};

// ── Erosion ─────────────────────────────────────────────────────

#[test]
fn all_foreground_volume_survives_erosion() {
    let input = filled::<i64>(&[4, 4, 4], 3);
    let se = StructuringElement::<i64>::full(3).unwrap();
    let out = erode(&input, &se).unwrap();
    assert_eq!(out, filled::<i64>(&[4, 4, 4], 1));
}

#[test]
fn single_hole_erodes_its_26_neighbourhood() {
    let mut input = filled::<u8>(&[5, 5, 5], 1);
    *input.at_mut(&[2, 2, 2]) = 0;
    let se = StructuringElement::<u8>::full(3).unwrap();
    let out = erode(&input, &se).unwrap();
    assert_eq!(out.len() - out.count_nonzero(), 27);
    assert_eq!(out.at(&[1, 1, 1]), 0);
    assert_eq!(out.at(&[3, 3, 3]), 0);
    assert_eq!(out.at(&[0, 2, 2]), 1);
}

// ── Dilation ────────────────────────────────────────────────────

#[test]
fn single_voxel_dilates_to_a_cube() {
    let mut input = filled::<u32>(&[5, 5, 5], 0);
    *input.at_mut(&[2, 2, 2]) = 40;
    let se = StructuringElement::<u32>::full(3).unwrap();
    let out = dilate(&input, &se).unwrap();
    let hist = label_histogram(&out);
    assert_eq!(hist.get(&41), Some(&27));
    assert_eq!(hist.get(&0), Some(&(125 - 27)));
}

#[test]
fn dilation_of_eroded_plane_stays_inside_input() {
    let input = volume(&[&[
        &[0u8, 0, 0, 0, 0, 0],
        &[0, 1, 1, 1, 1, 0],
        &[0, 1, 1, 1, 1, 0],
        &[0, 1, 1, 1, 1, 0],
        &[0, 0, 0, 0, 0, 0],
    ]]);
    let se = StructuringElement::from_vec(&[1, 3, 3], vec![1u8; 9]).unwrap();
    let eroded = erode(&input, &se).unwrap();
    assert_eq!(eroded.count_nonzero(), 2);

    let opened = dilate(&eroded, &se).unwrap();
    for (p, v) in opened.iter_indexed() {
        if v != 0 {
            assert_ne!(input.at(&p), 0, "opening grew outside the input at {p:?}");
        }
    }
}

// ── Watershed ───────────────────────────────────────────────────

#[test]
fn connected_grid_is_fully_labelled() {
    let input: Grid<u16> = random_grid(&[12, 9, 5], 20, 0xC0FFEE);
    let markers: Grid<u16> = random_markers(&[12, 9, 5], 6, 0xBEEF);
    let se = StructuringElement::<u16>::cross(3).unwrap();
    let out = watershed(&input, &markers, &se).unwrap();

    assert_eq!(out.count_nonzero(), out.len());
    let hist = label_histogram(&out);
    assert!(hist.len() <= 6);
    for label in hist.keys() {
        assert!((1..=6).contains(label));
    }
}

#[test]
fn watershed_is_reproducible_across_runs() {
    let input: Grid<i32> = random_grid(&[32, 32], 50, 11);
    let markers: Grid<i32> = random_markers(&[32, 32], 12, 12);
    let se = StructuringElement::<i32>::full(2).unwrap();
    let first = watershed(&input, &markers, &se).unwrap();
    for _ in 0..3 {
        assert_eq!(watershed(&input, &markers, &se).unwrap(), first);
    }
}

#[test]
fn two_plateaus_split_at_the_wall() {
    // Two flat basins separated by a wall of MAX: the wall is never
    // flooded and each basin takes its own seed's label.
    let m = u8::MAX;
    let input = volume(&[
        &[&[0u8, 0, m, 0, 0], &[0, 0, m, 0, 0]],
        &[&[0, 0, m, 0, 0], &[0, 0, m, 0, 0]],
    ]);
    let markers = volume(&[
        &[&[5u8, 0, 0, 0, 0], &[0, 0, 0, 0, 0]],
        &[&[0, 0, 0, 0, 0], &[0, 0, 0, 0, 9]],
    ]);
    let se = StructuringElement::<u8>::full(3).unwrap();
    let out = watershed(&input, &markers, &se).unwrap();
    let hist = label_histogram(&out);
    assert_eq!(hist.get(&5), Some(&8));
    assert_eq!(hist.get(&9), Some(&8));
    assert_eq!(hist.get(&0), Some(&4));
}

// ── Runtime dispatch ────────────────────────────────────────────

#[test]
fn morph_op_matches_direct_calls() {
    let input: Grid<u16> = random_grid(&[10, 10], 3, 5);
    let se = StructuringElement::<u16>::cross(2).unwrap();
    let config = DilateConfig::default();
    assert_eq!(
        MorphOp::Erode.apply(&input, &se, &config).unwrap(),
        erode(&input, &se).unwrap()
    );
    assert_eq!(
        MorphOp::Dilate.apply(&input, &se, &config).unwrap(),
        dilate(&input, &se).unwrap()
    );
}

#[test]
fn errors_render_for_humans() {
    let input = filled::<u8>(&[3, 4], 1);
    let markers = filled::<u8>(&[4, 3], 0);
    let se = StructuringElement::<u8>::cross(2).unwrap();
    let err = watershed(&input, &markers, &se).unwrap_err();
    assert!(matches!(err, MorphError::ShapeMismatch { .. }));
    assert_eq!(err.to_string(), "markers has shape [4, 3], input has [3, 4]");
}
