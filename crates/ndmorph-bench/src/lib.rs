//! Benchmark profiles for the ndmorph morphology library.
//!
//! Each profile bundles an input grid, a watershed marker grid and a
//! structuring element, all derived from a seed:
//!
//! - [`image_profile`]: 256x256 `u16` image, 4-connected
//! - [`volume_profile`]: 64x64x64 `u16` volume, 26-connected
//! - [`binary_profile`]: 512x512 `u8` foreground mask for erosion

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ndmorph_grid::{Grid, StructuringElement};
use ndmorph_test_utils::{random_grid, random_markers};

/// Inputs for one benchmark run.
pub struct Profile<T> {
    /// Intensity or foreground grid.
    pub input: Grid<T>,
    /// Watershed seeds, shaped like `input`.
    pub markers: Grid<T>,
    /// Neighbourhood for every operation.
    pub se: StructuringElement<T>,
}

/// 256x256 image with 64 levels and 32 seeds, plus-shaped neighbourhood.
pub fn image_profile(seed: u64) -> Profile<u16> {
    let dims = [256, 256];
    Profile {
        input: random_grid(&dims, 64, seed),
        markers: random_markers(&dims, 32, seed.wrapping_add(1)),
        se: StructuringElement::cross(2).expect("2D cross element"),
    }
}

/// 64^3 volume with 64 levels and 48 seeds, full 3x3x3 neighbourhood.
pub fn volume_profile(seed: u64) -> Profile<u16> {
    let dims = [64, 64, 64];
    Profile {
        input: random_grid(&dims, 64, seed),
        markers: random_markers(&dims, 48, seed.wrapping_add(1)),
        se: StructuringElement::full(3).expect("3D full element"),
    }
}

/// 512x512 mask that is mostly foreground (levels 0..8, so about one
/// pixel in eight is background) with a full 3x3 neighbourhood.
pub fn binary_profile(seed: u64) -> Profile<u8> {
    let dims = [512, 512];
    Profile {
        input: random_grid(&dims, 8, seed),
        markers: random_markers(&dims, 16, seed.wrapping_add(1)),
        se: StructuringElement::full(2).expect("2D full element"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_seed_stable() {
        let a = image_profile(9);
        let b = image_profile(9);
        assert_eq!(a.input, b.input);
        assert_eq!(a.markers, b.markers);
        assert_eq!(a.markers.count_nonzero(), 32);
    }

    #[test]
    fn volume_profile_shape() {
        let p = volume_profile(0);
        assert_eq!(p.input.dims(), &[64, 64, 64]);
        assert_eq!(p.se.active_count(), 27);
    }
}
