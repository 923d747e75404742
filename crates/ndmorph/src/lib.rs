//! ndmorph: morphology over dense N-dimensional integer grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the ndmorph sub-crates and adds [`DynGrid`], the adapter for callers
//! whose element type is only known at run time.
//!
//! # Quick start
//!
//! ```rust
//! use ndmorph::prelude::*;
//!
//! let intensity = Grid::new(&[5], vec![5u8, 3, 6, 2, 8]).unwrap();
//! let markers = Grid::new(&[5], vec![1u8, 0, 0, 2, 0]).unwrap();
//! let se = StructuringElement::<u8>::full(1).unwrap();
//!
//! let labels = watershed(&intensity, &markers, &se).unwrap();
//! assert_eq!(labels.as_slice(), &[1, 1, 2, 2, 2]);
//!
//! // The same call with the element type chosen at run time.
//! let dynamic = DynGrid::from(intensity)
//!     .watershed(&DynGrid::from(markers), &DynGrid::from(se.grid().clone()))
//!     .unwrap();
//! assert_eq!(dynamic.kind(), ElementKind::U8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ndmorph-core` | `Coord`, the `Element` trait, `ElementKind` |
//! | [`grid`] | `ndmorph-grid` | `Shape`, `Grid`, `StructuringElement` |
//! | [`ops`] | `ndmorph-ops` | erosion, dilation, watershed, their config and errors |
//! | [`adapter`] | this crate | `DynGrid` runtime dispatch |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adapter;

pub use adapter::{DynElement, DynGrid};

/// Core types and traits (`ndmorph-core`).
pub use ndmorph_core as types;

/// Grid storage and structuring elements (`ndmorph-grid`).
///
/// [`grid::Grid`] is the array every operation reads and writes;
/// [`grid::StructuringElement`] wraps a small grid as an offset mask.
pub use ndmorph_grid as grid;

/// The morphology operations (`ndmorph-ops`).
pub use ndmorph_ops as ops;

/// Common imports for typical ndmorph usage.
///
/// ```rust
/// use ndmorph::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use ndmorph_core::{Coord, Element, ElementKind};

    // Grids
    pub use ndmorph_grid::{Grid, GridError, Shape, StructuringElement};

    // Operations
    pub use ndmorph_ops::{
        dilate, dilate_with, erode, watershed, DilateConfig, MorphError, MorphOp, OverflowPolicy,
    };

    // Runtime dispatch
    pub use crate::adapter::DynGrid;
}
