//! Dense N-dimensional grids for ndmorph.
//!
//! This crate defines the storage every morphology operation reads and
//! writes, along with the neighbourhood abstraction they share.
//!
//! # Types
//!
//! - [`Shape`]: per-axis extents plus row-major strides
//! - [`Grid`]: dense array of an [`Element`](ndmorph_core::Element) type,
//!   addressable by [`Coord`](ndmorph_core::Coord)
//! - [`Positions`]: row-major, position-aware traversal of a shape
//! - [`StructuringElement`]: a small grid read as an offset mask, with the
//!   [`active_offsets`](StructuringElement::active_offsets) neighbourhood walk

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod shape;
pub mod structuring;

pub use error::GridError;
pub use grid::{alloc_filled, Grid};
pub use shape::{Positions, Shape};
pub use structuring::{ActiveOffsets, Offset, StructuringElement};
