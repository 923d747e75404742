//! Core types and traits for the ndmorph morphology library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the ndmorph workspace:
//! the [`Coord`] type and its arithmetic, the [`Element`] numeric trait,
//! and the closed set of supported [`ElementKind`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod element;
pub mod error;

pub use coord::{difference, translate, Coord};
pub use element::{Element, ElementKind};
pub use error::UnsupportedElementType;
