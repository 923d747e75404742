//! Morphology operations for ndmorph.
//!
//! Three primitives over [`Grid`](ndmorph_grid::Grid)s of any
//! dimensionality and integer [`Element`](ndmorph_core::Element) type:
//!
//! - [`erode`]: binary shrink; the grid boundary counts as foreground
//! - [`dilate`] / [`dilate_with`]: additive grow, last writer wins
//! - [`watershed`]: marker-seeded priority flood
//!
//! Every operation is a pure, sequential function that validates its
//! arguments, allocates a fresh output grid of the input's shape, and
//! returns it. Scratch state never outlives the call, so invocations are
//! reentrant.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dilate;
pub mod erode;
pub mod error;
mod frontier;
pub mod op;
pub mod validate;
pub mod watershed;

pub use config::{DilateConfig, OverflowPolicy};
pub use dilate::{dilate, dilate_with};
pub use erode::erode;
pub use error::MorphError;
pub use op::MorphOp;
pub use watershed::watershed;
