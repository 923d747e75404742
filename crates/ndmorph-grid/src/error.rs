//! Error types for grid construction.

use std::fmt;

/// Errors arising from shape validation or grid allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A shape with no axes was requested.
    ZeroDimensional,
    /// An extent does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// Axis index of the offending extent.
        axis: usize,
        /// The requested extent.
        extent: usize,
        /// Largest accepted extent.
        max: usize,
    },
    /// The product of the extents overflows `usize`.
    SizeOverflow,
    /// A data buffer does not match the element count of its shape.
    LengthMismatch {
        /// Element count implied by the shape.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// The allocator could not provide storage for the grid.
    AllocationFailed {
        /// Number of elements requested.
        elements: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimensional => write!(f, "grid must have at least one axis"),
            Self::DimensionTooLarge { axis, extent, max } => {
                write!(f, "extent {extent} on axis {axis} exceeds maximum {max}")
            }
            Self::SizeOverflow => write!(f, "grid element count overflows usize"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer length {actual} does not match shape ({expected} elements)")
            }
            Self::AllocationFailed { elements } => {
                write!(f, "failed to allocate storage for {elements} elements")
            }
        }
    }
}

impl std::error::Error for GridError {}
