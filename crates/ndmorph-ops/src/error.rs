//! Error type for morphology operations.

use ndmorph_core::{Coord, ElementKind, UnsupportedElementType};
use ndmorph_grid::GridError;
use std::error::Error;
use std::fmt;

/// Errors from a morphology invocation.
///
/// Every error aborts the call before any output is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MorphError {
    /// Shape construction or allocation of the output or scratch state
    /// failed.
    Grid(GridError),
    /// An argument's dimensionality differs from the input's.
    DimensionMismatch {
        /// Which argument was rejected.
        role: &'static str,
        /// Dimensionality of the input.
        expected: usize,
        /// Dimensionality of the rejected argument.
        actual: usize,
    },
    /// An argument's extents differ from the input's.
    ShapeMismatch {
        /// Which argument was rejected.
        role: &'static str,
        /// Extents of the input.
        expected: Vec<usize>,
        /// Extents of the rejected argument.
        actual: Vec<usize>,
    },
    /// An argument's element type differs from the input's.
    TypeMismatch {
        /// Which argument was rejected.
        role: &'static str,
        /// Element type of the input.
        expected: ElementKind,
        /// Element type of the rejected argument.
        actual: ElementKind,
    },
    /// The element type is outside the supported integer set.
    UnsupportedElementType(UnsupportedElementType),
    /// Checked dilation overflowed the element type.
    Overflow {
        /// Target position whose value could not be represented.
        coord: Coord,
    },
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid error: {e}"),
            Self::DimensionMismatch {
                role,
                expected,
                actual,
            } => write!(f, "{role} has {actual} dimensions, input has {expected}"),
            Self::ShapeMismatch {
                role,
                expected,
                actual,
            } => write!(f, "{role} has shape {actual:?}, input has {expected:?}"),
            Self::TypeMismatch {
                role,
                expected,
                actual,
            } => write!(f, "{role} has element type {actual}, input has {expected}"),
            Self::UnsupportedElementType(e) => write!(f, "{e}"),
            Self::Overflow { coord } => {
                write!(f, "dilation overflowed the element type at {coord:?}")
            }
        }
    }
}

impl Error for MorphError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::UnsupportedElementType(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MorphError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<UnsupportedElementType> for MorphError {
    fn from(e: UnsupportedElementType) -> Self {
        Self::UnsupportedElementType(e)
    }
}
