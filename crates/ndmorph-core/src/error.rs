//! Error types shared across the ndmorph workspace.

use std::error::Error;
use std::fmt;

/// An element type name outside the supported integer set.
///
/// Returned when resolving an [`ElementKind`](crate::ElementKind) from a
/// dtype name such as `"float32"` or `"bool"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsupportedElementType {
    /// The name that could not be resolved.
    pub name: String,
}

impl fmt::Display for UnsupportedElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "element type '{}' not supported (expected a fixed-width integer type)",
            self.name
        )
    }
}

impl Error for UnsupportedElementType {}
