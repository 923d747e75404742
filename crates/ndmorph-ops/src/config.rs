//! Operation configuration.

use ndmorph_core::Element;

/// How dilation combines a source value with an element weight when the
/// sum does not fit the element type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Two's-complement wraparound. Matches the historical unguarded
    /// behaviour, so existing outputs are reproduced bit for bit.
    #[default]
    Wrapping,
    /// Clamp to the element type's range.
    Saturating,
    /// Abort the call with [`MorphError::Overflow`](crate::MorphError::Overflow).
    Checked,
}

impl OverflowPolicy {
    /// Combine `a + b` under this policy. `None` only for `Checked`.
    #[inline]
    pub fn add<T: Element>(self, a: T, b: T) -> Option<T> {
        match self {
            Self::Wrapping => Some(a.wrapping_add(b)),
            Self::Saturating => Some(a.saturating_add(b)),
            Self::Checked => a.checked_add(b),
        }
    }
}

/// Configuration for [`dilate_with`](crate::dilate_with).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DilateConfig {
    /// Overflow handling for `value + weight`. Default: `Wrapping`.
    pub overflow: OverflowPolicy,
}

impl DilateConfig {
    /// Default overflow policy.
    pub const DEFAULT_OVERFLOW: OverflowPolicy = OverflowPolicy::Wrapping;

    /// A config with the given overflow policy.
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }
}
