//! Single-input operations selectable at runtime.

use crate::config::DilateConfig;
use crate::dilate::dilate_with;
use crate::erode::erode;
use crate::error::MorphError;
use ndmorph_core::Element;
use ndmorph_grid::{Grid, StructuringElement};

/// A morphology operation taking one input grid and a structuring element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MorphOp {
    /// Binary erosion; see [`erode`](crate::erode).
    Erode,
    /// Additive dilation; see [`dilate`](crate::dilate).
    Dilate,
}

impl MorphOp {
    /// Short lowercase name, for logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Erode => "erode",
            Self::Dilate => "dilate",
        }
    }

    /// Run this operation. `config` is consulted only by `Dilate`.
    ///
    /// # Errors
    ///
    /// Whatever the selected operation returns.
    pub fn apply<T: Element>(
        self,
        input: &Grid<T>,
        se: &StructuringElement<T>,
        config: &DilateConfig,
    ) -> Result<Grid<T>, MorphError> {
        match self {
            Self::Erode => erode(input, se),
            Self::Dilate => dilate_with(input, se, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndmorph_test_utils::line;

    #[test]
    fn apply_dispatches_to_the_named_operation() {
        let input = line(&[0u8, 2, 0]);
        let se = StructuringElement::<u8>::full(1).unwrap();
        let config = DilateConfig::default();

        let eroded = MorphOp::Erode.apply(&input, &se, &config).unwrap();
        assert_eq!(eroded, erode(&input, &se).unwrap());

        let dilated = MorphOp::Dilate.apply(&input, &se, &config).unwrap();
        assert_eq!(dilated.as_slice(), &[3, 3, 3]);
    }

    #[test]
    fn names() {
        assert_eq!(MorphOp::Erode.name(), "erode");
        assert_eq!(MorphOp::Dilate.name(), "dilate");
    }
}
