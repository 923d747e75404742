//! Runtime element-type dispatch.
//!
//! [`DynGrid`] carries a [`Grid`] whose element type is only known at run
//! time, as it is when arrays arrive from a file header or a foreign
//! caller. Each operation checks that every argument shares the input's
//! [`ElementKind`], then dispatches exactly once into the typed core.

use std::str::FromStr;

use log::debug;
use ndmorph_core::{Element, ElementKind};
use ndmorph_grid::{Grid, GridError, Shape, StructuringElement};
use ndmorph_ops::validate::{ROLE_MARKERS, ROLE_STRUCTURING_ELEMENT};
use ndmorph_ops::{DilateConfig, MorphError};

/// A grid of any supported element type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DynGrid {
    /// `u8` elements.
    U8(Grid<u8>),
    /// `u16` elements.
    U16(Grid<u16>),
    /// `u32` elements.
    U32(Grid<u32>),
    /// `u64` elements.
    U64(Grid<u64>),
    /// `i8` elements.
    I8(Grid<i8>),
    /// `i16` elements.
    I16(Grid<i16>),
    /// `i32` elements.
    I32(Grid<i32>),
    /// `i64` elements.
    I64(Grid<i64>),
}

/// Element types that can live inside a [`DynGrid`].
///
/// Implemented for every [`ElementKind`]; not meant to be implemented
/// outside this crate.
pub trait DynElement: Element {
    /// Wrap a typed grid.
    fn wrap(grid: Grid<Self>) -> DynGrid;
    /// Borrow the typed grid if `grid` holds this element type.
    fn peek(grid: &DynGrid) -> Option<&Grid<Self>>;
    /// Take the typed grid, or hand `grid` back unchanged.
    fn take(grid: DynGrid) -> Result<Grid<Self>, DynGrid>;
}

macro_rules! impl_dyn_element {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl DynElement for $t {
                fn wrap(grid: Grid<Self>) -> DynGrid {
                    DynGrid::$variant(grid)
                }

                fn peek(grid: &DynGrid) -> Option<&Grid<Self>> {
                    match grid {
                        DynGrid::$variant(g) => Some(g),
                        _ => None,
                    }
                }

                fn take(grid: DynGrid) -> Result<Grid<Self>, DynGrid> {
                    match grid {
                        DynGrid::$variant(g) => Ok(g),
                        other => Err(other),
                    }
                }
            }

            impl From<Grid<$t>> for DynGrid {
                fn from(grid: Grid<$t>) -> Self {
                    DynGrid::$variant(grid)
                }
            }
        )*
    };
}

impl_dyn_element! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

/// Run `$body` with `$t` bound to the Rust type of `$kind`.
macro_rules! with_element_type {
    ($kind:expr, $t:ident => $body:expr) => {
        match $kind {
            ElementKind::U8 => {
                type $t = u8;
                $body
            }
            ElementKind::U16 => {
                type $t = u16;
                $body
            }
            ElementKind::U32 => {
                type $t = u32;
                $body
            }
            ElementKind::U64 => {
                type $t = u64;
                $body
            }
            ElementKind::I8 => {
                type $t = i8;
                $body
            }
            ElementKind::I16 => {
                type $t = i16;
                $body
            }
            ElementKind::I32 => {
                type $t = i32;
                $body
            }
            ElementKind::I64 => {
                type $t = i64;
                $body
            }
        }
    };
}

/// Borrow `grid` as `Grid<T>`, or report it under `role` as the wrong
/// element type.
fn operand<'a, T: DynElement>(grid: &'a DynGrid, role: &'static str) -> Result<&'a Grid<T>, MorphError> {
    T::peek(grid).ok_or(MorphError::TypeMismatch {
        role,
        expected: T::KIND,
        actual: grid.kind(),
    })
}

impl DynGrid {
    /// A zero-filled grid of `kind` elements.
    ///
    /// # Errors
    ///
    /// Any [`GridError`] from building the shape or allocating storage.
    pub fn zeros(kind: ElementKind, dims: &[usize]) -> Result<Self, GridError> {
        let shape = Shape::new(dims)?;
        with_element_type!(kind, T => Grid::<T>::zeros(shape).map(T::wrap))
    }

    /// Like [`zeros`](Self::zeros), with the element type given by name
    /// (`"uint8"`, `"int32"`, ...).
    ///
    /// # Errors
    ///
    /// [`MorphError::UnsupportedElementType`] for an unknown name, or
    /// [`MorphError::Grid`] from [`zeros`](Self::zeros).
    pub fn zeros_named(type_name: &str, dims: &[usize]) -> Result<Self, MorphError> {
        let kind = ElementKind::from_str(type_name)?;
        Ok(Self::zeros(kind, dims)?)
    }

    /// Element type of the held grid.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::U8(_) => ElementKind::U8,
            Self::U16(_) => ElementKind::U16,
            Self::U32(_) => ElementKind::U32,
            Self::U64(_) => ElementKind::U64,
            Self::I8(_) => ElementKind::I8,
            Self::I16(_) => ElementKind::I16,
            Self::I32(_) => ElementKind::I32,
            Self::I64(_) => ElementKind::I64,
        }
    }

    /// Shape of the held grid.
    pub fn shape(&self) -> &Shape {
        match self {
            Self::U8(g) => g.shape(),
            Self::U16(g) => g.shape(),
            Self::U32(g) => g.shape(),
            Self::U64(g) => g.shape(),
            Self::I8(g) => g.shape(),
            Self::I16(g) => g.shape(),
            Self::I32(g) => g.shape(),
            Self::I64(g) => g.shape(),
        }
    }

    /// Per-axis extents of the held grid.
    pub fn dims(&self) -> &[usize] {
        self.shape().dims()
    }

    /// Borrow the held grid as `Grid<T>`, if that is its element type.
    pub fn as_grid<T: DynElement>(&self) -> Option<&Grid<T>> {
        T::peek(self)
    }

    /// Unwrap into `Grid<T>`, or get `self` back if the type differs.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when it does not hold `T` elements.
    pub fn into_grid<T: DynElement>(self) -> Result<Grid<T>, DynGrid> {
        T::take(self)
    }

    /// Number of nonzero elements.
    pub fn count_nonzero(&self) -> usize {
        with_element_type!(self.kind(), T => {
            operand::<T>(self, "input").map_or(0, |g| g.count_nonzero())
        })
    }

    fn check_kind(&self, role: &'static str, other: &DynGrid) -> Result<(), MorphError> {
        if other.kind() != self.kind() {
            return Err(MorphError::TypeMismatch {
                role,
                expected: self.kind(),
                actual: other.kind(),
            });
        }
        Ok(())
    }

    /// Binary erosion by the active cells of `se`.
    ///
    /// # Errors
    ///
    /// [`MorphError::TypeMismatch`] if `se` holds another element type,
    /// otherwise whatever [`ndmorph_ops::erode`] reports.
    pub fn erode(&self, se: &DynGrid) -> Result<DynGrid, MorphError> {
        self.check_kind(ROLE_STRUCTURING_ELEMENT, se)?;
        debug!("dispatch erode as {}", self.kind());
        with_element_type!(self.kind(), T => {
            let input = operand::<T>(self, "input")?;
            let se = StructuringElement::new(operand::<T>(se, ROLE_STRUCTURING_ELEMENT)?.clone());
            ndmorph_ops::erode(input, &se).map(DynGrid::from)
        })
    }

    /// Additive dilation by `se` with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`dilate_with`](Self::dilate_with).
    pub fn dilate(&self, se: &DynGrid) -> Result<DynGrid, MorphError> {
        self.dilate_with(se, &DilateConfig::default())
    }

    /// Additive dilation by `se` under `config`.
    ///
    /// # Errors
    ///
    /// [`MorphError::TypeMismatch`] if `se` holds another element type,
    /// otherwise whatever [`ndmorph_ops::dilate_with`] reports.
    pub fn dilate_with(&self, se: &DynGrid, config: &DilateConfig) -> Result<DynGrid, MorphError> {
        self.check_kind(ROLE_STRUCTURING_ELEMENT, se)?;
        debug!("dispatch dilate as {}", self.kind());
        with_element_type!(self.kind(), T => {
            let input = operand::<T>(self, "input")?;
            let se = StructuringElement::new(operand::<T>(se, ROLE_STRUCTURING_ELEMENT)?.clone());
            ndmorph_ops::dilate_with(input, &se, config).map(DynGrid::from)
        })
    }

    /// Marker-seeded watershed of this intensity grid.
    ///
    /// Markers are checked before the structuring element.
    ///
    /// # Errors
    ///
    /// [`MorphError::TypeMismatch`] if `markers` or `se` holds another
    /// element type, otherwise whatever [`ndmorph_ops::watershed`] reports.
    pub fn watershed(&self, markers: &DynGrid, se: &DynGrid) -> Result<DynGrid, MorphError> {
        self.check_kind(ROLE_MARKERS, markers)?;
        self.check_kind(ROLE_STRUCTURING_ELEMENT, se)?;
        debug!("dispatch watershed as {}", self.kind());
        with_element_type!(self.kind(), T => {
            let input = operand::<T>(self, "input")?;
            let markers = operand::<T>(markers, ROLE_MARKERS)?;
            let se = StructuringElement::new(operand::<T>(se, ROLE_STRUCTURING_ELEMENT)?.clone());
            ndmorph_ops::watershed(input, markers, &se).map(DynGrid::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndmorph_test_utils::line;

    #[test]
    fn from_and_back() {
        let dynamic = DynGrid::from(line(&[1i16, -2, 3]));
        assert_eq!(dynamic.kind(), ElementKind::I16);
        assert_eq!(dynamic.dims(), &[3]);
        assert!(dynamic.as_grid::<u16>().is_none());
        assert_eq!(dynamic.as_grid::<i16>().unwrap().as_slice(), &[1, -2, 3]);

        let back = dynamic.into_grid::<u8>().unwrap_err();
        let typed = back.into_grid::<i16>().unwrap();
        assert_eq!(typed, line(&[1i16, -2, 3]));
    }

    #[test]
    fn zeros_for_every_kind() {
        for kind in ElementKind::ALL {
            let g = DynGrid::zeros(kind, &[2, 3]).unwrap();
            assert_eq!(g.kind(), kind);
            assert_eq!(g.shape().len(), 6);
            assert_eq!(g.count_nonzero(), 0);
        }
    }

    #[test]
    fn zeros_named_rejects_unknown_types() {
        assert_eq!(DynGrid::zeros_named("int32", &[4]).unwrap().kind(), ElementKind::I32);
        assert!(matches!(
            DynGrid::zeros_named("float32", &[4]),
            Err(MorphError::UnsupportedElementType(_))
        ));
    }

    // ── Type checks ─────────────────────────────────────────────

    #[test]
    fn type_mismatch_wins_over_dimension_mismatch() {
        let input = DynGrid::from(line(&[1u8, 1, 1]));
        let se = DynGrid::zeros(ElementKind::U16, &[3, 3]).unwrap();
        assert_eq!(
            input.erode(&se).unwrap_err(),
            MorphError::TypeMismatch {
                role: ROLE_STRUCTURING_ELEMENT,
                expected: ElementKind::U8,
                actual: ElementKind::U16,
            }
        );
    }

    #[test]
    fn markers_type_is_checked_first() {
        let input = DynGrid::from(line(&[1i32, 2]));
        let markers = DynGrid::from(line(&[1i64, 0]));
        let se = DynGrid::from(line(&[1u8, 1, 1]));
        assert!(matches!(
            input.watershed(&markers, &se),
            Err(MorphError::TypeMismatch { role: ROLE_MARKERS, .. })
        ));
    }

    // ── Dispatch ────────────────────────────────────────────────

    #[test]
    fn dispatches_to_the_typed_core() {
        let input = DynGrid::from(line(&[5u32, 3, 6, 2, 8]));
        let markers = DynGrid::from(line(&[1u32, 0, 0, 2, 0]));
        let se = DynGrid::from(line(&[1u32, 1, 1]));
        let labels = input.watershed(&markers, &se).unwrap();
        assert_eq!(labels, DynGrid::from(line(&[1u32, 1, 2, 2, 2])));

        let dilated = DynGrid::from(line(&[0i8, 3, 0])).dilate(&DynGrid::from(line(&[1i8, 2, 1]))).unwrap();
        assert_eq!(dilated.as_grid::<i8>().unwrap().as_slice(), &[4, 5, 4]);
    }
}
