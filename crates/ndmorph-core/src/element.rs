//! The [`Element`] numeric trait and the closed set of [`ElementKind`]s.

use crate::error::UnsupportedElementType;
use std::fmt;
use std::str::FromStr;

/// Integer element type a grid can hold.
///
/// Implemented for the eight fixed-width integer types. Algorithms are
/// generic over `T: Element`, so the element type is resolved at compile
/// time and no type dispatch happens inside the hot loops.
///
/// `MAX` seeds the watershed cost map; `ZERO`/`ONE` are the boolean
/// "false"/"true" values written by erosion.
pub trait Element: Copy + Ord + Default + fmt::Debug + Send + Sync + 'static {
    /// The additive identity; also the "background"/"false" value.
    const ZERO: Self;
    /// The value erosion writes for "true".
    const ONE: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Runtime tag for this type.
    const KIND: ElementKind;

    /// `true` if the value is nonzero ("foreground" / "active").
    fn is_nonzero(self) -> bool {
        self != Self::ZERO
    }

    /// Two's-complement wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Addition clamped to the type's range.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Addition returning `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;
                const KIND: ElementKind = ElementKind::$kind;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$ty>::saturating_add(self, rhs)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_element! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
}

/// Runtime tag for the supported element types.
///
/// Names follow the numpy dtype spelling (`"uint8"`, `"int32"`, ...) so
/// callers holding a dtype string can resolve it with [`str::parse`].
///
/// # Examples
///
/// ```
/// use ndmorph_core::ElementKind;
///
/// let kind: ElementKind = "uint16".parse().unwrap();
/// assert_eq!(kind, ElementKind::U16);
/// assert_eq!(kind.size_bytes(), 2);
/// assert!("float32".parse::<ElementKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `u8` / `uint8`.
    U8,
    /// `u16` / `uint16`.
    U16,
    /// `u32` / `uint32`.
    U32,
    /// `u64` / `uint64`.
    U64,
    /// `i8` / `int8`.
    I8,
    /// `i16` / `int16`.
    I16,
    /// `i32` / `int32`.
    I32,
    /// `i64` / `int64`.
    I64,
}

impl ElementKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [ElementKind; 8] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
    ];

    /// The numpy-style dtype name.
    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
        }
    }

    /// Width of one element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            Self::U64 | Self::I64 => 8,
        }
    }

    /// `true` for the signed kinds.
    pub fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = UnsupportedElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnsupportedElementType {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_constants_match_types() {
        assert_eq!(<u8 as Element>::KIND, ElementKind::U8);
        assert_eq!(<i64 as Element>::KIND, ElementKind::I64);
        assert_eq!(<u32 as Element>::MAX, u32::MAX);
        assert_eq!(<i16 as Element>::ONE, 1i16);
    }

    #[test]
    fn names_round_trip_through_parse() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.name().parse::<ElementKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "float64".parse::<ElementKind>().unwrap_err();
        assert_eq!(err.name, "float64");
        assert!(err.to_string().contains("float64"));
    }

    #[test]
    fn nonzero_test() {
        assert!(!0u8.is_nonzero());
        assert!(3u8.is_nonzero());
        assert!((-1i32).is_nonzero());
    }

    #[test]
    fn addition_policies() {
        assert_eq!(Element::wrapping_add(250u8, 10), 4);
        assert_eq!(Element::saturating_add(250u8, 10), 255);
        assert_eq!(Element::checked_add(250u8, 10), None);
        assert_eq!(Element::checked_add(-5i8, 3), Some(-2));
        assert_eq!(Element::saturating_add(-100i8, -100), i8::MIN);
    }

    #[test]
    fn signedness_and_width() {
        assert!(ElementKind::I8.is_signed());
        assert!(!ElementKind::U64.is_signed());
        assert_eq!(ElementKind::I64.size_bytes(), 8);
    }
}
