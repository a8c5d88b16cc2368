use std::fmt::Debug;

/// A type that can be used as an edge weight.
///
/// Weights need only be partially ordered so that floating-point types
/// qualify; a weight that does not compare with itself (NaN) is rejected
/// when the edge list is built. Negative weights are fine.
pub trait Weight : Copy + Debug + PartialOrd {
    /// The weight of an empty edge set.
    fn zero() -> Self;

    /// Adds two weights, or returns `None` if the sum does not fit.
    ///
    /// Floating-point sums always fit; they may become infinite.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight_impl {
    ($($type_:ident)*) => {
        $(
            impl Weight for $type_ {
                #[inline]
                fn zero() -> Self { 0 }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    $type_::checked_add(self, other)
                }
            }
        )*
    }
}

macro_rules! float_weight_impl {
    ($($type_:ident)*) => {
        $(
            impl Weight for $type_ {
                #[inline]
                fn zero() -> Self { 0.0 }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    }
}

integer_weight_impl!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
float_weight_impl!(f32 f64);
