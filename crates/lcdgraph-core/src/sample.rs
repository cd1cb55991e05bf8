//! Numeric sample types accepted by the graph

use core::fmt::Debug;

/// A fixed-width integer that can be stored and plotted.
///
/// The row mapping multiplies value differences by the glyph height, so every
/// sample is widened to `i128` first; this is lossless for all implementors.
pub trait Sample: Copy + Ord + Debug {
    /// The value plotted as the x-axis
    const ZERO: Self;

    /// Widen to `i128` for overflow-free arithmetic
    fn widen(self) -> i128;

    /// Narrow an `i128`, saturating at the type's bounds
    fn saturating_from(value: i128) -> Self;
}

macro_rules! impl_sample {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sample for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn saturating_from(value: i128) -> Self {
                    value.clamp(<$ty>::MIN as i128, <$ty>::MAX as i128) as $ty
                }
            }
        )*
    };
}

impl_sample!(i8, i16, i32, i64, u8, u16, u32, u64);
