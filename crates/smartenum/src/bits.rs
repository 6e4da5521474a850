//! Bit operations over the integer types that can back a flag enum.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{BitAnd, BitOr, Not},
};

/// A primitive integer usable as the underlying value of a flag enum.
pub trait FlagBits:
    Copy
    + Ord
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    /// No bits set; the "none" sentinel.
    const ZERO: Self;
    /// Every bit set; the "all" sentinel (`-1` for signed types, `MAX` for unsigned).
    const ALL: Self;

    /// Whether the value is below zero. Always false for unsigned types.
    fn is_negative(self) -> bool;

    /// Whether exactly one bit is set, reading the value as a raw bit pattern.
    fn is_single_bit(self) -> bool;

    /// Index of the lowest set bit.
    fn bit_index(self) -> u32;

    /// Whether the value is one of the two sentinels exempt from flag validation.
    #[inline]
    fn is_sentinel(self) -> bool {
        self == Self::ZERO || self == Self::ALL
    }

    /// Whether every bit of `flag` is also set in `self`.
    #[inline]
    fn contains(self, flag: Self) -> bool {
        self & flag == flag
    }

    /// Clear every bit of `flag` from `self`.
    #[inline]
    fn without(self, flag: Self) -> Self {
        self & !flag
    }
}

/// Implement [`FlagBits`] for signed primitives.
macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl FlagBits for $ty {
                const ZERO: Self = 0;
                const ALL: Self = -1;

                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn is_single_bit(self) -> bool {
                    self.count_ones() == 1
                }

                #[inline]
                fn bit_index(self) -> u32 {
                    self.trailing_zeros()
                }
            }
        )*
    };
}

/// Implement [`FlagBits`] for unsigned primitives.
macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl FlagBits for $ty {
                const ZERO: Self = 0;
                const ALL: Self = <$ty>::MAX;

                #[inline]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline]
                fn is_single_bit(self) -> bool {
                    self.is_power_of_two()
                }

                #[inline]
                fn bit_index(self) -> u32 {
                    self.trailing_zeros()
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// OR together every value in `values`.
pub fn union<V: FlagBits>(values: impl IntoIterator<Item = V>) -> V {
    values.into_iter().fold(V::ZERO, |acc, v| acc | v)
}

/// Whether `value` has any bit set outside `mask`.
#[inline]
pub fn exceeds<V: FlagBits>(value: V, mask: V) -> bool {
    value & !mask != V::ZERO
}
