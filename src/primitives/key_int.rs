//! The `KeyInt` width abstraction and its implementations.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};
use rand::distributions::uniform::SampleUniform;
use zeroize::Zeroize;

/// Unsigned fixed-width integer usable as an RSA key component.
///
/// All arithmetic the generator performs on key material goes through the
/// `num-traits` bounds (`checked_mul`, `checked_sub`, `%`, ...), so the
/// algorithms are written once and instantiated per width.
pub trait KeyInt:
    PrimInt
    + Unsigned
    + SampleUniform
    + Into<u128>
    + TryFrom<u128>
    + Zeroize
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Width of the type in bits.
    const BITS: u32;

    /// Lossless conversion into `u128`.
    #[inline]
    fn widen(self) -> u128 {
        <Self as Into<u128>>::into(self)
    }

    /// Converts back from `u128`, failing if the value does not fit.
    #[inline]
    fn narrow(value: u128) -> Option<Self> {
        <Self as TryFrom<u128>>::try_from(value).ok()
    }

    /// The constant two.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Number of significant bits, `0` for zero.
    #[inline]
    fn bit_length(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

macro_rules! impl_key_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl KeyInt for $t {
                const BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_key_int!(u16, u32, u64);
