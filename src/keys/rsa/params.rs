//! Parameter definitions and validation for RSA key generation.

use crate::error::KeyGenError;
use crate::prime::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RATIO, PrimeSampler};
use crate::primitives::KeyInt;

/// Tunable bounds of one key generation.
///
/// The default prime bound is `2^(BITS / 2)`, which guarantees that the
/// product of two sampled primes fits in `T`. Larger bounds are accepted;
/// a product that does not fit is then reported as
/// [`KeyGenError::ArithmeticOverflow`] rather than wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyGenParams<T: KeyInt> {
    /// Exclusive upper bound for `p` and `q`.
    pub prime_bound: T,
    /// Sampling floor divisor: primes are drawn from `[bound / ratio + 1, bound)`.
    pub ratio: u32,
    /// Retry ceiling for each sampling loop.
    pub max_attempts: u32,
}

impl<T: KeyInt> KeyGenParams<T> {
    /// Parameters whose prime bound is `2^bits`.
    ///
    /// # Errors
    ///
    /// [`KeyGenError::InvalidParameters`] unless `2 <= bits < T::BITS`.
    pub fn from_prime_bits(bits: u32) -> Result<Self, KeyGenError> {
        if bits < 2 || bits >= T::BITS {
            return Err(KeyGenError::InvalidParameters(
                "prime bit length must be at least 2 and below the key width",
            ));
        }

        Ok(Self {
            prime_bound: T::one() << bits as usize,
            ..Self::default()
        })
    }

    /// Sets the exclusive upper bound for `p` and `q`.
    pub fn with_prime_bound(mut self, prime_bound: T) -> Self {
        self.prime_bound = prime_bound;
        self
    }

    /// Sets the divisor that derives the sampling floor from the bound.
    pub fn with_ratio(mut self, ratio: u32) -> Self {
        self.ratio = ratio;
        self
    }

    /// Sets the retry ceiling for every sampling loop.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sampler configured with this ratio and retry ceiling.
    pub fn sampler(&self) -> PrimeSampler {
        PrimeSampler::new(self.ratio, self.max_attempts)
    }

    pub(crate) fn validate(&self) -> Result<(), KeyGenError> {
        if self.max_attempts == 0 {
            return Err(KeyGenError::InvalidParameters(
                "max_attempts must be non-zero",
            ));
        }

        // rejects a zero ratio and a bound with no room for a prime
        self.sampler().lower_bound(self.prime_bound)?;

        Ok(())
    }
}

impl<T: KeyInt> Default for KeyGenParams<T> {
    /// Prime bound `2^(BITS / 2)`, ratio 5000, 100 000 attempts.
    fn default() -> Self {
        Self {
            prime_bound: T::one() << (T::BITS / 2) as usize,
            ratio: DEFAULT_RATIO,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
