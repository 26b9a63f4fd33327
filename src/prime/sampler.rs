//! Rejection sampling of random primes.

use log::trace;
use rand::Rng;

use crate::error::KeyGenError;
use crate::prime::is_prime;
use crate::primitives::KeyInt;

/// Default divisor used to derive the sampling floor from the upper bound.
pub const DEFAULT_RATIO: u32 = 5000;

/// Default number of draws before sampling gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Configuration for drawing random primes.
///
/// A sampler draws uniform candidates in `[0, max_value)` and accepts the
/// first one that is prime and at least `max_value / ratio + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeSampler {
    /// Divisor applied to the upper bound to obtain the floor (non-zero).
    pub ratio: u32,
    /// Maximum number of draws per sample (non-zero).
    pub max_attempts: u32,
}

impl PrimeSampler {
    /// Creates a sampler with the given floor divisor and retry ceiling.
    pub fn new(ratio: u32, max_attempts: u32) -> Self {
        Self {
            ratio,
            max_attempts,
        }
    }

    /// Inclusive lower bound of the sampling range below `max_value`.
    ///
    /// # Errors
    ///
    /// - [`KeyGenError::InvalidParameters`] if `ratio` is zero.
    /// - [`KeyGenError::InvalidBound`] if `[floor, max_value)` is empty or
    ///   `max_value <= 2`, in which case no prime can be drawn.
    pub fn lower_bound<T: KeyInt>(&self, max_value: T) -> Result<T, KeyGenError> {
        if self.ratio == 0 {
            return Err(KeyGenError::InvalidParameters("ratio must be non-zero"));
        }

        let max = max_value.widen();
        let floor = max / u128::from(self.ratio) + 1;

        if max <= 2 || floor >= max {
            return Err(KeyGenError::InvalidBound {
                max_value: max,
                min_value: floor,
            });
        }

        // floor < max_value, so it always fits
        T::narrow(floor).ok_or(KeyGenError::ArithmeticOverflow {
            operation: "sampling floor",
        })
    }

    /// Draws a prime `rp` with `lower_bound(max_value) <= rp < max_value`.
    ///
    /// # Errors
    ///
    /// Everything [`PrimeSampler::lower_bound`] reports, plus
    /// [`KeyGenError::ExhaustedSearchSpace`] once `max_attempts` draws have
    /// been rejected.
    pub fn sample<T, R>(&self, rng: &mut R, max_value: T) -> Result<T, KeyGenError>
    where
        T: KeyInt,
        R: Rng + ?Sized,
    {
        let min_value = self.lower_bound(max_value)?;

        if self.max_attempts == 0 {
            return Err(KeyGenError::InvalidParameters(
                "max_attempts must be non-zero",
            ));
        }

        for attempt in 1..=self.max_attempts {
            let candidate = rng.gen_range(T::zero()..max_value);

            if candidate >= min_value && is_prime(candidate) {
                trace!("accepted prime candidate after {attempt} draws");
                return Ok(candidate);
            }
        }

        Err(KeyGenError::ExhaustedSearchSpace {
            attempts: self.max_attempts,
        })
    }
}

impl Default for PrimeSampler {
    /// Ratio 5000, at most 100 000 draws.
    fn default() -> Self {
        Self::new(DEFAULT_RATIO, DEFAULT_MAX_ATTEMPTS)
    }
}

/// Draws a random prime below `max_value` with the default sampler.
///
/// Shorthand for `PrimeSampler::default().sample(rng, max_value)`.
pub fn gen_rand_prime<T, R>(rng: &mut R, max_value: T) -> Result<T, KeyGenError>
where
    T: KeyInt,
    R: Rng + ?Sized,
{
    PrimeSampler::default().sample(rng, max_value)
}
