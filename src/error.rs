//! Error type shared by every fallible operation of the crate.
//!
//! Key generation either succeeds completely or reports one of these
//! variants; a partially populated key pair is never returned.

use thiserror::Error;

/// Errors raised while sampling primes or assembling an RSA key pair.
///
/// Bounds are reported widened to `u128` so a single error type serves
/// every supported integer width.
#[derive(Error, Debug)]
pub enum KeyGenError {
    /// The sampling range `[min_value, max_value)` cannot contain a prime.
    #[error("no prime can be sampled below {max_value} (lower bound {min_value})")]
    InvalidBound {
        /// Exclusive upper bound requested by the caller.
        max_value: u128,
        /// Lower bound derived from the ratio floor.
        min_value: u128,
    },

    /// Rejection sampling gave up after the configured number of draws.
    #[error("search space exhausted after {attempts} attempts")]
    ExhaustedSearchSpace {
        /// Number of rejected draws.
        attempts: u32,
    },

    /// A product or difference left the representable range of the key width.
    #[error("arithmetic overflow while computing {operation}")]
    ArithmeticOverflow {
        /// Name of the quantity being computed.
        operation: &'static str,
    },

    /// The generation parameters are unusable.
    #[error("invalid key generation parameters: {0}")]
    InvalidParameters(&'static str),

    /// Caller supplied key components violate an RSA invariant.
    #[error("invalid key components: {0}")]
    InvalidComponents(&'static str),

    /// The operating system entropy source failed.
    #[error("failed to seed from the operating system: {0}")]
    Entropy(#[from] rand::Error),
}
