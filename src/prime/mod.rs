//! Prime numbers
//!
//! This module provides the two prime-related building blocks of RSA key
//! generation:
//!
//! - [`is_prime`]
//!   A deterministic trial-division primality test. Exact for every value
//!   of every supported width, and fast enough for the magnitudes those
//!   widths can hold.
//!
//! - [`PrimeSampler`] / [`gen_rand_prime`]
//!   Rejection sampling of a random prime below an exclusive bound, with a
//!   lower floor of `max_value / ratio + 1` that keeps the sampled prime
//!   from being degenerately small.
//!
//! Sampling never reseeds: the caller owns the random generator and passes
//! it in, so one seed drives a whole key generation and fixed seeds give
//! reproducible output. Every sampling loop is bounded by a retry ceiling
//! and reports [`KeyGenError::ExhaustedSearchSpace`] instead of spinning.
//!
//! [`KeyGenError::ExhaustedSearchSpace`]: crate::KeyGenError::ExhaustedSearchSpace

mod primality;
mod sampler;

pub use primality::is_prime;
pub use sampler::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RATIO, PrimeSampler, gen_rand_prime};
