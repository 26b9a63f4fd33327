//! Random number generation module
//!
//! Key generation needs exactly one thing from its environment: a source of
//! randomness that is seeded once and then queried for every candidate.
//! This module provides [`Csprng`], a ChaCha20 DRBG implementing the
//! `rand` traits.
//!
//! Anything implementing [`rand::Rng`] can be injected into the generator
//! instead; [`Csprng`] is what the convenience constructors use, either
//! seeded from the operating system or from a fixed seed for reproducible
//! runs.

pub(crate) mod chacha20;
mod csprng;

pub use csprng::Csprng;
