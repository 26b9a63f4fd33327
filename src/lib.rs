//! RSA key-pair generation over fixed-width integers
//!
//! This crate derives RSA key pairs from two randomly sampled primes:
//! modulus, Euler totient, a public exponent coprime to the totient and the
//! matching private exponent.
//!
//! The focus is on **clarity, determinism and total functions**: every
//! sampling loop is bounded, every product is overflow-checked, and a fixed
//! seed reproduces the same key pair. Key sizes are limited to machine
//! integers, so the keys are suitable for teaching and testing, not for
//! protecting data.
//!
//! # Module overview
//!
//! - `primitives`
//!   The [`KeyInt`] trait naming the supported integer widths (`u16`,
//!   `u32`, `u64`).
//!
//! - `arith`
//!   Greatest common divisor and modular inverse (extended Euclid).
//!
//! - `prime`
//!   Trial-division primality test and bounded rejection sampling of
//!   random primes.
//!
//! - `rng`
//!   A ChaCha20-based CSPRNG implementing the `rand` traits, seeded once
//!   from the operating system or from a caller-provided seed.
//!
//! - `keys`
//!   The RSA [`KeyGenerator`], its parameters and the public/private key
//!   views.
//!
//! # Example
//!
//! ```
//! use rsa_keygen::{KeyGenParams, KeyGenerator};
//!
//! let keys: KeyGenerator<u32> = KeyGenerator::from_seed(KeyGenParams::default(), [7u8; 32])?;
//!
//! assert_eq!(keys.n(), keys.p() * keys.q());
//! assert_eq!((keys.d() as u64 * keys.e() as u64) % keys.phi() as u64, 1);
//! # Ok::<(), rsa_keygen::KeyGenError>(())
//! ```
//!
//! # Non-goals
//!
//! No encryption, decryption, signing or key serialization is provided.

mod error;

pub mod arith;
pub mod keys;
pub mod prime;
pub mod primitives;
pub mod rng;

pub use error::KeyGenError;
pub use keys::rsa::{KeyGenParams, KeyGenerator, KeyPair, PrivateKey, PublicKey};
pub use primitives::KeyInt;
