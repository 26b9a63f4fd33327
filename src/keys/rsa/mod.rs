//! RSA key-pair generation.
//!
//! The module is split into:
//!
//! - `core`
//!   [`KeyGenerator`], which runs the generation once and then exposes the
//!   immutable components.
//!
//! - `params`
//!   [`KeyGenParams`], the tunable bounds of a generation (prime
//!   magnitude, sampling floor ratio, retry ceiling) with validation.
//!
//! - `keypair`
//!   [`PublicKey`], [`PrivateKey`] and [`KeyPair`], the views handed out
//!   once generation succeeded.
//!
//! ## Generation steps
//!
//! 1. draw a prime `p` below the prime bound
//! 2. draw a prime `q` below the same bound, redrawn while `q == p`
//! 3. compute `n = p * q` and `phi = (p - 1)(q - 1)` with checked arithmetic
//! 4. draw a prime `e` below `phi`, redrawn while `gcd(e, phi) != 1`
//! 5. compute `d = e⁻¹ mod phi`
//!
//! Every redraw loop is bounded, and any failure aborts the whole
//! generation: no key is returned with unset or inconsistent fields.

mod core;
mod keypair;
mod params;

pub use self::core::KeyGenerator;
pub use keypair::{KeyPair, PrivateKey, PublicKey};
pub use params::KeyGenParams;
