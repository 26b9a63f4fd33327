//! Number-theoretic helpers
//!
//! Euclid's algorithm and its extended form, the two pieces of modular
//! arithmetic RSA key generation depends on:
//!
//! - [`gcd`] decides whether a candidate public exponent is coprime to the
//!   totient.
//! - [`mod_inverse`] derives the private exponent from the public one.

mod euclid;

pub use euclid::{gcd, mod_inverse};
