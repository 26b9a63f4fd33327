//! Asymmetric key material.
//!
//! This module groups key-pair construction for asymmetric algorithms.
//! Each submodule corresponds to one algorithm and defines its own key
//! types, parameters and generation routine.
//!
//! ## RSA
//!
//! The `rsa` module derives an RSA key pair from two random primes:
//! modulus `n = p * q`, totient `phi = (p - 1)(q - 1)`, a public exponent
//! `e` coprime to `phi` and the private exponent `d = e⁻¹ mod phi`.
//!
//! Components are fixed-width machine integers and primality is decided by
//! trial division, which keeps the construction easy to follow and to
//! check by hand. Keys of these sizes are **not** secure: the module
//! exists for teaching, testing and reproducible experiments, and it
//! deliberately offers no encryption, signing or serialization.
pub mod rsa;
