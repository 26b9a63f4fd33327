//! RSA key generator.
//!
//! [`KeyGenerator`] owns the six RSA quantities `p`, `q`, `n`, `phi`, `e`
//! and `d`. Every constructor either returns a generator whose fields all
//! satisfy the RSA invariants or an error; there is no half-initialized
//! state and no mutation afterwards.

use std::fmt::{self, Debug, Formatter};

use log::{debug, trace};
use rand::{Rng, SeedableRng};

use super::keypair::{KeyPair, PrivateKey, PublicKey};
use super::params::KeyGenParams;
use crate::arith::{gcd, mod_inverse};
use crate::error::KeyGenError;
use crate::prime::{PrimeSampler, is_prime};
use crate::primitives::KeyInt;
use crate::rng::Csprng;

/// A generated RSA key pair over the integer width `T`.
///
/// Invariants upheld by every instance:
/// - `p` and `q` are distinct primes
/// - `n == p * q` and `phi == (p - 1)(q - 1)`, both without overflow
/// - `1 < e < phi` and `gcd(e, phi) == 1`
/// - `1 < d < phi` and `d * e ≡ 1 (mod phi)`
#[derive(Clone, PartialEq, Eq)]
pub struct KeyGenerator<T: KeyInt = u32> {
    p: T,
    q: T,
    n: T,
    phi: T,
    e: T,
    d: T,
}

impl<T: KeyInt> KeyGenerator<T> {
    /// Generates a key pair with default parameters, seeded from the OS.
    pub fn new() -> Result<Self, KeyGenError> {
        Self::with_params(KeyGenParams::default())
    }

    /// Generates a key pair with `params`, seeded from the OS.
    pub fn with_params(params: KeyGenParams<T>) -> Result<Self, KeyGenError> {
        let mut rng = Csprng::from_os()?;

        Self::generate(&params, &mut rng)
    }

    /// Generates a key pair with `params` from a fixed seed.
    ///
    /// The same seed and parameters always produce the same key pair.
    pub fn from_seed(params: KeyGenParams<T>, seed: [u8; 32]) -> Result<Self, KeyGenError> {
        let mut rng = Csprng::from_seed(seed);

        Self::generate(&params, &mut rng)
    }

    /// Generates a key pair with `params`, drawing randomness from `rng`.
    ///
    /// `rng` is used as is and never reseeded.
    ///
    /// # Errors
    ///
    /// - [`KeyGenError::InvalidParameters`] / [`KeyGenError::InvalidBound`]
    ///   for unusable parameters.
    /// - [`KeyGenError::ExhaustedSearchSpace`] if a sampling loop hits the
    ///   retry ceiling.
    /// - [`KeyGenError::ArithmeticOverflow`] if `p * q` does not fit in `T`.
    pub fn generate<R>(params: &KeyGenParams<T>, rng: &mut R) -> Result<Self, KeyGenError>
    where
        R: Rng + ?Sized,
    {
        params.validate()?;
        let sampler = params.sampler();

        let p = sampler.sample(rng, params.prime_bound)?;
        let (q, n, phi) = sample_second_prime(&sampler, rng, params.prime_bound, p)?;
        let e = sample_public_exponent(&sampler, rng, phi)?;
        let d = mod_inverse(e, phi).ok_or(KeyGenError::InvalidComponents(
            "public exponent is not invertible modulo phi",
        ))?;

        debug!(
            "generated {}-bit RSA modulus {} with public exponent {}",
            n.bit_length(),
            n,
            e
        );

        Ok(Self { p, q, n, phi, e, d })
    }

    /// Builds a key pair from known primes and public exponent.
    ///
    /// `e` does not need to be prime, only coprime to `phi`.
    ///
    /// # Errors
    ///
    /// - [`KeyGenError::InvalidComponents`] if `p` or `q` is not prime,
    ///   `p == q`, or `e` is outside `(1, phi)` or shares a factor with `phi`.
    /// - [`KeyGenError::ArithmeticOverflow`] if `p * q` does not fit in `T`.
    pub fn from_components(p: T, q: T, e: T) -> Result<Self, KeyGenError> {
        if !is_prime(p) || !is_prime(q) {
            return Err(KeyGenError::InvalidComponents("p and q must both be prime"));
        }

        if p == q {
            return Err(KeyGenError::InvalidComponents("p and q must be distinct"));
        }

        let (n, phi) = modulus_and_totient(p, q)?;

        if e <= T::one() || e >= phi {
            return Err(KeyGenError::InvalidComponents(
                "public exponent must satisfy 1 < e < phi",
            ));
        }

        let d = mod_inverse(e, phi).ok_or(KeyGenError::InvalidComponents(
            "public exponent must be coprime to phi",
        ))?;

        Ok(Self { p, q, n, phi, e, d })
    }

    /// Re-checks every RSA invariant from scratch.
    ///
    /// Returns [`KeyGenError::InvalidComponents`] naming the first
    /// violated invariant.
    pub fn verify(&self) -> Result<(), KeyGenError> {
        let invalid = |reason| Err(KeyGenError::InvalidComponents(reason));

        if !is_prime(self.p) || !is_prime(self.q) {
            return invalid("p and q must both be prime");
        }

        if self.p == self.q {
            return invalid("p and q must be distinct");
        }

        let (n, phi) = modulus_and_totient(self.p, self.q)?;

        if n != self.n {
            return invalid("modulus does not equal p * q");
        }

        if phi != self.phi {
            return invalid("totient does not equal (p - 1)(q - 1)");
        }

        if self.e <= T::one() || self.e >= phi {
            return invalid("public exponent must satisfy 1 < e < phi");
        }

        if gcd(self.e, phi) != T::one() {
            return invalid("public exponent must be coprime to phi");
        }

        if self.d <= T::one() || self.d >= phi {
            return invalid("private exponent must satisfy 1 < d < phi");
        }

        // both factors are below phi, so the product fits in 128 bits
        if (self.d.widen() * self.e.widen()) % phi.widen() != 1 {
            return invalid("d * e is not congruent to 1 modulo phi");
        }

        Ok(())
    }

    /// The first prime factor.
    pub fn p(&self) -> T {
        self.p
    }

    /// The second prime factor, distinct from `p`.
    pub fn q(&self) -> T {
        self.q
    }

    /// The modulus `n = p * q`.
    pub fn n(&self) -> T {
        self.n
    }

    /// Euler's totient `phi = (p - 1)(q - 1)`.
    pub fn phi(&self) -> T {
        self.phi
    }

    /// The public exponent.
    pub fn e(&self) -> T {
        self.e
    }

    /// The private exponent.
    pub fn d(&self) -> T {
        self.d
    }

    /// The public key `(n, e)`.
    pub fn public_key(&self) -> PublicKey<T> {
        PublicKey {
            n: self.n,
            e: self.e,
        }
    }

    /// The private key `(n, d)` with its secret factors.
    pub fn private_key(&self) -> PrivateKey<T> {
        PrivateKey {
            n: self.n,
            d: self.d,
            p: self.p,
            q: self.q,
            phi: self.phi,
        }
    }

    /// Both keys together.
    pub fn key_pair(&self) -> KeyPair<T> {
        KeyPair {
            public: self.public_key(),
            private: self.private_key(),
        }
    }
}

impl<T: KeyInt> Debug for KeyGenerator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyGenerator")
            .field("n", &self.n)
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}

/// `n = p * q` and `phi = (p - 1)(q - 1)`, both checked.
fn modulus_and_totient<T: KeyInt>(p: T, q: T) -> Result<(T, T), KeyGenError> {
    let n = p.checked_mul(&q).ok_or(KeyGenError::ArithmeticOverflow {
        operation: "modulus p * q",
    })?;

    let p_minus_one = p.checked_sub(&T::one()).ok_or(KeyGenError::ArithmeticOverflow {
        operation: "p - 1",
    })?;
    let q_minus_one = q.checked_sub(&T::one()).ok_or(KeyGenError::ArithmeticOverflow {
        operation: "q - 1",
    })?;

    let phi = p_minus_one
        .checked_mul(&q_minus_one)
        .ok_or(KeyGenError::ArithmeticOverflow {
            operation: "totient (p - 1)(q - 1)",
        })?;

    Ok((n, phi))
}

/// Draws `q != p` and returns `(q, n, phi)`.
///
/// A `q` whose totient is below 3 (`{p, q} = {2, 3}`) leaves no room for
/// `1 < e < phi` and is redrawn as well.
fn sample_second_prime<T, R>(
    sampler: &PrimeSampler,
    rng: &mut R,
    prime_bound: T,
    p: T,
) -> Result<(T, T, T), KeyGenError>
where
    T: KeyInt,
    R: Rng + ?Sized,
{
    let min_totient = T::two() + T::one();

    for attempt in 1..=sampler.max_attempts {
        let q = sampler.sample(rng, prime_bound)?;

        if q == p {
            trace!("second prime equals the first, redrawing (attempt {attempt})");
            continue;
        }

        let (n, phi) = modulus_and_totient(p, q)?;

        if phi < min_totient {
            trace!("totient admits no public exponent, redrawing (attempt {attempt})");
            continue;
        }

        return Ok((q, n, phi));
    }

    Err(KeyGenError::ExhaustedSearchSpace {
        attempts: sampler.max_attempts,
    })
}

/// Draws a prime `e < phi` with `gcd(e, phi) == 1`.
fn sample_public_exponent<T, R>(
    sampler: &PrimeSampler,
    rng: &mut R,
    phi: T,
) -> Result<T, KeyGenError>
where
    T: KeyInt,
    R: Rng + ?Sized,
{
    for attempt in 1..=sampler.max_attempts {
        let e = sampler.sample(rng, phi)?;

        if gcd(e, phi) == T::one() {
            return Ok(e);
        }

        trace!("public exponent candidate divides the totient, redrawing (attempt {attempt})");
    }

    Err(KeyGenError::ExhaustedSearchSpace {
        attempts: sampler.max_attempts,
    })
}
