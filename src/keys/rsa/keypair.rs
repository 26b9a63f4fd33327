//! Public and private RSA key views.

use std::fmt::{self, Debug, Display, Formatter};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::primitives::KeyInt;

/// An RSA public key `(n, e)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey<T: KeyInt> {
    pub(crate) n: T,
    pub(crate) e: T,
}

impl<T: KeyInt> PublicKey<T> {
    /// The modulus.
    #[inline]
    pub fn modulus(&self) -> T {
        self.n
    }

    /// The public (encryption) exponent.
    #[inline]
    pub fn exponent(&self) -> T {
        self.e
    }

    /// Number of significant bits in the modulus.
    pub fn bit_length(&self) -> u32 {
        self.n.bit_length()
    }
}

impl<T: KeyInt> Display for PublicKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(n = {}, e = {})", self.n, self.e)
    }
}

/// An RSA private key `(n, d)` together with the secret factors.
///
/// All fields are wiped from memory when the key is dropped, and the
/// `Debug` output only shows the public modulus. There is no `PartialEq`;
/// compare keys through [`PrivateKey::modulus`] and [`PrivateKey::exponent`].
#[derive(Clone)]
pub struct PrivateKey<T: KeyInt> {
    pub(crate) n: T,
    pub(crate) d: T,
    pub(crate) p: T,
    pub(crate) q: T,
    pub(crate) phi: T,
}

impl<T: KeyInt> PrivateKey<T> {
    /// The modulus.
    #[inline]
    pub fn modulus(&self) -> T {
        self.n
    }

    /// The private (decryption) exponent.
    #[inline]
    pub fn exponent(&self) -> T {
        self.d
    }

    /// The prime factors `(p, q)` of the modulus.
    #[inline]
    pub fn primes(&self) -> (T, T) {
        (self.p, self.q)
    }

    /// Euler's totient of the modulus, `(p - 1)(q - 1)`.
    #[inline]
    pub fn totient(&self) -> T {
        self.phi
    }
}

impl<T: KeyInt> Debug for PrivateKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n", &self.n)
            .field("d", &"<redacted>")
            .field("p", &"<redacted>")
            .field("q", &"<redacted>")
            .field("phi", &"<redacted>")
            .finish()
    }
}

impl<T: KeyInt> Zeroize for PrivateKey<T> {
    fn zeroize(&mut self) {
        self.n.zeroize();
        self.d.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.phi.zeroize();
    }
}

impl<T: KeyInt> Drop for PrivateKey<T> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<T: KeyInt> ZeroizeOnDrop for PrivateKey<T> {}

/// A matching public/private key pair.
#[derive(Clone, Debug)]
pub struct KeyPair<T: KeyInt> {
    pub public: PublicKey<T>,
    pub private: PrivateKey<T>,
}
