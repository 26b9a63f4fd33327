//! Euclidean and extended Euclidean algorithms over [`KeyInt`] widths.

use crate::primitives::KeyInt;

/// Greatest common divisor of `a` and `b`.
///
/// Iterative Euclid: `gcd(a, 0) = a` and `gcd(a, b) = gcd(b, a mod b)`.
/// `gcd(0, 0)` is `0`.
pub fn gcd<T: KeyInt>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }

    a
}

/// Multiplicative inverse of `e` modulo `phi`.
///
/// Returns `d` in `[1, phi)` with `d * e ≡ 1 (mod phi)`, or `None` when
/// `phi < 2` or `gcd(e, phi) != 1`.
///
/// The Bézout coefficients of the extended algorithm are signed and bounded
/// in magnitude by `phi`; every supported width is at most 64 bits, so they
/// are tracked in `i128` without risk of overflow.
pub fn mod_inverse<T: KeyInt>(e: T, phi: T) -> Option<T> {
    if phi <= T::one() {
        return None;
    }

    let modulus = phi.widen() as i128;

    let (mut old_r, mut r) = ((e % phi).widen() as i128, modulus);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let quotient = old_r / r;

        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    // old_r is gcd(e, phi) here
    if old_r != 1 {
        return None;
    }

    T::narrow(old_s.rem_euclid(modulus) as u128)
}
