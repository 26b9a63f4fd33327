use rsa_keygen::arith::{gcd, mod_inverse};

#[test]
fn gcd_small_values() {
    assert_eq!(gcd(12u32, 18), 6);
    assert_eq!(gcd(17u32, 5), 1);
    assert_eq!(gcd(7u32, 20), 1);
    assert_eq!(gcd(100u32, 75), 25);
    assert_eq!(gcd(1u32, 1), 1);
}

#[test]
fn gcd_with_zero() {
    assert_eq!(gcd(42u32, 0), 42);
    assert_eq!(gcd(0u32, 42), 42);
    assert_eq!(gcd(0u32, 0), 0);
}

#[test]
fn gcd_is_symmetric_and_divides_both() {
    for a in 1u32..120 {
        for b in 1u32..120 {
            let g = gcd(a, b);

            assert_eq!(g, gcd(b, a));
            assert_eq!(a % g, 0);
            assert_eq!(b % g, 0);
        }
    }
}

#[test]
fn gcd_across_widths() {
    assert_eq!(gcd(0xFFFEu16, 0x7FFF), 0x7FFF);
    assert_eq!(gcd(4_294_967_291u64 * 3, 4_294_967_291u64 * 5), 4_294_967_291);
}

#[test]
fn mod_inverse_textbook_values() {
    assert_eq!(mod_inverse(7u32, 20), Some(3));
    assert_eq!(mod_inverse(3u32, 11), Some(4));
    assert_eq!(mod_inverse(17u32, 3120), Some(2753));
}

#[test]
fn mod_inverse_reduces_large_exponent() {
    // 27 ≡ 7 (mod 20)
    assert_eq!(mod_inverse(27u32, 20), Some(3));
}

#[test]
fn mod_inverse_none_when_not_coprime() {
    assert_eq!(mod_inverse(2u32, 4), None);
    assert_eq!(mod_inverse(6u32, 9), None);
    assert_eq!(mod_inverse(0u32, 9), None);
}

#[test]
fn mod_inverse_none_for_degenerate_modulus() {
    assert_eq!(mod_inverse(5u32, 0), None);
    assert_eq!(mod_inverse(5u32, 1), None);
}

#[test]
fn mod_inverse_exhaustive_small_moduli() {
    for phi in 2u32..200 {
        for e in 1..phi {
            match mod_inverse(e, phi) {
                Some(d) => {
                    assert_eq!(gcd(e, phi), 1, "inverse returned for e={e}, phi={phi}");
                    assert!(d >= 1 && d < phi);
                    assert_eq!((d * e) % phi, 1);
                }
                None => assert_ne!(gcd(e, phi), 1, "missing inverse for e={e}, phi={phi}"),
            }
        }
    }
}

#[test]
fn mod_inverse_u64_near_width_limit() {
    let phi = 4_294_967_290u64 * 4_294_967_278u64;
    let e = 65_537u64;

    let d = mod_inverse(e, phi).unwrap();

    assert!(d < phi);
    assert_eq!((d as u128 * e as u128) % phi as u128, 1);
}
