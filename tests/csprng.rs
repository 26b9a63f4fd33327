use rand::{Rng, RngCore, SeedableRng};
use rsa_keygen::rng::Csprng;

// RFC 8439 appendix A.1, test vector #1: all-zero key and nonce, counter 0
const CHACHA20_ZERO_KEY_BLOCK: [u8; 64] = [
    0x76, 0xb8, 0xe0, 0xad, 0xa0, 0xf1, 0x3d, 0x90, 0x40, 0x5d, 0x6a, 0xe5, 0x53, 0x86, 0xbd, 0x28,
    0xbd, 0xd2, 0x19, 0xb8, 0xa0, 0x8d, 0xed, 0x1a, 0xa8, 0x36, 0xef, 0xcc, 0x8b, 0x77, 0x0d, 0xc7,
    0xda, 0x41, 0x59, 0x7c, 0x51, 0x57, 0x48, 0x8d, 0x77, 0x24, 0xe0, 0x3f, 0xb8, 0xd8, 0x4a, 0x37,
    0x6a, 0x43, 0xb8, 0xf4, 0x15, 0x18, 0xa1, 0x1c, 0xc3, 0x87, 0xb6, 0x69, 0xb2, 0xee, 0x65, 0x86,
];

#[test]
fn test_csprng_first_block_matches_chacha20() {
    let mut rng = Csprng::from_seed([0u8; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert_eq!(out, CHACHA20_ZERO_KEY_BLOCK);
}

#[test]
fn test_csprng_deterministic_from_seed() {
    let mut rng1 = Csprng::from_seed([0x42u8; 32]);
    let mut rng2 = Csprng::from_seed([0x42u8; 32]);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
    assert_eq!(rng1.next_u64(), rng2.next_u64());
}

#[test]
fn test_csprng_seed_from_u64_deterministic() {
    let mut rng1 = Csprng::seed_from_u64(1234);
    let mut rng2 = Csprng::seed_from_u64(1234);

    let a: Vec<u32> = (0..16).map(|_| rng1.gen_range(0..1_000_000)).collect();
    let b: Vec<u32> = (0..16).map(|_| rng2.gen_range(0..1_000_000)).collect();

    assert_eq!(a, b);
}

#[test]
fn test_csprng_rekey_changes_output() {
    let mut rng = Csprng::from_seed([0xAAu8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_distinct_seeds_diverge() {
    let mut rng1 = Csprng::from_seed([1u8; 32]);
    let mut rng2 = Csprng::from_seed([2u8; 32]);

    assert_ne!(rng1.next_u64(), rng2.next_u64());
}

#[test]
fn test_csprng_partial_and_multi_block_fills() {
    let mut rng = Csprng::from_seed([7u8; 32]);

    let mut small = [0u8; 3];
    rng.fill_bytes(&mut small);

    let mut large = [0u8; 200];
    rng.fill_bytes(&mut large);

    assert!(large.iter().any(|&b| b != 0));
    assert_ne!(large[..64], large[64..128]);
}

#[test]
fn test_csprng_try_fill_bytes_succeeds() {
    let mut rng = Csprng::seed_from_u64(5);
    let mut out = [0u8; 32];

    assert!(rng.try_fill_bytes(&mut out).is_ok());
    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_from_os() {
    let mut rng1 = Csprng::from_os().unwrap();
    let mut rng2 = Csprng::from_os().unwrap();

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_ne!(a, b);
}
