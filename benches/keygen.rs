use rsa_keygen::rng::Csprng;
use rsa_keygen::{KeyGenParams, KeyGenerator};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use std::hint::black_box;

pub fn bench_keygen(c: &mut Criterion) {
    let params_u32 = KeyGenParams::<u32>::default();
    let params_u64 = KeyGenParams::<u64>::default();

    c.bench_function("keygen u32 (16-bit primes)", |b| {
        let mut rng = Csprng::seed_from_u64(0x5eed);
        b.iter(|| KeyGenerator::generate(black_box(&params_u32), &mut rng).unwrap())
    });

    c.bench_function("keygen u64 (32-bit primes)", |b| {
        let mut rng = Csprng::seed_from_u64(0x5eed);
        b.iter(|| KeyGenerator::generate(black_box(&params_u64), &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_keygen);
criterion_main!(benches);
