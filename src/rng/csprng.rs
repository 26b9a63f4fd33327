//! ChaCha20-based CSPRNG
//!
//! A deterministic random bit generator built on the ChaCha20 block
//! function, exposed through the `rand` traits so it can drive any code
//! written against [`rand::Rng`].
//!
//! - seeded once, either from the operating system or from a caller seed
//! - expands the seed with ChaCha20 under an incrementing block counter
//! - rekeys after every request, so captured state does not reveal
//!   earlier output
//! - wipes its key material on drop

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KeyGenError;
use crate::rng::chacha20::ChaCha20;

/// Cryptographically secure pseudorandom number generator.
///
/// Two generators built from the same seed produce the same byte stream,
/// which is what makes seeded key generation reproducible.
#[derive(Zeroize)]
pub struct Csprng {
    cipher: ChaCha20,
    counter: u32,
}

impl Csprng {
    /// Creates a generator seeded from the operating system entropy source.
    ///
    /// # Errors
    ///
    /// [`KeyGenError::Entropy`] if the OS source is unavailable.
    pub fn from_os() -> Result<Self, KeyGenError> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed)?;

        let rng = <Self as SeedableRng>::from_seed(seed);
        seed.zeroize();

        Ok(rng)
    }

    /// Replaces the key with the next keystream block.
    fn rekey(&mut self) {
        let mut block = self.next_block();

        let mut key = [0u8; 32];
        key.copy_from_slice(&block[..32]);
        self.cipher.zeroize();
        self.cipher = ChaCha20::new(&key);

        key.zeroize();
        block.zeroize();
    }

    fn next_block(&mut self) -> [u8; 64] {
        let block = self.cipher.block(self.counter);
        self.counter = self.counter.wrapping_add(1);

        block
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);

        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);

        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(64) {
            let mut block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
            block.zeroize();
        }

        self.rekey();
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);

        Ok(())
    }
}

impl CryptoRng for Csprng {}

impl SeedableRng for Csprng {
    type Seed = [u8; 32];

    /// Creates a generator from a 256-bit seed.
    ///
    /// The seed must be uniformly random for the output to be
    /// unpredictable; the local copy is wiped once the key is set up.
    fn from_seed(mut seed: Self::Seed) -> Self {
        let cipher = ChaCha20::new(&seed);
        seed.zeroize();

        Self { cipher, counter: 0 }
    }
}

impl Drop for Csprng {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Csprng {}
