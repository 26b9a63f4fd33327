//! ChaCha20 block function (RFC 8439), keyed once and evaluated per counter.
//!
//! Only the keystream block is provided: the generator in
//! [`csprng`](super::csprng) uses it as a deterministic random bit source
//! and never XORs it with data.

use zeroize::Zeroize;

/// `"expand 32-byte k"` as little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Word indices touched by each quarter round of a double round:
/// four columns followed by four diagonals.
const DOUBLE_ROUND: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// A keyed ChaCha20 instance with an all-zero nonce.
#[derive(Clone, Zeroize)]
pub(crate) struct ChaCha20 {
    /// Initial state; word 12 (the block counter) is filled per call.
    input: [u32; 16],
}

impl ChaCha20 {
    pub(crate) fn new(key: &[u8; 32]) -> Self {
        let mut input = [0u32; 16];
        input[..4].copy_from_slice(&SIGMA);

        for (word, bytes) in input[4..12].iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        // words 12..16 (counter and nonce) stay zero

        Self { input }
    }

    /// Produces the 64-byte keystream block for `counter`.
    pub(crate) fn block(&self, counter: u32) -> [u8; 64] {
        let mut initial = self.input;
        initial[12] = counter;

        let mut state = initial;
        for _ in 0..10 {
            for &[a, b, c, d] in DOUBLE_ROUND.iter() {
                quarter_round(&mut state, a, b, c, d);
            }
        }

        let mut out = [0u8; 64];
        for ((chunk, word), init) in out.chunks_exact_mut(4).zip(state.iter()).zip(initial.iter()) {
            chunk.copy_from_slice(&word.wrapping_add(*init).to_le_bytes());
        }

        state.zeroize();
        initial.zeroize();

        out
    }
}

#[inline(always)]
fn quarter_round(s: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(16);

    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(12);

    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(8);

    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(7);
}
