//! Seeded draw source for deterministic random number generation.
//!
//! There is no held generator object. Every draw is a pure function of
//! `(seed_hash, counter)`: the counter lives in [`RngState`], which is a small
//! `Copy` value stored inside the serializable game state. Drawing returns the
//! value together with the advanced state, so replaying the same seed and the
//! same sequence of draws always yields the same values.
//!
//! # Determinism
//!
//! Seeds are hashed with SHA-256 and mixed with the counter through a
//! SplitMix-style avalanche before the PCG output permutation. No wall-clock
//! entropy is ever consulted: an empty seed falls back to [`DEFAULT_SEED`].

use sha2::{Digest, Sha256};

/// Seed used when the caller supplies an empty one.
pub const DEFAULT_SEED: &str = "hexwarden-default-seed";

/// Alphabet used by [`draw_id`].
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Map a seed to a value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / 4_294_967_296.0
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. It is used statelessly: the state is derived from the seed
/// and the draw counter on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Combine the hashed seed and the draw counter into a single PCG seed.
///
/// The multipliers are SplitMix64 / Murmur3 finalizer constants.
pub fn compute_seed(seed_hash: u64, counter: u64) -> u64 {
    let mut hash = seed_hash;
    hash ^= counter.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

/// Returns the seed to use for `seed`, substituting [`DEFAULT_SEED`] when empty.
pub fn normalize_seed(seed: &str) -> &str {
    if seed.trim().is_empty() {
        DEFAULT_SEED
    } else {
        seed
    }
}

/// Hash a seed string into the 64-bit value consumed by the draw source.
pub fn hash_seed(seed: &str) -> u64 {
    let digest = Sha256::digest(normalize_seed(seed).as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Position of a run within its random stream.
///
/// `counter` increases by exactly one for every draw consumed and is never
/// rewound except by restoring an earlier snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RngState {
    pub seed_hash: u64,
    pub counter: u64,
}

impl RngState {
    /// Start a fresh stream for `seed` at counter zero.
    pub fn from_seed(seed: &str) -> Self {
        Self {
            seed_hash: hash_seed(seed),
            counter: 0,
        }
    }

    /// Draw a value in `[0, 1)` and advance the counter.
    pub fn next_f64(&mut self) -> f64 {
        let (value, next) = draw(*self);
        *self = next;
        value
    }

    /// Draw an index in `0..len`. Consumes no draw when `len` is zero or one.
    pub fn next_index(&mut self, len: usize) -> usize {
        let (index, next) = draw_index(*self, len);
        *self = next;
        index
    }

    /// Draw an identifier of `len` characters from the fixed alphabet.
    pub fn next_id(&mut self, len: usize) -> String {
        let (id, next) = draw_id(*self, len);
        *self = next;
        id
    }

    /// Draw `true` with probability `percent / 100`.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_f64() * 100.0 < f64::from(percent)
    }
}

/// Pure draw: returns a value in `[0, 1)` and the advanced stream.
pub fn draw(rng: RngState) -> (f64, RngState) {
    let value = PcgRng.unit(compute_seed(rng.seed_hash, rng.counter));
    (
        value,
        RngState {
            seed_hash: rng.seed_hash,
            counter: rng.counter + 1,
        },
    )
}

/// Pure draw of an index in `0..len`.
///
/// Choosing among zero or one options is not a decision, so no draw is
/// consumed and index 0 is returned.
pub fn draw_index(rng: RngState, len: usize) -> (usize, RngState) {
    if len <= 1 {
        return (0, rng);
    }
    let (value, next) = draw(rng);
    let index = ((value * len as f64) as usize).min(len - 1);
    (index, next)
}

/// Compose `len` draws into an identifier over a stable alphabet.
pub fn draw_id(rng: RngState, len: usize) -> (String, RngState) {
    let mut id = String::with_capacity(len);
    let mut cursor = rng;
    for _ in 0..len {
        let (value, next) = draw(cursor);
        cursor = next;
        let index = ((value * ID_ALPHABET.len() as f64) as usize).min(ID_ALPHABET.len() - 1);
        id.push(char::from(ID_ALPHABET[index]));
    }
    (id, cursor)
}

/// Deterministic in-place Fisher-Yates shuffle driven by the draw source.
pub fn shuffle<T>(rng: &mut RngState, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
