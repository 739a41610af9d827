//! Bloom filter core
//!
//! Bit array plus double hashing (Kirsch-Mitzenmacher): two seeded xxh3
//! hashes generate all k bit positions for a key, so no key is hashed more
//! than twice regardless of k.

use std::f64::consts::LN_2;

use xxhash_rust::xxh3::xxh3_64_with_seed;

use super::{DEFAULT_CAPACITY, TARGET_FPP};

/// Seeds for the two base hashes feeding double hashing
const SEED_A: u64 = 0x517c_c1b7_2722_0a95;
const SEED_B: u64 = 0x2545_f491_4f6c_dd1d;

/// Space-efficient probabilistic set over string keys
///
/// Sized at construction for an expected number of insertions at a 3%
/// target false-positive rate. The bit array never resizes: inserting far
/// beyond capacity degrades the false-positive rate but is never rejected.
#[derive(Debug, Clone)]
pub struct BloomFilter {
    /// Expected insertions the bit array was sized for
    pub(super) capacity: u64,
    /// Number of bit positions set/tested per key
    pub(super) hash_count: u32,
    /// Total bits in the array (modulus for bit positions)
    pub(super) bit_count: u64,
    /// Bit array packed into 64-bit words
    pub(super) words: Vec<u64>,
}

impl BloomFilter {
    /// Create a filter sized for `capacity` expected insertions
    ///
    /// A capacity of zero is clamped to one rather than rejected.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1) as u64;
        let bit_count = optimal_bit_count(capacity, TARGET_FPP);
        let hash_count = optimal_hash_count(bit_count, capacity);
        let word_count = bit_count.div_ceil(64) as usize;

        Self {
            capacity,
            hash_count,
            bit_count,
            words: vec![0; word_count],
        }
    }

    /// Insert a key
    ///
    /// Inserting the same key again is a no-op in effect: the same bits are
    /// set, and membership tests for the key stay true.
    pub fn insert(&mut self, key: &str) {
        let (h1, h2) = hash_pair(key);

        for i in 0..u64::from(self.hash_count) {
            let bit = h1.wrapping_add(i.wrapping_mul(h2)) % self.bit_count;
            self.words[(bit / 64) as usize] |= 1 << (bit % 64);
        }
    }

    /// Test membership
    ///
    /// Returns:
    /// - `true` — the key was possibly inserted (false positives allowed)
    /// - `false` — the key was certainly never inserted
    pub fn might_contain(&self, key: &str) -> bool {
        let (h1, h2) = hash_pair(key);

        (0..u64::from(self.hash_count)).all(|i| {
            let bit = h1.wrapping_add(i.wrapping_mul(h2)) % self.bit_count;
            self.words[(bit / 64) as usize] & (1 << (bit % 64)) != 0
        })
    }

    /// Expected insertions this filter was sized for
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of bit positions set/tested per key
    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }

    /// Total bits in the array
    pub fn bit_count(&self) -> u64 {
        self.bit_count
    }
}

impl Default for BloomFilter {
    /// A filter sized for 1,000,000 expected insertions
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

// =============================================================================
// Sizing Math
// =============================================================================

/// Bits needed for `capacity` insertions at false-positive rate `fpp`
///
/// m = -n * ln(p) / (ln 2)^2, never less than one word
fn optimal_bit_count(capacity: u64, fpp: f64) -> u64 {
    let bits = -(capacity as f64 * fpp.ln()) / (LN_2 * LN_2);
    (bits.ceil() as u64).max(64)
}

/// Hash count minimizing the false-positive rate at the given bit ratio
///
/// k = (m / n) * ln 2
fn optimal_hash_count(bit_count: u64, capacity: u64) -> u32 {
    let k = (bit_count as f64 / capacity as f64) * LN_2;
    (k.round() as u32).max(1)
}

/// Two independent base hashes over the key's UTF-8 bytes
fn hash_pair(key: &str) -> (u64, u64) {
    let bytes = key.as_bytes();
    (
        xxh3_64_with_seed(bytes, SEED_A),
        xxh3_64_with_seed(bytes, SEED_B),
    )
}
