//! Deterministic seeded shuffling.
//!
//! Reproducibility is a hard requirement for the suggestion list: the same
//! (date, user, refresh counter) tuple must produce the same order on every
//! invocation, on every machine. So no `rand`, no OS entropy — a string seed
//! is hashed with a DJB2-style rolling hash and fed to mulberry32, a tiny
//! 32-bit generator with a single additive state word and one avalanche mix
//! per draw.
//!
//! This is the one shuffle/pick utility for the whole app; anything that
//! wants "random" rotation (tip of the day, suggestion order) derives it
//! from a seed string instead of calling a nondeterministic source.

/// Hash a seed string to a 32-bit integer (DJB2 variant: multiply by 33,
/// XOR the byte). Pure and stable across processes.
pub fn hash_seed(input: &str) -> u32 {
    let mut hash: u32 = 5381;
    for byte in input.bytes() {
        hash = hash.wrapping_mul(33) ^ u32::from(byte);
    }
    hash
}

/// mulberry32 generator.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// One draw: bump the state, run the avalanche mix.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut z = self.state;
        z = (z ^ (z >> 15)).wrapping_mul(z | 1);
        z ^= z.wrapping_add((z ^ (z >> 7)).wrapping_mul(z | 61));
        z ^ (z >> 14)
    }

    /// A draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// A uniform index in `[0, n)`. `n` must be non-zero.
    pub fn index_below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        (self.next_f64() * n as f64) as usize
    }

    /// In-place Fisher-Yates shuffle, high index down.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }
}

/// Shuffle a slice into a new vec, seeded by a string.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: &str) -> Vec<T> {
    let mut out = items.to_vec();
    Mulberry32::from_seed_str(seed).shuffle(&mut out);
    out
}

/// Pick one element, seeded by a string. Same seed, same pick. Used for
/// day-keyed rotation (e.g. the tip of the day).
pub fn seeded_pick<'a, T>(items: &'a [T], seed: &str) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = Mulberry32::from_seed_str(seed).index_below(items.len());
    items.get(idx)
}
