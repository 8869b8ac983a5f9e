/// Polynomial rolling hash for fixed-length symbol windows.
///
/// A window `s[0..k]` hashes to `s[0]*B^(k-1) + s[1]*B^(k-2) + ... + s[k-1]`
/// in wrapping (mod 2^64) arithmetic. Supports O(1) sliding window updates:
/// remove oldest symbol, add new symbol.
const BASE: u64 = 257;

#[derive(Debug)]
pub struct RollingHash {
    hash: u64,
    /// BASE^(k-1): the positional weight of the window's oldest symbol.
    head_weight: u64,
}

impl RollingHash {
    /// Compute the hash of an initial window in O(len) time.
    pub fn new(window: &[u8]) -> Self {
        let mut hash: u64 = 0;
        let mut head_weight: u64 = 1;
        for &sym in window {
            hash = hash.wrapping_mul(BASE).wrapping_add(sym as u64);
        }
        for _ in 1..window.len() {
            head_weight = head_weight.wrapping_mul(BASE);
        }
        Self { hash, head_weight }
    }

    /// Slide the window: remove `removed` from the front, add `added` at the
    /// back. `removed` must be the symbol the window actually starts with;
    /// only its hash contribution is tracked here, so the caller is trusted.
    pub fn slide(&mut self, removed: u8, added: u8) {
        self.hash = self
            .hash
            .wrapping_sub(self.head_weight.wrapping_mul(removed as u64))
            .wrapping_mul(BASE)
            .wrapping_add(added as u64);
    }

    pub fn digest(&self) -> u64 {
        self.hash
    }
}
